use std::cell::{Cell, RefCell};
use std::rc::Rc;

use gtk4::prelude::*;
use gtk4::{
    gdk, glib, graphene, ApplicationWindow, EventControllerFocus, EventControllerMotion,
    GestureClick, MediaFile, PropagationPhase, Widget,
};

use crate::config::TimelineEntry;
use crate::geometry::{RectF, SizeF};
use crate::preview::{
    compute_card_position, MediaKind, PlacementContext, PointerSample, PreviewAspect, PreviewShell,
};
use crate::ui::{build_preview_media, StyleTokens};

use super::page::PageWidgets;

/// Shared hover-preview state: the event shell, the aspect preset the
/// card currently wears, and the stream handle paused on hide.
struct PreviewRuntime {
    shell: RefCell<PreviewShell>,
    aspect: Cell<PreviewAspect>,
    stream: RefCell<Option<MediaFile>>,
}

pub(super) fn attach(page: &Rc<PageWidgets>, tokens: StyleTokens) {
    attach_info_panel(page);

    if page.timeline_items.is_empty() {
        tracing::debug!("no timeline items; hover preview disabled");
        return;
    }

    let runtime = Rc::new(PreviewRuntime {
        shell: RefCell::new(PreviewShell::new(SizeF::new(
            tokens.window_default_width as f64,
            tokens.window_default_height as f64,
        ))),
        aspect: Cell::new(PreviewAspect::default()),
        stream: RefCell::new(None),
    });

    for (index, (button, entry)) in page.timeline_items.iter().enumerate() {
        attach_item(page, &runtime, tokens, index, button, entry);
    }

    // keep the card pinned through viewport resizes
    let resize_page = page.clone();
    let resize_runtime = runtime.clone();
    page.fog_area.connect_resize(move |_, _, _| {
        let active = resize_runtime.shell.borrow().active_item();
        let Some(index) = active else { return };
        let Some((button, _)) = resize_page.timeline_items.get(index) else {
            return;
        };
        let Some(item) = widget_rect(button, &resize_page.window) else {
            return;
        };
        let viewport = viewport_size(&resize_page, tokens);
        let sample = resize_runtime.shell.borrow().resize_sample(&item, viewport.height);
        if let Some(sample) = sample {
            reposition(&resize_page, &resize_runtime, tokens, sample, &item);
        }
    });
}

fn attach_item(
    page: &Rc<PageWidgets>,
    runtime: &Rc<PreviewRuntime>,
    tokens: StyleTokens,
    index: usize,
    button: &gtk4::Button,
    entry: &TimelineEntry,
) {
    let entry = entry.clone();

    // a primary press records the true pointer before the click moves
    // focus, so the focus handler does not jump to the item-center
    // fallback; the flag clears on the next main-loop pass
    let press = GestureClick::new();
    press.set_button(gdk::BUTTON_PRIMARY);
    press.set_propagation_phase(PropagationPhase::Capture);
    {
        let page = page.clone();
        let runtime = runtime.clone();
        let button = button.clone();
        press.connect_pressed(move |_, _, x, y| {
            if let Some(sample) = pointer_sample(&button, &page.window, x, y) {
                runtime.shell.borrow_mut().pointer_down(sample);
                let runtime = runtime.clone();
                glib::idle_add_local_once(move || {
                    runtime.shell.borrow_mut().clear_focus_suppression();
                });
            }
        });
    }
    button.add_controller(press);

    let motion = EventControllerMotion::new();
    {
        let page = page.clone();
        let runtime = runtime.clone();
        let button = button.clone();
        let entry = entry.clone();
        motion.connect_enter(move |_, x, y| {
            let Some(sample) = pointer_sample(&button, &page.window, x, y) else {
                return;
            };
            runtime.shell.borrow_mut().pointer_enter(index, sample);
            show_entry(&page, &runtime, tokens, &entry);
            if let Some(item) = widget_rect(&button, &page.window) {
                reposition(&page, &runtime, tokens, sample, &item);
            }
        });
    }
    {
        let page = page.clone();
        let runtime = runtime.clone();
        let button = button.clone();
        motion.connect_motion(move |_, x, y| {
            let Some(sample) = pointer_sample(&button, &page.window, x, y) else {
                return;
            };
            runtime.shell.borrow_mut().pointer_move(sample);
            if !runtime.shell.borrow().is_visible() {
                return;
            }
            if let Some(item) = widget_rect(&button, &page.window) {
                reposition(&page, &runtime, tokens, sample, &item);
            }
        });
    }
    {
        let page = page.clone();
        let runtime = runtime.clone();
        motion.connect_leave(move |_| {
            runtime.shell.borrow_mut().pointer_leave();
            hide_preview(&page, &runtime);
        });
    }
    button.add_controller(motion);

    let focus = EventControllerFocus::new();
    {
        let page = page.clone();
        let runtime = runtime.clone();
        let button = button.clone();
        let entry = entry.clone();
        focus.connect_enter(move |_| {
            runtime.shell.borrow_mut().focus(index);
            show_entry(&page, &runtime, tokens, &entry);
            let Some(item) = widget_rect(&button, &page.window) else {
                return;
            };
            let viewport = viewport_size(&page, tokens);
            let sample = runtime.shell.borrow().focus_sample(&item, viewport.height);
            reposition(&page, &runtime, tokens, sample, &item);
        });
    }
    {
        let page = page.clone();
        let runtime = runtime.clone();
        focus.connect_leave(move |_| {
            hide_preview(&page, &runtime);
        });
    }
    button.add_controller(focus);
}

fn show_entry(
    page: &Rc<PageWidgets>,
    runtime: &Rc<PreviewRuntime>,
    tokens: StyleTokens,
    entry: &TimelineEntry,
) {
    let aspect = PreviewAspect::parse(entry.aspect.as_deref());
    apply_aspect(page, tokens, runtime, aspect);

    while let Some(child) = page.preview_media.first_child() {
        page.preview_media.remove(&child);
    }
    let stream = entry.media_src.as_deref().and_then(|src| {
        let handle = build_preview_media(MediaKind::parse(entry.media_type.as_deref()), src);
        page.preview_media.append(&handle.widget);
        handle.stream
    });
    *runtime.stream.borrow_mut() = stream;

    let chip = entry.role.clone().unwrap_or_default();
    page.preview_chip.set_text(&chip);
    page.preview_chip.set_visible(!chip.is_empty());
    runtime.shell.borrow_mut().show(&chip);

    page.preview_layer.add_css_class("is-visible");
    page.preview_layer
        .update_state(&[gtk4::accessible::State::Hidden(false)]);
}

fn hide_preview(page: &Rc<PageWidgets>, runtime: &Rc<PreviewRuntime>) {
    if !runtime.shell.borrow().is_visible() {
        return;
    }
    runtime.shell.borrow_mut().hide();

    page.preview_layer.remove_css_class("is-visible");
    page.preview_layer
        .update_state(&[gtk4::accessible::State::Hidden(true)]);
    page.preview_chip.set_text("");

    // the media element stays mounted so a re-hover resumes instantly
    if let Some(stream) = runtime.stream.borrow().as_ref() {
        stream.pause();
    }
}

fn apply_aspect(
    page: &Rc<PageWidgets>,
    tokens: StyleTokens,
    runtime: &Rc<PreviewRuntime>,
    aspect: PreviewAspect,
) {
    for preset in [PreviewAspect::Iphone, PreviewAspect::FourThree] {
        page.preview_card.remove_css_class(preset.size_class());
        page.preview_media_wrap.remove_css_class(preset.aspect_class());
    }
    page.preview_card.add_css_class(aspect.size_class());
    page.preview_media_wrap.add_css_class(aspect.aspect_class());

    let (width, height) = tokens.card_size(aspect);
    page.preview_card.set_size_request(width, height);
    runtime.aspect.set(aspect);
}

fn reposition(
    page: &Rc<PageWidgets>,
    runtime: &Rc<PreviewRuntime>,
    tokens: StyleTokens,
    sample: PointerSample,
    item: &RectF,
) {
    let viewport = viewport_size(page, tokens);
    let container_left = widget_rect(&page.timeline_box, &page.window)
        .map(|rect| rect.left())
        .unwrap_or(0.0);
    let (width, height) = tokens.card_size(runtime.aspect.get());

    let ctx = PlacementContext {
        viewport,
        item: *item,
        container_left,
        card: SizeF::new(width as f64, height as f64),
    };
    let position = compute_card_position(sample, runtime.aspect.get(), &ctx);
    page.preview_layer
        .move_(&page.preview_card, position.x, position.y);
}

fn attach_info_panel(page: &Rc<PageWidgets>) {
    {
        let page = page.clone();
        let toggle = page.info_toggle.clone();
        toggle.connect_clicked(move |toggle| {
            let open = !page.info_panel.is_visible();
            page.info_panel.set_visible(open);
            page.info_backdrop.set_visible(open);
            toggle.update_state(&[gtk4::accessible::State::Expanded(Some(open))]);
        });
    }

    let backdrop_click = GestureClick::new();
    {
        let page = page.clone();
        backdrop_click.connect_released(move |_, _, _, _| {
            page.info_panel.set_visible(false);
            page.info_backdrop.set_visible(false);
            page.info_toggle
                .update_state(&[gtk4::accessible::State::Expanded(Some(false))]);
        });
    }
    page.info_backdrop.add_controller(backdrop_click);
}

/// Widget bounds in window coordinates, the frame all placement math
/// runs in.
pub(super) fn widget_rect(widget: &impl IsA<Widget>, window: &ApplicationWindow) -> Option<RectF> {
    let bounds = widget.compute_bounds(window)?;
    Some(RectF::new(
        bounds.x() as f64,
        bounds.y() as f64,
        bounds.width() as f64,
        bounds.height() as f64,
    ))
}

fn pointer_sample(
    widget: &impl IsA<Widget>,
    window: &ApplicationWindow,
    x: f64,
    y: f64,
) -> Option<PointerSample> {
    let point = widget.compute_point(window, &graphene::Point::new(x as f32, y as f32))?;
    Some(PointerSample::new(point.x() as f64, point.y() as f64))
}

fn viewport_size(page: &Rc<PageWidgets>, tokens: StyleTokens) -> SizeF {
    let width = page.window.width();
    let height = page.window.height();
    if width > 0 && height > 0 {
        SizeF::new(width as f64, height as f64)
    } else {
        SizeF::new(
            tokens.window_default_width as f64,
            tokens.window_default_height as f64,
        )
    }
}
