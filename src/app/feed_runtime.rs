use std::cell::{Cell, RefCell};
use std::rc::Rc;

use gtk4::prelude::*;
use gtk4::{
    gdk, glib, AccessibleTristate, EventControllerFocus, EventControllerKey,
    EventControllerMotion, EventSequenceState, GestureClick,
};

use crate::feed::{should_autoplay, topbar_over_tiles, visible_fraction, TilePressState};
use crate::geometry::RectF;

use super::page::{PageWidgets, TileWidgets};
use super::preview_runtime::widget_rect;
use super::FrameLoops;

pub(super) fn attach(page: &Rc<PageWidgets>, frame_loops: &FrameLoops) {
    if page.tiles.is_empty() {
        tracing::debug!("no feed tiles; feed behavior disabled");
        return;
    }

    for tile in &page.tiles {
        attach_press(tile);
    }

    attach_visibility_scan(page, frame_loops);
}

fn sync_press(root: &gtk4::Box, state: &TilePressState) {
    if state.is_pressed() {
        root.add_css_class("is-pressed");
    } else {
        root.remove_css_class("is-pressed");
    }
    let pressed = if state.is_pressed() {
        AccessibleTristate::True
    } else {
        AccessibleTristate::False
    };
    root.update_state(&[gtk4::accessible::State::Pressed(pressed)]);

    if state.is_hovered() {
        root.add_css_class("is-hovered");
    } else {
        root.remove_css_class("is-hovered");
    }
}

fn attach_press(tile: &TileWidgets) {
    let state = Rc::new(RefCell::new(TilePressState::default()));
    let root = tile.root.clone();

    let click = GestureClick::new();
    click.set_button(gdk::BUTTON_PRIMARY);
    {
        let state = state.clone();
        let root = root.clone();
        click.connect_pressed(move |gesture, _, _, _| {
            gesture.set_state(EventSequenceState::Claimed);
            if state.borrow_mut().pointer_press() {
                sync_press(&root, &state.borrow());
            }
        });
    }
    {
        let state = state.clone();
        let root = root.clone();
        click.connect_released(move |_, _, _, _| {
            if state.borrow_mut().release() {
                sync_press(&root, &state.borrow());
            }
        });
    }
    {
        let state = state.clone();
        let root = root.clone();
        click.connect_stopped(move |_| {
            if state.borrow_mut().release() {
                sync_press(&root, &state.borrow());
            }
        });
    }
    root.add_controller(click);

    let keys = EventControllerKey::new();
    {
        let state = state.clone();
        let root = root.clone();
        keys.connect_key_pressed(move |_, key, _, _| match key {
            gdk::Key::space | gdk::Key::Return | gdk::Key::KP_Enter => {
                if state.borrow_mut().key_down() {
                    sync_press(&root, &state.borrow());
                }
                glib::Propagation::Stop
            }
            _ => glib::Propagation::Proceed,
        });
    }
    {
        let state = state.clone();
        let root = root.clone();
        keys.connect_key_released(move |_, key, _, _| {
            if matches!(key, gdk::Key::space | gdk::Key::Return | gdk::Key::KP_Enter)
                && state.borrow_mut().key_up()
            {
                sync_press(&root, &state.borrow());
            }
        });
    }
    root.add_controller(keys);

    let motion = EventControllerMotion::new();
    {
        let state = state.clone();
        let root = root.clone();
        motion.connect_enter(move |_, _, _| {
            if state.borrow_mut().hover_enter() {
                sync_press(&root, &state.borrow());
            }
        });
    }
    {
        let state = state.clone();
        let root = root.clone();
        motion.connect_leave(move |_| {
            // leaving mid-press must not strand the pressed state
            let changed = {
                let mut state = state.borrow_mut();
                let unhovered = state.hover_leave();
                state.release() || unhovered
            };
            if changed {
                sync_press(&root, &state.borrow());
            }
        });
    }
    root.add_controller(motion);

    // losing focus mid-press must not leave the tile stuck pressed
    let focus = EventControllerFocus::new();
    {
        let state = state.clone();
        let root = root.clone();
        focus.connect_leave(move |_| {
            if state.borrow_mut().release() {
                sync_press(&root, &state.borrow());
            }
        });
    }
    root.add_controller(focus);
}

#[derive(Default)]
struct TileScanState {
    playing: Cell<bool>,
    error_logged: Cell<bool>,
}

/// Scroll and resize mark the scan dirty; a persistent frame callback
/// runs at most one scan per frame, toggling tile autoplay and the
/// topbar blend from measured geometry.
fn attach_visibility_scan(page: &Rc<PageWidgets>, frame_loops: &FrameLoops) {
    let pending = Rc::new(Cell::new(true));
    let scan_states: Rc<Vec<TileScanState>> =
        Rc::new(page.tiles.iter().map(|_| TileScanState::default()).collect());

    {
        let pending = pending.clone();
        page.scroller
            .vadjustment()
            .connect_value_changed(move |_| pending.set(true));
    }
    {
        let pending = pending.clone();
        page.fog_area.connect_resize(move |_, _, _| pending.set(true));
    }

    let scan_page = page.clone();
    let handle = page.window.add_tick_callback(move |_, _| {
        if pending.replace(false) {
            run_scan(&scan_page, &scan_states);
        }
        glib::ControlFlow::Continue
    });
    frame_loops.borrow_mut().push(handle);
}

fn run_scan(page: &Rc<PageWidgets>, scan_states: &Rc<Vec<TileScanState>>) {
    let width = page.window.width();
    let height = page.window.height();
    if width <= 0 || height <= 0 {
        return;
    }
    let viewport = RectF::new(0.0, 0.0, width as f64, height as f64);

    // the media box is what counts, not the padded tile with its caption
    let mut tile_rects = Vec::with_capacity(page.tiles.len());
    for (tile, state) in page.tiles.iter().zip(scan_states.iter()) {
        let Some(rect) = widget_rect(&tile.media, &page.window) else {
            continue;
        };
        tile_rects.push(rect);

        let Some(stream) = tile.stream.as_ref() else {
            continue;
        };
        if let Some(err) = stream.error() {
            if !state.error_logged.replace(true) {
                tracing::debug!(%err, "tile stream failed; autoplay skipped");
            }
            continue;
        }
        let autoplay = should_autoplay(visible_fraction(&rect, &viewport));
        if autoplay && !state.playing.get() {
            stream.play();
            state.playing.set(true);
        } else if !autoplay && state.playing.get() {
            stream.pause();
            state.playing.set(false);
        }
    }

    let targets: Vec<RectF> = page
        .topbar_regions
        .iter()
        .filter_map(|region| widget_rect(region, &page.window))
        .collect();
    if topbar_over_tiles(&targets, &tile_rects) {
        page.topbar.add_css_class("is-over-tiles");
    } else {
        page.topbar.remove_css_class("is-over-tiles");
    }
}

#[cfg(test)]
mod tests {
    use super::TileScanState;

    #[test]
    fn stream_error_is_reported_only_once() {
        let state = TileScanState::default();
        assert!(!state.error_logged.replace(true));
        assert!(state.error_logged.replace(true));
        assert!(state.error_logged.replace(true));
    }
}
