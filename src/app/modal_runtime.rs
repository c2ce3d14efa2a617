use std::cell::RefCell;
use std::rc::Rc;

use gtk4::prelude::*;
use gtk4::{gdk, glib, EventControllerKey, GestureClick};

use crate::modal::{is_mobile_width, ModalRequest, ModalShell};
use crate::preview::PreviewAspect;
use crate::ui::build_modal_media;

use super::page::PageWidgets;

pub(super) fn attach(page: &Rc<PageWidgets>) {
    let shell = Rc::new(RefCell::new(ModalShell::default()));

    for (button, entry) in &page.timeline_items {
        let Some(request) = ModalRequest::from_entry(entry) else {
            continue;
        };

        let tap = GestureClick::new();
        tap.set_button(gdk::BUTTON_PRIMARY);
        {
            let page = page.clone();
            let shell = shell.clone();
            tap.connect_released(move |_, _, _, _| {
                if !is_mobile_width(page.window.width()) {
                    return;
                }
                open_modal(&page, &shell, &request);
            });
        }
        button.add_controller(tap);
    }

    {
        let page_ref = page.clone();
        let shell = shell.clone();
        page.modal_close.connect_clicked(move |_| {
            close_modal(&page_ref, &shell);
        });
    }

    let backdrop_tap = GestureClick::new();
    {
        let page = page.clone();
        let shell = shell.clone();
        backdrop_tap.connect_released(move |_, _, _, _| {
            close_modal(&page, &shell);
        });
    }
    page.modal_backdrop.add_controller(backdrop_tap);

    let keys = EventControllerKey::new();
    {
        let page_ref = page.clone();
        let shell = shell.clone();
        keys.connect_key_pressed(move |_, key, _, _| {
            if key == gdk::Key::Escape && shell.borrow().is_open() {
                close_modal(&page_ref, &shell);
                return glib::Propagation::Stop;
            }
            glib::Propagation::Proceed
        });
    }
    page.window.add_controller(keys);

    // growing past the breakpoint dismisses the modal, hover takes over
    {
        let page_ref = page.clone();
        let shell = shell.clone();
        page.fog_area.connect_resize(move |_, width, _| {
            if !is_mobile_width(width) && shell.borrow().is_open() {
                close_modal(&page_ref, &shell);
            }
        });
    }
}

/// Renders the tapped item into the modal frame. A tap on another item
/// while open swaps the content in place.
fn open_modal(page: &Rc<PageWidgets>, shell: &Rc<RefCell<ModalShell>>, request: &ModalRequest) {
    while let Some(child) = page.modal_frame.first_child() {
        page.modal_frame.remove(&child);
    }
    for preset in [PreviewAspect::Iphone, PreviewAspect::FourThree] {
        page.modal_frame.remove_css_class(preset.modal_class());
    }
    page.modal_frame.add_css_class(request.aspect.modal_class());
    page.modal_frame.append(&build_modal_media(request));

    if shell.borrow_mut().open() {
        page.modal.add_css_class("is-open");
        page.modal.set_visible(true);
        page.modal
            .update_state(&[gtk4::accessible::State::Hidden(false)]);
        page.scroller.set_sensitive(false);
        page.modal_close.grab_focus();
        tracing::debug!(media = %request.media, "mobile modal opened");
    }
}

fn close_modal(page: &Rc<PageWidgets>, shell: &Rc<RefCell<ModalShell>>) {
    if !shell.borrow_mut().close() {
        return;
    }
    page.modal.remove_css_class("is-open");
    page.modal.set_visible(false);
    page.modal
        .update_state(&[gtk4::accessible::State::Hidden(true)]);
    while let Some(child) = page.modal_frame.first_child() {
        page.modal_frame.remove(&child);
    }
    page.scroller.set_sensitive(true);
}
