use gtk4::prelude::*;
use gtk4::{Align, Button, Label};

/// Role chip shown in the preview card's corner.
pub fn chip_label() -> Label {
    let label = Label::new(None);
    label.add_css_class("preview-chip");
    label.set_halign(Align::Start);
    label.set_valign(Align::End);
    label
}

/// A focusable timeline row; hovering or focusing it drives the preview.
pub fn timeline_item_button(text: &str) -> Button {
    let button = Button::with_label(text);
    button.add_css_class("flat");
    button.add_css_class("timeline-item");
    button.set_halign(Align::Fill);
    button
}

/// One of the three topbar regions the blend scan tests against.
pub fn topbar_region(text: &str, css_class: &str) -> Label {
    let label = Label::new(Some(text));
    label.add_css_class(css_class);
    label.set_valign(Align::Center);
    label
}

/// Close affordance inside the mobile modal; every widget carrying the
/// `modal-close` class closes the modal when clicked.
pub fn modal_close_button() -> Button {
    let button = Button::with_label("Close");
    button.add_css_class("flat");
    button.add_css_class("modal-close");
    button.set_halign(Align::End);
    button
}
