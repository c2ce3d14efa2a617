pub mod media;
pub mod style;
pub mod widgets;

pub use media::{build_modal_media, build_preview_media, PreviewMediaHandle};
pub use style::{StyleTokens, LAYOUT_TOKENS};
pub use widgets::{chip_label, modal_close_button, timeline_item_button, topbar_region};
