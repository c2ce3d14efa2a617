mod press;
mod visibility;

pub use press::TilePressState;
pub use visibility::{
    should_autoplay, topbar_over_tiles, visible_fraction, AUTOPLAY_THRESHOLD,
};
