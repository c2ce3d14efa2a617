/// Compile-time layout tokens — not user-overridable
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StyleTokens {
    pub spacing_4: i32,
    pub spacing_8: i32,
    pub spacing_12: i32,
    pub spacing_16: i32,
    pub spacing_24: i32,
    pub card_radius: u16,
    pub panel_radius: u16,
    pub control_radius: u16,
    pub border_width: u16,
    pub topbar_height: i32,
    pub tile_width: i32,
    pub tile_height: i32,
    pub card_iphone_width: i32,
    pub card_iphone_height: i32,
    pub card_fourthree_width: i32,
    pub card_fourthree_height: i32,
    pub timeline_width: i32,
    pub window_default_width: i32,
    pub window_default_height: i32,
    pub motion_standard_ms: u32,
    pub motion_hover_ms: u32,
}

pub const LAYOUT_TOKENS: StyleTokens = StyleTokens {
    spacing_4: 4,
    spacing_8: 8,
    spacing_12: 12,
    spacing_16: 16,
    spacing_24: 24,
    card_radius: 14,
    panel_radius: 18,
    control_radius: 12,
    border_width: 1,
    topbar_height: 64,
    tile_width: 340,
    tile_height: 240,
    card_iphone_width: 280,
    card_iphone_height: 560,
    card_fourthree_width: 440,
    card_fourthree_height: 330,
    timeline_width: 360,
    window_default_width: 1280,
    window_default_height: 840,
    motion_standard_ms: 220,
    motion_hover_ms: 160,
};

impl StyleTokens {
    /// Measured size of the preview card for an aspect preset; the card
    /// is fixed-size per preset, so placement can use these directly.
    pub fn card_size(&self, aspect: crate::preview::PreviewAspect) -> (i32, i32) {
        match aspect {
            crate::preview::PreviewAspect::Iphone => {
                (self.card_iphone_width, self.card_iphone_height)
            }
            crate::preview::PreviewAspect::FourThree => {
                (self.card_fourthree_width, self.card_fourthree_height)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::LAYOUT_TOKENS;
    use crate::preview::PreviewAspect;

    #[test]
    fn card_presets_keep_their_orientations() {
        let (iw, ih) = LAYOUT_TOKENS.card_size(PreviewAspect::Iphone);
        let (fw, fh) = LAYOUT_TOKENS.card_size(PreviewAspect::FourThree);
        assert!(ih > iw, "iphone preset is portrait");
        assert!(fw > fh, "fourthree preset is landscape");
    }

    #[test]
    fn layout_tokens_match_showcase_dimensions() {
        let tokens = LAYOUT_TOKENS;
        assert_eq!(tokens.topbar_height, 64);
        assert_eq!(tokens.window_default_width, 1280);
        assert!(tokens.tile_width > 0 && tokens.tile_height > 0);
    }
}
