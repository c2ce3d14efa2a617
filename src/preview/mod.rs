mod placement;
mod shell;

pub use placement::{
    compute_card_position, focus_fallback_sample, normalized_pointer, PlacementContext,
    PointerSample,
};
pub use shell::PreviewShell;

/// The two visual presets a preview target can request. Anything other
/// than an explicit `"fourthree"` resolves to the tall phone preset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PreviewAspect {
    #[default]
    Iphone,
    FourThree,
}

impl PreviewAspect {
    pub fn parse(value: Option<&str>) -> Self {
        match value {
            Some("fourthree") => Self::FourThree,
            _ => Self::Iphone,
        }
    }

    pub fn aspect_class(self) -> &'static str {
        match self {
            Self::Iphone => "aspect-iphone",
            Self::FourThree => "aspect-fourthree",
        }
    }

    pub fn size_class(self) -> &'static str {
        match self {
            Self::Iphone => "size-iphone",
            Self::FourThree => "size-fourthree",
        }
    }

    pub fn modal_class(self) -> &'static str {
        match self {
            Self::Iphone => "is-iphone",
            Self::FourThree => "is-fourthree",
        }
    }
}

/// Media kind declared by a preview target; unknown values fall back to
/// treating the source as an image.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MediaKind {
    #[default]
    Image,
    Video,
}

impl MediaKind {
    pub fn parse(value: Option<&str>) -> Self {
        match value {
            Some("video") => Self::Video,
            _ => Self::Image,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aspect_parse_defaults_to_iphone() {
        assert_eq!(PreviewAspect::parse(None), PreviewAspect::Iphone);
        assert_eq!(PreviewAspect::parse(Some("iphone")), PreviewAspect::Iphone);
        assert_eq!(PreviewAspect::parse(Some("weird")), PreviewAspect::Iphone);
        assert_eq!(
            PreviewAspect::parse(Some("fourthree")),
            PreviewAspect::FourThree
        );
    }

    #[test]
    fn media_kind_parse_defaults_to_image() {
        assert_eq!(MediaKind::parse(None), MediaKind::Image);
        assert_eq!(MediaKind::parse(Some("video")), MediaKind::Video);
        assert_eq!(MediaKind::parse(Some("gif")), MediaKind::Image);
    }
}
