use crate::config::TimelineEntry;
use crate::preview::PreviewAspect;

/// The tap modal only participates below this window width.
pub const MOBILE_BREAKPOINT: i32 = 900;

pub fn is_mobile_width(width: i32) -> bool {
    width < MOBILE_BREAKPOINT
}

/// Matches the original `.mp4` check: case-insensitive extension with an
/// optional query string after it.
pub fn is_video_source(media: &str) -> bool {
    let path = media.split('?').next().unwrap_or(media);
    path.to_ascii_lowercase().ends_with(".mp4")
}

/// What a tap on a timeline item asks the modal to show.
#[derive(Debug, Clone, PartialEq)]
pub struct ModalRequest {
    pub media: String,
    pub aspect: PreviewAspect,
    pub alt: String,
}

impl ModalRequest {
    /// Items without mobile media are not tappable.
    pub fn from_entry(entry: &TimelineEntry) -> Option<Self> {
        let media = entry.mobile_media.clone()?;
        let aspect = PreviewAspect::parse(entry.mobile_type.as_deref());
        let alt = entry
            .mobile_alt
            .clone()
            .unwrap_or_else(|| entry.label.trim().to_string());
        Some(Self { media, aspect, alt })
    }
}

/// Open/closed flag for the modal; the rendered media element lives in
/// the widget tree and is cleared by the runtime on close. Transitions
/// report whether anything changed so close paths stay idempotent.
#[derive(Debug, Clone, Copy, Default)]
pub struct ModalShell {
    open: bool,
}

impl ModalShell {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn open(&mut self) -> bool {
        let changed = !self.open;
        self.open = true;
        changed
    }

    pub fn close(&mut self) -> bool {
        let changed = self.open;
        self.open = false;
        changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry() -> TimelineEntry {
        TimelineEntry {
            label: "  Gallery site  ".to_string(),
            media_type: None,
            media_src: None,
            aspect: None,
            role: None,
            mobile_media: Some("clip.mp4?v=2".to_string()),
            mobile_type: None,
            mobile_alt: None,
        }
    }

    #[test]
    fn breakpoint_is_exclusive_at_900() {
        assert!(is_mobile_width(899));
        assert!(!is_mobile_width(900));
        assert!(!is_mobile_width(1400));
    }

    #[test]
    fn mp4_sources_select_the_video_branch() {
        assert!(is_video_source("clip.mp4"));
        assert!(is_video_source("clip.MP4"));
        assert!(is_video_source("clip.mp4?v=2"));
        assert!(!is_video_source("shot.png"));
        assert!(!is_video_source("shot.png?cache=clip.mp4"));
        assert!(!is_video_source("clip.mp4.png"));
    }

    #[test]
    fn request_defaults_type_and_alt() {
        let request = ModalRequest::from_entry(&entry()).expect("entry has mobile media");
        assert_eq!(request.aspect, PreviewAspect::Iphone);
        assert_eq!(request.alt, "Gallery site");
        assert_eq!(request.media, "clip.mp4?v=2");
    }

    #[test]
    fn request_requires_mobile_media() {
        let mut no_media = entry();
        no_media.mobile_media = None;
        assert_eq!(ModalRequest::from_entry(&no_media), None);
    }

    #[test]
    fn explicit_type_and_alt_win_over_defaults() {
        let mut explicit = entry();
        explicit.mobile_type = Some("fourthree".to_string());
        explicit.mobile_alt = Some("Reel".to_string());
        let request = ModalRequest::from_entry(&explicit).expect("entry has mobile media");
        assert_eq!(request.aspect, PreviewAspect::FourThree);
        assert_eq!(request.alt, "Reel");
    }

    #[test]
    fn shell_transitions_are_idempotent() {
        let mut shell = ModalShell::default();
        assert!(shell.open());
        assert!(!shell.open());
        assert!(shell.is_open());
        assert!(shell.close());
        assert!(!shell.close());
        assert!(!shell.is_open());
    }
}
