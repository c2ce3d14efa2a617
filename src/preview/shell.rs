use crate::geometry::{RectF, SizeF};

use super::placement::{focus_fallback_sample, PointerSample};

/// Per-session preview state: the last real pointer sample, which item
/// currently owns the card, and the short-lived flag that keeps a
/// click-driven focus event from repositioning with a stale fallback.
/// All transitions are idempotent so repeated or out-of-order events
/// cannot corrupt the view state.
#[derive(Debug, Clone)]
pub struct PreviewShell {
    last_pointer: PointerSample,
    suppress_focus_position: bool,
    visible: bool,
    hovering: bool,
    active_item: Option<usize>,
    chip: String,
}

impl PreviewShell {
    pub fn new(viewport: SizeF) -> Self {
        Self {
            last_pointer: PointerSample::new(viewport.width / 2.0, viewport.height / 2.0),
            suppress_focus_position: false,
            visible: false,
            hovering: false,
            active_item: None,
            chip: String::new(),
        }
    }

    pub fn last_pointer(&self) -> PointerSample {
        self.last_pointer
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn is_hovering(&self) -> bool {
        self.hovering
    }

    pub fn active_item(&self) -> Option<usize> {
        self.active_item
    }

    pub fn chip(&self) -> &str {
        &self.chip
    }

    /// A primary press records the true pointer and arms suppression so
    /// the focus event the click synthesizes does not jump the card to
    /// the item-center fallback. Cleared on the next main-loop pass.
    pub fn pointer_down(&mut self, sample: PointerSample) {
        self.last_pointer = sample;
        self.suppress_focus_position = true;
    }

    pub fn clear_focus_suppression(&mut self) {
        self.suppress_focus_position = false;
    }

    pub fn pointer_enter(&mut self, item: usize, sample: PointerSample) {
        self.last_pointer = sample;
        self.hovering = true;
        self.active_item = Some(item);
    }

    pub fn pointer_move(&mut self, sample: PointerSample) {
        self.last_pointer = sample;
    }

    pub fn pointer_leave(&mut self) {
        self.hovering = false;
    }

    pub fn focus(&mut self, item: usize) {
        self.active_item = Some(item);
    }

    pub fn show(&mut self, chip: &str) {
        self.visible = true;
        self.chip = chip.to_string();
    }

    pub fn hide(&mut self) {
        self.visible = false;
        self.hovering = false;
        self.active_item = None;
        self.chip.clear();
    }

    /// Sample to position with when an item receives focus: the real
    /// pointer while suppression is armed, the item-center fallback
    /// otherwise.
    pub fn focus_sample(&self, item: &RectF, viewport_height: f64) -> PointerSample {
        if self.suppress_focus_position {
            self.last_pointer
        } else {
            focus_fallback_sample(item, viewport_height)
        }
    }

    /// Sample for a viewport resize while an item is active: the real
    /// pointer while hovering, the item-center fallback for focus-only
    /// sessions, nothing when no item is active.
    pub fn resize_sample(&self, item: &RectF, viewport_height: f64) -> Option<PointerSample> {
        self.active_item?;
        if self.hovering {
            Some(self.last_pointer)
        } else {
            Some(focus_fallback_sample(item, viewport_height))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shell() -> PreviewShell {
        PreviewShell::new(SizeF::new(1000.0, 800.0))
    }

    fn item() -> RectF {
        RectF::new(100.0, 300.0, 200.0, 48.0)
    }

    #[test]
    fn starts_hidden_with_pointer_at_viewport_center() {
        let shell = shell();
        assert!(!shell.is_visible());
        assert_eq!(shell.last_pointer(), PointerSample::new(500.0, 400.0));
        assert_eq!(shell.active_item(), None);
    }

    #[test]
    fn focus_after_pointer_down_keeps_the_real_pointer() {
        let mut shell = shell();
        shell.pointer_down(PointerSample::new(180.0, 320.0));
        assert_eq!(
            shell.focus_sample(&item(), 800.0),
            PointerSample::new(180.0, 320.0)
        );

        shell.clear_focus_suppression();
        assert_eq!(
            shell.focus_sample(&item(), 800.0),
            PointerSample::new(200.0, 416.0)
        );
    }

    #[test]
    fn resize_prefers_the_pointer_while_hovering() {
        let mut shell = shell();
        shell.pointer_enter(0, PointerSample::new(150.0, 310.0));
        assert_eq!(
            shell.resize_sample(&item(), 800.0),
            Some(PointerSample::new(150.0, 310.0))
        );

        shell.pointer_leave();
        shell.focus(0);
        assert_eq!(
            shell.resize_sample(&item(), 800.0),
            Some(PointerSample::new(200.0, 416.0))
        );
    }

    #[test]
    fn resize_without_an_active_item_yields_nothing() {
        assert_eq!(shell().resize_sample(&item(), 800.0), None);
    }

    #[test]
    fn hide_clears_the_session_and_is_idempotent() {
        let mut shell = shell();
        shell.pointer_enter(2, PointerSample::new(150.0, 310.0));
        shell.show("design");
        assert!(shell.is_visible());
        assert_eq!(shell.chip(), "design");

        shell.hide();
        shell.hide();
        assert!(!shell.is_visible());
        assert_eq!(shell.chip(), "");
        assert_eq!(shell.active_item(), None);
    }
}
