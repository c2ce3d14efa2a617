/// Press and hover state for one feed tile, mirrored into a CSS class
/// and the accessible pressed state by the runtime. Pointer and keyboard
/// share a single pressed flag, as only the visual matters; key repeat
/// is filtered with the held flag since the toolkit re-fires key-pressed
/// while a key is held.
#[derive(Debug, Clone, Copy, Default)]
pub struct TilePressState {
    pressed: bool,
    key_held: bool,
    hovered: bool,
}

impl TilePressState {
    pub fn is_pressed(&self) -> bool {
        self.pressed
    }

    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    /// Returns whether the pressed flag changed.
    pub fn pointer_press(&mut self) -> bool {
        let changed = !self.pressed;
        self.pressed = true;
        changed
    }

    /// Shared by pointer-up, cancel, pointer-leave and blur.
    pub fn release(&mut self) -> bool {
        self.key_held = false;
        let changed = self.pressed;
        self.pressed = false;
        changed
    }

    /// Activation key went down; repeats while held are ignored.
    pub fn key_down(&mut self) -> bool {
        if self.key_held {
            return false;
        }
        self.key_held = true;
        self.pointer_press()
    }

    pub fn key_up(&mut self) -> bool {
        self.release()
    }

    pub fn hover_enter(&mut self) -> bool {
        let changed = !self.hovered;
        self.hovered = true;
        changed
    }

    pub fn hover_leave(&mut self) -> bool {
        let changed = self.hovered;
        self.hovered = false;
        changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pointer_press_and_release_round_trip() {
        let mut state = TilePressState::default();
        assert!(state.pointer_press());
        assert!(state.is_pressed());
        assert!(!state.pointer_press());

        assert!(state.release());
        assert!(!state.is_pressed());
        assert!(!state.release());
    }

    #[test]
    fn key_repeat_does_not_re_press() {
        let mut state = TilePressState::default();
        assert!(state.key_down());
        assert!(!state.key_down());
        assert!(!state.key_down());
        assert!(state.is_pressed());

        assert!(state.key_up());
        assert!(state.key_down());
    }

    #[test]
    fn blur_releases_a_key_press() {
        let mut state = TilePressState::default();
        state.key_down();
        state.release();
        assert!(!state.is_pressed());
        // held flag cleared too, so the next key press registers
        assert!(state.key_down());
    }

    #[test]
    fn pointer_leave_mid_press_releases_everything() {
        let mut state = TilePressState::default();
        state.hover_enter();
        state.pointer_press();

        // leave runs both transitions, so a gesture that never reports
        // its release cannot strand the pressed state
        let unhovered = state.hover_leave();
        let released = state.release();
        assert!(unhovered && released);
        assert!(!state.is_pressed());
        assert!(!state.is_hovered());
        assert!(!state.release());
    }

    #[test]
    fn hover_flags_toggle_independently_of_press() {
        let mut state = TilePressState::default();
        assert!(state.hover_enter());
        assert!(!state.hover_enter());
        state.pointer_press();
        assert!(state.hover_leave());
        assert!(state.is_pressed());
        assert!(!state.is_hovered());
    }
}
