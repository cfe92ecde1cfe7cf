//=========================================================================
// State Tracker
//=========================================================================
//
// Low-level input state tracking with per-frame delta tracking.
//
// Architecture:
//   InputEvent → process_events() → HashSet (keys/buttons held) → query
//
// Frame lifecycle: clear() → process_events() → query
//
// A key that is already down does not register a new press, so OS key
// repeat never produces more than one pressed edge per physical press.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::collections::HashSet;

//=== Internal Dependencies ===============================================

use super::event::{InputEvent, KeyCode, MouseButton};

//=== StateTracker ========================================================

/// Tracks persistent state (held) and per-frame deltas (pressed/released).
#[derive(Debug, Default)]
pub struct StateTracker {
    //--- Persistent State (survives frame boundary) ----------------------
    keys_down: HashSet<KeyCode>,
    mouse_buttons_down: HashSet<MouseButton>,

    //--- Frame Deltas (reset each frame via clear()) --------------------
    keys_pressed_this_frame: HashSet<KeyCode>,
    keys_released_this_frame: HashSet<KeyCode>,
    mouse_buttons_pressed_this_frame: HashSet<MouseButton>,
    mouse_buttons_released_this_frame: HashSet<MouseButton>,
}

impl StateTracker {
    pub fn new() -> Self {
        Self::default()
    }

    //--- Frame Processing -------------------------------------------------

    /// Clears frame-specific deltas (pressed/released flags).
    pub(super) fn clear(&mut self) {
        self.keys_pressed_this_frame.clear();
        self.keys_released_this_frame.clear();
        self.mouse_buttons_pressed_this_frame.clear();
        self.mouse_buttons_released_this_frame.clear();
    }

    pub(super) fn process_events(&mut self, events: &[InputEvent]) {
        for event in events {
            self.process_event(event);
        }
    }

    //--- Internal Helpers -------------------------------------------------
    fn process_event(&mut self, event: &InputEvent) {
        match *event {
            InputEvent::KeyDown { key } => {
                if self.keys_down.insert(key) {
                    self.keys_pressed_this_frame.insert(key);
                }
            }

            InputEvent::KeyUp { key } => {
                if self.keys_down.remove(&key) {
                    self.keys_released_this_frame.insert(key);
                }
            }

            InputEvent::MouseButtonDown { button } => {
                if self.mouse_buttons_down.insert(button) {
                    self.mouse_buttons_pressed_this_frame.insert(button);
                }
            }

            InputEvent::MouseButtonUp { button } => {
                if self.mouse_buttons_down.remove(&button) {
                    self.mouse_buttons_released_this_frame.insert(button);
                }
            }

            InputEvent::FocusLost => self.release_all(),

            InputEvent::Unidentified => {}
        }
    }

    fn release_all(&mut self) {
        self.keys_released_this_frame.extend(self.keys_down.drain());
        self.mouse_buttons_released_this_frame
            .extend(self.mouse_buttons_down.drain());
    }

    //=====================================================================
    // Query API - Keyboard
    //=====================================================================

    /// Returns `true` if key transitioned UP → DOWN this frame.
    pub fn is_key_pressed(&self, key: KeyCode) -> bool {
        self.keys_pressed_this_frame.contains(&key)
    }

    /// Returns `true` while key is held.
    pub fn is_key_down(&self, key: KeyCode) -> bool {
        self.keys_down.contains(&key)
    }

    /// Returns `true` if key transitioned DOWN → UP this frame.
    pub fn is_key_released(&self, key: KeyCode) -> bool {
        self.keys_released_this_frame.contains(&key)
    }

    //=====================================================================
    // Query API - Mouse Buttons
    //=====================================================================

    pub fn is_button_pressed(&self, button: MouseButton) -> bool {
        self.mouse_buttons_pressed_this_frame.contains(&button)
    }

    pub fn is_button_down(&self, button: MouseButton) -> bool {
        self.mouse_buttons_down.contains(&button)
    }

    pub fn is_button_released(&self, button: MouseButton) -> bool {
        self.mouse_buttons_released_this_frame.contains(&button)
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn frame(tracker: &mut StateTracker, events: &[InputEvent]) {
        tracker.clear();
        tracker.process_events(events);
    }

    fn down(key: KeyCode) -> InputEvent {
        InputEvent::KeyDown { key }
    }

    fn up(key: KeyCode) -> InputEvent {
        InputEvent::KeyUp { key }
    }

    #[test]
    fn press_is_reported_for_one_frame() {
        let mut tracker = StateTracker::new();

        frame(&mut tracker, &[down(KeyCode::KeyE)]);
        assert!(tracker.is_key_pressed(KeyCode::KeyE));
        assert!(tracker.is_key_down(KeyCode::KeyE));

        frame(&mut tracker, &[]);
        assert!(!tracker.is_key_pressed(KeyCode::KeyE));
        assert!(tracker.is_key_down(KeyCode::KeyE));
    }

    #[test]
    fn key_repeat_does_not_press_again() {
        let mut tracker = StateTracker::new();
        frame(&mut tracker, &[down(KeyCode::KeyE)]);

        frame(&mut tracker, &[down(KeyCode::KeyE), down(KeyCode::KeyE)]);

        assert!(!tracker.is_key_pressed(KeyCode::KeyE));
    }

    #[test]
    fn release_then_press_registers_again() {
        let mut tracker = StateTracker::new();
        frame(&mut tracker, &[down(KeyCode::KeyE)]);

        frame(&mut tracker, &[up(KeyCode::KeyE)]);
        assert!(tracker.is_key_released(KeyCode::KeyE));
        assert!(!tracker.is_key_down(KeyCode::KeyE));

        frame(&mut tracker, &[down(KeyCode::KeyE)]);
        assert!(tracker.is_key_pressed(KeyCode::KeyE));
    }

    #[test]
    fn release_of_unheld_key_is_ignored() {
        let mut tracker = StateTracker::new();
        frame(&mut tracker, &[up(KeyCode::KeyA)]);
        assert!(!tracker.is_key_released(KeyCode::KeyA));
    }

    #[test]
    fn focus_loss_releases_everything() {
        let mut tracker = StateTracker::new();
        frame(
            &mut tracker,
            &[down(KeyCode::KeyD), InputEvent::MouseButtonDown { button: MouseButton::Right }],
        );

        frame(&mut tracker, &[InputEvent::FocusLost]);

        assert!(!tracker.is_key_down(KeyCode::KeyD));
        assert!(tracker.is_key_released(KeyCode::KeyD));
        assert!(!tracker.is_button_down(MouseButton::Right));
        assert!(tracker.is_button_released(MouseButton::Right));
    }
}
