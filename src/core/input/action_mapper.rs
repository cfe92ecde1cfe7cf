//=========================================================================
// Action Mapper
//=========================================================================
//
// Maps physical keys and mouse buttons to game actions.
//
// Architecture:
//   key/button → HashMap → GameAction
//
// Several inputs may drive the same action. An action is held while any
// of its inputs is held, and pressed when any of them was pressed this
// frame.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::collections::{HashMap, HashSet};

//=== Internal Dependencies ===============================================

use super::{
    action::{ActionFrame, GameAction},
    event::{KeyCode, MouseButton},
    state_tracker::StateTracker,
};

//=== ActionMapper ========================================================

#[derive(Debug, Clone, Default)]
pub struct ActionMapper {
    key_bindings: HashMap<KeyCode, GameAction>,
    mouse_bindings: HashMap<MouseButton, GameAction>,
}

impl ActionMapper {
    /// Creates a mapper with no bindings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a mapper with the standard layout:
    ///
    /// | action    | inputs                 |
    /// |-----------|------------------------|
    /// | MoveLeft  | A, ←                   |
    /// | MoveRight | D, →                   |
    /// | Jump      | W, ↑, Space            |
    /// | Shift     | E, Q, right mouse      |
    /// | Restart   | R                      |
    pub fn with_defaults() -> Self {
        let mut mapper = Self::new();

        for (key, action) in [
            (KeyCode::KeyA, GameAction::MoveLeft),
            (KeyCode::ArrowLeft, GameAction::MoveLeft),
            (KeyCode::KeyD, GameAction::MoveRight),
            (KeyCode::ArrowRight, GameAction::MoveRight),
            (KeyCode::KeyW, GameAction::Jump),
            (KeyCode::ArrowUp, GameAction::Jump),
            (KeyCode::Space, GameAction::Jump),
            (KeyCode::KeyE, GameAction::Shift),
            (KeyCode::KeyQ, GameAction::Shift),
            (KeyCode::KeyR, GameAction::Restart),
        ] {
            mapper.bind_key(key, action);
        }
        mapper.bind_mouse(MouseButton::Right, GameAction::Shift);

        mapper
    }

    //--- Binding API ------------------------------------------------------

    /// Binds a key, replacing any previous binding of that key.
    pub fn bind_key(&mut self, key: KeyCode, action: GameAction) {
        self.key_bindings.insert(key, action);
    }

    /// Binds a mouse button, replacing any previous binding of that button.
    pub fn bind_mouse(&mut self, button: MouseButton, action: GameAction) {
        self.mouse_bindings.insert(button, action);
    }

    pub fn unbind_key(&mut self, key: KeyCode) {
        self.key_bindings.remove(&key);
    }

    pub fn unbind_mouse(&mut self, button: MouseButton) {
        self.mouse_bindings.remove(&button);
    }

    /// Removes every input bound to `action`.
    pub fn clear_action(&mut self, action: GameAction) {
        self.key_bindings.retain(|_, bound| *bound != action);
        self.mouse_bindings.retain(|_, bound| *bound != action);
    }

    pub fn key_action(&self, key: KeyCode) -> Option<GameAction> {
        self.key_bindings.get(&key).copied()
    }

    pub fn mouse_action(&self, button: MouseButton) -> Option<GameAction> {
        self.mouse_bindings.get(&button).copied()
    }

    //--- Frame Mapping ----------------------------------------------------

    /// Resolves the tracker's current state into actions.
    pub(super) fn map_frame(&self, tracker: &StateTracker) -> ActionFrame {
        let mut held = HashSet::new();
        let mut pressed = HashSet::new();

        for (&key, &action) in &self.key_bindings {
            if tracker.is_key_down(key) {
                held.insert(action);
            }
            if tracker.is_key_pressed(key) {
                pressed.insert(action);
            }
        }

        for (&button, &action) in &self.mouse_bindings {
            if tracker.is_button_down(button) {
                held.insert(action);
            }
            if tracker.is_button_pressed(button) {
                pressed.insert(action);
            }
        }

        ActionFrame::new(held, pressed)
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_cover_every_action() {
        let mapper = ActionMapper::with_defaults();

        for action in GameAction::ALL {
            assert!(
                mapper.key_bindings.values().any(|bound| *bound == action),
                "{:?} has no key",
                action
            );
        }
        assert_eq!(mapper.mouse_action(MouseButton::Right), Some(GameAction::Shift));
        assert_eq!(mapper.key_action(KeyCode::Space), Some(GameAction::Jump));
    }

    #[test]
    fn rebinding_replaces_previous_action() {
        let mut mapper = ActionMapper::with_defaults();
        mapper.bind_key(KeyCode::KeyE, GameAction::Restart);
        assert_eq!(mapper.key_action(KeyCode::KeyE), Some(GameAction::Restart));
    }

    #[test]
    fn clear_action_removes_all_inputs() {
        let mut mapper = ActionMapper::with_defaults();
        mapper.clear_action(GameAction::Shift);

        assert_eq!(mapper.key_action(KeyCode::KeyE), None);
        assert_eq!(mapper.key_action(KeyCode::KeyQ), None);
        assert_eq!(mapper.mouse_action(MouseButton::Right), None);
    }

    #[test]
    fn unbound_input_maps_to_nothing() {
        let mut mapper = ActionMapper::with_defaults();
        mapper.unbind_key(KeyCode::KeyA);
        mapper.unbind_mouse(MouseButton::Right);

        assert_eq!(mapper.key_action(KeyCode::KeyA), None);
        assert_eq!(mapper.mouse_action(MouseButton::Right), None);
        assert_eq!(mapper.key_action(KeyCode::KeyZ), None);
    }
}
