//=========================================================================
// Game Actions
//=========================================================================
//
// High-level commands the game reacts to, and the per-tick snapshot of
// which of them are held or were just pressed.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::collections::HashSet;

//=== GameAction ==========================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameAction {
    MoveLeft,
    MoveRight,
    Jump,
    /// Toggle the active dimension.
    Shift,
    /// Reload the current level.
    Restart,
}

impl GameAction {
    pub const ALL: [Self; 5] = [
        Self::MoveLeft,
        Self::MoveRight,
        Self::Jump,
        Self::Shift,
        Self::Restart,
    ];
}

//=== ActionFrame =========================================================

/// Actions for one tick.
///
/// `pressed` holds edges only: an action bound to a key that stays down
/// shows up in `pressed` for a single frame.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActionFrame {
    held: HashSet<GameAction>,
    pressed: HashSet<GameAction>,
}

impl ActionFrame {
    pub fn new(held: HashSet<GameAction>, pressed: HashSet<GameAction>) -> Self {
        Self { held, pressed }
    }

    /// Frame in which `actions` were just pressed (and are therefore held).
    pub fn pressing(actions: &[GameAction]) -> Self {
        let set: HashSet<_> = actions.iter().copied().collect();
        Self::new(set.clone(), set)
    }

    /// Frame in which `actions` are held without a new press.
    pub fn holding(actions: &[GameAction]) -> Self {
        Self::new(actions.iter().copied().collect(), HashSet::new())
    }

    pub fn held(&self, action: GameAction) -> bool {
        self.held.contains(&action)
    }

    pub fn pressed(&self, action: GameAction) -> bool {
        self.pressed.contains(&action)
    }

    /// -1.0, 0.0 or 1.0 from the two movement actions.
    pub fn horizontal(&self) -> f32 {
        let mut axis = 0.0;
        if self.held(GameAction::MoveLeft) {
            axis -= 1.0;
        }
        if self.held(GameAction::MoveRight) {
            axis += 1.0;
        }
        axis
    }

    /// A shift request is the press edge of the shift action.
    pub fn shift_requested(&self) -> bool {
        self.pressed(GameAction::Shift)
    }

    pub fn is_idle(&self) -> bool {
        self.held.is_empty() && self.pressed.is_empty()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opposite_directions_cancel() {
        let frame = ActionFrame::holding(&[GameAction::MoveLeft, GameAction::MoveRight]);
        assert_eq!(frame.horizontal(), 0.0);

        let frame = ActionFrame::holding(&[GameAction::MoveLeft]);
        assert_eq!(frame.horizontal(), -1.0);
    }

    #[test]
    fn holding_shift_is_not_a_request() {
        assert!(!ActionFrame::holding(&[GameAction::Shift]).shift_requested());
        assert!(ActionFrame::pressing(&[GameAction::Shift]).shift_requested());
    }

    #[test]
    fn default_frame_is_idle() {
        assert!(ActionFrame::default().is_idle());
        assert!(!ActionFrame::holding(&[GameAction::Jump]).is_idle());
    }
}
