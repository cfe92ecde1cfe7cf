//=========================================================================
// Transition Notification
//=========================================================================
//
// The single push notification the state machine emits per accepted
// shift. Observers receive it synchronously, after both tile layers
// have been restyled, together with read-only access to the world.
//
//=========================================================================

//=== Internal Dependencies ===============================================

use super::Dimension;
use crate::core::clock::Timestamp;
use crate::core::world::TileWorld;

//=== Transition ==========================================================

/// An accepted shift.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    /// Dimension that just became solid.
    pub active: Dimension,

    /// Dimension that just became the ghost.
    pub previous: Dimension,

    /// When the shift was accepted.
    pub at: Timestamp,

    /// When the next shift may be accepted.
    pub unlocks_at: Timestamp,

    /// 1 for the first accepted shift of a level, then increasing.
    pub sequence: u64,
}

//=== TransitionObserver ==================================================

/// Reacts to accepted shifts.
///
/// Observers must not assume an order relative to each other beyond the
/// order they were passed in, and cannot veto the transition.
pub trait TransitionObserver {
    fn on_transition(&mut self, transition: &Transition, world: &TileWorld);
}

impl<F> TransitionObserver for F
where
    F: FnMut(&Transition, &TileWorld),
{
    fn on_transition(&mut self, transition: &Transition, world: &TileWorld) {
        self(transition, world)
    }
}
