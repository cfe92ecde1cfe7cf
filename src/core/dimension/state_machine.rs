//=========================================================================
// Dimension State Machine
//=========================================================================
//
// Single authority for which world layer is physically real.
//
// States:
//   Stable(active) ──shift(now)──> Transitioning(active', now + lock)
//   Transitioning  ──shift(now < unlocks_at)──> (dropped, unchanged)
//   Transitioning  ──settle(now >= unlocks_at)──> Stable(active')
//
// The lock is a timestamp, not a timer: `shift()` compares against it
// directly, so an expired lock admits the next shift even if `settle()`
// has not run yet this tick.
//
// Ordering per accepted shift:
//   1. flip active
//   2. restyle both tile layers (complete before anyone is told)
//   3. notify observers in the order given
//
//=========================================================================

//=== External Dependencies ===============================================

use std::time::Duration;

use log::{debug, trace};

//=== Internal Dependencies ===============================================

use super::observer::{Transition, TransitionObserver};
use super::{Dimension, DimensionPalette, LayerRole};
use crate::core::clock::Timestamp;
use crate::core::world::{TileLayer, TileWorld};

//=== Phase ===============================================================

/// Machine state. There is no terminal state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Shifts are accepted.
    Stable { active: Dimension },

    /// A shift was accepted; further requests are dropped until `unlocks_at`.
    Transitioning {
        active: Dimension,
        unlocks_at: Timestamp,
    },
}

impl Phase {
    pub fn active(&self) -> Dimension {
        match *self {
            Self::Stable { active } | Self::Transitioning { active, .. } => active,
        }
    }
}

//=== DimensionState ======================================================

/// Flat snapshot of the machine for polling code (HUD, debug overlays).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DimensionState {
    pub active: Dimension,
    pub transition_locked_until: Option<Timestamp>,
}

//=== ShiftOutcome ========================================================

/// Result of a shift request. Neither variant is an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShiftOutcome {
    Accepted(Transition),

    /// Request arrived inside the lock window and was ignored.
    Dropped { unlocks_at: Timestamp },
}

impl ShiftOutcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted(_))
    }
}

//=== DimensionStateMachine ===============================================

/// Owns the active dimension, the transition lock and both tile layers.
///
/// Nothing else can restyle the layers: the world is only handed out
/// by shared reference.
#[derive(Debug)]
pub struct DimensionStateMachine {
    phase: Phase,
    lock_duration: Duration,
    palette: DimensionPalette,
    world: TileWorld,
    sequence: u64,
}

impl DimensionStateMachine {
    //--- Construction -----------------------------------------------------

    /// Takes ownership of a freshly built world and puts it in
    /// `Stable(PRIMARY)`. No notification is emitted for this initial
    /// state.
    pub fn new(mut world: TileWorld, palette: DimensionPalette, lock_duration: Duration) -> Self {
        let active = Dimension::PRIMARY;
        world.apply_active(active, &palette);

        Self {
            phase: Phase::Stable { active },
            lock_duration,
            palette,
            world,
            sequence: 0,
        }
    }

    //--- Transitions ------------------------------------------------------

    /// Requests a shift to the other dimension at time `now`.
    ///
    /// Inside the lock window this is a no-op: nothing is queued and the
    /// lock is not extended. Otherwise both layers are restyled before
    /// `observers` are invoked, in slice order.
    pub fn shift(
        &mut self,
        now: Timestamp,
        observers: &mut [&mut dyn TransitionObserver],
    ) -> ShiftOutcome {
        if let Phase::Transitioning { unlocks_at, .. } = self.phase {
            if now < unlocks_at {
                trace!("Shift at {} dropped, locked until {}", now, unlocks_at);
                return ShiftOutcome::Dropped { unlocks_at };
            }
        }

        let previous = self.phase.active();
        let active = previous.other();

        self.world.apply_active(active, &self.palette);

        let unlocks_at = now + self.lock_duration;
        self.phase = Phase::Transitioning { active, unlocks_at };
        self.sequence += 1;

        let transition = Transition {
            active,
            previous,
            at: now,
            unlocks_at,
            sequence: self.sequence,
        };

        debug!(
            "Shift #{} accepted at {}: {} → {} (locked until {})",
            transition.sequence, now, previous, active, unlocks_at
        );

        for observer in observers.iter_mut() {
            observer.on_transition(&transition, &self.world);
        }

        ShiftOutcome::Accepted(transition)
    }

    /// Releases an expired lock. Returns `true` if the phase changed.
    ///
    /// Settling has no side effects beyond re-opening the gate.
    pub fn settle(&mut self, now: Timestamp) -> bool {
        match self.phase {
            Phase::Transitioning { active, unlocks_at } if now >= unlocks_at => {
                debug!("Transition lock released at {} ({} stable)", now, active);
                self.phase = Phase::Stable { active };
                true
            }
            _ => false,
        }
    }

    //--- Queries ----------------------------------------------------------

    /// The dimension that is currently solid.
    pub fn current_active(&self) -> Dimension {
        self.phase.active()
    }

    /// Whether the lock from the last accepted shift is still held.
    pub fn is_transitioning(&self) -> bool {
        matches!(self.phase, Phase::Transitioning { .. })
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn state(&self) -> DimensionState {
        let transition_locked_until = match self.phase {
            Phase::Stable { .. } => None,
            Phase::Transitioning { unlocks_at, .. } => Some(unlocks_at),
        };

        DimensionState {
            active: self.phase.active(),
            transition_locked_until,
        }
    }

    /// The layer currently playing `role`.
    pub fn layer_for(&self, role: LayerRole) -> &TileLayer {
        self.world.layer(role.resolve(self.current_active()))
    }

    pub fn world(&self) -> &TileWorld {
        &self.world
    }

    pub fn palette(&self) -> &DimensionPalette {
        &self.palette
    }

    pub fn lock_duration(&self) -> Duration {
        self.lock_duration
    }

    /// Number of shifts accepted since the level started.
    pub fn transitions_accepted(&self) -> u64 {
        self.sequence
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
