//=========================================================================
// Dimension System
//=========================================================================
//
// The two overlaid worlds and the machinery that decides which of them
// is physically real.
//
// Architecture:
//   DimensionStateMachine
//     ├─ phase: Stable(active) | Transitioning(active, unlocks_at)
//     └─ world: TileWorld (sole writer)
//
// Flow:
//   shift(now) → lock check → flip → TileWorld::apply_active()
//              → TransitionObserver::on_transition() (registration order)
//
//=========================================================================

//=== Module Declarations =================================================

mod observer;
mod state_machine;
mod style;

//=== Public API ==========================================================

pub use observer::{Transition, TransitionObserver};
pub use state_machine::{DimensionState, DimensionStateMachine, Phase, ShiftOutcome};
pub use style::{DimensionPalette, LayerStyle, Tint};

//=== External Dependencies ===============================================

use std::fmt;

use serde::{Deserialize, Serialize};

//=== Dimension ===========================================================

/// One of the two mutually exclusive overlaid worlds.
///
/// The model is binary on purpose: there is always exactly one other
/// dimension, returned by [`Dimension::other`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dimension {
    /// Lumina, the world of light. Active when a level starts.
    #[serde(alias = "primary")]
    Lumina,

    /// Umbra, the shadow world.
    #[serde(alias = "secondary")]
    Umbra,
}

impl Dimension {
    /// The dimension every level starts in.
    pub const PRIMARY: Self = Self::Lumina;

    /// The dimension that starts as the ghost layer.
    pub const SECONDARY: Self = Self::Umbra;

    /// Both dimensions, primary first.
    pub const ALL: [Self; 2] = [Self::Lumina, Self::Umbra];

    /// Returns the opposite dimension.
    #[inline]
    pub const fn other(self) -> Self {
        match self {
            Self::Lumina => Self::Umbra,
            Self::Umbra => Self::Lumina,
        }
    }

    /// Canonical lowercase name used in logs and level files.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Lumina => "lumina",
            Self::Umbra => "umbra",
        }
    }
}

impl Default for Dimension {
    fn default() -> Self {
        Self::PRIMARY
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

//=== LayerRole ===========================================================

/// Whether a layer is currently the solid one or the ghost.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LayerRole {
    Active,
    Inactive,
}

impl LayerRole {
    /// Role of `dimension` while `active` is the solid world.
    #[inline]
    pub fn of(dimension: Dimension, active: Dimension) -> Self {
        if dimension == active {
            Self::Active
        } else {
            Self::Inactive
        }
    }

    /// Resolves the role to a concrete dimension.
    #[inline]
    pub fn resolve(self, active: Dimension) -> Dimension {
        match self {
            Self::Active => active,
            Self::Inactive => active.other(),
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn other_is_an_involution() {
        for dimension in Dimension::ALL {
            assert_ne!(dimension.other(), dimension);
            assert_eq!(dimension.other().other(), dimension);
        }
    }

    #[test]
    fn primary_is_default() {
        assert_eq!(Dimension::default(), Dimension::PRIMARY);
        assert_eq!(Dimension::PRIMARY, Dimension::Lumina);
        assert_eq!(Dimension::SECONDARY, Dimension::Umbra);
    }

    #[test]
    fn role_resolution_round_trips() {
        for active in Dimension::ALL {
            for dimension in Dimension::ALL {
                let role = LayerRole::of(dimension, active);
                assert_eq!(role.resolve(active), dimension);
            }
        }
    }

    #[test]
    fn serde_accepts_names_and_aliases() {
        let lumina: Dimension = serde_json::from_str("\"lumina\"").unwrap();
        let umbra: Dimension = serde_json::from_str("\"secondary\"").unwrap();
        assert_eq!(lumina, Dimension::Lumina);
        assert_eq!(umbra, Dimension::Umbra);
    }

    #[test]
    fn display_uses_canonical_name() {
        assert_eq!(Dimension::Umbra.to_string(), "umbra");
    }
}
