//=========================================================================
// Prelude
//=========================================================================
//
// Convenience module that re-exports commonly used types and traits.
//
// Usage:
//   use shift_engine::prelude::*;
//
//=========================================================================

//=== Public API ==========================================================

// Engine core
pub use crate::engine::{Engine, EngineBuilder, EngineError};

// Configuration and time
pub use crate::core::clock::{MonotonicClock, Timestamp};
pub use crate::core::config::{ConfigError, ShiftConfig};

// Dimensions
pub use crate::core::dimension::{
    Dimension, DimensionPalette, DimensionStateMachine, ShiftOutcome, Transition,
    TransitionObserver,
};

// Entities
pub use crate::core::entity::{Appearance, DimensionAware, EntityId};

// Input system
pub use crate::core::input::{ActionMapper, GameAction, KeyCode, MouseButton};

// Levels and session
pub use crate::core::level::{LevelCatalog, LevelData, LevelError};
pub use crate::core::session::{DeathCause, EffectCue, GameEvent, GameSession};
