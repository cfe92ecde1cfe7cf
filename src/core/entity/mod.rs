//=========================================================================
// Entities
//=========================================================================
//
// World actors and the capabilities they implement.
//
// Architecture:
//   DimensionAware  — reacts to the active dimension (player, enemies)
//   SelfControlled  — decides its own velocity each tick (enemies)
//
//   Enemy (tagged union)
//     ├─ Patrol(PatrolEnemy)
//     └─ Chase(ChaseEnemy)
//
// The state machine never sees concrete entity types; the roster fans
// each transition out to whatever is alive at that moment.
//
//=========================================================================

//=== Module Declarations =================================================

mod chase;
mod enemy;
mod patrol;
mod player;
mod roster;

//=== Public API ==========================================================

pub use chase::ChaseEnemy;
pub use enemy::{Enemy, EntityId};
pub use patrol::PatrolEnemy;
pub use player::Player;
pub use roster::EntityRoster;

//=== External Dependencies ===============================================

use glam::Vec2;

//=== Internal Dependencies ===============================================

use crate::core::dimension::{Dimension, DimensionPalette, LayerRole, LayerStyle, Tint};
use crate::core::physics::Body;

//=== Appearance ==========================================================

/// Sprite alpha and tint.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Appearance {
    pub alpha: f32,
    pub tint: Option<Tint>,
}

impl Appearance {
    pub const SOLID: Self = Self { alpha: 1.0, tint: None };
}

impl From<LayerStyle> for Appearance {
    fn from(style: LayerStyle) -> Self {
        Self {
            alpha: style.alpha,
            tint: style.tint,
        }
    }
}

//=== DimensionAware ======================================================

/// Capability of reacting to dimension transitions.
pub trait DimensionAware {
    /// Dimension the entity belongs to. `None` means it exists in both.
    fn home_dimension(&self) -> Option<Dimension>;

    /// Recomputes materialization, appearance and body state.
    fn on_dimension_changed(&mut self, active: Dimension, palette: &DimensionPalette);

    /// Whether the entity is currently real (visible, collidable, dangerous).
    fn is_materialized(&self) -> bool;

    fn appearance(&self) -> Appearance;
}

//=== SelfControlled ======================================================

/// What an entity may look at when choosing its movement.
#[derive(Debug, Clone, Copy)]
pub struct MotionContext {
    pub player_center: Vec2,
    pub tile_size: f32,
    pub dt: f32,
}

/// Capability of steering itself each tick.
pub trait SelfControlled {
    /// Sets the desired velocity for the coming physics step.
    fn steer(&mut self, context: &MotionContext);
}

//=== Presence ============================================================

/// Shared bookkeeping behind every `DimensionAware` implementation.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Presence {
    home: Option<Dimension>,
    materialized: bool,
    appearance: Appearance,
}

impl Presence {
    pub(crate) fn new(home: Option<Dimension>) -> Self {
        Self {
            home,
            materialized: true,
            appearance: Appearance::SOLID,
        }
    }

    pub(crate) fn home(&self) -> Option<Dimension> {
        self.home
    }

    pub(crate) fn is_materialized(&self) -> bool {
        self.materialized
    }

    pub(crate) fn appearance(&self) -> Appearance {
        self.appearance
    }

    /// Applies the tile policy to the entity and its body.
    ///
    /// A home-less entity is always materialized.
    pub(crate) fn react(&mut self, active: Dimension, palette: &DimensionPalette, body: &mut Body) {
        let style = match self.home {
            Some(home) => palette.style(home, LayerRole::of(home, active)),
            None => LayerStyle::SOLID,
        };

        self.materialized = style.collidable;
        self.appearance = style.into();
        body.enabled = style.collidable;
        if !body.enabled {
            body.velocity = Vec2::ZERO;
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn body() -> Body {
        Body::new(Vec2::ZERO, Vec2::splat(8.0))
    }

    #[test]
    fn homeless_presence_is_always_real() {
        let palette = DimensionPalette::default();
        let mut presence = Presence::new(None);
        let mut body = body();

        for active in Dimension::ALL {
            presence.react(active, &palette, &mut body);
            assert!(presence.is_materialized());
            assert!(body.enabled);
            assert_eq!(presence.appearance(), Appearance::SOLID);
        }
    }

    #[test]
    fn homed_presence_ghosts_outside_its_dimension() {
        let palette = DimensionPalette::default();
        let mut presence = Presence::new(Some(Dimension::Lumina));
        let mut body = body();
        body.velocity = Vec2::new(30.0, 0.0);

        presence.react(Dimension::Umbra, &palette, &mut body);

        assert!(!presence.is_materialized());
        assert!(!body.enabled);
        assert_eq!(body.velocity, Vec2::ZERO);
        assert_eq!(
            presence.appearance(),
            Appearance { alpha: 0.2, tint: Some(palette.lumina_ghost_tint) }
        );
    }
}
