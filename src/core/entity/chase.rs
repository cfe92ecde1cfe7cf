//=========================================================================
// Chase Enemy
//=========================================================================
//
// Idles until the player comes within its radius, then runs at them
// horizontally.
//
//=========================================================================

//=== External Dependencies ===============================================

use glam::Vec2;

//=== Internal Dependencies ===============================================

use super::{Appearance, DimensionAware, EntityId, MotionContext, Presence, SelfControlled};
use crate::core::dimension::{Dimension, DimensionPalette};
use crate::core::physics::Body;

//=== ChaseEnemy ==========================================================

#[derive(Debug, Clone, PartialEq)]
pub struct ChaseEnemy {
    id: EntityId,
    presence: Presence,
    body: Body,
    speed: f32,
    radius: f32,
}

impl ChaseEnemy {
    /// Horizontal distance under which the enemy stops instead of jittering.
    const DEAD_ZONE: f32 = 1.0;

    pub fn new(id: EntityId, home: Dimension, body: Body, speed: f32, radius: f32) -> Self {
        Self {
            id,
            presence: Presence::new(Some(home)),
            body,
            speed,
            radius,
        }
    }

    pub fn id(&self) -> EntityId {
        self.id
    }

    pub fn body(&self) -> &Body {
        &self.body
    }

    pub fn body_mut(&mut self) -> &mut Body {
        &mut self.body
    }
}

impl DimensionAware for ChaseEnemy {
    fn home_dimension(&self) -> Option<Dimension> {
        self.presence.home()
    }

    fn on_dimension_changed(&mut self, active: Dimension, palette: &DimensionPalette) {
        self.presence.react(active, palette, &mut self.body);
    }

    fn is_materialized(&self) -> bool {
        self.presence.is_materialized()
    }

    fn appearance(&self) -> Appearance {
        self.presence.appearance()
    }
}

impl SelfControlled for ChaseEnemy {
    fn steer(&mut self, context: &MotionContext) {
        let delta = context.player_center - self.body.center();

        let vx = if delta.length() <= self.radius && delta.x.abs() > Self::DEAD_ZONE {
            delta.x.signum() * self.speed
        } else {
            0.0
        };

        self.body.velocity = Vec2::new(vx, self.body.velocity.y);
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn chaser() -> ChaseEnemy {
        let body = Body::new(Vec2::new(96.0, 96.0), Vec2::splat(8.0));
        ChaseEnemy::new(EntityId(7), Dimension::Lumina, body, 80.0, 50.0)
    }

    fn context(player_center: Vec2) -> MotionContext {
        MotionContext {
            player_center,
            tile_size: 16.0,
            dt: 1.0 / 60.0,
        }
    }

    #[test]
    fn idles_when_player_is_far() {
        let mut enemy = chaser();
        enemy.steer(&context(Vec2::new(400.0, 100.0)));
        assert_eq!(enemy.body().velocity.x, 0.0);
    }

    #[test]
    fn pursues_player_within_radius() {
        let mut enemy = chaser();

        enemy.steer(&context(Vec2::new(70.0, 100.0)));
        assert_eq!(enemy.body().velocity.x, -80.0);

        enemy.steer(&context(Vec2::new(130.0, 100.0)));
        assert_eq!(enemy.body().velocity.x, 80.0);
    }

    #[test]
    fn stops_when_level_with_player() {
        let mut enemy = chaser();
        enemy.steer(&context(Vec2::new(100.5, 90.0)));
        assert_eq!(enemy.body().velocity.x, 0.0);
    }
}
