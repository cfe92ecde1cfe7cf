//=========================================================================
// Patrol Enemy
//=========================================================================
//
// Walks back and forth within a fixed span around its spawn point,
// turning early when it walks into a wall.
//
//=========================================================================

//=== External Dependencies ===============================================

use glam::Vec2;

//=== Internal Dependencies ===============================================

use super::{Appearance, DimensionAware, EntityId, MotionContext, Presence, SelfControlled};
use crate::core::dimension::{Dimension, DimensionPalette};
use crate::core::physics::Body;

//=== PatrolEnemy =========================================================

#[derive(Debug, Clone, PartialEq)]
pub struct PatrolEnemy {
    id: EntityId,
    presence: Presence,
    body: Body,
    origin_x: f32,
    range_tiles: f32,
    speed: f32,
    direction: f32,
}

impl PatrolEnemy {
    pub fn new(id: EntityId, home: Dimension, body: Body, range_tiles: f32, speed: f32) -> Self {
        Self {
            id,
            presence: Presence::new(Some(home)),
            origin_x: body.position.x,
            body,
            range_tiles,
            speed,
            direction: 1.0,
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

    /// +1.0 when walking right, -1.0 when walking left.
    pub fn direction(&self) -> f32 {
        self.direction
    }
}

impl DimensionAware for PatrolEnemy {
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

impl SelfControlled for PatrolEnemy {
    fn steer(&mut self, context: &MotionContext) {
        if self.body.blocked_x {
            self.direction = -self.direction;
        }

        let span = self.range_tiles * context.tile_size;
        let x = self.body.position.x;
        if x <= self.origin_x - span {
            self.direction = 1.0;
        } else if x >= self.origin_x + span {
            self.direction = -1.0;
        }

        self.body.velocity = Vec2::new(self.direction * self.speed, self.body.velocity.y);
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn context() -> MotionContext {
        MotionContext {
            player_center: Vec2::ZERO,
            tile_size: 10.0,
            dt: 1.0 / 60.0,
        }
    }

    fn patrol() -> PatrolEnemy {
        let body = Body::new(Vec2::new(100.0, 0.0), Vec2::splat(8.0));
        PatrolEnemy::new(EntityId(1), Dimension::Umbra, body, 2.0, 50.0)
    }

    #[test]
    fn walks_right_first() {
        let mut enemy = patrol();
        enemy.steer(&context());
        assert_eq!(enemy.body().velocity.x, 50.0);
    }

    #[test]
    fn turns_at_end_of_span() {
        let mut enemy = patrol();
        enemy.body_mut().position.x = 120.0;
        enemy.steer(&context());
        assert_eq!(enemy.direction(), -1.0);

        enemy.body_mut().position.x = 80.0;
        enemy.steer(&context());
        assert_eq!(enemy.direction(), 1.0);
    }

    #[test]
    fn turns_when_blocked() {
        let mut enemy = patrol();
        enemy.body_mut().blocked_x = true;
        enemy.steer(&context());
        assert_eq!(enemy.body().velocity.x, -50.0);
    }
}
