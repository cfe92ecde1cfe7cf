//=========================================================================
// Player
//=========================================================================
//
// The player exists in both dimensions. It still implements
// `DimensionAware` so that it goes through the same notification path
// as everything else, but it never ghosts.
//
//=========================================================================

//=== Internal Dependencies ===============================================

use super::{Appearance, DimensionAware, Presence};
use crate::core::dimension::{Dimension, DimensionPalette};
use crate::core::physics::Body;

//=== Player ==============================================================

#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    presence: Presence,
    body: Body,
    speed: f32,
    jump_velocity: f32,
}

impl Player {
    pub fn new(body: Body, speed: f32, jump_velocity: f32) -> Self {
        Self {
            presence: Presence::new(None),
            body,
            speed,
            jump_velocity,
        }
    }

    pub fn body(&self) -> &Body {
        &self.body
    }

    pub fn body_mut(&mut self) -> &mut Body {
        &mut self.body
    }

    /// Sets horizontal velocity from a direction in `[-1, 1]` and starts
    /// a jump if requested while standing on something.
    pub fn drive(&mut self, horizontal: f32, jump: bool) {
        self.body.velocity.x = horizontal.clamp(-1.0, 1.0) * self.speed;

        if jump && self.body.on_ground {
            self.body.velocity.y = -self.jump_velocity;
            self.body.on_ground = false;
        }
    }
}

impl DimensionAware for Player {
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

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    fn player() -> Player {
        Player::new(Body::new(Vec2::ZERO, Vec2::new(10.0, 20.0)), 200.0, 500.0)
    }

    #[test]
    fn stays_materialized_in_both_dimensions() {
        let palette = DimensionPalette::default();
        let mut player = player();

        for active in [Dimension::Umbra, Dimension::Lumina, Dimension::Umbra] {
            player.on_dimension_changed(active, &palette);
            assert!(player.is_materialized());
            assert!(player.body().enabled);
            assert_eq!(player.appearance(), Appearance::SOLID);
        }
    }

    #[test]
    fn jumps_only_from_the_ground() {
        let mut player = player();

        player.drive(0.0, true);
        assert_eq!(player.body().velocity.y, 0.0);

        player.body_mut().on_ground = true;
        player.drive(1.0, true);
        assert_eq!(player.body().velocity, Vec2::new(200.0, -500.0));
        assert!(!player.body().on_ground);
    }
}
