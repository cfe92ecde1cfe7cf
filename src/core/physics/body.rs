//=========================================================================
// Kinematic Body
//=========================================================================
//
// Minimal stand-in for an arcade AABB physics body.
//
// A disabled body is invisible to the physics step: it neither moves,
// falls, nor collides. Dimension-aware entities disable their body while
// they are ghosts.
//
//=========================================================================

//=== External Dependencies ===============================================

use glam::Vec2;

//=== Internal Dependencies ===============================================

use super::Aabb;
use crate::core::dimension::Dimension;
use crate::core::world::TileWorld;

//=== Body ================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct Body {
    /// Top-left corner in world units.
    pub position: Vec2,
    pub size: Vec2,
    pub velocity: Vec2,
    pub enabled: bool,

    /// Set by the last step when resting on a solid tile.
    pub on_ground: bool,

    /// Set by the last step when horizontal motion hit a solid tile.
    pub blocked_x: bool,
}

impl Body {
    /// Inset applied across the axis being resolved, so that resting on
    /// a floor never reads as hitting a wall.
    const SKIN: f32 = 0.01;

    pub fn new(position: Vec2, size: Vec2) -> Self {
        Self {
            position,
            size,
            velocity: Vec2::ZERO,
            enabled: true,
            on_ground: false,
            blocked_x: false,
        }
    }

    pub fn aabb(&self) -> Aabb {
        Aabb::from_origin_size(self.position, self.size)
    }

    pub fn center(&self) -> Vec2 {
        self.position + self.size * 0.5
    }

    fn probe(&self, inset: Vec2) -> Aabb {
        Aabb::new(self.position + inset, self.position + self.size - inset)
    }

    /// Integrates gravity and velocity, then pushes the body out of the
    /// solid tiles of `layer` one axis at a time.
    pub fn step(&mut self, world: &TileWorld, layer: Dimension, gravity: f32, dt: f32) {
        if !self.enabled {
            return;
        }

        self.velocity.y += gravity * dt;
        self.on_ground = false;
        self.blocked_x = false;

        //--- Horizontal ---------------------------------------------------
        self.position.x += self.velocity.x * dt;
        let probe = self.probe(Vec2::new(0.0, Self::SKIN));
        for tile in world.solid_tiles_in(layer, &probe) {
            if self.velocity.x > 0.0 {
                self.position.x = tile.min.x - self.size.x;
            } else if self.velocity.x < 0.0 {
                self.position.x = tile.max.x;
            }
            self.blocked_x = true;
        }
        if self.blocked_x {
            self.velocity.x = 0.0;
        }

        //--- Vertical -----------------------------------------------------
        self.position.y += self.velocity.y * dt;
        let mut hit_vertical = false;
        let probe = self.probe(Vec2::new(Self::SKIN, 0.0));
        for tile in world.solid_tiles_in(layer, &probe) {
            if self.velocity.y > 0.0 {
                self.position.y = tile.min.y - self.size.y;
                self.on_ground = true;
            } else if self.velocity.y < 0.0 {
                self.position.y = tile.max.y;
            }
            hit_vertical = true;
        }
        if hit_vertical {
            self.velocity.y = 0.0;
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::dimension::DimensionPalette;

    const DT: f32 = 1.0 / 60.0;

    /// 4x4 world with a Lumina floor on the bottom row and an Umbra
    /// pillar in column 3.
    fn world(active: Dimension) -> TileWorld {
        let mut world = TileWorld::new(
            &[vec![0, 0, 0, 0], vec![0, 0, 0, 0], vec![0, 0, 0, 0], vec![1, 1, 1, 1]],
            &[vec![0, 0, 0, 2], vec![0, 0, 0, 2], vec![0, 0, 0, 2], vec![0, 0, 0, 2]],
            10.0,
        );
        world.apply_active(active, &DimensionPalette::default());
        world
    }

    #[test]
    fn falls_onto_active_floor() {
        let world = world(Dimension::Lumina);
        let mut body = Body::new(Vec2::new(12.0, 5.0), Vec2::new(6.0, 8.0));

        for _ in 0..120 {
            body.step(&world, Dimension::Lumina, 900.0, DT);
        }

        assert!(body.on_ground);
        assert_eq!(body.position.y, 30.0 - 8.0);
        assert_eq!(body.velocity.y, 0.0);
    }

    #[test]
    fn falls_through_ghost_floor() {
        let world = world(Dimension::Umbra);
        let mut body = Body::new(Vec2::new(12.0, 5.0), Vec2::new(6.0, 8.0));

        for _ in 0..120 {
            body.step(&world, Dimension::Umbra, 900.0, DT);
        }

        assert!(!body.on_ground);
        assert!(body.position.y > world.bounds().max.y);
    }

    #[test]
    fn wall_blocks_horizontal_motion() {
        let world = world(Dimension::Umbra);
        let mut body = Body::new(Vec2::new(20.0, 5.0), Vec2::new(6.0, 6.0));
        body.velocity.x = 120.0;

        body.step(&world, Dimension::Umbra, 0.0, 0.1);

        assert!(body.blocked_x);
        assert_eq!(body.position.x, 30.0 - 6.0);
        assert_eq!(body.velocity.x, 0.0);
    }

    #[test]
    fn disabled_body_is_frozen() {
        let world = world(Dimension::Lumina);
        let mut body = Body::new(Vec2::new(12.0, 5.0), Vec2::new(6.0, 8.0));
        body.enabled = false;
        body.velocity = Vec2::new(50.0, 50.0);

        body.step(&world, Dimension::Lumina, 900.0, DT);

        assert_eq!(body.position, Vec2::new(12.0, 5.0));
    }
}
