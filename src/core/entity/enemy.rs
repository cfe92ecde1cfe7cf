//=========================================================================
// Enemy Variants
//=========================================================================
//
// Tagged union over the concrete enemy types. Built from a level's spawn
// descriptor and dispatches both capabilities to the variant.
//
//=========================================================================

//=== External Dependencies ===============================================

use glam::Vec2;

//=== Internal Dependencies ===============================================

use super::{
    Appearance, ChaseEnemy, DimensionAware, MotionContext, PatrolEnemy, SelfControlled,
};
use crate::core::config::ShiftConfig;
use crate::core::dimension::{Dimension, DimensionPalette};
use crate::core::level::{EnemySpawn, TileCoord};
use crate::core::physics::Body;

//=== EntityId ============================================================

/// Roster-unique handle for an enemy. Never reused within a level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntityId(pub u32);

impl std::fmt::Display for EntityId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

//=== Enemy ===============================================================

#[derive(Debug, Clone, PartialEq)]
pub enum Enemy {
    Patrol(PatrolEnemy),
    Chase(ChaseEnemy),
}

impl Enemy {
    /// Enemy footprint relative to one tile.
    const SIZE_RATIO: f32 = 0.75;

    /// Instantiates the variant described by `spawn`, standing on the
    /// bottom edge of its spawn tile.
    pub fn spawn(id: EntityId, spawn: &EnemySpawn, config: &ShiftConfig) -> Self {
        let body = Self::body_at(spawn.at(), config.tile_size);

        match *spawn {
            EnemySpawn::Patrol { dimension, range, .. } => {
                Enemy::Patrol(PatrolEnemy::new(id, dimension, body, range, config.patrol_speed))
            }
            EnemySpawn::Chase { dimension, .. } => Enemy::Chase(ChaseEnemy::new(
                id,
                dimension,
                body,
                config.chase_speed,
                config.chase_radius,
            )),
        }
    }

    fn body_at(at: TileCoord, tile_size: f32) -> Body {
        let size = Vec2::splat(tile_size * Self::SIZE_RATIO);
        let tile_origin = Vec2::new(at.x as f32, at.y as f32) * tile_size;
        let offset = Vec2::new((tile_size - size.x) * 0.5, tile_size - size.y);
        Body::new(tile_origin + offset, size)
    }

    pub fn id(&self) -> EntityId {
        match self {
            Enemy::Patrol(enemy) => enemy.id(),
            Enemy::Chase(enemy) => enemy.id(),
        }
    }

    pub fn body(&self) -> &Body {
        match self {
            Enemy::Patrol(enemy) => enemy.body(),
            Enemy::Chase(enemy) => enemy.body(),
        }
    }

    pub fn body_mut(&mut self) -> &mut Body {
        match self {
            Enemy::Patrol(enemy) => enemy.body_mut(),
            Enemy::Chase(enemy) => enemy.body_mut(),
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Enemy::Patrol(_) => "patrol",
            Enemy::Chase(_) => "chase",
        }
    }
}

impl DimensionAware for Enemy {
    fn home_dimension(&self) -> Option<Dimension> {
        match self {
            Enemy::Patrol(enemy) => enemy.home_dimension(),
            Enemy::Chase(enemy) => enemy.home_dimension(),
        }
    }

    fn on_dimension_changed(&mut self, active: Dimension, palette: &DimensionPalette) {
        match self {
            Enemy::Patrol(enemy) => enemy.on_dimension_changed(active, palette),
            Enemy::Chase(enemy) => enemy.on_dimension_changed(active, palette),
        }
    }

    fn is_materialized(&self) -> bool {
        match self {
            Enemy::Patrol(enemy) => enemy.is_materialized(),
            Enemy::Chase(enemy) => enemy.is_materialized(),
        }
    }

    fn appearance(&self) -> Appearance {
        match self {
            Enemy::Patrol(enemy) => enemy.appearance(),
            Enemy::Chase(enemy) => enemy.appearance(),
        }
    }
}

impl SelfControlled for Enemy {
    /// Ghosts do not steer; their body stays frozen until they return.
    fn steer(&mut self, context: &MotionContext) {
        if !self.is_materialized() {
            return;
        }

        match self {
            Enemy::Patrol(enemy) => enemy.steer(context),
            Enemy::Chase(enemy) => enemy.steer(context),
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::dimension::Tint;

    fn patrol_spawn(dimension: Dimension) -> EnemySpawn {
        EnemySpawn::Patrol {
            at: TileCoord { x: 2, y: 3 },
            dimension,
            range: 2.0,
        }
    }

    #[test]
    fn spawns_on_the_floor_of_its_tile() {
        let config = ShiftConfig::default();
        let enemy = Enemy::spawn(EntityId(0), &patrol_spawn(Dimension::Umbra), &config);

        let body = enemy.body();
        assert_eq!(body.size, Vec2::splat(24.0));
        assert_eq!(body.position, Vec2::new(64.0 + 4.0, 96.0 + 8.0));
        assert_eq!(enemy.kind(), "patrol");
    }

    #[test]
    fn secondary_enemy_follows_tile_policy() {
        let config = ShiftConfig::default();
        let palette = config.palette();
        let mut enemy = Enemy::spawn(EntityId(3), &patrol_spawn(Dimension::SECONDARY), &config);

        enemy.on_dimension_changed(Dimension::SECONDARY, &palette);
        assert!(enemy.is_materialized());
        assert!(enemy.body().enabled);
        assert_eq!(enemy.appearance(), Appearance { alpha: 1.0, tint: None });

        enemy.on_dimension_changed(Dimension::PRIMARY, &palette);
        assert!(!enemy.is_materialized());
        assert!(!enemy.body().enabled);
        assert_eq!(
            enemy.appearance(),
            Appearance { alpha: 0.2, tint: Some(Tint::from_rgb(0x4A6FFF)) }
        );
    }

    #[test]
    fn ghost_does_not_steer() {
        let config = ShiftConfig::default();
        let mut enemy = Enemy::spawn(EntityId(1), &patrol_spawn(Dimension::Umbra), &config);
        enemy.on_dimension_changed(Dimension::Lumina, &config.palette());

        enemy.steer(&MotionContext {
            player_center: Vec2::ZERO,
            tile_size: config.tile_size,
            dt: 1.0 / 60.0,
        });

        assert_eq!(enemy.body().velocity, Vec2::ZERO);
    }
}
