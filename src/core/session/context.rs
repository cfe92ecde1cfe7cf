//=========================================================================
// Level Context
//=========================================================================
//
// Everything that lives exactly as long as one attempt at one level.
//
// Architecture:
//   LevelContext
//     ├─ DimensionStateMachine (owns the TileWorld)
//     ├─ Player
//     ├─ EntityRoster
//     ├─ CollisionCoordinator
//     └─ exit zone
//
// Built on load, dropped on restart or advance. Loading puts the world
// in Stable(PRIMARY) and aligns every entity and collider with it
// without emitting a transition.
//
//=========================================================================

//=== External Dependencies ===============================================

use glam::Vec2;
use log::info;

//=== Internal Dependencies ===============================================

use super::events::DeathCause;
use crate::core::clock::Timestamp;
use crate::core::config::ShiftConfig;
use crate::core::dimension::{
    Dimension, DimensionStateMachine, ShiftOutcome, Transition, TransitionObserver,
};
use crate::core::entity::{DimensionAware, EntityRoster, MotionContext, Player};
use crate::core::level::{LevelData, TileCoord};
use crate::core::physics::{Aabb, Body, CollisionCoordinator};
use crate::core::world::{TilePos, TileWorld};

//=== StepOutcome =========================================================

/// Result of one simulation step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    Running,
    PlayerDied(DeathCause),
    ReachedExit,
}

//=== LevelContext ========================================================

#[derive(Debug)]
pub struct LevelContext {
    index: usize,
    name: String,
    machine: DimensionStateMachine,
    player: Player,
    roster: EntityRoster,
    colliders: CollisionCoordinator,
    exit_zone: Aabb,
    gravity: f32,
}

impl LevelContext {
    /// Player footprint relative to one tile.
    const PLAYER_WIDTH: f32 = 0.6;
    const PLAYER_HEIGHT: f32 = 0.9;

    //--- Construction -----------------------------------------------------

    /// Builds a fresh context from validated level data.
    pub fn load(index: usize, level: &LevelData, config: &ShiftConfig) -> Self {
        let palette = config.palette();
        let world = TileWorld::new(&level.lumina, &level.umbra, config.tile_size);
        let machine = DimensionStateMachine::new(world, palette, config.lock_duration());
        let active = machine.current_active();

        let mut player = Player::new(
            Self::player_body(level.spawn, config.tile_size),
            config.player_speed,
            config.jump_velocity,
        );
        player.on_dimension_changed(active, &palette);

        let mut roster = EntityRoster::new(palette);
        for spawn in &level.enemies {
            roster.spawn(spawn, config, active);
        }

        let colliders = CollisionCoordinator::bound_to(active);
        let exit_zone = machine.world().tile_bounds(TilePos {
            x: level.exit.x,
            y: level.exit.y,
        });

        info!(
            "Loaded level {} '{}' ({}x{}, {} enemies, {} active)",
            index,
            level.name,
            machine.world().grid_size().0,
            machine.world().grid_size().1,
            roster.len(),
            active
        );

        Self {
            index,
            name: level.name.clone(),
            machine,
            player,
            roster,
            colliders,
            exit_zone,
            gravity: config.gravity,
        }
    }

    fn player_body(spawn: TileCoord, tile_size: f32) -> Body {
        let size = Vec2::new(tile_size * Self::PLAYER_WIDTH, tile_size * Self::PLAYER_HEIGHT);
        let tile_origin = Vec2::new(spawn.x as f32, spawn.y as f32) * tile_size;
        let offset = Vec2::new((tile_size - size.x) * 0.5, tile_size - size.y);
        Body::new(tile_origin + offset, size)
    }

    //--- Dimension Shifting -----------------------------------------------

    /// Requests a shift. On acceptance colliders are rebound first, then
    /// the player, then every live enemy, then `extra` in order.
    pub fn request_shift(
        &mut self,
        now: Timestamp,
        extra: &mut [&mut dyn TransitionObserver],
    ) -> ShiftOutcome {
        let Self {
            machine,
            player,
            roster,
            colliders,
            ..
        } = self;

        let palette = *machine.palette();
        let mut player_observer = |transition: &Transition, _: &TileWorld| {
            player.on_dimension_changed(transition.active, &palette);
        };

        let mut observers: Vec<&mut dyn TransitionObserver> = Vec::with_capacity(3 + extra.len());
        observers.push(colliders);
        observers.push(&mut player_observer);
        observers.push(roster);
        for observer in extra.iter_mut() {
            observers.push(&mut **observer);
        }

        machine.shift(now, &mut observers)
    }

    /// Releases the transition lock once it has expired.
    pub fn settle(&mut self, now: Timestamp) -> bool {
        self.machine.settle(now)
    }

    //--- Simulation -------------------------------------------------------

    /// Moves everything by `dt` seconds against the bound layer and
    /// reports what happened to the player.
    pub fn step(&mut self, horizontal: f32, jump: bool, dt: f32) -> StepOutcome {
        let layer = self.colliders.bound_layer();
        let world = self.machine.world();

        self.player.drive(horizontal, jump);
        self.player.body_mut().step(world, layer, self.gravity, dt);

        let motion = MotionContext {
            player_center: self.player.body().center(),
            tile_size: world.tile_size(),
            dt,
        };
        self.roster.advance(&motion, world, layer, self.gravity);

        if self.player.body().position.y > world.bounds().max.y {
            return StepOutcome::PlayerDied(DeathCause::Fell);
        }

        if let Some(enemy) = self.colliders.player_contact(&self.player, &self.roster) {
            return StepOutcome::PlayerDied(DeathCause::Enemy(enemy));
        }

        if self.player.body().aabb().intersects(&self.exit_zone) {
            return StepOutcome::ReachedExit;
        }

        StepOutcome::Running
    }

    //--- Queries ----------------------------------------------------------

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn active(&self) -> Dimension {
        self.machine.current_active()
    }

    pub fn machine(&self) -> &DimensionStateMachine {
        &self.machine
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn roster(&self) -> &EntityRoster {
        &self.roster
    }

    pub fn colliders(&self) -> &CollisionCoordinator {
        &self.colliders
    }

    pub fn exit_zone(&self) -> Aabb {
        self.exit_zone
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::level::EnemySpawn;

    fn level(enemies: Vec<EnemySpawn>) -> LevelData {
        LevelData {
            name: "context".to_string(),
            lumina: vec![vec![0, 0, 0, 0], vec![0, 0, 0, 0], vec![1, 1, 1, 1]],
            umbra: vec![vec![0, 0, 0, 0], vec![0, 0, 0, 0], vec![0, 2, 2, 0]],
            spawn: TileCoord { x: 0, y: 1 },
            exit: TileCoord { x: 3, y: 1 },
            enemies,
        }
    }

    #[test]
    fn load_aligns_everything_with_primary() {
        let spawn = EnemySpawn::Patrol {
            at: TileCoord { x: 2, y: 1 },
            dimension: Dimension::SECONDARY,
            range: 1.0,
        };
        let context = LevelContext::load(0, &level(vec![spawn]), &ShiftConfig::default());

        assert_eq!(context.active(), Dimension::PRIMARY);
        assert_eq!(context.colliders().bound_layer(), Dimension::PRIMARY);
        assert_eq!(context.colliders().rebinds(), 0);
        assert_eq!(context.machine().transitions_accepted(), 0);
        assert!(context.player().is_materialized());
        assert!(context.roster().iter().all(|enemy| !enemy.is_materialized()));
    }

    #[test]
    fn shift_notifies_in_order() {
        let spawn = EnemySpawn::Chase {
            at: TileCoord { x: 2, y: 1 },
            dimension: Dimension::SECONDARY,
        };
        let mut context = LevelContext::load(0, &level(vec![spawn]), &ShiftConfig::default());

        let mut seen = Vec::new();
        let mut witness = |transition: &Transition, world: &TileWorld| {
            seen.push((transition.active, world.layer(transition.active).is_solid(1, 2)));
        };
        let outcome = context.request_shift(Timestamp::ZERO, &mut [&mut witness]);

        assert!(outcome.is_accepted());
        assert_eq!(seen, vec![(Dimension::Umbra, true)]);
        assert_eq!(context.colliders().bound_layer(), Dimension::Umbra);
        assert!(context.roster().iter().all(|enemy| enemy.is_materialized()));
    }

    #[test]
    fn player_stands_on_the_active_floor() {
        let mut context = LevelContext::load(0, &level(vec![]), &ShiftConfig::default());

        for _ in 0..30 {
            assert_eq!(context.step(0.0, false, 1.0 / 60.0), StepOutcome::Running);
        }

        assert!(context.player().body().on_ground);
    }

    #[test]
    fn ghost_floor_lets_the_player_fall() {
        let mut context = LevelContext::load(0, &level(vec![]), &ShiftConfig::default());
        context.request_shift(Timestamp::ZERO, &mut []);

        let mut outcome = StepOutcome::Running;
        for _ in 0..120 {
            outcome = context.step(0.0, false, 1.0 / 60.0);
            if outcome != StepOutcome::Running {
                break;
            }
        }

        assert_eq!(outcome, StepOutcome::PlayerDied(DeathCause::Fell));
    }

    #[test]
    fn walking_right_reaches_the_exit() {
        let mut context = LevelContext::load(0, &level(vec![]), &ShiftConfig::default());

        let mut outcome = StepOutcome::Running;
        for _ in 0..120 {
            outcome = context.step(1.0, false, 1.0 / 60.0);
            if outcome != StepOutcome::Running {
                break;
            }
        }

        assert_eq!(outcome, StepOutcome::ReachedExit);
    }
}
