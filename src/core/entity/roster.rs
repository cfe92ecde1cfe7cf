//=========================================================================
// Entity Roster
//=========================================================================
//
// Owns the enemies of the current level and relays dimension transitions
// to whichever of them are still alive.
//
// Responsibilities:
// - Assign ids and spawn enemies from level descriptors
// - Remove enemies (removed enemies are never notified again)
// - Fan transitions out to every live enemy
// - Drive steering and physics for the whole population
//
//=========================================================================

//=== External Dependencies ===============================================

use log::debug;

//=== Internal Dependencies ===============================================

use super::{DimensionAware, Enemy, EntityId, MotionContext, SelfControlled};
use crate::core::config::ShiftConfig;
use crate::core::dimension::{Dimension, DimensionPalette, Transition, TransitionObserver};
use crate::core::level::EnemySpawn;
use crate::core::world::TileWorld;

//=== EntityRoster ========================================================

#[derive(Debug, Clone)]
pub struct EntityRoster {
    enemies: Vec<Enemy>,
    palette: DimensionPalette,
    next_id: u32,
}

impl EntityRoster {
    pub fn new(palette: DimensionPalette) -> Self {
        Self {
            enemies: Vec::new(),
            palette,
            next_id: 0,
        }
    }

    //--- Population -------------------------------------------------------

    /// Spawns an enemy and aligns it with `active` right away, so that a
    /// late spawn never starts in the wrong activation state.
    pub fn spawn(
        &mut self,
        spawn: &EnemySpawn,
        config: &ShiftConfig,
        active: Dimension,
    ) -> EntityId {
        let id = EntityId(self.next_id);
        self.next_id += 1;

        let mut enemy = Enemy::spawn(id, spawn, config);
        enemy.on_dimension_changed(active, &self.palette);
        debug!(
            "Spawned {} enemy {} in {} (materialized: {})",
            enemy.kind(),
            id,
            spawn.dimension(),
            enemy.is_materialized()
        );

        self.enemies.push(enemy);
        id
    }

    /// Removes an enemy. It receives no further notifications.
    pub fn despawn(&mut self, id: EntityId) -> Option<Enemy> {
        let index = self.enemies.iter().position(|enemy| enemy.id() == id)?;
        debug!("Despawned enemy {}", id);
        Some(self.enemies.remove(index))
    }

    //--- Queries ----------------------------------------------------------

    pub fn get(&self, id: EntityId) -> Option<&Enemy> {
        self.enemies.iter().find(|enemy| enemy.id() == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Enemy> {
        self.enemies.iter()
    }

    pub fn len(&self) -> usize {
        self.enemies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.enemies.is_empty()
    }

    //--- Simulation -------------------------------------------------------

    /// Lets every materialized enemy pick its velocity, then integrates
    /// all bodies against `layer`.
    pub fn advance(
        &mut self,
        context: &MotionContext,
        world: &TileWorld,
        layer: Dimension,
        gravity: f32,
    ) {
        for enemy in &mut self.enemies {
            enemy.steer(context);
            enemy.body_mut().step(world, layer, gravity, context.dt);
        }
    }
}

impl TransitionObserver for EntityRoster {
    fn on_transition(&mut self, transition: &Transition, _world: &TileWorld) {
        for enemy in &mut self.enemies {
            enemy.on_dimension_changed(transition.active, &self.palette);
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::clock::Timestamp;
    use crate::core::level::TileCoord;

    fn spawn(dimension: Dimension) -> EnemySpawn {
        EnemySpawn::Chase {
            at: TileCoord { x: 1, y: 1 },
            dimension,
        }
    }

    fn transition(active: Dimension) -> Transition {
        Transition {
            active,
            previous: active.other(),
            at: Timestamp::ZERO,
            unlocks_at: Timestamp::from_millis(200),
            sequence: 1,
        }
    }

    fn empty_world() -> TileWorld {
        TileWorld::new(&[vec![0]], &[vec![0]], 32.0)
    }

    #[test]
    fn spawn_aligns_with_active_dimension() {
        let config = ShiftConfig::default();
        let mut roster = EntityRoster::new(config.palette());

        let lumina = roster.spawn(&spawn(Dimension::Lumina), &config, Dimension::Lumina);
        let umbra = roster.spawn(&spawn(Dimension::Umbra), &config, Dimension::Lumina);

        assert_ne!(lumina, umbra);
        assert!(roster.get(lumina).is_some_and(|e| e.is_materialized()));
        assert!(roster.get(umbra).is_some_and(|e| !e.is_materialized()));
    }

    #[test]
    fn transition_reaches_every_live_enemy() {
        let config = ShiftConfig::default();
        let mut roster = EntityRoster::new(config.palette());
        let lumina = roster.spawn(&spawn(Dimension::Lumina), &config, Dimension::Lumina);
        let umbra = roster.spawn(&spawn(Dimension::Umbra), &config, Dimension::Lumina);

        roster.on_transition(&transition(Dimension::Umbra), &empty_world());

        assert!(roster.get(lumina).is_some_and(|e| !e.body().enabled));
        assert!(roster.get(umbra).is_some_and(|e| e.body().enabled));
    }

    #[test]
    fn despawned_enemy_is_not_notified() {
        let config = ShiftConfig::default();
        let mut roster = EntityRoster::new(config.palette());
        let id = roster.spawn(&spawn(Dimension::Umbra), &config, Dimension::Lumina);

        let removed = roster.despawn(id);
        roster.on_transition(&transition(Dimension::Umbra), &empty_world());

        let removed = removed.unwrap();
        assert!(!removed.is_materialized());
        assert!(roster.is_empty());
        assert!(roster.despawn(id).is_none());
    }
}
