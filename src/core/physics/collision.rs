//=========================================================================
// Collision Coordinator
//=========================================================================
//
// Keeps the player and enemy colliders bound to exactly one tile layer:
// the active one. Rebinding happens on each transition notification,
// which the state machine only sends after the layers were restyled, so
// the bound layer is never stale.
//
//=========================================================================

//=== External Dependencies ===============================================

use log::debug;

//=== Internal Dependencies ===============================================

use crate::core::dimension::{Dimension, Transition, TransitionObserver};
use crate::core::entity::{EntityId, EntityRoster, Player};
use crate::core::world::TileWorld;

//=== CollisionCoordinator ================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollisionCoordinator {
    bound_layer: Dimension,
    rebinds: u64,
}

impl CollisionCoordinator {
    /// Binds all colliders to `active`. Used at level load, where no
    /// transition is emitted.
    pub fn bound_to(active: Dimension) -> Self {
        debug!("Colliders bound to {} layer", active);
        Self {
            bound_layer: active,
            rebinds: 0,
        }
    }

    /// The only layer bodies collide with.
    pub fn bound_layer(&self) -> Dimension {
        self.bound_layer
    }

    /// Number of rebinds since load.
    pub fn rebinds(&self) -> u64 {
        self.rebinds
    }

    /// First enabled enemy overlapping the player, if any.
    ///
    /// Ghosted enemies have their body disabled and are skipped.
    pub fn player_contact(&self, player: &Player, roster: &EntityRoster) -> Option<EntityId> {
        let player_box = player.body().aabb();

        roster
            .iter()
            .filter(|enemy| enemy.body().enabled)
            .find(|enemy| enemy.body().aabb().intersects(&player_box))
            .map(|enemy| enemy.id())
    }
}

impl TransitionObserver for CollisionCoordinator {
    fn on_transition(&mut self, transition: &Transition, world: &TileWorld) {
        debug_assert!(world
            .layer(transition.active)
            .occupied()
            .all(|(_, cell)| cell.collides));

        self.bound_layer = transition.active;
        self.rebinds += 1;
        debug!(
            "Colliders rebound to {} layer (rebind #{})",
            transition.active, self.rebinds
        );
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
