//=========================================================================
// Physics
//=========================================================================
//
// Arcade-style AABB physics against the tile grid.
//
// Architecture:
//   Aabb                 — overlap primitive
//   Body                 — kinematic box stepped against one tile layer
//   CollisionCoordinator — which layer bodies collide with, and
//                          player/enemy contact
//
//=========================================================================

//=== Module Declarations =================================================

mod aabb;
mod body;
mod collision;

//=== Public API ==========================================================

pub use aabb::Aabb;
pub use body::Body;
pub use collision::CollisionCoordinator;
