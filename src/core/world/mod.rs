//=========================================================================
// Tile World
//=========================================================================
//
// Architecture:
//   TileWorld
//     ├─ lumina: TileLayer
//     └─ umbra:  TileLayer
//
// Layers are created once per level load and restyled only through the
// dimension state machine.
//
//=========================================================================

//=== Module Declarations =================================================

mod tile_layer;
mod tile_world;

//=== Public API ==========================================================

pub use tile_layer::{TileCell, TileLayer, TilePos};
pub use tile_world::TileWorld;
