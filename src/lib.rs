//=========================================================================
// SHIFT Engine — Library Root
//=========================================================================
//
// A dual-dimension platformer core. Two tile layers share one grid; only
// the active one collides, and a cooldown-gated state machine swaps them.
//
// Responsibilities:
// - Expose the engine facade (`Engine`, `EngineBuilder`)
// - Expose the simulation under `core` (dimension state machine, tile
//   world, entities, physics, levels, session) for embedding and tests
// - Keep OS integration (`platform`) private
//
// Typical usage:
// ```no_run
// use shift_engine::EngineBuilder;
//
// fn main() -> Result<(), shift_engine::EngineError> {
//     EngineBuilder::new().build()?.run()
// }
// ```
//
//=========================================================================

//--- Public Modules ------------------------------------------------------

pub mod core;
pub mod prelude;

//--- Internal Modules ----------------------------------------------------
//
// `platform` owns the winit window and event loop and is not part of the
// public API surface.
//
mod engine;
mod platform;

//--- Public Exports ------------------------------------------------------

pub use engine::{Engine, EngineBuilder, EngineError};
