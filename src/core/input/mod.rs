//=========================================================================
// Input System
//=========================================================================
//
// Turns the raw input batches received during a tick into an
// `ActionFrame`.
//
// Responsibilities:
// - Aggregate and process batches of raw input events
// - Keep held state across ticks and edge state for one tick
// - Resolve bindings into game actions
//
// Notes:
// This system is owned and updated by the CoreSystemsOrchestrator.
//
//=========================================================================

//=== Module Declarations =================================================

mod action;
mod action_mapper;
mod event;
mod state_tracker;

//=== Public API ==========================================================

pub use action::{ActionFrame, GameAction};
pub use action_mapper::ActionMapper;
pub use event::{InputEvent, KeyCode, MouseButton};
pub use state_tracker::StateTracker;

//=== External Dependencies ===============================================

use log::trace;

//=== InputSystem =========================================================

#[derive(Debug)]
pub struct InputSystem {
    tracker: StateTracker,
    mapper: ActionMapper,
}

impl InputSystem {
    //--- Construction -----------------------------------------------------

    pub fn new(mapper: ActionMapper) -> Self {
        Self {
            tracker: StateTracker::new(),
            mapper,
        }
    }

    //--- process_frame() --------------------------------------------------
    //
    // Consumes all input batches received during the current tick, in
    // arrival order, and returns the resulting actions.
    //
    pub fn process_frame(&mut self, batches: &[Vec<InputEvent>]) -> ActionFrame {
        self.tracker.clear();
        for batch in batches {
            self.tracker.process_events(batch);
        }

        let frame = self.mapper.map_frame(&self.tracker);
        if !frame.is_idle() {
            trace!("Input frame: {:?}", frame);
        }
        frame
    }

    //--- Accessors --------------------------------------------------------

    pub fn tracker(&self) -> &StateTracker {
        &self.tracker
    }

    pub fn mapper_mut(&mut self) -> &mut ActionMapper {
        &mut self.mapper
    }
}

impl Default for InputSystem {
    fn default() -> Self {
        Self::new(ActionMapper::with_defaults())
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
