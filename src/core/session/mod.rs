//=========================================================================
// Game Session
//=========================================================================
//
// Runs a campaign: one level context at a time, restarted on death and
// replaced on completion.
//
// Responsibilities:
// - Apply per-tick actions in a fixed order (restart, shift, settle,
//   movement, outcome)
// - Route accepted shifts to cue dispatch and external observers
// - Report progress as `GameEvent`s on an outbound channel
//
// Architecture:
// ```text
//   ActionFrame ──► GameSession::update()
//                      ├─► LevelContext (state machine, entities, colliders)
//                      ├─► CueDispatcher ──┐
//                      └─► EventSink ──────┴──► Receiver<GameEvent>
// ```
//
//=========================================================================

//=== Module Declarations =================================================

mod context;
mod events;

//=== Public API ==========================================================

pub use context::{LevelContext, StepOutcome};
pub use events::{CueDispatcher, DeathCause, EffectCue, EventSink, GameEvent};

//=== External Dependencies ===============================================

use std::time::Duration;

use log::{debug, info};

//=== Internal Dependencies ===============================================

use crate::core::clock::Timestamp;
use crate::core::config::ShiftConfig;
use crate::core::dimension::{ShiftOutcome, TransitionObserver};
use crate::core::input::{ActionFrame, GameAction};
use crate::core::level::LevelCatalog;

//=== GameSession =========================================================

pub struct GameSession {
    config: ShiftConfig,
    catalog: LevelCatalog,
    context: Option<LevelContext>,
    sink: EventSink,
    cues: CueDispatcher,
    observers: Vec<Box<dyn TransitionObserver + Send>>,
}

impl GameSession {
    /// Longest simulated step. Longer ticks are clamped so a stall never
    /// tunnels bodies through tiles.
    pub const MAX_STEP: f32 = 1.0 / 20.0;

    //--- Construction -----------------------------------------------------

    /// Starts the campaign at its first level.
    pub fn new(config: ShiftConfig, catalog: LevelCatalog, sink: EventSink) -> Self {
        let cues = CueDispatcher::new(
            sink.clone(),
            config.palette(),
            Duration::from_millis(config.visual_transition_ms),
        );

        let mut session = Self {
            config,
            catalog,
            context: None,
            sink,
            cues,
            observers: Vec::new(),
        };
        session.load_level(0);
        session
    }

    /// Registers an observer notified after the built-in ones on every
    /// accepted shift, for the lifetime of the session.
    pub fn add_observer(&mut self, observer: Box<dyn TransitionObserver + Send>) {
        self.observers.push(observer);
    }

    //--- Level Lifecycle --------------------------------------------------

    fn load_level(&mut self, index: usize) {
        let Some(level) = self.catalog.get(index) else {
            return;
        };

        let context = LevelContext::load(index, level, &self.config);
        self.sink.emit(GameEvent::LevelLoaded {
            index,
            name: level.name.clone(),
        });
        self.context = Some(context);
    }

    /// Tears down the current level and builds it again from its data.
    pub fn restart_level(&mut self) {
        if let Some(index) = self.level_index() {
            info!("Restarting level {}", index);
            self.load_level(index);
        }
    }

    fn advance_level(&mut self, finished: usize) {
        self.sink.emit(GameEvent::LevelCompleted { index: finished });

        let next = finished + 1;
        if next < self.catalog.len() {
            info!("Level {} completed, advancing to {}", finished, next);
            self.load_level(next);
        } else {
            info!("Campaign completed");
            self.context = None;
            self.sink.emit(GameEvent::CampaignCompleted);
        }
    }

    //--- update() ---------------------------------------------------------
    //
    // One simulation tick. `dt` is in seconds and clamped to MAX_STEP.
    //
    pub fn update(&mut self, frame: &ActionFrame, now: Timestamp, dt: f32) {
        if self.context.is_none() {
            return;
        }

        //--- Step 1: Restart ----------------------------------------------
        if frame.pressed(GameAction::Restart) {
            self.restart_level();
            return;
        }

        let Some(context) = self.context.as_mut() else {
            return;
        };

        //--- Step 2: Shift request ----------------------------------------
        if frame.shift_requested() {
            self.cues.set_focus(context.player().body().center());

            let mut extra: Vec<&mut dyn TransitionObserver> =
                Vec::with_capacity(1 + self.observers.len());
            extra.push(&mut self.cues);
            for observer in &mut self.observers {
                extra.push(observer.as_mut());
            }

            if let ShiftOutcome::Accepted(transition) = context.request_shift(now, &mut extra) {
                self.sink.emit(GameEvent::DimensionShifted {
                    active: transition.active,
                    sequence: transition.sequence,
                    at: transition.at,
                });
            }
        }

        //--- Step 3: Lock expiry ------------------------------------------
        context.settle(now);

        //--- Step 4: Movement ---------------------------------------------
        let dt = dt.clamp(0.0, Self::MAX_STEP);
        let outcome = context.step(frame.horizontal(), frame.pressed(GameAction::Jump), dt);
        let index = context.index();

        //--- Step 5: Outcome ----------------------------------------------
        match outcome {
            StepOutcome::Running => {}
            StepOutcome::PlayerDied(cause) => {
                debug!("Player died in level {}: {:?}", index, cause);
                self.sink.emit(GameEvent::PlayerDied { index, cause });
                self.load_level(index);
            }
            StepOutcome::ReachedExit => self.advance_level(index),
        }
    }

    //--- Queries ----------------------------------------------------------

    /// The running level, or `None` once the campaign is over.
    pub fn context(&self) -> Option<&LevelContext> {
        self.context.as_ref()
    }

    pub fn level_index(&self) -> Option<usize> {
        self.context.as_ref().map(LevelContext::index)
    }

    pub fn is_finished(&self) -> bool {
        self.context.is_none()
    }

    pub fn config(&self) -> &ShiftConfig {
        &self.config
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
