//=========================================================================
// Core Systems Orchestrator
//=========================================================================
//
// Central coordinator for the game systems running on the logic
// (non-platform) thread.
//
// Responsibilities:
// - Receive platform events via the bounded crossbeam channel
// - Turn raw input into per-tick action frames
// - Drive the game session at a fixed tick rate (TPS)
//
// Notes:
// The orchestrator runs independently from the platform layer. It owns
// each subsystem directly and communicates with the platform only
// through message passing.
//
//=========================================================================

//=== Module Declarations =================================================

pub mod clock;
pub mod config;
pub mod dimension;
pub mod entity;
pub mod input;
pub mod level;
pub mod physics;
pub mod platform_bridge;
pub mod session;
pub mod world;

//=== External Dependencies ===============================================

use std::thread;
use std::time::{Duration, Instant};

use log::{debug, info};

//=== Internal Dependencies ===============================================

use clock::MonotonicClock;
use input::InputSystem;
use platform_bridge::{EventCollector, TickControl};
use session::GameSession;

//=== CoreSystemsOrchestrator =============================================

/// Owns the logic-thread systems until the core thread is spawned.
pub(crate) struct CoreSystemsOrchestrator {
    collector: EventCollector,
    input: InputSystem,
    session: GameSession,
    clock: MonotonicClock,
}

impl CoreSystemsOrchestrator {
    //--- Construction -----------------------------------------------------

    pub(crate) fn new(collector: EventCollector, input: InputSystem, session: GameSession) -> Self {
        Self {
            collector,
            input,
            session,
            clock: MonotonicClock::new(),
        }
    }

    //--- tick() -----------------------------------------------------------
    //
    // One logic tick: gather platform events, map them to actions and
    // advance the session by `dt` seconds.
    //
    fn tick(&mut self, dt: f32) -> TickControl {
        if self.collector.collect_frame() == TickControl::Exit {
            return TickControl::Exit;
        }

        let frame = self.input.process_frame(self.collector.batches());
        self.session.update(&frame, self.clock.now(), dt);

        TickControl::Continue
    }

    //--- spawn_core_thread() ----------------------------------------------
    //
    // Spawns the logic thread and ticks at `tps` until the window closes
    // or the platform channel disconnects.
    //
    pub(crate) fn spawn_core_thread(mut self, tps: f64) -> thread::JoinHandle<()> {
        let frame_duration = Duration::from_secs_f64(1.0 / tps);

        thread::spawn(move || {
            let mut last_tick = Instant::now();

            loop {
                let frame_start = Instant::now();
                let dt = frame_start.duration_since(last_tick).as_secs_f32();
                last_tick = frame_start;

                if self.tick(dt) == TickControl::Exit {
                    info!("Core thread exiting");
                    break;
                }

                let elapsed = frame_start.elapsed();
                if elapsed < frame_duration {
                    thread::sleep(frame_duration - elapsed);
                } else {
                    debug!("Tick overran budget: {:?}", elapsed);
                }
            }
        })
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
