//=========================================================================
// SHIFT Engine
//=========================================================================
//
// Main entry point and coordinator for the game.
//
// Architecture:
// ```text
//     EngineBuilder  ──build()──>  Engine  ──run()──>  [Runtime]
//         │                          │
//         ├─ with_tps()              ├─ events() → Receiver<GameEvent>
//         ├─ with_channel_capacity() └─ spawns logic thread
//         ├─ with_config()              runs platform
//         └─ with_levels()              blocks until exit
// ```
//
//=========================================================================

//=== External Dependencies ===============================================

use crossbeam_channel::{bounded, Receiver, Sender};
use log::{error, info};
use thiserror::Error;

//=== Internal Dependencies ===============================================

use crate::core::config::{ConfigError, ShiftConfig};
use crate::core::dimension::TransitionObserver;
use crate::core::input::{ActionMapper, InputSystem};
use crate::core::level::{LevelCatalog, LevelError};
use crate::core::platform_bridge::{EventCollector, PlatformError, PlatformEvent};
use crate::core::session::{EventSink, GameEvent, GameSession};
use crate::core::CoreSystemsOrchestrator;
use crate::platform::Platform;

//=== EngineError =========================================================

/// Failures at the engine boundary.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("configuration rejected: {0}")]
    Config(#[from] ConfigError),

    #[error("level data rejected: {0}")]
    Levels(#[from] LevelError),

    #[error("platform failure: {0}")]
    Platform(#[from] PlatformError),
}

//=== EngineBuilder =======================================================

/// Builder for configuring and constructing an [`Engine`].
///
/// # Default Values
///
/// - **TPS**: 60.0 (logic updates per second)
/// - **Channel capacity**: 128 platform events
/// - **Event capacity**: 256 outbound game events
/// - **Config**: [`ShiftConfig::default`]
/// - **Levels**: the built-in campaign
/// - **Bindings**: [`ActionMapper::with_defaults`]
///
/// # Examples
///
/// ```no_run
/// use shift_engine::EngineBuilder;
///
/// let engine = EngineBuilder::new()
///     .with_tps(120.0)
///     .with_channel_capacity(256)
///     .build()
///     .expect("built-in campaign is valid");
///
/// let events = engine.events();
/// std::thread::spawn(move || {
///     for event in events {
///         println!("{:?}", event);
///     }
/// });
///
/// engine.run().expect("platform failure");
/// ```
pub struct EngineBuilder {
    tps: f64,
    channel_capacity: usize,
    event_capacity: usize,
    config: ShiftConfig,
    levels: Option<LevelCatalog>,
    mapper: Option<ActionMapper>,
    observers: Vec<Box<dyn TransitionObserver + Send>>,
}

impl EngineBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            tps: 60.0,
            channel_capacity: 128,
            event_capacity: 256,
            config: ShiftConfig::default(),
            levels: None,
            mapper: None,
            observers: Vec::new(),
        }
    }

    /// Sets the target ticks per second for the logic thread.
    ///
    /// Default: 60.0
    ///
    /// # Panics
    ///
    /// Panics if `tps <= 0.0`.
    pub fn with_tps(mut self, tps: f64) -> Self {
        assert!(tps > 0.0, "TPS must be positive, got {}", tps);
        self.tps = tps;
        self
    }

    /// Sets the channel capacity for platform → core communication.
    ///
    /// Default: 128
    ///
    /// # Panics
    ///
    /// Panics if `capacity == 0`.
    pub fn with_channel_capacity(mut self, capacity: usize) -> Self {
        assert!(capacity > 0, "Channel capacity must be positive");
        self.channel_capacity = capacity;
        self
    }

    /// Sets the capacity of the outbound [`GameEvent`] channel. Events
    /// beyond it are dropped, never blocking the simulation.
    ///
    /// Default: 256
    ///
    /// # Panics
    ///
    /// Panics if `capacity == 0`.
    pub fn with_event_capacity(mut self, capacity: usize) -> Self {
        assert!(capacity > 0, "Event capacity must be positive");
        self.event_capacity = capacity;
        self
    }

    /// Replaces the tuning values. Validated by [`EngineBuilder::build`].
    pub fn with_config(mut self, config: ShiftConfig) -> Self {
        self.config = config;
        self
    }

    /// Plays `levels` instead of the built-in campaign.
    pub fn with_levels(mut self, levels: LevelCatalog) -> Self {
        self.levels = Some(levels);
        self
    }

    /// Replaces the default key and mouse bindings.
    pub fn with_bindings(mut self, mapper: ActionMapper) -> Self {
        self.mapper = Some(mapper);
        self
    }

    /// Adds a transition observer notified on every accepted shift, after
    /// the built-in observers.
    pub fn with_observer(mut self, observer: Box<dyn TransitionObserver + Send>) -> Self {
        self.observers.push(observer);
        self
    }

    /// Validates the configuration and level data and assembles the
    /// logic-thread systems.
    pub fn build(self) -> Result<Engine, EngineError> {
        info!(
            "Building engine (TPS: {}, channel: {}, events: {})",
            self.tps, self.channel_capacity, self.event_capacity
        );

        self.config.validate()?;
        let catalog = match self.levels {
            Some(levels) => levels,
            None => LevelCatalog::builtin()?,
        };

        let (platform_tx, platform_rx) = bounded(self.channel_capacity);
        let (sink, events) = EventSink::channel(self.event_capacity);

        let mut session = GameSession::new(self.config, catalog, sink);
        for observer in self.observers {
            session.add_observer(observer);
        }

        let input = match self.mapper {
            Some(mapper) => InputSystem::new(mapper),
            None => InputSystem::default(),
        };

        Ok(Engine {
            orchestrator: CoreSystemsOrchestrator::new(
                EventCollector::new(platform_rx),
                input,
                session,
            ),
            platform_tx,
            events,
            tps: self.tps,
            channel_capacity: self.channel_capacity,
        })
    }
}

impl Default for EngineBuilder {
    fn default() -> Self {
        Self::new()
    }
}

//=== Engine ==============================================================

/// SHIFT runtime.
///
/// # Architecture
///
/// ```text
/// Engine (Main Thread)
///   ├─► CoreSystemsOrchestrator (Logic Thread @ TPS)
///   │     └─► InputSystem → GameSession → GameEvent channel
///   │
///   └─► Platform (Event Loop)
///         └─► Window, Input Polling
///
/// Communication: crossbeam channel (PlatformEvent)
/// ```
pub struct Engine {
    orchestrator: CoreSystemsOrchestrator,
    platform_tx: Sender<PlatformEvent>,
    events: Receiver<GameEvent>,
    tps: f64,
    channel_capacity: usize,
}

impl Engine {
    /// Returns a handle to the outbound game event stream.
    ///
    /// Every handle shares one queue. If no handle outlives [`Engine::run`]
    /// the stream closes and the session stops emitting.
    pub fn events(&self) -> Receiver<GameEvent> {
        self.events.clone()
    }

    //--- Execution --------------------------------------------------------

    /// Starts the runtime and blocks until the window closes.
    ///
    /// # Lifecycle
    ///
    /// 1. Spawns the logic thread running at the configured TPS
    /// 2. Runs the platform event loop (blocks here)
    /// 3. On window close: platform exits → channel disconnects → logic
    ///    thread terminates
    ///
    /// A panicking logic thread is logged; the platform keeps running so
    /// the user can still close the window.
    pub fn run(self) -> Result<(), EngineError> {
        info!(
            "Starting engine runtime (TPS: {}, channel: {})",
            self.tps, self.channel_capacity
        );

        let Engine {
            orchestrator,
            platform_tx,
            events,
            tps,
            ..
        } = self;
        drop(events);

        //--- 1. Spawn the core logic thread -------------------------------
        let core_handle = orchestrator.spawn_core_thread(tps);
        info!("Core logic thread spawned");

        //--- 2. Launch the platform subsystem -----------------------------
        let platform = Platform::new(platform_tx, "SHIFT");
        info!("Platform initialized, entering event loop");

        let result = platform.run();
        if let Err(e) = &result {
            error!("Platform error: {}", e);
        }

        info!("Platform event loop exited");

        //--- 3. Cleanup: wait for the logic thread ------------------------
        match core_handle.join() {
            Ok(()) => info!("Core thread terminated cleanly"),
            Err(e) => error!("Core thread panicked: {:?}", e),
        }

        info!("Engine shutdown complete");
        result.map_err(EngineError::from)
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::dimension::Transition;
    use crate::core::world::TileWorld;

    //=====================================================================
    // EngineBuilder Tests
    //=====================================================================

    #[test]
    fn builder_defaults() {
        let builder = EngineBuilder::new();
        assert_eq!(builder.tps, 60.0);
        assert_eq!(builder.channel_capacity, 128);
        assert_eq!(builder.event_capacity, 256);
        assert!(builder.levels.is_none());
    }

    #[test]
    fn builder_with_tps() {
        let builder = EngineBuilder::new().with_tps(120.0);
        assert_eq!(builder.tps, 120.0);
    }

    #[test]
    #[should_panic(expected = "TPS must be positive")]
    fn builder_with_tps_panics_on_zero() {
        EngineBuilder::new().with_tps(0.0);
    }

    #[test]
    #[should_panic(expected = "TPS must be positive")]
    fn builder_with_tps_panics_on_negative() {
        EngineBuilder::new().with_tps(-60.0);
    }

    #[test]
    fn builder_with_channel_capacity() {
        let builder = EngineBuilder::new().with_channel_capacity(256);
        assert_eq!(builder.channel_capacity, 256);
    }

    #[test]
    #[should_panic(expected = "Channel capacity must be positive")]
    fn builder_with_channel_capacity_panics_on_zero() {
        EngineBuilder::new().with_channel_capacity(0);
    }

    #[test]
    #[should_panic(expected = "Event capacity must be positive")]
    fn builder_with_event_capacity_panics_on_zero() {
        EngineBuilder::new().with_event_capacity(0);
    }

    #[test]
    fn builder_fluent_api_chaining() {
        let engine = EngineBuilder::new()
            .with_tps(120.0)
            .with_channel_capacity(256)
            .build()
            .unwrap();

        assert_eq!(engine.tps, 120.0);
        assert_eq!(engine.channel_capacity, 256);
    }

    #[test]
    fn build_rejects_invalid_config() {
        let config = ShiftConfig {
            lock_duration_ms: 100,
            visual_transition_ms: 150,
            ..ShiftConfig::default()
        };

        let result = EngineBuilder::new().with_config(config).build();
        assert!(matches!(result, Err(EngineError::Config(_))));
    }

    #[test]
    fn built_engine_reports_first_level() {
        let engine = EngineBuilder::new().build().unwrap();
        let events = engine.events();

        assert!(matches!(
            events.try_recv(),
            Ok(GameEvent::LevelLoaded { index: 0, .. })
        ));
    }

    #[test]
    fn builder_accepts_observers() {
        struct Silent;
        impl TransitionObserver for Silent {
            fn on_transition(&mut self, _transition: &Transition, _world: &TileWorld) {}
        }

        let engine = EngineBuilder::new()
            .with_observer(Box::new(Silent))
            .build();
        assert!(engine.is_ok());
    }
}
