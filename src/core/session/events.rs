//=========================================================================
// Game Events
//=========================================================================
//
// Outbound notifications from the simulation to whoever listens
// (renderer, audio, UI, tests).
//
// Architecture:
// ```text
//   GameSession ──┐
//                 ├─► EventSink ──crossbeam──► Receiver<GameEvent>
//   CueDispatcher ┘
// ```
//
// Emitters never know who listens. A full channel drops the event with
// a warning; a dropped receiver silences the sink for good. Neither case
// affects the simulation.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::time::Duration;

use crossbeam_channel::{bounded, Receiver, Sender, TrySendError};
use glam::Vec2;
use log::{debug, warn};

//=== Internal Dependencies ===============================================

use crate::core::clock::Timestamp;
use crate::core::dimension::{Dimension, DimensionPalette, Tint, Transition, TransitionObserver};
use crate::core::entity::EntityId;
use crate::core::world::TileWorld;

//=== GameEvent ===========================================================

#[derive(Debug, Clone, PartialEq)]
pub enum GameEvent {
    LevelLoaded { index: usize, name: String },
    DimensionShifted { active: Dimension, sequence: u64, at: Timestamp },
    PlayerDied { index: usize, cause: DeathCause },
    LevelCompleted { index: usize },
    CampaignCompleted,
    Cues(Vec<EffectCue>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeathCause {
    Enemy(EntityId),
    Fell,
}

//=== EffectCue ===========================================================

/// Stateless presentation reaction to a shift.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EffectCue {
    CameraFlash { color: Tint, duration: Duration },
    CameraShake { intensity: f32, duration: Duration },
    ParticleBurst { at: Vec2, color: Tint, count: u32 },
    Audio { name: &'static str },
    PaletteSwap { background: Tint, duration: Duration },
}

//=== EventSink ===========================================================

#[derive(Debug, Clone)]
pub struct EventSink {
    sender: Option<Sender<GameEvent>>,
}

impl EventSink {
    /// Creates a sink and the receiving end of its channel.
    pub fn channel(capacity: usize) -> (Self, Receiver<GameEvent>) {
        let (sender, receiver) = bounded(capacity);
        (Self { sender: Some(sender) }, receiver)
    }

    pub fn emit(&mut self, event: GameEvent) {
        let Some(sender) = &self.sender else {
            return;
        };

        match sender.try_send(event) {
            Ok(()) => {}
            Err(TrySendError::Full(event)) => {
                warn!("Game event backlog full, dropping {:?}", event);
            }
            Err(TrySendError::Disconnected(_)) => {
                debug!("Game event receiver dropped, detaching sink");
                self.sender = None;
            }
        }
    }
}

//=== CueDispatcher =======================================================

/// Turns each transition into a batch of presentation cues.
#[derive(Debug, Clone)]
pub struct CueDispatcher {
    sink: EventSink,
    palette: DimensionPalette,
    visual_duration: Duration,
    focus: Vec2,
}

impl CueDispatcher {
    const SHAKE_INTENSITY: f32 = 4.0;
    const SHAKE_DURATION: Duration = Duration::from_millis(120);
    const BURST_COUNT: u32 = 24;

    pub fn new(sink: EventSink, palette: DimensionPalette, visual_duration: Duration) -> Self {
        Self {
            sink,
            palette,
            visual_duration,
            focus: Vec2::ZERO,
        }
    }

    /// World position the particle burst is centered on.
    pub fn set_focus(&mut self, focus: Vec2) {
        self.focus = focus;
    }

    fn background(dimension: Dimension) -> Tint {
        match dimension {
            Dimension::Lumina => Tint::from_rgb(0xF4_EB_D0),
            Dimension::Umbra => Tint::from_rgb(0x1B_15_30),
        }
    }

    fn audio(dimension: Dimension) -> &'static str {
        match dimension {
            Dimension::Lumina => "shift_to_lumina",
            Dimension::Umbra => "shift_to_umbra",
        }
    }

    /// Cues for a shift into `active`.
    pub fn cues_for(&self, active: Dimension) -> Vec<EffectCue> {
        let color = self.palette.ghost_tint(active);

        vec![
            EffectCue::CameraFlash { color, duration: self.visual_duration },
            EffectCue::CameraShake {
                intensity: Self::SHAKE_INTENSITY,
                duration: Self::SHAKE_DURATION,
            },
            EffectCue::ParticleBurst { at: self.focus, color, count: Self::BURST_COUNT },
            EffectCue::Audio { name: Self::audio(active) },
            EffectCue::PaletteSwap {
                background: Self::background(active),
                duration: self.visual_duration,
            },
        ]
    }
}

impl TransitionObserver for CueDispatcher {
    fn on_transition(&mut self, transition: &Transition, _world: &TileWorld) {
        let cues = self.cues_for(transition.active);
        self.sink.emit(GameEvent::Cues(cues));
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
