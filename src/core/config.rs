//=========================================================================
// Game Configuration
//=========================================================================
//
// Tunables for the dimension core and the gameplay around it.
//
// All fields have defaults, so a TOML file only needs to mention what it
// overrides. `validate()` enforces the cross-field rules (most notably
// that the transition lock outlasts the visual crossfade).
//
//=========================================================================

//=== External Dependencies ===============================================

use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;

//=== Internal Dependencies ===============================================

use crate::core::dimension::{DimensionPalette, Tint};

//=== ConfigError =========================================================

/// Rejected configuration values.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("lock duration {lock_ms}ms is shorter than the visual transition ({visual_ms}ms)")]
    LockShorterThanTransition { lock_ms: u64, visual_ms: u64 },

    #[error("ghost alpha must be in [0.0, 1.0), got {0}")]
    GhostAlphaOutOfRange(f32),

    #[error("ghost tints must differ per dimension, both are {0:#08x}")]
    IndistinctGhostTints(u32),

    #[error("{field} must be positive, got {value}")]
    NonPositive { field: &'static str, value: f32 },

    #[error("invalid config file: {0}")]
    Parse(#[from] toml::de::Error),
}

//=== ShiftConfig =========================================================

/// Gameplay and dimension tuning.
///
/// # Defaults
///
/// - **Lock**: 200ms, crossfade 150ms
/// - **Ghost**: alpha 0.2, warm tint for Lumina, cool tint for Umbra
/// - **Tiles**: 32 world units
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ShiftConfig {
    /// Cooldown after an accepted shift during which requests are dropped.
    pub lock_duration_ms: u64,

    /// Length of the cosmetic crossfade. Never longer than the lock.
    pub visual_transition_ms: u64,

    /// Alpha applied to the inactive layer and to ghosted entities.
    pub ghost_alpha: f32,

    /// Tint for Lumina while it is the ghost layer (0xRRGGBB).
    pub lumina_ghost_tint: u32,

    /// Tint for Umbra while it is the ghost layer (0xRRGGBB).
    pub umbra_ghost_tint: u32,

    pub tile_size: f32,
    pub gravity: f32,
    pub player_speed: f32,
    pub jump_velocity: f32,
    pub patrol_speed: f32,
    pub chase_speed: f32,

    /// Distance under which chase enemies start pursuing the player.
    pub chase_radius: f32,
}

impl Default for ShiftConfig {
    fn default() -> Self {
        Self {
            lock_duration_ms: 200,
            visual_transition_ms: 150,
            ghost_alpha: 0.2,
            lumina_ghost_tint: 0xFF_B3_47,
            umbra_ghost_tint: 0x4A_6F_FF,
            tile_size: 32.0,
            gravity: 1400.0,
            player_speed: 220.0,
            jump_velocity: 560.0,
            patrol_speed: 70.0,
            chase_speed: 110.0,
            chase_radius: 224.0,
        }
    }
}

impl ShiftConfig {
    //--- Loading ----------------------------------------------------------

    /// Parses and validates a TOML document.
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks cross-field rules.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.lock_duration_ms < self.visual_transition_ms {
            return Err(ConfigError::LockShorterThanTransition {
                lock_ms: self.lock_duration_ms,
                visual_ms: self.visual_transition_ms,
            });
        }

        if !(0.0..1.0).contains(&self.ghost_alpha) {
            return Err(ConfigError::GhostAlphaOutOfRange(self.ghost_alpha));
        }

        let lumina = Tint::from_rgb(self.lumina_ghost_tint);
        if lumina == Tint::from_rgb(self.umbra_ghost_tint) {
            return Err(ConfigError::IndistinctGhostTints(lumina.rgb()));
        }

        let positive = [
            ("tile_size", self.tile_size),
            ("gravity", self.gravity),
            ("player_speed", self.player_speed),
            ("jump_velocity", self.jump_velocity),
            ("patrol_speed", self.patrol_speed),
            ("chase_speed", self.chase_speed),
            ("chase_radius", self.chase_radius),
        ];
        for (field, value) in positive {
            if value <= 0.0 || !value.is_finite() {
                return Err(ConfigError::NonPositive { field, value });
            }
        }

        Ok(())
    }

    //--- Derived Values ---------------------------------------------------

    pub fn lock_duration(&self) -> Duration {
        Duration::from_millis(self.lock_duration_ms)
    }

    /// Visual policy shared by tiles and entities.
    pub fn palette(&self) -> DimensionPalette {
        DimensionPalette {
            ghost_alpha: self.ghost_alpha,
            lumina_ghost_tint: Tint::from_rgb(self.lumina_ghost_tint),
            umbra_ghost_tint: Tint::from_rgb(self.umbra_ghost_tint),
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = ShiftConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.lock_duration(), Duration::from_millis(200));
        assert_eq!(config.ghost_alpha, 0.2);
    }

    #[test]
    fn toml_overrides_only_named_fields() {
        let config = ShiftConfig::from_toml_str("lock_duration_ms = 300\nghost_alpha = 0.35\n")
            .expect("valid config");
        assert_eq!(config.lock_duration_ms, 300);
        assert_eq!(config.ghost_alpha, 0.35);
        assert_eq!(config.tile_size, 32.0);
    }

    #[test]
    fn lock_shorter_than_visual_is_rejected() {
        let result =
            ShiftConfig::from_toml_str("lock_duration_ms = 100\nvisual_transition_ms = 150\n");
        assert!(matches!(
            result,
            Err(ConfigError::LockShorterThanTransition { lock_ms: 100, visual_ms: 150 })
        ));
    }

    #[test]
    fn lock_equal_to_visual_is_accepted() {
        let config = ShiftConfig {
            lock_duration_ms: 150,
            visual_transition_ms: 150,
            ..ShiftConfig::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn opaque_ghost_is_rejected() {
        let config = ShiftConfig { ghost_alpha: 1.0, ..ShiftConfig::default() };
        assert!(matches!(config.validate(), Err(ConfigError::GhostAlphaOutOfRange(_))));
    }

    #[test]
    fn shared_ghost_tint_is_rejected() {
        let source = "lumina_ghost_tint = 0x808080\numbra_ghost_tint = 0x808080\n";
        let result = ShiftConfig::from_toml_str(source);
        assert!(matches!(result, Err(ConfigError::IndistinctGhostTints(0x80_80_80))));
    }

    #[test]
    fn ghost_tints_compare_on_rgb_only() {
        let config = ShiftConfig {
            lumina_ghost_tint: 0xFF_4A_6F_FF,
            umbra_ghost_tint: 0x4A_6F_FF,
            ..ShiftConfig::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::IndistinctGhostTints(_))));
    }

    #[test]
    fn non_positive_tile_size_is_rejected() {
        let config = ShiftConfig { tile_size: 0.0, ..ShiftConfig::default() };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NonPositive { field: "tile_size", .. })
        ));
    }

    #[test]
    fn malformed_toml_reports_parse_error() {
        let result = ShiftConfig::from_toml_str("lock_duration_ms = \"soon\"");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn palette_carries_configured_tints() {
        let palette = ShiftConfig::default().palette();
        assert_eq!(palette.lumina_ghost_tint, Tint::from_rgb(0xFFB347));
        assert_eq!(palette.umbra_ghost_tint, Tint::from_rgb(0x4A6FFF));
    }
}
