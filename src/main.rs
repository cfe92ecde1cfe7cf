//=========================================================================
// SHIFT — Game Binary
//=========================================================================
//
// Installs logging, loads optional tuning and level files, and runs the
// engine until the window closes. Game events are logged from a
// background thread.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::path::{Path, PathBuf};
use std::thread;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;

//=== Internal Dependencies ===============================================

use shift_engine::core::config::ShiftConfig;
use shift_engine::core::level::LevelCatalog;
use shift_engine::core::session::GameEvent;
use shift_engine::EngineBuilder;

//=== Arguments ===========================================================

#[derive(Parser, Debug)]
#[command(author, version, about = "SHIFT: a dual-dimension platformer", long_about = None)]
struct Args {
    /// TOML file overriding the default tuning values
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// JSON level catalog played instead of the built-in campaign
    #[arg(short, long)]
    levels: Option<PathBuf>,

    /// Logic ticks per second
    #[arg(long, default_value_t = 60.0)]
    tps: f64,
}

//=== Entry Point =========================================================

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let mut builder = EngineBuilder::new().with_tps(args.tps);
    if let Some(path) = &args.config {
        builder = builder.with_config(load_config(path)?);
    }
    if let Some(path) = &args.levels {
        builder = builder.with_levels(load_levels(path)?);
    }

    let engine = builder.build().context("failed to build engine")?;

    let events = engine.events();
    thread::spawn(move || {
        for event in events {
            log_event(&event);
        }
    });

    engine.run().context("engine stopped with an error")
}

//=== Loading =============================================================

fn load_config(path: &Path) -> Result<ShiftConfig> {
    let source = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    ShiftConfig::from_toml_str(&source)
        .with_context(|| format!("failed to load config {}", path.display()))
}

fn load_levels(path: &Path) -> Result<LevelCatalog> {
    let source = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read levels {}", path.display()))?;
    LevelCatalog::from_json(&source)
        .with_context(|| format!("failed to load levels {}", path.display()))
}

//=== Event Log ===========================================================

fn log_event(event: &GameEvent) {
    match event {
        GameEvent::LevelLoaded { index, name } => info!("Level {} loaded: {}", index, name),
        GameEvent::DimensionShifted { active, sequence, .. } => {
            info!("Shift #{} into {}", sequence, active)
        }
        GameEvent::PlayerDied { index, cause } => {
            info!("Player died in level {} ({:?})", index, cause)
        }
        GameEvent::LevelCompleted { index } => info!("Level {} completed", index),
        GameEvent::CampaignCompleted => info!("Campaign completed"),
        GameEvent::Cues(_) => {}
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use shift_engine::core::config::ConfigError;
    use std::fs;

    fn scratch_file(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("shift-{}-{}", std::process::id(), name));
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn config_error_keeps_its_source() {
        let path = scratch_file("bad-tint.toml", "lumina_ghost_tint = 1\numbra_ghost_tint = 1\n");

        let error = load_config(&path).unwrap_err();
        fs::remove_file(&path).unwrap();

        assert!(error.to_string().starts_with("failed to load config"));
        assert!(matches!(
            error.downcast_ref::<ConfigError>(),
            Some(ConfigError::IndistinctGhostTints(1))
        ));
    }

    #[test]
    fn missing_level_file_reports_path_and_io_error() {
        let path = std::env::temp_dir().join("shift-no-such-levels.json");

        let error = load_levels(&path).unwrap_err();

        assert!(error.to_string().contains("shift-no-such-levels.json"));
        assert!(error.downcast_ref::<std::io::Error>().is_some());
    }

    #[test]
    fn valid_config_file_loads() {
        let path = scratch_file("ok.toml", "lock_duration_ms = 250\n");

        let config = load_config(&path);
        fs::remove_file(&path).unwrap();

        assert_eq!(config.unwrap().lock_duration_ms, 250);
    }
}
