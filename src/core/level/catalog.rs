//=========================================================================
// Level Catalog
//=========================================================================
//
// Ordered list of validated levels. The built-in campaign is embedded in
// the binary; custom campaigns are loaded from JSON:
//
// ```json
// { "levels": [ { "name": "...", "lumina": [[...]], "umbra": [[...]],
//                 "spawn": { "x": 1, "y": 6 }, "exit": { "x": 12, "y": 6 },
//                 "enemies": [] } ] }
// ```
//
//=========================================================================

//=== External Dependencies ===============================================

use log::info;
use serde::Deserialize;

//=== Internal Dependencies ===============================================

use super::{LevelData, LevelError};

//=== LevelCatalog ========================================================

const BUILTIN_CAMPAIGN: &str = include_str!("../../../assets/levels.json");

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LevelCatalog {
    levels: Vec<LevelData>,
}

impl LevelCatalog {
    /// Validates and wraps an ordered list of levels.
    pub fn new(levels: Vec<LevelData>) -> Result<Self, LevelError> {
        if levels.is_empty() {
            return Err(LevelError::EmptyCatalog);
        }
        for level in &levels {
            level.validate()?;
        }

        Ok(Self { levels })
    }

    /// Parses and validates a JSON campaign.
    pub fn from_json(source: &str) -> Result<Self, LevelError> {
        let catalog: Self = serde_json::from_str(source)?;
        let catalog = Self::new(catalog.levels)?;
        info!("Loaded level catalog ({} levels)", catalog.len());
        Ok(catalog)
    }

    /// The campaign shipped with the engine.
    pub fn builtin() -> Result<Self, LevelError> {
        Self::from_json(BUILTIN_CAMPAIGN)
    }

    pub fn get(&self, index: usize) -> Option<&LevelData> {
        self.levels.get(index)
    }

    pub fn len(&self) -> usize {
        self.levels.len()
    }

    /// Always `false` for a constructed catalog.
    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &LevelData> {
        self.levels.iter()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
