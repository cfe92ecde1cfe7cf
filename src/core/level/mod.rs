//=========================================================================
// Level Data
//=========================================================================
//
// Serializable level descriptions and their load-time validation.
//
// Architecture:
//   LevelCatalog
//     └─ LevelData (ordered)
//          ├─ lumina / umbra occupancy grids (congruent)
//          ├─ spawn / exit tiles
//          └─ EnemySpawn descriptors (tagged by `kind`)
//
// Everything here is checked once at load. Downstream code assumes
// rectangular, congruent grids and in-bounds coordinates.
//
//=========================================================================

//=== Module Declarations =================================================

mod catalog;

//=== Public API ==========================================================

pub use catalog::LevelCatalog;

//=== External Dependencies ===============================================

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

//=== Internal Dependencies ===============================================

use crate::core::dimension::Dimension;

//=== LevelError ==========================================================

#[derive(Debug, Error)]
pub enum LevelError {
    #[error("level '{level}': {dimension} grid is empty")]
    EmptyGrid { level: String, dimension: Dimension },

    #[error("level '{level}': {dimension} row {row} has {found} cells, expected {expected}")]
    RaggedRow {
        level: String,
        dimension: Dimension,
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("level '{level}': lumina is {lumina:?} but umbra is {umbra:?}")]
    MismatchedLayers {
        level: String,
        lumina: (usize, usize),
        umbra: (usize, usize),
    },

    #[error("level '{level}': {what} at {at} lies outside the {width}x{height} grid")]
    OutOfBounds {
        level: String,
        what: String,
        at: TileCoord,
        width: usize,
        height: usize,
    },

    #[error("level '{level}': patrol range {range} must be positive")]
    InvalidPatrolRange { level: String, range: f32 },

    #[error("level catalog is empty")]
    EmptyCatalog,

    #[error("malformed level data: {0}")]
    Json(#[from] serde_json::Error),
}

//=== TileCoord ===========================================================

/// Column/row of a tile in a level file (row 0 is the top).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TileCoord {
    pub x: usize,
    pub y: usize,
}

impl fmt::Display for TileCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

//=== EnemySpawn ==========================================================

/// Enemy descriptor. `kind` selects the variant.
///
/// ```json
/// { "kind": "patrol", "at": { "x": 4, "y": 6 }, "dimension": "umbra", "range": 2.0 }
/// { "kind": "chase",  "at": { "x": 9, "y": 6 }, "dimension": "lumina" }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum EnemySpawn {
    Patrol {
        at: TileCoord,
        dimension: Dimension,
        /// Half-width of the walk, in tiles.
        #[serde(default = "EnemySpawn::default_patrol_range")]
        range: f32,
    },
    Chase {
        at: TileCoord,
        dimension: Dimension,
    },
}

impl EnemySpawn {
    fn default_patrol_range() -> f32 {
        2.0
    }

    pub fn at(&self) -> TileCoord {
        match *self {
            EnemySpawn::Patrol { at, .. } | EnemySpawn::Chase { at, .. } => at,
        }
    }

    pub fn dimension(&self) -> Dimension {
        match *self {
            EnemySpawn::Patrol { dimension, .. } | EnemySpawn::Chase { dimension, .. } => dimension,
        }
    }
}

//=== LevelData ===========================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LevelData {
    pub name: String,
    pub lumina: Vec<Vec<i32>>,
    pub umbra: Vec<Vec<i32>>,
    pub spawn: TileCoord,
    pub exit: TileCoord,
    #[serde(default)]
    pub enemies: Vec<EnemySpawn>,
}

impl LevelData {
    /// Grid size as `(width, height)`. Only meaningful once validated.
    pub fn grid_size(&self) -> (usize, usize) {
        (self.lumina.first().map_or(0, Vec::len), self.lumina.len())
    }

    /// Rejects grids and coordinates the runtime cannot represent.
    pub fn validate(&self) -> Result<(), LevelError> {
        let lumina = self.check_grid(Dimension::Lumina, &self.lumina)?;
        let umbra = self.check_grid(Dimension::Umbra, &self.umbra)?;
        if lumina != umbra {
            return Err(LevelError::MismatchedLayers {
                level: self.name.clone(),
                lumina,
                umbra,
            });
        }

        self.check_in_bounds("player spawn", self.spawn)?;
        self.check_in_bounds("exit", self.exit)?;
        for (index, enemy) in self.enemies.iter().enumerate() {
            self.check_in_bounds(&format!("enemy {}", index), enemy.at())?;
            if let EnemySpawn::Patrol { range, .. } = *enemy {
                if range <= 0.0 || !range.is_finite() {
                    return Err(LevelError::InvalidPatrolRange {
                        level: self.name.clone(),
                        range,
                    });
                }
            }
        }

        Ok(())
    }

    fn check_grid(
        &self,
        dimension: Dimension,
        rows: &[Vec<i32>],
    ) -> Result<(usize, usize), LevelError> {
        let width = rows.first().map_or(0, Vec::len);
        if width == 0 {
            return Err(LevelError::EmptyGrid {
                level: self.name.clone(),
                dimension,
            });
        }

        if let Some((row, found)) = rows
            .iter()
            .map(Vec::len)
            .enumerate()
            .find(|&(_, len)| len != width)
        {
            return Err(LevelError::RaggedRow {
                level: self.name.clone(),
                dimension,
                row,
                expected: width,
                found,
            });
        }

        Ok((width, rows.len()))
    }

    fn check_in_bounds(&self, what: &str, at: TileCoord) -> Result<(), LevelError> {
        let (width, height) = self.grid_size();
        if at.x < width && at.y < height {
            return Ok(());
        }

        Err(LevelError::OutOfBounds {
            level: self.name.clone(),
            what: what.to_string(),
            at,
            width,
            height,
        })
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn level() -> LevelData {
        LevelData {
            name: "test".to_string(),
            lumina: vec![vec![0, 0, 0], vec![1, 1, 1]],
            umbra: vec![vec![0, 2, 0], vec![0, 0, 0]],
            spawn: TileCoord { x: 0, y: 0 },
            exit: TileCoord { x: 2, y: 0 },
            enemies: vec![],
        }
    }

    #[test]
    fn valid_level_passes() {
        assert!(level().validate().is_ok());
    }

    #[test]
    fn rejects_ragged_rows() {
        let mut level = level();
        level.umbra[1].pop();

        match level.validate() {
            Err(LevelError::RaggedRow { dimension, row, expected, found, .. }) => {
                assert_eq!(dimension, Dimension::Umbra);
                assert_eq!((row, expected, found), (1, 3, 2));
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn rejects_mismatched_layers() {
        let mut level = level();
        level.umbra.push(vec![0, 0, 0]);

        assert!(matches!(
            level.validate(),
            Err(LevelError::MismatchedLayers { lumina: (3, 2), umbra: (3, 3), .. })
        ));
    }

    #[test]
    fn rejects_empty_grid() {
        let mut level = level();
        level.lumina.clear();

        assert!(matches!(level.validate(), Err(LevelError::EmptyGrid { .. })));
    }

    #[test]
    fn rejects_out_of_bounds_coordinates() {
        let mut exit_outside = level();
        exit_outside.exit = TileCoord { x: 3, y: 0 };
        assert!(matches!(exit_outside.validate(), Err(LevelError::OutOfBounds { .. })));

        let mut enemy_outside = level();
        enemy_outside.enemies.push(EnemySpawn::Chase {
            at: TileCoord { x: 0, y: 5 },
            dimension: Dimension::Umbra,
        });
        let err = enemy_outside.validate().unwrap_err();
        assert!(err.to_string().contains("enemy 0"));
    }

    #[test]
    fn negative_occupancy_is_accepted() {
        let mut level = level();
        level.lumina[0][0] = -1;
        assert!(level.validate().is_ok());
    }

    #[test]
    fn enemy_spawns_decode_by_kind() {
        let json = r#"[
            { "kind": "patrol", "at": { "x": 1, "y": 2 }, "dimension": "secondary" },
            { "kind": "chase", "at": { "x": 3, "y": 4 }, "dimension": "lumina" }
        ]"#;

        let spawns: Vec<EnemySpawn> = serde_json::from_str(json).unwrap();

        assert_eq!(
            spawns,
            vec![
                EnemySpawn::Patrol {
                    at: TileCoord { x: 1, y: 2 },
                    dimension: Dimension::Umbra,
                    range: 2.0,
                },
                EnemySpawn::Chase {
                    at: TileCoord { x: 3, y: 4 },
                    dimension: Dimension::Lumina,
                },
            ]
        );
    }
}
