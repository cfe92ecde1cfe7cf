//=========================================================================
// Tile World
//=========================================================================
//
// The two congruent tile layers of a level, plus world-space geometry.
//
// `apply_active()` is the dual-state application: it restyles both layers
// from nothing but the active dimension, so repeated calls with the same
// argument leave the world bit-identical.
//
//=========================================================================

//=== External Dependencies ===============================================

use glam::Vec2;

//=== Internal Dependencies ===============================================

use super::tile_layer::{TileLayer, TilePos};
use crate::core::dimension::{Dimension, DimensionPalette, LayerRole};
use crate::core::physics::Aabb;

//=== TileWorld ===========================================================

/// Lumina and Umbra layers sharing one grid geometry.
#[derive(Debug, Clone, PartialEq)]
pub struct TileWorld {
    lumina: TileLayer,
    umbra: TileLayer,
    tile_size: f32,
}

impl TileWorld {
    //--- Construction -----------------------------------------------------

    /// Builds both layers. Grids must already be congruent.
    pub fn new(lumina: &[Vec<i32>], umbra: &[Vec<i32>], tile_size: f32) -> Self {
        let lumina = TileLayer::from_grid(Dimension::Lumina, lumina);
        let umbra = TileLayer::from_grid(Dimension::Umbra, umbra);
        debug_assert_eq!(
            (lumina.width(), lumina.height()),
            (umbra.width(), umbra.height()),
            "layers must be congruent"
        );

        Self { lumina, umbra, tile_size }
    }

    //--- Dual-State Application -------------------------------------------

    /// Makes `active` the solid layer and ghosts the other one.
    pub(crate) fn apply_active(&mut self, active: Dimension, palette: &DimensionPalette) {
        for dimension in Dimension::ALL {
            let style = palette.style(dimension, LayerRole::of(dimension, active));
            self.layer_mut(dimension).apply_style(&style);
        }
    }

    //--- Layer Access -----------------------------------------------------

    pub fn layer(&self, dimension: Dimension) -> &TileLayer {
        match dimension {
            Dimension::Lumina => &self.lumina,
            Dimension::Umbra => &self.umbra,
        }
    }

    fn layer_mut(&mut self, dimension: Dimension) -> &mut TileLayer {
        match dimension {
            Dimension::Lumina => &mut self.lumina,
            Dimension::Umbra => &mut self.umbra,
        }
    }

    /// Layers in draw order, bottom first.
    pub fn draw_order(&self) -> [&TileLayer; 2] {
        if self.lumina.depth() <= self.umbra.depth() {
            [&self.lumina, &self.umbra]
        } else {
            [&self.umbra, &self.lumina]
        }
    }

    //--- Geometry ---------------------------------------------------------

    pub fn tile_size(&self) -> f32 {
        self.tile_size
    }

    /// Grid size in tiles as `(columns, rows)`.
    pub fn grid_size(&self) -> (usize, usize) {
        (self.lumina.width(), self.lumina.height())
    }

    /// World-space extent of the grid.
    pub fn bounds(&self) -> Aabb {
        let (columns, rows) = self.grid_size();
        Aabb::from_origin_size(
            Vec2::ZERO,
            Vec2::new(columns as f32, rows as f32) * self.tile_size,
        )
    }

    /// World-space box covered by a cell.
    pub fn tile_bounds(&self, pos: TilePos) -> Aabb {
        let origin = Vec2::new(pos.x as f32, pos.y as f32) * self.tile_size;
        Aabb::from_origin_size(origin, Vec2::splat(self.tile_size))
    }

    /// Boxes of the solid cells of `dimension` overlapping `area`.
    ///
    /// Only collidable cells are returned, so querying the ghost layer
    /// yields nothing.
    pub fn solid_tiles_in(&self, dimension: Dimension, area: &Aabb) -> Vec<Aabb> {
        let layer = self.layer(dimension);
        let (columns, rows) = self.grid_size();
        if columns == 0 || rows == 0 {
            return Vec::new();
        }

        let to_cell = |v: f32, limit: usize| -> usize {
            let cell = (v / self.tile_size).floor();
            if cell <= 0.0 {
                0
            } else {
                (cell as usize).min(limit - 1)
            }
        };

        let (x0, x1) = (to_cell(area.min.x, columns), to_cell(area.max.x, columns));
        let (y0, y1) = (to_cell(area.min.y, rows), to_cell(area.max.y, rows));

        let mut hits = Vec::new();
        for y in y0..=y1 {
            for x in x0..=x1 {
                if layer.is_solid(x, y) {
                    let tile = self.tile_bounds(TilePos { x, y });
                    if tile.intersects(area) {
                        hits.push(tile);
                    }
                }
            }
        }
        hits
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
