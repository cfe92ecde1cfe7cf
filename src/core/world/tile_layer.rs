//=========================================================================
// Tile Layer
//=========================================================================
//
// One dimension's grid of tiles.
//
// Cells carry their own alpha/tint/collision flag, but the layer only
// ever restyles all occupied cells at once, so they stay uniform.
// Empty cells (occupancy <= 0) are never collidable.
//
//=========================================================================

//=== Internal Dependencies ===============================================

use crate::core::dimension::{Dimension, LayerStyle, Tint};

//=== TilePos =============================================================

/// Column/row address of a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TilePos {
    pub x: usize,
    pub y: usize,
}

//=== TileCell ============================================================

/// A single grid cell.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TileCell {
    /// Tile type id. Zero or negative means empty.
    pub occupancy: i32,
    pub alpha: f32,
    pub tint: Option<Tint>,
    pub collides: bool,
}

impl TileCell {
    fn new(occupancy: i32) -> Self {
        Self {
            occupancy,
            alpha: 1.0,
            tint: None,
            collides: false,
        }
    }

    /// Whether the cell holds a tile at all.
    #[inline]
    pub fn is_occupied(&self) -> bool {
        self.occupancy > 0
    }

    /// Whether the cell currently blocks movement.
    #[inline]
    pub fn is_solid(&self) -> bool {
        self.is_occupied() && self.collides
    }
}

//=== TileLayer ===========================================================

/// Fixed-size tile grid belonging to one dimension.
#[derive(Debug, Clone, PartialEq)]
pub struct TileLayer {
    dimension: Dimension,
    width: usize,
    height: usize,
    cells: Vec<TileCell>,
    depth: i32,
}

impl TileLayer {
    //--- Construction -----------------------------------------------------

    /// Builds a layer from row-major occupancy rows.
    ///
    /// Rows are expected to be rectangular; the level loader rejects
    /// anything else before it reaches here. A short row is padded with
    /// empty cells.
    pub fn from_grid(dimension: Dimension, rows: &[Vec<i32>]) -> Self {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        debug_assert!(rows.iter().all(|row| row.len() == width), "ragged tile grid");

        let mut cells = Vec::with_capacity(width * height);
        for row in rows {
            for x in 0..width {
                cells.push(TileCell::new(row.get(x).copied().unwrap_or(0)));
            }
        }

        Self {
            dimension,
            width,
            height,
            cells,
            depth: LayerStyle::GHOST_DEPTH,
        }
    }

    //--- Styling (crate-private, driven by the state machine) -------------

    /// Restyles every occupied cell as a unit.
    pub(crate) fn apply_style(&mut self, style: &LayerStyle) {
        for cell in &mut self.cells {
            if cell.is_occupied() {
                cell.alpha = style.alpha;
                cell.tint = style.tint;
                cell.collides = style.collidable;
            } else {
                cell.collides = false;
            }
        }
        self.depth = style.depth;
    }

    //--- Queries ----------------------------------------------------------

    pub fn dimension(&self) -> Dimension {
        self.dimension
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Draw order; the larger depth is drawn on top.
    pub fn depth(&self) -> i32 {
        self.depth
    }

    pub fn cell(&self, x: usize, y: usize) -> Option<&TileCell> {
        if x < self.width && y < self.height {
            self.cells.get(y * self.width + x)
        } else {
            None
        }
    }

    /// Whether the cell at `(x, y)` blocks movement. Out of bounds is open.
    pub fn is_solid(&self, x: usize, y: usize) -> bool {
        self.cell(x, y).is_some_and(TileCell::is_solid)
    }

    /// Visits every cell in row-major order.
    pub fn for_each_tile<F>(&self, mut visit: F)
    where
        F: FnMut(TilePos, &TileCell),
    {
        for (index, cell) in self.cells.iter().enumerate() {
            visit(self.pos_of(index), cell);
        }
    }

    /// Iterates over occupied cells only.
    pub fn occupied(&self) -> impl Iterator<Item = (TilePos, &TileCell)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_occupied())
            .map(|(index, cell)| (self.pos_of(index), cell))
    }

    /// The shared style of all occupied cells.
    ///
    /// Returns `None` for a layer with no tiles, or if cells ever
    /// disagree (which would be a broken layer).
    pub fn uniform_style(&self) -> Option<LayerStyle> {
        let mut occupied = self.occupied().map(|(_, cell)| cell);
        let first = occupied.next()?;
        let uniform = occupied.all(|cell| {
            cell.alpha == first.alpha && cell.tint == first.tint && cell.collides == first.collides
        });

        uniform.then_some(LayerStyle {
            alpha: first.alpha,
            tint: first.tint,
            collidable: first.collides,
            depth: self.depth,
        })
    }

    //--- Internal Helpers -------------------------------------------------

    fn pos_of(&self, index: usize) -> TilePos {
        TilePos {
            x: index % self.width,
            y: index / self.width,
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
