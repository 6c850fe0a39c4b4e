use horde_core::Vec2;

use crate::{Cell, Grid};

/// World-space ↔ grid conversion at a fixed cell size (pixels per cell).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellMapping {
    cell_size: f32,
}

impl CellMapping {
    /// Non-positive or non-finite sizes fall back to 1.0.
    pub fn new(cell_size: f32) -> Self {
        let cell_size = if cell_size.is_finite() && cell_size > 0.0 {
            cell_size
        } else {
            1.0
        };
        Self { cell_size }
    }

    pub fn cell_size(&self) -> f32 {
        self.cell_size
    }

    /// `floor(world / cell_size)` on both axes; may land outside any grid.
    pub fn world_to_cell(&self, p: Vec2) -> Cell {
        Cell::new(
            (p.x / self.cell_size).floor() as i32,
            (p.y / self.cell_size).floor() as i32,
        )
    }

    /// Same as [`world_to_cell`](Self::world_to_cell), clamped into `grid`.
    pub fn clamp_to_grid(&self, p: Vec2, grid: &Grid) -> Cell {
        let cell = self.world_to_cell(p);
        Cell::new(
            cell.x.clamp(0, grid.cols() - 1),
            cell.y.clamp(0, grid.rows() - 1),
        )
    }

    pub fn cell_center(&self, cell: Cell) -> Vec2 {
        let half = self.cell_size / 2.0;
        Vec2::new(
            cell.x as f32 * self.cell_size + half,
            cell.y as f32 * self.cell_size + half,
        )
    }

    /// Marks the cell under a collision object's world position as blocked.
    ///
    /// Objects outside the grid are skipped with a warning; returns whether the
    /// cell was inside the grid.
    pub fn block_world_point(&self, grid: &mut Grid, p: Vec2) -> bool {
        let cell = self.world_to_cell(p);
        let inside = grid.set_blocked(cell, true);
        if !inside {
            tracing::warn!(%cell, x = p.x, y = p.y, "collision object outside grid, skipped");
        }
        inside
    }
}

impl Default for CellMapping {
    fn default() -> Self {
        Self::new(64.0)
    }
}
