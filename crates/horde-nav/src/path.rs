use horde_core::Vec2;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{Cell, CellMapping, Grid};

/// Cells from the requested start to the achieved endpoint, both inclusive.
///
/// Empty when nothing was reachable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Path {
    cells: Vec<Cell>,
}

impl Path {
    pub fn new(cells: Vec<Cell>) -> Self {
        Self { cells }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn into_cells(self) -> Vec<Cell> {
        self.cells
    }

    pub fn first(&self) -> Option<Cell> {
        self.cells.first().copied()
    }

    pub fn last(&self) -> Option<Cell> {
        self.cells.last().copied()
    }

    /// Number of unit moves; zero for empty and single-cell paths.
    pub fn cost(&self) -> usize {
        self.cells.len().saturating_sub(1)
    }

    /// Every cell in bounds and walkable, every consecutive pair 4-adjacent.
    pub fn is_valid_on(&self, grid: &Grid) -> bool {
        self.cells.iter().all(|&c| grid.is_walkable(c))
            && self.cells.windows(2).all(|w| w[0].is_adjacent(w[1]))
    }

    /// World-space centres of each cell, in order.
    pub fn to_waypoints(&self, mapping: &CellMapping) -> Vec<Vec2> {
        self.cells.iter().map(|&c| mapping.cell_center(c)).collect()
    }
}

impl From<Vec<Cell>> for Path {
    fn from(cells: Vec<Cell>) -> Self {
        Self::new(cells)
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a Cell;
    type IntoIter = std::slice::Iter<'a, Cell>;

    fn into_iter(self) -> Self::IntoIter {
        self.cells.iter()
    }
}
