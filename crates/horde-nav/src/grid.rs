use thiserror::Error;

use crate::Cell;

/// Reasons a grid cannot be built from the supplied data.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    #[error("grid must have at least one row and one column (got {cols}x{rows})")]
    Empty { cols: usize, rows: usize },

    #[error("row {row} has {found} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("cell ({col}, {row}) holds flag {value}; only 0 (walkable) and 1 (blocked) are allowed")]
    InvalidFlag { row: usize, col: usize, value: u8 },

    #[error("unknown glyph {glyph:?} at ({col}, {row}); use '.' for walkable and '#' for blocked")]
    InvalidGlyph { row: usize, col: usize, glyph: char },
}

/// Row-major occupancy map. Owned by the simulation; searches borrow it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cols: i32,
    rows: i32,
    blocked: Vec<bool>,
}

/// Cell counts reported when a level is loaded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridSummary {
    pub total: usize,
    pub blocked: usize,
    pub walkable: usize,
}

impl GridSummary {
    pub fn blocked_percent(&self) -> f32 {
        if self.total == 0 {
            return 0.0;
        }
        self.blocked as f32 * 100.0 / self.total as f32
    }

    pub fn walkable_percent(&self) -> f32 {
        if self.total == 0 {
            return 0.0;
        }
        self.walkable as f32 * 100.0 / self.total as f32
    }
}

impl Grid {
    /// Fully walkable grid.
    pub fn new(cols: usize, rows: usize) -> Result<Self, GridError> {
        if cols == 0 || rows == 0 || i32::try_from(cols.saturating_mul(rows)).is_err() {
            return Err(GridError::Empty { cols, rows });
        }
        Ok(Self {
            cols: cols as i32,
            rows: rows as i32,
            blocked: vec![false; cols * rows],
        })
    }

    /// Builds a grid from `grid[row][col]` flags (0 walkable, 1 blocked).
    pub fn from_rows(rows: Vec<Vec<u8>>) -> Result<Self, GridError> {
        let expected = rows.first().map(Vec::len).unwrap_or(0);
        let mut grid = Self::new(expected, rows.len())?;

        for (y, row) in rows.iter().enumerate() {
            if row.len() != expected {
                return Err(GridError::RaggedRow {
                    row: y,
                    expected,
                    found: row.len(),
                });
            }
            for (x, &value) in row.iter().enumerate() {
                let blocked = match value {
                    0 => false,
                    1 => true,
                    _ => return Err(GridError::InvalidFlag { row: y, col: x, value }),
                };
                grid.blocked[y * expected + x] = blocked;
            }
        }

        Ok(grid)
    }

    /// Parses a picture of the grid: `.` walkable, `#` blocked, one line per row.
    /// Leading/trailing blank lines and surrounding whitespace are ignored.
    pub fn from_ascii(picture: &str) -> Result<Self, GridError> {
        let mut rows = Vec::new();
        for (y, line) in picture
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .enumerate()
        {
            let mut row = Vec::with_capacity(line.len());
            for (x, glyph) in line.chars().enumerate() {
                row.push(match glyph {
                    '.' => 0,
                    '#' => 1,
                    _ => return Err(GridError::InvalidGlyph { row: y, col: x, glyph }),
                });
            }
            rows.push(row);
        }
        Self::from_rows(rows)
    }

    pub fn cols(&self) -> i32 {
        self.cols
    }

    pub fn rows(&self) -> i32 {
        self.rows
    }

    pub fn len(&self) -> usize {
        self.blocked.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocked.is_empty()
    }

    pub fn in_bounds(&self, cell: Cell) -> bool {
        cell.x >= 0 && cell.y >= 0 && cell.x < self.cols && cell.y < self.rows
    }

    pub(crate) fn index(&self, cell: Cell) -> Option<usize> {
        if !self.in_bounds(cell) {
            return None;
        }
        Some((cell.y * self.cols + cell.x) as usize)
    }

    pub(crate) fn cell_at(&self, index: usize) -> Cell {
        let index = index as i32;
        Cell::new(index % self.cols, index / self.cols)
    }

    /// Out-of-bounds cells count as blocked.
    pub fn is_blocked(&self, cell: Cell) -> bool {
        self.index(cell).map(|i| self.blocked[i]).unwrap_or(true)
    }

    pub fn is_walkable(&self, cell: Cell) -> bool {
        !self.is_blocked(cell)
    }

    /// Returns `false` when `cell` lies outside the grid (nothing changes).
    pub fn set_blocked(&mut self, cell: Cell, blocked: bool) -> bool {
        match self.index(cell) {
            Some(i) => {
                self.blocked[i] = blocked;
                true
            }
            None => false,
        }
    }

    /// Blocks every in-bounds cell of the `w`×`h` rectangle whose top-left is `origin`.
    pub fn block_rect(&mut self, origin: Cell, w: i32, h: i32) {
        for y in origin.y..origin.y.saturating_add(h) {
            for x in origin.x..origin.x.saturating_add(w) {
                self.set_blocked(Cell::new(x, y), true);
            }
        }
    }

    /// Walkable cells in row-major order.
    pub fn walkable_cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.blocked
            .iter()
            .enumerate()
            .filter(|(_, blocked)| !**blocked)
            .map(|(i, _)| self.cell_at(i))
    }

    pub fn summary(&self) -> GridSummary {
        let blocked = self.blocked.iter().filter(|&&b| b).count();
        GridSummary {
            total: self.blocked.len(),
            blocked,
            walkable: self.blocked.len() - blocked,
        }
    }

    /// `#`/`.` picture, the inverse of [`Grid::from_ascii`].
    pub fn to_ascii(&self) -> String {
        let mut out = String::with_capacity(self.blocked.len() + self.rows as usize);
        for (i, &b) in self.blocked.iter().enumerate() {
            out.push(if b { '#' } else { '.' });
            if (i as i32 + 1) % self.cols == 0 {
                out.push('\n');
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_round_trips_through_cell_at() {
        let grid = Grid::new(7, 3).unwrap();
        for y in 0..3 {
            for x in 0..7 {
                let cell = Cell::new(x, y);
                let idx = grid.index(cell).unwrap();
                assert_eq!(grid.cell_at(idx), cell);
            }
        }
        assert_eq!(grid.index(Cell::new(7, 0)), None);
        assert_eq!(grid.index(Cell::new(0, -1)), None);
    }

    #[test]
    fn summary_counts_blocked_cells() {
        let grid = Grid::from_ascii(
            "
            ..#
            #..
            ",
        )
        .unwrap();
        let summary = grid.summary();
        assert_eq!(summary.total, 6);
        assert_eq!(summary.blocked, 2);
        assert_eq!(summary.walkable, 4);
        assert!((summary.blocked_percent() - 33.333).abs() < 0.01);
    }
}
