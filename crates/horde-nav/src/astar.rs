//! A* over 4-connected unit-cost grids with a nearest-cell fallback.

use crate::diagnostics::{DiagnosticSink, Endpoint, PathEvent, TracingSink};
use crate::frontier::Frontier;
use crate::{Cell, Grid, Path};

/// Searches the default way and reports through `tracing`.
pub fn find_path(start: Cell, goal: Cell, grid: &Grid) -> Path {
    PathFinder::default().find_path(start, goal, grid)
}

/// A* search with a bounded retry towards the closest reachable cell.
///
/// - Out-of-bounds or blocked endpoints yield an empty path.
/// - `start == goal` yields `[start]`.
/// - When the goal cannot be reached, the finder retries towards the reachable
///   cell closest (Manhattan) to the goal, at most `max_fallback_attempts`
///   times. Ties go to the lowest column, then the lowest row.
/// - `max_expansions` caps the nodes expanded per search. Hitting the cap
///   ends the request with an empty path and no fallback, since the explored
///   region is incomplete.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PathFinder {
    max_fallback_attempts: u32,
    max_expansions: Option<usize>,
}

impl Default for PathFinder {
    fn default() -> Self {
        Self {
            max_fallback_attempts: 1,
            max_expansions: None,
        }
    }
}

enum SearchOutcome {
    Found(Path),
    /// Frontier drained; `reached[i]` marks cells connected to the start.
    Exhausted { reached: Vec<bool> },
    BudgetExhausted,
}

impl PathFinder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_fallback_attempts(mut self, attempts: u32) -> Self {
        self.max_fallback_attempts = attempts;
        self
    }

    pub fn with_max_expansions(mut self, budget: Option<usize>) -> Self {
        self.max_expansions = budget;
        self
    }

    pub fn max_fallback_attempts(&self) -> u32 {
        self.max_fallback_attempts
    }

    pub fn max_expansions(&self) -> Option<usize> {
        self.max_expansions
    }

    pub fn find_path(&self, start: Cell, goal: Cell, grid: &Grid) -> Path {
        self.find_path_with(start, goal, grid, &mut TracingSink)
    }

    pub fn find_path_with(
        &self,
        start: Cell,
        goal: Cell,
        grid: &Grid,
        sink: &mut dyn DiagnosticSink,
    ) -> Path {
        if !check_endpoint(grid, start, Endpoint::Start, sink)
            || !check_endpoint(grid, goal, Endpoint::Goal, sink)
        {
            return Path::empty();
        }

        if start == goal {
            return Path::new(vec![start]);
        }

        let mut target = goal;
        let mut attempt = 0;
        loop {
            let reached = match self.search(start, target, grid, sink) {
                SearchOutcome::Found(path) => return path,
                SearchOutcome::BudgetExhausted => break,
                SearchOutcome::Exhausted { reached } => reached,
            };

            if attempt >= self.max_fallback_attempts {
                break;
            }
            attempt += 1;

            let Some(substitute) = closest_reached_cell(grid, goal, &reached) else {
                break;
            };
            if substitute == start || substitute == target {
                break;
            }

            sink.emit(PathEvent::FallbackTarget {
                requested: goal,
                substitute,
                attempt,
            });
            target = substitute;
        }

        sink.emit(PathEvent::NoPath { start, goal });
        Path::empty()
    }

    fn search(
        &self,
        start: Cell,
        goal: Cell,
        grid: &Grid,
        sink: &mut dyn DiagnosticSink,
    ) -> SearchOutcome {
        let (Some(start_idx), Some(goal_idx)) = (grid.index(start), grid.index(goal)) else {
            return SearchOutcome::Exhausted {
                reached: Vec::new(),
            };
        };

        sink.emit(PathEvent::SearchStarted { start, goal });

        let len = grid.len();
        let mut g_score = vec![u32::MAX; len];
        let mut came_from: Vec<Option<usize>> = vec![None; len];
        let mut frontier = Frontier::new(len);

        g_score[start_idx] = 0;
        frontier.push(start_idx, start, start.manhattan(goal), 0);

        let mut expanded = 0usize;
        while let Some((idx, cell, g)) = frontier.pop() {
            if idx == goal_idx {
                let cells = reconstruct(&came_from, goal_idx)
                    .into_iter()
                    .map(|i| grid.cell_at(i))
                    .collect::<Vec<_>>();
                sink.emit(PathEvent::PathFound {
                    goal,
                    len: cells.len(),
                    expanded,
                });
                return SearchOutcome::Found(Path::new(cells));
            }

            if self.max_expansions.is_some_and(|budget| expanded >= budget) {
                sink.emit(PathEvent::BudgetExhausted { goal, expanded });
                return SearchOutcome::BudgetExhausted;
            }
            expanded += 1;

            for n in cell.neighbors() {
                let Some(n_idx) = grid.index(n) else { continue };
                if grid.is_blocked(n) {
                    continue;
                }

                let tentative_g = g.saturating_add(1);
                if tentative_g >= g_score[n_idx] {
                    continue;
                }

                came_from[n_idx] = Some(idx);
                g_score[n_idx] = tentative_g;
                let f = tentative_g.saturating_add(n.manhattan(goal));
                frontier.push(n_idx, n, f, tentative_g);
            }
        }

        sink.emit(PathEvent::Unreachable { goal, expanded });
        SearchOutcome::Exhausted {
            reached: g_score.iter().map(|&g| g != u32::MAX).collect(),
        }
    }
}

fn check_endpoint(
    grid: &Grid,
    cell: Cell,
    endpoint: Endpoint,
    sink: &mut dyn DiagnosticSink,
) -> bool {
    if !grid.in_bounds(cell) {
        sink.emit(PathEvent::OutOfBounds { endpoint, cell });
        return false;
    }
    if grid.is_blocked(cell) {
        sink.emit(PathEvent::Blocked { endpoint, cell });
        return false;
    }
    true
}

fn reconstruct(came_from: &[Option<usize>], mut current: usize) -> Vec<usize> {
    let mut out = vec![current];
    while let Some(prev) = came_from[current] {
        current = prev;
        out.push(current);
    }
    out.reverse();
    out
}

/// Column-major scan for the reached cell nearest to `goal`; first hit wins ties.
fn closest_reached_cell(grid: &Grid, goal: Cell, reached: &[bool]) -> Option<Cell> {
    let mut best: Option<(u32, Cell)> = None;
    for x in 0..grid.cols() {
        for y in 0..grid.rows() {
            let cell = Cell::new(x, y);
            let Some(idx) = grid.index(cell) else { continue };
            if !reached.get(idx).copied().unwrap_or(false) {
                continue;
            }
            let d = cell.manhattan(goal);
            if best.map_or(true, |(bd, _)| d < bd) {
                best = Some((d, cell));
            }
        }
    }
    best.map(|(_, cell)| cell)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closest_reached_cell_prefers_lowest_column_on_ties() {
        let grid = Grid::new(5, 5).unwrap();
        let reached = vec![true; grid.len()];
        let mut only = vec![false; grid.len()];
        only[grid.index(Cell::new(3, 2)).unwrap()] = true;
        only[grid.index(Cell::new(1, 2)).unwrap()] = true;
        // Both candidates sit one step from (2, 2).
        assert_eq!(
            closest_reached_cell(&grid, Cell::new(2, 2), &only),
            Some(Cell::new(1, 2))
        );
        assert_eq!(closest_reached_cell(&grid, Cell::new(4, 4), &reached), Some(Cell::new(4, 4)));
        assert_eq!(closest_reached_cell(&grid, Cell::new(4, 4), &[]), None);
    }
}
