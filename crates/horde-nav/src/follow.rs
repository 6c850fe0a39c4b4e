use std::collections::VecDeque;

use horde_core::Vec2;

use crate::{Cell, CellMapping, Path};

/// Remaining waypoints of an agent walking a grid path, plus its replan timer.
#[derive(Debug, Clone, Default)]
pub struct PathFollower {
    waypoints: VecDeque<Cell>,
    last_refresh_ms: Option<u64>,
    refresh_interval_ms: u64,
}

impl PathFollower {
    pub fn new(refresh_interval_ms: u64) -> Self {
        Self {
            waypoints: VecDeque::new(),
            last_refresh_ms: None,
            refresh_interval_ms,
        }
    }

    /// True when there is nothing left to follow or the replan cooldown elapsed.
    pub fn needs_refresh(&self, now_ms: u64) -> bool {
        if self.waypoints.is_empty() {
            return true;
        }
        match self.last_refresh_ms {
            Some(last) => now_ms.saturating_sub(last) >= self.refresh_interval_ms,
            None => true,
        }
    }

    /// Adopts a freshly computed path.
    ///
    /// The leading cell is dropped when it is the cell the agent already
    /// occupies, unless it is the only cell.
    pub fn replace(&mut self, path: Path, current: Cell, now_ms: u64) {
        self.last_refresh_ms = Some(now_ms);
        let mut cells: VecDeque<Cell> = path.into_cells().into();
        if cells.len() > 1 && cells.front() == Some(&current) {
            cells.pop_front();
        }
        self.waypoints = cells;
    }

    /// Forgets the waypoints but keeps the refresh timestamp.
    pub fn clear(&mut self) {
        self.waypoints.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.waypoints.is_empty()
    }

    pub fn len(&self) -> usize {
        self.waypoints.len()
    }

    pub fn next_waypoint(&self) -> Option<Cell> {
        self.waypoints.front().copied()
    }

    pub fn waypoints(&self) -> impl Iterator<Item = Cell> + '_ {
        self.waypoints.iter().copied()
    }

    pub fn last_refresh_ms(&self) -> Option<u64> {
        self.last_refresh_ms
    }

    /// Unit direction from `position` towards the current waypoint's centre.
    ///
    /// A waypoint closer than `arrival_distance` is consumed first and the
    /// next one becomes the target. When the last waypoint is consumed the
    /// agent keeps heading at it for this tick. `None` when nothing is queued.
    pub fn steer(
        &mut self,
        position: Vec2,
        mapping: &CellMapping,
        arrival_distance: f32,
    ) -> Option<Vec2> {
        let mut target = mapping.cell_center(self.next_waypoint()?);

        if position.distance(target) < arrival_distance {
            self.waypoints.pop_front();
            if let Some(next) = self.next_waypoint() {
                target = mapping.cell_center(next);
            }
        }

        Some((target - position).normalize_or_zero())
    }
}
