//! A* open set: a binary heap ordered by `f`, plus a dense membership table.

use core::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::Cell;

const NOT_QUEUED: u32 = u32::MAX;

#[derive(Debug)]
struct OpenNode {
    f: u32,
    g: u32,
    cell: Cell,
    index: usize,
}

impl OpenNode {
    fn key(&self) -> (u32, u32, Cell) {
        (self.f, self.g, self.cell)
    }
}

impl PartialEq for OpenNode {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for OpenNode {}

impl PartialOrd for OpenNode {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for OpenNode {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed so the max-heap pops the lowest (f, g, cell).
        other.key().cmp(&self.key())
    }
}

/// Frontier sized for one grid.
///
/// `queued_g[i]` holds the cost of the live heap entry for cell `i`, or
/// `NOT_QUEUED`. Re-pushing a cell with a lower cost supersedes the old entry,
/// which is skipped when it surfaces.
#[derive(Debug)]
pub struct Frontier {
    heap: BinaryHeap<OpenNode>,
    queued_g: Vec<u32>,
}

impl Frontier {
    pub fn new(cell_count: usize) -> Self {
        Self {
            heap: BinaryHeap::new(),
            queued_g: vec![NOT_QUEUED; cell_count],
        }
    }

    pub fn push(&mut self, index: usize, cell: Cell, f: u32, g: u32) {
        let Some(slot) = self.queued_g.get_mut(index) else {
            return;
        };
        *slot = g;
        self.heap.push(OpenNode { f, g, cell, index });
    }

    pub fn contains(&self, index: usize) -> bool {
        self.queued_g
            .get(index)
            .is_some_and(|&g| g != NOT_QUEUED)
    }

    /// Removes the live entry with the lowest `f` and returns `(index, cell, g)`.
    pub fn pop(&mut self) -> Option<(usize, Cell, u32)> {
        while let Some(node) = self.heap.pop() {
            if self.queued_g[node.index] != node.g {
                continue;
            }
            self.queued_g[node.index] = NOT_QUEUED;
            return Some((node.index, node.cell, node.g));
        }
        None
    }

    pub fn is_empty(&self) -> bool {
        !self.queued_g.iter().any(|&g| g != NOT_QUEUED)
    }
}
