//! Structured records describing how a search went.
//!
//! Searches report through a [`DiagnosticSink`] supplied by the caller, never
//! through the returned path.

use crate::Cell;

/// Which end of a request a diagnostic is about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Start,
    Goal,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathEvent {
    OutOfBounds { endpoint: Endpoint, cell: Cell },
    Blocked { endpoint: Endpoint, cell: Cell },
    SearchStarted { start: Cell, goal: Cell },
    /// The frontier emptied without reaching `goal`.
    Unreachable { goal: Cell, expanded: usize },
    /// The search hit its expansion budget before finishing.
    BudgetExhausted { goal: Cell, expanded: usize },
    FallbackTarget { requested: Cell, substitute: Cell, attempt: u32 },
    PathFound { goal: Cell, len: usize, expanded: usize },
    NoPath { start: Cell, goal: Cell },
}

impl PathEvent {
    /// Short stable tag, handy for log fields and assertions.
    pub fn tag(&self) -> &'static str {
        match self {
            PathEvent::OutOfBounds { .. } => "out_of_bounds",
            PathEvent::Blocked { .. } => "blocked",
            PathEvent::SearchStarted { .. } => "search_started",
            PathEvent::Unreachable { .. } => "unreachable",
            PathEvent::BudgetExhausted { .. } => "budget_exhausted",
            PathEvent::FallbackTarget { .. } => "fallback_target",
            PathEvent::PathFound { .. } => "path_found",
            PathEvent::NoPath { .. } => "no_path",
        }
    }
}

pub trait DiagnosticSink {
    fn emit(&mut self, event: PathEvent);
}

#[derive(Debug, Default)]
pub struct NullSink;

impl DiagnosticSink for NullSink {
    fn emit(&mut self, _event: PathEvent) {}
}

#[derive(Debug, Default)]
pub struct VecSink {
    pub events: Vec<PathEvent>,
}

impl VecSink {
    pub fn tags(&self) -> Vec<&'static str> {
        self.events.iter().map(PathEvent::tag).collect()
    }
}

impl DiagnosticSink for VecSink {
    fn emit(&mut self, event: PathEvent) {
        self.events.push(event);
    }
}

/// Forwards every event to `tracing`.
#[derive(Debug, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn emit(&mut self, event: PathEvent) {
        match event {
            PathEvent::OutOfBounds { endpoint, cell } => {
                tracing::warn!(?endpoint, %cell, "path endpoint outside grid");
            }
            PathEvent::Blocked { endpoint, cell } => {
                tracing::warn!(?endpoint, %cell, "path endpoint is not walkable");
            }
            PathEvent::SearchStarted { start, goal } => {
                tracing::trace!(%start, %goal, "A* search started");
            }
            PathEvent::Unreachable { goal, expanded } => {
                tracing::debug!(%goal, expanded, "goal unreachable from start");
            }
            PathEvent::BudgetExhausted { goal, expanded } => {
                tracing::warn!(%goal, expanded, "A* expansion budget exhausted");
            }
            PathEvent::FallbackTarget {
                requested,
                substitute,
                attempt,
            } => {
                tracing::debug!(%requested, %substitute, attempt, "retrying with closest walkable cell");
            }
            PathEvent::PathFound { goal, len, expanded } => {
                tracing::debug!(%goal, len, expanded, "path found");
            }
            PathEvent::NoPath { start, goal } => {
                tracing::debug!(%start, %goal, "no path possible");
            }
        }
    }
}
