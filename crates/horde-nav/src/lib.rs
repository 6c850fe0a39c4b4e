//! Grid occupancy, A* pathfinding, and waypoint following.
//!
//! Search outcomes never surface as errors: invalid or unreachable requests
//! produce an empty [`Path`] and a [`PathEvent`] on the injected
//! [`DiagnosticSink`].

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

pub mod astar;
pub mod cell;
pub mod diagnostics;
pub mod follow;
pub mod frontier;
pub mod grid;
pub mod mapping;
pub mod path;

pub use astar::{find_path, PathFinder};
pub use cell::Cell;
pub use diagnostics::{DiagnosticSink, Endpoint, NullSink, PathEvent, TracingSink, VecSink};
pub use follow::PathFollower;
pub use grid::{Grid, GridError, GridSummary};
pub use mapping::CellMapping;
pub use path::Path;
