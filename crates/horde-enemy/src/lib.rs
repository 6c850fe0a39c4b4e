//! Enemy decision policy.
//!
//! Each enemy owns a [`BehaviorTree`](horde_bt::BehaviorTree) built from its
//! [`EnemyConfig`]. The default tree attacks when the player is in range and
//! otherwise steers straight at the player; [`ChasePolicy::Pathfinding`]
//! swaps the chase leaf for one that follows A* paths on the occupancy grid.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

pub mod behaviors;
pub mod brain;
pub mod config;
pub mod policy;
pub mod state;
pub mod world;

pub use brain::{tick_brains, EnemyBrain};
pub use config::{ChasePolicy, ConfigError, EnemyConfig};
pub use policy::{build_tree, direct_chase_tree, pathfinding_tree};
pub use state::{EnemyState, Lifecycle};
pub use world::CombatWorld;
