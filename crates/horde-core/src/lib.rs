//! Deterministic, engine-agnostic primitives shared by the horde crates.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

pub mod agent;
pub mod math;
pub mod rng;
pub mod tick;
pub mod world;

pub use agent::{AgentId, EnemyId};
pub use math::Vec2;
pub use rng::SplitMix64;
pub use tick::TickContext;
pub use world::{WorldMut, WorldView};
