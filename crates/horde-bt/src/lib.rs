//! Boolean behavior tree evaluator.
//!
//! Nodes return `true` (success) or `false` (failure) each time they are
//! evaluated and hold no progress between ticks; any memory lives in the
//! world the leaves read and write.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

pub mod bt;
pub mod nodes;
pub mod tree;

pub use bt::BtNode;
pub use nodes::{
    action, condition, Action, Condition, Inverter, RepeatCount, Repeater, Selector, Sequence,
};
pub use tree::BehaviorTree;
