use horde_core::{TickContext, WorldMut};

use crate::bt::BtNode;

/// Root of an agent's tree, evaluated once per tick by its owner.
pub struct BehaviorTree<W>
where
    W: WorldMut + 'static,
{
    root: Box<dyn BtNode<W>>,
    last: Option<bool>,
    evaluations: u64,
}

impl<W> BehaviorTree<W>
where
    W: WorldMut + 'static,
{
    pub fn new(root: Box<dyn BtNode<W>>) -> Self {
        Self {
            root,
            last: None,
            evaluations: 0,
        }
    }

    pub fn evaluate(&mut self, ctx: &TickContext, agent: W::Agent, world: &mut W) -> bool {
        let outcome = self.root.evaluate(ctx, agent, world);
        self.last = Some(outcome);
        self.evaluations += 1;
        tracing::trace!(tick = ctx.tick, ?agent, outcome, "behavior tree evaluated");
        outcome
    }

    /// Result of the latest evaluation, `None` before the first one.
    pub fn last_outcome(&self) -> Option<bool> {
        self.last
    }

    pub fn evaluations(&self) -> u64 {
        self.evaluations
    }
}
