use horde_core::{TickContext, WorldMut};

pub trait BtNode<W>: 'static
where
    W: WorldMut + 'static,
{
    fn evaluate(&mut self, ctx: &TickContext, agent: W::Agent, world: &mut W) -> bool;
}
