use horde_core::{TickContext, WorldMut};

use crate::bt::BtNode;

/// Succeeds on the first child that succeeds; later children are not evaluated.
pub struct Selector<W>
where
    W: WorldMut + 'static,
{
    children: Vec<Box<dyn BtNode<W>>>,
}

impl<W> Selector<W>
where
    W: WorldMut + 'static,
{
    pub fn new(children: Vec<Box<dyn BtNode<W>>>) -> Self {
        Self { children }
    }
}

impl<W> BtNode<W> for Selector<W>
where
    W: WorldMut + 'static,
{
    fn evaluate(&mut self, ctx: &TickContext, agent: W::Agent, world: &mut W) -> bool {
        self.children
            .iter_mut()
            .any(|child| child.evaluate(ctx, agent, world))
    }
}

/// Fails on the first child that fails; later children are not evaluated.
pub struct Sequence<W>
where
    W: WorldMut + 'static,
{
    children: Vec<Box<dyn BtNode<W>>>,
}

impl<W> Sequence<W>
where
    W: WorldMut + 'static,
{
    pub fn new(children: Vec<Box<dyn BtNode<W>>>) -> Self {
        Self { children }
    }
}

impl<W> BtNode<W> for Sequence<W>
where
    W: WorldMut + 'static,
{
    fn evaluate(&mut self, ctx: &TickContext, agent: W::Agent, world: &mut W) -> bool {
        self.children
            .iter_mut()
            .all(|child| child.evaluate(ctx, agent, world))
    }
}

/// Leaf wrapping an effectful callback; its return value is the node's result.
pub struct Action<F> {
    run: F,
}

impl<F> Action<F> {
    pub fn new(run: F) -> Self {
        Self { run }
    }
}

impl<F, W> BtNode<W> for Action<F>
where
    F: FnMut(&TickContext, W::Agent, &mut W) -> bool + 'static,
    W: WorldMut + 'static,
{
    fn evaluate(&mut self, ctx: &TickContext, agent: W::Agent, world: &mut W) -> bool {
        (self.run)(ctx, agent, world)
    }
}

/// Boxed [`Action`] whose callback signature is fixed here, so closures infer
/// their argument types from the call site.
pub fn action<W, F>(run: F) -> Box<dyn BtNode<W>>
where
    F: FnMut(&TickContext, W::Agent, &mut W) -> bool + 'static,
    W: WorldMut + 'static,
{
    Box::new(Action::new(run))
}

/// Leaf wrapping a check. The callback only sees the world immutably.
pub struct Condition<F> {
    check: F,
}

impl<F> Condition<F> {
    pub fn new(check: F) -> Self {
        Self { check }
    }
}

impl<F, W> BtNode<W> for Condition<F>
where
    F: FnMut(&TickContext, W::Agent, &W) -> bool + 'static,
    W: WorldMut + 'static,
{
    fn evaluate(&mut self, ctx: &TickContext, agent: W::Agent, world: &mut W) -> bool {
        (self.check)(ctx, agent, &*world)
    }
}

/// Boxed [`Condition`]; see [`action`].
pub fn condition<W, F>(check: F) -> Box<dyn BtNode<W>>
where
    F: FnMut(&TickContext, W::Agent, &W) -> bool + 'static,
    W: WorldMut + 'static,
{
    Box::new(Condition::new(check))
}

pub struct Inverter<W>
where
    W: WorldMut + 'static,
{
    child: Box<dyn BtNode<W>>,
}

impl<W> Inverter<W>
where
    W: WorldMut + 'static,
{
    pub fn new(child: Box<dyn BtNode<W>>) -> Self {
        Self { child }
    }
}

impl<W> BtNode<W> for Inverter<W>
where
    W: WorldMut + 'static,
{
    fn evaluate(&mut self, ctx: &TickContext, agent: W::Agent, world: &mut W) -> bool {
        !self.child.evaluate(ctx, agent, world)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RepeatCount {
    Times(u32),
    /// Never returns. See [`Repeater::forever`].
    Forever,
}

/// Runs its child repeatedly within one evaluation, ignoring the child's
/// result, and always succeeds.
pub struct Repeater<W>
where
    W: WorldMut + 'static,
{
    child: Box<dyn BtNode<W>>,
    count: RepeatCount,
}

impl<W> Repeater<W>
where
    W: WorldMut + 'static,
{
    pub fn times(child: Box<dyn BtNode<W>>, count: u32) -> Self {
        Self {
            child,
            count: RepeatCount::Times(count),
        }
    }

    /// Repeats the child without end inside a single `evaluate` call.
    ///
    /// # Hazard
    ///
    /// Evaluation never returns, so the tick that reaches this node hangs.
    /// Only usable where the child unwinds (panics) or the evaluation runs on
    /// a thread that is allowed to spin. None of the shipped enemy trees build
    /// one.
    pub fn forever(child: Box<dyn BtNode<W>>) -> Self {
        Self {
            child,
            count: RepeatCount::Forever,
        }
    }

    pub fn count(&self) -> RepeatCount {
        self.count
    }
}

impl<W> BtNode<W> for Repeater<W>
where
    W: WorldMut + 'static,
{
    fn evaluate(&mut self, ctx: &TickContext, agent: W::Agent, world: &mut W) -> bool {
        match self.count {
            RepeatCount::Times(n) => {
                for _ in 0..n {
                    self.child.evaluate(ctx, agent, world);
                }
                true
            }
            RepeatCount::Forever => loop {
                self.child.evaluate(ctx, agent, world);
            },
        }
    }
}
