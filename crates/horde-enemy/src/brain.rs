use horde_bt::BehaviorTree;
use horde_core::{AgentId, TickContext};

use crate::policy::build_tree;
use crate::{CombatWorld, EnemyConfig, Lifecycle};

/// One enemy's tree plus the config its leaves were built from.
pub struct EnemyBrain<W>
where
    W: CombatWorld + 'static,
{
    agent: W::Agent,
    config: EnemyConfig,
    tree: BehaviorTree<W>,
}

impl<W> EnemyBrain<W>
where
    W: CombatWorld + 'static,
{
    pub fn new(agent: W::Agent, config: EnemyConfig) -> Self {
        Self::with_tree(agent, config, build_tree(config))
    }

    pub fn with_tree(agent: W::Agent, config: EnemyConfig, tree: BehaviorTree<W>) -> Self {
        Self {
            agent,
            config,
            tree,
        }
    }

    pub fn agent(&self) -> W::Agent {
        self.agent
    }

    pub fn config(&self) -> &EnemyConfig {
        &self.config
    }

    pub fn tree(&self) -> &BehaviorTree<W> {
        &self.tree
    }

    /// Advances lifecycle timers, then evaluates the tree if still alive.
    ///
    /// An agent the world no longer knows is reported as `Removed`.
    pub fn tick(&mut self, ctx: &TickContext, world: &mut W) -> Lifecycle {
        let Some(enemy) = world.enemy_mut(self.agent) else {
            return Lifecycle::Removed;
        };

        let before = enemy.lifecycle;
        let lifecycle = enemy.update_lifecycle(ctx.now_ms, &self.config);
        if lifecycle != before {
            tracing::debug!(tick = ctx.tick, agent = ?self.agent, ?lifecycle, "enemy lifecycle changed");
        }
        if lifecycle != Lifecycle::Alive {
            return lifecycle;
        }

        self.tree.evaluate(ctx, self.agent, world);
        Lifecycle::Alive
    }
}

/// Ticks every brain in stable agent order and drops those whose enemy was
/// removed; returns the removed agents.
pub fn tick_brains<W>(
    ctx: &TickContext,
    world: &mut W,
    brains: &mut Vec<EnemyBrain<W>>,
) -> Vec<W::Agent>
where
    W: CombatWorld + 'static,
{
    brains.sort_by_key(|b| b.agent.stable_id());

    let mut removed = Vec::new();
    for brain in brains.iter_mut() {
        if brain.tick(ctx, world) == Lifecycle::Removed {
            removed.push(brain.agent);
        }
    }
    brains.retain(|b| !removed.contains(&b.agent));
    removed
}
