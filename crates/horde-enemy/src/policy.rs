//! Tree wiring for enemies.

use horde_bt::{action, condition, BehaviorTree, BtNode, Selector, Sequence};
use horde_core::TickContext;
use horde_nav::PathFinder;

use crate::behaviors::{attack_player, chase_along_path, chase_directly, player_in_attack_range};
use crate::{ChasePolicy, CombatWorld, EnemyConfig};

/// Tree for `config.chase`.
pub fn build_tree<W>(config: EnemyConfig) -> BehaviorTree<W>
where
    W: CombatWorld + 'static,
{
    match config.chase {
        ChasePolicy::Direct => direct_chase_tree(config),
        ChasePolicy::Pathfinding => pathfinding_tree(config, PathFinder::default()),
    }
}

/// `Selector[Sequence[in_range?, attack], chase_directly]`
pub fn direct_chase_tree<W>(config: EnemyConfig) -> BehaviorTree<W>
where
    W: CombatWorld + 'static,
{
    let chase: Box<dyn BtNode<W>> =
        action(|_ctx: &TickContext, agent: W::Agent, world: &mut W| {
            chase_directly(agent, world)
        });
    BehaviorTree::new(Box::new(Selector::new(vec![attack_branch(config), chase])))
}

/// `Selector[Sequence[in_range?, attack], chase_along_path]`
pub fn pathfinding_tree<W>(config: EnemyConfig, finder: PathFinder) -> BehaviorTree<W>
where
    W: CombatWorld + 'static,
{
    let chase: Box<dyn BtNode<W>> =
        action(move |ctx: &TickContext, agent: W::Agent, world: &mut W| {
            chase_along_path(ctx, agent, world, &config, &finder)
        });
    BehaviorTree::new(Box::new(Selector::new(vec![attack_branch(config), chase])))
}

fn attack_branch<W>(config: EnemyConfig) -> Box<dyn BtNode<W>>
where
    W: CombatWorld + 'static,
{
    Box::new(Sequence::new(vec![
        condition(move |_ctx: &TickContext, agent: W::Agent, world: &W| {
            player_in_attack_range(agent, world, &config)
        }),
        action(move |ctx: &TickContext, agent: W::Agent, world: &mut W| {
            attack_player(ctx, agent, world, &config)
        }),
    ]))
}
