//! Leaf logic for the enemy trees.
//!
//! Leaves never fail loudly: a missing agent or dead player turns into a
//! `false` result and a zeroed direction.

use horde_core::{TickContext, Vec2};
use horde_nav::{CellMapping, PathFinder};

use crate::{CombatWorld, EnemyConfig};

/// Player alive and closer than `attack_range` (centre to centre).
pub fn player_in_attack_range<W: CombatWorld>(
    agent: W::Agent,
    world: &W,
    config: &EnemyConfig,
) -> bool {
    if !world.player_alive() {
        return false;
    }
    let Some(enemy) = world.enemy(agent) else {
        return false;
    };
    enemy.position.distance(world.player_position()) < config.attack_range
}

/// Strikes when the cooldown allows.
///
/// Reports success even while cooling down, so an enemy in range holds its
/// ground instead of falling through to the chase branch.
pub fn attack_player<W: CombatWorld>(
    ctx: &TickContext,
    agent: W::Agent,
    world: &mut W,
    config: &EnemyConfig,
) -> bool {
    let player = world.player_position();
    let player_alive = world.player_alive();
    let Some(enemy) = world.enemy_mut(agent) else {
        return false;
    };

    if !enemy.attack_ready(ctx.now_ms, config.attack_cooldown_ms) {
        return true;
    }

    enemy.last_attack_ms = Some(ctx.now_ms);
    enemy.attack_started_ms = Some(ctx.now_ms);
    enemy.is_attacking = true;

    if !player_alive {
        return true;
    }

    enemy.direction = Vec2::ZERO;
    let to_player = (player - enemy.position).normalize_or_zero();
    if !to_player.is_zero() {
        enemy.facing = to_player;
    }

    let landed = world.damage_player(config.attack_damage, ctx.now_ms);
    tracing::debug!(
        tick = ctx.tick,
        ?agent,
        damage = config.attack_damage,
        landed,
        "enemy attacked player"
    );
    true
}

/// Steers straight at the player; fails (standing still) once the player is dead.
pub fn chase_directly<W: CombatWorld>(agent: W::Agent, world: &mut W) -> bool {
    let player = world.player_position();
    let player_alive = world.player_alive();
    let Some(enemy) = world.enemy_mut(agent) else {
        return false;
    };

    if !player_alive {
        enemy.direction = Vec2::ZERO;
        return false;
    }

    enemy.direction = (player - enemy.position).normalize_or_zero();
    true
}

/// Steers along an A* path towards the player's cell.
///
/// The path is recomputed when the follower runs dry or its refresh cooldown
/// elapses; both endpoints are clamped into the grid first. Without a path the
/// enemy heads straight at the player.
pub fn chase_along_path<W: CombatWorld>(
    ctx: &TickContext,
    agent: W::Agent,
    world: &mut W,
    config: &EnemyConfig,
    finder: &PathFinder,
) -> bool {
    let player = world.player_position();
    if !world.player_alive() {
        if let Some(enemy) = world.enemy_mut(agent) {
            enemy.direction = Vec2::ZERO;
        }
        return false;
    }

    let mapping = CellMapping::new(config.cell_size);
    let Some((position, needs_refresh)) = world
        .enemy(agent)
        .map(|e| (e.position, e.follower.needs_refresh(ctx.now_ms)))
    else {
        return false;
    };

    let refreshed = needs_refresh.then(|| {
        let grid = world.grid();
        let start = mapping.clamp_to_grid(position, grid);
        let goal = mapping.clamp_to_grid(player, grid);
        (start, finder.find_path(start, goal, grid))
    });

    let Some(enemy) = world.enemy_mut(agent) else {
        return false;
    };

    if let Some((start, path)) = refreshed {
        tracing::trace!(tick = ctx.tick, ?agent, len = path.len(), "enemy path refreshed");
        enemy.follower.replace(path, start, ctx.now_ms);
    }

    let steer = enemy
        .follower
        .steer(enemy.position, &mapping, config.waypoint_arrival_distance)
        .unwrap_or_else(|| (player - enemy.position).normalize_or_zero());
    if !steer.is_zero() {
        enemy.direction = steer;
    }
    true
}
