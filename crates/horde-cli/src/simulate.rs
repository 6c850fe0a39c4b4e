//! Headless arena: a stationary, auto-firing player against spawning enemies.

use std::collections::BTreeMap;

use anyhow::Result;
use horde_core::{EnemyId, SplitMix64, TickContext, Vec2, WorldMut, WorldView};
use horde_enemy::{tick_brains, CombatWorld, EnemyBrain, EnemyState};
use horde_nav::{CellMapping, Grid};
use serde::Serialize;

use crate::config::SimulationConfig;

/// Spawn-point picks draw from this stream of the run seed.
const SPAWN_STREAM: u64 = 0x5350_4157;

#[derive(Debug)]
struct Player {
    position: Vec2,
    health: i32,
    last_hit_ms: Option<u64>,
    invulnerability_ms: u64,
}

impl Player {
    fn alive(&self) -> bool {
        self.health > 0
    }

    fn invulnerable(&self, now_ms: u64) -> bool {
        self.last_hit_ms
            .is_some_and(|hit| now_ms.saturating_sub(hit) < self.invulnerability_ms)
    }
}

/// World the enemy brains run against.
pub struct Arena {
    grid: Grid,
    mapping: CellMapping,
    enemies: BTreeMap<EnemyId, EnemyState>,
    player: Player,
    attacks_landed: u32,
}

impl WorldView for Arena {
    type Agent = EnemyId;
}

impl WorldMut for Arena {}

impl CombatWorld for Arena {
    fn enemy(&self, agent: EnemyId) -> Option<&EnemyState> {
        self.enemies.get(&agent)
    }

    fn enemy_mut(&mut self, agent: EnemyId) -> Option<&mut EnemyState> {
        self.enemies.get_mut(&agent)
    }

    fn player_position(&self) -> Vec2 {
        self.player.position
    }

    fn player_alive(&self) -> bool {
        self.player.alive()
    }

    fn damage_player(&mut self, amount: i32, now_ms: u64) -> bool {
        if !self.player.alive() || self.player.invulnerable(now_ms) {
            return false;
        }
        self.player.health = (self.player.health - amount).max(0);
        self.player.last_hit_ms = Some(now_ms);
        self.attacks_landed += 1;
        tracing::debug!(amount, health = self.player.health, "player hit");
        if !self.player.alive() {
            tracing::info!(now_ms, "player died");
        }
        true
    }

    fn grid(&self) -> &Grid {
        &self.grid
    }
}

impl Arena {
    /// Moves one axis at a time, undoing an axis that would end inside a blocked cell.
    fn move_enemy(&mut self, id: EnemyId, speed: f32, dt_seconds: f32) {
        let Some(enemy) = self.enemies.get_mut(&id) else {
            return;
        };
        let step = enemy.velocity(speed) * dt_seconds;
        if step.is_zero() {
            return;
        }

        let mut next = enemy.position;
        next.x += step.x;
        if self.grid.is_blocked(self.mapping.world_to_cell(next)) {
            next.x = enemy.position.x;
        }
        next.y += step.y;
        if self.grid.is_blocked(self.mapping.world_to_cell(next)) {
            next.y = enemy.position.y;
        }
        enemy.position = next;
    }

    fn nearest_enemy_within(&self, range: f32) -> Option<EnemyId> {
        self.enemies
            .iter()
            .filter(|(_, e)| e.is_alive())
            .map(|(&id, e)| (id, e.position.distance(self.player.position)))
            .filter(|&(_, d)| d <= range)
            .min_by(|a, b| a.1.total_cmp(&b.1))
            .map(|(id, _)| id)
    }

    fn living_enemies(&self) -> usize {
        self.enemies.values().filter(|e| e.is_alive()).count()
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SimulationReport {
    pub seed: u64,
    pub ticks: u64,
    pub elapsed_ms: u64,
    pub spawned: u32,
    pub kills: u32,
    pub attacks_landed: u32,
    pub player_health: i32,
    pub player_alive: bool,
    pub victory: bool,
    pub enemies_alive: usize,
}

/// Runs up to `max_ticks` fixed steps; stops early on player death or victory.
pub fn run(config: &SimulationConfig, max_ticks: u64, seed: u64) -> Result<SimulationReport> {
    let grid = config.build_grid()?;
    let mapping = CellMapping::new(config.enemy.cell_size);
    let mut arena = Arena {
        grid,
        mapping,
        enemies: BTreeMap::new(),
        player: Player {
            position: mapping.cell_center(config.player_cell),
            health: config.player_health,
            last_hit_ms: None,
            invulnerability_ms: config.player_invulnerability_ms,
        },
        attacks_landed: 0,
    };

    let dt_seconds = config.tick_ms as f32 / 1000.0;
    let mut ctx = TickContext::new(0, 0, dt_seconds).with_seed(seed);
    let mut spawn_rng = SplitMix64::new(horde_core::rng::derive_seed(seed, 0, SPAWN_STREAM));
    let mut brains: Vec<EnemyBrain<Arena>> = Vec::new();
    let mut next_spawn_ms = 0;
    let mut last_shot_ms: Option<u64> = None;
    let mut next_id = 0u32;
    let mut spawned = 0u32;
    let mut kills = 0u32;
    let mut victory = false;

    tracing::info!(seed, max_ticks, chase = ?config.enemy.chase, "simulation started");

    while ctx.tick < max_ticks {
        let now = ctx.now_ms;

        if now >= next_spawn_ms {
            next_spawn_ms += config.spawn_interval_ms.max(1);
            if arena.player.alive() && arena.living_enemies() < config.max_enemies {
                if let Some(&cell) = spawn_rng.pick(&config.spawn_points) {
                    let id = EnemyId(next_id);
                    next_id += 1;
                    spawned += 1;
                    let state = EnemyState::new(mapping.cell_center(cell), &config.enemy);
                    arena.enemies.insert(id, state);
                    brains.push(EnemyBrain::new(id, config.enemy));
                    tracing::debug!(%id, %cell, "enemy spawned");
                }
            }
        }

        let gun_ready = last_shot_ms.map_or(true, |t| now.saturating_sub(t) >= config.gun.cooldown_ms);
        if arena.player.alive() && gun_ready {
            if let Some(target) = arena.nearest_enemy_within(config.gun.range) {
                last_shot_ms = Some(now);
                let killed = arena
                    .enemies
                    .get_mut(&target)
                    .is_some_and(|e| e.take_damage(config.gun.damage, now));
                if killed {
                    kills += 1;
                    tracing::debug!(id = %target, kills, "enemy killed");
                }
            }
        }

        for id in tick_brains(&ctx, &mut arena, &mut brains) {
            arena.enemies.remove(&id);
        }

        let moving: Vec<EnemyId> = brains.iter().map(|b| b.agent()).collect();
        for id in moving {
            arena.move_enemy(id, config.enemy.speed, dt_seconds);
        }

        ctx = ctx.advance(config.tick_ms);

        if !arena.player.alive() {
            break;
        }
        if kills >= config.kills_to_win {
            victory = true;
            tracing::info!(kills, "victory");
            break;
        }
    }

    let report = SimulationReport {
        seed,
        ticks: ctx.tick,
        elapsed_ms: ctx.now_ms,
        spawned,
        kills,
        attacks_landed: arena.attacks_landed,
        player_health: arena.player.health,
        player_alive: arena.player.alive(),
        victory,
        enemies_alive: arena.living_enemies(),
    };
    tracing::info!(ticks = report.ticks, spawned, kills, "simulation finished");
    Ok(report)
}
