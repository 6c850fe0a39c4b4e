//! Arena configuration for `horde simulate`, loaded from YAML.

use std::path::Path;

use anyhow::{bail, Context, Result};
use horde_enemy::EnemyConfig;
use horde_nav::{Cell, Grid};
use serde::{Deserialize, Serialize};

/// Blocked rectangle in cell coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Obstacle {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    #[serde(default = "default_cols")]
    pub cols: usize,

    #[serde(default = "default_rows")]
    pub rows: usize,

    /// Fixed step in milliseconds
    #[serde(default = "default_tick_ms")]
    pub tick_ms: u64,

    #[serde(default = "default_obstacles")]
    pub obstacles: Vec<Obstacle>,

    /// Cells enemies spawn from; one is picked at random per spawn
    #[serde(default = "default_spawn_points")]
    pub spawn_points: Vec<Cell>,

    #[serde(default = "default_spawn_interval_ms")]
    pub spawn_interval_ms: u64,

    /// Living enemies allowed at once
    #[serde(default = "default_max_enemies")]
    pub max_enemies: usize,

    #[serde(default = "default_player_cell")]
    pub player_cell: Cell,

    #[serde(default = "default_player_health")]
    pub player_health: i32,

    #[serde(default = "default_invulnerability_ms")]
    pub player_invulnerability_ms: u64,

    /// Player auto-fire: one shot at the nearest enemy in range per cooldown
    #[serde(default)]
    pub gun: GunConfig,

    /// Kills that end the run in victory
    #[serde(default = "default_kills_to_win")]
    pub kills_to_win: u32,

    #[serde(default)]
    pub enemy: EnemyConfig,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct GunConfig {
    #[serde(default = "default_gun_cooldown_ms")]
    pub cooldown_ms: u64,

    #[serde(default = "default_gun_range")]
    pub range: f32,

    #[serde(default = "default_gun_damage")]
    pub damage: i32,
}

impl Default for GunConfig {
    fn default() -> Self {
        Self {
            cooldown_ms: default_gun_cooldown_ms(),
            range: default_gun_range(),
            damage: default_gun_damage(),
        }
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            cols: default_cols(),
            rows: default_rows(),
            tick_ms: default_tick_ms(),
            obstacles: default_obstacles(),
            spawn_points: default_spawn_points(),
            spawn_interval_ms: default_spawn_interval_ms(),
            max_enemies: default_max_enemies(),
            player_cell: default_player_cell(),
            player_health: default_player_health(),
            player_invulnerability_ms: default_invulnerability_ms(),
            gun: GunConfig::default(),
            kills_to_win: default_kills_to_win(),
            enemy: EnemyConfig::default(),
        }
    }
}

fn default_cols() -> usize {
    20
}
fn default_rows() -> usize {
    11
}
fn default_tick_ms() -> u64 {
    16
}
fn default_obstacles() -> Vec<Obstacle> {
    vec![
        Obstacle { x: 4, y: 2, w: 1, h: 7 },
        Obstacle { x: 15, y: 2, w: 1, h: 7 },
        Obstacle { x: 8, y: 2, w: 4, h: 1 },
        Obstacle { x: 8, y: 8, w: 4, h: 1 },
    ]
}
fn default_spawn_points() -> Vec<Cell> {
    vec![
        Cell::new(1, 1),
        Cell::new(18, 1),
        Cell::new(1, 9),
        Cell::new(18, 9),
    ]
}
fn default_spawn_interval_ms() -> u64 {
    300
}
fn default_max_enemies() -> usize {
    30
}
fn default_player_cell() -> Cell {
    Cell::new(10, 5)
}
fn default_player_health() -> i32 {
    100
}
fn default_invulnerability_ms() -> u64 {
    500
}
fn default_gun_cooldown_ms() -> u64 {
    100
}
fn default_gun_range() -> f32 {
    300.0
}
fn default_gun_damage() -> i32 {
    100
}
fn default_kills_to_win() -> u32 {
    50
}

impl SimulationConfig {
    /// Load from a YAML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let config: Self = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse {}", path.display()))?;
        Ok(config)
    }

    /// Grid with obstacles applied; rejects spawn or player cells that are not walkable.
    pub fn build_grid(&self) -> Result<Grid> {
        self.enemy.validate().context("Invalid enemy config")?;
        if self.tick_ms == 0 {
            bail!("tick_ms must be > 0");
        }
        if self.spawn_points.is_empty() {
            bail!("at least one spawn point is required");
        }

        let mut grid = Grid::new(self.cols, self.rows).context("Invalid arena size")?;
        for o in &self.obstacles {
            grid.block_rect(Cell::new(o.x, o.y), o.w, o.h);
        }

        if !grid.is_walkable(self.player_cell) {
            bail!("player cell {} is blocked or outside the arena", self.player_cell);
        }
        for &spawn in &self.spawn_points {
            if !grid.is_walkable(spawn) {
                bail!("spawn point {spawn} is blocked or outside the arena");
            }
        }
        Ok(grid)
    }
}
