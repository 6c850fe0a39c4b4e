//! Enemy tuning, loadable from YAML.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config from {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("invalid config value for `{field}`: {reason}")]
    Invalid { field: &'static str, reason: String },
}

/// How the chase branch steers when the player is out of attack range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChasePolicy {
    /// Straight at the player, ignoring obstacles.
    #[default]
    Direct,
    /// Along A* paths on the occupancy grid, straight at the player when no path exists.
    Pathfinding,
}

/// Per-enemy tuning. Distances are in pixels, durations in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnemyConfig {
    /// Movement speed in pixels per second.
    pub speed: f32,
    pub max_health: i32,
    pub attack_damage: i32,
    /// Centre-to-centre distance under which the enemy attacks.
    pub attack_range: f32,
    pub attack_cooldown_ms: u64,
    /// How long an attack pins the enemy in place.
    pub attack_animation_ms: u64,
    /// Minimum time between path recomputations while a path is being followed.
    pub path_refresh_ms: u64,
    pub waypoint_arrival_distance: f32,
    /// Time a dead enemy lingers before removal.
    pub removal_delay_ms: u64,
    pub cell_size: f32,
    pub chase: ChasePolicy,
}

impl Default for EnemyConfig {
    fn default() -> Self {
        Self {
            speed: 200.0,
            max_health: 100,
            attack_damage: 10,
            attack_range: 80.0,
            attack_cooldown_ms: 1_000,
            attack_animation_ms: 300,
            path_refresh_ms: 500,
            waypoint_arrival_distance: 10.0,
            removal_delay_ms: 400,
            cell_size: 64.0,
            chase: ChasePolicy::Direct,
        }
    }
}

impl EnemyConfig {
    /// Load and validate a YAML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml_str(&content)
    }

    /// Parse and validate YAML; missing fields keep their defaults.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        positive("speed", self.speed)?;
        positive("attack_range", self.attack_range)?;
        positive("waypoint_arrival_distance", self.waypoint_arrival_distance)?;
        positive("cell_size", self.cell_size)?;
        if self.max_health <= 0 {
            return Err(ConfigError::Invalid {
                field: "max_health",
                reason: format!("must be > 0, got {}", self.max_health),
            });
        }
        if self.attack_damage < 0 {
            return Err(ConfigError::Invalid {
                field: "attack_damage",
                reason: format!("must be >= 0, got {}", self.attack_damage),
            });
        }
        Ok(())
    }
}

fn positive(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::Invalid {
            field,
            reason: format!("must be a finite number > 0, got {value}"),
        })
    }
}
