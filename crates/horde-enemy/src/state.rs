use horde_core::Vec2;
use horde_nav::PathFollower;

use crate::EnemyConfig;

/// `Alive → Dead` on lethal damage, `Dead → Removed` after the removal delay.
///
/// Attacking is tracked separately (`EnemyState::is_attacking`) and only
/// happens while alive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lifecycle {
    Alive,
    Dead { died_at_ms: u64 },
    Removed,
}

/// Mutable per-enemy state read and written by the behavior leaves.
#[derive(Debug, Clone)]
pub struct EnemyState {
    pub position: Vec2,
    /// Unit steering direction chosen this tick; zero means stand still.
    pub direction: Vec2,
    pub facing: Vec2,
    pub health: i32,
    pub is_attacking: bool,
    pub last_attack_ms: Option<u64>,
    pub attack_started_ms: Option<u64>,
    pub lifecycle: Lifecycle,
    pub follower: PathFollower,
}

impl EnemyState {
    pub fn new(position: Vec2, config: &EnemyConfig) -> Self {
        Self {
            position,
            direction: Vec2::ZERO,
            facing: Vec2::new(0.0, 1.0),
            health: config.max_health,
            is_attacking: false,
            last_attack_ms: None,
            attack_started_ms: None,
            lifecycle: Lifecycle::Alive,
            follower: PathFollower::new(config.path_refresh_ms),
        }
    }

    pub fn is_alive(&self) -> bool {
        self.lifecycle == Lifecycle::Alive
    }

    pub fn is_removed(&self) -> bool {
        self.lifecycle == Lifecycle::Removed
    }

    /// Whether the cooldown since the previous attack has elapsed.
    pub fn attack_ready(&self, now_ms: u64, cooldown_ms: u64) -> bool {
        self.last_attack_ms
            .map_or(true, |last| now_ms.saturating_sub(last) >= cooldown_ms)
    }

    /// Returns `true` when this hit killed the enemy.
    pub fn take_damage(&mut self, amount: i32, now_ms: u64) -> bool {
        if !self.is_alive() {
            return false;
        }
        self.health = self.health.saturating_sub(amount);
        if self.health <= 0 {
            self.kill(now_ms);
            return true;
        }
        false
    }

    /// Immediate death regardless of health; no effect unless alive.
    pub fn kill(&mut self, now_ms: u64) {
        if !self.is_alive() {
            return;
        }
        self.health = self.health.min(0);
        self.lifecycle = Lifecycle::Dead { died_at_ms: now_ms };
        self.direction = Vec2::ZERO;
        self.is_attacking = false;
        self.follower.clear();
    }

    /// Advances timers: ends the attack pose and retires the corpse.
    pub fn update_lifecycle(&mut self, now_ms: u64, config: &EnemyConfig) -> Lifecycle {
        match self.lifecycle {
            Lifecycle::Alive => {
                let pose_over = self
                    .attack_started_ms
                    .map_or(true, |t| now_ms.saturating_sub(t) > config.attack_animation_ms);
                if self.is_attacking && pose_over {
                    self.is_attacking = false;
                }
            }
            Lifecycle::Dead { died_at_ms } => {
                if now_ms.saturating_sub(died_at_ms) >= config.removal_delay_ms {
                    self.lifecycle = Lifecycle::Removed;
                }
            }
            Lifecycle::Removed => {}
        }
        self.lifecycle
    }

    /// Displacement per second; zero while attacking or not alive.
    pub fn velocity(&self, speed: f32) -> Vec2 {
        if self.is_attacking || !self.is_alive() {
            return Vec2::ZERO;
        }
        self.direction * speed
    }
}
