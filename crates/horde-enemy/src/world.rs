use horde_core::{Vec2, WorldMut};
use horde_nav::Grid;

use crate::EnemyState;

/// What enemy behaviors need from the simulation.
pub trait CombatWorld: WorldMut {
    fn enemy(&self, agent: Self::Agent) -> Option<&EnemyState>;
    fn enemy_mut(&mut self, agent: Self::Agent) -> Option<&mut EnemyState>;

    /// Centre of the player in world space.
    fn player_position(&self) -> Vec2;
    fn player_alive(&self) -> bool;

    /// Applies damage to the player. Returns `false` when it was ignored
    /// (player dead or invulnerable).
    fn damage_player(&mut self, amount: i32, now_ms: u64) -> bool;

    fn grid(&self) -> &Grid;
}
