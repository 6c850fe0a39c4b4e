#![allow(dead_code)]

use std::collections::BTreeMap;

use horde_core::{EnemyId, Vec2, WorldMut, WorldView};
use horde_enemy::{CombatWorld, EnemyConfig, EnemyState};
use horde_nav::Grid;

pub struct TestWorld {
    pub enemies: BTreeMap<EnemyId, EnemyState>,
    pub player: Vec2,
    pub player_health: i32,
    pub hits: Vec<(i32, u64)>,
    pub grid: Grid,
}

impl TestWorld {
    pub fn new(grid: Grid, player: Vec2) -> Self {
        Self {
            enemies: BTreeMap::new(),
            player,
            player_health: 100,
            hits: Vec::new(),
            grid,
        }
    }

    pub fn open(player: Vec2) -> Self {
        Self::new(Grid::new(20, 11).expect("grid"), player)
    }

    pub fn spawn(&mut self, id: u32, position: Vec2, config: &EnemyConfig) -> EnemyId {
        let id = EnemyId(id);
        self.enemies.insert(id, EnemyState::new(position, config));
        id
    }

    pub fn state(&self, id: EnemyId) -> &EnemyState {
        &self.enemies[&id]
    }
}

impl WorldView for TestWorld {
    type Agent = EnemyId;
}

impl WorldMut for TestWorld {}

impl CombatWorld for TestWorld {
    fn enemy(&self, agent: EnemyId) -> Option<&EnemyState> {
        self.enemies.get(&agent)
    }

    fn enemy_mut(&mut self, agent: EnemyId) -> Option<&mut EnemyState> {
        self.enemies.get_mut(&agent)
    }

    fn player_position(&self) -> Vec2 {
        self.player
    }

    fn player_alive(&self) -> bool {
        self.player_health > 0
    }

    fn damage_player(&mut self, amount: i32, now_ms: u64) -> bool {
        if !self.player_alive() {
            return false;
        }
        self.player_health -= amount;
        self.hits.push((amount, now_ms));
        true
    }

    fn grid(&self) -> &Grid {
        &self.grid
    }
}
