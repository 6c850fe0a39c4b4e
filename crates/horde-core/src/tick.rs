use crate::{rng, AgentId, SplitMix64};

/// Timing for one simulation step.
///
/// Cooldowns and lifecycle timers compare against `now_ms` rather than
/// reading a clock, so the same inputs always replay the same decisions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickContext {
    pub tick: u64,
    /// Simulation time at the start of this tick, in milliseconds.
    pub now_ms: u64,
    pub dt_seconds: f32,
    pub seed: u64,
}

impl TickContext {
    pub fn new(tick: u64, now_ms: u64, dt_seconds: f32) -> Self {
        Self {
            tick,
            now_ms,
            dt_seconds,
            seed: 0,
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Milliseconds elapsed since `earlier_ms`, saturating at zero.
    pub fn elapsed_since(&self, earlier_ms: u64) -> u64 {
        self.now_ms.saturating_sub(earlier_ms)
    }

    /// Context for the following tick, advancing time by `dt_ms`.
    pub fn advance(&self, dt_ms: u64) -> Self {
        Self {
            tick: self.tick + 1,
            now_ms: self.now_ms + dt_ms,
            dt_seconds: dt_ms as f32 / 1000.0,
            seed: self.seed,
        }
    }

    pub fn rng_for_agent<A: AgentId>(&self, agent: A, stream: u64) -> SplitMix64 {
        SplitMix64::new(rng::derive_seed(self.seed, agent.stable_id(), stream))
    }
}
