//! Fight decision metrics.
//!
//! Tracks how often each stage of the engine produced the decision and how
//! long evaluation took.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use fight_core::DecisionPath;

use crate::api::DecisionSource;

/// Decision counters tracked by [`crate::EngineFightProvider`].
///
/// Uses atomics for lock-free access across threads.
#[derive(Debug, Default)]
pub struct EngineMetrics {
    /// Decisions resolved by the all-attack check
    all_attack: AtomicU64,

    /// Decisions resolved by the all-defense check
    all_defend: AtomicU64,

    /// Decisions chosen among simulated candidates
    simulated: AtomicU64,

    /// Rounds where the engine had no viable strategy
    fallback: AtomicU64,

    /// Total time spent evaluating (in nanoseconds)
    total_eval_time_nanos: AtomicU64,
}

impl EngineMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one decision and the time it took to evaluate.
    pub fn record(&self, source: DecisionSource, eval_time: Duration) {
        let counter = match source {
            DecisionSource::Engine(DecisionPath::AllAttack) => &self.all_attack,
            DecisionSource::Engine(DecisionPath::AllDefend) => &self.all_defend,
            DecisionSource::Engine(DecisionPath::Simulated { .. }) => &self.simulated,
            DecisionSource::Fallback => &self.fallback,
            // Stand-in providers do not run the engine.
            DecisionSource::Random | DecisionSource::Uniform(_) => return,
        };
        counter.fetch_add(1, Ordering::Relaxed);
        self.total_eval_time_nanos
            .fetch_add(eval_time.as_nanos() as u64, Ordering::Relaxed);
    }

    pub fn all_attack(&self) -> u64 {
        self.all_attack.load(Ordering::Relaxed)
    }

    pub fn all_defend(&self) -> u64 {
        self.all_defend.load(Ordering::Relaxed)
    }

    pub fn simulated(&self) -> u64 {
        self.simulated.load(Ordering::Relaxed)
    }

    pub fn fallback(&self) -> u64 {
        self.fallback.load(Ordering::Relaxed)
    }

    /// Total number of evaluated rounds.
    pub fn total(&self) -> u64 {
        self.all_attack() + self.all_defend() + self.simulated() + self.fallback()
    }

    /// Calculates average evaluation time.
    pub fn avg_eval_time(&self) -> Duration {
        let total = self.total();
        if total == 0 {
            Duration::ZERO
        } else {
            let total_nanos = self.total_eval_time_nanos.load(Ordering::Relaxed);
            Duration::from_nanos(total_nanos / total)
        }
    }

    /// Creates a snapshot of all metrics for display/logging.
    ///
    /// Note: individual fields are read atomically but the snapshot as a whole
    /// may be inconsistent if decisions are being recorded concurrently.
    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            all_attack: self.all_attack(),
            all_defend: self.all_defend(),
            simulated: self.simulated(),
            fallback: self.fallback(),
            avg_eval_time: self.avg_eval_time(),
        }
    }
}

/// Snapshot of metrics at a point in time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetricsSnapshot {
    pub all_attack: u64,
    pub all_defend: u64,
    pub simulated: u64,
    pub fallback: u64,
    pub avg_eval_time: Duration,
}
