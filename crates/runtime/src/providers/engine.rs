//! Engine-backed fight provider.

use std::sync::Arc;
use std::time::Instant;

use async_trait::async_trait;
use fight_core::{FightEngine, GameView};

use crate::api::{
    DecisionSource, FightDecision, FightProvider, Result, RuntimeError, UniformFightProvider,
};
use crate::metrics::EngineMetrics;

/// Provider that asks the [`FightEngine`] for a recommendation.
///
/// # Design
///
/// The provider:
/// 1. Moves the shared view onto tokio's blocking pool, since the engine's
///    candidate search is CPU-bound and fans out on rayon
/// 2. Converts the engine's recommendation into a [`FightDecision`]
/// 3. Falls back to the default policy (everyone cowers) when the engine
///    finds no strategy that avoids a full wipe
/// 4. Records the outcome in [`EngineMetrics`]
///
/// The engine, and with it the population baseline, is shared by every
/// clone of the provider.
#[derive(Clone, Debug)]
pub struct EngineFightProvider {
    engine: Arc<FightEngine>,
    fallback: UniformFightProvider,
    metrics: Arc<EngineMetrics>,
}

impl EngineFightProvider {
    pub fn new(engine: FightEngine) -> Self {
        Self::from_shared(Arc::new(engine))
    }

    pub fn from_shared(engine: Arc<FightEngine>) -> Self {
        Self {
            engine,
            fallback: UniformFightProvider::cower(),
            metrics: Arc::new(EngineMetrics::new()),
        }
    }

    /// Replaces the default policy used when the engine has no recommendation.
    #[must_use]
    pub fn with_fallback(mut self, fallback: UniformFightProvider) -> Self {
        self.fallback = fallback;
        self
    }

    pub fn engine(&self) -> &Arc<FightEngine> {
        &self.engine
    }

    pub fn metrics(&self) -> &Arc<EngineMetrics> {
        &self.metrics
    }
}

#[async_trait]
impl FightProvider for EngineFightProvider {
    async fn provide_fight(&self, view: Arc<GameView>) -> Result<FightDecision> {
        let engine = Arc::clone(&self.engine);
        let task_view = Arc::clone(&view);

        let started = Instant::now();
        let recommendation =
            tokio::task::spawn_blocking(move || engine.compute_recommendation(&*task_view))
                .await
                .map_err(RuntimeError::WorkerJoin)?;
        let elapsed = started.elapsed();

        let decision = match recommendation {
            Some(rec) => {
                tracing::info!(
                    level = view.level,
                    path = ?rec.path,
                    agents = rec.len(),
                    "engine recommendation ready"
                );
                FightDecision::from(rec)
            }
            None => {
                tracing::warn!(
                    level = view.level,
                    agents = view.agent_count(),
                    "no viable strategy, applying default policy"
                );
                FightDecision {
                    source: DecisionSource::Fallback,
                    ..self.fallback.decide(&view)
                }
            }
        };

        self.metrics.record(decision.source, elapsed);
        Ok(decision)
    }
}
