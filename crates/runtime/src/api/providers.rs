//! Asynchronous abstraction for sourcing group fight decisions.
//!
//! Runtime users plug in [`FightProvider`] implementations so a fight round
//! can be decided by the engine, by scripted fixtures, or by stand-in
//! policies.
use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use fight_core::{AgentId, DecisionPath, FightAction, GameView, Recommendation};

use super::errors::Result;

/// Where a [`FightDecision`] came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DecisionSource {
    /// The engine produced a recommendation through this path.
    Engine(DecisionPath),
    /// The engine had no viable strategy and the default policy was applied.
    Fallback,
    /// Uniformly random stand-in policy.
    Random,
    /// Every agent was given the same action.
    Uniform(FightAction),
}

/// Action for every agent in the fight, plus its provenance.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FightDecision {
    pub actions: BTreeMap<AgentId, FightAction>,
    pub source: DecisionSource,
}

impl FightDecision {
    pub fn action(&self, id: &AgentId) -> Option<FightAction> {
        self.actions.get(id).copied()
    }

    /// Number of agents assigned `action`.
    pub fn count(&self, action: FightAction) -> usize {
        self.actions.values().filter(|&&a| a == action).count()
    }
}

impl From<Recommendation> for FightDecision {
    fn from(rec: Recommendation) -> Self {
        Self {
            actions: rec.actions,
            source: DecisionSource::Engine(rec.path),
        }
    }
}

/// Trait for deciding a whole group's fight actions for one round.
///
/// Different implementations can handle:
/// - Engine-backed recommendations
/// - Stand-in random policies
/// - Testing fixtures
#[async_trait]
pub trait FightProvider: Send + Sync {
    /// Decide an action for every agent listed in `view`.
    ///
    /// # Arguments
    /// * `view` - Shared snapshot of the current fight round
    ///
    /// # Returns
    /// A decision covering every agent, or an error if none can be produced
    async fn provide_fight(&self, view: Arc<GameView>) -> Result<FightDecision>;
}

/// Assigns the same action to every agent.
///
/// [`UniformFightProvider::cower`] is the default policy applied when the
/// engine has nothing to recommend.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UniformFightProvider {
    action: FightAction,
}

impl UniformFightProvider {
    pub const fn new(action: FightAction) -> Self {
        Self { action }
    }

    pub const fn cower() -> Self {
        Self::new(FightAction::Cower)
    }

    pub fn decide(&self, view: &GameView) -> FightDecision {
        FightDecision {
            actions: view
                .agents
                .keys()
                .map(|id| (id.clone(), self.action))
                .collect(),
            source: DecisionSource::Uniform(self.action),
        }
    }
}

impl Default for UniformFightProvider {
    fn default() -> Self {
        Self::cower()
    }
}

#[async_trait]
impl FightProvider for UniformFightProvider {
    async fn provide_fight(&self, view: Arc<GameView>) -> Result<FightDecision> {
        Ok(self.decide(&view))
    }
}
