//! Fight decision engine.
//!
//! [`FightEngine`] wires the decision pipeline together:
//!
//! ```text
//! view ─► snapshot ─► all-attack? ─► all-defend? ─► candidates ─► fan-out ─► selector
//!                         │              │                                      │
//!                         └──── recommendation ◄────────────────────────────────┘
//! ```
//!
//! The engine owns the only state that outlives a single call, the
//! [`PopulationBaseline`]. Everything else is rebuilt from the view on every
//! invocation, so one engine can be shared across threads behind an `Arc`.

use std::collections::BTreeMap;

use crate::baseline::PopulationBaseline;
use crate::candidate::{generate, rank_by_health};
use crate::config::EngineConfig;
use crate::error::ConfigError;
use crate::fanout::evaluate_candidates;
use crate::greedy;
use crate::selector::{SelectionPolicy, select_best};
use crate::snapshot::FightSnapshot;
use crate::threshold::{LinearThreshold, PopulationThreshold};
use crate::types::{AgentId, Combatant, FightAction};
use crate::view::FightView;

/// Which stage of the pipeline produced a recommendation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DecisionPath {
    /// Combined attack kills the monster outright.
    AllAttack,
    /// Combined defense absorbs the monster's attack with attackers to spare.
    AllDefend,
    /// Chosen among simulated candidate prefixes.
    Simulated {
        policy: SelectionPolicy,
        /// Size of the winning subset.
        committed: usize,
        damage_share: u64,
        deaths: usize,
    },
}

/// Recommended action for every combatant in the snapshot.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Recommendation {
    pub actions: BTreeMap<AgentId, FightAction>,
    pub path: DecisionPath,
}

impl Recommendation {
    fn from_assigned(combatants: Vec<Combatant>, path: DecisionPath) -> Self {
        let actions = combatants
            .into_iter()
            .map(|c| (c.id, c.action.unwrap_or(FightAction::Cower)))
            .collect();
        Self { actions, path }
    }

    pub fn action(&self, id: &AgentId) -> Option<FightAction> {
        self.actions.get(id).copied()
    }

    /// Number of agents assigned `action`.
    pub fn count(&self, action: FightAction) -> usize {
        self.actions.values().filter(|&&a| a == action).count()
    }

    pub fn len(&self) -> usize {
        self.actions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }
}

/// Computes per-agent fight recommendations.
pub struct FightEngine {
    config: EngineConfig,
    threshold: Box<dyn PopulationThreshold>,
    baseline: PopulationBaseline,
}

impl FightEngine {
    /// Creates an engine with a fresh baseline.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if `config` fails validation.
    pub fn new(
        config: EngineConfig,
        threshold: impl PopulationThreshold + 'static,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            threshold: Box::new(threshold),
            baseline: PopulationBaseline::new(),
        })
    }

    /// Replaces the baseline (builder pattern), e.g. with one populated at
    /// simulation start.
    #[must_use]
    pub fn with_baseline(mut self, baseline: PopulationBaseline) -> Self {
        self.baseline = baseline;
        self
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn baseline(&self) -> &PopulationBaseline {
        &self.baseline
    }

    /// Recommends an action for every agent in `view`.
    ///
    /// Returns `None` when every simulated strategy wipes out its committed
    /// combatants; callers are expected to fall back to a default policy.
    pub fn compute_recommendation<V>(&self, view: &V) -> Option<Recommendation>
    where
        V: FightView + ?Sized,
    {
        let snapshot = FightSnapshot::capture(view, &self.baseline);

        tracing::debug!(
            level = snapshot.level,
            agents = snapshot.len(),
            monster_health = snapshot.monster_health,
            monster_attack = snapshot.monster_attack,
            "computing fight recommendation"
        );

        if let Some(assigned) = greedy::all_attack(&snapshot) {
            return Some(Recommendation::from_assigned(
                assigned,
                DecisionPath::AllAttack,
            ));
        }

        if let Some(assigned) = greedy::all_defend(&snapshot) {
            return Some(Recommendation::from_assigned(
                assigned,
                DecisionPath::AllDefend,
            ));
        }

        self.search(&snapshot)
    }

    fn search(&self, snapshot: &FightSnapshot) -> Option<Recommendation> {
        let ranked = rank_by_health(&snapshot.combatants);
        let candidates = generate(&ranked, &self.config.weights);
        let results = evaluate_candidates(
            snapshot.monster_health,
            snapshot.monster_attack,
            &candidates,
            self.config.parallel,
        );

        let survival_ratio = self.baseline.survival_ratio(snapshot.len());
        let threshold = self.threshold.threshold(snapshot.level);
        let policy = SelectionPolicy::for_ratio(survival_ratio, threshold);

        tracing::debug!(
            simulations = results.len(),
            survival_ratio,
            threshold,
            %policy,
            "selecting among simulated strategies"
        );

        let Some(best) = select_best(&results, policy) else {
            tracing::debug!("every simulated strategy is a full wipe");
            return None;
        };

        let mut actions: BTreeMap<AgentId, FightAction> = ranked
            .iter()
            .map(|c| (c.id.clone(), FightAction::Cower))
            .collect();
        for member in best.members {
            actions.insert(member.combatant.id.clone(), member.action);
        }

        Some(Recommendation {
            actions,
            path: DecisionPath::Simulated {
                policy,
                committed: best.subset_size(),
                damage_share: best.damage_share,
                deaths: best.deaths,
            },
        })
    }
}

impl Default for FightEngine {
    fn default() -> Self {
        Self {
            config: EngineConfig::default(),
            threshold: Box::new(LinearThreshold::default()),
            baseline: PopulationBaseline::new(),
        }
    }
}

impl std::fmt::Debug for FightEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FightEngine")
            .field("config", &self.config)
            .field("baseline", &self.baseline)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::AgentState;
    use crate::view::GameView;

    fn engine() -> FightEngine {
        FightEngine::new(EngineConfig::default(), LinearThreshold::default()).unwrap()
    }

    #[test]
    fn all_attack_short_circuits() {
        let view = GameView::new(1, 10, 100)
            .with_agent("a", AgentState::new(10, 5, 0))
            .with_agent("b", AgentState::new(10, 5, 0))
            .with_agent("c", AgentState::new(10, 5, 0));

        let rec = engine().compute_recommendation(&view).unwrap();
        assert_eq!(rec.path, DecisionPath::AllAttack);
        assert_eq!(rec.count(FightAction::Attack), 2);
        assert_eq!(rec.count(FightAction::Cower), 1);
        assert_eq!(rec.action(&AgentId::from("c")), Some(FightAction::Cower));
    }

    #[test]
    fn search_covers_every_agent() {
        let view = GameView::new(1, 60, 9)
            .with_agent("a", AgentState::new(40, 4, 1))
            .with_agent("b", AgentState::new(30, 3, 1))
            .with_agent("c", AgentState::new(20, 2, 1))
            .with_agent("d", AgentState::new(10, 1, 1));

        let rec = engine().compute_recommendation(&view).unwrap();
        assert!(matches!(rec.path, DecisionPath::Simulated { .. }));
        assert_eq!(rec.len(), 4);
    }

    #[test]
    fn empty_view_has_no_recommendation() {
        assert!(engine().compute_recommendation(&GameView::new(1, 5, 5)).is_none());
    }

    #[test]
    fn invalid_config_is_rejected() {
        let err = FightEngine::new(
            EngineConfig::default().with_weights(Vec::new()),
            LinearThreshold::default(),
        )
        .unwrap_err();
        assert_eq!(err, ConfigError::NoWeights);
    }
}
