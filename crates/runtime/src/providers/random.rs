//! Uniformly random stand-in provider.

use std::sync::{Arc, Mutex, PoisonError};

use async_trait::async_trait;
use fight_core::{FightAction, GameView};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::api::{DecisionSource, FightDecision, FightProvider, Result};

const ACTIONS: [FightAction; 3] = [FightAction::Cower, FightAction::Attack, FightAction::Defend];

/// Gives every agent an independent, uniformly random action.
///
/// Stands in for agent strategies that do not consult the engine. Seed it
/// for reproducible runs.
#[derive(Debug)]
pub struct RandomFightProvider {
    rng: Mutex<StdRng>,
}

impl RandomFightProvider {
    pub fn from_entropy() -> Self {
        Self {
            rng: Mutex::new(StdRng::from_entropy()),
        }
    }

    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }

    pub fn decide(&self, view: &GameView) -> FightDecision {
        let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
        let actions = view
            .agents
            .keys()
            .map(|id| (id.clone(), ACTIONS[rng.gen_range(0..ACTIONS.len())]))
            .collect();

        FightDecision {
            actions,
            source: DecisionSource::Random,
        }
    }
}

#[async_trait]
impl FightProvider for RandomFightProvider {
    async fn provide_fight(&self, view: Arc<GameView>) -> Result<FightDecision> {
        Ok(self.decide(&view))
    }
}
