//! Env-driven team setup.

use fight_core::{AgentId, AgentState};
use rand::Rng;

use crate::config::{SimConfig, Strategy};

/// One agent taking part in the simulation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Member {
    pub id: AgentId,
    pub strategy: Strategy,
    pub state: AgentState,
}

/// Instantiates every team's agents with randomized starting stats.
///
/// Ids are `<strategy>-<index>` with a zero-padded index, so roster order
/// matches id order.
pub fn generate(config: &SimConfig, rng: &mut impl Rng) -> Vec<Member> {
    let mut members = Vec::with_capacity(config.population() as usize);

    for team in &config.teams {
        for index in 0..team.quantity {
            let state = AgentState::new(
                rng.gen_range(80..=120),
                rng.gen_range(5..=15),
                rng.gen_range(3..=10),
            )
            .with_bonus(rng.gen_range(0..=3), rng.gen_range(0..=3));

            members.push(Member {
                id: AgentId::new(format!(
                    "{}-{index:04}",
                    team.strategy.as_ref().to_lowercase()
                )),
                strategy: team.strategy,
                state,
            });
        }
        tracing::debug!(strategy = %team.strategy, quantity = team.quantity, "team instantiated");
    }

    members
}
