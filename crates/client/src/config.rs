//! Simulation harness configuration structures and loaders.
use std::env;

use strum::IntoEnumIterator;

/// Decision policy an agent follows during a fight.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
    strum::AsRefStr,
)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE", ascii_case_insensitive)]
pub enum Strategy {
    /// Follows the fight engine's recommendation.
    Engine,
    /// Picks a uniformly random action.
    Random,
}

impl Strategy {
    /// Agents of this strategy spawned when no quantity is configured.
    pub const fn default_quantity(self) -> u32 {
        match self {
            Strategy::Engine => 100,
            Strategy::Random => 0,
        }
    }
}

/// How many agents of one strategy join the roster.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TeamSpec {
    pub strategy: Strategy,
    pub quantity: u32,
}

/// Configuration for one harness run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SimConfig {
    pub levels: u32,
    pub seed: u64,
    pub teams: Vec<TeamSpec>,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            levels: 20,
            seed: 42,
            teams: Strategy::iter()
                .map(|strategy| TeamSpec {
                    strategy,
                    quantity: strategy.default_quantity(),
                })
                .collect(),
        }
    }
}

impl SimConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `SIM_LEVELS` - Number of levels to play (default: 20)
    /// - `SIM_SEED` - Seed for roster and monster generation (default: 42)
    /// - `AGENT_<STRATEGY>_QUANTITY` - Agents per strategy, e.g.
    ///   `AGENT_ENGINE_QUANTITY` (default: 100) and `AGENT_RANDOM_QUANTITY`
    ///   (default: 0)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(levels) = read_env::<u32>("SIM_LEVELS") {
            config.levels = levels.max(1);
        }

        if let Some(seed) = read_env::<u64>("SIM_SEED") {
            config.seed = seed;
        }

        for team in &mut config.teams {
            let key = format!("AGENT_{}_QUANTITY", team.strategy);
            if let Some(quantity) = read_env::<u32>(&key) {
                team.quantity = quantity;
            }
        }

        config
    }

    /// Total number of agents across all teams.
    pub fn population(&self) -> u32 {
        self.teams.iter().map(|t| t.quantity).sum()
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn default_roster_is_engine_only() {
        let config = SimConfig::default();
        assert_eq!(config.population(), 100);
        assert_eq!(
            config.teams,
            vec![
                TeamSpec {
                    strategy: Strategy::Engine,
                    quantity: 100
                },
                TeamSpec {
                    strategy: Strategy::Random,
                    quantity: 0
                },
            ]
        );
    }

    #[test]
    fn strategy_names_match_env_keys() {
        assert_eq!(Strategy::Engine.to_string(), "ENGINE");
        assert_eq!(Strategy::from_str("random").unwrap(), Strategy::Random);
    }
}
