//! Runtime configuration structures and loaders.
use std::env;

use fight_core::{EngineConfig, FightEngine, LinearThreshold};

use crate::api::Result;

/// Configuration required to build the fight engine.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RuntimeConfig {
    pub engine: EngineConfig,
    pub threshold: LinearThreshold,
}

impl RuntimeConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `FIGHT_PARALLEL` - Evaluate candidates on the rayon pool (default: true)
    /// - `FIGHT_THRESHOLD_START` - Population threshold at level 1 (default: 0.8)
    /// - `FIGHT_THRESHOLD_STEP` - Threshold decrease per level (default: 0.02)
    /// - `FIGHT_THRESHOLD_FLOOR` - Lowest threshold (default: 0.3)
    ///
    /// Unparseable values are ignored in favor of the defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the resulting threshold curve is out of range.
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();

        if let Some(parallel) = read_env::<bool>("FIGHT_PARALLEL") {
            config.engine.parallel = parallel;
        }

        let defaults = LinearThreshold::default();
        config.threshold = LinearThreshold::new(
            read_env("FIGHT_THRESHOLD_START").unwrap_or(defaults.start),
            read_env("FIGHT_THRESHOLD_STEP").unwrap_or(defaults.step),
            read_env("FIGHT_THRESHOLD_FLOOR").unwrap_or(defaults.floor),
        )?;

        Ok(config)
    }

    /// Builds an engine with a fresh population baseline.
    pub fn build_engine(&self) -> Result<FightEngine> {
        Ok(FightEngine::new(self.engine.clone(), self.threshold)?)
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    let raw = env::var(key).ok()?;
    match raw.trim().parse() {
        Ok(value) => Some(value),
        Err(_) => {
            tracing::warn!(key, value = %raw, "ignoring unparseable environment variable");
            None
        }
    }
}
