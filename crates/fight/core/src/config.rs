use crate::error::ConfigError;

/// Engine tunables.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EngineConfig {
    /// Aggressiveness weights, one candidate list per weight.
    pub weights: Vec<f64>,

    /// Evaluate candidate prefixes on the rayon pool.
    /// When false the same pipeline runs on the calling thread.
    pub parallel: bool,
}

impl EngineConfig {
    /// Weights used when none are configured, from most conservative to most aggressive.
    pub const DEFAULT_WEIGHTS: [f64; 5] = [0.5, 0.75, 1.0, 1.5, 2.0];

    #[must_use]
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    #[must_use]
    pub fn with_weights(mut self, weights: impl Into<Vec<f64>>) -> Self {
        self.weights = weights.into();
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.weights.is_empty() {
            return Err(ConfigError::NoWeights);
        }
        if let Some(&weight) = self
            .weights
            .iter()
            .find(|w| !w.is_finite() || **w <= 0.0)
        {
            return Err(ConfigError::InvalidWeight { weight });
        }
        Ok(())
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            weights: Self::DEFAULT_WEIGHTS.to_vec(),
            parallel: true,
        }
    }
}
