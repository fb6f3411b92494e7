//! Error types for engine construction.
//!
//! Evaluating a fight never fails: degenerate subsets become worst-case
//! simulation results and "no viable strategy" is an absent recommendation.
//! The only fallible step is validating the tunables the engine is built
//! with.

/// Invalid engine or threshold configuration.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("at least one candidate weight is required")]
    NoWeights,

    #[error("candidate weight {weight} must be finite and positive")]
    InvalidWeight { weight: f64 },

    #[error("threshold parameter `{name}` = {value} must lie in [0, 1]")]
    ThresholdOutOfRange { name: &'static str, value: f64 },
}
