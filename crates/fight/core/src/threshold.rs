//! Level-dependent population threshold curve.
//!
//! When the survival ratio drops below the threshold for the current level,
//! the selector stops minimizing damage and starts minimizing deaths.

use crate::error::ConfigError;
use crate::types::LevelId;

/// Policy curve mapping a level to a population fraction in `[0, 1]`.
pub trait PopulationThreshold: Send + Sync {
    fn threshold(&self, level: LevelId) -> f64;
}

impl<F> PopulationThreshold for F
where
    F: Fn(LevelId) -> f64 + Send + Sync,
{
    fn threshold(&self, level: LevelId) -> f64 {
        self(level)
    }
}

/// Linearly decaying threshold.
///
/// ```text
/// threshold(level) = max(floor, start - step * (level - 1))
/// ```
///
/// Early levels expect most of the population to be alive. Deeper levels
/// tolerate more losses before switching to death minimization.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LinearThreshold {
    pub start: f64,
    pub step: f64,
    pub floor: f64,
}

impl LinearThreshold {
    pub fn new(start: f64, step: f64, floor: f64) -> Result<Self, ConfigError> {
        for (name, value) in [("start", start), ("step", step), ("floor", floor)] {
            if !(0.0..=1.0).contains(&value) {
                return Err(ConfigError::ThresholdOutOfRange { name, value });
            }
        }
        Ok(Self { start, step, floor })
    }
}

impl Default for LinearThreshold {
    fn default() -> Self {
        Self {
            start: 0.8,
            step: 0.02,
            floor: 0.3,
        }
    }
}

impl PopulationThreshold for LinearThreshold {
    fn threshold(&self, level: LevelId) -> f64 {
        let depth = level.saturating_sub(1) as f64;
        (self.start - self.step * depth)
            .max(self.floor)
            .clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn linear_curve_decays_to_floor() {
        let curve = LinearThreshold::default();
        assert!((curve.threshold(1) - 0.8).abs() < 1e-9);
        assert!((curve.threshold(11) - 0.6).abs() < 1e-9);
        assert!((curve.threshold(500) - 0.3).abs() < 1e-9);
    }

    #[test]
    fn level_zero_is_treated_as_first_level() {
        let curve = LinearThreshold::default();
        assert_eq!(curve.threshold(0), curve.threshold(1));
    }

    #[test]
    fn rejects_out_of_range_parameters() {
        assert_eq!(
            LinearThreshold::new(1.2, 0.1, 0.0),
            Err(ConfigError::ThresholdOutOfRange {
                name: "start",
                value: 1.2
            })
        );
        assert!(LinearThreshold::new(0.9, 0.05, 0.2).is_ok());
    }

    #[test]
    fn closures_are_curves() {
        let constant = |_level: LevelId| 0.5;
        assert_eq!(constant.threshold(7), 0.5);
    }
}
