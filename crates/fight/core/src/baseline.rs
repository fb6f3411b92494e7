//! Write-once population baseline.

use std::sync::OnceLock;

/// Total combatant count observed the first time the engine ran.
///
/// The baseline is set exactly once. Concurrent first observations race on
/// the underlying [`OnceLock`], so exactly one count wins and every caller
/// sees that same value afterwards, even as the live population shrinks.
#[derive(Debug, Default)]
pub struct PopulationBaseline {
    initial: OnceLock<usize>,
}

impl PopulationBaseline {
    pub const fn new() -> Self {
        Self {
            initial: OnceLock::new(),
        }
    }

    /// Creates a baseline that is already populated.
    ///
    /// Useful when the owner knows the starting population up front.
    pub fn with_initial(count: usize) -> Self {
        let baseline = Self::new();
        let _ = baseline.initial.set(count);
        baseline
    }

    /// Records `count` if no baseline exists yet and returns the stored value.
    pub fn observe(&self, count: usize) -> usize {
        *self.initial.get_or_init(|| {
            tracing::debug!(count, "population baseline initialized");
            count
        })
    }

    pub fn get(&self) -> Option<usize> {
        self.initial.get().copied()
    }

    /// Live count divided by the baseline.
    ///
    /// An unset or zero baseline yields `1.0`: nothing has been lost yet.
    pub fn survival_ratio(&self, live: usize) -> f64 {
        match self.get() {
            Some(initial) if initial > 0 => live as f64 / initial as f64,
            _ => 1.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn first_observation_wins() {
        let baseline = PopulationBaseline::new();
        assert_eq!(baseline.get(), None);
        assert_eq!(baseline.observe(10), 10);
        assert_eq!(baseline.observe(4), 10);
        assert_eq!(baseline.get(), Some(10));
    }

    #[test]
    fn survival_ratio_uses_first_count() {
        let baseline = PopulationBaseline::with_initial(8);
        assert_eq!(baseline.survival_ratio(4), 0.5);
        assert_eq!(PopulationBaseline::new().survival_ratio(3), 1.0);
        assert_eq!(PopulationBaseline::with_initial(0).survival_ratio(0), 1.0);
    }

    #[test]
    fn concurrent_first_calls_agree() {
        let baseline = Arc::new(PopulationBaseline::new());
        let handles: Vec<_> = (1..=16)
            .map(|count| {
                let baseline = Arc::clone(&baseline);
                thread::spawn(move || baseline.observe(count))
            })
            .collect();

        let seen: Vec<usize> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        let winner = baseline.get().unwrap();
        assert!(seen.iter().all(|&s| s == winner));
    }
}
