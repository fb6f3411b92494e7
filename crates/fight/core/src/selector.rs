//! Result selection under the survival-ratio policy.
//!
//! While the population is healthy relative to the level's threshold the
//! selector minimizes the damage each committed combatant takes. Once the
//! population has been depleted below the threshold it minimizes projected
//! deaths instead. In both modes a result that wipes its whole subset is
//! never chosen.

use crate::simulator::SimulationResult;

/// What the selector optimizes for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum SelectionPolicy {
    /// Lowest per-combatant damage share.
    MinimizeDamage,
    /// Fewest projected deaths.
    MinimizeDeaths,
}

impl SelectionPolicy {
    /// Picks the policy for a survival ratio against a population threshold.
    ///
    /// A ratio at or above the threshold keeps minimizing damage.
    pub fn for_ratio(survival_ratio: f64, threshold: f64) -> Self {
        if survival_ratio >= threshold {
            Self::MinimizeDamage
        } else {
            Self::MinimizeDeaths
        }
    }
}

/// Best non-wipe result under `policy`, or `None` when every result wipes
/// its subset.
///
/// Ties go to the earliest result, i.e. the lighter weight and the shorter
/// prefix.
pub fn select_best<'r, 'a>(
    results: &'r [SimulationResult<'a>],
    policy: SelectionPolicy,
) -> Option<&'r SimulationResult<'a>> {
    let viable = results.iter().filter(|r| !r.is_wipe());

    match policy {
        SelectionPolicy::MinimizeDamage => viable.min_by_key(|r| r.damage_share),
        SelectionPolicy::MinimizeDeaths => viable.min_by_key(|r| r.deaths),
    }
}
