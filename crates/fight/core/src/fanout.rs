//! Concurrent evaluation of candidate prefixes.
//!
//! Each candidate list is one group. Within a group every prefix length is
//! simulated as an independent rayon task; `collect` on an indexed parallel
//! iterator writes each task's result into the slot for its prefix length
//! and returns only once the whole group is done. Groups run one after the
//! other and their results are concatenated in candidate order.

use rayon::prelude::*;

use crate::candidate::Candidate;
use crate::simulator::{SimulationResult, simulate};

/// Simulates every prefix of every candidate.
///
/// The output holds, for each candidate in order, one result per prefix
/// length from 1 to the candidate's size. `parallel = false` produces the
/// same results on the calling thread.
pub fn evaluate_candidates<'a>(
    monster_health: u32,
    monster_attack: u32,
    candidates: &'a [Candidate<'a>],
    parallel: bool,
) -> Vec<SimulationResult<'a>> {
    let total: usize = candidates.iter().map(Candidate::len).sum();
    let mut results = Vec::with_capacity(total);

    for candidate in candidates {
        let group: Vec<SimulationResult<'a>> = if parallel {
            (1..=candidate.len())
                .into_par_iter()
                .map(|len| simulate(monster_health, monster_attack, &candidate.members[..len]))
                .collect()
        } else {
            candidate
                .prefixes()
                .map(|prefix| simulate(monster_health, monster_attack, prefix))
                .collect()
        };

        tracing::trace!(
            weight = candidate.weight,
            simulations = group.len(),
            "candidate group evaluated"
        );
        results.extend(group);
    }

    results
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::candidate::{generate, rank_by_health};
    use crate::config::EngineConfig;
    use crate::types::{AgentId, Combatant};

    fn roster() -> Vec<Combatant> {
        (0..7u32)
            .map(|i| Combatant {
                id: AgentId::new(format!("agent-{i}")),
                hp: 10 + i * 3,
                attack: 1 + i % 3,
                defense: i % 2,
                action: None,
            })
            .collect()
    }

    #[test]
    fn produces_one_result_per_prefix_in_order() {
        let ranked = rank_by_health(&roster());
        let candidates = generate(&ranked, &EngineConfig::DEFAULT_WEIGHTS);

        let results = evaluate_candidates(40, 12, &candidates, true);

        let expected: Vec<usize> = candidates.iter().flat_map(|c| 1..=c.len()).collect();
        let sizes: Vec<usize> = results.iter().map(SimulationResult::subset_size).collect();
        assert_eq!(sizes, expected);
    }

    #[test]
    fn parallel_matches_sequential() {
        let ranked = rank_by_health(&roster());
        let candidates = generate(&ranked, &EngineConfig::DEFAULT_WEIGHTS);

        let parallel = evaluate_candidates(55, 9, &candidates, true);
        let sequential = evaluate_candidates(55, 9, &candidates, false);
        assert_eq!(parallel, sequential);
    }

    #[test]
    fn no_candidates_no_results() {
        assert!(evaluate_candidates(10, 10, &[], true).is_empty());
    }
}
