//! Weighted candidate generation.
//!
//! Combatants are ranked by health, healthiest first, since they are the
//! most likely to survive committing to the fight. Each aggressiveness weight
//! then produces one candidate list taken from the front of that ranking:
//!
//! ```text
//! size      = clamp(ceil(N * weight / 2), 1, N)
//! attackers = ceil(size * weight / (1 + weight))
//! ```
//!
//! The first `attackers` members of a list attack and the rest defend, so a
//! low weight commits a few combatants with a defensive lean and weight 2.0
//! commits everyone with two thirds attacking. Every non-empty prefix of a
//! list is later simulated on its own.

use crate::types::{Combatant, FightAction};

/// One combatant's place in a candidate list, with the action the list
/// encodes for it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CandidateMember<'a> {
    pub combatant: &'a Combatant,
    pub action: FightAction,
}

/// A ranked list of combatants considered for concerted action.
#[derive(Clone, Debug, PartialEq)]
pub struct Candidate<'a> {
    /// Weight that produced this list.
    pub weight: f64,
    pub members: Vec<CandidateMember<'a>>,
}

impl<'a> Candidate<'a> {
    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Every non-empty prefix, shortest first.
    pub fn prefixes(&self) -> impl Iterator<Item = &[CandidateMember<'a>]> + '_ {
        (1..=self.members.len()).map(move |len| &self.members[..len])
    }
}

/// Stable sort by health, descending.
pub fn rank_by_health(combatants: &[Combatant]) -> Vec<Combatant> {
    let mut ranked = combatants.to_vec();
    ranked.sort_by(|a, b| b.hp.cmp(&a.hp));
    ranked
}

/// Builds one candidate list per weight from an already ranked roster.
///
/// Returns no candidates for an empty roster.
pub fn generate<'a>(ranked: &'a [Combatant], weights: &[f64]) -> Vec<Candidate<'a>> {
    if ranked.is_empty() {
        return Vec::new();
    }

    weights
        .iter()
        .map(|&weight| {
            let size = candidate_size(ranked.len(), weight);
            let attackers = attacker_count(size, weight);

            let members = ranked[..size]
                .iter()
                .enumerate()
                .map(|(index, combatant)| CandidateMember {
                    combatant,
                    action: if index < attackers {
                        FightAction::Attack
                    } else {
                        FightAction::Defend
                    },
                })
                .collect();

            tracing::trace!(weight, size, attackers, "candidate list built");
            Candidate { weight, members }
        })
        .collect()
}

fn candidate_size(population: usize, weight: f64) -> usize {
    let scaled = (population as f64 * weight / 2.0).ceil() as usize;
    scaled.clamp(1, population)
}

fn attacker_count(size: usize, weight: f64) -> usize {
    let share = weight / (1.0 + weight);
    ((size as f64 * share).ceil() as usize).clamp(1, size)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EngineConfig;
    use crate::types::AgentId;

    fn roster(hps: &[u32]) -> Vec<Combatant> {
        hps.iter()
            .enumerate()
            .map(|(i, &hp)| Combatant {
                id: AgentId::new(format!("agent-{i}")),
                hp,
                attack: 1,
                defense: 1,
                action: None,
            })
            .collect()
    }

    #[test]
    fn ranking_is_stable_and_descending() {
        let ranked = rank_by_health(&roster(&[5, 9, 5, 12]));
        let ids: Vec<_> = ranked.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["agent-3", "agent-1", "agent-0", "agent-2"]);
    }

    #[test]
    fn sizes_grow_with_weight() {
        let ranked = rank_by_health(&roster(&[10; 8]));
        let candidates = generate(&ranked, &EngineConfig::DEFAULT_WEIGHTS);

        let sizes: Vec<_> = candidates.iter().map(Candidate::len).collect();
        assert_eq!(sizes, vec![2, 3, 4, 6, 8]);
    }

    #[test]
    fn heavier_weights_lean_toward_attack() {
        let ranked = rank_by_health(&roster(&[10; 8]));
        let candidates = generate(&ranked, &EngineConfig::DEFAULT_WEIGHTS);

        let attack_counts: Vec<_> = candidates
            .iter()
            .map(|c| {
                c.members
                    .iter()
                    .filter(|m| m.action == FightAction::Attack)
                    .count()
            })
            .collect();
        // ceil(2/3), ceil(3*3/7), ceil(4/2), ceil(6*3/5), ceil(8*2/3)
        assert_eq!(attack_counts, vec![1, 2, 2, 4, 6]);
    }

    #[test]
    fn attackers_lead_each_list() {
        let ranked = rank_by_health(&roster(&[40, 30, 20, 10]));
        let candidates = generate(&ranked, &[2.0]);
        let actions: Vec<_> = candidates[0].members.iter().map(|m| m.action).collect();
        assert_eq!(
            actions,
            vec![
                FightAction::Attack,
                FightAction::Attack,
                FightAction::Attack,
                FightAction::Defend,
            ]
        );
    }

    #[test]
    fn single_combatant_always_attacks() {
        let ranked = rank_by_health(&roster(&[7]));
        for candidate in generate(&ranked, &EngineConfig::DEFAULT_WEIGHTS) {
            assert_eq!(candidate.len(), 1);
            assert_eq!(candidate.members[0].action, FightAction::Attack);
        }
    }

    #[test]
    fn prefixes_cover_every_length() {
        let ranked = rank_by_health(&roster(&[3, 2, 1]));
        let candidates = generate(&ranked, &[2.0]);
        let lengths: Vec<_> = candidates[0].prefixes().map(<[_]>::len).collect();
        assert_eq!(lengths, vec![1, 2, 3]);
    }

    #[test]
    fn empty_roster_yields_no_candidates() {
        assert!(generate(&[], &EngineConfig::DEFAULT_WEIGHTS).is_empty());
    }
}
