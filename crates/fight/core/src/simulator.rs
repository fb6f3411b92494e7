//! Strategy simulator: a pure what-if estimate for one committed subset.
//!
//! # Model
//!
//! ```text
//! rounds       = max(1, ceil(monster_health / total_attack))
//! total_damage = max(0, monster_attack - total_defense) * rounds
//! damage_share = total_damage / |subset|
//! deaths       = |{ member : member.hp <= damage_share }|
//! ```
//!
//! Attack and defense are summed over the whole subset regardless of the
//! action each member was assigned. A subset with zero attack can never kill
//! the monster and is reported as a full wipe.

use crate::candidate::CandidateMember;

/// Estimated outcome of committing one subset to the fight.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SimulationResult<'a> {
    /// Subset that produced this result, in candidate order.
    pub members: &'a [CandidateMember<'a>],
    /// Rounds needed to kill the monster, `None` when the subset has no attack.
    pub rounds: Option<u64>,
    /// Damage each member is expected to absorb.
    pub damage_share: u64,
    /// Members whose health does not survive their damage share.
    pub deaths: usize,
}

impl SimulationResult<'_> {
    pub fn subset_size(&self) -> usize {
        self.members.len()
    }

    /// Every member of the subset is projected to die.
    pub fn is_wipe(&self) -> bool {
        self.deaths == self.members.len()
    }

    pub fn is_degenerate(&self) -> bool {
        self.rounds.is_none()
    }
}

/// Simulates `members` fighting a monster with the given stats.
///
/// `members` must not be empty; the fan-out only ever passes non-empty
/// prefixes.
pub fn simulate<'a>(
    monster_health: u32,
    monster_attack: u32,
    members: &'a [CandidateMember<'a>],
) -> SimulationResult<'a> {
    debug_assert!(!members.is_empty(), "cannot simulate an empty subset");

    let total_attack: u64 = members.iter().map(|m| u64::from(m.combatant.attack)).sum();
    let total_defense: u64 = members.iter().map(|m| u64::from(m.combatant.defense)).sum();

    if total_attack == 0 || members.is_empty() {
        return SimulationResult {
            members,
            rounds: None,
            damage_share: u64::MAX,
            deaths: members.len(),
        };
    }

    let rounds = u64::from(monster_health).div_ceil(total_attack).max(1);
    let total_damage = u64::from(monster_attack)
        .saturating_sub(total_defense)
        .saturating_mul(rounds);
    let damage_share = total_damage / members.len() as u64;
    let deaths = members
        .iter()
        .filter(|m| u64::from(m.combatant.hp) <= damage_share)
        .count();

    SimulationResult {
        members,
        rounds: Some(rounds),
        damage_share,
        deaths,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{AgentId, Combatant, FightAction};

    fn combatant(hp: u32, attack: u32, defense: u32) -> Combatant {
        Combatant {
            id: AgentId::new(format!("{hp}-{attack}-{defense}")),
            hp,
            attack,
            defense,
            action: None,
        }
    }

    fn members(combatants: &[Combatant]) -> Vec<CandidateMember<'_>> {
        combatants
            .iter()
            .map(|combatant| CandidateMember {
                combatant,
                action: FightAction::Attack,
            })
            .collect()
    }

    #[test]
    fn splits_damage_evenly() {
        let roster = vec![combatant(30, 4, 1), combatant(10, 3, 1)];
        let subset = members(&roster);

        // rounds = ceil(20 / 7) = 3, damage = (12 - 2) * 3 = 30, share = 15
        let result = simulate(20, 12, &subset);
        assert_eq!(result.rounds, Some(3));
        assert_eq!(result.damage_share, 15);
        assert_eq!(result.deaths, 1);
        assert!(!result.is_wipe());
    }

    #[test]
    fn defense_above_attack_means_no_damage() {
        let roster = vec![combatant(5, 2, 20)];
        let subset = members(&roster);

        let result = simulate(9, 10, &subset);
        assert_eq!(result.damage_share, 0);
        assert_eq!(result.deaths, 0);
    }

    #[test]
    fn health_equal_to_share_dies() {
        let roster = vec![combatant(6, 1, 0)];
        let subset = members(&roster);

        // rounds = 3, damage = 2 * 3 = 6
        let result = simulate(3, 2, &subset);
        assert_eq!(result.damage_share, 6);
        assert!(result.is_wipe());
    }

    #[test]
    fn zero_attack_is_worst_case() {
        let roster = vec![combatant(100, 0, 50), combatant(100, 0, 50)];
        let subset = members(&roster);

        let result = simulate(10, 1, &subset);
        assert!(result.is_degenerate());
        assert_eq!(result.damage_share, u64::MAX);
        assert!(result.is_wipe());
    }

    #[test]
    fn dead_monster_still_takes_one_round() {
        let roster = vec![combatant(10, 5, 0)];
        let subset = members(&roster);

        let result = simulate(0, 4, &subset);
        assert_eq!(result.rounds, Some(1));
        assert_eq!(result.damage_share, 4);
    }

    #[test]
    fn simulation_is_repeatable() {
        let roster = vec![combatant(12, 3, 2), combatant(8, 1, 4), combatant(3, 2, 0)];
        let subset = members(&roster);
        let before = subset.clone();

        let first = simulate(25, 9, &subset);
        let second = simulate(25, 9, &subset);
        assert_eq!(first, second);
        assert_eq!(subset, before);
    }
}
