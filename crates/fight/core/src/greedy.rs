//! Greedy full-commitment checks.
//!
//! Both checks are closed-form and run before any simulation. When one of
//! them succeeds the engine returns its assignment directly:
//!
//! 1. **All-attack**: the group's combined attack beats the monster's health,
//!    so the strongest attackers strike and everyone past the kill cutoff
//!    cowers.
//! 2. **All-defense**: the group's combined defense beats the monster's
//!    attack, so the sturdiest defenders block and the rest attack. This check
//!    is inconclusive when blocking needs every combatant.
//!
//! Sorts are stable, so combatants with equal stats keep snapshot order.

use crate::snapshot::FightSnapshot;
use crate::types::{Combatant, FightAction};

/// Attack-first assignment, or `None` when combined attack cannot exceed
/// the monster's health.
///
/// The returned combatants are ordered by effective attack, descending.
pub fn all_attack(snapshot: &FightSnapshot) -> Option<Vec<Combatant>> {
    let monster_health = u64::from(snapshot.monster_health);
    if snapshot.total_attack() <= monster_health {
        return None;
    }

    let mut combatants = snapshot.combatants.clone();
    combatants.sort_by(|a, b| b.attack.cmp(&a.attack));

    let cutoff = cutoff_index(&combatants, monster_health, |c| c.attack)?;
    for (index, combatant) in combatants.iter_mut().enumerate() {
        combatant.action = Some(if index <= cutoff {
            FightAction::Attack
        } else {
            FightAction::Cower
        });
    }

    tracing::debug!(
        attackers = cutoff + 1,
        cowering = combatants.len() - cutoff - 1,
        "all-attack check succeeded"
    );
    Some(combatants)
}

/// Defense-first assignment, or `None` when combined defense cannot exceed
/// the monster's attack or when every combatant is needed to block.
///
/// The returned combatants are ordered by effective defense, descending.
pub fn all_defend(snapshot: &FightSnapshot) -> Option<Vec<Combatant>> {
    let monster_attack = u64::from(snapshot.monster_attack);
    if snapshot.total_defense() <= monster_attack {
        return None;
    }

    let mut combatants = snapshot.combatants.clone();
    combatants.sort_by(|a, b| b.defense.cmp(&a.defense));

    let cutoff = cutoff_index(&combatants, monster_attack, |c| c.defense)?;

    // Blocking with everyone leaves no offense at all; let the search decide.
    if cutoff + 1 >= combatants.len() {
        tracing::debug!("all-defense check needs every combatant, deferring to search");
        return None;
    }

    for (index, combatant) in combatants.iter_mut().enumerate() {
        combatant.action = Some(if index <= cutoff {
            FightAction::Defend
        } else {
            FightAction::Attack
        });
    }

    tracing::debug!(
        defenders = cutoff + 1,
        attackers = combatants.len() - cutoff - 1,
        "all-defense check succeeded"
    );
    Some(combatants)
}

/// Index of the first combatant at which the running sum of `stat` reaches `target`.
fn cutoff_index(
    combatants: &[Combatant],
    target: u64,
    stat: impl Fn(&Combatant) -> u32,
) -> Option<usize> {
    let mut running = 0u64;
    combatants.iter().position(|c| {
        running += u64::from(stat(c));
        running >= target
    })
}
