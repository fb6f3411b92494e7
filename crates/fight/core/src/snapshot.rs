//! Snapshot builder: turns the view into per-round combatant records.

use crate::baseline::PopulationBaseline;
use crate::types::{Combatant, LevelId};
use crate::view::FightView;

/// Everything one decision round needs, copied out of the view.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FightSnapshot {
    pub level: LevelId,
    pub monster_health: u32,
    pub monster_attack: u32,
    /// Combatants in view iteration order.
    pub combatants: Vec<Combatant>,
}

impl FightSnapshot {
    /// Copies the view into combatant records and records the population
    /// baseline if this is the first round the baseline has seen.
    ///
    /// No filtering happens here: the view is expected to list only agents
    /// that are relevant to this fight.
    pub fn capture<V>(view: &V, baseline: &PopulationBaseline) -> Self
    where
        V: FightView + ?Sized,
    {
        let combatants: Vec<Combatant> = view
            .agent_states()
            .map(|(id, state)| Combatant::from_state(id.clone(), state))
            .collect();

        baseline.observe(combatants.len());

        Self {
            level: view.current_level(),
            monster_health: view.monster_health(),
            monster_attack: view.monster_attack(),
            combatants,
        }
    }

    pub fn len(&self) -> usize {
        self.combatants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.combatants.is_empty()
    }

    /// Sum of effective attack, widened so large rosters cannot overflow.
    pub fn total_attack(&self) -> u64 {
        self.combatants.iter().map(|c| u64::from(c.attack)).sum()
    }

    /// Sum of effective defense, widened so large rosters cannot overflow.
    pub fn total_defense(&self) -> u64 {
        self.combatants.iter().map(|c| u64::from(c.defense)).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::AgentState;
    use crate::view::GameView;

    #[test]
    fn capture_applies_bonuses_and_sets_baseline() {
        let view = GameView::new(2, 40, 12)
            .with_agent("a", AgentState::new(30, 5, 2).with_bonus(1, 3))
            .with_agent("b", AgentState::new(10, 2, 2));
        let baseline = PopulationBaseline::new();

        let snapshot = FightSnapshot::capture(&view, &baseline);

        assert_eq!(snapshot.len(), 2);
        assert_eq!(snapshot.combatants[0].attack, 6);
        assert_eq!(snapshot.combatants[0].defense, 5);
        assert_eq!(snapshot.total_attack(), 8);
        assert_eq!(snapshot.total_defense(), 7);
        assert_eq!(baseline.get(), Some(2));
    }

    #[test]
    fn later_captures_do_not_move_the_baseline() {
        let baseline = PopulationBaseline::new();
        let full = GameView::new(1, 10, 10)
            .with_agent("a", AgentState::new(1, 1, 1))
            .with_agent("b", AgentState::new(1, 1, 1))
            .with_agent("c", AgentState::new(1, 1, 1));
        FightSnapshot::capture(&full, &baseline);

        let shrunk = GameView::new(2, 10, 10).with_agent("a", AgentState::new(1, 1, 1));
        let snapshot = FightSnapshot::capture(&shrunk, &baseline);

        assert_eq!(snapshot.len(), 1);
        assert_eq!(baseline.get(), Some(3));
    }
}
