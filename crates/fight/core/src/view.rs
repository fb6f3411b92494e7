//! Read-only view of the fight supplied by the surrounding game state.
//!
//! The engine never owns game state. It reads the current level, the
//! monster's stats, and the living agents through [`FightView`], so any state
//! container can drive it. [`GameView`] is an owned snapshot implementation
//! used by the runtime and by tests.

use std::collections::BTreeMap;

use crate::types::{AgentId, AgentState, LevelId};

/// Game-state collaborator consumed by the engine.
///
/// Iteration order of [`FightView::agent_states`] carries no meaning for the
/// caller, but the engine uses it as the snapshot order for tie-breaking, so
/// implementations should iterate deterministically.
pub trait FightView {
    fn current_level(&self) -> LevelId;

    fn monster_health(&self) -> u32;

    fn monster_attack(&self) -> u32;

    /// Living agents and their raw stats.
    fn agent_states(&self) -> impl Iterator<Item = (&AgentId, &AgentState)>;
}

/// Owned snapshot of one fight round.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameView {
    pub level: LevelId,
    pub monster_health: u32,
    pub monster_attack: u32,
    pub agents: BTreeMap<AgentId, AgentState>,
}

impl GameView {
    pub fn new(level: LevelId, monster_health: u32, monster_attack: u32) -> Self {
        Self {
            level,
            monster_health,
            monster_attack,
            agents: BTreeMap::new(),
        }
    }

    /// Adds an agent (builder pattern). A repeated id replaces the earlier stats.
    #[must_use]
    pub fn with_agent(mut self, id: impl Into<AgentId>, state: AgentState) -> Self {
        self.agents.insert(id.into(), state);
        self
    }

    pub fn insert_agent(&mut self, id: impl Into<AgentId>, state: AgentState) {
        self.agents.insert(id.into(), state);
    }

    pub fn agent_count(&self) -> usize {
        self.agents.len()
    }
}

impl FightView for GameView {
    fn current_level(&self) -> LevelId {
        self.level
    }

    fn monster_health(&self) -> u32 {
        self.monster_health
    }

    fn monster_attack(&self) -> u32 {
        self.monster_attack
    }

    fn agent_states(&self) -> impl Iterator<Item = (&AgentId, &AgentState)> {
        self.agents.iter()
    }
}
