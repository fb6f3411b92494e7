//! Identity, stat, and action types shared by every stage of the engine.

use core::fmt;

/// Level number reported by the view. Levels start at 1.
pub type LevelId = u32;

/// Opaque agent identifier.
///
/// Ordering and hashing follow the underlying string so recommendation maps
/// iterate deterministically.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AgentId(pub String);

impl AgentId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AgentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for AgentId {
    fn from(id: &str) -> Self {
        Self(id.to_owned())
    }
}

impl From<String> for AgentId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Raw fight-relevant stats of one agent, as supplied by the view.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AgentState {
    pub hp: u32,
    pub attack: u32,
    pub bonus_attack: u32,
    pub defense: u32,
    pub bonus_defense: u32,
}

impl AgentState {
    /// Creates stats with no equipment bonuses.
    pub const fn new(hp: u32, attack: u32, defense: u32) -> Self {
        Self {
            hp,
            attack,
            bonus_attack: 0,
            defense,
            bonus_defense: 0,
        }
    }

    /// Attaches attack/defense bonuses (builder pattern).
    #[must_use]
    pub const fn with_bonus(mut self, bonus_attack: u32, bonus_defense: u32) -> Self {
        self.bonus_attack = bonus_attack;
        self.bonus_defense = bonus_defense;
        self
    }

    /// Base attack plus bonus attack.
    pub const fn effective_attack(&self) -> u32 {
        self.attack.saturating_add(self.bonus_attack)
    }

    /// Base defense plus bonus defense.
    pub const fn effective_defense(&self) -> u32 {
        self.defense.saturating_add(self.bonus_defense)
    }
}

/// Action recommended to a single agent for the current fight round.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum FightAction {
    /// Commit attack to the monster.
    Attack,
    /// Commit defense to shield the group.
    Defend,
    /// Stay out of the fight.
    Cower,
}

/// One agent's fight-relevant stats for a single decision round.
///
/// Combatants are rebuilt from the view on every invocation and never outlive
/// it. Simulations only ever see them through shared references.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Combatant {
    pub id: AgentId,
    pub hp: u32,
    /// Base + bonus attack.
    pub attack: u32,
    /// Base + bonus defense.
    pub defense: u32,
    /// Assigned action, `None` until a decision stage sets it.
    pub action: Option<FightAction>,
}

impl Combatant {
    pub fn from_state(id: AgentId, state: &AgentState) -> Self {
        Self {
            id,
            hp: state.hp,
            attack: state.effective_attack(),
            defense: state.effective_defense(),
            action: None,
        }
    }
}
