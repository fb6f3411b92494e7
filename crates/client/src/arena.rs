//! Encounter loop used to drive fight providers level by level.
//!
//! The arena is a harness, not a rule engine. Each level it spawns a
//! monster scaled to the surviving party, asks every strategy's provider for
//! a decision, and plays the encounter out with a simple exchange model:
//!
//! ```text
//! each exchange:
//!   monster_health -= sum(attack of living attackers)
//!   if monster_health == 0: victory
//!   damage = max(0, monster_attack - sum(defense of living defenders))
//!   every living non-cowering agent takes damage / engaged_count
//! ```
//!
//! The level is lost if nobody engages or the monster survives
//! [`Arena::MAX_EXCHANGES`] exchanges. Dead agents leave the roster.

use std::collections::BTreeMap;
use std::sync::Arc;

use anyhow::{Context, Result};
use fight_core::{AgentId, FightAction, GameView, LevelId};
use fight_runtime::{DecisionSource, FightProvider};
use rand::Rng;
use rand::rngs::StdRng;

use crate::config::Strategy;
use crate::roster::Member;

/// Summary of one played level.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LevelOutcome {
    pub level: LevelId,
    pub monster_health: u32,
    pub monster_attack: u32,
    pub victory: bool,
    pub deaths: usize,
    pub survivors: usize,
    pub sources: Vec<(Strategy, DecisionSource)>,
}

pub struct Arena {
    members: Vec<Member>,
    providers: BTreeMap<Strategy, Arc<dyn FightProvider>>,
    rng: StdRng,
}

impl Arena {
    pub const MAX_EXCHANGES: u32 = 50;

    pub fn new(members: Vec<Member>, rng: StdRng) -> Self {
        Self {
            members,
            providers: BTreeMap::new(),
            rng,
        }
    }

    /// Registers the provider deciding for agents of `strategy`.
    ///
    /// If a provider already exists for this strategy, it will be replaced.
    #[must_use]
    pub fn with_provider(mut self, strategy: Strategy, provider: Arc<dyn FightProvider>) -> Self {
        self.providers.insert(strategy, provider);
        self
    }

    pub fn survivors(&self) -> &[Member] {
        &self.members
    }

    /// Plays levels `1..=levels`, stopping early on a lost level.
    pub async fn run(&mut self, levels: LevelId) -> Result<Vec<LevelOutcome>> {
        let mut outcomes = Vec::new();

        for level in 1..=levels {
            let outcome = self.play_level(level).await?;
            let victory = outcome.victory;

            tracing::info!(
                level,
                victory,
                deaths = outcome.deaths,
                survivors = outcome.survivors,
                "level finished"
            );
            outcomes.push(outcome);

            if !victory {
                break;
            }
        }

        Ok(outcomes)
    }

    /// Plays a single level against a freshly spawned monster.
    ///
    /// # Errors
    ///
    /// Returns an error if a strategy in the roster has no provider or a
    /// provider fails.
    pub async fn play_level(&mut self, level: LevelId) -> Result<LevelOutcome> {
        let (monster_health, monster_attack) = self.spawn_monster(level);
        let view = Arc::new(self.view(level, monster_health, monster_attack));

        let mut actions = BTreeMap::new();
        let mut sources = Vec::new();
        for strategy in self.strategies() {
            let provider = self
                .providers
                .get(&strategy)
                .with_context(|| format!("no fight provider registered for {strategy}"))?;
            let decision = provider
                .provide_fight(Arc::clone(&view))
                .await
                .with_context(|| format!("{strategy} provider failed at level {level}"))?;

            actions.extend(
                self.members
                    .iter()
                    .filter(|m| m.strategy == strategy)
                    .filter_map(|m| Some((m.id.clone(), decision.action(&m.id)?))),
            );
            sources.push((strategy, decision.source));
        }

        let before = self.members.len();
        let victory = resolve(
            monster_health,
            monster_attack,
            &mut self.members,
            &actions,
            Self::MAX_EXCHANGES,
        );
        self.members.retain(|m| m.state.hp > 0);

        Ok(LevelOutcome {
            level,
            monster_health,
            monster_attack,
            victory,
            deaths: before - self.members.len(),
            survivors: self.members.len(),
            sources,
        })
    }

    fn strategies(&self) -> Vec<Strategy> {
        let mut strategies: Vec<Strategy> = self.members.iter().map(|m| m.strategy).collect();
        strategies.sort();
        strategies.dedup();
        strategies
    }

    /// Monster stats scale with the party's combined stats and the level.
    fn spawn_monster(&mut self, level: LevelId) -> (u32, u32) {
        let total_attack: u64 = self
            .members
            .iter()
            .map(|m| u64::from(m.state.effective_attack()))
            .sum();
        let total_defense: u64 = self
            .members
            .iter()
            .map(|m| u64::from(m.state.effective_defense()))
            .sum();

        let health_factor = 0.6 + 0.15 * f64::from(level);
        let attack_factor = 0.5 + 0.1 * f64::from(level);

        let health = (total_attack as f64 * health_factor) as u32 + self.rng.gen_range(0..=10);
        let attack = (total_defense as f64 * attack_factor) as u32 + self.rng.gen_range(0..=5);
        (health, attack)
    }

    fn view(&self, level: LevelId, monster_health: u32, monster_attack: u32) -> GameView {
        let mut view = GameView::new(level, monster_health, monster_attack);
        for member in &self.members {
            view.insert_agent(member.id.clone(), member.state);
        }
        view
    }
}

/// Plays one encounter out, applying damage to `members` in place.
///
/// Agents without an entry in `actions` cower. Returns whether the monster
/// was killed within `max_exchanges`.
pub fn resolve(
    monster_health: u32,
    monster_attack: u32,
    members: &mut [Member],
    actions: &BTreeMap<AgentId, FightAction>,
    max_exchanges: u32,
) -> bool {
    let action_of = |id: &AgentId| actions.get(id).copied().unwrap_or(FightAction::Cower);
    let mut remaining = monster_health;

    for _ in 0..max_exchanges {
        let engaged: Vec<usize> = members
            .iter()
            .enumerate()
            .filter(|(_, m)| m.state.hp > 0 && action_of(&m.id) != FightAction::Cower)
            .map(|(index, _)| index)
            .collect();
        if engaged.is_empty() {
            return false;
        }

        let mut attack = 0u32;
        let mut defense = 0u32;
        for &index in &engaged {
            let member = &members[index];
            match action_of(&member.id) {
                FightAction::Attack => {
                    attack = attack.saturating_add(member.state.effective_attack())
                }
                FightAction::Defend => {
                    defense = defense.saturating_add(member.state.effective_defense())
                }
                FightAction::Cower => {}
            }
        }

        remaining = remaining.saturating_sub(attack);
        if remaining == 0 {
            return true;
        }

        let share = monster_attack.saturating_sub(defense) / engaged.len() as u32;
        for index in engaged {
            let hp = &mut members[index].state.hp;
            *hp = hp.saturating_sub(share);
        }
    }

    false
}
