//! Fight-response decision engine.
//!
//! `fight-core` turns a snapshot of the living agents and the monster they
//! face into a per-agent [`FightAction`] recommendation. The pipeline tries
//! two cheap closed-form checks first ([`greedy`]) and only then searches
//! weighted candidate subsets ([`candidate`]) with a pure simulator
//! ([`simulator`]) evaluated in parallel ([`fanout`]). A survival-ratio
//! policy ([`selector`]) picks the winner.
//!
//! All entry points are pure functions of the view, except for the
//! write-once [`PopulationBaseline`] owned by [`FightEngine`].
pub mod baseline;
pub mod candidate;
pub mod config;
pub mod engine;
pub mod error;
pub mod fanout;
pub mod greedy;
pub mod selector;
pub mod simulator;
pub mod snapshot;
pub mod threshold;
pub mod types;
pub mod view;

pub use baseline::PopulationBaseline;
pub use candidate::{Candidate, CandidateMember};
pub use config::EngineConfig;
pub use engine::{DecisionPath, FightEngine, Recommendation};
pub use error::ConfigError;
pub use selector::SelectionPolicy;
pub use simulator::SimulationResult;
pub use snapshot::FightSnapshot;
pub use threshold::{LinearThreshold, PopulationThreshold};
pub use types::{AgentId, AgentState, Combatant, FightAction, LevelId};
pub use view::{FightView, GameView};
