//! Simulation harness for fight providers.
//!
//! ```text
//! SimConfig ──→ roster::generate ──→ Arena
//!                                     ├─→ Engine team  → EngineFightProvider
//!                                     └─→ Random team  → RandomFightProvider
//! ```
//!
//! The binary (`fight-sim`) is the composition root: it loads `.env`, installs
//! logging, builds the providers from environment configuration, and plays
//! the configured number of levels.

pub mod arena;
pub mod config;
pub mod logging;
pub mod roster;

pub use arena::{Arena, LevelOutcome};
pub use config::{SimConfig, Strategy, TeamSpec};
pub use roster::Member;
