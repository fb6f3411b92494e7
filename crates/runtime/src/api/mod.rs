//! Public runtime API surface.
//!
//! This module gathers the types exposed to consumers of the runtime crate so
//! providers can stay focused on producing decisions.

pub mod errors;
pub mod providers;

pub use errors::{Result, RuntimeError};
pub use providers::{DecisionSource, FightDecision, FightProvider, UniformFightProvider};
