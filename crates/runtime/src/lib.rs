//! Runtime wiring for the fight decision engine.
//!
//! This crate wraps [`fight_core::FightEngine`] behind the asynchronous
//! [`FightProvider`] abstraction so harnesses can decide fight rounds with the
//! engine, a stand-in policy, or a test fixture interchangeably.
//!
//! Modules are organized by responsibility:
//! - [`api`] exposes the provider trait, decisions, and errors
//! - [`providers`] hosts the engine-backed and random providers
//! - [`config`] loads engine tunables from the environment
//! - [`metrics`] counts decisions per engine stage
pub mod api;
pub mod config;
pub mod metrics;
pub mod providers;

pub use api::{
    DecisionSource, FightDecision, FightProvider, Result, RuntimeError, UniformFightProvider,
};
pub use config::RuntimeConfig;
pub use metrics::{EngineMetrics, MetricsSnapshot};
pub use providers::{EngineFightProvider, RandomFightProvider};
