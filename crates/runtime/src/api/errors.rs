//! Unified error types surfaced by the runtime API.
//!
//! Wraps engine configuration failures and blocking-task coordination so
//! clients can bubble them up with consistent context. A fight the engine
//! cannot win is not an error: providers fall back to a default policy.
use thiserror::Error;

pub use fight_core::ConfigError;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("fight evaluation task join failed")]
    WorkerJoin(#[source] tokio::task::JoinError),
}
