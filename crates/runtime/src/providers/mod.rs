//! Fight provider implementations for different decision policies.

pub mod engine;
pub mod random;

pub use engine::EngineFightProvider;
pub use random::RandomFightProvider;
