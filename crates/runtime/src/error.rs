//! Unified error types surfaced by the runtime API.

use thiserror::Error;

use game_core::state::InitializationError;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("failed to initialize game state from scenario")]
    InitialState(#[source] InitializationError),

    #[error("spawn chance {0}% is outside 0..=100")]
    InvalidSpawnChance(u32),
}
