//! Error types for the progression engine.

use thiserror::Error;

/// Result type for engine operations.
pub type EngineResult<T> = Result<T, EngineError>;

/// Errors that can occur during engine operations.
#[derive(Debug, Error)]
pub enum EngineError {
    /// The hero cannot afford the reward.
    #[error("not enough XP: {cost} needed, {xp} available")]
    InsufficientXp {
        /// XP cost of the reward.
        cost: u32,
        /// XP the hero currently has.
        xp: u32,
    },

    /// Invalid session input.
    #[error("invalid choice: {0}")]
    InvalidChoice(String),

    /// A core model value failed to parse.
    #[error("{0}")]
    Core(#[from] ql_core::CoreError),

    /// The save file could not be read or written.
    #[error("save file error: {0}")]
    Store(#[from] std::io::Error),

    /// The state snapshot could not be serialized.
    #[error("snapshot error: {0}")]
    Snapshot(#[from] serde_json::Error),
}
