//! Error types for the game engine.

use thiserror::Error;

/// Result type for engine operations.
pub type EngineResult<T> = Result<T, EngineError>;

/// Errors that abort a game.
#[derive(Debug, Error)]
pub enum EngineError {
    /// Bad input data surfaced while setting up or playing.
    #[error("{0}")]
    Core(#[from] sd_core::CoreError),

    /// Result dispatch found something other than an outcome at the tail.
    #[error("cannot dispatch '{token}' as a batting outcome (log: {log})")]
    NotDispatchable {
        /// The offending tail token, or `<empty>`.
        token: String,
        /// The whole event log.
        log: String,
    },

    /// A player's chart has no printed ranges to roll against.
    #[error("{player} has a blank chart")]
    BlankChart {
        /// Whose chart.
        player: String,
    },

    /// The game already has a winner.
    #[error("game is over")]
    GameOver,
}
