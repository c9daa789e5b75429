//! Error types for the Showdown data model.

/// Alias for `Result<T, CoreError>`.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors raised while building players, cards, catalogs, or lineups.
///
/// All of these describe malformed input data. None of them are recoverable
/// at game time.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// A string is not part of the event token vocabulary.
    #[error("unknown event token: {0}")]
    UnknownToken(String),

    /// A strategy card expression could not be parsed.
    #[error("invalid card expression '{expr}': {reason}")]
    InvalidExpression {
        /// The full expression as written on the card.
        expr: String,
        /// What was wrong with it.
        reason: String,
    },

    /// A chart range could not be parsed.
    #[error("invalid chart range: {0}")]
    InvalidRange(String),

    /// A speed rating could not be parsed.
    #[error("invalid speed rating: {0}")]
    InvalidSpeed(String),

    /// A position abbreviation or number is not a real position.
    #[error("unknown position: {0}")]
    UnknownPosition(String),

    /// A card catalog contained no cards.
    #[error("card catalog is empty")]
    EmptyCatalog,

    /// A lineup is missing something it needs before a game can start.
    #[error("incomplete lineup: {0}")]
    IncompleteLineup(String),

    /// JSON input could not be decoded.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

impl CoreError {
    /// Build an [`CoreError::InvalidExpression`] for the given expression.
    pub fn expression(expr: &str, reason: impl Into<String>) -> Self {
        Self::InvalidExpression {
            expr: expr.to_string(),
            reason: reason.into(),
        }
    }
}
