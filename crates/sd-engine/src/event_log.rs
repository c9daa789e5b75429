//! The append-only event log a game writes as it plays.

use serde::{Deserialize, Serialize};

use sd_core::Token;

/// Every token emitted during a game, oldest first.
///
/// Interpretation only ever looks at the last two entries; the rest is kept
/// for replays and diagnostics.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EventLog {
    tokens: Vec<Token>,
}

impl EventLog {
    /// Create an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a token.
    pub fn emit(&mut self, token: impl Into<Token>) {
        self.tokens.push(token.into());
    }

    /// The most recent token.
    pub fn last(&self) -> Option<Token> {
        self.tokens.last().copied()
    }

    /// The token before the most recent one.
    pub fn second_to_last(&self) -> Option<Token> {
        self.tokens.len().checked_sub(2).map(|i| self.tokens[i])
    }

    /// All tokens.
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Tokens emitted since position `from`.
    pub fn since(&self, from: usize) -> &[Token] {
        self.tokens.get(from..).unwrap_or_default()
    }

    /// Number of tokens.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Whether nothing has been emitted yet.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Iterate over tokens, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &Token> {
        self.tokens.iter()
    }
}

impl std::fmt::Display for EventLog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let codes: Vec<&str> = self.tokens.iter().map(|t| t.code()).collect();
        f.write_str(&codes.join(" "))
    }
}
