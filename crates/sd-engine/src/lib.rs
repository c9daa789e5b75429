//! At-bat resolution engine for Showdown.
//!
//! Provides the turn controller ([`Game`]), the basepaths ([`Field`]), the
//! scoreboard ([`GameStat`]), the strategy card interpreter, and the event
//! log they all write to. Everything a game touches is owned by its `Game`;
//! there is no shared state between games.

pub mod config;
pub mod dice;
pub mod error;
pub mod event_log;
pub mod field;
pub mod game;
pub mod game_stat;
pub mod strategy;

#[cfg(test)]
mod testing;

pub use config::GameConfig;
pub use dice::Dice;
pub use error::{EngineError, EngineResult};
pub use event_log::EventLog;
pub use field::{Base, Field, Runner};
pub use game::{Advantage, Flow, Game, Transition, TurnState};
pub use game_stat::{GameStat, Half, TeamLine, TeamSide};
pub use strategy::{Acting, CardContext, Modifiers};
