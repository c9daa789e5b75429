//! Data model for Showdown, a dice-driven tabletop baseball game.
//!
//! Provides the event token vocabulary, printed outcome charts, hitter and
//! pitcher cards, fielding positions, strategy cards with their parsed
//! trigger and effect expressions, the card catalog, and the [`Roster`]
//! collaborator trait with an in-memory [`Lineup`] implementation.

pub mod chart;
pub mod error;
pub mod lineup;
pub mod player;
pub mod position;
pub mod roster;
pub mod strategy;
pub mod token;

pub use chart::{Chart, Range};
pub use error::{CoreError, CoreResult};
pub use lineup::{Lineup, LineupFile, LineupSlot};
pub use player::{BattingSide, Hand, Hitter, Pitcher, PitcherRole, Speed};
pub use position::Position;
pub use roster::{CardState, HeldCard, Roster};
pub use strategy::{CardCatalog, Postcondition, Precondition, StrategyCard, Usage};
pub use token::{Outcome, Token};
