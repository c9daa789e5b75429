//! The roster collaborator the turn controller talks to.

use rand::rngs::StdRng;

use crate::player::{Hitter, Pitcher};
use crate::position::Position;
use crate::strategy::StrategyCard;

/// What is about to happen to a card in hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardState {
    /// Sitting in hand.
    Held,
    /// Will be played on the next step.
    QueuedUse,
    /// Will be thrown away on the next step.
    QueuedDiscard,
}

/// A card in a roster's hand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeldCard {
    /// The card itself.
    pub card: StrategyCard,
    /// Pending action.
    pub state: CardState,
}

/// One team as seen by the game: batting order, field, pitcher and hand.
///
/// The controller only reads players and manipulates the hand; building and
/// persisting a team is up to the implementor.
pub trait Roster {
    /// The batter due up.
    fn current_batter(&self) -> &Hitter;

    /// Batting-order slot (0-8) of the batter due up.
    fn batting_slot(&self) -> usize;

    /// The pitcher on the mound.
    fn current_pitcher(&self) -> &Pitcher;

    /// Fielding rating of whoever plays `position`. Zero when nobody rated
    /// for it is there.
    fn fielding(&self, position: Position) -> i32;

    /// Cards in hand, oldest first.
    fn hand(&self) -> &[HeldCard];

    /// Mark the card at `index` to be played. Returns false if there is no
    /// such card or it is already queued.
    fn queue_use(&mut self, index: usize) -> bool;

    /// Mark the card at `index` to be discarded.
    fn queue_discard(&mut self, index: usize) -> bool;

    /// Cards queued for use, oldest first.
    fn queued_uses(&self) -> Vec<StrategyCard> {
        self.hand()
            .iter()
            .filter(|h| h.state == CardState::QueuedUse)
            .map(|h| h.card.clone())
            .collect()
    }

    /// Remove every queued card from the hand.
    fn commit_queued(&mut self);

    /// Throw away the oldest card that is not queued for use. Returns false
    /// when there is nothing to discard.
    fn discard_card(&mut self) -> bool;

    /// Draw one card into the hand.
    fn draw_card(&mut self, rng: &mut StdRng);

    /// Move on to the next batter in the order.
    fn next_batter(&mut self);
}
