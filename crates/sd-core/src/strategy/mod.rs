//! Strategy cards and the catalog they are drawn from.

pub mod expr;

use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};

pub use expr::{
    BatterFilter, Clause, PitcherFilter, Postcondition, Precondition, Side, Trigger, Value,
};

/// Which side of the ball may play a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Usage {
    /// Played by the batting team.
    Offense,
    /// Played by the fielding team.
    Defense,
    /// Played by either team.
    Utility,
}

impl Usage {
    /// Whether the batting team may play a card of this usage.
    pub fn offense(self) -> bool {
        matches!(self, Self::Offense | Self::Utility)
    }

    /// Whether the fielding team may play a card of this usage.
    pub fn defense(self) -> bool {
        matches!(self, Self::Defense | Self::Utility)
    }
}

impl std::fmt::Display for Usage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Offense => write!(f, "Offense"),
            Self::Defense => write!(f, "Defense"),
            Self::Utility => write!(f, "Utility"),
        }
    }
}

/// An immutable strategy card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StrategyCard {
    /// Identifier in `year#number` form.
    pub id: String,
    /// Card title.
    pub name: String,
    /// Who may play it.
    pub usage: Usage,
    /// When it may be played.
    pub precondition: Precondition,
    /// What it does.
    pub postcondition: Postcondition,
    /// Rules text.
    #[serde(default)]
    pub description: String,
}

impl StrategyCard {
    /// Build a card, parsing both expressions.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        usage: Usage,
        precondition: &str,
        postcondition: &str,
    ) -> CoreResult<Self> {
        Ok(Self {
            id: id.into(),
            name: name.into(),
            usage,
            precondition: Precondition::parse(precondition)?,
            postcondition: Postcondition::parse(postcondition)?,
            description: String::new(),
        })
    }

    /// Set the rules text.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}

/// Every card that can be drawn. Draws are uniform and with replacement.
#[derive(Debug, Clone, Serialize)]
#[serde(transparent)]
pub struct CardCatalog {
    cards: Vec<StrategyCard>,
}

impl CardCatalog {
    /// Build a catalog from cards. An empty list is rejected.
    pub fn new(cards: Vec<StrategyCard>) -> CoreResult<Self> {
        if cards.is_empty() {
            return Err(CoreError::EmptyCatalog);
        }
        Ok(Self { cards })
    }

    /// Load a catalog from a JSON array of cards.
    ///
    /// Any card with a malformed expression fails the whole load.
    pub fn from_json(json: &str) -> CoreResult<Self> {
        let cards: Vec<StrategyCard> = serde_json::from_str(json)?;
        Self::new(cards)
    }

    /// Draw a random card.
    pub fn draw(&self, rng: &mut StdRng) -> StrategyCard {
        // `new` guarantees at least one card.
        self.cards
            .choose(rng)
            .cloned()
            .unwrap_or_else(|| self.cards[0].clone())
    }

    /// Look up a card by identifier.
    pub fn get(&self, id: &str) -> Option<&StrategyCard> {
        self.cards.iter().find(|c| c.id == id)
    }

    /// All cards in catalog order.
    pub fn cards(&self) -> &[StrategyCard] {
        &self.cards
    }

    /// Number of cards.
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Always false for a constructed catalog.
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
