//! An in-memory team: nine batters, a pitcher, and a hand of cards.

use std::collections::BTreeMap;
use std::sync::Arc;

use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::player::{Hitter, Pitcher};
use crate::position::Position;
use crate::roster::{CardState, HeldCard, Roster};
use crate::strategy::{CardCatalog, StrategyCard};

/// Batters in a full order.
pub const BATTING_SLOTS: usize = 9;

/// A batter and the position he plays.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineupSlot {
    /// Position on the field (`DesignatedHitter` for the DH).
    pub position: Position,
    /// The player's card.
    pub hitter: Hitter,
}

/// A team as written to disk.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineupFile {
    /// Team name.
    pub name: String,
    /// Batting order, leadoff first.
    #[serde(default)]
    pub batting_order: Vec<LineupSlot>,
    /// Starting pitcher.
    #[serde(default)]
    pub pitcher: Option<Pitcher>,
}

impl LineupFile {
    /// Start an empty team.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            batting_order: Vec::new(),
            pitcher: None,
        }
    }

    /// Add the next batter to the order.
    pub fn bat(mut self, position: Position, hitter: Hitter) -> Self {
        self.batting_order.push(LineupSlot { position, hitter });
        self
    }

    /// Set the starting pitcher.
    pub fn with_pitcher(mut self, pitcher: Pitcher) -> Self {
        self.pitcher = Some(pitcher);
        self
    }

    /// Parse a team from JSON.
    pub fn from_json(json: &str) -> CoreResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

/// A validated team ready to play.
#[derive(Debug, Clone)]
pub struct Lineup {
    name: String,
    order: Vec<LineupSlot>,
    pitcher: Pitcher,
    field: BTreeMap<Position, usize>,
    at_bat: usize,
    hand: Vec<HeldCard>,
    catalog: Arc<CardCatalog>,
}

impl Lineup {
    /// Validate a team and attach the catalog it draws from.
    pub fn new(file: LineupFile, catalog: Arc<CardCatalog>) -> CoreResult<Self> {
        if file.batting_order.len() != BATTING_SLOTS {
            return Err(CoreError::IncompleteLineup(format!(
                "{} has {} batters, needs {BATTING_SLOTS}",
                file.name,
                file.batting_order.len()
            )));
        }
        let pitcher = file
            .pitcher
            .ok_or_else(|| CoreError::IncompleteLineup(format!("{} has no pitcher", file.name)))?;

        let mut field = BTreeMap::new();
        for (slot, entry) in file.batting_order.iter().enumerate() {
            if field.insert(entry.position, slot).is_some() {
                return Err(CoreError::IncompleteLineup(format!(
                    "{} lists {} twice",
                    file.name, entry.position
                )));
            }
        }

        Ok(Self {
            name: file.name,
            order: file.batting_order,
            pitcher,
            field,
            at_bat: 0,
            hand: Vec::new(),
            catalog,
        })
    }

    /// Parse and validate a team from JSON.
    pub fn from_json(json: &str, catalog: Arc<CardCatalog>) -> CoreResult<Self> {
        Self::new(LineupFile::from_json(json)?, catalog)
    }

    /// Team name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The batting order.
    pub fn order(&self) -> &[LineupSlot] {
        &self.order
    }

    /// Put a specific card in hand.
    pub fn add_card(&mut self, card: StrategyCard) {
        self.hand.push(HeldCard {
            card,
            state: CardState::Held,
        });
    }
}

impl Roster for Lineup {
    fn current_batter(&self) -> &Hitter {
        &self.order[self.at_bat].hitter
    }

    fn batting_slot(&self) -> usize {
        self.at_bat
    }

    fn current_pitcher(&self) -> &Pitcher {
        &self.pitcher
    }

    fn fielding(&self, position: Position) -> i32 {
        self.field
            .get(&position)
            .and_then(|&slot| self.order[slot].hitter.fielding_at(position))
            .unwrap_or(0)
    }

    fn hand(&self) -> &[HeldCard] {
        &self.hand
    }

    fn queue_use(&mut self, index: usize) -> bool {
        match self.hand.get_mut(index) {
            Some(held) if held.state == CardState::Held => {
                held.state = CardState::QueuedUse;
                true
            }
            _ => false,
        }
    }

    fn queue_discard(&mut self, index: usize) -> bool {
        match self.hand.get_mut(index) {
            Some(held) if held.state == CardState::Held => {
                held.state = CardState::QueuedDiscard;
                true
            }
            _ => false,
        }
    }

    fn commit_queued(&mut self) {
        self.hand.retain(|h| h.state == CardState::Held);
    }

    fn discard_card(&mut self) -> bool {
        match self
            .hand
            .iter()
            .position(|h| h.state != CardState::QueuedUse)
        {
            Some(index) => {
                self.hand.remove(index);
                true
            }
            None => false,
        }
    }

    fn draw_card(&mut self, rng: &mut StdRng) {
        let card = self.catalog.draw(rng);
        self.hand.push(HeldCard {
            card,
            state: CardState::Held,
        });
    }

    fn next_batter(&mut self) {
        self.at_bat = (self.at_bat + 1) % BATTING_SLOTS;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::{Chart, Range};
    use crate::player::{BattingSide, Hand, PitcherRole, Speed};
    use crate::strategy::Usage;
    use crate::token::Outcome;
    use rand::SeedableRng;

    fn hitter(name: &str, position: Position, rating: i32) -> Hitter {
        let mut fielding = BTreeMap::new();
        fielding.insert(position, rating);
        Hitter {
            name: name.to_string(),
            on_base: 8,
            speed: Speed(12),
            bats: BattingSide::Right,
            fielding,
            chart: Chart::new().with(Outcome::Single, Range::new(1, 20)),
        }
    }

    fn pitcher() -> Pitcher {
        Pitcher {
            name: "Ace".to_string(),
            control: 5,
            innings: 7,
            role: PitcherRole::Starter,
            throws: Hand::Left,
            chart: Chart::new().with(Outcome::Strikeout, Range::new(1, 20)),
        }
    }

    fn catalog() -> Arc<CardCatalog> {
        let cards = vec![
            StrategyCard::new("04#1", "Boost", Usage::Offense, "BP", "SW+2").unwrap(),
            StrategyCard::new("04#2", "Walk", Usage::Defense, "BP", "BB").unwrap(),
        ];
        Arc::new(CardCatalog::new(cards).unwrap())
    }

    fn file() -> LineupFile {
        let positions = [
            Position::CenterField,
            Position::Shortstop,
            Position::FirstBase,
            Position::DesignatedHitter,
            Position::ThirdBase,
            Position::LeftField,
            Position::RightField,
            Position::Catcher,
            Position::SecondBase,
        ];
        positions
            .iter()
            .enumerate()
            .fold(LineupFile::new("Testers"), |f, (i, &p)| {
                f.bat(p, hitter(&format!("Player {i}"), p, i as i32))
            })
            .with_pitcher(pitcher())
    }

    #[test]
    fn batting_order_wraps() {
        let mut lineup = Lineup::new(file(), catalog()).unwrap();
        assert_eq!(lineup.batting_slot(), 0);
        for _ in 0..9 {
            lineup.next_batter();
        }
        assert_eq!(lineup.batting_slot(), 0);
        lineup.next_batter();
        assert_eq!(lineup.current_batter().name, "Player 1");
    }

    #[test]
    fn fielding_by_position() {
        let lineup = Lineup::new(file(), catalog()).unwrap();
        assert_eq!(lineup.fielding(Position::Shortstop), 1);
        assert_eq!(lineup.fielding(Position::SecondBase), 8);
        assert_eq!(lineup.fielding(Position::Pitcher), 0);
        assert_eq!(lineup.fielding(Position::DesignatedHitter), 0);
    }

    #[test]
    fn validation() {
        let mut short = file();
        short.batting_order.pop();
        assert!(matches!(
            Lineup::new(short, catalog()),
            Err(CoreError::IncompleteLineup(_))
        ));

        let mut no_arm = file();
        no_arm.pitcher = None;
        assert!(Lineup::new(no_arm, catalog()).is_err());

        let mut doubled = file();
        doubled.batting_order[1].position = Position::CenterField;
        let err = Lineup::new(doubled, catalog()).unwrap_err();
        assert!(err.to_string().contains("CF twice"));
    }

    #[test]
    fn queue_commit_and_discard() {
        let mut lineup = Lineup::new(file(), catalog()).unwrap();
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..3 {
            lineup.draw_card(&mut rng);
        }
        assert_eq!(lineup.hand().len(), 3);

        assert!(lineup.queue_use(0));
        assert!(!lineup.queue_use(0));
        assert!(!lineup.queue_discard(7));
        assert_eq!(lineup.queued_uses().len(), 1);

        // Oldest card not queued for use goes first.
        assert!(lineup.discard_card());
        assert_eq!(lineup.hand().len(), 2);
        assert_eq!(lineup.hand()[0].state, CardState::QueuedUse);

        assert!(lineup.queue_discard(1));
        lineup.commit_queued();
        assert!(lineup.hand().is_empty());
        assert!(!lineup.discard_card());
    }

    #[test]
    fn add_specific_card() {
        let mut lineup = Lineup::new(file(), catalog()).unwrap();
        let card = StrategyCard::new("04#7", "Pinch", Usage::Offense, "BP", "SW+1").unwrap();
        lineup.add_card(card.clone());
        assert_eq!(lineup.hand()[0].card, card);
        assert_eq!(lineup.hand()[0].state, CardState::Held);
    }

    #[test]
    fn lineup_from_json() {
        let json = serde_json::to_string(&file()).unwrap();
        let lineup = Lineup::from_json(&json, catalog()).unwrap();
        assert_eq!(lineup.name(), "Testers");
        assert_eq!(lineup.order().len(), BATTING_SLOTS);
        assert_eq!(lineup.current_pitcher().throws, Hand::Left);
    }
}
