//! Fixtures shared by the engine's unit tests.

use std::collections::BTreeMap;
use std::sync::Arc;

use sd_core::{
    BattingSide, CardCatalog, Chart, Hand, Hitter, Lineup, LineupFile, Outcome, Pitcher,
    PitcherRole, Position, Range, Speed, StrategyCard, Usage,
};

pub(crate) const FIELD: [Position; 9] = [
    Position::CenterField,
    Position::SecondBase,
    Position::FirstBase,
    Position::DesignatedHitter,
    Position::ThirdBase,
    Position::Shortstop,
    Position::LeftField,
    Position::RightField,
    Position::Catcher,
];

/// Hitter chart used everywhere: 1-5 SO, 6-8 GO, 9-10 FO, 11-12 BB,
/// 13-15 1B, 16 1B+, 17-18 2B, 19 3B, 20+ HR.
pub(crate) fn hitter_chart() -> Chart {
    Chart::new()
        .with(Outcome::Strikeout, Range::new(1, 5))
        .with(Outcome::Groundout, Range::new(6, 8))
        .with(Outcome::Flyout, Range::new(9, 10))
        .with(Outcome::Walk, Range::new(11, 12))
        .with(Outcome::Single, Range::new(13, 15))
        .with(Outcome::SinglePlus, Range::new(16, 16))
        .with(Outcome::Double, Range::new(17, 18))
        .with(Outcome::Triple, Range::new(19, 19))
        .with(Outcome::HomeRun, Range::From { low: 20 })
}

/// Pitcher chart: 1-2 PU, 3-8 SO, 9-14 GO, 15-17 FO, 18 BB, 19 1B, 20 2B, 21+ HR.
pub(crate) fn pitcher_chart() -> Chart {
    Chart::new()
        .with(Outcome::Popout, Range::new(1, 2))
        .with(Outcome::Strikeout, Range::new(3, 8))
        .with(Outcome::Groundout, Range::new(9, 14))
        .with(Outcome::Flyout, Range::new(15, 17))
        .with(Outcome::Walk, Range::new(18, 18))
        .with(Outcome::Single, Range::new(19, 19))
        .with(Outcome::Double, Range::new(20, 20))
        .with(Outcome::HomeRun, Range::From { low: 21 })
}

/// On-base 10, speed 12, one fielding point at `position`.
pub(crate) fn hitter(name: &str, position: Position, bats: BattingSide) -> Hitter {
    let mut fielding = BTreeMap::new();
    fielding.insert(position, 1);
    Hitter {
        name: name.to_string(),
        on_base: 10,
        speed: Speed(12),
        bats,
        fielding,
        chart: hitter_chart(),
    }
}

/// Control 3, seven innings.
pub(crate) fn pitcher(name: &str, role: PitcherRole, throws: Hand) -> Pitcher {
    Pitcher {
        name: name.to_string(),
        control: 3,
        innings: 7,
        role,
        throws,
        chart: pitcher_chart(),
    }
}

pub(crate) fn catalog() -> Arc<CardCatalog> {
    let cards = vec![
        StrategyCard::new("T#1", "Boost", Usage::Offense, "BP", "SW+2").unwrap(),
        StrategyCard::new("T#2", "Shutdown", Usage::Defense, "BP", "PI+2").unwrap(),
    ];
    Arc::new(CardCatalog::new(cards).unwrap())
}

pub(crate) fn lineup_with(name: &str, bats: BattingSide, pitcher: Pitcher) -> Lineup {
    let file = FIELD
        .iter()
        .enumerate()
        .fold(LineupFile::new(name), |f, (i, &p)| {
            f.bat(p, hitter(&format!("{name} {i}"), p, bats))
        })
        .with_pitcher(pitcher);
    Lineup::new(file, catalog()).unwrap()
}

pub(crate) fn lineup(name: &str) -> Lineup {
    lineup_with(
        name,
        BattingSide::Right,
        pitcher(&format!("{name} Ace"), PitcherRole::Starter, Hand::Right),
    )
}

pub(crate) fn card(usage: Usage, pre: &str, post: &str) -> StrategyCard {
    StrategyCard::new("T#99", "Test Card", usage, pre, post).unwrap()
}
