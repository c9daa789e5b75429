//! Fielding positions, numbered the way a scorecard numbers them.

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};

/// A position in the lineup or on the field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Position {
    /// Designated hitter (0).
    DesignatedHitter,
    /// Pitcher (1).
    Pitcher,
    /// Catcher (2).
    Catcher,
    /// First base (3).
    FirstBase,
    /// Second base (4).
    SecondBase,
    /// Third base (5).
    ThirdBase,
    /// Shortstop (6).
    Shortstop,
    /// Left field (7).
    LeftField,
    /// Center field (8).
    CenterField,
    /// Right field (9).
    RightField,
}

impl Position {
    /// All positions in scorecard order.
    pub const ALL: [Position; 10] = [
        Position::DesignatedHitter,
        Position::Pitcher,
        Position::Catcher,
        Position::FirstBase,
        Position::SecondBase,
        Position::ThirdBase,
        Position::Shortstop,
        Position::LeftField,
        Position::CenterField,
        Position::RightField,
    ];

    /// The four infield positions whose gloves turn a double play.
    pub const INFIELD: [Position; 4] = [
        Position::FirstBase,
        Position::SecondBase,
        Position::ThirdBase,
        Position::Shortstop,
    ];

    /// Scorecard number.
    pub fn number(self) -> usize {
        match self {
            Self::DesignatedHitter => 0,
            Self::Pitcher => 1,
            Self::Catcher => 2,
            Self::FirstBase => 3,
            Self::SecondBase => 4,
            Self::ThirdBase => 5,
            Self::Shortstop => 6,
            Self::LeftField => 7,
            Self::CenterField => 8,
            Self::RightField => 9,
        }
    }

    /// Short abbreviation, e.g. `SS`.
    pub fn abbr(self) -> &'static str {
        match self {
            Self::DesignatedHitter => "DH",
            Self::Pitcher => "P",
            Self::Catcher => "C",
            Self::FirstBase => "1B",
            Self::SecondBase => "2B",
            Self::ThirdBase => "3B",
            Self::Shortstop => "SS",
            Self::LeftField => "LF",
            Self::CenterField => "CF",
            Self::RightField => "RF",
        }
    }

    /// Full name, e.g. `Shortstop`.
    pub fn full_name(self) -> &'static str {
        match self {
            Self::DesignatedHitter => "Designated Hitter",
            Self::Pitcher => "Pitcher",
            Self::Catcher => "Catcher",
            Self::FirstBase => "1st Baseman",
            Self::SecondBase => "2nd Baseman",
            Self::ThirdBase => "3rd Baseman",
            Self::Shortstop => "Shortstop",
            Self::LeftField => "Left Fielder",
            Self::CenterField => "Center Fielder",
            Self::RightField => "Right Fielder",
        }
    }

    /// Look up a position by scorecard number.
    pub fn from_number(n: usize) -> CoreResult<Self> {
        Self::ALL
            .get(n)
            .copied()
            .ok_or_else(|| CoreError::UnknownPosition(n.to_string()))
    }

    /// Look up a position by abbreviation (case-insensitive).
    pub fn from_abbr(s: &str) -> CoreResult<Self> {
        let upper = s.trim().to_uppercase();
        Self::ALL
            .into_iter()
            .find(|p| p.abbr() == upper)
            .ok_or_else(|| CoreError::UnknownPosition(s.to_string()))
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.abbr())
    }
}
