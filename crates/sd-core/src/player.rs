//! Player cards: hitters and pitchers.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::chart::Chart;
use crate::error::{CoreError, CoreResult};
use crate::position::Position;

/// Which side of the plate a hitter bats from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BattingSide {
    /// Bats left.
    #[serde(rename = "L")]
    Left,
    /// Bats right.
    #[serde(rename = "R")]
    Right,
    /// Switch hitter.
    #[serde(rename = "S")]
    Switch,
}

/// The arm a pitcher throws with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Hand {
    /// Left-handed.
    #[serde(rename = "L")]
    Left,
    /// Right-handed.
    #[serde(rename = "R")]
    Right,
}

/// A pitcher's role on the staff.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PitcherRole {
    /// Starting pitcher.
    Starter,
    /// Relief pitcher.
    Reliever,
    /// Closer.
    Closer,
}

/// A speed rating. Letter grades on older cards map to fixed numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "SpeedInput", into = "i32")]
pub struct Speed(pub i32);

impl Speed {
    /// Parse `A`, `B`, `C`, or a number.
    pub fn parse(s: &str) -> CoreResult<Self> {
        match s.trim() {
            "A" => Ok(Self(20)),
            "B" => Ok(Self(15)),
            "C" => Ok(Self(10)),
            other => other
                .parse()
                .map(Self)
                .map_err(|_| CoreError::InvalidSpeed(s.to_string())),
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum SpeedInput {
    Number(i32),
    Grade(String),
}

impl TryFrom<SpeedInput> for Speed {
    type Error = CoreError;

    fn try_from(input: SpeedInput) -> CoreResult<Self> {
        match input {
            SpeedInput::Number(n) => Ok(Self(n)),
            SpeedInput::Grade(s) => Self::parse(&s),
        }
    }
}

impl From<Speed> for i32 {
    fn from(speed: Speed) -> Self {
        speed.0
    }
}

/// A position player's card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hitter {
    /// Player name.
    pub name: String,
    /// On-base value the pitch total is compared against.
    pub on_base: i32,
    /// Speed rating, used when a double play is turned.
    pub speed: Speed,
    /// Batting side.
    pub bats: BattingSide,
    /// Fielding rating at each position the player can play.
    #[serde(default)]
    pub fielding: BTreeMap<Position, i32>,
    /// Result chart (SO, GB, FB, BB, 1B, 1B+, 2B, 3B, HR).
    pub chart: Chart,
}

impl Hitter {
    /// Fielding rating at a position, or `None` if the player cannot play it.
    pub fn fielding_at(&self, position: Position) -> Option<i32> {
        if position == Position::DesignatedHitter {
            return Some(0);
        }
        self.fielding.get(&position).copied()
    }
}

/// A pitcher's card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pitcher {
    /// Player name.
    pub name: String,
    /// Control, added to the pitch roll.
    pub control: i32,
    /// Innings the pitcher can go before tiring.
    pub innings: u32,
    /// Role on the staff.
    pub role: PitcherRole,
    /// Throwing hand.
    pub throws: Hand,
    /// Result chart (PU, SO, GB, FB, BB, 1B, 2B, HR).
    pub chart: Chart,
}

impl Pitcher {
    /// Adjustment to the pitch total once the pitcher is past his innings.
    ///
    /// Zero until `inning` exceeds the rated innings, then one point per
    /// inning over.
    pub fn fatigue(&self, inning: u32) -> i32 {
        if inning > self.innings {
            self.innings as i32 - inning as i32
        } else {
            0
        }
    }
}
