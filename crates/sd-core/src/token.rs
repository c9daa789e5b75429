//! Event tokens: the fixed vocabulary written to a game's event log.
//!
//! Every observable game event is a [`Token`]. Outcome tokens name the result
//! of a swing; signal tokens mark phases of the at-bat that strategy cards can
//! react to.

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};

/// The result of a swing, as read off a hitter's or pitcher's chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// Infield popup (pitcher charts only).
    #[serde(rename = "PU")]
    Popout,
    /// Strikeout.
    #[serde(rename = "SO")]
    Strikeout,
    /// Ground ball out, possibly turning into a double play.
    #[serde(rename = "GO")]
    Groundout,
    /// Fly ball out.
    #[serde(rename = "FO")]
    Flyout,
    /// Base on balls.
    #[serde(rename = "BB")]
    Walk,
    /// Single.
    #[serde(rename = "1B")]
    Single,
    /// Single with an extra base when second is open (hitter charts only).
    #[serde(rename = "1B+")]
    SinglePlus,
    /// Double.
    #[serde(rename = "2B")]
    Double,
    /// Triple (hitter charts only).
    #[serde(rename = "3B")]
    Triple,
    /// Home run.
    #[serde(rename = "HR")]
    HomeRun,
}

impl Outcome {
    /// All outcomes in chart order.
    pub const ALL: [Outcome; 10] = [
        Outcome::Popout,
        Outcome::Strikeout,
        Outcome::Groundout,
        Outcome::Flyout,
        Outcome::Walk,
        Outcome::Single,
        Outcome::SinglePlus,
        Outcome::Double,
        Outcome::Triple,
        Outcome::HomeRun,
    ];

    /// The log code for this outcome.
    pub fn code(self) -> &'static str {
        match self {
            Self::Popout => "PU",
            Self::Strikeout => "SO",
            Self::Groundout => "GO",
            Self::Flyout => "FO",
            Self::Walk => "BB",
            Self::Single => "1B",
            Self::SinglePlus => "1B+",
            Self::Double => "2B",
            Self::Triple => "3B",
            Self::HomeRun => "HR",
        }
    }

    /// Parse an outcome from its log code.
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|o| o.code() == code)
    }

    /// Whether this outcome retires the batter.
    pub fn is_out(self) -> bool {
        matches!(
            self,
            Self::Popout | Self::Strikeout | Self::Groundout | Self::Flyout
        )
    }

    /// Whether this outcome counts as a base hit.
    pub fn is_hit(self) -> bool {
        matches!(
            self,
            Self::Single | Self::SinglePlus | Self::Double | Self::Triple | Self::HomeRun
        )
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Popout => write!(f, "Popout"),
            Self::Strikeout => write!(f, "Strikeout"),
            Self::Groundout => write!(f, "Groundout"),
            Self::Flyout => write!(f, "Flyout"),
            Self::Walk => write!(f, "Walk"),
            Self::Single => write!(f, "Single"),
            Self::SinglePlus => write!(f, "Single+"),
            Self::Double => write!(f, "Double"),
            Self::Triple => write!(f, "Triple"),
            Self::HomeRun => write!(f, "Home Run"),
        }
    }
}

/// A single entry in the event log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum Token {
    /// A swing result.
    Outcome(Outcome),
    /// Before the pitch (`BP`).
    BeforePitch,
    /// The swing was resolved on the pitcher's chart (`PC`).
    PitcherChart,
    /// The swing was resolved on the hitter's chart (`HC`).
    HitterChart,
    /// A double play is possible and has not been rolled yet (`BDP`).
    BeforeDoublePlay,
    /// The lead-runner check was rolled but not applied yet (`ADP`).
    AfterDoublePlay,
    /// The double play resolution was applied to the bases (`DPC`).
    DoublePlayComplete,
    /// The previous swing must be rerolled (`RRS`).
    RerollSwing,
    /// The previous lead-runner check must be rerolled (`RRDP`).
    RerollDoublePlay,
    /// The half-inning is over (`IO`).
    InningOver,
}

impl Token {
    /// The canonical log string for this token.
    pub fn code(self) -> &'static str {
        match self {
            Self::Outcome(o) => o.code(),
            Self::BeforePitch => "BP",
            Self::PitcherChart => "PC",
            Self::HitterChart => "HC",
            Self::BeforeDoublePlay => "BDP",
            Self::AfterDoublePlay => "ADP",
            Self::DoublePlayComplete => "DPC",
            Self::RerollSwing => "RRS",
            Self::RerollDoublePlay => "RRDP",
            Self::InningOver => "IO",
        }
    }

    /// Parse a token from its log string. Codes are case-sensitive.
    pub fn parse(code: &str) -> CoreResult<Self> {
        if let Some(outcome) = Outcome::from_code(code) {
            return Ok(Self::Outcome(outcome));
        }
        match code {
            "BP" => Ok(Self::BeforePitch),
            "PC" => Ok(Self::PitcherChart),
            "HC" => Ok(Self::HitterChart),
            "BDP" => Ok(Self::BeforeDoublePlay),
            "ADP" => Ok(Self::AfterDoublePlay),
            "DPC" => Ok(Self::DoublePlayComplete),
            "RRS" => Ok(Self::RerollSwing),
            "RRDP" => Ok(Self::RerollDoublePlay),
            "IO" => Ok(Self::InningOver),
            other => Err(CoreError::UnknownToken(other.to_string())),
        }
    }

    /// The outcome carried by this token, if it is an outcome token.
    pub fn outcome(self) -> Option<Outcome> {
        match self {
            Self::Outcome(o) => Some(o),
            _ => None,
        }
    }

    /// Whether this token is one of the reroll markers.
    pub fn is_reroll(self) -> bool {
        matches!(self, Self::RerollSwing | Self::RerollDoublePlay)
    }
}

impl From<Outcome> for Token {
    fn from(outcome: Outcome) -> Self {
        Self::Outcome(outcome)
    }
}

impl From<Token> for String {
    fn from(token: Token) -> Self {
        token.code().to_string()
    }
}

impl TryFrom<String> for Token {
    type Error = CoreError;

    fn try_from(value: String) -> CoreResult<Self> {
        Self::parse(&value)
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}
