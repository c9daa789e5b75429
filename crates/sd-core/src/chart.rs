//! Outcome charts: die-total ranges printed on each player card.

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::token::Outcome;

/// An inclusive range of die totals that produce one outcome.
///
/// An empty range (`-` on a printed card) never matches. An open-ended range
/// (`21+`) matches everything from its low end up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum Range {
    /// No result for this outcome.
    Empty,
    /// `low..=high`.
    Closed {
        /// Lowest total that matches.
        low: i32,
        /// Highest total that matches.
        high: i32,
    },
    /// `low` and anything above.
    From {
        /// Lowest total that matches.
        low: i32,
    },
}

impl Range {
    /// Build a closed range.
    pub fn new(low: i32, high: i32) -> Self {
        Self::Closed { low, high }
    }

    /// Whether a total falls inside this range.
    pub fn contains(self, total: i32) -> bool {
        match self {
            Self::Empty => false,
            Self::Closed { low, high } => (low..=high).contains(&total),
            Self::From { low } => total >= low,
        }
    }

    /// The lowest matching total, if any.
    pub fn low(self) -> Option<i32> {
        match self {
            Self::Empty => None,
            Self::Closed { low, .. } | Self::From { low } => Some(low),
        }
    }

    /// The highest matching total. Open-ended ranges report `i32::MAX`.
    pub fn high(self) -> Option<i32> {
        match self {
            Self::Empty => None,
            Self::Closed { high, .. } => Some(high),
            Self::From { .. } => Some(i32::MAX),
        }
    }

    /// Parse card notation: `-`, `7`, `3-8`, `21+`.
    pub fn parse(s: &str) -> CoreResult<Self> {
        let s = s.trim();
        if s == "-" || s.is_empty() {
            return Ok(Self::Empty);
        }
        let bad = || CoreError::InvalidRange(s.to_string());
        if let Some(low) = s.strip_suffix('+') {
            let low = low.trim().parse().map_err(|_| bad())?;
            return Ok(Self::From { low });
        }
        match s.split_once('-') {
            Some((low, high)) => {
                let low: i32 = low.trim().parse().map_err(|_| bad())?;
                let high: i32 = high.trim().parse().map_err(|_| bad())?;
                // Printed cards sometimes write a single value as "5-0".
                let high = if high == 0 { low } else { high };
                if high < low {
                    return Err(bad());
                }
                Ok(Self::Closed { low, high })
            }
            None => {
                let value = s.parse().map_err(|_| bad())?;
                Ok(Self::Closed {
                    low: value,
                    high: value,
                })
            }
        }
    }
}

impl std::fmt::Display for Range {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "-"),
            Self::Closed { low, high } if low == high => write!(f, "{low}"),
            Self::Closed { low, high } => write!(f, "{low}-{high}"),
            Self::From { low } => write!(f, "{low}+"),
        }
    }
}

impl From<Range> for String {
    fn from(range: Range) -> Self {
        range.to_string()
    }
}

impl TryFrom<String> for Range {
    type Error = CoreError;

    fn try_from(value: String) -> CoreResult<Self> {
        Self::parse(&value)
    }
}

/// A player's chart: ordered rows of outcome and range.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Chart {
    rows: Vec<(Outcome, Range)>,
}

impl Chart {
    /// Create an empty chart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a row to the chart.
    pub fn with(mut self, outcome: Outcome, range: Range) -> Self {
        self.rows.push((outcome, range));
        self
    }

    /// All rows in printed order.
    pub fn rows(&self) -> &[(Outcome, Range)] {
        &self.rows
    }

    /// The range printed for an outcome, or [`Range::Empty`].
    pub fn range_of(&self, outcome: Outcome) -> Range {
        self.rows
            .iter()
            .find(|(o, _)| *o == outcome)
            .map(|(_, r)| *r)
            .unwrap_or(Range::Empty)
    }

    /// Look up the outcome for a modified die total.
    ///
    /// Totals off either end of the chart resolve to the lowest or highest
    /// printed row. Returns `None` only for a chart with no printed ranges.
    pub fn resolve(&self, total: i32) -> Option<Outcome> {
        if let Some((outcome, _)) = self.rows.iter().find(|(_, r)| r.contains(total)) {
            return Some(*outcome);
        }
        let printed = self.rows.iter().filter(|(_, r)| *r != Range::Empty);
        let lowest = printed.clone().min_by_key(|(_, r)| r.low());
        let highest = printed.max_by_key(|(_, r)| r.high());
        match (lowest, highest) {
            (Some((low_outcome, low_range)), _) if low_range.low().is_some_and(|l| total < l) => {
                Some(*low_outcome)
            }
            (_, Some((high_outcome, _))) => Some(*high_outcome),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hitter_chart() -> Chart {
        Chart::new()
            .with(Outcome::Strikeout, Range::new(1, 2))
            .with(Outcome::Groundout, Range::new(3, 5))
            .with(Outcome::Flyout, Range::new(6, 7))
            .with(Outcome::Walk, Range::new(8, 12))
            .with(Outcome::Single, Range::new(13, 15))
            .with(Outcome::SinglePlus, Range::Empty)
            .with(Outcome::Double, Range::new(16, 18))
            .with(Outcome::Triple, Range::new(19, 19))
            .with(Outcome::HomeRun, Range::From { low: 20 })
    }

    #[test]
    fn parse_notations() {
        assert_eq!(Range::parse("-").unwrap(), Range::Empty);
        assert_eq!(Range::parse("7").unwrap(), Range::new(7, 7));
        assert_eq!(Range::parse("3-8").unwrap(), Range::new(3, 8));
        assert_eq!(Range::parse("21+").unwrap(), Range::From { low: 21 });
        assert_eq!(Range::parse("5-0").unwrap(), Range::new(5, 5));
    }

    #[test]
    fn parse_rejects_garbage() {
        assert!(Range::parse("abc").is_err());
        assert!(Range::parse("9-3").is_err());
        assert!(Range::parse("x+").is_err());
    }

    #[test]
    fn display_matches_card_notation() {
        assert_eq!(Range::Empty.to_string(), "-");
        assert_eq!(Range::new(4, 4).to_string(), "4");
        assert_eq!(Range::new(2, 9).to_string(), "2-9");
        assert_eq!(Range::From { low: 21 }.to_string(), "21+");
    }

    #[test]
    fn empty_range_never_matches() {
        assert!(!Range::Empty.contains(0));
        assert!(!Range::Empty.contains(10));
    }

    #[test]
    fn resolve_inside_chart() {
        let chart = hitter_chart();
        assert_eq!(chart.resolve(1), Some(Outcome::Strikeout));
        assert_eq!(chart.resolve(4), Some(Outcome::Groundout));
        assert_eq!(chart.resolve(10), Some(Outcome::Walk));
        assert_eq!(chart.resolve(19), Some(Outcome::Triple));
        assert_eq!(chart.resolve(27), Some(Outcome::HomeRun));
    }

    #[test]
    fn resolve_clamps_off_the_ends() {
        let chart = Chart::new()
            .with(Outcome::Popout, Range::new(1, 3))
            .with(Outcome::Strikeout, Range::new(4, 15))
            .with(Outcome::Single, Range::new(16, 20));
        assert_eq!(chart.resolve(-4), Some(Outcome::Popout));
        assert_eq!(chart.resolve(0), Some(Outcome::Popout));
        assert_eq!(chart.resolve(26), Some(Outcome::Single));
    }

    #[test]
    fn resolve_on_blank_chart() {
        assert_eq!(Chart::new().resolve(10), None);
        let blank = Chart::new().with(Outcome::Walk, Range::Empty);
        assert_eq!(blank.resolve(10), None);
    }

    #[test]
    fn range_of_missing_row_is_empty() {
        let chart = hitter_chart();
        assert_eq!(chart.range_of(Outcome::Popout), Range::Empty);
        assert_eq!(chart.range_of(Outcome::Walk), Range::new(8, 12));
    }

    proptest::proptest! {
        #[test]
        fn printed_chart_always_resolves(total in -50i32..80) {
            proptest::prop_assert!(hitter_chart().resolve(total).is_some());
        }
    }

    #[test]
    fn serde_roundtrip() {
        let chart = hitter_chart();
        let json = serde_json::to_string(&chart).unwrap();
        assert!(json.contains("\"20+\""));
        let back: Chart = serde_json::from_str(&json).unwrap();
        assert_eq!(back, chart);
    }
}
