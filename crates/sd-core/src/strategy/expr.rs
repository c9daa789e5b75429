//! Strategy card expressions.
//!
//! A card carries two short programs. The precondition is checked against
//! the tail of the event log to decide whether the card can be played. The
//! postcondition is a list of clauses run when it is played. Both are parsed
//! once when the card is built, so a malformed card fails at load time.

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::player::Hand;
use crate::token::{Outcome, Token};

/// One alternative a precondition compares against the last log token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    /// `A`: always playable.
    Any,
    /// `AO`: the last token is an out (PU, SO, GO, FO).
    AnyOut,
    /// The last token must equal this one.
    Token(Token),
}

impl Trigger {
    fn parse(expr: &str, code: &str) -> CoreResult<Self> {
        match code {
            "A" => Ok(Self::Any),
            "AO" => Ok(Self::AnyOut),
            other => Token::parse(other)
                .map(Self::Token)
                .map_err(|_| CoreError::expression(expr, format!("unknown code '{other}'"))),
        }
    }
}

/// A parsed precondition: `code`, `code^code`, or either followed by `+HC`/`+PC`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct Precondition {
    source: String,
    alternatives: Vec<Trigger>,
    qualifier: Option<Token>,
}

impl Precondition {
    /// Parse a precondition expression.
    pub fn parse(expr: &str) -> CoreResult<Self> {
        let trimmed = expr.trim();
        if trimmed.is_empty() {
            return Err(CoreError::expression(expr, "empty precondition"));
        }
        // `1B+` is itself a token, so only a trailing `+HC`/`+PC` is a qualifier.
        let (head, qualifier) = match trimmed.rsplit_once('+') {
            Some((head, "HC")) => (head, Some(Token::HitterChart)),
            Some((head, "PC")) => (head, Some(Token::PitcherChart)),
            _ => (trimmed, None),
        };
        let alternatives = head
            .split('^')
            .map(|code| Trigger::parse(expr, code))
            .collect::<CoreResult<Vec<_>>>()?;
        Ok(Self {
            source: trimmed.to_string(),
            alternatives,
            qualifier,
        })
    }

    /// The alternatives compared against the last token, in order.
    pub fn alternatives(&self) -> &[Trigger] {
        &self.alternatives
    }

    /// `HC` or `PC` when the card also constrains the chart used.
    pub fn qualifier(&self) -> Option<Token> {
        self.qualifier
    }

    /// The expression as written on the card.
    pub fn as_str(&self) -> &str {
        &self.source
    }
}

impl From<Precondition> for String {
    fn from(p: Precondition) -> Self {
        p.source
    }
}

impl TryFrom<String> for Precondition {
    type Error = CoreError;

    fn try_from(value: String) -> CoreResult<Self> {
        Self::parse(&value)
    }
}

/// A number in a postcondition clause.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Value {
    /// A literal integer.
    Literal(i32),
    /// `AR`: the number of occupied bases when the clause runs.
    AllRunners,
}

impl Value {
    fn parse(expr: &str, s: &str) -> CoreResult<Self> {
        if s == "AR" {
            return Ok(Self::AllRunners);
        }
        s.parse()
            .map(Self::Literal)
            .map_err(|_| CoreError::expression(expr, format!("bad value '{s}'")))
    }
}

/// Whose hand a discard or draw applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    /// `SE`: the side that played the card.
    Acting,
    /// `OP`: the other side.
    Opposing,
}

/// `P+...`: a requirement on the current pitcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PitcherFilter {
    /// `TI`: accepted for card compatibility, always passes.
    Tired,
    /// `CL`: the pitcher must be a closer.
    Closer,
    /// `L` or `R`: the pitcher must throw with that hand.
    Throws(Hand),
}

/// `B+...`: a requirement on the current batter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BatterFilter {
    /// `R`: bats right or switch.
    BatsRight,
    /// `S`: anything but a switch hitter.
    NotSwitch,
    /// `L`: anything but a left-handed batter.
    NotLeft,
}

/// A single postcondition clause.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Clause {
    /// `SW+v`: adjust the next swing.
    Swing(Value),
    /// `PI+v`: adjust the next pitch.
    Pitch(Value),
    /// `D+v`: adjust the lead-runner check.
    Field(Value),
    /// `P+f`: stop unless the pitcher passes.
    Pitcher(PitcherFilter),
    /// `B+f`: stop unless the batter passes.
    Batter(BatterFilter),
    /// `DI+side+n`: discard cards.
    Discard {
        /// Whose hand.
        side: Side,
        /// How many.
        count: Value,
    },
    /// `DR+side+n`: draw cards.
    Draw {
        /// Whose hand.
        side: Side,
        /// How many.
        count: Value,
    },
    /// `PU` or `BB`: force that outcome into the log.
    Force(Outcome),
    /// `RRS`: reroll the last swing.
    RerollSwing,
    /// `RRDP`: reroll the last lead-runner check.
    RerollDoublePlay,
    /// `code+a^b`: the first alternative that succeeds.
    AnyOf(Vec<Clause>),
}

impl Clause {
    fn parse(expr: &str, clause: &str) -> CoreResult<Self> {
        let parts: Vec<&str> = clause.split('+').collect();
        let code = parts[0];
        if let Some(first) = parts.get(1).filter(|v| v.contains('^')) {
            let rest: String = parts[2..].iter().map(|p| format!("+{p}")).collect();
            let options = first
                .split('^')
                .map(|alt| Self::parse(expr, &format!("{code}+{alt}{rest}")))
                .collect::<CoreResult<Vec<_>>>()?;
            return Ok(Self::AnyOf(options));
        }

        let arg = |i: usize| value_at(expr, &parts, i);
        let clause = match code {
            "SW" => Self::Swing(Value::parse(expr, arg(1)?)?),
            "PI" => Self::Pitch(Value::parse(expr, arg(1)?)?),
            "D" => Self::Field(Value::parse(expr, arg(1)?)?),
            "P" => Self::Pitcher(match arg(1)? {
                "TI" => PitcherFilter::Tired,
                "CL" => PitcherFilter::Closer,
                "L" => PitcherFilter::Throws(Hand::Left),
                "R" => PitcherFilter::Throws(Hand::Right),
                other => {
                    return Err(CoreError::expression(
                        expr,
                        format!("unknown pitcher filter '{other}'"),
                    ));
                }
            }),
            "B" => Self::Batter(match arg(1)? {
                "R" => BatterFilter::BatsRight,
                "S" => BatterFilter::NotSwitch,
                "L" => BatterFilter::NotLeft,
                other => {
                    return Err(CoreError::expression(
                        expr,
                        format!("unknown batter filter '{other}'"),
                    ));
                }
            }),
            "DI" | "DR" => {
                let side = match arg(1)? {
                    "SE" => Side::Acting,
                    "OP" => Side::Opposing,
                    other => {
                        return Err(CoreError::expression(
                            expr,
                            format!("unknown side '{other}'"),
                        ));
                    }
                };
                let count = Value::parse(expr, arg(2)?)?;
                if code == "DI" {
                    Self::Discard { side, count }
                } else {
                    Self::Draw { side, count }
                }
            }
            "PU" => Self::Force(Outcome::Popout),
            "BB" => Self::Force(Outcome::Walk),
            "RRS" => Self::RerollSwing,
            "RRDP" => Self::RerollDoublePlay,
            other => {
                return Err(CoreError::expression(
                    expr,
                    format!("unknown clause '{other}'"),
                ));
            }
        };
        Ok(clause)
    }
}

fn value_at<'a>(expr: &str, parts: &[&'a str], i: usize) -> CoreResult<&'a str> {
    parts
        .get(i)
        .copied()
        .ok_or_else(|| CoreError::expression(expr, format!("'{}' needs a value", parts[0])))
}

/// A parsed postcondition: space-separated clauses run in order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct Postcondition {
    source: String,
    clauses: Vec<Clause>,
}

impl Postcondition {
    /// Parse a postcondition expression.
    pub fn parse(expr: &str) -> CoreResult<Self> {
        let clauses = expr
            .split_whitespace()
            .map(|c| Clause::parse(expr, c))
            .collect::<CoreResult<Vec<_>>>()?;
        if clauses.is_empty() {
            return Err(CoreError::expression(expr, "empty postcondition"));
        }
        Ok(Self {
            source: expr.trim().to_string(),
            clauses,
        })
    }

    /// Clauses in execution order.
    pub fn clauses(&self) -> &[Clause] {
        &self.clauses
    }

    /// The expression as written on the card.
    pub fn as_str(&self) -> &str {
        &self.source
    }
}

impl From<Postcondition> for String {
    fn from(p: Postcondition) -> Self {
        p.source
    }
}

impl TryFrom<String> for Postcondition {
    type Error = CoreError;

    fn try_from(value: String) -> CoreResult<Self> {
        Self::parse(&value)
    }
}
