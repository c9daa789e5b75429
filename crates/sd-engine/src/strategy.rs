//! Strategy card interpreter.
//!
//! [`matches`] decides from the log tail whether a card may be played.
//! [`apply`] runs a played card's postcondition against the per-at-bat
//! modifiers, the log and both hands.

use rand::rngs::StdRng;
use tracing::{debug, warn};

use sd_core::strategy::{BatterFilter, Clause, PitcherFilter, Side, Trigger, Value};
use sd_core::{BattingSide, PitcherRole, Postcondition, Precondition, Roster, Token};

use crate::event_log::EventLog;

/// Adjustments cards make to the current at-bat.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Modifiers {
    /// Added to the swing roll.
    pub swing: i32,
    /// Added to the pitch roll.
    pub pitch: i32,
    /// Added to the lead-runner check.
    pub field: i32,
}

impl Modifiers {
    /// Zero everything.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Which team played the card being applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Acting {
    /// The batting team.
    Offense,
    /// The fielding team.
    Defense,
}

/// Everything a postcondition can touch.
pub struct CardContext<'a> {
    /// The game's log.
    pub log: &'a mut EventLog,
    /// Per-at-bat modifiers.
    pub modifiers: &'a mut Modifiers,
    /// The batting team.
    pub offense: &'a mut dyn Roster,
    /// The fielding team.
    pub defense: &'a mut dyn Roster,
    /// Who played the card.
    pub acting: Acting,
    /// Occupied bases, for `AR`.
    pub runners: usize,
    /// Generator for card draws.
    pub rng: &'a mut StdRng,
}

impl CardContext<'_> {
    fn value(&self, value: Value) -> i32 {
        match value {
            Value::Literal(n) => n,
            Value::AllRunners => self.runners as i32,
        }
    }

    /// The roster whose hand a `DI`/`DR` clause names, and the generator.
    fn hand(&mut self, side: Side) -> (&mut dyn Roster, &mut StdRng) {
        let roster: &mut dyn Roster = match (self.acting, side) {
            (Acting::Offense, Side::Acting) | (Acting::Defense, Side::Opposing) => {
                &mut *self.offense
            }
            (Acting::Defense, Side::Acting) | (Acting::Offense, Side::Opposing) => {
                &mut *self.defense
            }
        };
        (roster, &mut *self.rng)
    }
}

/// Whether a precondition holds for the current log.
pub fn matches(precondition: &Precondition, log: &EventLog) -> bool {
    if precondition
        .qualifier()
        .is_some_and(|qualifier| log.second_to_last() != Some(qualifier))
    {
        return false;
    }
    let last = log.last();
    precondition.alternatives().iter().any(|trigger| match trigger {
        Trigger::Any => true,
        Trigger::AnyOut => last
            .and_then(Token::outcome)
            .is_some_and(|outcome| outcome.is_out()),
        Trigger::Token(token) => last == Some(*token),
    })
}

/// Run a postcondition. Returns false if a filter stopped it.
///
/// Clauses that ran before the failing one keep their effects.
pub fn apply(postcondition: &Postcondition, ctx: &mut CardContext<'_>) -> bool {
    for clause in postcondition.clauses() {
        if !apply_clause(clause, ctx) {
            warn!(
                postcondition = postcondition.as_str(),
                clause = ?clause,
                "card stopped by a failed clause"
            );
            return false;
        }
    }
    true
}

fn apply_clause(clause: &Clause, ctx: &mut CardContext<'_>) -> bool {
    match clause {
        Clause::Swing(v) => {
            let v = ctx.value(*v);
            ctx.modifiers.swing = ctx.modifiers.swing.saturating_add(v);
        }
        Clause::Pitch(v) => {
            let v = ctx.value(*v);
            ctx.modifiers.pitch = ctx.modifiers.pitch.saturating_add(v);
        }
        Clause::Field(v) => {
            let v = ctx.value(*v);
            ctx.modifiers.field = ctx.modifiers.field.saturating_add(v);
        }
        Clause::Pitcher(filter) => {
            let pitcher = ctx.defense.current_pitcher();
            return match filter {
                PitcherFilter::Tired => true,
                PitcherFilter::Closer => pitcher.role == PitcherRole::Closer,
                PitcherFilter::Throws(hand) => pitcher.throws == *hand,
            };
        }
        Clause::Batter(filter) => {
            let bats = ctx.offense.current_batter().bats;
            return match filter {
                BatterFilter::BatsRight => matches!(bats, BattingSide::Right | BattingSide::Switch),
                BatterFilter::NotSwitch => bats != BattingSide::Switch,
                BatterFilter::NotLeft => bats != BattingSide::Left,
            };
        }
        Clause::Discard { side, count } => {
            let count = ctx.value(*count);
            let (roster, _) = ctx.hand(*side);
            for _ in 0..count {
                roster.discard_card();
            }
        }
        Clause::Draw { side, count } => {
            let count = ctx.value(*count);
            let (roster, rng) = ctx.hand(*side);
            for _ in 0..count {
                roster.draw_card(rng);
            }
        }
        Clause::Force(outcome) => ctx.log.emit(*outcome),
        Clause::RerollSwing => ctx.log.emit(Token::RerollSwing),
        Clause::RerollDoublePlay => ctx.log.emit(Token::RerollDoublePlay),
        Clause::AnyOf(options) => return options.iter().any(|c| apply_clause(c, ctx)),
    }
    debug!(clause = ?clause, "clause applied");
    true
}
