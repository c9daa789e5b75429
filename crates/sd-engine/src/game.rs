//! The turn controller.
//!
//! A [`Game`] owns everything one game needs: both rosters, the event log,
//! the bases, the scoreboard, the dice and the per-at-bat modifiers. Callers
//! drive it with [`Game::step`]. Each state handler returns a [`Transition`]
//! saying where to go next and whether to keep going in the same call or to
//! hand control back.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use sd_core::{Chart, Outcome, Position, Roster, Token};

use crate::config::GameConfig;
use crate::dice::Dice;
use crate::error::{EngineError, EngineResult};
use crate::event_log::EventLog;
use crate::field::{Field, Runner};
use crate::game_stat::{GameStat, Half, TeamSide};
use crate::strategy::{self, Acting, CardContext, Modifiers};

/// Where the controller is within an at-bat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnState {
    /// Waiting to pitch.
    BeforePitch,
    /// A swing has been logged.
    AfterSwing,
    /// A reroll of the swing was called for.
    BeforeReroll,
    /// The rerolled swing has been logged.
    AfterReroll,
    /// The logged outcome is about to be applied.
    ProcessResult,
    /// A double play is on; the lead-runner check has not been rolled.
    BeforeDoublePlay,
    /// The lead-runner check is rolled but not applied.
    AfterDoublePlay,
    /// The batter is done.
    BatterResolved,
}

/// Whether a transition keeps running or hands control back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Run the next handler in the same call.
    Continue,
    /// Return to the caller.
    Yield,
}

/// The result of one state handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    /// The state to move to.
    pub next: TurnState,
    /// Whether to keep going.
    pub flow: Flow,
}

impl Transition {
    fn chain(next: TurnState) -> Self {
        Self {
            next,
            flow: Flow::Continue,
        }
    }

    fn yield_to(next: TurnState) -> Self {
        Self {
            next,
            flow: Flow::Yield,
        }
    }
}

/// Whose chart the last swing was read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Advantage {
    /// The hitter's chart.
    Hitter,
    /// The pitcher's chart.
    Pitcher,
}

impl Advantage {
    fn token(self) -> Token {
        match self {
            Self::Hitter => Token::HitterChart,
            Self::Pitcher => Token::PitcherChart,
        }
    }
}

/// A game between two rosters.
pub struct Game<R: Roster> {
    config: GameConfig,
    home: R,
    away: R,
    log: EventLog,
    field: Field,
    stat: GameStat,
    state: TurnState,
    modifiers: Modifiers,
    advantage: Advantage,
    lead_runner_out: Option<bool>,
    dice: Dice,
}

impl<R: Roster> Game<R> {
    /// Set up a game. Both sides draw their opening hands and `BP` is logged.
    pub fn new(home: R, away: R, config: GameConfig) -> Self {
        let mut dice = Dice::new(config.seed);
        dice.load(config.loaded_dice.iter().copied());
        let mut game = Self {
            home,
            away,
            log: EventLog::new(),
            field: Field::new(),
            stat: GameStat::new(),
            state: TurnState::BeforePitch,
            modifiers: Modifiers::default(),
            advantage: Advantage::Hitter,
            lead_runner_out: None,
            dice,
            config,
        };
        for _ in 0..game.config.opening_hand {
            game.away.draw_card(game.dice.rng_mut());
            game.home.draw_card(game.dice.rng_mut());
        }
        game.log.emit(Token::BeforePitch);
        info!(
            seed = game.config.seed,
            innings = game.config.innings,
            "game started"
        );
        game
    }

    /// The event log.
    pub fn log(&self) -> &EventLog {
        &self.log
    }

    /// The bases.
    pub fn field(&self) -> &Field {
        &self.field
    }

    /// Outs, inning and score.
    pub fn stat(&self) -> &GameStat {
        &self.stat
    }

    /// The controller state the next step starts from.
    pub fn state(&self) -> TurnState {
        self.state
    }

    /// Modifiers in effect for the current at-bat.
    pub fn modifiers(&self) -> Modifiers {
        self.modifiers
    }

    /// Chart used by the most recent swing.
    pub fn advantage(&self) -> Advantage {
        self.advantage
    }

    /// The configuration this game was built with.
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// The home roster.
    pub fn home(&self) -> &R {
        &self.home
    }

    /// The away roster.
    pub fn away(&self) -> &R {
        &self.away
    }

    /// The team at bat.
    pub fn offense(&self) -> &R {
        match self.stat.half() {
            Half::Top => &self.away,
            Half::Bottom => &self.home,
        }
    }

    /// The team in the field.
    pub fn defense(&self) -> &R {
        match self.stat.half() {
            Half::Top => &self.home,
            Half::Bottom => &self.away,
        }
    }

    /// The team at bat, for queueing cards.
    pub fn offense_mut(&mut self) -> &mut R {
        match self.stat.half() {
            Half::Top => &mut self.away,
            Half::Bottom => &mut self.home,
        }
    }

    /// The team in the field, for queueing cards.
    pub fn defense_mut(&mut self) -> &mut R {
        match self.stat.half() {
            Half::Top => &mut self.home,
            Half::Bottom => &mut self.away,
        }
    }

    /// Force the next die results.
    pub fn load_dice(&mut self, values: impl IntoIterator<Item = i32>) {
        self.dice.load(values);
    }

    /// Whether the game is decided.
    pub fn is_final(&self) -> bool {
        self.stat.is_final(self.config.innings)
    }

    /// Advance the controller to its next yield point.
    ///
    /// Queued cards are played first, offense then defense, and both hands
    /// are committed. Returns the state the next call will start from.
    pub fn step(&mut self) -> EngineResult<TurnState> {
        if self.is_final() {
            return Err(EngineError::GameOver);
        }
        self.play_cards();
        loop {
            let from = self.state;
            let transition = self.handle(from)?;
            debug!(from = ?from, to = ?transition.next, flow = ?transition.flow, "transition");
            self.state = transition.next;
            if transition.flow == Flow::Yield {
                return Ok(self.state);
            }
        }
    }

    /// Step until the current batter is resolved. Returns the number of
    /// calls it took.
    pub fn play_batter(&mut self) -> EngineResult<usize> {
        let mut calls = 0;
        loop {
            calls += 1;
            if self.step()? == TurnState::BeforePitch {
                return Ok(calls);
            }
        }
    }

    fn play_cards(&mut self) {
        let runners = self.field.occupied();
        let (offense, defense) = match self.stat.half() {
            Half::Top => (&mut self.away, &mut self.home),
            Half::Bottom => (&mut self.home, &mut self.away),
        };
        for acting in [Acting::Offense, Acting::Defense] {
            let cards = match acting {
                Acting::Offense => offense.queued_uses(),
                Acting::Defense => defense.queued_uses(),
            };
            for card in cards {
                if !strategy::matches(&card.precondition, &self.log) {
                    debug!(card = %card.name, log = %self.log, "card not playable now");
                    continue;
                }
                debug!(card = %card.name, side = ?acting, "playing card");
                let mut ctx = CardContext {
                    log: &mut self.log,
                    modifiers: &mut self.modifiers,
                    offense: &mut *offense,
                    defense: &mut *defense,
                    acting,
                    runners,
                    rng: self.dice.rng_mut(),
                };
                strategy::apply(&card.postcondition, &mut ctx);
            }
        }
        offense.commit_queued();
        defense.commit_queued();
    }

    fn handle(&mut self, state: TurnState) -> EngineResult<Transition> {
        match state {
            TurnState::BeforePitch => self.before_pitch(),
            TurnState::AfterSwing => Ok(self.after_swing(TurnState::AfterSwing)),
            TurnState::BeforeReroll => self.before_reroll(),
            TurnState::AfterReroll => Ok(self.after_swing(TurnState::AfterReroll)),
            TurnState::ProcessResult => self.process_result(),
            TurnState::BeforeDoublePlay => Ok(self.before_double_play()),
            TurnState::AfterDoublePlay => self.after_double_play(),
            TurnState::BatterResolved => Ok(self.batter_resolved()),
        }
    }

    fn before_pitch(&mut self) -> EngineResult<Transition> {
        if self.log.last().and_then(Token::outcome).is_some() {
            debug!(log = %self.log, "outcome forced before the pitch");
            return Ok(Transition::yield_to(TurnState::AfterSwing));
        }

        let pitch_roll = self.dice.roll();
        let swing_roll = self.dice.roll();
        let inning = self.stat.inning();
        let pitcher = self.defense().current_pitcher();
        let batter = self.offense().current_batter();
        let pitch = pitcher
            .control
            .saturating_add(pitch_roll)
            .saturating_add(pitcher.fatigue(inning))
            .saturating_add(self.modifiers.pitch);
        let advantage = if pitch >= batter.on_base {
            Advantage::Pitcher
        } else {
            Advantage::Hitter
        };
        debug!(
            pitcher = %pitcher.name,
            batter = %batter.name,
            pitch,
            on_base = batter.on_base,
            advantage = ?advantage,
            "pitch"
        );
        self.advantage = advantage;
        self.swing(swing_roll)?;
        Ok(Transition::yield_to(TurnState::AfterSwing))
    }

    fn swing(&mut self, roll: i32) -> EngineResult<Outcome> {
        let total = roll.saturating_add(self.modifiers.swing);
        let (owner, chart): (&str, &Chart) = match self.advantage {
            Advantage::Pitcher => {
                let p = self.defense().current_pitcher();
                (&p.name, &p.chart)
            }
            Advantage::Hitter => {
                let h = self.offense().current_batter();
                (&h.name, &h.chart)
            }
        };
        let outcome = chart.resolve(total).ok_or_else(|| EngineError::BlankChart {
            player: owner.to_string(),
        })?;
        debug!(roll, total, outcome = %outcome, "swing");
        self.log.emit(self.advantage.token());
        self.log.emit(outcome);
        self.modifiers.swing = 0;
        Ok(outcome)
    }

    fn after_swing(&mut self, state: TurnState) -> Transition {
        if self.log.last() == Some(Token::RerollSwing) {
            debug!(from = ?state, "swing will be rerolled");
            Transition::yield_to(TurnState::BeforeReroll)
        } else {
            Transition::chain(TurnState::ProcessResult)
        }
    }

    fn before_reroll(&mut self) -> EngineResult<Transition> {
        let roll = self.dice.roll();
        self.swing(roll)?;
        Ok(Transition::yield_to(TurnState::AfterReroll))
    }

    fn process_result(&mut self) -> EngineResult<Transition> {
        let tail = self.log.tokens().iter().rev().copied().find(|t| !t.is_reroll());
        match tail {
            Some(Token::BeforeDoublePlay) => {
                return Ok(Transition::yield_to(TurnState::BeforeDoublePlay));
            }
            Some(Token::AfterDoublePlay) => {
                return Ok(Transition::yield_to(TurnState::AfterDoublePlay));
            }
            Some(Token::DoublePlayComplete) => {
                return Ok(Transition::chain(TurnState::BatterResolved));
            }
            _ => {}
        }

        let Some(outcome) = tail.and_then(Token::outcome) else {
            return Err(EngineError::NotDispatchable {
                token: tail.map_or_else(|| "<empty>".to_string(), |t| t.to_string()),
                log: self.log.to_string(),
            });
        };
        let batter = Runner(self.offense().batting_slot());
        self.field
            .resolve(outcome, batter, &mut self.stat, &mut self.log);

        if self.log.last() == Some(Token::BeforeDoublePlay) {
            Ok(Transition::yield_to(TurnState::BeforeDoublePlay))
        } else {
            Ok(Transition::chain(TurnState::BatterResolved))
        }
    }

    fn before_double_play(&mut self) -> Transition {
        let roll = self.dice.roll();
        let defense = self.defense();
        let infield: i32 = Position::INFIELD.iter().map(|&p| defense.fielding(p)).sum();
        let speed = self.offense().current_batter().speed.0;
        let total = roll
            .saturating_add(self.modifiers.field)
            .saturating_add(infield);
        let out = total > speed;
        debug!(roll, infield, total, speed, out, "lead runner check");
        self.lead_runner_out = Some(out);
        self.log.emit(Token::AfterDoublePlay);
        Transition::chain(TurnState::ProcessResult)
    }

    fn after_double_play(&mut self) -> EngineResult<Transition> {
        if self.log.last() == Some(Token::RerollDoublePlay) {
            debug!("lead runner check will be rerolled");
            return Ok(Transition::chain(TurnState::BeforeDoublePlay));
        }
        let out = self
            .lead_runner_out
            .take()
            .ok_or_else(|| EngineError::NotDispatchable {
                token: Token::AfterDoublePlay.to_string(),
                log: self.log.to_string(),
            })?;
        let batter = Runner(self.offense().batting_slot());
        self.field
            .double_play(batter, out, &mut self.stat, &mut self.log);
        Ok(Transition::chain(TurnState::ProcessResult))
    }

    fn batter_resolved(&mut self) -> Transition {
        self.offense_mut().next_batter();
        self.stat.advance_half_inning();
        self.modifiers.reset();
        self.lead_runner_out = None;
        if self.stat.take_half_ended() {
            self.log.emit(Token::InningOver);
            self.field.clear();
            self.away.draw_card(self.dice.rng_mut());
            self.home.draw_card(self.dice.rng_mut());
        }
        self.log.emit(Token::BeforePitch);
        if self.is_final() {
            info!(
                away = self.stat.line(TeamSide::Away).runs,
                home = self.stat.line(TeamSide::Home).runs,
                innings = self.stat.inning(),
                "game over"
            );
        }
        Transition::yield_to(TurnState::BeforePitch)
    }
}
