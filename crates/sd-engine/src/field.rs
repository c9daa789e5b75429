//! The basepaths: who is on which base, and what each result does to them.
//!
//! Advancement is forced only. A runner moves exactly as far as the result
//! pushes him and never takes an extra base on his own.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use sd_core::{Outcome, Token};

use crate::event_log::EventLog;
use crate::game_stat::{GameStat, OUTS_PER_HALF};

/// A runner, identified by the batting-order slot he hit from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Runner(pub usize);

/// One of the three bases.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Base {
    /// First base.
    First,
    /// Second base.
    Second,
    /// Third base.
    Third,
}

impl Base {
    fn index(self) -> usize {
        match self {
            Self::First => 0,
            Self::Second => 1,
            Self::Third => 2,
        }
    }
}

/// First, second and third. Each base holds at most one runner.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field {
    bases: [Option<Runner>; 3],
}

impl Field {
    /// Empty bases.
    pub fn new() -> Self {
        Self::default()
    }

    /// Who is on `base`.
    pub fn runner(&self, base: Base) -> Option<Runner> {
        self.bases[base.index()]
    }

    /// Put a runner on a base, replacing whoever was there.
    pub fn place(&mut self, base: Base, runner: Runner) {
        self.bases[base.index()] = Some(runner);
    }

    /// Number of occupied bases.
    pub fn occupied(&self) -> usize {
        self.bases.iter().filter(|b| b.is_some()).count()
    }

    /// Empty all bases.
    pub fn clear(&mut self) {
        self.bases = [None; 3];
    }

    fn take(&mut self, base: Base) -> Option<Runner> {
        self.bases[base.index()].take()
    }

    fn score(&mut self, base: Base, stat: &mut GameStat) {
        if let Some(runner) = self.take(base) {
            debug!(runner = runner.0, "run scores");
            stat.record_run();
        }
    }

    /// Apply a batted ball or walk. Groundouts may leave a `BDP` signal in
    /// the log and stop short of moving anybody.
    pub fn resolve(
        &mut self,
        outcome: Outcome,
        batter: Runner,
        stat: &mut GameStat,
        log: &mut EventLog,
    ) {
        debug!(outcome = %outcome, batter = batter.0, "resolving on the bases");
        match outcome {
            Outcome::Single => self.single(batter, stat),
            Outcome::SinglePlus => self.single_plus(batter, stat),
            Outcome::Double => self.double(batter, stat),
            Outcome::Triple => self.triple(batter, stat),
            Outcome::HomeRun => self.homer(stat),
            Outcome::Walk => self.walk(batter, stat),
            Outcome::Strikeout => self.strikeout(stat),
            Outcome::Flyout => self.flyout(stat),
            Outcome::Popout => self.popout(stat),
            Outcome::Groundout => self.groundout(stat, log),
        }
    }

    /// Third scores, second to third, first to second, batter to first.
    pub fn single(&mut self, batter: Runner, stat: &mut GameStat) {
        stat.record_hit();
        self.score(Base::Third, stat);
        self.bases[2] = self.take(Base::Second);
        self.bases[1] = self.take(Base::First);
        self.place(Base::First, batter);
    }

    /// A single, then whoever stands on first takes second if it is open.
    pub fn single_plus(&mut self, batter: Runner, stat: &mut GameStat) {
        self.single(batter, stat);
        if self.bases[1].is_none() {
            self.bases[1] = self.take(Base::First);
        }
    }

    /// Second and third score, first to third, batter to second.
    pub fn double(&mut self, batter: Runner, stat: &mut GameStat) {
        stat.record_hit();
        self.score(Base::Third, stat);
        self.score(Base::Second, stat);
        self.bases[2] = self.take(Base::First);
        self.place(Base::Second, batter);
    }

    /// Everybody scores, batter to third.
    pub fn triple(&mut self, batter: Runner, stat: &mut GameStat) {
        stat.record_hit();
        self.score(Base::Third, stat);
        self.score(Base::Second, stat);
        self.score(Base::First, stat);
        self.place(Base::Third, batter);
    }

    /// Everybody scores, batter included.
    pub fn homer(&mut self, stat: &mut GameStat) {
        stat.record_hit();
        stat.record_run();
        self.score(Base::Third, stat);
        self.score(Base::Second, stat);
        self.score(Base::First, stat);
    }

    /// Batter to first, pushing only the runners who are forced.
    pub fn walk(&mut self, batter: Runner, stat: &mut GameStat) {
        if self.bases[0].is_some() {
            if self.bases[1].is_some() {
                if self.bases[2].is_some() {
                    self.score(Base::Third, stat);
                }
                self.bases[2] = self.take(Base::Second);
            }
            self.bases[1] = self.take(Base::First);
        }
        self.place(Base::First, batter);
    }

    /// One out, nobody moves.
    pub fn strikeout(&mut self, stat: &mut GameStat) {
        stat.record_out();
    }

    /// One out, nobody moves.
    pub fn flyout(&mut self, stat: &mut GameStat) {
        stat.record_out();
    }

    /// One out, nobody moves.
    pub fn popout(&mut self, stat: &mut GameStat) {
        stat.record_out();
    }

    /// One out. With a runner on first and fewer than three out, emit `BDP`
    /// and leave the bases for [`Field::double_play`].
    pub fn groundout(&mut self, stat: &mut GameStat, log: &mut EventLog) {
        stat.record_out();
        if stat.outs() >= OUTS_PER_HALF {
            return;
        }
        if self.bases[0].is_some() {
            log.emit(Token::BeforeDoublePlay);
            return;
        }
        self.finish_groundout(stat);
    }

    /// Finish a groundout that had a runner on first.
    ///
    /// `lead_runner_out` is the result of the lead-runner check. When it
    /// fails the batter takes first and the runner who was there is dropped
    /// without an out or an advance.
    pub fn double_play(
        &mut self,
        batter: Runner,
        lead_runner_out: bool,
        stat: &mut GameStat,
        log: &mut EventLog,
    ) {
        log.emit(Token::DoublePlayComplete);
        if lead_runner_out {
            stat.record_out();
            if stat.outs() >= OUTS_PER_HALF {
                debug!("double play ends the half");
                return;
            }
            self.bases[0] = None;
            debug!("double play turned");
        } else {
            if let Some(dropped) = self.runner(Base::First) {
                warn!(
                    dropped = dropped.0,
                    batter = batter.0,
                    "double play failed; runner on first replaced by batter"
                );
            }
            self.place(Base::First, batter);
        }
        self.finish_groundout(stat);
    }

    fn finish_groundout(&mut self, stat: &mut GameStat) {
        self.score(Base::Third, stat);
        self.bases[2] = self.take(Base::Second);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_stat::TeamSide;
    use proptest::prelude::*;

    fn loaded() -> Field {
        let mut field = Field::new();
        field.place(Base::First, Runner(1));
        field.place(Base::Second, Runner(2));
        field.place(Base::Third, Runner(3));
        field
    }

    fn runs(stat: &GameStat) -> u32 {
        stat.line(TeamSide::Away).runs
    }

    fn hits(stat: &GameStat) -> u32 {
        stat.line(TeamSide::Away).hits
    }

    #[test]
    fn single_on_empty_bases() {
        let mut field = Field::new();
        let mut stat = GameStat::new();
        field.single(Runner(0), &mut stat);
        assert_eq!(field.runner(Base::First), Some(Runner(0)));
        assert_eq!(field.occupied(), 1);
        assert_eq!(runs(&stat), 0);
        assert_eq!(hits(&stat), 1);
    }

    #[test]
    fn single_moves_everyone_one_base() {
        let mut field = loaded();
        let mut stat = GameStat::new();
        field.single(Runner(4), &mut stat);
        assert_eq!(field.runner(Base::First), Some(Runner(4)));
        assert_eq!(field.runner(Base::Second), Some(Runner(1)));
        assert_eq!(field.runner(Base::Third), Some(Runner(2)));
        assert_eq!(runs(&stat), 1);
    }

    #[test]
    fn single_plus_takes_open_second() {
        let mut field = Field::new();
        let mut stat = GameStat::new();
        field.single_plus(Runner(0), &mut stat);
        assert_eq!(field.runner(Base::First), None);
        assert_eq!(field.runner(Base::Second), Some(Runner(0)));
        assert_eq!(hits(&stat), 1);

        let mut field = Field::new();
        field.place(Base::First, Runner(5));
        field.single_plus(Runner(6), &mut stat);
        assert_eq!(field.runner(Base::First), Some(Runner(6)));
        assert_eq!(field.runner(Base::Second), Some(Runner(5)));
    }

    #[test]
    fn double_scores_second_and_third() {
        let mut field = loaded();
        let mut stat = GameStat::new();
        field.double(Runner(4), &mut stat);
        assert_eq!(runs(&stat), 2);
        assert_eq!(field.runner(Base::Third), Some(Runner(1)));
        assert_eq!(field.runner(Base::Second), Some(Runner(4)));
        assert_eq!(field.runner(Base::First), None);
    }

    #[test]
    fn triple_clears_bases() {
        let mut field = loaded();
        let mut stat = GameStat::new();
        field.triple(Runner(4), &mut stat);
        assert_eq!(runs(&stat), 3);
        assert_eq!(field.occupied(), 1);
        assert_eq!(field.runner(Base::Third), Some(Runner(4)));
    }

    #[test]
    fn grand_slam() {
        let mut field = loaded();
        let mut stat = GameStat::new();
        field.homer(&mut stat);
        assert_eq!(runs(&stat), 4);
        assert_eq!(field.occupied(), 0);
        assert_eq!(hits(&stat), 1);
    }

    #[test]
    fn walk_forces_only() {
        let mut field = Field::new();
        let mut stat = GameStat::new();
        field.place(Base::Second, Runner(2));
        field.walk(Runner(0), &mut stat);
        assert_eq!(field.runner(Base::First), Some(Runner(0)));
        assert_eq!(field.runner(Base::Second), Some(Runner(2)));
        assert_eq!(field.runner(Base::Third), None);

        let mut field = loaded();
        field.walk(Runner(4), &mut stat);
        assert_eq!(runs(&stat), 1);
        assert_eq!(field.occupied(), 3);
        assert_eq!(hits(&stat), 0);
    }

    #[test]
    fn groundout_with_empty_first_moves_runners() {
        let mut field = Field::new();
        field.place(Base::Second, Runner(2));
        field.place(Base::Third, Runner(3));
        let mut stat = GameStat::new();
        let mut log = EventLog::new();
        field.groundout(&mut stat, &mut log);
        assert_eq!(stat.outs(), 1);
        assert_eq!(runs(&stat), 1);
        assert_eq!(field.runner(Base::Third), Some(Runner(2)));
        assert!(log.is_empty());
    }

    #[test]
    fn groundout_with_runner_on_first_signals() {
        let mut field = Field::new();
        field.place(Base::First, Runner(1));
        let mut stat = GameStat::new();
        let mut log = EventLog::new();
        field.groundout(&mut stat, &mut log);
        assert_eq!(log.last(), Some(Token::BeforeDoublePlay));
        assert_eq!(field.runner(Base::First), Some(Runner(1)));
    }

    #[test]
    fn third_out_on_groundout_stops() {
        let mut field = loaded();
        let mut stat = GameStat::new();
        stat.record_out();
        stat.record_out();
        let mut log = EventLog::new();
        field.groundout(&mut stat, &mut log);
        assert_eq!(stat.outs(), 3);
        assert_eq!(runs(&stat), 0);
        assert!(log.is_empty());
    }

    #[test]
    fn double_play_turned() {
        let mut field = Field::new();
        field.place(Base::First, Runner(1));
        let mut stat = GameStat::new();
        let mut log = EventLog::new();
        field.groundout(&mut stat, &mut log);
        field.double_play(Runner(2), true, &mut stat, &mut log);
        assert_eq!(stat.outs(), 2);
        assert_eq!(field.runner(Base::First), None);
        assert_eq!(log.last(), Some(Token::DoublePlayComplete));
    }

    #[test]
    fn double_play_missed_drops_lead_runner() {
        let mut field = Field::new();
        field.place(Base::First, Runner(1));
        field.place(Base::Third, Runner(3));
        let mut stat = GameStat::new();
        let mut log = EventLog::new();
        field.groundout(&mut stat, &mut log);
        field.double_play(Runner(2), false, &mut stat, &mut log);
        assert_eq!(stat.outs(), 1);
        assert_eq!(field.runner(Base::First), Some(Runner(2)));
        assert_eq!(field.occupied(), 1);
        assert_eq!(runs(&stat), 1);
    }

    #[test]
    fn double_play_for_third_out_leaves_bases() {
        let mut field = loaded();
        let mut stat = GameStat::new();
        stat.record_out();
        let mut log = EventLog::new();
        field.groundout(&mut stat, &mut log);
        field.double_play(Runner(4), true, &mut stat, &mut log);
        assert_eq!(stat.outs(), 3);
        assert_eq!(runs(&stat), 0);
    }

    fn outcome() -> impl Strategy<Value = Outcome> {
        proptest::sample::select(Outcome::ALL.to_vec())
    }

    proptest! {
        #[test]
        fn never_more_than_three_runners(
            results in proptest::collection::vec(outcome(), 1..30),
            dp in any::<bool>(),
        ) {
            let mut field = Field::new();
            let mut stat = GameStat::new();
            let mut log = EventLog::new();
            for (i, outcome) in results.into_iter().enumerate() {
                field.resolve(outcome, Runner(i % 9), &mut stat, &mut log);
                if log.last() == Some(Token::BeforeDoublePlay) {
                    field.double_play(Runner(i % 9), dp, &mut stat, &mut log);
                }
                prop_assert!(field.occupied() <= 3);
                if stat.outs() == 3 {
                    stat.advance_half_inning();
                    field.clear();
                }
            }
        }

        #[test]
        fn walk_scores_only_with_bases_loaded(
            first in any::<bool>(),
            second in any::<bool>(),
            third in any::<bool>(),
        ) {
            let mut field = Field::new();
            if first { field.place(Base::First, Runner(1)); }
            if second { field.place(Base::Second, Runner(2)); }
            if third { field.place(Base::Third, Runner(3)); }
            let mut stat = GameStat::new();
            field.walk(Runner(0), &mut stat);
            let expected = u32::from(first && second && third);
            prop_assert_eq!(runs(&stat), expected);
        }
    }
}
