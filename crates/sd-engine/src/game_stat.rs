//! Outs, innings and the scoreboard.

use serde::{Deserialize, Serialize};
use tracing::info;

/// Outs that end a half-inning.
pub const OUTS_PER_HALF: u32 = 3;

/// Which half of an inning is being played.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Half {
    /// The away team bats.
    Top,
    /// The home team bats.
    Bottom,
}

impl std::fmt::Display for Half {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Top => write!(f, "Top"),
            Self::Bottom => write!(f, "Bottom"),
        }
    }
}

/// The two teams.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TeamSide {
    /// Bats in the top half.
    Away,
    /// Bats in the bottom half.
    Home,
}

/// Runs, hits and the per-inning line for one team.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamLine {
    /// Total runs.
    pub runs: u32,
    /// Total hits.
    pub hits: u32,
    /// Runs scored in each inning this team has batted in.
    pub innings: Vec<u32>,
}

/// Game state outside the basepaths: outs, inning, half and both lines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameStat {
    outs: u32,
    inning: u32,
    half: Half,
    away: TeamLine,
    home: TeamLine,
    #[serde(skip)]
    half_ended: bool,
}

impl Default for GameStat {
    fn default() -> Self {
        Self::new()
    }
}

impl GameStat {
    /// Top of the first, nobody out. The away line starts with its first inning.
    pub fn new() -> Self {
        Self {
            outs: 0,
            inning: 1,
            half: Half::Top,
            away: TeamLine {
                innings: vec![0],
                ..TeamLine::default()
            },
            home: TeamLine::default(),
            half_ended: false,
        }
    }

    /// Outs in the current half.
    pub fn outs(&self) -> u32 {
        self.outs
    }

    /// Current inning, starting at 1.
    pub fn inning(&self) -> u32 {
        self.inning
    }

    /// Current half.
    pub fn half(&self) -> Half {
        self.half
    }

    /// The team at bat.
    pub fn batting(&self) -> TeamSide {
        match self.half {
            Half::Top => TeamSide::Away,
            Half::Bottom => TeamSide::Home,
        }
    }

    /// One team's line.
    pub fn line(&self, side: TeamSide) -> &TeamLine {
        match side {
            TeamSide::Away => &self.away,
            TeamSide::Home => &self.home,
        }
    }

    fn batting_line(&mut self) -> &mut TeamLine {
        match self.half {
            Half::Top => &mut self.away,
            Half::Bottom => &mut self.home,
        }
    }

    /// Record an out. Saturates at three.
    pub fn record_out(&mut self) {
        if self.outs < OUTS_PER_HALF {
            self.outs += 1;
        }
    }

    /// Record a hit for the batting team.
    pub fn record_hit(&mut self) {
        self.batting_line().hits += 1;
    }

    /// Record a run for the batting team in the current inning.
    pub fn record_run(&mut self) {
        let line = self.batting_line();
        line.runs += 1;
        match line.innings.last_mut() {
            Some(current) => *current += 1,
            None => line.innings.push(1),
        }
    }

    /// Turn the half-inning over if three are out. Otherwise nothing changes.
    pub fn advance_half_inning(&mut self) {
        if self.outs < OUTS_PER_HALF {
            return;
        }
        match self.half {
            Half::Top => {
                self.half = Half::Bottom;
                self.home.innings.push(0);
            }
            Half::Bottom => {
                self.half = Half::Top;
                self.inning += 1;
                self.away.innings.push(0);
            }
        }
        self.outs = 0;
        self.half_ended = true;
        info!(
            inning = self.inning,
            half = %self.half,
            away = self.away.runs,
            home = self.home.runs,
            "half inning over"
        );
    }

    /// Whether the half just ended. Reading the flag clears it.
    pub fn take_half_ended(&mut self) -> bool {
        std::mem::take(&mut self.half_ended)
    }

    /// Whether the game is decided after `scheduled` innings.
    ///
    /// The home team wins as soon as it leads in the bottom of the last
    /// scheduled inning or any extra inning. Otherwise the game ends when the
    /// top of an inning past the schedule comes up with the score not tied.
    pub fn is_final(&self, scheduled: u32) -> bool {
        let (away, home) = (self.away.runs, self.home.runs);
        match self.half {
            Half::Bottom => self.inning >= scheduled && home > away,
            Half::Top => self.inning > scheduled && home != away,
        }
    }

    /// The leading team, if any.
    pub fn leader(&self) -> Option<TeamSide> {
        match self.away.runs.cmp(&self.home.runs) {
            std::cmp::Ordering::Greater => Some(TeamSide::Away),
            std::cmp::Ordering::Less => Some(TeamSide::Home),
            std::cmp::Ordering::Equal => None,
        }
    }
}
