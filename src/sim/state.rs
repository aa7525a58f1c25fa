//! Game state and core simulation types
//!
//! [`GameState`] is owned and mutated only by [`super::GameLogic`]; everyone
//! else gets a shared reference.

use std::time::{Duration, Instant};

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::ball::{Ball, Score};
use super::player::Player;
use super::spindle::Spindle;
use super::table::{Side, Table};
use super::team::Team;

/// Current phase of the match
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    Playing,
    /// Terminal; a side reached the win threshold
    GameOver,
}

/// RNG stream ids, one per consumer of randomness
pub const BALL_STREAM: u64 = 1;
pub const COMPUTER_AI_STREAM: u64 = 2;
pub const HUMAN_AI_STREAM: u64 = 3;

/// Seed plus stream id for one independent generator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RngState {
    pub seed: u64,
    pub stream: u64,
}

impl RngState {
    pub fn new(seed: u64, stream: u64) -> Self {
        Self { seed, stream }
    }

    pub fn to_rng(&self) -> Pcg32 {
        let mut seed = Pcg32::seed_from_u64(self.seed);
        Pcg32::new(rand::Rng::random(&mut seed), self.stream)
    }
}

/// Final result of a finished match
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchSummary {
    pub winner: Score,
    pub human_score: u32,
    pub computer_score: u32,
    /// Wall-clock duration; depends on how fast the driver ran the ticks
    pub seconds: f64,
    pub ticks: u64,
}

impl MatchSummary {
    /// Match length in game time, at `tick_interval_ms` per tick
    pub fn simulated_seconds(&self, tick_interval_ms: u64) -> f64 {
        Duration::from_millis(self.ticks * tick_interval_ms).as_secs_f64()
    }
}

/// Complete match state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub(crate) seed: u64,
    pub(crate) table: Table,
    pub(crate) ball: Ball,
    pub(crate) human: Team,
    pub(crate) computer: Team,
    pub(crate) human_score: u32,
    pub(crate) computer_score: u32,
    pub(crate) score_to_win: u32,
    /// Simulation tick counter
    pub(crate) time_ticks: u64,
    started: Instant,
    finished_after: Option<Duration>,
}

impl GameState {
    /// Set up a match on a `width` x `height` playing surface
    pub fn new(width: i32, height: i32, score_to_win: u32, seed: u64) -> Self {
        let table = Table::new(width, height);
        let (cx, cy) = table.center();
        let ball = Ball::new(cx, cy, RngState::new(seed, BALL_STREAM).to_rng());
        let human = Team::for_table(&table, true);
        let computer = Team::for_table(&table, false);

        Self {
            seed,
            table,
            ball,
            human,
            computer,
            human_score: 0,
            computer_score: 0,
            score_to_win,
            time_ticks: 0,
            started: Instant::now(),
            finished_after: None,
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn table(&self) -> &Table {
        &self.table
    }

    pub fn ball(&self) -> &Ball {
        &self.ball
    }

    pub fn human_team(&self) -> &Team {
        &self.human
    }

    pub fn computer_team(&self) -> &Team {
        &self.computer
    }

    pub fn human_score(&self) -> u32 {
        self.human_score
    }

    pub fn computer_score(&self) -> u32 {
        self.computer_score
    }

    pub fn score_to_win(&self) -> u32 {
        self.score_to_win
    }

    pub fn time_ticks(&self) -> u64 {
        self.time_ticks
    }

    /// Every spindle, human team first
    pub fn spindles(&self) -> impl Iterator<Item = &Spindle> {
        self.human.spindles().iter().chain(self.computer.spindles())
    }

    /// Every player, human team first
    pub fn players(&self) -> impl Iterator<Item = &Player> {
        self.human.players().chain(self.computer.players())
    }

    pub fn phase(&self) -> GamePhase {
        if self.human_score.max(self.computer_score) >= self.score_to_win {
            GamePhase::GameOver
        } else {
            GamePhase::Playing
        }
    }

    pub fn is_game_over(&self) -> bool {
        self.phase() == GamePhase::GameOver
    }

    /// The side ahead once the match is over, `Score::Nobody` before that
    pub fn winner(&self) -> Score {
        if !self.is_game_over() {
            Score::Nobody
        } else if self.human_score > self.computer_score {
            Score::Human
        } else {
            Score::Computer
        }
    }

    /// Wall-clock time since the match started, frozen at game over
    pub fn elapsed_time(&self) -> Duration {
        self.finished_after
            .unwrap_or_else(|| self.started.elapsed())
    }

    pub fn elapsed_seconds(&self) -> f64 {
        self.elapsed_time().as_secs_f64()
    }

    /// Count a goal and light the goal it went into
    pub(crate) fn record_score(&mut self, score: Score) {
        let side = match score {
            Score::Nobody => return,
            Score::Human => {
                self.human_score += 1;
                Side::Left
            }
            Score::Computer => {
                self.computer_score += 1;
                Side::Right
            }
        };
        self.table.goal_mut(side).light_up(true);

        if self.is_game_over() && self.finished_after.is_none() {
            self.finished_after = Some(self.started.elapsed());
        }
    }

    pub fn summary(&self) -> Option<MatchSummary> {
        self.is_game_over().then(|| MatchSummary {
            winner: self.winner(),
            human_score: self.human_score,
            computer_score: self.computer_score,
            seconds: self.elapsed_seconds(),
            ticks: self.time_ticks,
        })
    }
}
