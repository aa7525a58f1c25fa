//! Fussball - a table football simulation
//!
//! Core modules:
//! - `sim`: Tick-driven simulation (ball, players, spindles, scoring, AI)
//! - `settings`: Match configuration loaded from JSON
//! - `highscores`: Fastest-win leaderboard
//!
//! The simulation does no drawing and no I/O. A driver owns a
//! [`sim::GameLogic`], calls [`sim::GameLogic::tick`] at a fixed rate and
//! forwards player input through [`sim::InputCommand`].

pub mod error;
pub mod highscores;
pub mod settings;
pub mod sim;

pub use error::{Error, Result};
pub use highscores::HighScores;
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Nominal driver tick period in milliseconds (20 Hz)
    pub const TICK_INTERVAL_MS: u64 = 50;
    /// The computer moves every this many ticks
    pub const AI_PERIOD: u64 = 5;
    /// Player momentum decays every this many ticks
    pub const DECAY_PERIOD: u64 = 10;

    /// Default playing surface
    pub const DEFAULT_TABLE_WIDTH: i32 = 1000;
    pub const DEFAULT_TABLE_HEIGHT: i32 = 1000;
    /// Smallest playing surface the table layout still makes sense for
    pub const MIN_TABLE_SIZE: i32 = 200;

    /// Ball defaults
    pub const BALL_RADIUS: i32 = 10;
    /// Fraction of velocity kept after every tick
    pub const BALL_FRICTION: f64 = 0.9;
    /// Velocity added by a discrete accelerate call
    pub const BALL_IMPULSE: f64 = 50.0;
    /// Reset velocity components are drawn from [-BALL_RESET_SPEED, BALL_RESET_SPEED]
    pub const BALL_RESET_SPEED: f64 = 30.0;
    /// Ticks the ball stays off the table after a goal
    pub const BALL_REAPPEAR_DELAY: u32 = 10;

    /// Player figure dimensions
    pub const HEAD_RADIUS: i32 = 15;
    pub const LEG_LENGTH: i32 = 75;
    /// Foot contact tolerance around the foot point
    pub const FOOT_TOLERANCE: i32 = HEAD_RADIUS / 2;

    /// Momentum gained per quarter turn
    pub const MOMENTUM_CHANGE: f64 = 1.0;
    /// Momentum magnitude cap
    pub const MAX_MOMENTUM: f64 = 4.0;
    /// Momentum left after reversing spin direction
    pub const REVERSAL_MOMENTUM: f64 = 0.5;
    /// Foot contacts below this momentum block instead of kicking
    pub const KICK_MOMENTUM_THRESHOLD: f64 = 2.0;
    /// Vertical skew per pixel of ball offset from the player's head
    pub const KICK_SKEW_FACTOR: f64 = 0.02;

    /// Spindle travel per move command
    pub const SPINDLE_STEP: i32 = 10;

    /// Ticks a goal stays lit after being scored on
    pub const GOAL_LIGHT_TICKS: u32 = 30;

    /// Goals needed to win a match
    pub const SCORE_TO_WIN: u32 = 6;
}
