//! Table football simulation
//!
//! Pure and single-threaded:
//! - Advanced only by explicit `GameLogic::tick` calls
//! - Seeded RNG only (ball resets and the computer opponent)
//! - Stable iteration order (human team first, spindles left to right)
//! - No rendering, platform or file dependencies

pub mod ai;
pub mod ball;
pub mod geometry;
pub mod player;
pub mod spindle;
pub mod state;
pub mod table;
pub mod team;
pub mod tick;
pub mod vector;

pub use ai::AiController;
pub use ball::{Ball, Score};
pub use geometry::{Goal, LeftRightWall, TopBottomWall};
pub use player::{Orientation, Player};
pub use spindle::{Spindle, TeamColor};
pub use state::{GamePhase, GameState, MatchSummary, RngState};
pub use table::{Side, Table};
pub use team::{Team, TeamLayout};
pub use tick::{GameEvent, GameLogic, InputCommand};
pub use vector::Vector;
