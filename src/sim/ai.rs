//! Computer opponent
//!
//! Deliberately not a planner: each turn every spindle spins at random,
//! skewed toward the spin that drives the ball at the opponent's goal, and
//! slides toward the ball when the ball is clearly above or below it.

use rand::Rng;
use rand_pcg::Pcg32;

use super::ball::Ball;
use super::state::{COMPUTER_AI_STREAM, HUMAN_AI_STREAM, RngState};
use super::team::Team;

/// Percent chance of spinning the favoured way
const FAVOURED_SPIN_PERCENT: u32 = 50;
/// Percent chance of spinning either way; the remainder is no spin
const ANY_SPIN_PERCENT: u32 = 75;

/// Random "flailing" controller for one team
#[derive(Debug, Clone)]
pub struct AiController {
    rng: Pcg32,
    /// Clockwise spin kicks left, so the human side favours it
    favour_clockwise: bool,
}

impl AiController {
    pub fn new(rng: Pcg32, favour_clockwise: bool) -> Self {
        Self {
            rng,
            favour_clockwise,
        }
    }

    /// Controller for the computer team, which attacks the right goal
    pub fn for_computer(seed: u64) -> Self {
        Self::new(RngState::new(seed, COMPUTER_AI_STREAM).to_rng(), false)
    }

    /// Controller for the human team in demo mode, attacking the left goal
    pub fn for_human(seed: u64) -> Self {
        Self::new(RngState::new(seed, HUMAN_AI_STREAM).to_rng(), true)
    }

    /// Pick a spin for one spindle: `Some(clockwise)` or no spin
    pub fn decide_rotation(&mut self) -> Option<bool> {
        let roll = self.rng.random_range(0..100);
        if roll < FAVOURED_SPIN_PERCENT {
            Some(self.favour_clockwise)
        } else if roll < ANY_SPIN_PERCENT {
            Some(!self.favour_clockwise)
        } else {
            None
        }
    }

    /// Make one round of moves for every spindle of `team`
    pub fn take_turn(&mut self, team: &mut Team, ball: &Ball) {
        for spindle in team.spindles_mut() {
            if let Some(clockwise) = self.decide_rotation() {
                spindle.rotate(clockwise);
            }
        }

        // One coin toss per turn decides what all undecided spindles do
        let move_if_unclear = self.rng.random_bool(0.5);
        let unclear_up = self.rng.random_bool(0.5);
        let ball_y = ball.position().1;

        for spindle in team.spindles_mut() {
            let (Some(top), Some(bottom)) = (spindle.top_player(), spindle.bottom_player())
            else {
                continue;
            };
            let (top_y, bottom_y) = (top.position().1, bottom.position().1);

            if ball_y > bottom_y {
                spindle.move_vertical(false);
            } else if ball_y < top_y {
                spindle.move_vertical(true);
            } else if move_if_unclear {
                spindle.move_vertical(unclear_up);
            }
        }
        log::trace!("AI turn done, ball at y={ball_y}");
    }
}
