//! Player figures: orientation, rotational momentum and ball contact

use serde::{Deserialize, Serialize};

use super::ball::Ball;
use crate::consts::*;

/// Facing of a player's legs
///
/// `Down` is the neutral stance. `Up` means the legs are lifted and the
/// player cannot touch the ball at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Orientation {
    Up,
    #[default]
    Down,
    Left,
    Right,
}

impl Orientation {
    /// Next facing after a quarter turn
    ///
    /// Clockwise goes Up, Right, Down, Left; counter-clockwise the reverse.
    pub fn rotated(self, clockwise: bool) -> Self {
        use Orientation::*;
        match (self, clockwise) {
            (Up, true) => Right,
            (Right, true) => Down,
            (Down, true) => Left,
            (Left, true) => Up,
            (Up, false) => Left,
            (Left, false) => Down,
            (Down, false) => Right,
            (Right, false) => Up,
        }
    }

    /// Offset of the foot from the head, or `None` when the legs are lifted
    pub fn foot_offset(self) -> Option<(i32, i32)> {
        match self {
            Orientation::Up => None,
            // Leg points into the table, straight under the head
            Orientation::Down => Some((0, 0)),
            Orientation::Left => Some((-LEG_LENGTH, 0)),
            Orientation::Right => Some((LEG_LENGTH, 0)),
        }
    }
}

/// Axis-aligned overlap of two squares given by center and half-extent
fn boxes_overlap(a: (i32, i32), a_half: i32, b: (i32, i32), b_half: i32) -> bool {
    (a.0 - b.0).abs() <= a_half + b_half && (a.1 - b.1).abs() <= a_half + b_half
}

/// A single figure on a spindle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    /// Head center
    x: i32,
    y: i32,
    orientation: Orientation,
    /// Signed spin; negative is clockwise
    momentum: f64,
    ticks_since_momentum_change: u32,
}

impl Player {
    pub fn new(x: i32, y: i32) -> Self {
        Self {
            x,
            y,
            orientation: Orientation::Down,
            momentum: 0.0,
            ticks_since_momentum_change: 0,
        }
    }

    pub fn position(&self) -> (i32, i32) {
        (self.x, self.y)
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn momentum(&self) -> f64 {
        self.momentum
    }

    pub fn head_radius(&self) -> i32 {
        HEAD_RADIUS
    }

    pub fn foot_location(&self) -> Option<(i32, i32)> {
        self.orientation
            .foot_offset()
            .map(|(dx, dy)| (self.x + dx, self.y + dy))
    }

    /// Resolve contact with the ball
    ///
    /// Body and foot are tested independently. A foot contact without enough
    /// spin behind it blocks like the body does, unless the body already
    /// blocked this tick. Otherwise the foot kicks with the player's momentum.
    pub fn collide(&self, ball: &mut Ball) {
        let Some(foot) = self.foot_location() else {
            return;
        };
        let ball_pos = ball.position();
        let ball_radius = ball.radius();

        let mut blocked = false;
        if boxes_overlap(ball_pos, ball_radius, (self.x, self.y), HEAD_RADIUS) {
            self.block(ball);
            blocked = true;
        }

        if boxes_overlap(ball_pos, ball_radius, foot, FOOT_TOLERANCE) {
            if self.momentum.abs() < KICK_MOMENTUM_THRESHOLD {
                if !blocked {
                    self.block(ball);
                }
            } else {
                log::trace!(
                    "Kick at ({}, {}) with momentum {:.2}",
                    self.x,
                    self.y,
                    self.momentum
                );
                ball.accelerate_left_right_by(self.momentum);
                ball.accelerate_up_down_by((ball_pos.1 - self.y) as f64 * KICK_SKEW_FACTOR);
            }
        }
    }

    /// Send the ball away from the head on each axis it is off-center on
    fn block(&self, ball: &mut Ball) {
        let (bx, by) = ball.position();
        if bx > self.x {
            ball.reflect_left_right(false);
        } else if bx < self.x {
            ball.reflect_left_right(true);
        }
        if by > self.y {
            ball.reflect_up_down(false);
        } else if by < self.y {
            ball.reflect_up_down(true);
        }
    }

    /// Quarter turn, building spin in the turning direction
    ///
    /// Turning the same way adds [`MOMENTUM_CHANGE`] up to [`MAX_MOMENTUM`];
    /// turning against the current spin snaps it to [`REVERSAL_MOMENTUM`].
    pub fn rotate(&mut self, clockwise: bool) {
        self.orientation = self.orientation.rotated(clockwise);
        self.ticks_since_momentum_change = 0;

        let step = if clockwise {
            -MOMENTUM_CHANGE
        } else {
            MOMENTUM_CHANGE
        };
        if self.momentum == 0.0 {
            self.momentum = step;
        } else if self.momentum.signum() == step.signum() {
            self.momentum = (self.momentum + step).clamp(-MAX_MOMENTUM, MAX_MOMENTUM);
        } else {
            self.momentum = REVERSAL_MOMENTUM.copysign(step);
        }
    }

    /// Divide momentum by `e^n`, `n` being decays since the last rotation
    pub fn decay_momentum(&mut self) {
        self.ticks_since_momentum_change += 1;
        self.momentum /= (self.ticks_since_momentum_change as f64).exp();
        if self.momentum.abs() < 0.01 {
            self.momentum = 0.0;
        }
    }

    /// Slide vertically; bounds are the spindle's responsibility
    pub fn move_vertical(&mut self, up: bool, distance: i32) {
        if up {
            self.y -= distance;
        } else {
            self.y += distance;
        }
    }
}
