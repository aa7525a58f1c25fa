//! Ball kinematics, wall bounces and goal detection

use rand::Rng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::table::Table;
use super::vector::Vector;
use crate::consts::*;

/// Outcome of moving the ball for one tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Score {
    #[default]
    Nobody,
    /// The ball went into the left (computer's) goal
    Human,
    /// The ball went into the right (human's) goal
    Computer,
}

/// The ball
///
/// Position is kept in whole table units; velocity is fractional and the new
/// position is truncated after every step. After a goal the ball is frozen off
/// the table for [`BALL_REAPPEAR_DELAY`] ticks and then resets itself.
#[derive(Debug, Clone)]
pub struct Ball {
    radius: i32,
    x: i32,
    y: i32,
    velocity: Vector,
    starting_position: (i32, i32),
    off_table: bool,
    reappear_ticks: u32,
    rng: Pcg32,
}

impl Ball {
    /// Place a ball at `(x, y)` with a random velocity drawn from `rng`
    pub fn new(x: i32, y: i32, rng: Pcg32) -> Self {
        let mut ball = Self {
            radius: BALL_RADIUS,
            x,
            y,
            velocity: Vector::ZERO,
            starting_position: (x, y),
            off_table: false,
            reappear_ticks: 0,
            rng,
        };
        ball.velocity = ball.random_velocity();
        ball
    }

    pub fn radius(&self) -> i32 {
        self.radius
    }

    pub fn position(&self) -> (i32, i32) {
        (self.x, self.y)
    }

    pub fn set_position(&mut self, x: i32, y: i32) {
        self.x = x;
        self.y = y;
    }

    pub fn velocity(&self) -> Vector {
        self.velocity
    }

    pub fn set_velocity(&mut self, velocity: Vector) {
        self.velocity = velocity;
    }

    pub fn starting_position(&self) -> (i32, i32) {
        self.starting_position
    }

    pub fn is_off_table(&self) -> bool {
        self.off_table
    }

    /// Advance one tick against the table bounds
    ///
    /// Returns who scored, if the ball went into a goal this tick.
    pub fn move_on(&mut self, table: &Table) -> Score {
        if self.off_table {
            self.reappear_ticks += 1;
            if self.reappear_ticks <= BALL_REAPPEAR_DELAY {
                return Score::Nobody;
            }
            self.reset();
        }

        self.x = (self.x as f64 + self.velocity.x()) as i32;
        self.y = (self.y as f64 + self.velocity.y()) as i32;

        self.clamp_to(table);
        let score = self.collide_with_walls(table);

        self.velocity = self.velocity.scale(BALL_FRICTION);
        score
    }

    /// Pull the ball back to `wall ± radius` if it crossed a wall line
    fn clamp_to(&mut self, table: &Table) {
        let r = self.radius;
        if self.x - r < table.left_wall.x {
            self.x = table.left_wall.x + r;
        } else if self.x + r > table.right_wall.x {
            self.x = table.right_wall.x - r;
        }
        if self.y - r < table.top_wall.y {
            self.y = table.top_wall.y + r;
        } else if self.y + r > table.bottom_wall.y {
            self.y = table.bottom_wall.y - r;
        }
    }

    /// Bounce off the first wall touched, in order top, bottom, left, right
    fn collide_with_walls(&mut self, table: &Table) -> Score {
        let r = self.radius;
        let (top, bottom) = (self.y - r, self.y + r);

        if top <= table.top_wall.y {
            self.reflect_up_down(false);
        } else if bottom >= table.bottom_wall.y {
            self.reflect_up_down(true);
        } else if self.x - r <= table.left_wall.x {
            self.reflect_left_right(false);
            if table.left_goal.spans(top, bottom) {
                self.take_off_table();
                return Score::Human;
            }
        } else if self.x + r >= table.right_wall.x {
            self.reflect_left_right(true);
            if table.right_goal.spans(top, bottom) {
                self.take_off_table();
                return Score::Computer;
            }
        }
        Score::Nobody
    }

    fn take_off_table(&mut self) {
        self.off_table = true;
        self.reappear_ticks = 0;
    }

    /// Add a full impulse to the horizontal velocity
    pub fn accelerate_left_right(&mut self, left: bool) {
        let impulse = if left { -BALL_IMPULSE } else { BALL_IMPULSE };
        self.velocity = self.velocity.with_x(self.velocity.x() + impulse);
    }

    /// Add a full impulse to the vertical velocity
    pub fn accelerate_up_down(&mut self, up: bool) {
        let impulse = if up { -BALL_IMPULSE } else { BALL_IMPULSE };
        self.velocity = self.velocity.with_y(self.velocity.y() + impulse);
    }

    /// Add `proportion` of half an impulse horizontally (negative is leftward)
    pub fn accelerate_left_right_by(&mut self, proportion: f64) {
        let dx = proportion * BALL_IMPULSE / 2.0;
        self.velocity = self.velocity.with_x(self.velocity.x() + dx);
    }

    /// Add `proportion` of half an impulse vertically (negative is upward)
    pub fn accelerate_up_down_by(&mut self, proportion: f64) {
        let dy = proportion * BALL_IMPULSE / 2.0;
        self.velocity = self.velocity.with_y(self.velocity.y() + dy);
    }

    /// Point the horizontal velocity left or right, keeping its magnitude
    pub fn reflect_left_right(&mut self, left: bool) {
        let speed = self.velocity.x().abs();
        self.velocity = self.velocity.with_x(if left { -speed } else { speed });
    }

    /// Point the vertical velocity up or down, keeping its magnitude
    pub fn reflect_up_down(&mut self, up: bool) {
        let speed = self.velocity.y().abs();
        self.velocity = self.velocity.with_y(if up { -speed } else { speed });
    }

    /// Put the ball back at its starting position with a fresh random velocity
    pub fn reset(&mut self) {
        (self.x, self.y) = self.starting_position;
        self.velocity = self.random_velocity();
        self.off_table = false;
        self.reappear_ticks = 0;
        log::info!(
            "Ball reset to ({}, {}) with velocity ({:.1}, {:.1})",
            self.x,
            self.y,
            self.velocity.x(),
            self.velocity.y()
        );
    }

    fn random_velocity(&mut self) -> Vector {
        Vector::new(
            self.rng.random_range(-BALL_RESET_SPEED..=BALL_RESET_SPEED),
            self.rng.random_range(-BALL_RESET_SPEED..=BALL_RESET_SPEED),
        )
    }
}
