//! Static table bounds: walls and goal apertures
//!
//! All coordinates are screen coordinates (y grows downward).

use serde::{Deserialize, Serialize};

use crate::consts::GOAL_LIGHT_TICKS;

/// A vertical wall (left or right side of the table)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeftRightWall {
    pub x: i32,
    pub top: i32,
    pub length: i32,
}

impl LeftRightWall {
    pub fn new(x: i32, top: i32, length: i32) -> Self {
        Self { x, top, length }
    }

    pub fn bottom(&self) -> i32 {
        self.top + self.length
    }
}

/// A horizontal wall (top or bottom of the table)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopBottomWall {
    pub y: i32,
    pub left: i32,
    pub length: i32,
}

impl TopBottomWall {
    pub fn new(y: i32, left: i32, length: i32) -> Self {
        Self { y, left, length }
    }

    pub fn right(&self) -> i32 {
        self.left + self.length
    }
}

/// A goal aperture just outside a side wall
///
/// The light-up flag is purely visual; it is set when the goal is scored on
/// and fades after [`GOAL_LIGHT_TICKS`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Goal {
    pub y_top: i32,
    pub y_bottom: i32,
    pub x_start: i32,
    pub x_end: i32,
    lit_up: bool,
    lit_ticks: u32,
}

impl Goal {
    pub fn new(y_top: i32, y_bottom: i32, x_start: i32, x_end: i32) -> Self {
        Self {
            y_top,
            y_bottom,
            x_start,
            x_end,
            lit_up: false,
            lit_ticks: 0,
        }
    }

    pub fn width(&self) -> i32 {
        self.x_end - self.x_start
    }

    pub fn height(&self) -> i32 {
        self.y_bottom - self.y_top
    }

    /// True if the whole vertical span `[top, bottom]` fits in the aperture
    pub fn spans(&self, top: i32, bottom: i32) -> bool {
        top >= self.y_top && bottom <= self.y_bottom
    }

    pub fn is_lit_up(&self) -> bool {
        self.lit_up
    }

    /// Switch the light on or off and restart the fade counter
    pub fn light_up(&mut self, on: bool) {
        self.lit_up = on;
        self.lit_ticks = 0;
    }

    /// Advance the fade counter, switching the light off past the threshold
    pub fn increment_light_up_effect(&mut self) {
        if !self.lit_up {
            return;
        }
        self.lit_ticks += 1;
        if self.lit_ticks > GOAL_LIGHT_TICKS {
            self.light_up(false);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_goal_spans_inclusive() {
        let goal = Goal::new(400, 600, 50, 100);
        assert!(goal.spans(400, 600));
        assert!(goal.spans(490, 510));
        assert!(!goal.spans(399, 420));
        assert!(!goal.spans(590, 601));
    }

    #[test]
    fn test_goal_light_fades() {
        let mut goal = Goal::new(400, 600, 50, 100);
        goal.light_up(true);
        for _ in 0..GOAL_LIGHT_TICKS {
            goal.increment_light_up_effect();
        }
        assert!(goal.is_lit_up());

        goal.increment_light_up_effect();
        assert!(!goal.is_lit_up());
    }

    #[test]
    fn test_relighting_restarts_fade() {
        let mut goal = Goal::new(400, 600, 50, 100);
        goal.light_up(true);
        for _ in 0..GOAL_LIGHT_TICKS {
            goal.increment_light_up_effect();
        }
        goal.light_up(true);
        goal.increment_light_up_effect();
        assert!(goal.is_lit_up());
    }

    #[test]
    fn test_wall_extents() {
        assert_eq!(LeftRightWall::new(100, 100, 800).bottom(), 900);
        assert_eq!(TopBottomWall::new(100, 100, 800).right(), 900);
    }
}
