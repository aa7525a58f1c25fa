//! Table bounds derived from the playing surface

use serde::{Deserialize, Serialize};

use super::geometry::{Goal, LeftRightWall, TopBottomWall};

/// Which end of the table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Side {
    Left,
    Right,
}

/// Four walls and two goals
///
/// The walls are inset by a tenth of each surface dimension. Each goal spans
/// the middle third of the playing height and sits in the border just outside
/// its side wall.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Table {
    pub left_wall: LeftRightWall,
    pub right_wall: LeftRightWall,
    pub top_wall: TopBottomWall,
    pub bottom_wall: TopBottomWall,
    pub left_goal: Goal,
    pub right_goal: Goal,
}

impl Table {
    /// Derive the table from a playing surface of `width` x `height`
    pub fn new(width: i32, height: i32) -> Self {
        let border_x = (width / 10) as f64;
        let border_y = (height / 10) as f64;
        let x_start = border_x;
        let x_width = width as f64 - 2.0 * border_x;
        let y_start = border_y;
        let y_width = height as f64 - 2.0 * border_y;

        let left_wall = LeftRightWall::new(x_start as i32, y_start as i32, y_width as i32);
        let right_wall =
            LeftRightWall::new((x_start + x_width) as i32, y_start as i32, y_width as i32);
        let top_wall = TopBottomWall::new(y_start as i32, x_start as i32, x_width as i32);
        let bottom_wall =
            TopBottomWall::new((y_start + y_width) as i32, x_start as i32, x_width as i32);

        let goal_y_start = y_start + y_width / 3.0;
        let goal_height = y_width / 3.0;
        let goal_width = border_x / 2.0;

        let left_goal_x = x_start - goal_width;
        let left_goal = Goal::new(
            goal_y_start as i32,
            (goal_y_start + goal_height) as i32,
            left_goal_x as i32,
            (left_goal_x + goal_width) as i32,
        );
        let right_goal_x = x_start + x_width;
        let right_goal = Goal::new(
            goal_y_start as i32,
            (goal_y_start + goal_height) as i32,
            right_goal_x as i32,
            (right_goal_x + goal_width) as i32,
        );

        Self {
            left_wall,
            right_wall,
            top_wall,
            bottom_wall,
            left_goal,
            right_goal,
        }
    }

    /// Rounded midpoint of the playing area
    pub fn center(&self) -> (i32, i32) {
        let left = self.left_wall.x;
        let width = self.right_wall.x - left;
        let top = self.top_wall.y;
        let height = self.bottom_wall.y - top;

        let x = (width as f64 / 2.0).round() as i32 + left;
        let y = (height as f64 / 2.0).round() as i32 + top;
        (x, y)
    }

    pub fn goal(&self, side: Side) -> &Goal {
        match side {
            Side::Left => &self.left_goal,
            Side::Right => &self.right_goal,
        }
    }

    pub fn goal_mut(&mut self, side: Side) -> &mut Goal {
        match side {
            Side::Left => &mut self.left_goal,
            Side::Right => &mut self.right_goal,
        }
    }

    /// Advance the fade of both goal lights
    pub fn decay_goal_lights(&mut self) {
        self.left_goal.increment_light_up_effect();
        self.right_goal.increment_light_up_effect();
    }
}
