//! Teams: three spindles laid out across the table

use serde::{Deserialize, Serialize};

use super::ball::Ball;
use super::player::Player;
use super::spindle::{Spindle, TeamColor};
use super::table::Table;

/// Number of spindles per team
pub const SPINDLES_PER_TEAM: usize = 3;

/// Player counts per spindle, left to right
const HUMAN_PLAYERS: [usize; SPINDLES_PER_TEAM] = [3, 5, 1];
const COMPUTER_PLAYERS: [usize; SPINDLES_PER_TEAM] = [1, 5, 3];
/// Keys that select the human spindles, left to right
const HUMAN_CONTROLS: [char; SPINDLES_PER_TEAM] = ['S', 'D', 'F'];
/// Overhang past the table edge, in stick-out units
const STICK_OUT_MULTIPLES: [i32; SPINDLES_PER_TEAM] = [1, 3, 1];

/// Horizontal placement shared by both teams
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TeamLayout {
    pub top_intersect: i32,
    pub bottom_intersect: i32,
    pub starting_x: i32,
    pub width_interval: i32,
    pub stick_out: i32,
}

impl TeamLayout {
    /// Layout for one side of `table`
    ///
    /// The computer's spindles start just inside the left wall and the human's
    /// are shifted half an interval right, so the two teams interleave.
    pub fn for_table(table: &Table, human: bool) -> Self {
        let width = (table.right_wall.x - table.left_wall.x) as f64;
        let width_interval = (width / 2.85).round() as i32;
        let margin = (width_interval as f64 / 6.0).round() as i32;
        let computer_x = table.left_wall.x + margin;
        let starting_x = if human {
            computer_x + (width_interval as f64 / 2.0).round() as i32
        } else {
            computer_x
        };

        Self {
            top_intersect: table.top_wall.y,
            bottom_intersect: table.bottom_wall.y,
            starting_x,
            width_interval,
            stick_out: table.top_wall.y / 4,
        }
    }
}

/// One side of the match
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Team {
    spindles: Vec<Spindle>,
    human: bool,
}

impl Team {
    pub fn new(layout: TeamLayout, human: bool) -> Self {
        let (counts, color) = if human {
            (HUMAN_PLAYERS, TeamColor::Blue)
        } else {
            (COMPUTER_PLAYERS, TeamColor::Red)
        };

        let spindles = (0..SPINDLES_PER_TEAM)
            .map(|i| {
                let x = layout.starting_x + layout.width_interval * i as i32;
                let stick_out = layout.stick_out * STICK_OUT_MULTIPLES[i];
                Spindle::new(
                    counts[i],
                    x,
                    layout.top_intersect - stick_out,
                    layout.bottom_intersect + stick_out,
                    layout.top_intersect,
                    layout.bottom_intersect,
                    color,
                    human.then_some(HUMAN_CONTROLS[i]),
                )
            })
            .collect();

        Self { spindles, human }
    }

    pub fn for_table(table: &Table, human: bool) -> Self {
        Self::new(TeamLayout::for_table(table, human), human)
    }

    pub fn is_human(&self) -> bool {
        self.human
    }

    pub fn spindles(&self) -> &[Spindle] {
        &self.spindles
    }

    pub fn spindles_mut(&mut self) -> &mut [Spindle] {
        &mut self.spindles
    }

    pub fn players(&self) -> impl Iterator<Item = &Player> {
        self.spindles.iter().flat_map(|s| s.players())
    }

    pub fn move_selected(&mut self, up: bool) {
        for spindle in self.spindles.iter_mut().filter(|s| s.is_selected()) {
            spindle.move_vertical(up);
        }
    }

    pub fn rotate_selected(&mut self, clockwise: bool) {
        for spindle in self.spindles.iter_mut().filter(|s| s.is_selected()) {
            spindle.rotate(clockwise);
        }
    }

    /// Toggle whichever spindle answers to `control`; true if one did
    pub fn toggle_select(&mut self, control: char) -> bool {
        let mut any = false;
        for spindle in &mut self.spindles {
            any |= spindle.toggle_select(control);
        }
        any
    }

    pub fn collide(&self, ball: &mut Ball) {
        for spindle in &self.spindles {
            spindle.collide(ball);
        }
    }

    pub fn decay_momentum(&mut self) {
        for spindle in &mut self.spindles {
            spindle.decay_momentum();
        }
    }
}
