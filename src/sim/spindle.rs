//! Spindles: sliding, rotating rods carrying players

use serde::{Deserialize, Serialize};

use super::ball::Ball;
use super::player::Player;
use crate::consts::SPINDLE_STEP;

/// Team color a spindle is painted in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TeamColor {
    Blue,
    Red,
}

/// A rod across the table holding evenly spaced players
///
/// The rod sticks out past the table edges; its players may travel up to,
/// and never past, the points where the rod crosses the top and bottom walls.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Spindle {
    /// Players ordered top to bottom
    players: Vec<Player>,
    top: (i32, i32),
    bottom: (i32, i32),
    table_top_y: i32,
    table_bottom_y: i32,
    color: TeamColor,
    control: Option<char>,
    selected: bool,
}

impl Spindle {
    /// Build a spindle at `x` whose rod runs from `top_y` to `bottom_y`
    ///
    /// Players are spaced so that the gaps between rod ends and players are
    /// all equal.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        number_of_players: usize,
        x: i32,
        top_y: i32,
        bottom_y: i32,
        table_top_y: i32,
        table_bottom_y: i32,
        color: TeamColor,
        control: Option<char>,
    ) -> Self {
        let length = (bottom_y - top_y) as f64;
        let gap = (length / (number_of_players as f64 + 1.0)).round() as i32;

        let players = (1..=number_of_players as i32)
            .map(|i| Player::new(x, top_y + gap * i))
            .collect();

        Self {
            players,
            top: (x, top_y),
            bottom: (x, bottom_y),
            table_top_y,
            table_bottom_y,
            color,
            control,
            selected: false,
        }
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn top(&self) -> (i32, i32) {
        self.top
    }

    pub fn bottom(&self) -> (i32, i32) {
        self.bottom
    }

    pub fn x(&self) -> i32 {
        self.top.0
    }

    /// Legal travel range for players: `(table_top_y, table_bottom_y)`
    pub fn travel_bounds(&self) -> (i32, i32) {
        (self.table_top_y, self.table_bottom_y)
    }

    pub fn color(&self) -> TeamColor {
        self.color
    }

    pub fn control(&self) -> Option<char> {
        self.control
    }

    pub fn is_selected(&self) -> bool {
        self.selected
    }

    pub fn top_player(&self) -> Option<&Player> {
        self.players.first()
    }

    pub fn bottom_player(&self) -> Option<&Player> {
        self.players.last()
    }

    /// Slide up or down by one step, stopping at the table edge
    pub fn move_vertical(&mut self, up: bool) {
        let room = if up {
            self.top_player()
                .map(|p| p.position().1 - self.table_top_y)
        } else {
            self.bottom_player()
                .map(|p| self.table_bottom_y - p.position().1)
        };
        let distance = SPINDLE_STEP.min(room.unwrap_or(0)).max(0);
        if distance == 0 {
            return;
        }

        let delta = if up { -distance } else { distance };
        self.top.1 += delta;
        self.bottom.1 += delta;
        for player in &mut self.players {
            player.move_vertical(up, distance);
        }

        debug_assert!(
            self.players.iter().all(|p| {
                let y = p.position().1;
                y >= self.table_top_y && y <= self.table_bottom_y
            }),
            "spindle at x={} moved a player off the table",
            self.x()
        );
    }

    /// Quarter turn of every player on the rod
    pub fn rotate(&mut self, clockwise: bool) {
        for player in &mut self.players {
            player.rotate(clockwise);
        }
    }

    pub fn decay_momentum(&mut self) {
        for player in &mut self.players {
            player.decay_momentum();
        }
    }

    pub fn collide(&self, ball: &mut Ball) {
        for player in &self.players {
            player.collide(ball);
        }
    }

    /// Flip selection if `control` is this spindle's key (case-insensitive)
    pub fn toggle_select(&mut self, control: char) -> bool {
        let matches = self
            .control
            .is_some_and(|c| c.eq_ignore_ascii_case(&control));
        if matches {
            self.selected = !self.selected;
        }
        matches
    }
}
