//! Immutable 2D velocity value

use glam::DVec2;
use serde::{Deserialize, Serialize};

/// A velocity in table units per tick
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vector(DVec2);

impl Vector {
    pub const ZERO: Self = Self(DVec2::ZERO);

    pub fn new(x: f64, y: f64) -> Self {
        Self(DVec2::new(x, y))
    }

    #[inline]
    pub fn x(&self) -> f64 {
        self.0.x
    }

    #[inline]
    pub fn y(&self) -> f64 {
        self.0.y
    }

    pub fn magnitude(&self) -> f64 {
        self.0.length()
    }

    /// Copy with the x component replaced
    pub fn with_x(self, x: f64) -> Self {
        Self::new(x, self.0.y)
    }

    /// Copy with the y component replaced
    pub fn with_y(self, y: f64) -> Self {
        Self::new(self.0.x, y)
    }

    pub fn scale(self, factor: f64) -> Self {
        Self(self.0 * factor)
    }
}

impl From<DVec2> for Vector {
    fn from(v: DVec2) -> Self {
        Self(v)
    }
}
