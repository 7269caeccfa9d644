//! Plain 2D coordinate used for all geometric arithmetic.

use serde::{Deserialize, Serialize};
use std::ops::{Add, Mul, Sub};

/// Planar coordinate (map units, no implied unit conversion).
#[derive(Clone, Copy, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct Coord {
    /// X coordinate
    pub x: f64,
    /// Y coordinate
    pub y: f64,
}

impl Coord {
    /// Origin.
    pub const ZERO: Coord = Coord { x: 0.0, y: 0.0 };

    /// Create a new coordinate
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another coordinate
    #[inline]
    pub fn distance(&self, other: Coord) -> f64 {
        self.distance_squared(other).sqrt()
    }

    /// Squared distance (avoids sqrt)
    #[inline]
    pub fn distance_squared(&self, other: Coord) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx * dx + dy * dy
    }

    /// Cross product (z-component of the 3D cross product).
    ///
    /// Positive when `other` is counter-clockwise from `self`.
    #[inline]
    pub fn cross(&self, other: Coord) -> f64 {
        self.x * other.y - self.y * other.x
    }

    /// Arithmetic midpoint of two coordinates
    #[inline]
    pub fn midpoint(&self, other: Coord) -> Coord {
        Coord::new((self.x + other.x) * 0.5, (self.y + other.y) * 0.5)
    }

    /// Linear interpolation: `t = 0` is `self`, `t = 1` is `other`.
    #[inline]
    pub fn lerp(&self, other: Coord, t: f64) -> Coord {
        Coord::new(
            self.x + (other.x - self.x) * t,
            self.y + (other.y - self.y) * t,
        )
    }
}

impl Add for Coord {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Coord::new(self.x + other.x, self.y + other.y)
    }
}

impl Sub for Coord {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Coord::new(self.x - other.x, self.y - other.y)
    }
}

impl Mul<f64> for Coord {
    type Output = Self;

    #[inline]
    fn mul(self, scalar: f64) -> Self {
        Coord::new(self.x * scalar, self.y * scalar)
    }
}

impl From<(f64, f64)> for Coord {
    fn from((x, y): (f64, f64)) -> Self {
        Coord::new(x, y)
    }
}
