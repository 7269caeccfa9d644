//! Identified map point.

use serde::{Deserialize, Serialize};

use super::Coord;

/// A map point with an opaque identifier.
///
/// Points produced by interpolation, midpointing or recalibration are
/// *synthesized* and carry an empty id. Points passed through unchanged keep
/// the id they came in with.
#[derive(Clone, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    /// Opaque identifier (empty for synthesized points)
    #[serde(default)]
    pub id: String,
    /// X coordinate
    pub x: f64,
    /// Y coordinate
    pub y: f64,
}

impl Point {
    /// Create a new point
    pub fn new(id: impl Into<String>, x: f64, y: f64) -> Self {
        Self {
            id: id.into(),
            x,
            y,
        }
    }

    /// Create a synthesized (empty id) point at `coord`
    #[inline]
    pub fn synthesized(coord: Coord) -> Self {
        Self {
            id: String::new(),
            x: coord.x,
            y: coord.y,
        }
    }

    /// Position of this point
    #[inline]
    pub fn coord(&self) -> Coord {
        Coord::new(self.x, self.y)
    }

    /// Whether this point was produced by a transformation
    #[inline]
    pub fn is_synthesized(&self) -> bool {
        self.id.is_empty()
    }
}

impl From<Coord> for Point {
    fn from(coord: Coord) -> Self {
        Point::synthesized(coord)
    }
}
