//! Axis-aligned bounding box.
//!
//! [`Bounds`] is what the spatial index stores per line and what query windows
//! are expressed in.
//!
//! ```rust
//! use rekha::core::{Bounds, Coord};
//!
//! let mut bounds = Bounds::empty();
//! bounds.expand_to_include(Coord::new(1.0, 1.0));
//! bounds.expand_to_include(Coord::new(-2.0, 3.0));
//! assert_eq!(bounds.min, Coord::new(-2.0, 1.0));
//! assert_eq!(bounds.max, Coord::new(1.0, 3.0));
//!
//! let window = Bounds::around(Coord::new(0.0, 2.0), 0.5);
//! assert!(bounds.intersects(&window));
//! ```

use super::Coord;

/// Axis-aligned bounding box.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    /// Minimum corner (smallest x and y values).
    pub min: Coord,
    /// Maximum corner (largest x and y values).
    pub max: Coord,
}

impl Bounds {
    /// Create a new bounding box from min and max corners.
    #[inline]
    pub const fn new(min: Coord, max: Coord) -> Self {
        Self { min, max }
    }

    /// Create an empty (invalid) bounding box.
    ///
    /// The empty bounds has min > max, so it will expand to fit any point.
    #[inline]
    pub fn empty() -> Self {
        Self {
            min: Coord::new(f64::INFINITY, f64::INFINITY),
            max: Coord::new(f64::NEG_INFINITY, f64::NEG_INFINITY),
        }
    }

    /// Square window of half-width `half_width` centered on `center`.
    #[inline]
    pub fn around(center: Coord, half_width: f64) -> Self {
        Self {
            min: Coord::new(center.x - half_width, center.y - half_width),
            max: Coord::new(center.x + half_width, center.y + half_width),
        }
    }

    /// Tightest box around a set of coordinates, `None` when there are none.
    pub fn from_coords(coords: impl IntoIterator<Item = Coord>) -> Option<Self> {
        let mut bounds = Self::empty();
        for c in coords {
            bounds.expand_to_include(c);
        }
        (!bounds.is_empty()).then_some(bounds)
    }

    /// Check if the bounds are empty (invalid).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.min.x > self.max.x || self.min.y > self.max.y
    }

    /// Width of the bounding box (x extent).
    #[inline]
    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    /// Height of the bounding box (y extent).
    #[inline]
    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    /// Grow the box so it contains `point`.
    #[inline]
    pub fn expand_to_include(&mut self, point: Coord) {
        self.min.x = self.min.x.min(point.x);
        self.min.y = self.min.y.min(point.y);
        self.max.x = self.max.x.max(point.x);
        self.max.y = self.max.y.max(point.y);
    }

    /// Whether `point` lies inside or on the boundary.
    #[inline]
    pub fn contains(&self, point: Coord) -> bool {
        point.x >= self.min.x
            && point.x <= self.max.x
            && point.y >= self.min.y
            && point.y <= self.max.y
    }

    /// Whether the two boxes overlap. Touching edges count as overlap.
    #[inline]
    pub fn intersects(&self, other: &Bounds) -> bool {
        self.min.x <= other.max.x
            && self.max.x >= other.min.x
            && self.min.y <= other.max.y
            && self.max.y >= other.min.y
    }
}

impl Default for Bounds {
    fn default() -> Self {
        Self::empty()
    }
}
