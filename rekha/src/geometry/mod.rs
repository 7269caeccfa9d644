//! Geometry capability boundary.
//!
//! The algorithms never call a geometry toolkit directly. They go through
//! [`GeometryPort`], which keeps them toolkit-agnostic and lets tests swap in
//! a fake. [`PlanarGeometry`] is the default implementation backed by `geo`.
//!
//! Angles are radians, counter-clockwise from +X. All distances are in the
//! caller's (planar) coordinate units.

mod planar;

pub use planar::PlanarGeometry;

use crate::core::{Coord, Point};

/// Nearest point on a polyline to a query point.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Projection {
    /// Closest point on the polyline
    pub point: Coord,
    /// Distance from the query point to `point`
    pub distance: f64,
}

impl Projection {
    /// Create a projection of `query` onto `point`
    #[inline]
    pub fn new(query: Coord, point: Coord) -> Self {
        Self {
            point,
            distance: query.distance(point),
        }
    }
}

/// Geometric primitives consumed by the lane algorithms.
pub trait GeometryPort: Send + Sync {
    /// Euclidean distance between two coordinates.
    fn distance(&self, a: Coord, b: Coord) -> f64;

    /// Direction from `from` to `to`.
    fn bearing(&self, from: Coord, to: Coord) -> f64;

    /// Point reached by travelling `distance` from `origin` along `bearing`.
    fn destination(&self, origin: Coord, distance: f64, bearing: f64) -> Coord;

    /// Closest point on `line` to `point`.
    ///
    /// A single-vertex line projects onto that vertex. Returns `None` for an
    /// empty line.
    fn nearest_point_on_line(&self, line: &[Coord], point: Coord) -> Option<Projection>;

    /// Arc length of `line`.
    fn length(&self, line: &[Coord]) -> f64;

    /// Point at arc-length `distance` along `line`, clamped to its extent.
    fn point_at_distance(&self, line: &[Coord], distance: f64) -> Option<Coord>;

    /// Points at each of `distances` along `line`, clamped like
    /// [`point_at_distance`](Self::point_at_distance).
    ///
    /// Empty for an empty line. Implementations may assume `distances` is
    /// ascending, which is how densification asks.
    fn points_at_distances(&self, line: &[Coord], distances: &[f64]) -> Vec<Coord> {
        distances
            .iter()
            .filter_map(|&d| self.point_at_distance(line, d))
            .collect()
    }

    /// Indices of the vertices kept by Douglas-Peucker simplification.
    ///
    /// The first and last vertices are always kept.
    fn simplify_indices(&self, line: &[Coord], tolerance: f64) -> Vec<usize>;

    /// Simplify a point sequence, keeping the surviving points (and ids) as-is.
    fn simplify(&self, points: &[Point], tolerance: f64) -> Vec<Point> {
        let coords: Vec<Coord> = points.iter().map(Point::coord).collect();
        self.simplify_indices(&coords, tolerance)
            .into_iter()
            .filter_map(|i| points.get(i).cloned())
            .collect()
    }
}
