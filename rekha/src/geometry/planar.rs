//! Planar geometry backed by the `geo` crate.

use geo::{Closest, ClosestPoint, EuclideanLength, LineInterpolatePoint, LineString, SimplifyIdx};

use super::{GeometryPort, Projection};
use crate::core::Coord;

/// Default [`GeometryPort`] for projected (planar) coordinates.
///
/// `geo` types are built on demand from the borrowed coordinates and never
/// stored, so the lane records stay plain values.
#[derive(Clone, Copy, Debug, Default)]
pub struct PlanarGeometry;

impl PlanarGeometry {
    /// Create a new planar geometry port
    pub fn new() -> Self {
        Self
    }
}

fn to_line_string(line: &[Coord]) -> LineString<f64> {
    line.iter().map(|c| (c.x, c.y)).collect()
}

fn from_geo(p: geo::Point<f64>) -> Coord {
    Coord::new(p.x(), p.y())
}

impl GeometryPort for PlanarGeometry {
    #[inline]
    fn distance(&self, a: Coord, b: Coord) -> f64 {
        a.distance(b)
    }

    #[inline]
    fn bearing(&self, from: Coord, to: Coord) -> f64 {
        (to.y - from.y).atan2(to.x - from.x)
    }

    #[inline]
    fn destination(&self, origin: Coord, distance: f64, bearing: f64) -> Coord {
        let (sin, cos) = bearing.sin_cos();
        Coord::new(origin.x + distance * cos, origin.y + distance * sin)
    }

    fn nearest_point_on_line(&self, line: &[Coord], point: Coord) -> Option<Projection> {
        match line {
            [] => None,
            [only] => Some(Projection::new(point, *only)),
            _ => {
                let query = geo::Point::new(point.x, point.y);
                match to_line_string(line).closest_point(&query) {
                    Closest::Intersection(p) | Closest::SinglePoint(p) => {
                        Some(Projection::new(point, from_geo(p)))
                    }
                    Closest::Indeterminate => None,
                }
            }
        }
    }

    fn length(&self, line: &[Coord]) -> f64 {
        if line.len() < 2 {
            return 0.0;
        }
        to_line_string(line).euclidean_length()
    }

    fn point_at_distance(&self, line: &[Coord], distance: f64) -> Option<Coord> {
        let first = *line.first()?;
        if line.len() == 1 {
            return Some(first);
        }

        let total = self.length(line);
        if total <= 0.0 {
            return Some(first);
        }

        let fraction = (distance / total).clamp(0.0, 1.0);
        to_line_string(line)
            .line_interpolate_point(fraction)
            .map(from_geo)
    }

    /// Single forward walk over the segments; a distance smaller than the
    /// previous one restarts the walk from the first vertex.
    fn points_at_distances(&self, line: &[Coord], distances: &[f64]) -> Vec<Coord> {
        let Some(&last) = line.last() else {
            return Vec::new();
        };

        let mut out = Vec::with_capacity(distances.len());
        let mut segment = 0;
        let mut segment_start = 0.0;
        for &distance in distances {
            let distance = distance.max(0.0);
            if distance < segment_start {
                segment = 0;
                segment_start = 0.0;
            }
            let point = loop {
                let Some(&[a, b]) = line.get(segment..segment + 2) else {
                    break last;
                };
                let len = a.distance(b);
                if distance <= segment_start + len {
                    let t = if len > 0.0 {
                        (distance - segment_start) / len
                    } else {
                        0.0
                    };
                    break a.lerp(b, t);
                }
                segment_start += len;
                segment += 1;
            };
            out.push(point);
        }
        out
    }

    fn simplify_indices(&self, line: &[Coord], tolerance: f64) -> Vec<usize> {
        if line.len() < 3 {
            return (0..line.len()).collect();
        }
        to_line_string(line).simplify_idx(&tolerance)
    }
}
