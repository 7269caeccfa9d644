//! Polyline resampling.
//!
//! Two strategies:
//! - [`Resampler::interpolate_to_count`]: insert points until the line has an
//!   exact target count, spreading them over segments by weight.
//! - [`Resampler::resample_by_interval`]: walk the line in fixed arc-length
//!   steps (densify), keeping the original endpoints.
//!
//! Original vertices pass through unchanged (ids included); inserted points
//! are synthesized.

use log::trace;
use serde::{Deserialize, Serialize};

use crate::core::{Coord, Point};
use crate::error::{GeometryError, Result};
use crate::geometry::GeometryPort;

/// How extra points are shared between segments in
/// [`Resampler::interpolate_to_count`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AllocationStrategy {
    /// Share by true segment length.
    #[default]
    ArcLength,
    /// Share by signed x-extent relative to `last.x - first.x`, each
    /// intermediate share taken from what is still unallocated.
    ///
    /// Reproduces earlier centerline output. Near-vertical segments get
    /// almost nothing; when the overall x-extent is zero the arc-length share
    /// is used instead.
    HorizontalExtent,
}

/// Resampler over a [`GeometryPort`].
pub struct Resampler<'a, G: ?Sized> {
    port: &'a G,
    allocation: AllocationStrategy,
}

impl<'a, G: GeometryPort + ?Sized> Resampler<'a, G> {
    /// Create a resampler using the default allocation strategy
    pub fn new(port: &'a G) -> Self {
        Self {
            port,
            allocation: AllocationStrategy::default(),
        }
    }

    /// Builder-style setter for the allocation strategy.
    pub fn with_allocation(mut self, allocation: AllocationStrategy) -> Self {
        self.allocation = allocation;
        self
    }

    /// Insert points so the line has exactly `target_count` points.
    ///
    /// The last segment absorbs whatever rounding left unallocated, so the
    /// output length always equals `target_count`. A single-point line is
    /// repeated in place.
    ///
    /// # Errors
    /// - [`GeometryError::EmptyLine`] when `line` is empty
    /// - [`GeometryError::TargetCountTooSmall`] when `target_count < line.len()`
    pub fn interpolate_to_count(&self, line: &[Point], target_count: usize) -> Result<Vec<Point>> {
        let Some(first) = line.first() else {
            return Err(GeometryError::EmptyLine { role: "resampled" });
        };
        if target_count < line.len() {
            return Err(GeometryError::TargetCountTooSmall {
                target: target_count,
                len: line.len(),
            });
        }

        let mut output = Vec::with_capacity(target_count);
        output.push(first.clone());

        if line.len() == 1 {
            output.extend((1..target_count).map(|_| Point::synthesized(first.coord())));
            return Ok(output);
        }

        let coords: Vec<Coord> = line.iter().map(Point::coord).collect();
        let weights = self.segment_weights(&coords);
        let extra = target_count - line.len();
        let last_segment = line.len() - 2;
        let mut remaining = extra;

        for (i, pair) in line.windows(2).enumerate() {
            let count = if i == last_segment {
                remaining
            } else {
                let base = match self.allocation {
                    AllocationStrategy::ArcLength => extra,
                    AllocationStrategy::HorizontalExtent => remaining,
                };
                share(weights[i], base, remaining)
            };

            let (start, end) = (coords[i], coords[i + 1]);
            let steps = (count + 1) as f64;
            output.extend(
                (1..=count).map(|j| Point::synthesized(start.lerp(end, j as f64 / steps))),
            );
            output.push(pair[1].clone());

            remaining -= count;
        }

        trace!(
            "Interpolated {} points to {} ({:?})",
            line.len(),
            output.len(),
            self.allocation
        );
        Ok(output)
    }

    /// Densify `line` at a fixed arc-length `interval`.
    ///
    /// Emits the original first point, the point at every multiple of
    /// `interval` strictly inside the line, then the original last point.
    /// Lines with fewer than two points are returned as-is.
    ///
    /// # Errors
    /// [`GeometryError::InvalidInterval`] when `interval` is not a finite
    /// positive number.
    pub fn resample_by_interval(&self, line: &[Point], interval: f64) -> Result<Vec<Point>> {
        if !(interval.is_finite() && interval > 0.0) {
            return Err(GeometryError::InvalidInterval(interval));
        }
        let [first, .., last] = line else {
            return Ok(line.to_vec());
        };

        let coords: Vec<Coord> = line.iter().map(Point::coord).collect();
        let total = self.port.length(&coords);

        let mut distances = Vec::with_capacity(sample_capacity(total, interval));
        distances.extend(
            (1u64..)
                .map(|k| k as f64 * interval)
                .take_while(|&d| d < total),
        );
        let samples = self.port.points_at_distances(&coords, &distances);

        let mut output = Vec::with_capacity(samples.len() + 2);
        output.push(first.clone());
        output.extend(samples.into_iter().map(Point::synthesized));
        output.push(last.clone());

        trace!(
            "Densified {} points to {} (length {:.4}, interval {})",
            line.len(),
            output.len(),
            total,
            interval
        );
        Ok(output)
    }

    /// Per-segment share of the extra points.
    fn segment_weights(&self, coords: &[Coord]) -> Vec<f64> {
        let lengths: Vec<f64> = coords.windows(2).map(|w| w[0].distance(w[1])).collect();
        let total_length: f64 = lengths.iter().sum();
        let by_length = |len: f64| {
            if total_length > 0.0 {
                len / total_length
            } else {
                0.0
            }
        };

        match self.allocation {
            AllocationStrategy::ArcLength => lengths.iter().map(|&len| by_length(len)).collect(),
            AllocationStrategy::HorizontalExtent => {
                let total_dx = coords[coords.len() - 1].x - coords[0].x;
                coords
                    .windows(2)
                    .zip(&lengths)
                    .map(|(w, &len)| {
                        let ratio = (w[1].x - w[0].x) / total_dx;
                        if ratio.is_finite() {
                            ratio
                        } else {
                            by_length(len)
                        }
                    })
                    .collect()
            }
        }
    }
}

/// Upper bound on up-front allocation for densified samples.
const MAX_PREALLOCATED_SAMPLES: usize = 1 << 16;

/// Capacity hint for the samples strictly inside a line of length `total`.
#[inline]
fn sample_capacity(total: f64, interval: f64) -> usize {
    let estimate = (total / interval).ceil();
    if estimate.is_finite() && estimate > 0.0 {
        (estimate as usize).min(MAX_PREALLOCATED_SAMPLES)
    } else if estimate.is_infinite() {
        MAX_PREALLOCATED_SAMPLES
    } else {
        0
    }
}

/// Rounded share of `base`, kept within `[0, cap]`.
#[inline]
fn share(weight: f64, base: usize, cap: usize) -> usize {
    let raw = (weight * base as f64).round();
    if raw.is_finite() && raw > 0.0 {
        (raw as usize).min(cap)
    } else {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::PlanarGeometry;
    use approx::assert_abs_diff_eq;

    fn points(coords: &[(f64, f64)]) -> Vec<Point> {
        coords
            .iter()
            .enumerate()
            .map(|(i, &(x, y))| Point::new(format!("v{i}"), x, y))
            .collect()
    }

    #[test]
    fn test_interpolate_exact_count() {
        let geom = PlanarGeometry::new();
        let line = points(&[(0.0, 0.0), (3.0, 1.0), (10.0, 0.0), (12.0, 5.0)]);

        for allocation in [AllocationStrategy::ArcLength, AllocationStrategy::HorizontalExtent] {
            let resampler = Resampler::new(&geom).with_allocation(allocation);
            for target in line.len()..40 {
                let out = resampler.interpolate_to_count(&line, target).unwrap();
                assert_eq!(out.len(), target, "{allocation:?} target {target}");
                assert_eq!(out.first(), line.first());
                assert_eq!(out.last(), line.last());
            }
        }
    }

    #[test]
    fn test_interpolate_keeps_vertices_in_order() {
        let geom = PlanarGeometry::new();
        let line = points(&[(0.0, 0.0), (4.0, 0.0), (8.0, 0.0)]);
        let out = Resampler::new(&geom)
            .interpolate_to_count(&line, 9)
            .unwrap();

        // Equal segment lengths: three inserted points per segment
        let xs: Vec<f64> = out.iter().map(|p| p.x).collect();
        assert_eq!(xs, vec![0.0, 1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0]);
        assert_eq!(out[4].id, "v1");
        assert!(out[1].is_synthesized());
    }

    #[test]
    fn test_horizontal_extent_matches_legacy_allocation() {
        let geom = PlanarGeometry::new();
        // x-extents 2 and 8 of total 10; 5 extra points.
        // First segment: round(0.2 * 5) = 1, last segment takes the other 4.
        let line = points(&[(0.0, 0.0), (2.0, 0.0), (10.0, 0.0)]);
        let out = Resampler::new(&geom)
            .with_allocation(AllocationStrategy::HorizontalExtent)
            .interpolate_to_count(&line, 8)
            .unwrap();

        let vertex = out.iter().position(|p| p.id == "v1").unwrap();
        assert_eq!(vertex, 2);
        assert_abs_diff_eq!(out[1].x, 1.0);
    }

    #[test]
    fn test_horizontal_extent_vertical_line_still_exact() {
        let geom = PlanarGeometry::new();
        let line = points(&[(0.0, 0.0), (0.0, 5.0), (0.0, 10.0)]);
        let out = Resampler::new(&geom)
            .with_allocation(AllocationStrategy::HorizontalExtent)
            .interpolate_to_count(&line, 7)
            .unwrap();
        assert_eq!(out.len(), 7);
        assert!(out.windows(2).all(|w| w[1].y > w[0].y));
    }

    #[test]
    fn test_horizontal_extent_backtracking_segment() {
        let geom = PlanarGeometry::new();
        // Middle segment runs against the overall direction (negative share)
        let line = points(&[(0.0, 0.0), (6.0, 1.0), (4.0, 2.0), (10.0, 3.0)]);
        let out = Resampler::new(&geom)
            .with_allocation(AllocationStrategy::HorizontalExtent)
            .interpolate_to_count(&line, 16)
            .unwrap();
        assert_eq!(out.len(), 16);
    }

    #[test]
    fn test_interpolate_single_point_repeats() {
        let geom = PlanarGeometry::new();
        let line = points(&[(2.0, 3.0)]);
        let out = Resampler::new(&geom)
            .interpolate_to_count(&line, 4)
            .unwrap();
        assert_eq!(out.len(), 4);
        assert_eq!(out[0].id, "v0");
        assert!(out[1..].iter().all(|p| p.coord() == Coord::new(2.0, 3.0)));
    }

    #[test]
    fn test_interpolate_errors() {
        let geom = PlanarGeometry::new();
        let resampler = Resampler::new(&geom);
        assert_eq!(
            resampler.interpolate_to_count(&[], 3),
            Err(GeometryError::EmptyLine { role: "resampled" })
        );
        let line = points(&[(0.0, 0.0), (1.0, 0.0), (2.0, 0.0)]);
        assert_eq!(
            resampler.interpolate_to_count(&line, 2),
            Err(GeometryError::TargetCountTooSmall { target: 2, len: 3 })
        );
    }

    #[test]
    fn test_resample_by_interval() {
        let geom = PlanarGeometry::new();
        let line = points(&[(0.0, 0.0), (10.0, 0.0)]);
        let out = Resampler::new(&geom)
            .resample_by_interval(&line, 3.0)
            .unwrap();

        let xs: Vec<f64> = out.iter().map(|p| p.x).collect();
        assert_eq!(out.len(), 5);
        assert_abs_diff_eq!(xs[1], 3.0, epsilon = 1e-9);
        assert_abs_diff_eq!(xs[3], 9.0, epsilon = 1e-9);
        assert_eq!(out[0].id, "v0");
        assert_eq!(out[4].id, "v1");
    }

    #[test]
    fn test_resample_by_interval_follows_corners() {
        let geom = PlanarGeometry::new();
        let line = points(&[(0.0, 0.0), (2.0, 0.0), (2.0, 2.0)]);
        let out = Resampler::new(&geom)
            .resample_by_interval(&line, 0.5)
            .unwrap();

        // 7 interior samples at 0.5..3.5, plus both endpoints
        assert_eq!(out.len(), 9);
        assert_abs_diff_eq!(out[6].x, 2.0, epsilon = 1e-9);
        assert_abs_diff_eq!(out[6].y, 1.0, epsilon = 1e-9);
    }

    #[test]
    fn test_resample_by_interval_keeps_endpoints_when_longer_than_line() {
        let geom = PlanarGeometry::new();
        let line = points(&[(0.0, 0.0), (1.0, 1.0)]);
        let out = Resampler::new(&geom)
            .resample_by_interval(&line, 5.0)
            .unwrap();
        assert_eq!(out, line);
    }

    #[test]
    fn test_resample_by_interval_rejects_bad_interval() {
        let geom = PlanarGeometry::new();
        let resampler = Resampler::new(&geom);
        let line = points(&[(0.0, 0.0), (1.0, 0.0)]);
        assert!(resampler.resample_by_interval(&line, 0.0).is_err());
        assert!(resampler.resample_by_interval(&line, -1.0).is_err());
        assert!(resampler.resample_by_interval(&line, f64::NAN).is_err());
    }

    #[test]
    fn test_sample_capacity_is_bounded() {
        assert_eq!(sample_capacity(10.0, 3.0), 4);
        assert_eq!(sample_capacity(0.0, 1.0), 0);
        assert_eq!(sample_capacity(1e300, 1e-300), MAX_PREALLOCATED_SAMPLES);
        assert_eq!(sample_capacity(f64::MAX, f64::MIN_POSITIVE), MAX_PREALLOCATED_SAMPLES);
        assert_eq!(sample_capacity(f64::NAN, 1.0), 0);
    }

    #[test]
    fn test_resample_by_interval_huge_ratio_line() {
        let geom = PlanarGeometry::new();
        // Far more samples than the preallocation bound
        let line = points(&[(0.0, 0.0), (1e6, 0.0)]);
        let out = Resampler::new(&geom)
            .resample_by_interval(&line, 10.0)
            .unwrap();
        assert_eq!(out.len(), 100_001);
        assert_abs_diff_eq!(out[50_000].x, 500_000.0, epsilon = 1e-6);
    }

    #[test]
    fn test_resample_by_interval_degenerate_passthrough() {
        let geom = PlanarGeometry::new();
        let line = points(&[(4.0, 4.0)]);
        let out = Resampler::new(&geom)
            .resample_by_interval(&line, 0.1)
            .unwrap();
        assert_eq!(out, line);
    }
}
