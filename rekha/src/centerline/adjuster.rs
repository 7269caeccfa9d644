//! Centerline adjustment against nearby boundary lines.
//!
//! Each centerline is densified, and every sample is moved to the midpoint
//! of the closest boundary on its left and the closest boundary on its right.
//! Candidate boundaries come from a bounding-box index queried with a small
//! window around the sample.
//!
//! Samples with a boundary on only one side are dropped, and so are lines
//! left with fewer than two samples. Neither is an error: one sparse region
//! must not fail a whole map.

use std::marker::PhantomData;

use log::{debug, trace, warn};

use crate::config::AdjustmentConfig;
use crate::core::{Bounds, Coord, Line, Point};
use crate::geometry::{GeometryPort, PlanarGeometry, Projection};
use crate::orientation::{Side, classify};
use crate::resample::Resampler;
use crate::spatial::{LineIndex, SpatialIndex};

/// Recenters `center_line` lines between their neighbouring boundaries.
///
/// `I` is the index built once per [`adjust`](Self::adjust) call over every
/// input line.
pub struct CenterlineAdjuster<G = PlanarGeometry, I = LineIndex<usize>> {
    port: G,
    config: AdjustmentConfig,
    _index: PhantomData<fn() -> I>,
}

impl CenterlineAdjuster<PlanarGeometry, LineIndex<usize>> {
    /// Create an adjuster with the planar port and R-tree index.
    pub fn new(config: AdjustmentConfig) -> Self {
        Self::with_port(PlanarGeometry, config)
    }
}

impl<G: Default, I> Default for CenterlineAdjuster<G, I> {
    fn default() -> Self {
        Self {
            port: G::default(),
            config: AdjustmentConfig::default(),
            _index: PhantomData,
        }
    }
}

/// Closest boundary projection found so far on each side of a sample.
#[derive(Default)]
struct SideBest {
    left: Option<Projection>,
    right: Option<Projection>,
}

impl SideBest {
    fn offer(&mut self, side: Side, projection: Projection) {
        let slot = match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        };
        if slot.is_none_or(|best| projection.distance < best.distance) {
            *slot = Some(projection);
        }
    }

    fn midpoint(&self) -> Option<Coord> {
        Some(self.left?.point.midpoint(self.right?.point))
    }
}

impl<G: GeometryPort, I: SpatialIndex<usize>> CenterlineAdjuster<G, I> {
    /// Create an adjuster over a custom geometry port.
    pub fn with_port(port: G, config: AdjustmentConfig) -> Self {
        Self {
            port,
            config,
            _index: PhantomData,
        }
    }

    /// Get the configuration.
    pub fn config(&self) -> &AdjustmentConfig {
        &self.config
    }

    /// Adjust every `center_line` in `lines`.
    ///
    /// All other lines serve as boundary geometry and are not returned.
    /// Output lines keep the id and type of their input, in input order.
    pub fn adjust(&self, lines: &[Line]) -> Vec<Line> {
        let coords: Vec<Vec<Coord>> = lines.iter().map(Line::coords).collect();
        let index = I::from_entries(
            lines
                .iter()
                .enumerate()
                .filter_map(|(i, line)| line.bounds().map(|b| (b, i))),
        );

        let mut adjusted = Vec::new();
        let mut dropped = 0usize;
        for line in lines.iter().filter(|l| l.is_center_line()) {
            match self.adjust_line(line, lines, &coords, &index) {
                Some(out) => adjusted.push(out),
                None => dropped += 1,
            }
        }

        debug!(
            "Adjusted {} centerlines ({} dropped) against {} indexed lines",
            adjusted.len(),
            dropped,
            index.len()
        );
        adjusted
    }

    fn adjust_line(
        &self,
        line: &Line,
        lines: &[Line],
        coords: &[Vec<Coord>],
        index: &I,
    ) -> Option<Line> {
        if line.is_degenerate() {
            trace!("Skipping degenerate centerline {} ({} points)", line.id, line.len());
            return None;
        }
        let origin = line.first()?.coord();

        let dense = match Resampler::new(&self.port)
            .resample_by_interval(&line.points, self.config.densify_interval)
        {
            Ok(dense) => dense,
            Err(e) => {
                warn!("Skipping centerline {}: {}", line.id, e);
                return None;
            }
        };

        let recentered: Vec<Point> = dense
            .iter()
            .filter_map(|p| self.recenter(p.coord(), origin, lines, coords, index))
            .map(Point::synthesized)
            .collect();

        if recentered.len() < 2 {
            debug!(
                "Dropping centerline {}: {} of {} samples had boundaries on both sides",
                line.id,
                recentered.len(),
                dense.len()
            );
            return None;
        }

        let points = self.port.simplify(&recentered, self.config.simplify_tolerance);
        trace!(
            "Centerline {}: {} samples, {} recentered, {} kept",
            line.id,
            dense.len(),
            recentered.len(),
            points.len()
        );
        Some(Line::new(line.id.clone(), line.line_type, points))
    }

    /// Midpoint of the closest left and right boundary projections of
    /// `sample`, if both exist.
    ///
    /// Sides are taken against `origin -> sample`, so the sample sitting on
    /// the origin itself never classifies and is dropped.
    fn recenter(
        &self,
        sample: Coord,
        origin: Coord,
        lines: &[Line],
        coords: &[Vec<Coord>],
        index: &I,
    ) -> Option<Coord> {
        let window = Bounds::around(sample, self.config.query_buffer);

        let mut best = SideBest::default();
        for candidate in index.query(&window) {
            if !lines[candidate].line_type.is_boundary() {
                continue;
            }
            let Some(projection) = self.port.nearest_point_on_line(&coords[candidate], sample)
            else {
                continue;
            };
            if let Some(side) = classify(origin, sample, projection.point) {
                best.offer(side, projection);
            }
        }
        best.midpoint()
    }
}
