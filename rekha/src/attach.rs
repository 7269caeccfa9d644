//! Snapping a polyline onto a target line.
//!
//! The endpoints stay where they are. Every interior vertex keeps its side
//! and direction relative to the target, but its distance to the target is
//! blended linearly from the start offset to the end offset, by how far its
//! projection has travelled along the target.

use log::{debug, trace, warn};

use crate::config::AttachmentConfig;
use crate::core::{Coord, Line, LineType, Point};
use crate::geometry::{GeometryPort, PlanarGeometry, Projection};
use crate::resample::Resampler;

/// Output of [`LineAttacher::attach`].
#[derive(Clone, Debug, PartialEq)]
pub struct AttachResult {
    /// The recalibrated line
    pub line: Line,
    /// Vertex-to-projection segments (debug mode only)
    pub debug_lines: Vec<Line>,
}

impl AttachResult {
    fn unchanged(line: &Line) -> Self {
        Self {
            line: line.clone(),
            debug_lines: Vec::new(),
        }
    }
}

/// Snaps lines onto a target with proportional offset recalibration.
///
/// # Example
/// ```rust
/// use rekha::attach::LineAttacher;
/// use rekha::config::AttachmentConfig;
/// use rekha::core::{Line, LineType};
///
/// let target = Line::from_coords("t", LineType::StopLine, [(0.0, 0.0), (10.0, 0.0)]);
/// let line = Line::from_coords("l", LineType::TopoLine, [(0.0, 1.0), (5.0, 4.0), (10.0, 1.0)]);
///
/// let attacher = LineAttacher::new(AttachmentConfig::new().with_densify_interval(0.5));
/// let result = attacher.attach(&line, &target);
/// assert!(result.line.points.iter().all(|p| (p.y - 1.0).abs() < 1e-9));
/// ```
#[derive(Clone, Debug, Default)]
pub struct LineAttacher<G = PlanarGeometry> {
    port: G,
    config: AttachmentConfig,
}

impl LineAttacher<PlanarGeometry> {
    /// Create an attacher with the planar port and the given config.
    pub fn new(config: AttachmentConfig) -> Self {
        Self::with_port(PlanarGeometry, config)
    }
}

impl<G: GeometryPort> LineAttacher<G> {
    /// Create an attacher over a custom geometry port.
    pub fn with_port(port: G, config: AttachmentConfig) -> Self {
        Self { port, config }
    }

    /// Get the configuration.
    pub fn config(&self) -> &AttachmentConfig {
        &self.config
    }

    /// Attach `line` onto `target`.
    ///
    /// Lines with fewer than two points, and empty targets, are returned
    /// unchanged with no debug lines. The output keeps `line`'s id and type
    /// and its original first and last points.
    pub fn attach(&self, line: &Line, target: &Line) -> AttachResult {
        let [first, .., last] = line.points.as_slice() else {
            trace!("Attach no-op: line {} has {} points", line.id, line.len());
            return AttachResult::unchanged(line);
        };

        let target_coords = target.coords();
        let project = |c: Coord| self.port.nearest_point_on_line(&target_coords, c);
        let (Some(start), Some(end)) = (project(first.coord()), project(last.coord())) else {
            trace!("Attach no-op: target {} is empty", target.id);
            return AttachResult::unchanged(line);
        };

        let dense = match Resampler::new(&self.port)
            .resample_by_interval(&line.points, self.config.densify_interval)
        {
            Ok(dense) => dense,
            Err(e) => {
                warn!("Attach no-op for line {}: {}", line.id, e);
                return AttachResult::unchanged(line);
            }
        };

        let interior = &dense[1..dense.len() - 1];
        let Some(projections) = interior
            .iter()
            .map(|p| project(p.coord()))
            .collect::<Option<Vec<Projection>>>()
        else {
            return AttachResult::unchanged(line);
        };

        // Running length along the projections, from the start projection
        let mut arc = Vec::with_capacity(projections.len());
        let mut previous = start.point;
        let mut travelled = 0.0;
        for projection in &projections {
            travelled += self.port.distance(previous, projection.point);
            arc.push(travelled);
            previous = projection.point;
        }
        let total = travelled + self.port.distance(previous, end.point);

        let mut points = Vec::with_capacity(dense.len());
        let mut debug_lines = Vec::new();
        points.push(first.clone());
        for ((vertex, projection), &s) in interior.iter().zip(&projections).zip(&arc) {
            let fraction = if total > 0.0 { s / total } else { 0.0 };
            let offset = start.distance + fraction * (end.distance - start.distance);
            let bearing = self.port.bearing(projection.point, vertex.coord());
            let moved = self.port.destination(projection.point, offset, bearing);

            if self.config.debug {
                debug_lines.push(Line::from_coords(
                    "",
                    LineType::DebugLine,
                    [moved, projection.point],
                ));
            }
            points.push(Point::synthesized(moved));
        }
        points.push(last.clone());

        let points = if self.config.debug {
            points
        } else {
            self.port.simplify(&points, self.config.simplify_tolerance)
        };

        debug!(
            "Attached {} onto {}: offsets {:.4} -> {:.4}, {} samples, {} kept",
            line.id,
            target.id,
            start.distance,
            end.distance,
            dense.len(),
            points.len()
        );

        AttachResult {
            line: Line::new(line.id.clone(), line.line_type, points),
            debug_lines,
        }
    }
}
