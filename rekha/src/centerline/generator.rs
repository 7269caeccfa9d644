//! Centerline generation from a left/right boundary pair.
//!
//! Both boundaries are resampled to the same point count, paired by index and
//! midpointed. The raw midpoint line is then simplified.

use log::debug;

use crate::config::GenerationConfig;
use crate::core::{Line, LineType, Point};
use crate::error::{GeometryError, Result};
use crate::geometry::{GeometryPort, PlanarGeometry};
use crate::resample::Resampler;

/// Builds a centerline between two boundary lines.
///
/// # Example
/// ```rust
/// use rekha::centerline::CenterlineGenerator;
/// use rekha::config::GenerationConfig;
/// use rekha::core::{Line, LineType};
///
/// let left = Line::from_coords("l", LineType::SolidWhite, [(0.0, 0.0), (10.0, 0.0)]);
/// let right = Line::from_coords("r", LineType::SolidWhite, [(0.0, 10.0), (10.0, 10.0)]);
///
/// let generator = CenterlineGenerator::new(GenerationConfig::default());
/// let center = generator.generate(&left, &right).unwrap();
/// assert!(center.is_center_line());
/// assert!(center.points.iter().all(|p| (p.y - 5.0).abs() < 1e-9));
/// ```
#[derive(Clone, Debug, Default)]
pub struct CenterlineGenerator<G = PlanarGeometry> {
    port: G,
    config: GenerationConfig,
}

impl CenterlineGenerator<PlanarGeometry> {
    /// Create a generator with the planar port and the given config.
    pub fn new(config: GenerationConfig) -> Self {
        Self::with_port(PlanarGeometry, config)
    }
}

impl<G: GeometryPort> CenterlineGenerator<G> {
    /// Create a generator over a custom geometry port.
    pub fn with_port(port: G, config: GenerationConfig) -> Self {
        Self { port, config }
    }

    /// Get the configuration.
    pub fn config(&self) -> &GenerationConfig {
        &self.config
    }

    /// Generate the centerline between `left` and `right`.
    ///
    /// Both lines are interpolated to `|left| * |right|` points, so every
    /// original vertex of either side has a partner on the other.
    ///
    /// # Errors
    /// - [`GeometryError::EmptyLine`] when either boundary has no points
    /// - [`GeometryError::LengthMismatch`] if the paired sequences disagree
    pub fn generate(&self, left: &Line, right: &Line) -> Result<Line> {
        if left.is_empty() {
            return Err(GeometryError::EmptyLine {
                role: "left boundary",
            });
        }
        if right.is_empty() {
            return Err(GeometryError::EmptyLine {
                role: "right boundary",
            });
        }

        let target = left.len() * right.len();
        let resampler = Resampler::new(&self.port).with_allocation(self.config.allocation);
        let left_points = resampler.interpolate_to_count(&left.points, target)?;
        let right_points = resampler.interpolate_to_count(&right.points, target)?;

        if left_points.len() != right_points.len() {
            return Err(GeometryError::LengthMismatch {
                left: left_points.len(),
                right: right_points.len(),
            });
        }

        let raw: Vec<Point> = left_points
            .iter()
            .zip(&right_points)
            .map(|(l, r)| Point::synthesized(l.coord().midpoint(r.coord())))
            .collect();

        let points = self.port.simplify(&raw, self.config.simplify_tolerance);
        debug!(
            "Generated centerline between {} ({} pts) and {} ({} pts): {} raw, {} kept",
            left.id,
            left.len(),
            right.id,
            right.len(),
            raw.len(),
            points.len()
        );

        Ok(Line::new(
            self.config.output_id.clone(),
            LineType::CenterLine,
            points,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resample::AllocationStrategy;
    use approx::assert_abs_diff_eq;

    fn boundary(id: &str, coords: &[(f64, f64)]) -> Line {
        Line::from_coords(id, LineType::SolidWhite, coords.iter().copied())
    }

    #[test]
    fn test_parallel_boundaries() {
        let left = boundary("l", &[(0.0, 0.0), (10.0, 0.0)]);
        let right = boundary("r", &[(0.0, 10.0), (10.0, 10.0)]);

        let center = CenterlineGenerator::new(GenerationConfig::new())
            .generate(&left, &right)
            .unwrap();
        assert_eq!(center.line_type, LineType::CenterLine);
        assert_eq!(center.id, "");
        assert!(center.len() >= 2);
        for p in &center.points {
            assert_abs_diff_eq!(p.y, 5.0, epsilon = 1e-9);
            assert!(p.is_synthesized());
        }
        assert_abs_diff_eq!(center.points[0].x, 0.0, epsilon = 1e-9);
        assert_abs_diff_eq!(center.points[center.len() - 1].x, 10.0, epsilon = 1e-9);
    }

    #[test]
    fn test_uneven_vertex_counts() {
        let left = boundary("l", &[(0.0, 0.0), (3.0, 0.0), (7.0, 0.0), (10.0, 0.0)]);
        let right = boundary("r", &[(0.0, 4.0), (10.0, 4.0)]);

        let config = GenerationConfig::new().with_simplify_tolerance(0.0);
        let center = CenterlineGenerator::new(config)
            .generate(&left, &right)
            .unwrap();

        // Collinear output collapses to its endpoints
        assert_eq!(center.len(), 2);
        assert!(center.points.iter().all(|p| (p.y - 2.0).abs() < 1e-9));
        assert_abs_diff_eq!(center.points[0].x, 0.0, epsilon = 1e-9);
    }

    #[test]
    fn test_output_id_and_legacy_allocation() {
        let left = boundary("l", &[(0.0, 0.0), (5.0, 1.0), (10.0, 0.0)]);
        let right = boundary("r", &[(0.0, 6.0), (5.0, 6.0), (10.0, 6.0)]);

        let config = GenerationConfig::new()
            .with_output_id("cl-7")
            .with_allocation(AllocationStrategy::HorizontalExtent)
            .with_simplify_tolerance(0.01);
        let center = CenterlineGenerator::new(config)
            .generate(&left, &right)
            .unwrap();

        assert_eq!(center.id, "cl-7");
        // Apex midpoint between (5, 1) and (5, 6)
        assert!(center
            .points
            .iter()
            .any(|p| (p.x - 5.0).abs() < 1e-9 && (p.y - 3.5).abs() < 1e-9));
    }

    #[test]
    fn test_simplification_is_plain_douglas_peucker() {
        let left = boundary(
            "l",
            &[(0.0, 0.0), (2.0, 0.4), (4.0, 0.0), (6.0, 0.4), (8.0, 0.0)],
        );
        let right = boundary("r", &[(0.0, 4.0), (8.0, 4.0)]);

        let coarse = CenterlineGenerator::new(GenerationConfig::new().with_simplify_tolerance(1.0))
            .generate(&left, &right)
            .unwrap();
        assert_eq!(coarse.len(), 2);

        // Same raw midpoints through the port's simplifier
        let fine_config = GenerationConfig::new().with_simplify_tolerance(0.01);
        let fine = CenterlineGenerator::new(fine_config.clone())
            .generate(&left, &right)
            .unwrap();
        let geom = PlanarGeometry::new();
        let resampler = Resampler::new(&geom);
        let l = resampler.interpolate_to_count(&left.points, 10).unwrap();
        let r = resampler.interpolate_to_count(&right.points, 10).unwrap();
        let raw: Vec<Point> = l
            .iter()
            .zip(&r)
            .map(|(a, b)| Point::synthesized(a.coord().midpoint(b.coord())))
            .collect();
        assert_eq!(fine.points, geom.simplify(&raw, fine_config.simplify_tolerance));
        assert!(fine.len() > 2);
    }

    #[test]
    fn test_single_point_boundary() {
        let left = boundary("l", &[(0.0, 0.0)]);
        let right = boundary("r", &[(0.0, 2.0), (4.0, 2.0)]);

        let config = GenerationConfig::new().with_simplify_tolerance(0.0);
        let center = CenterlineGenerator::new(config)
            .generate(&left, &right)
            .unwrap();
        assert_eq!(center.points[0].coord().y, 1.0);
        assert_abs_diff_eq!(center.points[center.len() - 1].x, 2.0, epsilon = 1e-9);
    }

    #[test]
    fn test_empty_boundary_is_error() {
        let empty = Line::new("e", LineType::SolidWhite, Vec::new());
        let right = boundary("r", &[(0.0, 2.0), (4.0, 2.0)]);
        let generator = CenterlineGenerator::new(GenerationConfig::new());

        assert_eq!(
            generator.generate(&empty, &right),
            Err(GeometryError::EmptyLine {
                role: "left boundary"
            })
        );
        assert_eq!(
            generator.generate(&right, &empty),
            Err(GeometryError::EmptyLine {
                role: "right boundary"
            })
        );
    }
}
