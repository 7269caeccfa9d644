//! # Rekha: Lane-Marking Centerline Geometry
//!
//! Derives, refines and snaps centerline polylines on a planar lane map.
//!
//! ## Features
//!
//! - **Generation**: centerline between a left/right boundary pair by paired
//!   interpolation and midpointing
//! - **Adjustment**: recenter existing centerlines between the nearest left
//!   and right boundaries, found through an R-tree
//! - **Attachment**: snap a polyline onto a target line, keeping the endpoint
//!   offsets and blending the offset in between
//!
//! ## Quick Start
//!
//! ```rust
//! use rekha::{Line, LineType, generate_center_line};
//!
//! let left = Line::from_coords("left", LineType::SolidWhite, [(0.0, 0.0), (10.0, 0.0)]);
//! let right = Line::from_coords("right", LineType::SolidWhite, [(0.0, 10.0), (10.0, 10.0)]);
//!
//! let center = generate_center_line(&left, &right).unwrap();
//! assert!(center.points.iter().all(|p| (p.y - 5.0).abs() < 1e-9));
//! ```
//!
//! ## Coordinate Frame
//!
//! Inputs must already be planar and metrically comparable. Bearings are
//! radians, counter-clockwise from +X. Nothing is reprojected.
//!
//! The default densify intervals and query buffer are tiny (1e-3, 1e-5),
//! matching degree-scale coordinates. Metre-scale maps should raise them
//! through [`RekhaConfig`].
//!
//! ## Architecture
//!
//! - [`core`]: value types (Coord, Point, Line, LineType, Bounds)
//! - [`geometry`]: [`GeometryPort`] trait and the `geo`-backed [`PlanarGeometry`]
//! - [`spatial`]: [`SpatialIndex`] trait and the `rstar`-backed [`LineIndex`]
//! - [`orientation`]: left/right side classification
//! - [`resample`]: count-based interpolation and fixed-interval densify
//! - [`centerline`]: [`CenterlineGenerator`] and [`CenterlineAdjuster`]
//! - [`attach`]: [`LineAttacher`]
//! - [`config`]: YAML configuration
//!
//! ## Data Flow
//!
//! ```text
//!   left + right boundary          all lines              line + target
//!            │                         │                        │
//!            ▼                         ▼                        ▼
//!   ┌──────────────────┐    ┌────────────────────┐    ┌──────────────────┐
//!   │ interpolate to   │    │ index bounds,      │    │ densify, project │
//!   │ |L|·|R| points,  │    │ densify centerline,│    │ onto target,     │
//!   │ midpoint pairs   │    │ nearest L/R, mid   │    │ blend offsets    │
//!   └────────┬─────────┘    └─────────┬──────────┘    └────────┬─────────┘
//!            │                        │                        │
//!            └──────────── Douglas-Peucker simplify ───────────┘
//! ```
//!
//! All operations are synchronous and pure: inputs are borrowed, outputs are
//! new lines. Logging goes through the `log` facade.

#![warn(missing_docs)]

pub mod attach;
pub mod centerline;
pub mod config;
pub mod core;
pub mod error;
pub mod geometry;
pub mod orientation;
pub mod resample;
pub mod spatial;

// Re-export main types at crate root
pub use attach::{AttachResult, LineAttacher};
pub use centerline::{CenterlineAdjuster, CenterlineGenerator};
pub use config::{
    AdjustmentConfig, AttachmentConfig, ConfigLoadError, GenerationConfig, RekhaConfig,
};
pub use self::core::{Bounds, Coord, Line, LineType, Point};
pub use error::{GeometryError, Result};
pub use resample::{AllocationStrategy, Resampler};

// Re-export extensibility traits
pub use geometry::{GeometryPort, PlanarGeometry, Projection};
pub use spatial::{LineIndex, SpatialIndex};

// ============================================================================
// Convenience entry points (default port, default config)
// ============================================================================

/// Generate the centerline between two boundary lines.
///
/// See [`CenterlineGenerator::generate`].
pub fn generate_center_line(left: &Line, right: &Line) -> Result<Line> {
    CenterlineGenerator::new(GenerationConfig::default()).generate(left, right)
}

/// Adjust every `center_line` in `lines` against the other lines.
///
/// See [`CenterlineAdjuster::adjust`].
pub fn adjust_center_lines(lines: &[Line]) -> Vec<Line> {
    CenterlineAdjuster::new(AdjustmentConfig::default()).adjust(lines)
}

/// Attach `line` onto `target`, optionally emitting debug segments.
///
/// See [`LineAttacher::attach`].
pub fn attach_line(line: &Line, target: &Line, debug: bool) -> AttachResult {
    LineAttacher::new(AttachmentConfig::default().with_debug(debug)).attach(line, target)
}
