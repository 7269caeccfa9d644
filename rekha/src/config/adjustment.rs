//! Centerline adjustment settings.

use serde::{Deserialize, Serialize};

use super::defaults;
use super::error::{ConfigLoadError, require_non_negative, require_positive};

/// Configuration for [`CenterlineAdjuster`](crate::centerline::CenterlineAdjuster).
///
/// The defaults are tuned for small coordinate magnitudes; scale all three
/// together with the map units.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AdjustmentConfig {
    /// Arc-length step used to densify each centerline before recalibration.
    /// Default: 1e-3
    #[serde(default = "defaults::adjustment_densify_interval")]
    pub densify_interval: f64,

    /// Half-width of the square query window around each densified point.
    /// Only boundaries whose bounding box meets the window are considered.
    /// Default: 1e-5
    #[serde(default = "defaults::query_buffer")]
    pub query_buffer: f64,

    /// Douglas-Peucker tolerance applied to the recalibrated points.
    /// Default: 1e-4
    #[serde(default = "defaults::adjustment_simplify_tolerance")]
    pub simplify_tolerance: f64,
}

impl Default for AdjustmentConfig {
    fn default() -> Self {
        Self {
            densify_interval: defaults::adjustment_densify_interval(),
            query_buffer: defaults::query_buffer(),
            simplify_tolerance: defaults::adjustment_simplify_tolerance(),
        }
    }
}

impl AdjustmentConfig {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style setter for the densify interval.
    pub fn with_densify_interval(mut self, value: f64) -> Self {
        self.densify_interval = value;
        self
    }

    /// Builder-style setter for the query window half-width.
    pub fn with_query_buffer(mut self, value: f64) -> Self {
        self.query_buffer = value;
        self
    }

    /// Builder-style setter for the simplification tolerance.
    pub fn with_simplify_tolerance(mut self, value: f64) -> Self {
        self.simplify_tolerance = value;
        self
    }

    /// Check value ranges.
    pub fn validate(&self) -> Result<(), ConfigLoadError> {
        require_positive("adjustment.densify_interval", self.densify_interval)?;
        require_positive("adjustment.query_buffer", self.query_buffer)?;
        require_non_negative("adjustment.simplify_tolerance", self.simplify_tolerance)
    }
}
