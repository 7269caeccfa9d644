//! Centerline generation settings.

use serde::{Deserialize, Serialize};

use super::defaults;
use super::error::{ConfigLoadError, require_non_negative};
use crate::resample::AllocationStrategy;

/// Configuration for [`CenterlineGenerator`](crate::centerline::CenterlineGenerator).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GenerationConfig {
    /// Douglas-Peucker tolerance applied to the raw midpoint line.
    /// Default: 5.0
    #[serde(default = "defaults::generation_simplify_tolerance")]
    pub simplify_tolerance: f64,

    /// How interpolated points are shared between boundary segments.
    /// Default: arc_length
    #[serde(default = "defaults::allocation")]
    pub allocation: AllocationStrategy,

    /// Id given to generated centerlines.
    /// Default: empty
    #[serde(default)]
    pub output_id: String,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            simplify_tolerance: defaults::generation_simplify_tolerance(),
            allocation: defaults::allocation(),
            output_id: String::new(),
        }
    }
}

impl GenerationConfig {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style setter for the simplification tolerance.
    pub fn with_simplify_tolerance(mut self, value: f64) -> Self {
        self.simplify_tolerance = value;
        self
    }

    /// Builder-style setter for the allocation strategy.
    pub fn with_allocation(mut self, value: AllocationStrategy) -> Self {
        self.allocation = value;
        self
    }

    /// Builder-style setter for the output line id.
    pub fn with_output_id(mut self, value: impl Into<String>) -> Self {
        self.output_id = value.into();
        self
    }

    /// Check value ranges.
    pub fn validate(&self) -> Result<(), ConfigLoadError> {
        require_non_negative("generation.simplify_tolerance", self.simplify_tolerance)
    }
}
