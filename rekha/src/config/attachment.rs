//! Line attachment settings.

use serde::{Deserialize, Serialize};

use super::defaults;
use super::error::{ConfigLoadError, require_non_negative, require_positive};

/// Configuration for [`LineAttacher`](crate::attach::LineAttacher).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AttachmentConfig {
    /// Arc-length step used to densify the line being attached.
    /// Default: 1e-3
    #[serde(default = "defaults::attachment_densify_interval")]
    pub densify_interval: f64,

    /// Douglas-Peucker tolerance for the recalibrated line.
    /// Ignored in debug mode.
    /// Default: 1e-6
    #[serde(default = "defaults::attachment_simplify_tolerance")]
    pub simplify_tolerance: f64,

    /// Emit one vertex-to-projection line per recalibrated vertex and keep
    /// the full dense polyline.
    /// Default: false
    #[serde(default)]
    pub debug: bool,
}

impl Default for AttachmentConfig {
    fn default() -> Self {
        Self {
            densify_interval: defaults::attachment_densify_interval(),
            simplify_tolerance: defaults::attachment_simplify_tolerance(),
            debug: false,
        }
    }
}

impl AttachmentConfig {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style setter for the densify interval.
    pub fn with_densify_interval(mut self, value: f64) -> Self {
        self.densify_interval = value;
        self
    }

    /// Builder-style setter for the simplification tolerance.
    pub fn with_simplify_tolerance(mut self, value: f64) -> Self {
        self.simplify_tolerance = value;
        self
    }

    /// Builder-style setter for debug output.
    pub fn with_debug(mut self, enabled: bool) -> Self {
        self.debug = enabled;
        self
    }

    /// Check value ranges.
    pub fn validate(&self) -> Result<(), ConfigLoadError> {
        require_positive("attachment.densify_interval", self.densify_interval)?;
        require_non_negative("attachment.simplify_tolerance", self.simplify_tolerance)
    }
}
