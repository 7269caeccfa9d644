//! Error types for rekha.
//!
//! Only invariant violations and invalid arguments surface as errors.
//! Under-determined geometry (isolated samples, lines that collapse below
//! two points) is skipped locally by the algorithms and never reaches here.

/// Result type alias
pub type Result<T> = std::result::Result<T, GeometryError>;

/// Geometry error types
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GeometryError {
    /// A line that must have at least one point has none
    #[error("{role} line has no points")]
    EmptyLine {
        /// Which input was empty
        role: &'static str,
    },

    /// Requested fewer points than the line already has
    #[error("cannot resample {len} points down to {target}")]
    TargetCountTooSmall {
        /// Requested output length
        target: usize,
        /// Input length
        len: usize,
    },

    /// Densify interval is zero, negative or not finite
    #[error("resample interval must be finite and positive, got {0}")]
    InvalidInterval(f64),

    /// Paired boundary resampling produced different lengths
    #[error("boundary lengths differ after interpolation: left {left}, right {right}")]
    LengthMismatch {
        /// Left boundary point count
        left: usize,
        /// Right boundary point count
        right: usize,
    },
}
