//! Configuration loading errors.

use thiserror::Error;

/// Errors that can occur when loading or validating configuration.
#[derive(Debug, Error)]
pub enum ConfigLoadError {
    /// IO error reading the file
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error
    #[error("YAML parse error: {0}")]
    Parse(#[from] serde_yaml::Error),

    /// A value is out of range
    #[error("invalid value for {field}: {reason}")]
    Invalid {
        /// Dotted path of the offending key
        field: &'static str,
        /// What is wrong with it
        reason: String,
    },
}

impl ConfigLoadError {
    pub(crate) fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        Self::Invalid {
            field,
            reason: reason.into(),
        }
    }
}

/// Reject anything that is not a finite, strictly positive number.
pub(crate) fn require_positive(field: &'static str, value: f64) -> Result<(), ConfigLoadError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigLoadError::invalid(
            field,
            format!("must be finite and positive, got {value}"),
        ))
    }
}

/// Reject negative or non-finite numbers (zero is allowed).
pub(crate) fn require_non_negative(field: &'static str, value: f64) -> Result<(), ConfigLoadError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigLoadError::invalid(
            field,
            format!("must be finite and non-negative, got {value}"),
        ))
    }
}
