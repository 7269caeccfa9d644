//! Main RekhaConfig and loading.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::adjustment::AdjustmentConfig;
use super::attachment::AttachmentConfig;
use super::error::ConfigLoadError;
use super::generation::GenerationConfig;

/// Full rekha configuration loaded from YAML.
///
/// Every section and every key is optional; anything missing takes its
/// default.
///
/// ```
/// use rekha::config::RekhaConfig;
///
/// let config = RekhaConfig::from_yaml("adjustment:\n  query_buffer: 0.5\n").unwrap();
/// assert_eq!(config.adjustment.query_buffer, 0.5);
/// assert_eq!(config.generation.simplify_tolerance, 5.0);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RekhaConfig {
    /// Centerline generation settings
    #[serde(default)]
    pub generation: GenerationConfig,

    /// Centerline adjustment settings
    #[serde(default)]
    pub adjustment: AdjustmentConfig,

    /// Line attachment settings
    #[serde(default)]
    pub attachment: AttachmentConfig,
}

impl RekhaConfig {
    /// Load and validate configuration from a YAML file.
    pub fn load(path: &Path) -> Result<Self, ConfigLoadError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml(&contents)
    }

    /// Load from the default config path (configs/rekha.yaml), falling back
    /// to built-in defaults when the file does not exist.
    pub fn load_default() -> Result<Self, ConfigLoadError> {
        let path = Path::new("configs/rekha.yaml");
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Parse and validate from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigLoadError> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize to a YAML string.
    pub fn to_yaml(&self) -> Result<String, ConfigLoadError> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Check every section's value ranges.
    pub fn validate(&self) -> Result<(), ConfigLoadError> {
        self.generation.validate()?;
        self.adjustment.validate()?;
        self.attachment.validate()
    }

    /// Preset for inspecting attachment: debug lines on, no simplification.
    pub fn debug() -> Self {
        Self {
            attachment: AttachmentConfig::default()
                .with_debug(true)
                .with_simplify_tolerance(0.0),
            ..Self::default()
        }
    }

    /// Builder-style setter for the generation section.
    pub fn with_generation(mut self, generation: GenerationConfig) -> Self {
        self.generation = generation;
        self
    }

    /// Builder-style setter for the adjustment section.
    pub fn with_adjustment(mut self, adjustment: AdjustmentConfig) -> Self {
        self.adjustment = adjustment;
        self
    }

    /// Builder-style setter for the attachment section.
    pub fn with_attachment(mut self, attachment: AttachmentConfig) -> Self {
        self.attachment = attachment;
        self
    }
}
