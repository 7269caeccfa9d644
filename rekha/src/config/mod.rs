//! Unified configuration loading for rekha.
//!
//! One YAML file, one section per algorithm.

mod adjustment;
mod attachment;
mod defaults;
mod error;
mod generation;
mod rekha;

pub use error::ConfigLoadError;
pub use self::rekha::RekhaConfig;

pub use adjustment::AdjustmentConfig;
pub use attachment::AttachmentConfig;
pub use generation::GenerationConfig;
