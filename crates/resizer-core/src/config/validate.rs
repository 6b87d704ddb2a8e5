//! Configuration validation with range checks.

use crate::error::ConfigError;

use super::Config;

impl Config {
    /// Validate configuration values are within acceptable ranges.
    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        if self.resize.width == 0 && self.resize.height == 0 {
            return Err(ConfigError::ValidationError(
                "resize.width and resize.height cannot both be 0".into(),
            ));
        }
        if self.resize.jpeg_quality == 0 || self.resize.jpeg_quality > 100 {
            return Err(ConfigError::ValidationError(
                "resize.jpeg_quality must be between 1 and 100".into(),
            ));
        }
        if self.processing.parallel_workers == 0 {
            return Err(ConfigError::ValidationError(
                "processing.parallel_workers must be > 0".into(),
            ));
        }
        if !self.processing.force && self.processing.supported_formats.is_empty() {
            return Err(ConfigError::ValidationError(
                "processing.supported_formats must not be empty unless force is set".into(),
            ));
        }
        if let Some(prefix) = &self.resize.prefix {
            if prefix.contains('\0') {
                return Err(ConfigError::ValidationError(
                    "resize.prefix must not contain NUL bytes".into(),
                ));
            }
        }
        Ok(())
    }
}
