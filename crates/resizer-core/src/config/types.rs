//! Sub-configuration structs with their defaults.

use image::imageops::FilterType;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Target geometry and encoding settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ResizeConfig {
    /// Target width in pixels (0 = derive from height, preserving aspect)
    pub width: u32,

    /// Target height in pixels (0 = derive from width, preserving aspect)
    pub height: u32,

    /// Output file prefix. Derived from the nonzero dimension when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prefix: Option<String>,

    /// Resampling filter
    pub filter: FilterKind,

    /// JPEG encoder quality (1-100)
    pub jpeg_quality: u8,
}

impl Default for ResizeConfig {
    fn default() -> Self {
        Self {
            width: 0,
            height: 0,
            prefix: None,
            filter: FilterKind::Lanczos3,
            jpeg_quality: 75,
        }
    }
}

impl ResizeConfig {
    /// The prefix token used for output names.
    ///
    /// An explicit non-empty prefix wins. Otherwise the width is used when
    /// nonzero, falling back to the height.
    pub fn resolved_prefix(&self) -> String {
        match self.prefix.as_deref() {
            Some(prefix) if !prefix.is_empty() => prefix.to_string(),
            _ if self.width != 0 => self.width.to_string(),
            _ => self.height.to_string(),
        }
    }
}

/// Resampling filters exposed to configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FilterKind {
    Nearest,
    Triangle,
    CatmullRom,
    Gaussian,
    #[default]
    Lanczos3,
}

impl From<FilterKind> for FilterType {
    fn from(kind: FilterKind) -> Self {
        match kind {
            FilterKind::Nearest => FilterType::Nearest,
            FilterKind::Triangle => FilterType::Triangle,
            FilterKind::CatmullRom => FilterType::CatmullRom,
            FilterKind::Gaussian => FilterType::Gaussian,
            FilterKind::Lanczos3 => FilterType::Lanczos3,
        }
    }
}

/// File selection and scheduling settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ProcessingConfig {
    /// Process every discovered file regardless of extension
    pub force: bool,

    /// Extensions accepted when `force` is off (compared case-insensitively)
    pub supported_formats: Vec<String>,

    /// Number of files resized concurrently (1 = strictly sequential)
    pub parallel_workers: usize,
}

impl Default for ProcessingConfig {
    fn default() -> Self {
        Self {
            force: false,
            supported_formats: vec!["jpeg".to_string(), "jpg".to_string()],
            parallel_workers: 1,
        }
    }
}

/// How destination paths are derived from source paths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NamingScheme {
    /// `<prefix>_<source path verbatim>`
    #[default]
    Flat,
    /// Mirror the input tree under the output dir, prefixing only file names
    Mirror,
}

/// Output location settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Naming scheme for destination files
    pub naming: NamingScheme,

    /// Base directory for outputs (defaults to the working directory)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dir: Option<PathBuf>,
}

/// Logging settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level: "error", "warn", "info", "debug", "trace"
    pub level: String,

    /// Log format: "pretty" or "json"
    pub format: String,

    /// Suppress per-file (recoverable) error logs
    pub quiet: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
            quiet: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefix_defaults_to_width() {
        let config = ResizeConfig {
            width: 150,
            height: 90,
            ..Default::default()
        };
        assert_eq!(config.resolved_prefix(), "150");
    }

    #[test]
    fn test_prefix_falls_back_to_height() {
        let config = ResizeConfig {
            height: 480,
            ..Default::default()
        };
        assert_eq!(config.resolved_prefix(), "480");
    }

    #[test]
    fn test_explicit_prefix_wins() {
        let config = ResizeConfig {
            width: 150,
            prefix: Some("out".to_string()),
            ..Default::default()
        };
        assert_eq!(config.resolved_prefix(), "out");
    }

    #[test]
    fn test_empty_prefix_is_derived() {
        let config = ResizeConfig {
            width: 64,
            prefix: Some(String::new()),
            ..Default::default()
        };
        assert_eq!(config.resolved_prefix(), "64");
    }

    #[test]
    fn test_filter_kind_maps_to_lanczos3() {
        assert_eq!(FilterType::from(FilterKind::default()), FilterType::Lanczos3);
    }

    #[test]
    fn test_naming_scheme_parses_lowercase() {
        let output: OutputConfig = toml::from_str("naming = \"mirror\"").unwrap();
        assert_eq!(output.naming, NamingScheme::Mirror);
        assert!(output.dir.is_none());
    }
}
