//! Extension allow-list filtering.

use std::path::Path;

use crate::config::ProcessingConfig;

/// Decides whether a discovered file is eligible for resizing.
#[derive(Debug, Clone)]
pub struct ExtensionFilter {
    /// Lowercased suffixes including the leading dot, e.g. ".jpg"
    suffixes: Vec<String>,
    force: bool,
}

impl ExtensionFilter {
    /// Build a filter from an allow-list of extensions (with or without dots).
    pub fn new<S: AsRef<str>>(extensions: &[S], force: bool) -> Self {
        let suffixes = extensions
            .iter()
            .map(|ext| format!(".{}", ext.as_ref().trim_start_matches('.').to_lowercase()))
            .collect();
        Self { suffixes, force }
    }

    pub fn from_config(config: &ProcessingConfig) -> Self {
        Self::new(&config.supported_formats, config.force)
    }

    /// Accept when forced, otherwise when the lowercased path ends with an
    /// allowed suffix.
    pub fn accepts(&self, path: &Path) -> bool {
        if self.force {
            return true;
        }
        let lowered = path.to_string_lossy().to_lowercase();
        self.suffixes.iter().any(|suffix| lowered.ends_with(suffix))
    }
}
