//! Command implementations and shared config loading.

pub mod config;
pub mod resize;

use resizer_core::{Config, ConfigError};
use std::path::{Path, PathBuf};

/// Expand a leading `~` in a user-supplied path.
pub fn expand_path(path: &Path) -> PathBuf {
    let path_str = path.to_string_lossy();
    PathBuf::from(shellexpand::tilde(&path_str).into_owned())
}

/// Load config from an explicit path, or from the default location.
///
/// An explicit path must exist; the default location may be absent.
pub fn load_config(path: Option<&Path>) -> Result<Config, ConfigError> {
    match path {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_missing_config_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load_config(Some(&dir.path().join("missing.toml"))).is_err());
    }

    #[test]
    fn explicit_config_is_loaded() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[resize]\nheight = 240\n").unwrap();
        let config = load_config(Some(&path)).unwrap();
        assert_eq!(config.resize.height, 240);
    }

    #[test]
    fn expand_path_leaves_plain_paths() {
        assert_eq!(expand_path(Path::new("/etc/x.toml")), PathBuf::from("/etc/x.toml"));
    }
}
