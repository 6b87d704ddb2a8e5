//! Destination path derivation.
//!
//! `Flat` naming concatenates the prefix and the source path verbatim, so
//! `out` + `/img/a.jpg` becomes `out_/img/a.jpg`, a relative path resolved
//! against the output dir (or the working directory). `Mirror` naming keeps
//! the tree under the input root and prefixes only the file name, which
//! avoids flattening unrelated subdirectories into one namespace.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use crate::config::{Config, NamingScheme};

/// Derives destination paths for processed files.
#[derive(Debug, Clone)]
pub struct OutputNamer {
    prefix: String,
    scheme: NamingScheme,
    out_dir: Option<PathBuf>,
    input_root: PathBuf,
}

impl OutputNamer {
    pub fn new(
        prefix: impl Into<String>,
        scheme: NamingScheme,
        out_dir: Option<PathBuf>,
        input_root: impl Into<PathBuf>,
    ) -> Self {
        Self {
            prefix: prefix.into(),
            scheme,
            out_dir,
            input_root: input_root.into(),
        }
    }

    /// Namer for a run over `input_root` with the given configuration.
    pub fn from_config(config: &Config, input_root: &Path) -> Self {
        Self::new(
            config.resize.resolved_prefix(),
            config.output.naming,
            config.output_dir(),
            input_root,
        )
    }

    /// Destination path for `source`.
    pub fn destination(&self, source: &Path) -> PathBuf {
        let relative = match self.scheme {
            NamingScheme::Flat => flat_name(&self.prefix, source),
            NamingScheme::Mirror => self.mirrored_name(source),
        };
        match &self.out_dir {
            Some(dir) => dir.join(relative),
            None => relative,
        }
    }

    fn mirrored_name(&self, source: &Path) -> PathBuf {
        let relative = match source.strip_prefix(&self.input_root) {
            Ok(rel) if !rel.as_os_str().is_empty() => rel.to_path_buf(),
            // Single-file root
            Ok(_) => source.file_name().map(PathBuf::from).unwrap_or_default(),
            Err(_) => source.to_path_buf(),
        };

        let file_name = relative
            .file_name()
            .map(|name| prefixed(&self.prefix, name.to_os_string()))
            .unwrap_or_else(|| prefixed(&self.prefix, OsString::new()));

        // Absolute sources outside the root keep their tree minus the root marker
        let parent = relative
            .parent()
            .map(|p| {
                p.components()
                    .filter(|c| matches!(c, std::path::Component::Normal(_)))
                    .collect::<PathBuf>()
            })
            .unwrap_or_default();

        parent.join(file_name)
    }
}

/// `<prefix>_<source>`, with the source taken verbatim.
pub fn flat_name(prefix: &str, source: &Path) -> PathBuf {
    PathBuf::from(prefixed(prefix, source.as_os_str().to_os_string()))
}

fn prefixed(prefix: &str, rest: OsString) -> OsString {
    let mut name = OsString::from(prefix);
    name.push("_");
    name.push(rest);
    name
}
