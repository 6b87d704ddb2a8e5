//! Input classification and file discovery.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::error::ResizeError;

/// What an input root turned out to be.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathKind {
    File,
    Directory,
}

/// Classify an input path as a file or a directory.
///
/// Anything that exists and is not a directory counts as a file. Failing to
/// stat the path is fatal for the run.
pub fn classify(path: &Path) -> Result<PathKind, ResizeError> {
    let meta = std::fs::metadata(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => ResizeError::NotFound(path.to_path_buf()),
        ErrorKind::PermissionDenied => ResizeError::AccessDenied(path.to_path_buf()),
        _ => ResizeError::Classify {
            path: path.to_path_buf(),
            source: e,
        },
    })?;

    if meta.is_dir() {
        Ok(PathKind::Directory)
    } else {
        Ok(PathKind::File)
    }
}

/// Information about a discovered file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscoveredFile {
    /// Path as produced by the walk (root-relative if the root was relative)
    pub path: PathBuf,
    /// File size in bytes
    pub size: u64,
}

/// Expands an input root into candidate files.
#[derive(Debug, Clone, Copy, Default)]
pub struct FileDiscovery;

impl FileDiscovery {
    pub fn new() -> Self {
        Self
    }

    /// Discover every file reachable from `root`.
    ///
    /// A file root yields exactly that path. A directory root is walked
    /// recursively with entries sorted by name, so the order is stable for a
    /// given tree. Directories themselves are never yielded. Symlinks are
    /// followed; a link back to an ancestor directory is skipped. Any other
    /// walk error aborts discovery.
    pub fn discover(&self, root: &Path) -> Result<Vec<DiscoveredFile>, ResizeError> {
        match classify(root)? {
            PathKind::File => {
                let size = file_size(root, std::fs::metadata(root));
                Ok(vec![DiscoveredFile {
                    path: root.to_path_buf(),
                    size,
                }])
            }
            PathKind::Directory => self.walk(root),
        }
    }

    fn walk(&self, root: &Path) -> Result<Vec<DiscoveredFile>, ResizeError> {
        let mut files = Vec::new();

        for entry in WalkDir::new(root).follow_links(true).sort_by_file_name() {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) if e.loop_ancestor().is_some() => {
                    tracing::debug!("Skipping symlink loop: {}", e);
                    continue;
                }
                Err(e) => {
                    return Err(ResizeError::Traversal {
                        path: e
                            .path()
                            .map(Path::to_path_buf)
                            .unwrap_or_else(|| root.to_path_buf()),
                        message: e.to_string(),
                    })
                }
            };

            if !entry.file_type().is_file() {
                continue;
            }

            let size = file_size(entry.path(), entry.metadata().map_err(Into::into));
            files.push(DiscoveredFile {
                path: entry.into_path(),
                size,
            });
        }

        tracing::debug!("Discovered {} file(s) under {:?}", files.len(), root);
        Ok(files)
    }

    /// Get total size of all discovered files.
    pub fn total_size(files: &[DiscoveredFile]) -> u64 {
        files.iter().map(|f| f.size).sum()
    }
}

/// Size from a metadata lookup. An unreadable size counts as 0 in totals.
fn file_size(path: &Path, meta: std::io::Result<std::fs::Metadata>) -> u64 {
    match meta {
        Ok(meta) => meta.len(),
        Err(e) => {
            tracing::debug!("Cannot read size of {:?}: {}", path, e);
            0
        }
    }
}
