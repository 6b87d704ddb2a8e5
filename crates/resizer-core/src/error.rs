//! Error types for the resizer pipeline.
//!
//! Every pipeline error carries a [`Severity`] that decides whether the batch
//! aborts or only the current file is skipped. The mapping lives in one place,
//! [`ResizeError::severity`], and the batch runner applies it uniformly.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;

/// Top-level error type for resizer operations.
#[derive(Error, Debug)]
pub enum ResizerError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Pipeline processing errors
    #[error("{0}")]
    Resize(#[from] ResizeError),
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read the config file from disk
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    /// Failed to parse TOML configuration
    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),

    /// Configuration values are invalid
    #[error("Invalid configuration: {0}")]
    ValidationError(String),
}

/// Whether an error ends the whole batch or only the current file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    /// Abort the batch immediately
    Fatal,
    /// Log (unless quiet) and continue with the next file
    Recoverable,
}

/// Stable tag for an error, carried in failed job results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    NotFound,
    AccessDenied,
    Classify,
    Traversal,
    Open,
    Create,
    Decode,
    UnsupportedFormat,
    Encode,
    Worker,
}

/// Pipeline errors, organized by stage.
#[derive(Error, Debug)]
pub enum ResizeError {
    /// Input root does not exist
    #[error("Path not found: {0}")]
    NotFound(PathBuf),

    /// Input root cannot be stat-ed due to permissions
    #[error("Access denied: {0}")]
    AccessDenied(PathBuf),

    /// Input root could not be classified for another reason
    #[error("Cannot inspect {path}: {source}")]
    Classify {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Directory walk failed
    #[error("Listing files under {path} failed: {message}")]
    Traversal { path: PathBuf, message: String },

    /// Source file could not be opened
    #[error("Error opening {path}: {source}")]
    Open {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Destination file could not be created
    #[error("Creating output file {path} failed: {source}")]
    Create {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Image decoding failed
    #[error("Error decoding {path}: {message}")]
    Decode { path: PathBuf, message: String },

    /// Neither content nor extension identify a known format
    #[error("Unsupported format for {path}: {format}")]
    UnsupportedFormat { path: PathBuf, format: String },

    /// Encoding or flushing the destination failed
    #[error("Error encoding {path}: {message}")]
    Encode { path: PathBuf, message: String },

    /// A worker task panicked or was cancelled
    #[error("Worker failed on {path}: {message}")]
    Worker { path: PathBuf, message: String },
}

impl ResizeError {
    /// How the batch runner must treat this error.
    pub fn severity(&self) -> Severity {
        match self {
            Self::NotFound(_)
            | Self::AccessDenied(_)
            | Self::Classify { .. }
            | Self::Traversal { .. }
            | Self::Open { .. }
            | Self::Create { .. } => Severity::Fatal,
            Self::Decode { .. }
            | Self::UnsupportedFormat { .. }
            | Self::Encode { .. }
            | Self::Worker { .. } => Severity::Recoverable,
        }
    }

    /// The serializable tag for this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::NotFound(_) => ErrorKind::NotFound,
            Self::AccessDenied(_) => ErrorKind::AccessDenied,
            Self::Classify { .. } => ErrorKind::Classify,
            Self::Traversal { .. } => ErrorKind::Traversal,
            Self::Open { .. } => ErrorKind::Open,
            Self::Create { .. } => ErrorKind::Create,
            Self::Decode { .. } => ErrorKind::Decode,
            Self::UnsupportedFormat { .. } => ErrorKind::UnsupportedFormat,
            Self::Encode { .. } => ErrorKind::Encode,
            Self::Worker { .. } => ErrorKind::Worker,
        }
    }

    pub fn is_fatal(&self) -> bool {
        self.severity() == Severity::Fatal
    }
}

/// Convenience type alias for resizer results.
pub type Result<T> = std::result::Result<T, ResizerError>;

/// Convenience type alias for pipeline-specific results.
pub type PipelineResult<T> = std::result::Result<T, ResizeError>;
