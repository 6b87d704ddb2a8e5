//! Core data types for the resizer pipeline.
//!
//! A [`JobResult`] is produced for every file that reaches the resize stage
//! and handed straight to the reporter; nothing here is persisted.

use serde::{Serialize, Serializer};
use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

use crate::error::{ErrorKind, ResizeError};

/// Pixel dimensions of an image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

impl Dimensions {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

impl fmt::Display for Dimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Outcome of one file's trip through the pipeline.
#[derive(Debug, Clone, Serialize)]
pub struct JobResult {
    /// Source file as discovered
    pub source: PathBuf,

    #[serde(flatten)]
    pub status: JobStatus,
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum JobStatus {
    Resized {
        /// Where the resized image was written
        destination: PathBuf,
        /// Container format, same for input and output ("jpeg", "png", ...)
        format: String,
        original: Dimensions,
        resized: Dimensions,
        /// Wall-clock time from open to encode completion
        #[serde(rename = "elapsed_ms", serialize_with = "serialize_millis")]
        elapsed: Duration,
    },
    Failed {
        kind: ErrorKind,
        message: String,
    },
}

impl JobResult {
    /// Build a failure record from a recoverable error.
    pub fn failed(source: PathBuf, error: &ResizeError) -> Self {
        Self {
            source,
            status: JobStatus::Failed {
                kind: error.kind(),
                message: error.to_string(),
            },
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self.status, JobStatus::Resized { .. })
    }

    /// Human-readable progress line, or `None` for failures (those are logged).
    ///
    /// `Resizing <path> <origW>x<origH> -> <newW>x<newH> in <duration>`
    pub fn progress_line(&self) -> Option<String> {
        match &self.status {
            JobStatus::Resized {
                original,
                resized,
                elapsed,
                ..
            } => Some(format!(
                "Resizing {} {} -> {} in {:?}",
                self.source.display(),
                original,
                resized,
                elapsed
            )),
            JobStatus::Failed { .. } => None,
        }
    }
}

fn serialize_millis<S: Serializer>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_f64(duration.as_micros() as f64 / 1000.0)
}

/// Aggregate accounting for a batch run.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct BatchSummary {
    /// Files resized and written
    pub resized: u64,
    /// Files skipped after a recoverable error
    pub failed: u64,
    /// Files rejected by the extension filter (never opened)
    pub filtered: u64,
    /// Total size of candidate files in bytes
    pub total_bytes: u64,
    /// Wall-clock time for the whole batch
    #[serde(rename = "elapsed_ms", serialize_with = "serialize_millis")]
    pub elapsed: Duration,
}

impl BatchSummary {
    /// Files that reached the resize stage.
    pub fn processed(&self) -> u64 {
        self.resized + self.failed
    }

    pub(crate) fn record(&mut self, result: &JobResult) {
        if result.is_success() {
            self.resized += 1;
        } else {
            self.failed += 1;
        }
    }
}
