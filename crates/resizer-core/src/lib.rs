//! Resizer Core - batch image resizing engine.
//!
//! Takes a file or directory, finds candidate images, and writes a resized
//! copy of each under a derived name, continuing past per-file failures.
//!
//! # Architecture
//!
//! ```text
//! Root → Classify → Discover → Filter → [Open → Decode → Resize → Create → Encode] → Report
//! ```
//!
//! Every [`ResizeError`] carries a [`Severity`]: fatal errors (unreadable
//! root, traversal failure, source open, destination create) abort the batch;
//! recoverable ones (decode, encode) skip only the current file.
//!
//! # Usage
//!
//! ```rust,ignore
//! use resizer_core::{BatchRunner, Config};
//!
//! #[tokio::main]
//! async fn main() -> resizer_core::Result<()> {
//!     let mut config = Config::load()?;
//!     config.resize.width = 800;
//!     let config = config.validated()?;
//!
//!     let runner = BatchRunner::new(&config);
//!     let summary = runner
//!         .run(std::path::Path::new("./photos"), |r| {
//!             if let Some(line) = r.progress_line() {
//!                 println!("{line}");
//!             }
//!         })
//!         .await?;
//!     println!("{} resized, {} failed", summary.resized, summary.failed);
//!     Ok(())
//! }
//! ```

// Module declarations
pub mod config;
pub mod error;
pub mod pipeline;
pub mod report;
pub mod types;

// Re-exports for convenient access
pub use config::Config;
pub use error::{
    ConfigError, ErrorKind, PipelineResult, ResizeError, ResizerError, Result, Severity,
};
pub use pipeline::{BatchPlan, BatchRunner, DiscoveredFile, ResizeJob};
pub use report::{ReportFormat, ReportWriter};
pub use types::{BatchSummary, Dimensions, JobResult, JobStatus};

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
