//! Batch orchestration: discover, filter, resize, report.

use futures_util::stream::{self, StreamExt};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;
use tokio::task::JoinError;

use crate::config::Config;
use crate::error::{ResizeError, Severity};
use crate::types::{BatchSummary, JobResult};

use super::discovery::{DiscoveredFile, FileDiscovery};
use super::filter::ExtensionFilter;
use super::job::ResizeJob;

/// Files selected for a run, in processing order.
#[derive(Debug, Clone)]
pub struct BatchPlan {
    /// Root the files were discovered from
    pub root: PathBuf,
    /// Files that passed the extension filter
    pub candidates: Vec<DiscoveredFile>,
    /// Number of files rejected by the filter
    pub filtered: u64,
}

/// Runs the resize pipeline over every file under a root.
pub struct BatchRunner {
    config: Config,
    discovery: FileDiscovery,
    filter: ExtensionFilter,
}

impl BatchRunner {
    /// Create a runner. `config` is expected to be validated already.
    pub fn new(config: &Config) -> Self {
        Self {
            config: config.clone(),
            discovery: FileDiscovery::new(),
            filter: ExtensionFilter::from_config(&config.processing),
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Discover and filter the files under `root`.
    ///
    /// Classification and traversal errors are fatal and returned as-is.
    /// Filter rejections are silent and only counted.
    pub fn plan(&self, root: &Path) -> Result<BatchPlan, ResizeError> {
        let discovered = self.discovery.discover(root)?;
        let total = discovered.len();

        let candidates: Vec<DiscoveredFile> = discovered
            .into_iter()
            .filter(|f| self.filter.accepts(&f.path))
            .collect();
        let filtered = (total - candidates.len()) as u64;

        tracing::debug!(
            "Planned {} of {} discovered file(s) ({} filtered)",
            candidates.len(),
            total,
            filtered
        );

        Ok(BatchPlan {
            root: root.to_path_buf(),
            candidates,
            filtered,
        })
    }

    /// Discover, filter, and resize everything under `root`.
    pub async fn run<F>(&self, root: &Path, report: F) -> Result<BatchSummary, ResizeError>
    where
        F: FnMut(&JobResult),
    {
        let plan = self.plan(root)?;
        self.execute(plan, report).await
    }

    /// Resize every candidate in `plan`, calling `report` once per file in
    /// plan order.
    ///
    /// Up to `processing.parallel_workers` files are in flight at once. The
    /// first fatal error stops the batch: no further files are started and
    /// the error is returned. Recoverable errors are logged (unless quiet)
    /// and reported as failed results.
    pub async fn execute<F>(&self, plan: BatchPlan, mut report: F) -> Result<BatchSummary, ResizeError>
    where
        F: FnMut(&JobResult),
    {
        let start = Instant::now();
        let mut summary = BatchSummary {
            filtered: plan.filtered,
            total_bytes: FileDiscovery::total_size(&plan.candidates),
            ..Default::default()
        };

        if plan.candidates.is_empty() {
            tracing::warn!("No supported image files found at {:?}", plan.root);
            summary.elapsed = start.elapsed();
            return Ok(summary);
        }

        let workers = self.config.processing.parallel_workers.max(1);
        let quiet = self.config.logging.quiet;
        let job = Arc::new(ResizeJob::new(&self.config, &plan.root));
        tracing::info!(
            "Resizing {} image(s) with {} worker(s)",
            plan.candidates.len(),
            workers
        );

        let mut outcomes = stream::iter(plan.candidates.into_iter().map(|file| {
            let job = Arc::clone(&job);
            async move {
                let path = file.path;
                let task_path = path.clone();
                let joined = tokio::task::spawn_blocking(move || job.run(&task_path)).await;
                let outcome = join_outcome(&path, joined);
                (path, outcome)
            }
        }))
        .buffered(workers);

        while let Some((path, outcome)) = outcomes.next().await {
            let result = match outcome {
                Ok(result) => result,
                Err(err) => match err.severity() {
                    Severity::Fatal => return Err(err),
                    Severity::Recoverable => {
                        if !quiet {
                            tracing::warn!("{}", err);
                        }
                        JobResult::failed(path, &err)
                    }
                },
            };

            summary.record(&result);
            report(&result);
        }

        summary.elapsed = start.elapsed();
        tracing::debug!(
            "Batch finished: {} resized, {} failed, {} filtered in {:?}",
            summary.resized,
            summary.failed,
            summary.filtered,
            summary.elapsed
        );
        Ok(summary)
    }
}

/// Flatten a blocking task's result. A panicked or cancelled job becomes a
/// recoverable `Worker` error for that file.
fn join_outcome(
    path: &Path,
    joined: Result<Result<JobResult, ResizeError>, JoinError>,
) -> Result<JobResult, ResizeError> {
    joined.unwrap_or_else(|e| {
        Err(ResizeError::Worker {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    })
}
