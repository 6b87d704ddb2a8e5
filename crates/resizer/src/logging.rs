//! Logging initialization and configuration.
//!
//! Uses the `tracing` ecosystem for structured logging with support for
//! both human-readable and JSON output formats.

use indicatif::ProgressBar;
use std::io::{self, Write};
use std::sync::{PoisonError, RwLock};
use tracing_subscriber::{fmt, fmt::MakeWriter, prelude::*, EnvFilter};

/// Progress bar currently drawn on stderr, if any.
static ACTIVE_PROGRESS: RwLock<Option<ProgressBar>> = RwLock::new(None);

/// Register (or clear) the progress bar that log lines must not tear.
pub fn set_active_progress(bar: Option<ProgressBar>) {
    *ACTIVE_PROGRESS.write().unwrap_or_else(PoisonError::into_inner) = bar;
}

fn active_progress() -> Option<ProgressBar> {
    ACTIVE_PROGRESS
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .clone()
}

/// Stderr writer that suspends the active progress bar while a log line is
/// printed.
#[derive(Debug, Clone, Copy, Default)]
struct ProgressAwareStderr;

impl<'a> MakeWriter<'a> for ProgressAwareStderr {
    type Writer = EventBuffer;

    fn make_writer(&'a self) -> Self::Writer {
        EventBuffer(Vec::new())
    }
}

/// Buffers one formatted event and emits it on drop.
struct EventBuffer(Vec<u8>);

impl Write for EventBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Drop for EventBuffer {
    fn drop(&mut self) {
        if self.0.is_empty() {
            return;
        }
        let emit = || {
            let _ = io::stderr().lock().write_all(&self.0);
        };
        match active_progress() {
            Some(bar) => bar.suspend(emit),
            None => emit(),
        }
    }
}

/// Initialize the logging subsystem.
///
/// # Arguments
///
/// * `level` - Default filter directive when `RUST_LOG` is unset.
/// * `json_format` - If true, outputs structured JSON logs; otherwise pretty-printed.
///
/// # Notes
///
/// - Log output goes to stderr (stdout is reserved for per-file reports),
///   with any active progress bar suspended while a line is written
/// - The RUST_LOG environment variable can override the log level
pub fn init(level: &str, json_format: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    if json_format {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().json().with_writer(ProgressAwareStderr))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_writer(ProgressAwareStderr)
                    .with_ansi(true),
            )
            .init();
    }
}

/// Initialize logging from the `[logging]` config section, with CLI overrides.
pub fn init_from_config(
    config: &resizer_core::Config,
    verbose_override: bool,
    json_logs_override: bool,
) {
    let level = effective_level(&config.logging.level, verbose_override);
    let json_format = json_logs_override || config.logging.format == "json";
    init(level, json_format);
}

fn effective_level(configured: &str, verbose: bool) -> &str {
    if verbose && !matches!(configured, "debug" | "trace") {
        "debug"
    } else {
        configured
    }
}
