//! Batch driver: progress bar, per-file reports on stdout, summary on stderr.

use std::io::Write;
use std::path::Path;

use anyhow::Context;
use resizer_core::{BatchRunner, BatchSummary, ReportFormat, ReportWriter};

/// Resize everything under `input`, streaming one report per file to `out`.
///
/// A fatal pipeline error is returned as-is so the process exits non-zero.
pub async fn run_batch<W: Write>(
    runner: &BatchRunner,
    input: &Path,
    format: ReportFormat,
    out: W,
) -> anyhow::Result<BatchSummary> {
    let plan = runner.plan(input)?;
    if plan.filtered > 0 {
        tracing::debug!("Skipped {} file(s) by extension", plan.filtered);
    }

    let progress = create_progress_bar(plan.candidates.len() as u64);
    crate::logging::set_active_progress(Some(progress.clone()));
    let mut writer = ReportWriter::new(out, format);
    let mut write_error = None;
    let start_time = std::time::Instant::now();

    let outcome = runner
        .execute(plan, |result| {
            progress.suspend(|| {
                if let Err(e) = writer.write(result) {
                    write_error.get_or_insert(e);
                }
            });
            progress.inc(1);
            let elapsed = start_time.elapsed().as_secs_f64();
            if elapsed > 0.0 {
                progress.set_message(format!("{:.1} img/sec", progress.position() as f64 / elapsed));
            }
        })
        .await;
    crate::logging::set_active_progress(None);
    progress.finish_and_clear();

    let summary = outcome?;
    if let Some(e) = write_error {
        return Err(e).context("Failed to write report");
    }
    writer.flush().context("Failed to flush report")?;
    Ok(summary)
}

/// Create a progress bar for batch processing.
fn create_progress_bar(total: u64) -> indicatif::ProgressBar {
    use indicatif::{ProgressBar, ProgressStyle};

    let pb = ProgressBar::new(total);
    pb.set_style(
        ProgressStyle::default_bar()
            .template(
                "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) {msg}",
            )
            .unwrap()
            .progress_chars("##-"),
    );
    pb.set_message("starting...");
    pb
}

/// Print a formatted summary table after batch processing.
pub fn print_summary(summary: &BatchSummary) {
    let elapsed = summary.elapsed.as_secs_f64();
    let mb_processed = summary.total_bytes as f64 / 1_000_000.0;
    let (rate, throughput) = if elapsed > 0.0 {
        (summary.processed() as f64 / elapsed, mb_processed / elapsed)
    } else {
        (0.0, 0.0)
    };

    eprintln!();
    eprintln!("  ====================================");
    eprintln!("               Summary");
    eprintln!("  ====================================");
    eprintln!("    Resized:      {:>8}", summary.resized);
    if summary.failed > 0 {
        eprintln!("    Failed:       {:>8}", summary.failed);
    }
    if summary.filtered > 0 {
        eprintln!("    Filtered:     {:>8}", summary.filtered);
    }
    eprintln!("  ------------------------------------");
    eprintln!("    Total:        {:>8}", summary.processed() + summary.filtered);
    eprintln!("    Duration:     {:>7.1}s", elapsed);
    eprintln!("    Rate:         {:>7.1} img/sec", rate);
    eprintln!("    Throughput:   {:>7.1} MB/sec", throughput);
    eprintln!("  ====================================");
}

/// Print the summary as a single JSON line on stderr.
pub fn print_summary_json(summary: &BatchSummary) -> anyhow::Result<()> {
    eprintln!("{}", serde_json::to_string(summary)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{DynamicImage, ImageFormat};
    use resizer_core::Config;

    fn runner_for(out_dir: &Path) -> BatchRunner {
        let mut config = Config::default();
        config.resize.width = 20;
        config.resize.prefix = Some("s".to_string());
        config.output.dir = Some(out_dir.to_path_buf());
        config.logging.quiet = true;
        BatchRunner::new(&config.validated().unwrap())
    }

    #[tokio::test]
    async fn text_report_lists_resized_files() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("in");
        let output = dir.path().join("out");
        std::fs::create_dir_all(&input).unwrap();
        DynamicImage::new_rgb8(40, 20)
            .save_with_format(input.join("a.jpg"), ImageFormat::Jpeg)
            .unwrap();
        std::fs::write(input.join("broken.jpg"), b"not a jpeg").unwrap();
        std::fs::write(input.join("notes.txt"), b"skip me").unwrap();

        let mut out = Vec::new();
        let summary = run_batch(&runner_for(&output), &input, ReportFormat::Text, &mut out)
            .await
            .unwrap();

        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.lines().count(), 1);
        assert!(text.starts_with("Resizing "));
        assert_eq!(summary.resized, 1);
        assert_eq!(summary.failed, 1);
        assert_eq!(summary.filtered, 1);
    }

    #[tokio::test]
    async fn jsonl_report_includes_failures() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("in");
        std::fs::create_dir_all(&input).unwrap();
        std::fs::write(input.join("broken.jpg"), b"not a jpeg").unwrap();

        let mut out = Vec::new();
        run_batch(
            &runner_for(&dir.path().join("out")),
            &input,
            ReportFormat::JsonLines,
            &mut out,
        )
        .await
        .unwrap();

        let line = String::from_utf8(out).unwrap();
        let value: serde_json::Value = serde_json::from_str(line.trim()).unwrap();
        assert_eq!(value["status"], "failed");
    }

    #[tokio::test]
    async fn missing_input_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = run_batch(
            &runner_for(dir.path()),
            &dir.path().join("nope"),
            ReportFormat::Text,
            Vec::<u8>::new(),
        )
        .await;
        assert!(result.is_err());
    }
}
