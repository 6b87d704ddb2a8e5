//! Per-file report output as progress lines or JSON Lines.

use std::io::{self, Write};

use crate::types::JobResult;

/// Report format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportFormat {
    /// `Resizing <path> WxH -> WxH in <duration>` for each resized file
    #[default]
    Text,
    /// One JSON object per line (newline-delimited JSON), failures included
    JsonLines,
}

/// A writer that emits one report record per job result.
pub struct ReportWriter<W: Write> {
    writer: W,
    format: ReportFormat,
}

impl<W: Write> ReportWriter<W> {
    pub fn new(writer: W, format: ReportFormat) -> Self {
        Self { writer, format }
    }

    /// Write a single result.
    ///
    /// In text mode failed results produce nothing; they are surfaced
    /// through logging instead.
    pub fn write(&mut self, result: &JobResult) -> io::Result<()> {
        match self.format {
            ReportFormat::Text => {
                let Some(line) = result.progress_line() else {
                    return Ok(());
                };
                writeln!(self.writer, "{}", line)?;
            }
            ReportFormat::JsonLines => {
                serde_json::to_writer(&mut self.writer, result).map_err(io::Error::other)?;
                writeln!(self.writer)?;
            }
        }
        Ok(())
    }

    /// Flush the underlying writer.
    pub fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ResizeError;
    use crate::types::{Dimensions, JobStatus};
    use std::path::PathBuf;
    use std::time::Duration;

    fn ok_result() -> JobResult {
        JobResult {
            source: PathBuf::from("img/a.jpg"),
            status: JobStatus::Resized {
                destination: PathBuf::from("out_img/a.jpg"),
                format: "jpeg".to_string(),
                original: Dimensions::new(300, 200),
                resized: Dimensions::new(150, 100),
                elapsed: Duration::from_micros(1500),
            },
        }
    }

    fn failed_result() -> JobResult {
        let err = ResizeError::Decode {
            path: PathBuf::from("img/c.jpeg"),
            message: "bad".into(),
        };
        JobResult::failed(PathBuf::from("img/c.jpeg"), &err)
    }

    #[test]
    fn test_text_writes_progress_lines_only() {
        let mut buf = Vec::new();
        let mut writer = ReportWriter::new(&mut buf, ReportFormat::Text);
        writer.write(&ok_result()).unwrap();
        writer.write(&failed_result()).unwrap();

        let output = String::from_utf8(buf).unwrap();
        assert_eq!(output, "Resizing img/a.jpg 300x200 -> 150x100 in 1.5ms\n");
    }

    #[test]
    fn test_jsonl_writes_every_result() {
        let mut buf = Vec::new();
        let mut writer = ReportWriter::new(&mut buf, ReportFormat::JsonLines);
        writer.write(&ok_result()).unwrap();
        writer.write(&failed_result()).unwrap();
        writer.flush().unwrap();

        let output = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 2);

        let first: serde_json::Value = serde_json::from_str(lines[0]).unwrap();
        assert_eq!(first["status"], "resized");
        let second: serde_json::Value = serde_json::from_str(lines[1]).unwrap();
        assert_eq!(second["kind"], "decode");
    }
}
