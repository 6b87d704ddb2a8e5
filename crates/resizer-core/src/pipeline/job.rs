//! One file through open → decode → resize → create → encode.

use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;
use std::time::Instant;

use crate::config::Config;
use crate::error::ResizeError;
use crate::types::{Dimensions, JobResult, JobStatus};

use super::decode::{format_to_string, ImageDecoder};
use super::encode::Encoder;
use super::naming::OutputNamer;
use super::resize::Resizer;

/// The per-file pipeline. Holds no per-file state and is shared read-only
/// between workers.
#[derive(Debug, Clone)]
pub struct ResizeJob {
    namer: OutputNamer,
    resizer: Resizer,
    encoder: Encoder,
}

impl ResizeJob {
    /// Create a job for a run over `input_root`.
    pub fn new(config: &Config, input_root: &Path) -> Self {
        Self {
            namer: OutputNamer::from_config(config, input_root),
            resizer: Resizer::new(&config.resize),
            encoder: Encoder::new(&config.resize),
        }
    }

    /// Run the pipeline for `source`.
    ///
    /// Any `Err` returned carries its own severity; callers decide whether to
    /// abort or continue from [`ResizeError::severity`]. A decode failure
    /// never creates a destination file, and an encode failure removes the
    /// partial one.
    pub fn run(&self, source: &Path) -> Result<JobResult, ResizeError> {
        let start = Instant::now();
        tracing::debug!("Resizing: {:?}", source);

        // Open
        let file = File::open(source).map_err(|e| ResizeError::Open {
            path: source.to_path_buf(),
            source: e,
        })?;

        // Decode (source handle is released when the reader drops)
        let decoded = ImageDecoder::decode(BufReader::new(file), source)?;
        let original = Dimensions::new(decoded.width, decoded.height);
        tracing::trace!("  Decode: {:?}", start.elapsed());

        // Resize
        let resize_start = Instant::now();
        let resized_image = self.resizer.resize(decoded.image);
        let resized = Dimensions::new(resized_image.width(), resized_image.height());
        tracing::trace!("  Resize: {:?}", resize_start.elapsed());

        // Create
        let destination = self.namer.destination(source);
        let out = create_destination(&destination)?;

        // Encode
        let encode_start = Instant::now();
        if let Err(e) = self
            .encoder
            .encode(&resized_image, decoded.format, out, &destination)
        {
            if let Err(rm) = std::fs::remove_file(&destination) {
                tracing::debug!("Could not remove partial output {:?}: {}", destination, rm);
            }
            return Err(e);
        }
        tracing::trace!("  Encode: {:?}", encode_start.elapsed());

        let elapsed = start.elapsed();
        tracing::debug!(
            "Resized {:?} {} -> {} in {:?}",
            source,
            original,
            resized,
            elapsed
        );

        Ok(JobResult {
            source: source.to_path_buf(),
            status: JobStatus::Resized {
                destination,
                format: format_to_string(decoded.format),
                original,
                resized,
                elapsed,
            },
        })
    }
}

/// Create (or truncate) the destination, creating missing parent directories.
fn create_destination(path: &Path) -> Result<BufWriter<File>, ResizeError> {
    let create_err = |e: std::io::Error| ResizeError::Create {
        path: path.to_path_buf(),
        source: e,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(create_err)?;
    }
    let file = File::create(path).map_err(create_err)?;
    Ok(BufWriter::new(file))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::NamingScheme;
    use image::{DynamicImage, ImageFormat};
    use std::path::PathBuf;

    fn config(out_dir: &Path, width: u32, height: u32) -> Config {
        let mut config = Config::default();
        config.resize.width = width;
        config.resize.height = height;
        config.resize.prefix = Some("out".to_string());
        config.output.naming = NamingScheme::Mirror;
        config.output.dir = Some(out_dir.to_path_buf());
        config
    }

    fn write_image(path: &Path, width: u32, height: u32, format: ImageFormat) {
        DynamicImage::new_rgb8(width, height)
            .save_with_format(path, format)
            .unwrap();
    }

    #[test]
    fn test_resizes_and_writes_destination() {
        let input = tempfile::tempdir().unwrap();
        let output = tempfile::tempdir().unwrap();
        let src = input.path().join("a.jpg");
        write_image(&src, 200, 100, ImageFormat::Jpeg);

        let job = ResizeJob::new(&config(output.path(), 100, 0), input.path());
        let result = job.run(&src).unwrap();

        let JobStatus::Resized {
            destination,
            format,
            original,
            resized,
            ..
        } = result.status
        else {
            panic!("expected a resized result");
        };
        assert_eq!(destination, output.path().join("out_a.jpg"));
        assert_eq!(format, "jpeg");
        assert_eq!(original, Dimensions::new(200, 100));
        assert_eq!(resized, Dimensions::new(100, 50));

        let written = image::open(&destination).unwrap();
        assert_eq!((written.width(), written.height()), (100, 50));
    }

    #[test]
    fn test_output_keeps_input_container() {
        let input = tempfile::tempdir().unwrap();
        let output = tempfile::tempdir().unwrap();
        let src = input.path().join("icon.png");
        write_image(&src, 64, 64, ImageFormat::Png);

        let job = ResizeJob::new(&config(output.path(), 0, 16), input.path());
        job.run(&src).unwrap();

        let dest = output.path().join("out_icon.png");
        assert_eq!(ImageFormat::from_path(&dest).unwrap(), ImageFormat::Png);
        let bytes = std::fs::read(&dest).unwrap();
        assert_eq!(image::guess_format(&bytes).unwrap(), ImageFormat::Png);
    }

    #[test]
    fn test_decode_failure_creates_no_destination() {
        let input = tempfile::tempdir().unwrap();
        let output = tempfile::tempdir().unwrap();
        let src = input.path().join("c.jpeg");
        std::fs::write(&src, b"corrupt bytes").unwrap();

        let job = ResizeJob::new(&config(output.path(), 50, 0), input.path());
        let err = job.run(&src).unwrap_err();

        assert!(matches!(err, ResizeError::Decode { .. }));
        assert!(!err.is_fatal());
        assert!(!output.path().join("out_c.jpeg").exists());
    }

    #[test]
    fn test_encode_failure_removes_partial_output() {
        let input = tempfile::tempdir().unwrap();
        let output = tempfile::tempdir().unwrap();
        let src = input.path().join("wide.jpg");
        write_image(&src, 4, 2, ImageFormat::Jpeg);

        // JPEG cannot store widths above 65535
        let job = ResizeJob::new(&config(output.path(), 70_000, 1), input.path());
        let err = job.run(&src).unwrap_err();

        assert!(matches!(err, ResizeError::Encode { .. }));
        assert!(!err.is_fatal());
        assert!(!output.path().join("out_wide.jpg").exists());
    }

    #[test]
    fn test_missing_source_is_fatal_open_error() {
        let output = tempfile::tempdir().unwrap();
        let job = ResizeJob::new(&config(output.path(), 50, 0), Path::new("/gone"));
        let err = job.run(Path::new("/gone/a.jpg")).unwrap_err();
        assert!(matches!(err, ResizeError::Open { .. }));
        assert!(err.is_fatal());
    }

    #[test]
    fn test_unwritable_destination_is_fatal_create_error() {
        let input = tempfile::tempdir().unwrap();
        let src = input.path().join("a.jpg");
        write_image(&src, 20, 20, ImageFormat::Jpeg);

        // A regular file where the output directory should be
        let blocker = input.path().join("blocker");
        std::fs::write(&blocker, b"").unwrap();

        let job = ResizeJob::new(&config(&blocker.join("out"), 10, 0), input.path());
        let err = job.run(&src).unwrap_err();
        assert!(matches!(err, ResizeError::Create { .. }));
        assert!(err.is_fatal());
    }

    #[test]
    fn test_create_destination_makes_parents() {
        let dir = tempfile::tempdir().unwrap();
        let dest: PathBuf = dir.path().join("out_").join("img").join("a.jpg");
        create_destination(&dest).unwrap();
        assert!(dest.is_file());
    }
}
