//! Image decoding with content-based format detection.

use image::{DynamicImage, GenericImageView, ImageFormat};
use std::io::{BufRead, Seek};
use std::path::Path;

use crate::error::ResizeError;

/// Result of decoding an image.
pub struct DecodedImage {
    /// The decoded image data
    pub image: DynamicImage,
    /// Detected image format, reused when encoding the output
    pub format: ImageFormat,
    /// Image width in pixels
    pub width: u32,
    /// Image height in pixels
    pub height: u32,
}

/// Decodes an already-opened source stream.
pub struct ImageDecoder;

impl ImageDecoder {
    /// Decode from a reader. `path` is used for the extension fallback and
    /// for error context only.
    ///
    /// The format is guessed from the leading bytes first; when they are not
    /// recognized the file extension decides. Every failure here is
    /// recoverable.
    pub fn decode<R: BufRead + Seek>(reader: R, path: &Path) -> Result<DecodedImage, ResizeError> {
        let mut reader = image::ImageReader::new(reader)
            .with_guessed_format()
            .map_err(|e| ResizeError::Decode {
                path: path.to_path_buf(),
                message: format!("Cannot detect image format: {}", e),
            })?;

        let format = match reader.format() {
            Some(f) => f,
            None => {
                let f = ImageFormat::from_path(path).map_err(|_| {
                    ResizeError::UnsupportedFormat {
                        path: path.to_path_buf(),
                        format: path
                            .extension()
                            .and_then(|e| e.to_str())
                            .unwrap_or("unknown")
                            .to_string(),
                    }
                })?;
                reader.set_format(f);
                f
            }
        };

        let image = reader.decode().map_err(|e| ResizeError::Decode {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        let (width, height) = image.dimensions();
        Ok(DecodedImage {
            image,
            format,
            width,
            height,
        })
    }
}

/// Convert an ImageFormat to a string representation.
pub fn format_to_string(format: ImageFormat) -> String {
    match format {
        ImageFormat::Jpeg => "jpeg".to_string(),
        ImageFormat::Png => "png".to_string(),
        ImageFormat::WebP => "webp".to_string(),
        ImageFormat::Gif => "gif".to_string(),
        ImageFormat::Tiff => "tiff".to_string(),
        ImageFormat::Bmp => "bmp".to_string(),
        ImageFormat::Ico => "ico".to_string(),
        ImageFormat::Pnm => "pnm".to_string(),
        ImageFormat::Avif => "avif".to_string(),
        _ => "unknown".to_string(),
    }
}
