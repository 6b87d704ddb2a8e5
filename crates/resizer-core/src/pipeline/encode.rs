//! Encoding resized images back into their source container format.

use image::codecs::jpeg::JpegEncoder;
use image::{ColorType, DynamicImage, ImageFormat};
use std::borrow::Cow;
use std::io::{Seek, Write};
use std::path::Path;

use crate::config::ResizeConfig;
use crate::error::ResizeError;

/// Writes images to an open destination stream.
#[derive(Debug, Clone, Copy)]
pub struct Encoder {
    jpeg_quality: u8,
}

impl Encoder {
    pub fn new(config: &ResizeConfig) -> Self {
        Self {
            jpeg_quality: config.jpeg_quality,
        }
    }

    /// Encode `image` as `format` into `writer` and flush it.
    ///
    /// The writer is consumed and dropped before returning, on success and on
    /// failure alike. Errors are reported against `path`, the destination.
    pub fn encode<W: Write + Seek>(
        &self,
        image: &DynamicImage,
        format: ImageFormat,
        mut writer: W,
        path: &Path,
    ) -> Result<(), ResizeError> {
        let encode_err = |message: String| ResizeError::Encode {
            path: path.to_path_buf(),
            message,
        };

        match format {
            ImageFormat::Jpeg => {
                let image = jpeg_compatible(image);
                let encoder = JpegEncoder::new_with_quality(&mut writer, self.jpeg_quality);
                image
                    .write_with_encoder(encoder)
                    .map_err(|e| encode_err(e.to_string()))?;
            }
            other => image
                .write_to(&mut writer, other)
                .map_err(|e| encode_err(e.to_string()))?,
        }

        writer.flush().map_err(|e| encode_err(e.to_string()))
    }
}

/// JPEG has no alpha channel or 16-bit samples.
fn jpeg_compatible(image: &DynamicImage) -> Cow<'_, DynamicImage> {
    match image.color() {
        ColorType::L8 | ColorType::Rgb8 => Cow::Borrowed(image),
        ColorType::La8 | ColorType::L16 | ColorType::La16 => {
            Cow::Owned(DynamicImage::ImageLuma8(image.to_luma8()))
        }
        _ => Cow::Owned(DynamicImage::ImageRgb8(image.to_rgb8())),
    }
}
