//! Dimensional resize of decoded images.

use image::imageops::FilterType;
use image::DynamicImage;

use crate::config::ResizeConfig;
use crate::types::Dimensions;

/// Resizes images to the configured target geometry.
#[derive(Debug, Clone, Copy)]
pub struct Resizer {
    width: u32,
    height: u32,
    filter: FilterType,
}

impl Resizer {
    /// Create a new resizer with the given configuration.
    pub fn new(config: &ResizeConfig) -> Self {
        Self::with_target(config.width, config.height, config.filter.into())
    }

    pub fn with_target(width: u32, height: u32, filter: FilterType) -> Self {
        Self {
            width,
            height,
            filter,
        }
    }

    /// Output dimensions for a source of the given size.
    pub fn target_for(&self, source: Dimensions) -> Dimensions {
        target_dimensions(source, self.width, self.height)
    }

    /// Resample `image` to the target geometry.
    ///
    /// When the target equals the source (including the both-zero identity
    /// request) the image is returned untouched.
    pub fn resize(&self, image: DynamicImage) -> DynamicImage {
        let source = Dimensions::new(image.width(), image.height());
        let target = self.target_for(source);
        if target == source {
            return image;
        }
        image.resize_exact(target.width, target.height, self.filter)
    }
}

/// Compute output dimensions.
///
/// A zero target is derived from the other axis using the same scale factor,
/// rounded as `floor(0.7 + size / scale)` and clamped to at least 1. Both
/// zero keeps the source size.
pub fn target_dimensions(source: Dimensions, width: u32, height: u32) -> Dimensions {
    if source.width == 0 || source.height == 0 {
        return source;
    }

    let (src_w, src_h) = (f64::from(source.width), f64::from(source.height));
    let (scale_x, scale_y) = match (width, height) {
        (0, 0) => return source,
        (0, h) => {
            let s = src_h / f64::from(h);
            (s, s)
        }
        (w, 0) => {
            let s = src_w / f64::from(w);
            (s, s)
        }
        (w, h) => (src_w / f64::from(w), src_h / f64::from(h)),
    };

    let derive = |requested: u32, size: f64, scale: f64| -> u32 {
        if requested != 0 {
            requested
        } else {
            ((0.7 + size / scale) as u32).max(1)
        }
    };

    Dimensions::new(
        derive(width, src_w, scale_x),
        derive(height, src_h, scale_y),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dims(w: u32, h: u32) -> Dimensions {
        Dimensions::new(w, h)
    }

    #[test]
    fn test_width_only_preserves_aspect() {
        assert_eq!(target_dimensions(dims(200, 100), 100, 0), dims(100, 50));
        assert_eq!(target_dimensions(dims(300, 200), 150, 0), dims(150, 100));
    }

    #[test]
    fn test_height_only_preserves_aspect() {
        assert_eq!(target_dimensions(dims(200, 100), 0, 25), dims(50, 25));
    }

    #[test]
    fn test_both_given_is_exact() {
        assert_eq!(target_dimensions(dims(200, 100), 64, 64), dims(64, 64));
    }

    #[test]
    fn test_both_zero_is_identity() {
        assert_eq!(target_dimensions(dims(123, 45), 0, 0), dims(123, 45));
    }

    #[test]
    fn test_rounding_bias() {
        // 333/2 = 166.5 -> 167; 67/2 = 33.5 -> 34; 101/2 = 50.5 -> 51
        assert_eq!(target_dimensions(dims(333, 100), 0, 50), dims(167, 50));
        assert_eq!(target_dimensions(dims(100, 67), 50, 0), dims(50, 34));
        assert_eq!(target_dimensions(dims(200, 101), 100, 0), dims(100, 51));
    }

    #[test]
    fn test_derived_dimension_never_zero() {
        assert_eq!(target_dimensions(dims(1000, 1), 10, 0), dims(10, 1));
    }

    #[test]
    fn test_resize_produces_target_size() {
        let resizer = Resizer::new(&ResizeConfig {
            width: 100,
            ..Default::default()
        });
        let out = resizer.resize(DynamicImage::new_rgb8(200, 100));
        assert_eq!((out.width(), out.height()), (100, 50));
    }

    #[test]
    fn test_resize_identity_returns_input() {
        let resizer = Resizer::with_target(0, 0, FilterType::Lanczos3);
        let out = resizer.resize(DynamicImage::new_rgb8(17, 9));
        assert_eq!((out.width(), out.height()), (17, 9));
    }
}
