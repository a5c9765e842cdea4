//! Scale-and-center-crop of source images onto cell boxes

use crate::spatial::PixelRect;
use image::imageops::FilterType;
use image::{DynamicImage, RgbImage};

/// Resampling filter used when fitting images
pub const FIT_FILTER: FilterType = FilterType::Lanczos3;

/// Outcome of preparing one placement for compositing
///
/// Failures never cross the render loop: an image that cannot be loaded
/// becomes a blank cell showing the canvas background.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CellImage {
    /// Fitted pixels ready to paste
    Ready(RgbImage),
    /// Nothing to draw
    Blank,
}

/// Largest centered region of a `source_width` x `source_height` image with
/// the aspect ratio of `width` x `height`
///
/// The region keeps the full extent along one axis and is at least one pixel
/// along the other.
pub fn center_crop(source_width: u32, source_height: u32, width: u32, height: u32) -> PixelRect {
    let full = PixelRect {
        x: 0,
        y: 0,
        width: source_width,
        height: source_height,
    };

    // Cross-multiplied aspect ratios, exact in u64
    let source_cross = u64::from(source_width) * u64::from(height);
    let target_cross = u64::from(source_height) * u64::from(width);
    if width == 0 || height == 0 || source_cross == target_cross {
        return full;
    }

    if source_cross > target_cross {
        let kept = rounded_ratio(source_height, width, height).clamp(1, source_width);
        PixelRect {
            x: (source_width - kept) / 2,
            width: kept,
            ..full
        }
    } else {
        let kept = rounded_ratio(source_width, height, width).clamp(1, source_height);
        PixelRect {
            y: (source_height - kept) / 2,
            height: kept,
            ..full
        }
    }
}

// value * numerator / denominator, rounded to nearest
fn rounded_ratio(value: u32, numerator: u32, denominator: u32) -> u32 {
    let denominator = u64::from(denominator);
    let scaled = (u64::from(value) * u64::from(numerator) + denominator / 2) / denominator;
    u32::try_from(scaled).unwrap_or(u32::MAX)
}

/// Scale `image` to cover `width` x `height` and crop the overflow evenly
///
/// The crop happens in source coordinates before resampling, so the work is
/// bounded by the source and target sizes whatever the aspect ratio.
/// Aspect ratio is preserved and the result is exactly the requested size.
pub fn fit(image: &DynamicImage, width: u32, height: u32) -> RgbImage {
    if image.width() == width && image.height() == height {
        return image.to_rgb8();
    }
    if image.width() == 0 || image.height() == 0 {
        return RgbImage::new(width, height);
    }

    let region = center_crop(image.width(), image.height(), width, height);
    image
        .crop_imm(region.x, region.y, region.width, region.height)
        .resize_exact(width, height, FIT_FILTER)
        .to_rgb8()
}
