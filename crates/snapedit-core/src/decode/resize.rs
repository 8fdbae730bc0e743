//! Image resizing for the display preview.
//!
//! The editor shows images shrunk to fit a fixed display box while the
//! full-resolution buffer stays untouched. All functions here return new
//! [`ImageBuffer`](crate::ImageBuffer) instances without modifying the
//! input.

use super::{DecodeError, FilterType};
use crate::ImageBuffer;

/// Resample an image to exactly the given dimensions.
///
/// # Errors
///
/// Returns `DecodeError::EmptyImage` if either target dimension is zero,
/// or `DecodeError::CorruptedData` if the source buffer's invariant is
/// broken.
pub fn resize(
    image: &ImageBuffer,
    width: u32,
    height: u32,
    filter: FilterType,
) -> Result<ImageBuffer, DecodeError> {
    if width == 0 || height == 0 {
        return Err(DecodeError::EmptyImage);
    }

    // Already the right size, nothing to resample
    if image.width == width && image.height == height {
        return Ok(image.clone());
    }

    let rgb = image
        .to_rgb()
        .ok_or_else(|| DecodeError::CorruptedData("pixel length mismatch".to_string()))?;

    let resized = image::imageops::resize(&rgb, width, height, filter.to_image_filter());

    Ok(ImageBuffer::from_rgb(resized))
}

/// Shrink an image to fit within a bounding box, preserving aspect ratio.
///
/// Images already inside the box are returned unchanged; this never
/// upscales.
pub fn resize_to_box(
    image: &ImageBuffer,
    max_width: u32,
    max_height: u32,
    filter: FilterType,
) -> Result<ImageBuffer, DecodeError> {
    if max_width == 0 || max_height == 0 {
        return Err(DecodeError::EmptyImage);
    }

    if image.width <= max_width && image.height <= max_height {
        return Ok(image.clone());
    }

    let (new_width, new_height) = fit_dimensions(image.width, image.height, max_width, max_height);

    resize(image, new_width, new_height, filter)
}

/// Dimensions after scaling to fit a box, preserving aspect ratio.
///
/// The scale factor is the smaller of the two per-axis ratios, so one
/// axis lands exactly on its limit and the other inside it.
pub(crate) fn fit_dimensions(width: u32, height: u32, max_width: u32, max_height: u32) -> (u32, u32) {
    if width == 0 || height == 0 {
        return (0, 0);
    }

    let scale = (max_width as f64 / width as f64).min(max_height as f64 / height as f64);
    let new_width = (width as f64 * scale).round() as u32;
    let new_height = (height as f64 * scale).round() as u32;
    (new_width.max(1), new_height.max(1))
}
