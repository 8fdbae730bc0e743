//! JPEG encoding.
//!
//! Uses the `image` crate's JPEG encoder with a configurable quality
//! setting to balance file size and fidelity.

use image::codecs::jpeg::JpegEncoder;
use image::ExtendedColorType;
use image::ImageEncoder;
use std::io::Cursor;
use thiserror::Error;

use crate::ImageBuffer;

/// Ways a buffer can fail to become JPEG bytes.
#[derive(Debug, Error)]
pub enum EncodeError {
    /// The buffer's length invariant is broken.
    #[error("Pixel data is {actual} bytes, dimensions call for {expected}")]
    InvalidPixelData { expected: usize, actual: usize },

    /// A zero-sized buffer cannot be encoded.
    #[error("Cannot encode a {width}x{height} image")]
    InvalidDimensions { width: u32, height: u32 },

    /// The encoder itself rejected the image.
    #[error("JPEG encoder error: {0}")]
    EncodingFailed(String),
}

/// Encode an RGB buffer to JPEG bytes.
///
/// `quality` is clamped to 1-100 (90 is a sensible default for an
/// on-disk capture artifact; lower values trade fidelity for size).
///
/// # Errors
///
/// Returns `EncodeError::InvalidDimensions` for a zero-sized buffer and
/// `EncodeError::InvalidPixelData` if the buffer's length invariant is
/// broken.
pub fn encode_jpeg(image: &ImageBuffer, quality: u8) -> Result<Vec<u8>, EncodeError> {
    if image.width == 0 || image.height == 0 {
        return Err(EncodeError::InvalidDimensions {
            width: image.width,
            height: image.height,
        });
    }

    let expected_len = image.width as usize * image.height as usize * 3;
    if image.pixels.len() != expected_len {
        return Err(EncodeError::InvalidPixelData {
            expected: expected_len,
            actual: image.pixels.len(),
        });
    }

    let quality = quality.clamp(1, 100);

    let mut buffer = Cursor::new(Vec::new());
    let encoder = JpegEncoder::new_with_quality(&mut buffer, quality);

    encoder
        .write_image(
            &image.pixels,
            image.width,
            image.height,
            ExtendedColorType::Rgb8,
        )
        .map_err(|e| EncodeError::EncodingFailed(e.to_string()))?;

    Ok(buffer.into_inner())
}


// ============================================================================
// Property-Based Tests
// ============================================================================
