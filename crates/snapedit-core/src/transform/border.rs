//! Black matte border.

use super::TransformError;
use crate::ImageBuffer;

/// Surround an image with a black border of the given width.
///
/// The result is `(width + 2*size) x (height + 2*size)`: a black
/// `(0,0,0)` canvas with the original pasted at offset `(size, size)`.
/// The source is not modified.
///
/// # Errors
///
/// `TransformError::InvalidSize` if `size` is zero or negative.
pub fn add_border(image: &ImageBuffer, size: i32) -> Result<ImageBuffer, TransformError> {
    if size <= 0 {
        return Err(TransformError::InvalidSize { size });
    }
    let size = size as u32;

    let out_width = image.width + 2 * size;
    let out_height = image.height + 2 * size;

    let row_bytes = image.width as usize * 3;
    let out_row_bytes = out_width as usize * 3;

    // Zeroed allocation doubles as the black fill
    let mut output = vec![0u8; out_height as usize * out_row_bytes];

    for y in 0..image.height {
        let src_start = y as usize * row_bytes;
        let dst_start = ((y + size) as usize * out_width as usize + size as usize) * 3;
        output[dst_start..dst_start + row_bytes]
            .copy_from_slice(&image.pixels[src_start..src_start + row_bytes]);
    }

    Ok(ImageBuffer {
        width: out_width,
        height: out_height,
        pixels: output,
    })
}


// ============================================================================
// Property-Based Tests
// ============================================================================
