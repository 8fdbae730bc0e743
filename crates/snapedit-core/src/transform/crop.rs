//! Image cropping.

use super::TransformError;
use crate::ImageBuffer;

/// Crop a rectangle out of an image.
///
/// The rectangle is given as two corners in source pixel coordinates:
/// `(x1, y1)` inclusive top-left, `(x2, y2)` exclusive bottom-right.
/// The contract is strict: `x1 < x2`, `y1 < y2`, and the rectangle must
/// lie entirely inside the image. A degenerate, inverted, or
/// out-of-range rectangle is an error, not something to be repaired.
///
/// # Returns
///
/// A new `ImageBuffer` of size `(x2-x1) x (y2-y1)` whose pixel `(i, j)`
/// equals the source's pixel `(x1+i, y1+j)`. The source is not modified.
///
/// # Errors
///
/// `TransformError::InvalidBounds` on any contract violation.
pub fn crop(
    image: &ImageBuffer,
    x1: u32,
    y1: u32,
    x2: u32,
    y2: u32,
) -> Result<ImageBuffer, TransformError> {
    if x1 >= x2 || y1 >= y2 || x2 > image.width || y2 > image.height {
        return Err(TransformError::InvalidBounds {
            x1,
            y1,
            x2,
            y2,
            width: image.width,
            height: image.height,
        });
    }

    let out_width = x2 - x1;
    let out_height = y2 - y1;

    let row_bytes = out_width as usize * 3;
    let mut output = vec![0u8; out_height as usize * row_bytes];

    // Copy whole rows at a time
    for y in 0..out_height {
        let src_start = ((y1 + y) as usize * image.width as usize + x1 as usize) * 3;
        let dst_start = y as usize * row_bytes;
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

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    /// Dimensions stay small so the pixel-by-pixel checks stay fast.
    fn dimensions_strategy() -> impl Strategy<Value = (u32, u32)> {
        (4u32..=64, 4u32..=64)
    }

    /// Gray image whose pixel value encodes its position.
    fn create_test_image(width: u32, height: u32) -> ImageBuffer {
        let mut pixels = Vec::with_capacity(width as usize * height as usize * 3);
        for y in 0..height {
            for x in 0..width {
                let v = ((y * width + x) % 256) as u8;
                pixels.extend_from_slice(&[v, v, v]);
            }
        }
        ImageBuffer {
            width,
            height,
            pixels,
        }
    }

    /// Strategy producing image dimensions plus a valid crop rectangle.
    fn image_and_rect() -> impl Strategy<Value = (u32, u32, u32, u32, u32, u32)> {
        dimensions_strategy()
            .prop_flat_map(|(w, h)| (Just(w), Just(h), 0..w, 0..h))
            .prop_flat_map(|(w, h, x1, y1)| {
                (Just(w), Just(h), Just(x1), Just(y1), (x1 + 1)..=w, (y1 + 1)..=h)
            })
    }

    proptest! {
        /// Property: A valid rectangle yields exactly its own size.
        #[test]
        fn prop_valid_crop_dimensions(
            (width, height, x1, y1, x2, y2) in image_and_rect(),
        ) {
            let img = create_test_image(width, height);
            let result = crop(&img, x1, y1, x2, y2).unwrap();

            prop_assert_eq!(result.width, x2 - x1);
            prop_assert_eq!(result.height, y2 - y1);
            prop_assert_eq!(
                result.pixels.len(),
                (x2 - x1) as usize * (y2 - y1) as usize * 3
            );
        }

        /// Property: Every result pixel equals the corresponding source pixel.
        #[test]
        fn prop_crop_content_matches_source(
            (width, height, x1, y1, x2, y2) in image_and_rect(),
        ) {
            let img = create_test_image(width, height);
            let result = crop(&img, x1, y1, x2, y2).unwrap();

            for j in 0..result.height {
                for i in 0..result.width {
                    let src_idx = ((y1 + j) * width + (x1 + i)) as usize * 3;
                    let dst_idx = (j * result.width + i) as usize * 3;
                    prop_assert_eq!(
                        &result.pixels[dst_idx..dst_idx + 3],
                        &img.pixels[src_idx..src_idx + 3]
                    );
                }
            }
        }

        /// Property: Degenerate rectangles are always rejected.
        #[test]
        fn prop_degenerate_rect_rejected(
            (width, height) in dimensions_strategy(),
            x in 0u32..=64,
            y1 in 0u32..=64,
            y2 in 0u32..=64,
        ) {
            let img = create_test_image(width, height);
            // x1 == x2 can never satisfy the strict inequality
            prop_assert!(crop(&img, x, y1, x, y2).is_err());
        }

        /// Property: Out-of-range rectangles are always rejected.
        #[test]
        fn prop_out_of_range_rejected(
            (width, height) in dimensions_strategy(),
            overshoot in 1u32..=16,
        ) {
            let img = create_test_image(width, height);
            prop_assert!(crop(&img, 0, 0, width + overshoot, height).is_err());
            prop_assert!(crop(&img, 0, 0, width, height + overshoot).is_err());
        }

        /// Property: The same rectangle always yields the same bytes.
        #[test]
        fn prop_crop_is_deterministic(
            (width, height) in dimensions_strategy(),
        ) {
            let img = create_test_image(width, height);
            let a = crop(&img, 1, 1, width, height).unwrap();
            let b = crop(&img, 1, 1, width, height).unwrap();
            prop_assert_eq!(a.pixels, b.pixels);
        }
    }
}
