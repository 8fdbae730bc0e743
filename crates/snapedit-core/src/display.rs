//! Display geometry for the scaled-down preview.
//!
//! The editor renders the current image shrunk into a fixed display box
//! and reports pointer positions in source coordinates. [`DisplayFit`]
//! captures the scale of one such rendering; it is recomputed whenever
//! a buffer is (re)displayed and never persisted.

use serde::{Deserialize, Serialize};

use crate::buffer::ImageBuffer;
use crate::decode::{self, DecodeError, FilterType};

/// Width of the display box in pixels.
pub const MAX_DISPLAY_WIDTH: u32 = 700;
/// Height of the display box in pixels.
pub const MAX_DISPLAY_HEIGHT: u32 = 500;

/// How an image maps onto the display box.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DisplayFit {
    /// Ratio of displayed size to source size, at most 1.0.
    pub scale: f64,
    /// Width of the rendered preview.
    pub display_width: u32,
    /// Height of the rendered preview.
    pub display_height: u32,
}

impl DisplayFit {
    /// Fit for the standard 700x500 display box.
    pub fn compute(width: u32, height: u32) -> Self {
        Self::for_box(width, height, MAX_DISPLAY_WIDTH, MAX_DISPLAY_HEIGHT)
    }

    /// Fit for an arbitrary box.
    ///
    /// The scale is `min(max_width/width, max_height/height)`, capped at
    /// 1.0: an image smaller than the box is shown at its natural size,
    /// never enlarged. Dimensions must be non-zero (the engine never
    /// produces a zero-sized buffer).
    pub fn for_box(width: u32, height: u32, max_width: u32, max_height: u32) -> Self {
        debug_assert!(width > 0 && height > 0, "display fit of empty image");

        let scale = (max_width as f64 / width as f64)
            .min(max_height as f64 / height as f64)
            .min(1.0);

        if scale >= 1.0 {
            return Self {
                scale: 1.0,
                display_width: width,
                display_height: height,
            };
        }

        let (display_width, display_height) =
            decode::fit_dimensions(width, height, max_width, max_height);
        Self {
            scale,
            display_width,
            display_height,
        }
    }

    /// Translate a pointer position in the rendered preview back to
    /// source pixel coordinates.
    ///
    /// Plain floor division, no clamping: a pointer over padding beyond
    /// the preview maps outside `[0,width) x [0,height)` and callers
    /// must tolerate that. The result is for display only and is never
    /// used to index pixel memory.
    pub fn map_to_source(&self, display_x: f64, display_y: f64) -> (i64, i64) {
        (
            (display_x / self.scale).floor() as i64,
            (display_y / self.scale).floor() as i64,
        )
    }
}

/// Produce the preview buffer and its fit for the standard display box.
pub fn fit_to_display(image: &ImageBuffer) -> Result<(ImageBuffer, DisplayFit), DecodeError> {
    let fit = DisplayFit::compute(image.width, image.height);
    let preview = decode::resize_to_box(
        image,
        MAX_DISPLAY_WIDTH,
        MAX_DISPLAY_HEIGHT,
        FilterType::Bilinear,
    )?;
    Ok((preview, fit))
}


// ============================================================================
// Property-Based Tests
// ============================================================================
