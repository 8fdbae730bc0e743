//! Line drawing.

use super::TransformError;
use crate::ImageBuffer;

/// Stroke color for drawn lines.
const STROKE: [u8; 3] = [0, 255, 0];

/// Draw a green line segment onto an image in place.
///
/// The segment runs from `(x1, y1)` to `(x2, y2)` in source pixel
/// coordinates with the given stroke thickness. Endpoints are accepted
/// as-is: coordinates outside the image are legal and the off-canvas
/// portion of the stroke is simply clipped, so a segment can enter and
/// leave the canvas. Pixels not touched by the stroke keep their value.
///
/// # Errors
///
/// `TransformError::InvalidThickness` if `thickness` is zero or
/// negative. The check happens before any pixel is written, so a
/// rejected call leaves the image byte-identical.
pub fn draw_line(
    image: &mut ImageBuffer,
    x1: i32,
    y1: i32,
    x2: i32,
    y2: i32,
    thickness: i32,
) -> Result<(), TransformError> {
    if thickness <= 0 {
        return Err(TransformError::InvalidThickness { thickness });
    }

    let (w, h) = (image.width as i32, image.height as i32);
    let dx = (x2 - x1) as f32;
    let dy = (y2 - y1) as f32;
    let len = (dx * dx + dy * dy).sqrt();

    // Sample densely enough that consecutive stamps overlap
    let steps = (len * 2.0) as i32;
    let half = thickness / 2;

    for i in 0..=steps {
        let t = i as f32 / steps.max(1) as f32;
        let cx = (x1 as f32 + dx * t).round() as i32;
        let cy = (y1 as f32 + dy * t).round() as i32;

        for oy in -half..=half {
            for ox in -half..=half {
                let px = cx + ox;
                let py = cy + oy;
                if px >= 0 && px < w && py >= 0 && py < h {
                    let idx = (py as usize * image.width as usize + px as usize) * 3;
                    image.pixels[idx..idx + 3].copy_from_slice(&STROKE);
                }
            }
        }
    }

    Ok(())
}


// ============================================================================
// Property-Based Tests
// ============================================================================
