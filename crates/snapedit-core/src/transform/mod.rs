//! Image edit operations: crop, border, line, channel extraction.
//!
//! Every operation here is a one-shot transform with its inputs
//! validated up front. Validation failures return a typed error before
//! a single pixel is touched, so a failed operation can never leave a
//! partially edited buffer behind.
//!
//! # Coordinate System
//!
//! - All coordinates are integer pixel positions in source-image space
//! - Origin is the top-left corner
//! - Crop rectangles are half-open: `(x1,y1)` inclusive, `(x2,y2)`
//!   exclusive, with strict `x1 < x2` and `y1 < y2` required

mod border;
mod channel;
mod crop;
mod line;

use thiserror::Error;

pub use border::add_border;
pub use channel::{extract_channel, Channel, ChannelParseError};
pub use crop::crop;
pub use line::draw_line;

/// Errors raised by edit operations rejecting their parameters.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TransformError {
    /// Crop rectangle violates `0 <= x1 < x2 <= width`, `0 <= y1 < y2 <= height`.
    ///
    /// Equal or inverted coordinates are rejected, never silently swapped.
    #[error("Invalid crop bounds ({x1},{y1})-({x2},{y2}) for {width}x{height} image")]
    InvalidBounds {
        x1: u32,
        y1: u32,
        x2: u32,
        y2: u32,
        width: u32,
        height: u32,
    },

    /// Border size must be a positive number of pixels.
    #[error("Border size must be positive, got {size}")]
    InvalidSize { size: i32 },

    /// Line thickness must be a positive number of pixels.
    #[error("Line thickness must be positive, got {thickness}")]
    InvalidThickness { thickness: i32 },
}
