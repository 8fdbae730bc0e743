//! Image decoding for Snapedit.
//!
//! This module provides functionality for:
//! - Decoding PNG/JPEG bytes to an RGB pixel buffer
//! - EXIF orientation correction on load
//! - Image resizing for the display preview
//!
//! Decoding is atomic: it either yields a fully valid [`ImageBuffer`]
//! or an error, never a partially decoded buffer. The caller decides
//! what to do with its previous image on failure (the session layer
//! keeps it).
//!
//! [`ImageBuffer`]: crate::ImageBuffer

mod loader;
mod resize;
mod types;

pub use loader::decode_image;
pub(crate) use resize::fit_dimensions;
pub use resize::{resize, resize_to_box};
pub use types::{DecodeError, FilterType, Orientation};
