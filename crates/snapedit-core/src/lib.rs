//! Snapedit Core - Image editing engine
//!
//! This crate provides the image editing engine for Snapedit: decoding
//! image bytes to an RGB pixel buffer, one-shot edit operations (crop,
//! border, line, channel extraction), JPEG encoding, and the display
//! geometry used to map pointer coordinates in a scaled-down view back
//! to source pixels.
//!
//! The engine is deliberately free of any UI concern: it never logs,
//! never prompts, and reports every failure as a typed error while
//! leaving the caller's buffer untouched.

pub mod buffer;
pub mod decode;
pub mod display;
pub mod encode;
pub mod transform;

pub use buffer::ImageBuffer;
pub use decode::{decode_image, resize, resize_to_box, DecodeError, FilterType, Orientation};
pub use display::{DisplayFit, MAX_DISPLAY_HEIGHT, MAX_DISPLAY_WIDTH};
pub use encode::{encode_jpeg, EncodeError};
pub use transform::{
    add_border, crop, draw_line, extract_channel, Channel, ChannelParseError, TransformError,
};
