//! Color channel isolation.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::ImageBuffer;

/// A color channel selection for the preview display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Channel {
    /// All three channels (the image as-is).
    #[default]
    Rgb,
    /// Red plane only.
    Red,
    /// Green plane only.
    Green,
    /// Blue plane only.
    Blue,
}

/// The channel name did not match any known channel.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("Unrecognized channel name: {0}")]
pub struct ChannelParseError(String);

impl FromStr for Channel {
    type Err = ChannelParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "RGB" => Ok(Channel::Rgb),
            "R" => Ok(Channel::Red),
            "G" => Ok(Channel::Green),
            "B" => Ok(Channel::Blue),
            other => Err(ChannelParseError(other.to_string())),
        }
    }
}

/// Build a single-channel view of an image.
///
/// For `Channel::Rgb` this is a plain copy. For a single channel the
/// result keeps that plane's values verbatim and zeroes the other two.
/// The source is never modified; the result is a display-only preview
/// and is not meant to replace the caller's working buffer.
pub fn extract_channel(image: &ImageBuffer, channel: Channel) -> ImageBuffer {
    let plane = match channel {
        Channel::Rgb => return image.clone(),
        Channel::Red => 0,
        Channel::Green => 1,
        Channel::Blue => 2,
    };

    let mut pixels = vec![0u8; image.pixels.len()];
    for (dst, src) in pixels
        .chunks_exact_mut(3)
        .zip(image.pixels.chunks_exact(3))
    {
        dst[plane] = src[plane];
    }

    ImageBuffer {
        width: image.width,
        height: image.height,
        pixels,
    }
}


// ============================================================================
// Property-Based Tests
// ============================================================================
