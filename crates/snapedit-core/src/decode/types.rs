//! Error taxonomy and supporting types for decoding.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Ways a byte stream can fail to become a pixel buffer.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The byte stream is not a recognized image format.
    #[error("Unrecognized or unsupported image format")]
    UnsupportedFormat,

    /// The image data is corrupted or incomplete.
    #[error("Corrupted or incomplete image data: {0}")]
    CorruptedData(String),

    /// The image decoded to zero pixels.
    #[error("Image has zero pixel dimensions")]
    EmptyImage,

    /// I/O error while reading the byte stream.
    #[error("I/O error: {0}")]
    Io(String),
}

/// Resampling filter used when producing the display preview.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FilterType {
    /// Nearest neighbor. Fast and blocky.
    Nearest,
    /// Bilinear. The default; good enough for a preview.
    #[default]
    Bilinear,
    /// Lanczos3. Sharpest result at the highest cost.
    Lanczos3,
}

impl FilterType {
    /// The equivalent `image::imageops` filter.
    pub fn to_image_filter(self) -> image::imageops::FilterType {
        match self {
            FilterType::Nearest => image::imageops::FilterType::Nearest,
            FilterType::Bilinear => image::imageops::FilterType::Triangle,
            FilterType::Lanczos3 => image::imageops::FilterType::Lanczos3,
        }
    }
}

/// The eight EXIF orientation values (tag 0x0112).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[repr(u8)]
pub enum Orientation {
    /// Upright, nothing to do.
    #[default]
    Normal = 1,
    /// Mirrored left-right.
    FlipHorizontal = 2,
    /// Upside down.
    Rotate180 = 3,
    /// Mirrored top-bottom.
    FlipVertical = 4,
    /// Mirrored, then rotated 270 CW.
    Transpose = 5,
    /// Rotated 90 CW.
    Rotate90CW = 6,
    /// Mirrored, then rotated 90 CW.
    Transverse = 7,
    /// Rotated 270 CW.
    Rotate270CW = 8,
}

impl From<u32> for Orientation {
    fn from(value: u32) -> Self {
        match value {
            1 => Orientation::Normal,
            2 => Orientation::FlipHorizontal,
            3 => Orientation::Rotate180,
            4 => Orientation::FlipVertical,
            5 => Orientation::Transpose,
            6 => Orientation::Rotate90CW,
            7 => Orientation::Transverse,
            8 => Orientation::Rotate270CW,
            _ => Orientation::Normal,
        }
    }
}
