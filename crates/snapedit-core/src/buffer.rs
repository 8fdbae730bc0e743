//! The in-memory pixel buffer every engine operation works on.

use image::RgbImage;

/// An 8-bit RGB image held in memory.
///
/// Pixel data is row-major with 3 bytes per pixel and no alpha channel.
/// Invariant: `pixels.len() == width * height * 3`, and both dimensions
/// are non-zero for any buffer the engine produces.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageBuffer {
    /// Image width in pixels.
    pub width: u32,
    /// Image height in pixels.
    pub height: u32,
    /// RGB pixel data in row-major order (3 bytes per pixel).
    pub pixels: Vec<u8>,
}

impl ImageBuffer {
    /// Create a buffer from dimensions and pixel data.
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> Self {
        debug_assert_eq!(
            pixels.len(),
            width as usize * height as usize * 3,
            "pixel length does not match dimensions"
        );
        Self {
            width,
            height,
            pixels,
        }
    }

    /// Create a buffer by taking ownership of an `image::RgbImage`.
    pub fn from_rgb(img: RgbImage) -> Self {
        let (width, height) = img.dimensions();
        Self {
            width,
            height,
            pixels: img.into_raw(),
        }
    }

    /// Convert to an `image::RgbImage` for operations that need one.
    ///
    /// Returns `None` if the pixel length does not match the declared
    /// dimensions (a broken invariant, only possible through direct
    /// field manipulation).
    pub fn to_rgb(&self) -> Option<RgbImage> {
        RgbImage::from_raw(self.width, self.height, self.pixels.clone())
    }

    /// Total number of pixels.
    pub fn pixel_count(&self) -> u32 {
        self.width * self.height
    }

    /// Size of the pixel data in bytes.
    pub fn byte_len(&self) -> usize {
        self.pixels.len()
    }

    /// True if the buffer holds no pixels.
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0 || self.pixels.is_empty()
    }
}
