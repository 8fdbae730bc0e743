//! Byte-stream decoding with EXIF orientation handling.

use std::io::Cursor;

use exif::{In, Reader, Tag};
use image::DynamicImage;
use image::ImageReader;

use super::{DecodeError, Orientation};
use crate::ImageBuffer;

/// Decode PNG or JPEG bytes to an RGB buffer, applying EXIF orientation.
///
/// The format is guessed from the byte stream itself, not from a file
/// extension. Whatever color model the source uses is converted to
/// 8-bit RGB.
///
/// # Errors
///
/// Returns `DecodeError::UnsupportedFormat` if the bytes are not a
/// recognized image format, `DecodeError::CorruptedData` if they are
/// recognized but cannot be fully decoded, and `DecodeError::EmptyImage`
/// if the decoded image has a zero dimension. No buffer is produced on
/// any error path.
pub fn decode_image(bytes: &[u8]) -> Result<ImageBuffer, DecodeError> {
    // Orientation comes from the EXIF container, read before decoding
    let orientation = extract_orientation(bytes);

    let reader = ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()
        .map_err(|e| DecodeError::Io(e.to_string()))?;

    if reader.format().is_none() {
        return Err(DecodeError::UnsupportedFormat);
    }

    let img = reader
        .decode()
        .map_err(|e| DecodeError::CorruptedData(e.to_string()))?;

    let rgb = apply_orientation(img, orientation).into_rgb8();
    if rgb.width() == 0 || rgb.height() == 0 {
        return Err(DecodeError::EmptyImage);
    }

    Ok(ImageBuffer::from_rgb(rgb))
}

/// Extract EXIF orientation from the byte stream.
///
/// Returns `Orientation::Normal` when there is no EXIF container or no
/// orientation tag (PNG files typically have neither).
fn extract_orientation(bytes: &[u8]) -> Orientation {
    let mut cursor = Cursor::new(bytes);
    match Reader::new().read_from_container(&mut cursor) {
        Ok(exif) => exif
            .get_field(Tag::Orientation, In::PRIMARY)
            .and_then(|field| field.value.get_uint(0))
            .map(Orientation::from)
            .unwrap_or_default(),
        Err(_) => Orientation::Normal,
    }
}

/// Undo the camera's stored orientation so the pixels read upright.
fn apply_orientation(img: DynamicImage, orientation: Orientation) -> DynamicImage {
    match orientation {
        Orientation::Normal => img,
        Orientation::FlipHorizontal => img.fliph(),
        Orientation::Rotate180 => img.rotate180(),
        Orientation::FlipVertical => img.flipv(),
        Orientation::Transpose => img.rotate90().fliph(),
        Orientation::Rotate90CW => img.rotate90(),
        Orientation::Transverse => img.rotate270().fliph(),
        Orientation::Rotate270CW => img.rotate270(),
    }
}
