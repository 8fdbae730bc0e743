//! Single-frame camera capture.
//!
//! The capture device follows a strict acquire-use-release discipline:
//! it is opened immediately before the one frame read and released on
//! every exit path, never held across calls. Ownership of the device
//! handle by the function scope guarantees the release.

use image::RgbImage;
use nokhwa::pixel_format::RgbFormat;
use nokhwa::utils::{CameraIndex, RequestedFormat, RequestedFormatType};
use nokhwa::Camera;
use snapedit_core::ImageBuffer;
use thiserror::Error;

/// The index-0 device the editor captures from.
pub const DEFAULT_CAMERA_INDEX: u32 = 0;

pub type CaptureResult<T> = Result<T, CaptureError>;

#[derive(Debug, Error)]
pub enum CaptureError {
    /// The device could not be opened at all.
    #[error("Capture device unavailable: {0}")]
    DeviceUnavailable(String),

    /// The device opened but produced no usable frame.
    #[error("Capture failed: {0}")]
    CaptureFailed(String),
}

/// Grab exactly one RGB frame from the given capture device.
///
/// Opens the device, reads a single frame, and releases the device
/// whether or not the read succeeded.
///
/// # Errors
///
/// `CaptureError::DeviceUnavailable` if the device cannot be opened or
/// its stream cannot be started; `CaptureError::CaptureFailed` if the
/// opened device returns no frame or the frame cannot be decoded.
pub fn capture_frame(index: u32) -> CaptureResult<ImageBuffer> {
    let requested =
        RequestedFormat::new::<RgbFormat>(RequestedFormatType::AbsoluteHighestResolution);

    let mut camera = Camera::new(CameraIndex::Index(index), requested)
        .map_err(|e| CaptureError::DeviceUnavailable(e.to_string()))?;

    camera
        .open_stream()
        .map_err(|e| CaptureError::DeviceUnavailable(e.to_string()))?;

    let frame = read_one_frame(&mut camera);

    if let Err(e) = camera.stop_stream() {
        log::warn!("failed to stop camera stream: {e}");
    }
    // Dropping the camera here closes the device even if stop failed

    frame
}

fn read_one_frame(camera: &mut Camera) -> CaptureResult<ImageBuffer> {
    let buffer = camera
        .frame()
        .map_err(|e| CaptureError::CaptureFailed(e.to_string()))?;

    let rgb: RgbImage = buffer
        .decode_image::<RgbFormat>()
        .map_err(|e| CaptureError::CaptureFailed(e.to_string()))?;

    if rgb.width() == 0 || rgb.height() == 0 {
        return Err(CaptureError::CaptureFailed("empty frame".to_string()));
    }

    Ok(ImageBuffer::from_rgb(rgb))
}
