//! The edit session: one current image threaded through the engine.
//!
//! A session starts empty and acquires an image through a file load or
//! a camera capture; from then on there is always a current image (no
//! operation ever clears it). Destructive edits replace or mutate the
//! current buffer, the channel view is display-only, and any failed
//! operation leaves the current buffer byte-identical.

use std::path::Path;

use snapedit_core::display::{self, DisplayFit};
use snapedit_core::{decode_image, transform, Channel, DecodeError, ImageBuffer, TransformError};
use thiserror::Error;

use crate::artifact::CaptureArtifact;
use crate::capture::{self, CaptureError, DEFAULT_CAMERA_INDEX};
use crate::prompt::{prompt_all, PromptInput};

#[derive(Debug, Error)]
pub enum SessionError {
    /// An edit was requested before any image was loaded or captured.
    #[error("No image loaded")]
    NoImageLoaded,

    /// A prompted value does not fit the operation's parameter range.
    #[error("Input value out of range: {0}")]
    ValueOutOfRange(i64),

    #[error(transparent)]
    Decode(#[from] DecodeError),

    #[error(transparent)]
    Transform(#[from] TransformError),

    #[error(transparent)]
    Capture(#[from] CaptureError),

    #[error("Failed to read image file: {0}")]
    Io(#[from] std::io::Error),
}

/// Interactive editing state for a single user.
#[derive(Default)]
pub struct EditSession {
    image: Option<ImageBuffer>,
    fit: Option<DisplayFit>,
    artifact: Option<CaptureArtifact>,
}

impl EditSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn has_image(&self) -> bool {
        self.image.is_some()
    }

    /// The current image, if one has been loaded or captured.
    pub fn image(&self) -> Option<&ImageBuffer> {
        self.image.as_ref()
    }

    /// Display fit of the most recently installed image.
    pub fn display_fit(&self) -> Option<DisplayFit> {
        self.fit
    }

    /// Decode image bytes and make the result the current image.
    ///
    /// On failure the previous image (if any) stays current.
    pub fn load_from_bytes(&mut self, bytes: &[u8]) -> Result<(), SessionError> {
        let buffer = decode_image(bytes)?;
        self.install(buffer);
        Ok(())
    }

    /// Load the current image from a file on disk.
    pub fn load_from_path(&mut self, path: &Path) -> Result<(), SessionError> {
        let bytes = std::fs::read(path)?;
        self.load_from_bytes(&bytes)
    }

    /// Grab one frame from the default capture device and make it the
    /// current image.
    ///
    /// The frame is also mirrored to the transient capture artifact,
    /// which lives until the session ends. A failure to write the
    /// artifact does not fail the capture; the decoded frame is already
    /// in memory.
    pub fn capture_from_camera(&mut self) -> Result<(), SessionError> {
        let frame = capture::capture_frame(DEFAULT_CAMERA_INDEX)?;

        match CaptureArtifact::in_temp_dir(&frame) {
            Ok(artifact) => self.artifact = Some(artifact),
            Err(e) => log::warn!("capture artifact not written: {e}"),
        }

        self.install(frame);
        Ok(())
    }

    /// Crop the current image to the given source-space rectangle.
    pub fn crop(&mut self, x1: u32, y1: u32, x2: u32, y2: u32) -> Result<(), SessionError> {
        let image = self.image.as_ref().ok_or(SessionError::NoImageLoaded)?;
        let cropped = transform::crop(image, x1, y1, x2, y2)?;
        self.install(cropped);
        Ok(())
    }

    /// Surround the current image with a black border.
    pub fn add_border(&mut self, size: i32) -> Result<(), SessionError> {
        let image = self.image.as_ref().ok_or(SessionError::NoImageLoaded)?;
        let bordered = transform::add_border(image, size)?;
        self.install(bordered);
        Ok(())
    }

    /// Draw a green line onto the current image in place.
    pub fn draw_line(
        &mut self,
        x1: i32,
        y1: i32,
        x2: i32,
        y2: i32,
        thickness: i32,
    ) -> Result<(), SessionError> {
        let image = self.image.as_mut().ok_or(SessionError::NoImageLoaded)?;
        transform::draw_line(image, x1, y1, x2, y2, thickness)?;
        Ok(())
    }

    /// Build the display-only channel view of the current image.
    ///
    /// The current image is left in place; later edits keep operating
    /// on the full-color buffer, not on this view.
    pub fn channel_preview(&self, channel: Channel) -> Result<ImageBuffer, SessionError> {
        let image = self.image.as_ref().ok_or(SessionError::NoImageLoaded)?;
        Ok(transform::extract_channel(image, channel))
    }

    /// Preview buffer and fit for rendering the current image into the
    /// display box.
    pub fn display_preview(&self) -> Result<(ImageBuffer, DisplayFit), SessionError> {
        let image = self.image.as_ref().ok_or(SessionError::NoImageLoaded)?;
        Ok(display::fit_to_display(image)?)
    }

    /// Translate a pointer position over the rendered preview into
    /// source coordinates. May fall outside the image; callers display
    /// the value, they do not index with it.
    pub fn pointer_to_source(
        &self,
        display_x: f64,
        display_y: f64,
    ) -> Result<(i64, i64), SessionError> {
        let fit = self.fit.ok_or(SessionError::NoImageLoaded)?;
        Ok(fit.map_to_source(display_x, display_y))
    }

    /// Crop with coordinates collected from the prompt collaborator.
    ///
    /// Returns `Ok(None)` if the user cancels any of the four fields;
    /// nothing is modified in that case.
    pub fn crop_prompted(
        &mut self,
        prompt: &mut dyn PromptInput,
    ) -> Result<Option<()>, SessionError> {
        if self.image.is_none() {
            return Err(SessionError::NoImageLoaded);
        }

        let Some(values) = prompt_all(prompt, &["X1", "Y1", "X2", "Y2"]) else {
            return Ok(None);
        };

        let x1 = to_coord(values[0])?;
        let y1 = to_coord(values[1])?;
        let x2 = to_coord(values[2])?;
        let y2 = to_coord(values[3])?;

        self.crop(x1, y1, x2, y2)?;
        Ok(Some(()))
    }

    /// Add a border with the size collected from the prompt collaborator.
    pub fn add_border_prompted(
        &mut self,
        prompt: &mut dyn PromptInput,
    ) -> Result<Option<()>, SessionError> {
        if self.image.is_none() {
            return Err(SessionError::NoImageLoaded);
        }

        let Some(values) = prompt_all(prompt, &["Size"]) else {
            return Ok(None);
        };

        self.add_border(to_signed(values[0])?)?;
        Ok(Some(()))
    }

    /// Draw a line with endpoints and thickness collected from the
    /// prompt collaborator.
    pub fn draw_line_prompted(
        &mut self,
        prompt: &mut dyn PromptInput,
    ) -> Result<Option<()>, SessionError> {
        if self.image.is_none() {
            return Err(SessionError::NoImageLoaded);
        }

        let Some(values) = prompt_all(prompt, &["X1", "Y1", "X2", "Y2", "Thickness"]) else {
            return Ok(None);
        };

        let x1 = to_signed(values[0])?;
        let y1 = to_signed(values[1])?;
        let x2 = to_signed(values[2])?;
        let y2 = to_signed(values[3])?;
        let thickness = to_signed(values[4])?;

        self.draw_line(x1, y1, x2, y2, thickness)?;
        Ok(Some(()))
    }

    fn install(&mut self, buffer: ImageBuffer) {
        self.fit = Some(DisplayFit::compute(buffer.width, buffer.height));
        self.image = Some(buffer);
    }
}

/// Crop coordinates are unsigned; negative input is rejected here, which
/// enforces the `0 <= x1` half of the crop contract before the engine
/// sees the values.
fn to_coord(value: i64) -> Result<u32, SessionError> {
    u32::try_from(value).map_err(|_| SessionError::ValueOutOfRange(value))
}

/// Line endpoints may be off-canvas in either direction, so they stay
/// signed; only values outside `i32` are rejected.
fn to_signed(value: i64) -> Result<i32, SessionError> {
    i32::try_from(value).map_err(|_| SessionError::ValueOutOfRange(value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prompt::ScriptedPrompt;
    use std::io::Cursor;

    const WHITE: [u8; 3] = [255, 255, 255];
    const GREEN: [u8; 3] = [0, 255, 0];

    fn png_bytes(width: u32, height: u32, color: [u8; 3]) -> Vec<u8> {
        let img = image::RgbImage::from_pixel(width, height, image::Rgb(color));
        let mut out = Cursor::new(Vec::new());
        img.write_to(&mut out, image::ImageFormat::Png).unwrap();
        out.into_inner()
    }

    fn session_with(width: u32, height: u32, color: [u8; 3]) -> EditSession {
        let mut session = EditSession::new();
        session.load_from_bytes(&png_bytes(width, height, color)).unwrap();
        session
    }

    fn pixel(img: &ImageBuffer, x: u32, y: u32) -> [u8; 3] {
        let idx = (y as usize * img.width as usize + x as usize) * 3;
        [img.pixels[idx], img.pixels[idx + 1], img.pixels[idx + 2]]
    }

    #[test]
    fn test_empty_session_rejects_every_operation() {
        let mut session = EditSession::new();

        assert!(matches!(session.crop(0, 0, 1, 1), Err(SessionError::NoImageLoaded)));
        assert!(matches!(session.add_border(1), Err(SessionError::NoImageLoaded)));
        assert!(matches!(
            session.draw_line(0, 0, 1, 1, 1),
            Err(SessionError::NoImageLoaded)
        ));
        assert!(matches!(
            session.channel_preview(Channel::Red),
            Err(SessionError::NoImageLoaded)
        ));
        assert!(matches!(
            session.pointer_to_source(10.0, 10.0),
            Err(SessionError::NoImageLoaded)
        ));
        assert!(!session.has_image());
    }

    #[test]
    fn test_load_installs_image_and_fit() {
        let session = session_with(10, 10, WHITE);

        let img = session.image().unwrap();
        assert_eq!((img.width, img.height), (10, 10));
        assert_eq!(session.display_fit().unwrap().scale, 1.0);
    }

    #[test]
    fn test_failed_load_keeps_previous_image() {
        let mut session = session_with(10, 10, WHITE);

        let result = session.load_from_bytes(&[0x00, 0x01, 0x02]);
        assert!(matches!(result, Err(SessionError::Decode(_))));

        // The 10x10 image is still current
        let img = session.image().unwrap();
        assert_eq!((img.width, img.height), (10, 10));
    }

    #[test]
    fn test_load_from_missing_path_keeps_previous_image() {
        let mut session = session_with(4, 4, WHITE);

        let result = session.load_from_path(Path::new("/no/such/file.png"));
        assert!(matches!(result, Err(SessionError::Io(_))));
        assert!(session.has_image());
    }

    #[test]
    fn test_failed_crop_leaves_buffer_byte_identical() {
        let mut session = session_with(10, 10, WHITE);
        let before = session.image().unwrap().pixels.clone();

        assert!(session.crop(5, 5, 5, 9).is_err());
        assert_eq!(session.image().unwrap().pixels, before);
        assert_eq!((session.image().unwrap().width, session.image().unwrap().height), (10, 10));
    }

    #[test]
    fn test_channel_preview_is_display_only() {
        let mut session = session_with(6, 6, [10, 20, 30]);

        let view = session.channel_preview(Channel::Red).unwrap();
        assert_eq!(pixel(&view, 0, 0), [10, 0, 0]);

        // A subsequent crop still sees the original colors
        session.crop(1, 1, 5, 5).unwrap();
        assert_eq!(pixel(session.image().unwrap(), 0, 0), [10, 20, 30]);
    }

    #[test]
    fn test_crop_prompted_cancellation_has_no_effect() {
        let mut session = session_with(10, 10, WHITE);
        let before = session.image().unwrap().pixels.clone();

        // Cancel on the last of the four fields
        let mut prompt = ScriptedPrompt::new([Some(2), Some(2), Some(6), None]);
        let outcome = session.crop_prompted(&mut prompt).unwrap();

        assert_eq!(outcome, None);
        assert_eq!(session.image().unwrap().pixels, before);
    }

    #[test]
    fn test_crop_prompted_negative_coordinate_rejected() {
        let mut session = session_with(10, 10, WHITE);

        let mut prompt = ScriptedPrompt::answering([-1, 0, 5, 5]);
        let result = session.crop_prompted(&mut prompt);

        assert!(matches!(result, Err(SessionError::ValueOutOfRange(-1))));
        assert_eq!(session.image().unwrap().width, 10);
    }

    #[test]
    fn test_prompted_operations_on_empty_session_fail_before_prompting() {
        let mut session = EditSession::new();
        let mut prompt = ScriptedPrompt::answering([1, 1, 2, 2]);

        assert!(matches!(
            session.crop_prompted(&mut prompt),
            Err(SessionError::NoImageLoaded)
        ));
    }

    #[test]
    fn test_draw_line_prompted_accepts_off_canvas_endpoints() {
        let mut session = session_with(4, 4, WHITE);

        let mut prompt = ScriptedPrompt::answering([-10, 2, 10, 2, 1]);
        let outcome = session.draw_line_prompted(&mut prompt).unwrap();

        assert_eq!(outcome, Some(()));
        assert_eq!(pixel(session.image().unwrap(), 0, 2), GREEN);
    }

    #[test]
    fn test_pointer_to_source_uses_current_fit() {
        let session = session_with(1400, 1000, WHITE);

        assert_eq!(session.display_fit().unwrap().scale, 0.5);
        assert_eq!(session.pointer_to_source(100.0, 50.0).unwrap(), (200, 100));
        // Beyond the preview is allowed and unclamped
        assert_eq!(session.pointer_to_source(800.0, 600.0).unwrap(), (1600, 1200));
    }

    #[test]
    fn test_display_preview_matches_fit() {
        let session = session_with(1400, 500, WHITE);
        let (preview, fit) = session.display_preview().unwrap();

        assert_eq!(preview.width, fit.display_width);
        assert_eq!(preview.height, fit.display_height);
        assert_eq!(preview.width, 700);
        assert_eq!(preview.height, 250);
    }

    /// The full walkthrough: load a white 10x10, crop the middle,
    /// border it, draw the diagonal.
    #[test]
    fn test_end_to_end_edit_flow() {
        let mut session = session_with(10, 10, WHITE);

        // Crop to (2,2)-(6,6): 4x4, still all white
        session.crop(2, 2, 6, 6).unwrap();
        {
            let img = session.image().unwrap();
            assert_eq!((img.width, img.height), (4, 4));
            assert!(img.pixels.chunks_exact(3).all(|p| p == WHITE));
        }

        // Border of 1: 6x6 with a black ring around a white interior
        session.add_border(1).unwrap();
        {
            let img = session.image().unwrap();
            assert_eq!((img.width, img.height), (6, 6));
            for y in 0..6 {
                for x in 0..6 {
                    let inside = (1..5).contains(&x) && (1..5).contains(&y);
                    let expected = if inside { WHITE } else { [0, 0, 0] };
                    assert_eq!(pixel(img, x, y), expected, "at ({x},{y})");
                }
            }
        }

        // Diagonal line: interior pixels along it turn green
        session.draw_line(0, 0, 5, 5, 1).unwrap();
        {
            let img = session.image().unwrap();
            for i in 0..6 {
                assert_eq!(pixel(img, i, i), GREEN, "diagonal at ({i},{i})");
            }
            // An off-diagonal interior pixel keeps its color
            assert_eq!(pixel(img, 3, 1), WHITE);
        }
    }
}
