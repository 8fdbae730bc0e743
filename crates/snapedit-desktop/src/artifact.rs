//! Transient on-disk artifact for captured frames.
//!
//! After a camera grab the frame is mirrored to a JPEG file, matching
//! the way the capture pipeline hands images to external viewers. The
//! file lives until the artifact is dropped at session end; removal is
//! best-effort and a file that is already gone is not an error.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use snapedit_core::{encode_jpeg, EncodeError, ImageBuffer};
use thiserror::Error;

const ARTIFACT_FILE_NAME: &str = "snapedit_capture.jpg";
const ARTIFACT_QUALITY: u8 = 90;

#[derive(Debug, Error)]
pub enum ArtifactError {
    #[error("Failed to encode capture artifact: {0}")]
    Encode(#[from] EncodeError),

    #[error("Failed to write capture artifact: {0}")]
    Io(#[from] io::Error),
}

/// A capture frame mirrored to disk for the duration of the session.
#[derive(Debug)]
pub struct CaptureArtifact {
    path: PathBuf,
}

impl CaptureArtifact {
    /// Encode the frame as JPEG and write it into the given directory.
    pub fn write(dir: &Path, frame: &ImageBuffer) -> Result<Self, ArtifactError> {
        let path = dir.join(ARTIFACT_FILE_NAME);
        let bytes = encode_jpeg(frame, ARTIFACT_QUALITY)?;
        fs::write(&path, bytes)?;
        Ok(Self { path })
    }

    /// Write the artifact into the system temp directory.
    pub fn in_temp_dir(frame: &ImageBuffer) -> Result<Self, ArtifactError> {
        Self::write(&std::env::temp_dir(), frame)
    }

    /// Location of the artifact on disk.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for CaptureArtifact {
    fn drop(&mut self) {
        match fs::remove_file(&self.path) {
            Ok(()) => {}
            // Already gone is fine
            Err(e) if e.kind() == io::ErrorKind::NotFound => {}
            Err(e) => log::warn!(
                "failed to remove capture artifact {}: {e}",
                self.path.display()
            ),
        }
    }
}
