//! Snapedit Desktop - session and capture layer
//!
//! This crate sits between the pure engine in `snapedit-core` and a
//! GUI shell. It owns the single "current image" of an editing session,
//! grabs one-shot frames from the capture device, keeps the transient
//! on-disk capture artifact alive for the lifetime of the session, and
//! models the blocking numeric prompts a GUI presents as a pluggable
//! collaborator.
//!
//! # Module Structure
//!
//! - `capture` - single-frame camera grab with scoped device acquisition
//! - `artifact` - transient JPEG written after a capture, removed on drop
//! - `prompt` - modal integer input as an external collaborator
//! - `session` - the edit session threading the current image through
//!   the engine's operations

pub mod artifact;
pub mod capture;
pub mod prompt;
pub mod session;

pub use artifact::{ArtifactError, CaptureArtifact};
pub use capture::{capture_frame, CaptureError, DEFAULT_CAMERA_INDEX};
pub use prompt::{prompt_all, PromptInput, ScriptedPrompt};
pub use session::{EditSession, SessionError};
