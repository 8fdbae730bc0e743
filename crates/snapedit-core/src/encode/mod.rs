//! Image encoding for Snapedit.
//!
//! This module provides functionality for:
//! - Encoding a pixel buffer to JPEG with configurable quality
//!
//! Encoding backs the transient capture artifact the desktop layer
//! writes after a camera grab. All operations are synchronous.

mod jpeg;

pub use jpeg::{encode_jpeg, EncodeError};
