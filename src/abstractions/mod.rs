//! Abstraction layers for external dependencies
//!
//! This module provides a trait-based abstraction over image decoding,
//! encoding and directory access so batch operations can be tested without
//! touching the file system.

pub mod imaging;

pub use imaging::{CanvasMode, ImageIo, MockImageIo, RealImageIo};
