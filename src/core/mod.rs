//! Core photo-batch logic with pure functions
//!
//! This module contains pure functions that implement the batch algorithms without any I/O operations.
//! Following the "functional core, imperative shell" pattern, all functions here:
//! - Take inputs and return outputs
//! - Have no side effects
//! - Don't touch the file system or decode pixels
//! - Are easily testable without mocks

pub mod grid;
pub mod naming;

pub use grid::{plan_grid, GridAxis, GridPlan, GridSpec, Placement};
pub use naming::{alternative_take_flag, parse_filename, resequence, PhotoFilename, RenameEntry};
