//! CLI command handlers
//!
//! This module contains all CLI-related functionality including:
//! - Argument parsing structures
//! - Command routing
//! - Input validation

pub mod args;
pub mod router;
pub mod validation;

// Re-export the main CLI structures for convenience
pub use args::{Cli, Commands, PadColour};
pub use router::execute_command;
pub use validation::validate_directory;
