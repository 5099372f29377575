//! Error handling utilities
//!
//! This module provides centralized error handling for the application.

use crate::error::{describe_error_code, PhotoToolsError};
use tracing::error;

/// Process exit code for an error that reached `main`
pub fn exit_code_for(error: &anyhow::Error) -> i32 {
    error
        .downcast_ref::<PhotoToolsError>()
        .map(PhotoToolsError::exit_code)
        .unwrap_or(1)
}

/// Handle fatal errors and exit with appropriate status code
///
/// - For `PhotoToolsError`: Shows user message always, developer message in verbose mode
/// - For other errors: Shows the error and, in verbose mode, its chain
pub fn handle_fatal_error(error: anyhow::Error, verbose: u8) -> ! {
    error!("Fatal error: {}", error);

    if let Some(photo_err) = error.downcast_ref::<PhotoToolsError>() {
        eprintln!("{}", photo_err.user_message());

        if verbose >= 1 {
            eprintln!(
                "\nE{}: {}",
                photo_err.code(),
                describe_error_code(photo_err.code())
            );
            eprintln!("\nContext Chain:\n{}", photo_err.developer_message());
        }
    } else {
        eprintln!("Error: {error}");

        if verbose >= 1 {
            eprintln!("\nError chain:");
            for (i, cause) in error.chain().enumerate() {
                eprintln!("  {}: {}", i, cause);
            }
        }
    }

    std::process::exit(exit_code_for(&error))
}
