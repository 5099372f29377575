//! Command routing and execution
//!
//! This module handles routing CLI commands to their batch implementations.

use crate::abstractions::RealImageIo;
use crate::batch::{
    invert_images, merge_images, output_dir_for, pad_images, rename_images, BatchCommand,
    MergeRequest,
};
use crate::cli::args::Commands;
use crate::cli::validation::validate_directory;
use crate::config::PhotoToolsConfig;
use crate::error::AppResult;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Execute a CLI command based on the parsed arguments
pub fn execute_command(command: Commands, config: &PhotoToolsConfig) -> AppResult<()> {
    let io = RealImageIo::new();

    let report = match command {
        Commands::Rename { dir, dry_run } => {
            let (input, output) = resolve_dirs(&dir, BatchCommand::Rename)?;
            rename_images(&io, config, &input, &output, dry_run)?
        }
        Commands::Pad { dir, colour } => {
            let (input, output) = resolve_dirs(&dir, BatchCommand::Pad)?;
            let colour = colour.map(|c| c.rgb()).unwrap_or(config.pad_colour);
            pad_images(&io, config, &input, &output, colour)?
        }
        Commands::Neg { dir } => {
            let (input, output) = resolve_dirs(&dir, BatchCommand::Negative)?;
            invert_images(&io, config, &input, &output)?
        }
        Commands::Merge {
            dir,
            amount,
            axis,
            fill,
            dry_run,
        } => {
            let (input, output) = resolve_dirs(&dir, BatchCommand::Merge)?;
            let request = MergeRequest {
                amount,
                constraint_axis: axis,
                fill_order: fill,
                dry_run,
            };
            merge_images(&io, config, &input, &output, request)?
        }
    };

    println!("{}", report);
    Ok(())
}

/// Resolve the input directory and its sibling output directory
fn resolve_dirs(dir: &Path, command: BatchCommand) -> AppResult<(PathBuf, PathBuf)> {
    let input = validate_directory(dir)?;
    let output = output_dir_for(&input, command)?;
    debug!("{}: {} -> {}", command, input.display(), output.display());
    Ok((input, output))
}
