//! Reindex a directory of scans into dense sequential file names

use super::{discover_images, format_for, prepare_output, BatchCommand, BatchReport};
use crate::abstractions::ImageIo;
use crate::config::PhotoToolsConfig;
use crate::core::{resequence, RenameEntry};
use crate::error::Result;
use std::collections::HashSet;
use std::path::Path;
use tracing::{debug, info, warn};

/// Copy every image in `input_dir` under its resequenced name
///
/// The whole rename plan is built first, so one malformed file name aborts
/// the batch before the output directory is created. With `dry_run` the plan
/// is printed and nothing is written.
pub fn rename_images(
    io: &impl ImageIo,
    config: &PhotoToolsConfig,
    input_dir: &Path,
    output_dir: &Path,
    dry_run: bool,
) -> Result<BatchReport> {
    let files = discover_images(io, config, input_dir)?;
    let plan = resequence(&files)?;
    debug!("Planned {} renames", plan.len());
    for name in duplicate_names(&plan) {
        warn!("Several files will be saved as {}; only the last is kept", name);
    }

    if plan.is_empty() || dry_run {
        for entry in &plan {
            println!("Would save {} as {}", entry.source.display(), entry.file_name);
        }
        return Ok(BatchReport::untouched(
            BatchCommand::Rename,
            input_dir,
            output_dir,
            files.len(),
            dry_run,
        ));
    }

    let previous = prepare_output(io, config, output_dir)?;
    println!("{}", BatchCommand::Rename.announcement(input_dir, output_dir));

    for entry in &plan {
        copy_renamed(io, entry, output_dir)?;
    }

    BatchReport::finish(
        io,
        config,
        BatchCommand::Rename,
        input_dir,
        output_dir,
        files.len(),
        previous,
    )
}

/// New names that more than one plan entry would write
///
/// Two alternative takes after the same primary take collide when they carry
/// the same flag letter.
pub fn duplicate_names(plan: &[RenameEntry]) -> Vec<&str> {
    let mut seen = HashSet::new();
    let mut duplicates = Vec::new();
    for entry in plan {
        let name = entry.file_name.as_str();
        if !seen.insert(name) && !duplicates.contains(&name) {
            duplicates.push(name);
        }
    }
    duplicates
}

fn copy_renamed(io: &impl ImageIo, entry: &RenameEntry, output_dir: &Path) -> Result<()> {
    let destination = output_dir.join(&entry.file_name);
    println!(
        "Saving {} to {}",
        entry.source.display(),
        destination.display()
    );

    let image = io.load_image(&entry.source)?;
    io.save_image(&image, &destination, format_for(&destination)?)?;
    info!("Renamed {} (index {})", entry.source.display(), entry.index);
    Ok(())
}
