//! Invert the colours of every image

use super::{discover_images, format_for, prepare_output, BatchCommand, BatchReport};
use crate::abstractions::ImageIo;
use crate::config::PhotoToolsConfig;
use crate::error::Result;
use std::path::Path;
use tracing::debug;

/// Write a colour-inverted copy of each image under its original file name
pub fn invert_images(
    io: &impl ImageIo,
    config: &PhotoToolsConfig,
    input_dir: &Path,
    output_dir: &Path,
) -> Result<BatchReport> {
    let files = discover_images(io, config, input_dir)?;
    if files.is_empty() {
        return Ok(BatchReport::untouched(
            BatchCommand::Negative,
            input_dir,
            output_dir,
            0,
            false,
        ));
    }

    let previous = prepare_output(io, config, output_dir)?;
    println!("{}", BatchCommand::Negative.announcement(input_dir, output_dir));

    for path in &files {
        let mut image = io.load_image(path)?;
        io.invert_colours(&mut image);

        let destination = output_dir.join(path.file_name().unwrap_or(path.as_os_str()));
        debug!("Writing negative {}", destination.display());
        io.save_image(&image, &destination, format_for(&destination)?)?;
    }

    BatchReport::finish(
        io,
        config,
        BatchCommand::Negative,
        input_dir,
        output_dir,
        files.len(),
        previous,
    )
}
