//! Square images by padding their shorter sides

use super::{discover_images, format_for, prepare_output, BatchCommand, BatchReport};
use crate::abstractions::{CanvasMode, ImageIo};
use crate::config::PhotoToolsConfig;
use crate::error::Result;
use std::path::Path;
use tracing::debug;

/// Square canvas size and where the original image sits on it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Padding {
    pub side: u32,
    pub x: u32,
    pub y: u32,
}

/// Centre a `width` x `height` image on a square canvas
///
/// Odd leftovers go to the right or bottom edge.
///
/// ```
/// use phototools::batch::square_padding;
///
/// let padding = square_padding(300, 200);
/// assert_eq!((padding.side, padding.x, padding.y), (300, 0, 50));
/// ```
pub fn square_padding(width: u32, height: u32) -> Padding {
    let side = width.max(height);
    Padding {
        side,
        x: (side - width) / 2,
        y: (side - height) / 2,
    }
}

/// Pad every image in `input_dir` to a square of `colour`, keeping file names
pub fn pad_images(
    io: &impl ImageIo,
    config: &PhotoToolsConfig,
    input_dir: &Path,
    output_dir: &Path,
    colour: [u8; 3],
) -> Result<BatchReport> {
    let files = discover_images(io, config, input_dir)?;
    if files.is_empty() {
        return Ok(BatchReport::untouched(
            BatchCommand::Pad,
            input_dir,
            output_dir,
            0,
            false,
        ));
    }

    let previous = prepare_output(io, config, output_dir)?;
    println!("{}", BatchCommand::Pad.announcement(input_dir, output_dir));

    let [r, g, b] = colour;
    for path in &files {
        let image = io.load_image(path)?;
        let padding = square_padding(image.width(), image.height());
        debug!("Padding {} to {:?}", path.display(), padding);

        let mut canvas =
            io.create_canvas(padding.side, padding.side, CanvasMode::Rgb, [r, g, b, 255]);
        io.paste_image(&mut canvas, &image, padding.x, padding.y);

        let destination = output_dir.join(path.file_name().unwrap_or(path.as_os_str()));
        io.save_image(&canvas, &destination, format_for(&destination)?)?;
    }

    BatchReport::finish(
        io,
        config,
        BatchCommand::Pad,
        input_dir,
        output_dir,
        files.len(),
        previous,
    )
}
