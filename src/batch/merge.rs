//! Tile every image of a directory into one composite grid

use super::{discover_images, prepare_output, BatchCommand, BatchReport};
use crate::abstractions::{CanvasMode, ImageIo};
use crate::config::PhotoToolsConfig;
use crate::core::{plan_grid, GridAxis, GridPlan, GridSpec};
use crate::error::{PhotoToolsError, Result};
use image::ImageFormat;
use std::path::Path;
use tracing::{debug, info};

/// Grid parameters for one merge
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MergeRequest {
    /// How many rows or columns, depending on `constraint_axis`
    pub amount: u32,
    pub constraint_axis: GridAxis,
    pub fill_order: GridAxis,
    pub dry_run: bool,
}

/// File name of the merged image, e.g. `(2x4)_row-merged.PNG`
pub fn merged_file_name(plan: &GridPlan, fill_order: GridAxis) -> String {
    format!("({}x{})_{}-merged.PNG", plan.rows, plan.columns, fill_order)
}

/// Paste every image in `input_dir` onto one canvas and save it as PNG
///
/// Cells are sized to the largest width and height among the inputs. The
/// layout is planned from the image dimensions before anything is decoded
/// or written, so an impossible grid fails without side effects.
pub fn merge_images(
    io: &impl ImageIo,
    config: &PhotoToolsConfig,
    input_dir: &Path,
    output_dir: &Path,
    request: MergeRequest,
) -> Result<BatchReport> {
    let files = discover_images(io, config, input_dir)?;
    if files.is_empty() {
        return Err(PhotoToolsError::invalid_grid(format!(
            "there are no images to merge in {}",
            input_dir.display()
        )));
    }

    let dimensions = files
        .iter()
        .map(|path| io.load_dimensions(path))
        .collect::<Result<Vec<_>>>()?;
    let spec = GridSpec::from_dimensions(
        &dimensions,
        request.amount,
        request.constraint_axis,
        request.fill_order,
    )?;
    let plan = plan_grid(&spec)?;
    let destination = output_dir.join(merged_file_name(&plan, request.fill_order));

    info!(
        "Merging {} images into {} rows and {} columns ({}x{} pixels)",
        files.len(),
        plan.rows,
        plan.columns,
        plan.canvas_width,
        plan.canvas_height
    );

    if request.dry_run {
        println!(
            "Would merge {} images into {} ({} empty cells)",
            files.len(),
            destination.display(),
            plan.empty_cells()
        );
        return Ok(BatchReport::untouched(
            BatchCommand::Merge,
            input_dir,
            output_dir,
            files.len(),
            true,
        ));
    }

    let previous = prepare_output(io, config, output_dir)?;
    println!("{}", BatchCommand::Merge.announcement(input_dir, output_dir));

    let mut canvas = io.create_canvas(
        plan.canvas_width,
        plan.canvas_height,
        CanvasMode::Rgba,
        config.merge_background,
    );
    for (path, placement) in files.iter().zip(&plan.placements) {
        debug!(
            "Placing {} at column {}, row {}",
            path.display(),
            placement.column,
            placement.row
        );
        let image = io.load_image(path)?;
        io.paste_image(&mut canvas, &image, placement.x, placement.y);
    }

    io.save_image(&canvas, &destination, ImageFormat::Png)?;

    BatchReport::finish(
        io,
        config,
        BatchCommand::Merge,
        input_dir,
        output_dir,
        files.len(),
        previous,
    )
}
