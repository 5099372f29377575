//! Grid layout planning for merged images
//!
//! Merging tiles N images into one canvas. The caller fixes either the number
//! of rows or the number of columns; the other dimension follows by ceiling
//! division, so any shortfall lands in the last row or column. Fill order is
//! chosen separately: a grid with a fixed row count can still be filled
//! column by column.

use crate::error::{PhotoToolsError, Result};
use std::fmt;
use std::str::FromStr;

/// A grid axis, used both for the fixed dimension and for the fill order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GridAxis {
    Row,
    Column,
}

impl GridAxis {
    pub fn as_str(&self) -> &'static str {
        match self {
            GridAxis::Row => "row",
            GridAxis::Column => "column",
        }
    }
}

impl fmt::Display for GridAxis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GridAxis {
    type Err = PhotoToolsError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "row" => Ok(GridAxis::Row),
            "column" => Ok(GridAxis::Column),
            _ => Err(PhotoToolsError::invalid_grid(format!(
                "'{}' is not a grid axis (expected 'row' or 'column')",
                s
            ))),
        }
    }
}

/// Inputs to the layout planner
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridSpec {
    pub image_count: u32,
    /// Number of rows or columns, depending on `constraint_axis`
    pub constraint_amount: u32,
    pub constraint_axis: GridAxis,
    pub fill_order: GridAxis,
    pub cell_width: u32,
    pub cell_height: u32,
}

impl GridSpec {
    /// Build a spec from measured image sizes
    ///
    /// Every image gets a uniform cell as large as the widest and the tallest
    /// input.
    pub fn from_dimensions(
        dimensions: &[(u32, u32)],
        constraint_amount: u32,
        constraint_axis: GridAxis,
        fill_order: GridAxis,
    ) -> Result<Self> {
        let image_count = u32::try_from(dimensions.len())
            .map_err(|_| PhotoToolsError::invalid_grid("too many images for one canvas"))?;

        Ok(Self {
            image_count,
            constraint_amount,
            constraint_axis,
            fill_order,
            cell_width: dimensions.iter().map(|&(w, _)| w).max().unwrap_or(0),
            cell_height: dimensions.iter().map(|&(_, h)| h).max().unwrap_or(0),
        })
    }
}

/// Where one image goes on the canvas
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Placement {
    pub column: u32,
    pub row: u32,
    /// Left edge in pixels
    pub x: u32,
    /// Top edge in pixels
    pub y: u32,
}

/// The computed layout: grid size, canvas size and one placement per image
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridPlan {
    pub rows: u32,
    pub columns: u32,
    pub cell_width: u32,
    pub cell_height: u32,
    pub canvas_width: u32,
    pub canvas_height: u32,
    /// Placements in input order
    pub placements: Vec<Placement>,
}

impl GridPlan {
    /// Number of cells left without an image
    pub fn empty_cells(&self) -> u32 {
        self.rows * self.columns - self.placements.len() as u32
    }

    pub fn canvas_size(&self) -> (u32, u32) {
        (self.canvas_width, self.canvas_height)
    }
}

/// Pure: rows and columns for a fixed axis
fn grid_dimensions(image_count: u32, amount: u32, axis: GridAxis) -> (u32, u32) {
    match axis {
        GridAxis::Row => (amount, image_count.div_ceil(amount)),
        GridAxis::Column => (image_count.div_ceil(amount), amount),
    }
}

/// Pure: (column, row) of the k-th image for a fill order
fn grid_cell(k: u32, rows: u32, columns: u32, fill_order: GridAxis) -> (u32, u32) {
    match fill_order {
        GridAxis::Row => (k % columns, k / columns),
        GridAxis::Column => (k / rows, k % rows),
    }
}

/// Plan the merged canvas for `spec`
///
/// # Errors
///
/// Returns `InvalidGridConstraint` when there are no images, when the
/// constraint amount is zero, or when the canvas would not fit in `u32`
/// pixels.
///
/// # Example
///
/// ```
/// use phototools::core::grid::{plan_grid, GridAxis, GridSpec};
///
/// let spec = GridSpec {
///     image_count: 7,
///     constraint_amount: 2,
///     constraint_axis: GridAxis::Row,
///     fill_order: GridAxis::Row,
///     cell_width: 100,
///     cell_height: 50,
/// };
/// let plan = plan_grid(&spec).unwrap();
/// assert_eq!((plan.rows, plan.columns), (2, 4));
/// assert_eq!(plan.canvas_size(), (400, 100));
/// ```
pub fn plan_grid(spec: &GridSpec) -> Result<GridPlan> {
    if spec.image_count == 0 {
        return Err(PhotoToolsError::invalid_grid("there are no images to place"));
    }
    if spec.constraint_amount == 0 {
        return Err(PhotoToolsError::invalid_grid(format!(
            "the {} count must be at least 1",
            spec.constraint_axis
        )));
    }

    let (rows, columns) =
        grid_dimensions(spec.image_count, spec.constraint_amount, spec.constraint_axis);

    let too_large = || {
        PhotoToolsError::invalid_grid(format!(
            "a {}x{} grid of {}x{} cells is too large",
            rows, columns, spec.cell_width, spec.cell_height
        ))
    };
    let canvas_width = columns.checked_mul(spec.cell_width).ok_or_else(too_large)?;
    let canvas_height = rows.checked_mul(spec.cell_height).ok_or_else(too_large)?;

    let placements = (0..spec.image_count)
        .map(|k| {
            let (column, row) = grid_cell(k, rows, columns, spec.fill_order);
            Placement {
                column,
                row,
                x: column * spec.cell_width,
                y: row * spec.cell_height,
            }
        })
        .collect();

    Ok(GridPlan {
        rows,
        columns,
        cell_width: spec.cell_width,
        cell_height: spec.cell_height,
        canvas_width,
        canvas_height,
        placements,
    })
}
