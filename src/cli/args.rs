//! CLI argument structures
//!
//! This module defines the command-line interface used by phototools.

use crate::core::GridAxis;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Batch tools for directories of scanned photos
#[derive(Parser)]
#[command(name = "phototools")]
#[command(about = "phototools - Rename, pad, invert and merge directories of scanned photos", long_about = None)]
#[command(version, arg_required_else_help = true)]
pub struct Cli {
    /// Enable verbose output (-v for debug, -vv for trace, -vvv for all)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to a configuration file (replaces the global config.toml)
    #[arg(short = 'c', long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Reindex ordered but non-sequential file names
    #[command(name = "rename")]
    Rename {
        /// Directory holding the scans
        dir: PathBuf,

        /// Print the new names without writing any files
        #[arg(long)]
        dry_run: bool,
    },

    /// Make each image square by padding its shorter sides
    #[command(name = "pad")]
    Pad {
        /// Directory holding the images
        dir: PathBuf,

        /// Padding colour (defaults to the configured pad_colour)
        #[arg(value_enum)]
        colour: Option<PadColour>,
    },

    /// Invert each image's colours
    #[command(name = "neg")]
    Neg {
        /// Directory holding the images
        dir: PathBuf,
    },

    /// Tile all images into one grid image
    #[command(name = "merge")]
    Merge {
        /// Directory holding the images
        dir: PathBuf,

        /// Number of rows or columns, depending on AXIS
        #[arg(value_parser = clap::value_parser!(u32).range(1..))]
        amount: u32,

        /// Which dimension AMOUNT fixes: row or column
        axis: GridAxis,

        /// Order images are laid out in: row or column
        fill: GridAxis,

        /// Print the planned grid without writing the merged image
        #[arg(long)]
        dry_run: bool,
    },
}

/// Padding colours selectable on the command line
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PadColour {
    Black,
    White,
}

impl PadColour {
    pub fn rgb(self) -> [u8; 3] {
        match self {
            Self::Black => [0, 0, 0],
            Self::White => [255, 255, 255],
        }
    }
}
