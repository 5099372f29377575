//! Batch orchestration
//!
//! Every command follows the same shape: discover the images in one
//! directory, plan the whole batch with the pure functions in [`crate::core`],
//! then write into a sibling output directory through [`ImageIo`]. Planning
//! errors surface before the output directory is created.

pub mod merge;
pub mod negative;
pub mod pad;
pub mod rename;

pub use merge::{merge_images, merged_file_name, MergeRequest};
pub use negative::invert_images;
pub use pad::{pad_images, square_padding, Padding};
pub use rename::{duplicate_names, rename_images};

use crate::abstractions::ImageIo;
use crate::config::PhotoToolsConfig;
use crate::error::{ErrorExt, PhotoToolsError, Result};
use image::ImageFormat;
use std::fmt;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// The four batch commands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BatchCommand {
    Rename,
    Pad,
    Negative,
    Merge,
}

impl BatchCommand {
    /// Suffix appended to the input directory's name
    pub fn suffix(self) -> &'static str {
        match self {
            Self::Rename => "_(renamed)",
            Self::Pad => "_(padded)",
            Self::Negative => "_(negative)",
            Self::Merge => "_(merged)",
        }
    }

    /// Command name as typed on the command line
    pub fn name(self) -> &'static str {
        match self {
            Self::Rename => "rename",
            Self::Pad => "pad",
            Self::Negative => "neg",
            Self::Merge => "merge",
        }
    }

    /// Message printed before any file is touched
    pub fn announcement(self, input_dir: &Path, output_dir: &Path) -> String {
        let (input, output) = (input_dir.display(), output_dir.display());
        match self {
            Self::Rename => format!("Moving files from {} to {}", input, output),
            Self::Pad => format!("Padding files from {} and putting them in {}", input, output),
            Self::Negative => format!(
                "Turning files from {} negative and putting them in {}",
                input, output
            ),
            Self::Merge => format!(
                "Merging files from {} and putting them in {}",
                input, output
            ),
        }
    }
}

impl fmt::Display for BatchCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Sibling output directory for `input_dir`, e.g. `scans` -> `scans_(padded)`
pub fn output_dir_for(input_dir: &Path, command: BatchCommand) -> Result<PathBuf> {
    let name = input_dir
        .file_name()
        .ok_or_else(|| PhotoToolsError::directory_unavailable(input_dir))?;

    let mut output_name = name.to_os_string();
    output_name.push(command.suffix());
    Ok(input_dir.with_file_name(output_name))
}

/// List the images in `dir`, refusing batches larger than `max_files`
pub fn discover_images(
    io: &impl ImageIo,
    config: &PhotoToolsConfig,
    dir: &Path,
) -> Result<Vec<PathBuf>> {
    let files = io.list_files(dir, &config.image_patterns)?;
    for file in &files {
        debug!("Found image {}", file.display());
    }

    if files.len() > config.max_files {
        return Err(PhotoToolsError::too_many_files(
            dir,
            files.len(),
            config.max_files,
        ));
    }

    if files.is_empty() {
        warn!(
            "No files matching {:?} in {}",
            config.image_patterns,
            dir.display()
        );
    }

    Ok(files)
}

/// Encoding for an output path, taken from its extension
pub(crate) fn format_for(path: &Path) -> Result<ImageFormat> {
    ImageFormat::from_path(path).for_path(path)
}

/// Create the output directory and count the images already in it
pub(crate) fn prepare_output(
    io: &impl ImageIo,
    config: &PhotoToolsConfig,
    output_dir: &Path,
) -> Result<usize> {
    io.create_directory(output_dir)?;
    Ok(io.list_files(output_dir, &config.image_patterns)?.len())
}

/// Outcome of one batch command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchReport {
    pub command: BatchCommand,
    pub input_dir: PathBuf,
    pub output_dir: PathBuf,
    /// Images discovered in the input directory
    pub input_files: usize,
    /// Images in the output directory that were not there before
    pub new_files: usize,
    pub dry_run: bool,
}

impl BatchReport {
    /// Report for a run that wrote nothing
    pub fn untouched(
        command: BatchCommand,
        input_dir: &Path,
        output_dir: &Path,
        input_files: usize,
        dry_run: bool,
    ) -> Self {
        Self {
            command,
            input_dir: input_dir.to_path_buf(),
            output_dir: output_dir.to_path_buf(),
            input_files,
            new_files: 0,
            dry_run,
        }
    }

    /// Report after writing, counting images added since `previous_files`
    pub(crate) fn finish(
        io: &impl ImageIo,
        config: &PhotoToolsConfig,
        command: BatchCommand,
        input_dir: &Path,
        output_dir: &Path,
        input_files: usize,
        previous_files: usize,
    ) -> Result<Self> {
        let now = io.list_files(output_dir, &config.image_patterns)?.len();
        Ok(Self {
            new_files: now.saturating_sub(previous_files),
            ..Self::untouched(command, input_dir, output_dir, input_files, false)
        })
    }
}

impl fmt::Display for BatchReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.dry_run {
            write!(
                f,
                "Dry run: {} files in {} planned, nothing written to {}",
                self.input_files,
                self.input_dir.display(),
                self.output_dir.display()
            )
        } else {
            write!(
                f,
                "{} successful: {} files in {} have been copied over to {} files in {}",
                self.command,
                self.input_files,
                self.input_dir.display(),
                self.new_files,
                self.output_dir.display()
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::abstractions::MockImageIo;

    #[test]
    fn test_output_dir_is_sibling() {
        let out = output_dir_for(Path::new("/photos/roll 12"), BatchCommand::Pad).unwrap();
        assert_eq!(out, PathBuf::from("/photos/roll 12_(padded)"));

        let out = output_dir_for(Path::new("scans"), BatchCommand::Negative).unwrap();
        assert_eq!(out, PathBuf::from("scans_(negative)"));
    }

    #[test]
    fn test_output_dir_needs_a_name() {
        let err = output_dir_for(Path::new("/"), BatchCommand::Merge).unwrap_err();
        assert!(matches!(err, PhotoToolsError::DirectoryUnavailable { .. }));
    }

    #[test]
    fn test_discover_enforces_max_files() {
        let io = MockImageIo::new()
            .with_image("roll/A1.JPG", 1, 1, [0, 0, 0])
            .with_image("roll/A2.JPG", 1, 1, [0, 0, 0])
            .with_image("roll/A3.JPG", 1, 1, [0, 0, 0]);
        let config = PhotoToolsConfig {
            max_files: 2,
            ..Default::default()
        };

        let err = discover_images(&io, &config, Path::new("roll")).unwrap_err();
        assert_eq!(
            err.user_message(),
            "There are 3 files in roll - there can be at most 2 files"
        );

        let config = PhotoToolsConfig {
            max_files: 3,
            ..Default::default()
        };
        assert_eq!(
            discover_images(&io, &config, Path::new("roll")).unwrap().len(),
            3
        );
    }

    #[test]
    fn test_report_counts_only_new_files() {
        let io = MockImageIo::new()
            .with_image("out/old.PNG", 1, 1, [0, 0, 0])
            .with_image("out/new.PNG", 1, 1, [0, 0, 0]);
        let config = PhotoToolsConfig::default();

        let report = BatchReport::finish(
            &io,
            &config,
            BatchCommand::Pad,
            Path::new("in"),
            Path::new("out"),
            1,
            1,
        )
        .unwrap();
        assert_eq!(report.new_files, 1);
        assert_eq!(
            report.to_string(),
            "pad successful: 1 files in in have been copied over to 1 files in out"
        );
    }

    #[test]
    fn test_format_for_extension() {
        assert_eq!(format_for(Path::new("a/P1.JPG")).unwrap(), ImageFormat::Jpeg);
        assert_eq!(format_for(Path::new("a/P1.PNG")).unwrap(), ImageFormat::Png);
        assert!(format_for(Path::new("a/P1")).is_err());
    }
}
