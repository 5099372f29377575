use std::path::{Path, PathBuf};
use thiserror::Error;

pub mod codes;
pub mod helpers;

pub use codes::{describe_error_code, ErrorCode};
pub use helpers::ErrorExt;

/// The unified error type for phototools
///
/// Every batch operation fails as a whole: these errors are raised before the
/// first output file is written whenever the input list allows it.
#[derive(Error, Debug)]
pub enum PhotoToolsError {
    #[error("[E1001] Malformed filename '{}': {reason}", .path.display())]
    MalformedFilename { path: PathBuf, reason: String },

    #[error("[E2001] Invalid grid constraint: {message}")]
    InvalidGridConstraint { message: String },

    #[error("[E3001] Too many files in '{}': found {found}, at most {max} allowed", .dir.display())]
    TooManyFiles {
        dir: PathBuf,
        found: usize,
        max: usize,
    },

    #[error("[E3002] Directory unavailable: '{}'", .path.display())]
    DirectoryUnavailable {
        path: PathBuf,
        #[source]
        source: Option<std::io::Error>,
    },

    #[error("[E4001] Image error for '{}'", .path.display())]
    Image {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("[E4002] File error for '{}'", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("[E5001] Configuration error: {message}")]
    Config {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl PhotoToolsError {
    /// Create a malformed filename error
    pub fn malformed_filename(path: impl AsRef<Path>, reason: impl Into<String>) -> Self {
        Self::MalformedFilename {
            path: path.as_ref().to_path_buf(),
            reason: reason.into(),
        }
    }

    /// Create an invalid grid constraint error
    pub fn invalid_grid(message: impl Into<String>) -> Self {
        Self::InvalidGridConstraint {
            message: message.into(),
        }
    }

    /// Create a too-many-files error
    pub fn too_many_files(dir: impl AsRef<Path>, found: usize, max: usize) -> Self {
        Self::TooManyFiles {
            dir: dir.as_ref().to_path_buf(),
            found,
            max,
        }
    }

    /// Create a directory error without an underlying cause
    pub fn directory_unavailable(path: impl AsRef<Path>) -> Self {
        Self::DirectoryUnavailable {
            path: path.as_ref().to_path_buf(),
            source: None,
        }
    }

    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
            source: None,
        }
    }

    /// Attach a source error to a configuration error
    pub fn with_source(
        mut self,
        cause: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        if let Self::Config { source, .. } = &mut self {
            *source = Some(cause.into());
        }
        self
    }

    /// Get the error code
    pub fn code(&self) -> u16 {
        match self {
            Self::MalformedFilename { .. } => ErrorCode::MALFORMED_FILENAME,
            Self::InvalidGridConstraint { .. } => ErrorCode::INVALID_GRID_CONSTRAINT,
            Self::TooManyFiles { .. } => ErrorCode::TOO_MANY_FILES,
            Self::DirectoryUnavailable { .. } => ErrorCode::DIRECTORY_UNAVAILABLE,
            Self::Image { .. } => ErrorCode::IMAGE_CODEC,
            Self::Io { .. } => ErrorCode::FILE_IO,
            Self::Config { .. } => ErrorCode::CONFIG_INVALID,
        }
    }

    /// Get the process exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Config { .. } => 2,
            Self::MalformedFilename { .. } => 3,
            Self::InvalidGridConstraint { .. } => 4,
            Self::TooManyFiles { .. } => 5,
            Self::DirectoryUnavailable { .. } => 6,
            Self::Image { .. } | Self::Io { .. } => 7,
        }
    }

    /// Get a user-friendly error message
    pub fn user_message(&self) -> String {
        match self {
            Self::MalformedFilename { path, reason } => format!(
                "Cannot reindex '{}': {}. No files were written.",
                path.display(),
                reason
            ),
            Self::InvalidGridConstraint { message } => {
                format!("Cannot lay out the merged image: {}", message)
            }
            Self::TooManyFiles { dir, found, max } => format!(
                "There are {} files in {} - there can be at most {} files",
                found,
                dir.display(),
                max
            ),
            Self::DirectoryUnavailable { path, .. } => format!(
                "Directory {} does not exist, and could not create it.",
                path.display()
            ),
            Self::Image { path, source } => {
                format!("Could not process image {}: {}", path.display(), source)
            }
            Self::Io { path, source } => format!("Could not access {}: {}", path.display(), source),
            Self::Config { message, .. } => format!("Configuration problem: {}", message),
        }
    }

    /// Get a developer-friendly error message with the full source chain
    pub fn developer_message(&self) -> String {
        let mut message = self.to_string();
        let mut source = std::error::Error::source(self);
        while let Some(cause) = source {
            message.push_str(&format!("\n  caused by: {}", cause));
            source = std::error::Error::source(cause);
        }
        message
    }
}

/// Type alias for Results using PhotoToolsError
pub type Result<T> = std::result::Result<T, PhotoToolsError>;

/// Type alias for application Results (using anyhow for flexibility)
pub type AppResult<T> = anyhow::Result<T>;
