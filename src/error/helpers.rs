use super::PhotoToolsError;
use std::path::Path;

/// Extension trait for attaching a path to low-level errors
pub trait ErrorExt<T> {
    /// Convert to a file I/O error for `path`
    fn for_path(self, path: impl AsRef<Path>) -> Result<T, PhotoToolsError>;
}

impl<T> ErrorExt<T> for std::io::Result<T> {
    fn for_path(self, path: impl AsRef<Path>) -> Result<T, PhotoToolsError> {
        self.map_err(|source| PhotoToolsError::Io {
            path: path.as_ref().to_path_buf(),
            source,
        })
    }
}

impl<T> ErrorExt<T> for image::ImageResult<T> {
    fn for_path(self, path: impl AsRef<Path>) -> Result<T, PhotoToolsError> {
        self.map_err(|source| PhotoToolsError::Image {
            path: path.as_ref().to_path_buf(),
            source,
        })
    }
}
