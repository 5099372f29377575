//! Image I/O abstraction layer
//!
//! Provides a trait-based abstraction for loading, saving and listing images
//! so batch operations can run against an in-memory mock in tests.

use crate::error::{ErrorExt, PhotoToolsError, Result};
use glob::{MatchOptions, Pattern};
use image::{imageops, DynamicImage, ImageFormat, Rgb, RgbImage, Rgba, RgbaImage};
use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::{debug, trace};

/// Case-sensitive, so `*.JPG` does not pick up `*.jpg`
const MATCH_OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: true,
    require_literal_separator: true,
    require_literal_leading_dot: false,
};

/// Pixel layout of a new canvas
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CanvasMode {
    Rgb,
    Rgba,
}

/// Trait for image and directory operations
///
/// Pixel manipulation (`create_canvas`, `paste_image`, `invert_colours`) has
/// default implementations; implementors only provide the I/O.
pub trait ImageIo {
    /// Read an image's width and height without decoding all pixels
    fn load_dimensions(&self, path: &Path) -> Result<(u32, u32)>;

    /// Decode an image
    fn load_image(&self, path: &Path) -> Result<DynamicImage>;

    /// Encode an image to `path` in `format`
    fn save_image(&self, image: &DynamicImage, path: &Path, format: ImageFormat) -> Result<()>;

    /// List regular files directly in `dir` matching any of `patterns`, sorted by name
    fn list_files(&self, dir: &Path, patterns: &[String]) -> Result<Vec<PathBuf>>;

    /// Ensure `path` exists as a directory
    fn create_directory(&self, path: &Path) -> Result<()>;

    /// Create a canvas filled with `background`
    ///
    /// The alpha component is ignored for [`CanvasMode::Rgb`].
    fn create_canvas(
        &self,
        width: u32,
        height: u32,
        mode: CanvasMode,
        background: [u8; 4],
    ) -> DynamicImage {
        match mode {
            CanvasMode::Rgb => {
                let [r, g, b, _] = background;
                DynamicImage::ImageRgb8(RgbImage::from_pixel(width, height, Rgb([r, g, b])))
            }
            CanvasMode::Rgba => {
                DynamicImage::ImageRgba8(RgbaImage::from_pixel(width, height, Rgba(background)))
            }
        }
    }

    /// Copy `image` onto `canvas` with its top-left corner at (x, y)
    ///
    /// Pixels replace the canvas contents; parts outside the canvas are clipped.
    fn paste_image(&self, canvas: &mut DynamicImage, image: &DynamicImage, x: u32, y: u32) {
        imageops::replace(canvas, image, i64::from(x), i64::from(y));
    }

    /// Invert colour channels in place, leaving alpha untouched
    fn invert_colours(&self, image: &mut DynamicImage) {
        image.invert();
    }
}

/// Compile glob patterns once per listing
fn compile_patterns(patterns: &[String]) -> Result<Vec<Pattern>> {
    patterns
        .iter()
        .map(|p| {
            Pattern::new(p).map_err(|e| {
                PhotoToolsError::config(format!("Invalid image pattern '{}'", p)).with_source(e)
            })
        })
        .collect()
}

fn name_matches(path: &Path, patterns: &[Pattern]) -> bool {
    path.file_name()
        .and_then(|n| n.to_str())
        .is_some_and(|name| patterns.iter().any(|p| p.matches_with(name, MATCH_OPTIONS)))
}

/// Real implementation of ImageIo backed by the `image` crate and the file system
#[derive(Debug, Default, Clone, Copy)]
pub struct RealImageIo;

impl RealImageIo {
    pub fn new() -> Self {
        Self
    }
}

impl ImageIo for RealImageIo {
    fn load_dimensions(&self, path: &Path) -> Result<(u32, u32)> {
        image::image_dimensions(path).for_path(path)
    }

    fn load_image(&self, path: &Path) -> Result<DynamicImage> {
        trace!("Decoding {}", path.display());
        image::open(path).for_path(path)
    }

    fn save_image(&self, image: &DynamicImage, path: &Path, format: ImageFormat) -> Result<()> {
        debug!("Saving {} as {:?}", path.display(), format);
        image.save_with_format(path, format).for_path(path)
    }

    fn list_files(&self, dir: &Path, patterns: &[String]) -> Result<Vec<PathBuf>> {
        let compiled = compile_patterns(patterns)?;

        let mut files = BTreeMap::new();
        for entry in std::fs::read_dir(dir).for_path(dir)? {
            let entry = entry.for_path(dir)?;
            let path = entry.path();
            // Skip entries whose metadata cannot be read (broken symlinks)
            let is_file = std::fs::metadata(&path).map(|m| m.is_file()).unwrap_or(false);
            if is_file && name_matches(&path, &compiled) {
                files.insert(entry.file_name(), path);
            }
        }

        Ok(files.into_values().collect())
    }

    fn create_directory(&self, path: &Path) -> Result<()> {
        if path.is_dir() {
            return Ok(());
        }
        std::fs::create_dir(path).map_err(|source| PhotoToolsError::DirectoryUnavailable {
            path: path.to_path_buf(),
            source: Some(source),
        })
    }
}

/// Mock implementation of ImageIo for testing
///
/// Images live in memory keyed by path. Saved images are stored back into
/// the same map, so a later listing or load sees them.
#[derive(Default)]
pub struct MockImageIo {
    images: Mutex<BTreeMap<PathBuf, DynamicImage>>,
    directories: Mutex<BTreeSet<PathBuf>>,
    saved: Mutex<Vec<(PathBuf, ImageFormat)>>,
    /// Directories that cannot be created
    pub unwritable: Vec<PathBuf>,
}

impl MockImageIo {
    /// Create an empty mock
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a solid-colour RGB image at `path`, creating its directory
    pub fn with_image(
        self,
        path: impl Into<PathBuf>,
        width: u32,
        height: u32,
        colour: [u8; 3],
    ) -> Self {
        let image = DynamicImage::ImageRgb8(RgbImage::from_pixel(width, height, Rgb(colour)));
        self.with_dynamic_image(path, image)
    }

    /// Add an arbitrary image at `path`
    pub fn with_dynamic_image(self, path: impl Into<PathBuf>, image: DynamicImage) -> Self {
        let path = path.into();
        if let Some(parent) = path.parent() {
            lock(&self.directories).insert(parent.to_path_buf());
        }
        lock(&self.images).insert(path, image);
        self
    }

    /// Add an existing directory
    pub fn with_directory(self, path: impl Into<PathBuf>) -> Self {
        lock(&self.directories).insert(path.into());
        self
    }

    /// Mark a directory as impossible to create
    pub fn with_unwritable(mut self, path: impl Into<PathBuf>) -> Self {
        self.unwritable.push(path.into());
        self
    }

    /// Every save performed, in order
    pub fn saved(&self) -> Vec<(PathBuf, ImageFormat)> {
        lock(&self.saved).clone()
    }

    /// The image stored at `path`, if any
    pub fn image(&self, path: &Path) -> Option<DynamicImage> {
        lock(&self.images).get(path).cloned()
    }

    pub fn has_directory(&self, path: &Path) -> bool {
        lock(&self.directories).contains(path)
    }
}

fn lock<T>(mutex: &Mutex<T>) -> std::sync::MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

fn not_found(path: &Path) -> PhotoToolsError {
    PhotoToolsError::Io {
        path: path.to_path_buf(),
        source: std::io::Error::new(std::io::ErrorKind::NotFound, "no such mock image"),
    }
}

impl ImageIo for MockImageIo {
    fn load_dimensions(&self, path: &Path) -> Result<(u32, u32)> {
        let images = lock(&self.images);
        let image = images.get(path).ok_or_else(|| not_found(path))?;
        Ok((image.width(), image.height()))
    }

    fn load_image(&self, path: &Path) -> Result<DynamicImage> {
        self.image(path).ok_or_else(|| not_found(path))
    }

    fn save_image(&self, image: &DynamicImage, path: &Path, format: ImageFormat) -> Result<()> {
        let parent = path.parent().unwrap_or_else(|| Path::new(""));
        if !self.has_directory(parent) {
            return Err(not_found(parent));
        }
        lock(&self.saved).push((path.to_path_buf(), format));
        lock(&self.images).insert(path.to_path_buf(), image.clone());
        Ok(())
    }

    fn list_files(&self, dir: &Path, patterns: &[String]) -> Result<Vec<PathBuf>> {
        if !self.has_directory(dir) {
            return Err(not_found(dir));
        }
        let compiled = compile_patterns(patterns)?;
        Ok(lock(&self.images)
            .keys()
            .filter(|path| path.parent() == Some(dir) && name_matches(path, &compiled))
            .cloned()
            .collect())
    }

    fn create_directory(&self, path: &Path) -> Result<()> {
        if self.unwritable.iter().any(|p| p == path) {
            return Err(PhotoToolsError::directory_unavailable(path));
        }
        lock(&self.directories).insert(path.to_path_buf());
        Ok(())
    }
}
