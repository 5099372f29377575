//! Filename index resolution
//!
//! Scanners name files like `PICT0006.JPG`, `PICT0009.JPG`, `PICT0011b.JPG`:
//! a base name, a zero-padded index and an optional single letter marking an
//! alternative take of the previous negative. Reels scanned together and
//! repeated scans leave gaps in the numbering. This module parses those names
//! and derives a dense sequence (`PICT0001`, `PICT0002`, `PICT0002b`, ...)
//! where alternative takes keep the index of the primary take before them.

use crate::error::{PhotoToolsError, Result};
use regex::Regex;
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

// Lazy base so the index is the trailing ASCII digit run; the optional final
// non-digit is the alternative-take flag.
static STEM_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(.*?)([0-9]+)([^0-9])?$").expect("Invalid regex pattern"));

// Scanner base names when the index is not a clean digit run
static BASE_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z._-]*").expect("Invalid regex pattern"));

/// A photo file name split into its indexing components
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhotoFilename {
    /// Everything before the index, e.g. `PICT`
    pub base_name: String,
    /// The original index, zero padding preserved
    pub index: String,
    /// Trailing alternative-take letter, if any
    pub alt_flag: Option<char>,
    /// Extension including the leading dot, or empty
    pub extension: String,
}

impl PhotoFilename {
    /// Width of the original index in characters
    pub fn index_width(&self) -> usize {
        self.index.chars().count()
    }

    /// Whether this file is an alternative take of a previous scan
    pub fn is_alternative_take(&self) -> bool {
        self.alt_flag.is_some()
    }
}

impl fmt::Display for PhotoFilename {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.base_name, self.index)?;
        if let Some(flag) = self.alt_flag {
            write!(f, "{}", flag)?;
        }
        write!(f, "{}", self.extension)
    }
}

/// One line of a rename plan
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenameEntry {
    /// The file as found in the source directory
    pub source: PathBuf,
    /// The resequenced file name (no directory component)
    pub file_name: String,
    /// The sequential index assigned to this file
    pub index: u32,
}

/// Split a file name into stem and extension (with its dot)
fn split_name(path: &Path) -> Result<(&str, &str)> {
    let name = path
        .file_name()
        .ok_or_else(|| PhotoToolsError::malformed_filename(path, "path has no file name"))?
        .to_str()
        .ok_or_else(|| PhotoToolsError::malformed_filename(path, "file name is not valid UTF-8"))?;

    // Same rule as Path::extension: a leading dot alone does not start an extension
    match name.rfind('.') {
        Some(dot) if dot > 0 => Ok((&name[..dot], &name[dot..])),
        _ => Ok((name, "")),
    }
}

/// Parse a photo path into base name, index, alternative flag and extension
///
/// The index is normally the trailing digit run once the alternative flag is
/// removed. Names like `PICT0011bc.JPG`, where no digit run ends the stem,
/// fall back to splitting after the leading letters: base `PICT`, index
/// `0011b`, flag `c`.
///
/// # Errors
///
/// Returns `MalformedFilename` when the stem contains no ASCII digit, or when
/// the file name cannot be read as UTF-8.
pub fn parse_filename(path: impl AsRef<Path>) -> Result<PhotoFilename> {
    let path = path.as_ref();
    let (stem, extension) = split_name(path)?;

    if !stem.bytes().any(|b| b.is_ascii_digit()) {
        return Err(PhotoToolsError::malformed_filename(
            path,
            "no numeric index in name",
        ));
    }

    if let Some(captures) = STEM_PATTERN.captures(stem) {
        return Ok(PhotoFilename {
            base_name: captures[1].to_string(),
            index: captures[2].to_string(),
            alt_flag: captures.get(3).and_then(|m| m.as_str().chars().next()),
            extension: extension.to_string(),
        });
    }

    // The pattern always matches a stem ending in a digit, so a flag is present
    let alt_flag = stem.chars().last().filter(|c| !c.is_ascii_digit());
    let rest = &stem[..stem.len() - alt_flag.map_or(0, char::len_utf8)];
    let base_len = BASE_PREFIX.find(rest).map_or(0, |m| m.end());

    Ok(PhotoFilename {
        base_name: rest[..base_len].to_string(),
        index: rest[base_len..].to_string(),
        alt_flag,
        extension: extension.to_string(),
    })
}

/// Return the alternative-take letter of a path, if it has one
///
/// Only the last character of the stem is inspected; the rest of the name
/// is not validated here.
pub fn alternative_take_flag(path: impl AsRef<Path>) -> Option<char> {
    let (stem, _) = split_name(path.as_ref()).ok()?;
    stem.chars().last().filter(|c| !c.is_ascii_digit())
}

/// Format a resequenced file name
fn format_file_name(
    base_name: &str,
    index: u32,
    width: usize,
    alt_flag: Option<char>,
    extension: &str,
) -> String {
    let mut name = format!("{}{:0width$}", base_name, index, width = width);
    if let Some(flag) = alt_flag {
        name.push(flag);
    }
    name.push_str(extension);
    name
}

/// Compute dense sequential names for an ordered batch of photo paths
///
/// `paths` must be in scan order (lexicographic by original name). The base
/// name and index width come from the first path and apply to the whole
/// batch. Every primary take advances the counter; alternative takes reuse
/// the counter of the primary take before them.
///
/// All paths are parsed before any name is produced, so a single malformed
/// name fails the whole batch.
///
/// # Example
///
/// ```
/// use phototools::core::naming::resequence;
///
/// let plan = resequence(&["PICT0006.JPG", "PICT0009.JPG", "PICT0011b.JPG"]).unwrap();
/// let names: Vec<_> = plan.iter().map(|e| e.file_name.as_str()).collect();
/// assert_eq!(names, ["PICT0001.JPG", "PICT0002.JPG", "PICT0002b.JPG"]);
/// ```
pub fn resequence<P: AsRef<Path>>(paths: &[P]) -> Result<Vec<RenameEntry>> {
    let parsed = paths
        .iter()
        .map(|path| parse_filename(path).map(|name| (path.as_ref(), name)))
        .collect::<Result<Vec<_>>>()?;

    let Some((_, first)) = parsed.first() else {
        return Ok(Vec::new());
    };
    let base_name = first.base_name.clone();
    let width = first.index_width();

    let mut counter = 0u32;
    let entries = parsed
        .iter()
        .map(|(path, name)| {
            if !name.is_alternative_take() {
                counter += 1;
            }
            RenameEntry {
                source: path.to_path_buf(),
                file_name: format_file_name(
                    &base_name,
                    counter,
                    width,
                    name.alt_flag,
                    &name.extension,
                ),
                index: counter,
            }
        })
        .collect();

    Ok(entries)
}
