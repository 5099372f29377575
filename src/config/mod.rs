use crate::error::{PhotoToolsError, Result};
use directories::ProjectDirs;
use serde::Deserialize;
use std::path::PathBuf;

pub mod loader;

pub use loader::ConfigLoader;

/// Log levels accepted in `log_level` and `PHOTOTOOLS_LOG_LEVEL`
pub const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Get the global phototools directory holding `config.toml`
pub fn get_global_config_dir() -> Result<PathBuf> {
    ProjectDirs::from("com", "phototools", "phototools")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| PhotoToolsError::config("Could not determine home directory"))
}

/// Settings shared by every batch command
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PhotoToolsConfig {
    /// Log level used when no `-v` flag is given
    pub log_level: String,
    /// Largest number of images a single command will touch
    pub max_files: usize,
    /// Glob patterns selecting image files in the input directory
    pub image_patterns: Vec<String>,
    /// Padding colour when `pad` is run without a colour
    pub pad_colour: [u8; 3],
    /// RGBA fill behind merged images
    pub merge_background: [u8; 4],
}

impl Default for PhotoToolsConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            max_files: 1000,
            image_patterns: vec!["*.JPG".to_string(), "*.JPEG".to_string(), "*.PNG".to_string()],
            pad_colour: [127, 127, 127],
            merge_background: [255, 255, 255, 255],
        }
    }
}

impl PhotoToolsConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a TOML document, naming `origin` in any error
    pub fn from_toml_str(content: &str, origin: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| {
            PhotoToolsError::config(format!("Failed to parse {}", origin)).with_source(e)
        })
    }

    /// Apply `PHOTOTOOLS_*` environment overrides
    pub fn merge_env_vars(&mut self) -> Result<()> {
        self.apply_overrides(|key| std::env::var(key).ok())
    }

    /// Apply overrides from `lookup`, keyed by environment variable name
    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) -> Result<()> {
        if let Some(log_level) = lookup("PHOTOTOOLS_LOG_LEVEL") {
            self.log_level = log_level.trim().to_lowercase();
        }

        if let Some(max_files) = lookup("PHOTOTOOLS_MAX_FILES") {
            self.max_files = max_files.trim().parse().map_err(|e| {
                PhotoToolsError::config(format!(
                    "PHOTOTOOLS_MAX_FILES must be a positive integer, got '{}'",
                    max_files
                ))
                .with_source(e)
            })?;
        }

        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        if self.max_files == 0 {
            return Err(PhotoToolsError::config("max_files must be at least 1"));
        }

        if self.image_patterns.is_empty() {
            return Err(PhotoToolsError::config(
                "image_patterns must contain at least one pattern",
            ));
        }

        if !LOG_LEVELS.contains(&self.log_level.as_str()) {
            return Err(PhotoToolsError::config(format!(
                "Unknown log_level '{}', expected one of: {}",
                self.log_level,
                LOG_LEVELS.join(", ")
            )));
        }

        Ok(())
    }
}
