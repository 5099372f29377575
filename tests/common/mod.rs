//! Common test utilities and helpers

#![allow(dead_code)]

use anyhow::Result;
use assert_cmd::Command;
use image::{Rgb, RgbImage};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A scratch directory holding one roll of scans
pub struct PhotoRoll {
    temp_dir: TempDir,
    roll: PathBuf,
    config: PathBuf,
}

impl PhotoRoll {
    /// Create an empty roll directory named `roll` and a default config file
    pub fn new() -> Result<Self> {
        let temp_dir = TempDir::new()?;
        let roll = temp_dir.path().join("roll");
        fs::create_dir(&roll)?;
        let config = temp_dir.path().join("phototools.toml");
        fs::write(&config, "")?;
        Ok(Self {
            temp_dir,
            roll,
            config,
        })
    }

    /// Write a solid-colour image; the format follows the extension
    pub fn with_image(self, name: &str, width: u32, height: u32, colour: [u8; 3]) -> Result<Self> {
        RgbImage::from_pixel(width, height, Rgb(colour)).save(self.roll.join(name))?;
        Ok(self)
    }

    /// Write an arbitrary non-image file
    pub fn with_file(self, name: &str, content: &str) -> Result<Self> {
        fs::write(self.roll.join(name), content)?;
        Ok(self)
    }

    /// Replace the config file contents
    pub fn with_config(self, content: &str) -> Result<Self> {
        fs::write(&self.config, content)?;
        Ok(self)
    }

    pub fn roll(&self) -> &Path {
        &self.roll
    }

    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Sibling output directory, e.g. `roll_(padded)`
    pub fn output(&self, suffix: &str) -> PathBuf {
        self.temp_dir.path().join(format!("roll{}", suffix))
    }

    /// Sorted file names in `dir`
    pub fn file_names(dir: &Path) -> Vec<String> {
        let mut names: Vec<String> = fs::read_dir(dir)
            .map(|entries| {
                entries
                    .filter_map(|e| e.ok())
                    .map(|e| e.file_name().to_string_lossy().into_owned())
                    .collect()
            })
            .unwrap_or_default();
        names.sort();
        names
    }

    /// The phototools binary, isolated from user config and environment
    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("phototools").unwrap();
        cmd.env_remove("PHOTOTOOLS_LOG_LEVEL")
            .env_remove("PHOTOTOOLS_MAX_FILES")
            .env_remove("RUST_LOG")
            .arg("--config")
            .arg(&self.config);
        cmd
    }
}
