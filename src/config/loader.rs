use super::{get_global_config_dir, PhotoToolsConfig};
use crate::error::{ErrorExt, PhotoToolsError, Result};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Loads configuration from defaults, a config file and the environment
pub struct ConfigLoader {
    global_path: Option<PathBuf>,
}

impl ConfigLoader {
    /// Loader reading the global `config.toml`, if the platform has a config directory
    pub fn new() -> Self {
        let global_path = get_global_config_dir()
            .map(|dir| dir.join("config.toml"))
            .ok();
        Self { global_path }
    }

    /// Loader reading the global file from `path` instead
    pub fn with_global_path(path: impl Into<PathBuf>) -> Self {
        Self {
            global_path: Some(path.into()),
        }
    }

    /// Build the effective configuration
    ///
    /// An explicit path replaces the global file and must exist. Environment
    /// overrides apply last, then the result is validated.
    pub fn load(&self, explicit_path: Option<&Path>) -> Result<PhotoToolsConfig> {
        let mut config = self.load_file(explicit_path)?;
        config.merge_env_vars()?;
        config.validate()?;
        Ok(config)
    }

    /// Load the file layer only, without environment overrides or validation
    pub fn load_file(&self, explicit_path: Option<&Path>) -> Result<PhotoToolsConfig> {
        match explicit_path {
            Some(path) => {
                if !path.is_file() {
                    return Err(PhotoToolsError::config(format!(
                        "Configuration file not found: {}",
                        path.display()
                    )));
                }
                Self::read(path)
            }
            None => match &self.global_path {
                Some(path) if path.is_file() => Self::read(path),
                _ => {
                    debug!("No global configuration file, using defaults");
                    Ok(PhotoToolsConfig::default())
                }
            },
        }
    }

    fn read(path: &Path) -> Result<PhotoToolsConfig> {
        debug!("Loading configuration from {}", path.display());
        let content = std::fs::read_to_string(path).for_path(path)?;
        PhotoToolsConfig::from_toml_str(&content, &path.display().to_string())
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}
