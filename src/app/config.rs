//! Application configuration
//!
//! Runtime settings resolved from the command line and the loaded config.

use crate::config::PhotoToolsConfig;

/// Application configuration structure
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Verbosity level for logging
    pub verbose: u8,
    /// Log level used at verbosity 0
    pub base_log_level: String,
}

impl AppConfig {
    /// Create a new application configuration
    pub fn new(verbose: u8, config: &PhotoToolsConfig) -> Self {
        Self {
            verbose,
            base_log_level: config.log_level.clone(),
        }
    }

    /// Get the log filter based on verbosity
    pub fn log_level(&self) -> &str {
        match self.verbose {
            0 => self.base_log_level.as_str(),
            1 => "debug",
            _ => "trace",
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            verbose: 0,
            base_log_level: "info".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_follows_verbosity() {
        let config = PhotoToolsConfig {
            log_level: "warn".to_string(),
            ..Default::default()
        };

        assert_eq!(AppConfig::new(0, &config).log_level(), "warn");
        assert_eq!(AppConfig::new(1, &config).log_level(), "debug");
        assert_eq!(AppConfig::new(2, &config).log_level(), "trace");
        assert_eq!(AppConfig::new(3, &config).log_level(), "trace");
        assert_eq!(AppConfig::default().log_level(), "info");
    }
}
