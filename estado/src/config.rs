use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur while loading configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid config: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdaterConfig {
    /// Readme to patch with the current status
    pub readme_path: PathBuf,
    /// Report log keeping the run history
    pub report_path: PathBuf,
    /// Test command and its arguments
    pub test_command: Vec<String>,
}

impl Default for UpdaterConfig {
    fn default() -> Self {
        Self {
            readme_path: PathBuf::from("README.md"),
            report_path: PathBuf::from("report.md"),
            test_command: vec!["pytest".to_string(), "-q".to_string()],
        }
    }
}

impl UpdaterConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_readme_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.readme_path = path.into();
        self
    }

    pub fn with_report_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.report_path = path.into();
        self
    }

    pub fn with_test_command(mut self, command: Vec<String>) -> Self {
        self.test_command = command;
        self
    }

    /// Load configuration from a TOML file and validate it
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content)?;
        config.validate().map_err(ConfigError::Invalid)?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.readme_path.as_os_str().is_empty() {
            return Err("Readme path cannot be empty".to_string());
        }

        if self.report_path.as_os_str().is_empty() {
            return Err("Report path cannot be empty".to_string());
        }

        if self.test_command.is_empty() {
            return Err("Test command cannot be empty".to_string());
        }

        if self.test_command[0].trim().is_empty() {
            return Err("Test command binary cannot be blank".to_string());
        }

        Ok(())
    }
}
