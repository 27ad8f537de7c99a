//! Configuration loading and validation.

use super::Config;
use crate::error::ConfigError;
use crate::paths;
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

impl Config {
    /// Load configuration from the default path.
    pub fn load_default() -> Result<Self, ConfigError> {
        let path = paths::config_file()?;
        Self::load(&path)
    }

    /// Load configuration from a file path.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::NotFound(path.to_path_buf()));
        }

        let content = fs::read_to_string(path)?;
        let config = Self::parse(&content)?;
        config.validate()?;
        debug!(path = %path.display(), "loaded configuration");
        Ok(config)
    }

    /// Load from `path`, treating a missing file as the default configuration.
    pub fn load_optional(path: &Path) -> Result<Self, ConfigError> {
        match Self::load(path) {
            Err(ConfigError::NotFound(_)) => Ok(Self::default()),
            other => other,
        }
    }

    /// Parse configuration from a string.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        json5::from_str(content).map_err(|e| ConfigError::Json5(e.to_string()))
    }

    /// Validate the configuration, collecting all errors before returning.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut errors = Vec::new();

        match &self.clipboard.command {
            Some(command) if command.trim().is_empty() => {
                errors.push("clipboard.command must not be empty".to_string());
            }
            Some(command) if command.chars().any(char::is_whitespace) => {
                errors.push(format!(
                    "clipboard.command '{}' contains whitespace; put arguments in clipboard.args",
                    command
                ));
            }
            None if !self.clipboard.args.is_empty() => {
                errors.push("clipboard.args is set but clipboard.command is not".to_string());
            }
            _ => {}
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Validation(errors.join("; ")))
        }
    }

    /// Load configuration from the default path, falling back to defaults.
    ///
    /// A missing file is silent; an unreadable or invalid file is logged and
    /// ignored so that secret lookups keep working.
    pub fn load_or_default() -> Self {
        match Self::load_default() {
            Ok(config) => config,
            Err(ConfigError::NotFound(_)) => Self::default(),
            Err(e) => {
                warn!("ignoring configuration: {e}");
                Self::default()
            }
        }
    }
}
