//! Field configuration
//!
//! Default field settings live in `~/.config/datefield/config.yaml`:
//!
//! ```yaml
//! format: yyyy-LL-dd
//! attributes:
//!   placeholder: yyyy-mm-dd
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::field::{Attributes, DateInputProps, DEFAULT_FORMAT};

/// Default props for fields created by the binary
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldConfig {
    /// Format string (e.g., "dd-LL-yyyy", "HH:mm")
    #[serde(default = "default_format")]
    pub format: String,

    /// Pass-through attributes for the text input
    #[serde(default)]
    pub attributes: Attributes,
}

fn default_format() -> String {
    DEFAULT_FORMAT.to_string()
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            format: default_format(),
            attributes: Attributes::new(),
        }
    }
}

/// Errors that can occur when loading a config file
#[derive(Debug, Clone)]
pub enum ConfigError {
    IoError(String),
    ParseError(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::IoError(e) => write!(f, "IO error: {}", e),
            ConfigError::ParseError(e) => write!(f, "Parse error: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {}

impl FieldConfig {
    /// Load config from the default location, or return defaults if not found
    pub fn load() -> Self {
        let Some(path) = crate::config_paths::config_file() else {
            tracing::debug!("No config directory available, using defaults");
            return Self::default();
        };

        if !path.exists() {
            tracing::debug!(
                "Config file not found at {}, using defaults",
                path.display()
            );
            return Self::default();
        }

        match Self::load_from(&path) {
            Ok(config) => {
                tracing::info!("Loaded config from {}", path.display());
                config
            }
            Err(e) => {
                tracing::warn!("Failed to load config at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Load config from a specific file
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::IoError(format!("{}: {}", path.display(), e)))?;
        Self::from_yaml(&content)
    }

    /// Parse config from YAML text. An empty document yields the defaults.
    pub fn from_yaml(content: &str) -> Result<Self, ConfigError> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content).map_err(|e| ConfigError::ParseError(e.to_string()))
    }

    /// Props for a new field using this config
    pub fn to_props(&self) -> DateInputProps {
        DateInputProps {
            format: self.format.clone(),
            attributes: self.attributes.clone(),
            ..DateInputProps::default()
        }
    }
}
