//! Configuration
//!
//! Settings are read from a file with two optional sections:
//!
//! ```toml
//! [validator]
//! default_max_length = 20
//! max_depth = 32
//!
//! [database]
//! driver = "mysql"
//! host = "localhost"
//! db_name = "dealership"
//! charset = "utf8mb4"
//! user = "app"
//! password = "secret"
//! ```
//!
//! TOML files require the `config-file` feature; YAML files are always
//! supported.

pub mod database;
pub mod validator;

pub use database::DatabaseSettings;
pub use validator::{DEFAULT_MAX_DEPTH, DEFAULT_MAX_LENGTH, ValidatorConfig};

use anyhow::{Context, Result};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;
use tracing::info;

/// Error in configuration settings
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error(
        "Configuration settings must contain the keys \"driver\", \"host\", \"db_name\", \"charset\", \"user\", and \"password\" (missing: {})",
        .0.join(", ")
    )]
    MissingKeys(Vec<String>),
    #[error("Parse error: {0}")]
    ParseError(String),
    #[error("Unsupported configuration format: {0}")]
    UnsupportedFormat(String),
}

#[derive(Debug, Default, Deserialize)]
struct RawSettings {
    #[serde(default)]
    validator: ValidatorConfig,
    #[serde(default)]
    database: Option<BTreeMap<String, String>>,
}

/// Loaded settings
#[derive(Debug, Clone, Default)]
pub struct Settings {
    pub validator: ValidatorConfig,
    pub database: Option<DatabaseSettings>,
}

impl Settings {
    fn from_raw(raw: RawSettings) -> Result<Self, ConfigError> {
        let database = raw
            .database
            .as_ref()
            .map(DatabaseSettings::from_map)
            .transpose()?;
        Ok(Self {
            validator: raw.validator,
            database,
        })
    }

    /// Parse settings from TOML text
    #[cfg(feature = "config-file")]
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let raw: RawSettings =
            toml::from_str(content).map_err(|e| ConfigError::ParseError(e.to_string()))?;
        Self::from_raw(raw)
    }

    /// Parse settings from YAML text
    pub fn from_yaml_str(content: &str) -> Result<Self, ConfigError> {
        let raw: RawSettings =
            serde_yaml::from_str(content).map_err(|e| ConfigError::ParseError(e.to_string()))?;
        Self::from_raw(raw)
    }

    /// Load settings from a file, choosing the format by extension
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read configuration file {}", path.display()))?;

        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or_default()
            .to_ascii_lowercase();

        let settings = match extension.as_str() {
            #[cfg(feature = "config-file")]
            "toml" => Self::from_toml_str(&content),
            "yaml" | "yml" => Self::from_yaml_str(&content),
            other => Err(ConfigError::UnsupportedFormat(other.to_string())),
        }
        .with_context(|| format!("Invalid configuration in {}", path.display()))?;

        info!("Loaded configuration from {}", path.display());
        Ok(settings)
    }
}
