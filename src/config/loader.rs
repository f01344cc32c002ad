//! Configuration loading from disk.
//!
//! # Stages
//! ```text
//! path → absolute path → raw bytes → deserialize → validate → Configuration
//! ```
//!
//! Every failure is returned to the caller; the startup routine decides
//! to terminate the process.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::error::{ConfigError, ConfigResult};
use crate::config::schema::Configuration;
use crate::config::validation::validate_config;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Source text format of a configuration file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Yaml,
    Json,
    Toml,
}

impl ConfigFormat {
    /// Pick a format from the file extension. Unknown extensions are read as YAML.
    pub fn from_path(path: &Path) -> Self {
        match path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase())
            .as_deref()
        {
            Some("json") => ConfigFormat::Json,
            Some("toml") => ConfigFormat::Toml,
            _ => ConfigFormat::Yaml,
        }
    }

    /// Deserialize configuration text.
    pub fn parse(self, content: &str) -> Result<Configuration, BoxError> {
        let config: Configuration = match self {
            ConfigFormat::Yaml => serde_yaml::from_str(content)?,
            ConfigFormat::Json => serde_json::from_str(content)?,
            ConfigFormat::Toml => toml::from_str(content)?,
        };
        Ok(config)
    }

    /// Serialize a configuration back to text.
    pub fn render(self, config: &Configuration) -> Result<String, BoxError> {
        let text = match self {
            ConfigFormat::Yaml => serde_yaml::to_string(config)?,
            ConfigFormat::Json => serde_json::to_string_pretty(config)?,
            ConfigFormat::Toml => toml::to_string(config)?,
        };
        Ok(text)
    }
}

impl fmt::Display for ConfigFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigFormat::Yaml => f.write_str("yaml"),
            ConfigFormat::Json => f.write_str("json"),
            ConfigFormat::Toml => f.write_str("toml"),
        }
    }
}

/// Load and validate configuration from a file.
pub fn load(path: impl AsRef<Path>) -> ConfigResult<Configuration> {
    let path = resolve(path.as_ref());
    tracing::info!(path = %path.display(), "Loading configuration");

    let content = fs::read(&path).map_err(|source| ConfigError::FileRead {
        path: path.clone(),
        source,
    })?;

    let format = ConfigFormat::from_path(&path);
    tracing::debug!(%format, bytes = content.len(), "Parsing configuration");

    let config = String::from_utf8(content)
        .map_err(BoxError::from)
        .and_then(|text| format.parse(&text))
        .map_err(|source| ConfigError::Deserialize {
            path: path.clone(),
            format,
            source,
        })?;

    validate_config(&config)?;

    tracing::info!(
        listeners = config.listeners.len(),
        executors = config.executors.len(),
        filters = config.filters.len(),
        data_sources = config.data_sources.len(),
        distributed_transaction = config.distributed_transaction.is_some(),
        "Configuration loaded"
    );
    Ok(config)
}

/// Make a path absolute without touching the filesystem.
fn resolve(path: &Path) -> PathBuf {
    std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf())
}
