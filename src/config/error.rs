//! Configuration error definitions.

use std::path::PathBuf;

use thiserror::Error;

use crate::config::loader::ConfigFormat;

/// Errors that can occur while decoding or loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("failed to read config file {}", path.display())]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file content does not match the configuration schema.
    #[error("failed to parse {format} config {}", path.display())]
    Deserialize {
        path: PathBuf,
        format: ConfigFormat,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// An enum field holds text outside its closed set.
    #[error("unrecognized {kind}: {value:?}")]
    UnrecognizedEnumValue { kind: &'static str, value: String },

    /// An enum field was given an explicit null instead of a value.
    #[error("can't decode a null {kind}")]
    InvalidEnumTarget { kind: &'static str },

    /// More than one storage driver is configured.
    #[error("multiple storage drivers specified in distributed transaction config: {}", drivers.join(", "))]
    AmbiguousStorageDriver { drivers: Vec<String> },

    /// A storage parameter was set while no driver is configured.
    #[error("no storage driver specified in distributed transaction config")]
    NoStorageDriver,
}

/// Result type for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;
