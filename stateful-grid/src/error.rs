//! src/error.rs
//! ============================================================================
//! # `GridError`: Unified Error Type for the Stateful Grid
//!
//! Load failures reported by the host are *not* crate errors: they travel as
//! opaque [`LoadError`](crate::model::outcome::LoadError) payloads and only
//! ever change which view is presented. `GridError` covers the fallible
//! plumbing around the controller (configuration and logging setup).

use std::{io, path::PathBuf};
use thiserror::Error;

/// Unified error type for configuration and setup operations.
#[derive(Debug, Error)]
pub enum GridError {
    /// TOML config parsing error.
    #[error("Config parse error: {0}")]
    Config(#[from] toml::de::Error),

    /// TOML config serialization error.
    #[error("Config serialize error: {0}")]
    ConfigSerialize(#[from] toml::ser::Error),

    /// Config file I/O error with path.
    #[error("Failed to access config file {path:?}: {source}")]
    ConfigIo {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A config value parsed but is not usable.
    #[error("Invalid config value: {field} - {message}")]
    InvalidConfig {
        field: String, // "paging.threshold", "spinner_interval", etc.
        message: String,
    },

    /// Logging subscriber could not be installed.
    #[error("Logging setup failed: {0}")]
    Logging(String),
}

impl GridError {
    /// Create a config file access error
    pub fn config_io<P: Into<PathBuf>>(path: P, source: io::Error) -> Self {
        Self::ConfigIo {
            path: path.into(),
            source,
        }
    }

    /// Create an invalid config value error
    pub fn invalid_config<S1: Into<String>, S2: Into<String>>(field: S1, message: S2) -> Self {
        Self::InvalidConfig {
            field: field.into(),
            message: message.into(),
        }
    }
}

// Logger setup is built with `anyhow` context chains.
impl From<anyhow::Error> for GridError {
    fn from(e: anyhow::Error) -> Self {
        Self::Logging(format!("{e:#}"))
    }
}
