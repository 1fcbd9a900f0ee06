//! src/config.rs
//! ============================================================================
//! # Config: Controller Configuration Loader and Saver
//!
//! Construction-time options for a [`StateController`](crate::StateController):
//! whether pull-to-refresh and paging are available, how close to the
//! trailing edge a scroll has to get before the next page is requested, and
//! the text shown by the default content views.
//!
//! Settings are stored as TOML. Missing keys fall back to defaults, so a host
//! can ship a config file with only the values it cares about.
//!
//! ## Example
//! ```rust,ignore
//! let config = ControllerConfig::load("grid.toml").await?;
//! let controller = StateController::new(grid, config);
//! ```

use compact_str::CompactString;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::info;

use tokio::fs as TokioFs;

use crate::error::GridError;

/// Paging ("load more") configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PagingConfig {
    /// Enable scroll-driven and explicit page loading
    pub enabled: bool,

    /// Rows between the viewport's trailing edge and the end of the
    /// content at which the next page is requested
    pub threshold: usize,
}

impl Default for PagingConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            threshold: 3,
        }
    }
}

/// Text used by the default content views.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MessagesConfig {
    /// Label shown when a load finished without items and without error
    pub empty: CompactString,

    /// Retry button label of the initial-load error view
    pub retry_label: CompactString,

    /// Caption under the activity indicator
    pub loading: CompactString,

    /// Caption of the leading spinner row during pull-to-refresh
    pub refreshing: CompactString,

    /// Caption of the trailing footer while a page loads
    pub paging_loading: CompactString,

    /// Retry label of the paging error footer
    pub paging_retry_label: CompactString,
}

impl Default for MessagesConfig {
    fn default() -> Self {
        Self {
            empty: CompactString::const_new("No items found."),
            retry_label: CompactString::const_new("Try Again"),
            loading: CompactString::const_new("Loading"),
            refreshing: CompactString::const_new("Refreshing"),
            paging_loading: CompactString::const_new("Loading more"),
            paging_retry_label: CompactString::const_new("Retry"),
        }
    }
}

/// Logging configuration consumed by [`Logger`](crate::logging::Logger).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// Directory for the daily rolling log files
    pub dir: PathBuf,

    /// File name prefix, e.g. `grid` -> `grid.YYYY-MM-DD`
    pub file_prefix: CompactString,

    /// Default directive when `RUST_LOG` is not set
    pub level: CompactString,

    /// Mirror log lines to stderr (off for full-screen terminal UIs)
    pub stderr: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("logs"),
            file_prefix: CompactString::const_new("grid"),
            level: CompactString::const_new("info"),
            stderr: false,
        }
    }
}

/// Main configuration struct for a controller.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ControllerConfig {
    pub can_pull_to_refresh: bool,

    pub paging: PagingConfig,

    pub messages: MessagesConfig,

    /// Frame interval of the default activity indicator
    #[serde(with = "humantime_serde")]
    pub spinner_interval: Duration,

    pub log: LogConfig,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            can_pull_to_refresh: false,
            paging: PagingConfig::default(),
            messages: MessagesConfig::default(),
            spinner_interval: Duration::from_millis(80),
            log: LogConfig::default(),
        }
    }
}

impl ControllerConfig {
    /// Parses and validates a TOML document.
    pub fn from_toml_str(text: &str) -> Result<Self, GridError> {
        let cfg: Self = toml::from_str(text)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Loads config from a TOML file, or returns defaults if it does not exist.
    pub async fn load(path: impl AsRef<Path>) -> Result<Self, GridError> {
        let path = path.as_ref();
        if !path.exists() {
            info!(
                "No config file found at {}, using default configuration",
                path.display()
            );
            return Ok(Self::default());
        }

        info!("Loading config from {}", path.display());
        let text = TokioFs::read_to_string(path)
            .await
            .map_err(|e| GridError::config_io(path, e))?;

        Self::from_toml_str(&text)
    }

    /// Saves config as pretty TOML, creating parent directories as needed.
    pub async fn save(&self, path: impl AsRef<Path>) -> Result<(), GridError> {
        let path = path.as_ref();
        info!("Saving config to {}", path.display());

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            TokioFs::create_dir_all(parent)
                .await
                .map_err(|e| GridError::config_io(parent, e))?;
        }

        let toml_str = toml::to_string_pretty(self)?;
        TokioFs::write(path, toml_str)
            .await
            .map_err(|e| GridError::config_io(path, e))?;

        Ok(())
    }

    /// Rejects values that would make the controller misbehave.
    pub fn validate(&self) -> Result<(), GridError> {
        if self.paging.threshold == 0 {
            return Err(GridError::invalid_config(
                "paging.threshold",
                "must be at least 1 row",
            ));
        }

        if self.spinner_interval.is_zero() {
            return Err(GridError::invalid_config(
                "spinner_interval",
                "must be greater than zero",
            ));
        }

        Ok(())
    }

    /// Builder-style toggle for pull-to-refresh.
    #[must_use]
    pub const fn with_pull_to_refresh(mut self, enabled: bool) -> Self {
        self.can_pull_to_refresh = enabled;
        self
    }

    /// Builder-style toggle for paging.
    #[must_use]
    pub const fn with_paging(mut self, enabled: bool) -> Self {
        self.paging.enabled = enabled;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_document_uses_defaults() {
        let cfg = ControllerConfig::from_toml_str(
            r#"
            can_pull_to_refresh = true

            [paging]
            enabled = true
            "#,
        )
        .expect("valid config");

        assert!(cfg.can_pull_to_refresh);
        assert!(cfg.paging.enabled);
        assert_eq!(cfg.paging.threshold, 3);
        assert_eq!(cfg.messages.empty, "No items found.");
        assert_eq!(cfg.spinner_interval, Duration::from_millis(80));
    }

    #[test]
    fn test_humantime_spinner_interval() {
        let cfg = ControllerConfig::from_toml_str(r#"spinner_interval = "250ms""#)
            .expect("valid config");
        assert_eq!(cfg.spinner_interval, Duration::from_millis(250));
    }

    #[test]
    fn test_zero_threshold_rejected() {
        let err = ControllerConfig::from_toml_str("[paging]\nthreshold = 0").unwrap_err();
        assert!(matches!(err, GridError::InvalidConfig { ref field, .. } if field == "paging.threshold"));
    }

    #[test]
    fn test_malformed_toml_is_parse_error() {
        let err = ControllerConfig::from_toml_str("can_pull_to_refresh = ").unwrap_err();
        assert!(matches!(err, GridError::Config(_)));
    }

    #[tokio::test]
    async fn test_save_then_load() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("nested").join("grid.toml");

        let cfg = ControllerConfig::default()
            .with_pull_to_refresh(true)
            .with_paging(true);
        cfg.save(&path).await.expect("save");

        let loaded = ControllerConfig::load(&path).await.expect("load");
        assert!(loaded.can_pull_to_refresh);
        assert!(loaded.paging.enabled);
    }

    #[tokio::test]
    async fn test_missing_file_yields_defaults() {
        let dir = tempfile::tempdir().expect("tempdir");
        let loaded = ControllerConfig::load(dir.path().join("absent.toml"))
            .await
            .expect("defaults");
        assert!(!loaded.can_pull_to_refresh);
        assert!(!loaded.paging.enabled);
    }
}
