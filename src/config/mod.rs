//! Configuration module for Vigil
//!
//! Provides layered configuration loading from files, environment variables, and defaults.
//!
//! # Configuration Precedence
//!
//! 1. CLI arguments (highest priority)
//! 2. Environment variables (`VIGIL_*`)
//! 3. Configuration file (TOML)
//! 4. Default values (lowest priority)
//!
//! # Example
//!
//! ```rust
//! use vigil::config::VigilConfig;
//!
//! // Load defaults
//! let config = VigilConfig::default();
//! assert_eq!(config.monitor.period_days, 28);
//!
//! // Parse from TOML
//! let toml = r#"
//! [monitor]
//! period_days = 7
//! "#;
//! let config: VigilConfig = toml::from_str(toml).unwrap();
//! assert_eq!(config.monitor.period_days, 7);
//! ```

pub mod error;
pub mod labels;
pub mod logging;
pub mod monitor;
pub mod store;

pub use error::ConfigError;
pub use labels::LabelConfig;
pub use logging::{LogFormat, LoggingConfig};
pub use monitor::MonitorConfig;
pub use store::{StoreConfig, StoreKind};

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Unified configuration for a Vigil monitoring run.
///
/// Aggregates all configuration sections: the artifact board, the monitoring
/// run parameters, the outcome label encoding, and logging.
///
/// # Example
///
/// ```rust
/// use vigil::config::VigilConfig;
///
/// let config = VigilConfig::default();
/// assert_eq!(config.monitor.period_days, 28);
/// assert_eq!(config.labels.mapping.get("FAIL"), Some(&1.0));
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct VigilConfig {
    /// Artifact board settings
    pub store: StoreConfig,
    /// Monitoring run settings
    pub monitor: MonitorConfig,
    /// Outcome label encoding
    pub labels: LabelConfig,
    /// Logging configuration
    pub logging: LoggingConfig,
}

impl VigilConfig {
    /// Load configuration from a TOML file
    ///
    /// If path is None, returns default configuration.
    /// If path doesn't exist, returns NotFound error.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(p) => {
                if !p.exists() {
                    return Err(ConfigError::NotFound(p.to_path_buf()));
                }
                let content = std::fs::read_to_string(p)?;
                toml::from_str(&content).map_err(|e| ConfigError::Parse(e.to_string()))
            }
            None => Ok(Self::default()),
        }
    }

    /// Apply environment variable overrides
    ///
    /// Supports VIGIL_* environment variables for common settings.
    /// Invalid values are silently ignored (defaults are kept).
    pub fn with_env_overrides(mut self) -> Self {
        // Board settings
        if let Ok(kind) = std::env::var("VIGIL_BOARD_KIND") {
            if let Ok(k) = kind.parse() {
                self.store.kind = k;
            }
        }
        if let Ok(path) = std::env::var("VIGIL_BOARD_PATH") {
            self.store.path = path.into();
        }
        if let Ok(url) = std::env::var("VIGIL_BOARD_URL") {
            self.store.kind = StoreKind::Http;
            self.store.url = Some(url);
        }

        // Monitoring settings
        if let Ok(model) = std::env::var("VIGIL_MODEL") {
            self.monitor.model = model;
        }
        if let Ok(data) = std::env::var("VIGIL_DATA") {
            self.monitor.data = data;
        }
        if let Ok(days) = std::env::var("VIGIL_PERIOD_DAYS") {
            if let Ok(d) = days.parse() {
                self.monitor.period_days = d;
            }
        }

        // Logging settings
        if let Ok(level) = std::env::var("VIGIL_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Ok(format) = std::env::var("VIGIL_LOG_FORMAT") {
            if let Ok(f) = format.parse() {
                self.logging.format = f;
            }
        }

        self
    }

    /// Validate cross-field constraints that TOML parsing cannot catch.
    ///
    /// The rolling calculator enforces its own contract at call time; this
    /// rejects the same mistakes earlier, as configuration errors.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.monitor.period_days < 1 {
            return Err(ConfigError::Validation {
                field: "monitor.period_days".to_string(),
                message: format!("must be at least 1, got {}", self.monitor.period_days),
            });
        }
        if self.monitor.metrics.is_empty() {
            return Err(ConfigError::Validation {
                field: "monitor.metrics".to_string(),
                message: "at least one metric is required".to_string(),
            });
        }
        if self.monitor.model.is_empty() {
            return Err(ConfigError::MissingField("monitor.model".to_string()));
        }
        if self.monitor.data.is_empty() {
            return Err(ConfigError::MissingField("monitor.data".to_string()));
        }
        if self.labels.mapping.is_empty() {
            return Err(ConfigError::Validation {
                field: "labels.mapping".to_string(),
                message: "label mapping table must not be empty".to_string(),
            });
        }
        if self.store.kind == StoreKind::Http && self.store.url.is_none() {
            return Err(ConfigError::MissingField("store.url".to_string()));
        }
        Ok(())
    }
}
