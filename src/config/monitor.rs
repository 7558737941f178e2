//! Monitoring run configuration

use serde::{Deserialize, Serialize};

/// Configuration for a single monitoring run: which pins to resolve and how
/// to window the metrics.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MonitorConfig {
    /// Pin name of the published model artifact
    pub model: String,
    /// Pin a specific model version instead of the latest
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model_version: Option<String>,
    /// Pin name of the freshly labeled observation batch
    pub data: String,
    /// Pin a specific data version instead of the latest
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_version: Option<String>,
    /// Rolling window length in days
    pub period_days: i64,
    /// Metric names computed per window, in display order
    pub metrics: Vec<String>,
    /// Base URL of the model's live API; the report links its /__docs__ page
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_url: Option<String>,
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            model: "inspection-model".to_string(),
            model_version: None,
            data: "inspection-data".to_string(),
            data_version: None,
            period_days: 28,
            metrics: vec!["accuracy".to_string(), "recall".to_string()],
            api_url: None,
        }
    }
}
