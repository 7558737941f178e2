//! Outcome label encoding configuration

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Declared outcome-label encoding table.
///
/// Metric functions operate on numeric codes, so every truth and predicted
/// label must appear here. The positive class must be encoded as `1.0`;
/// values outside the table are rejected at encoding time rather than
/// silently coerced.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LabelConfig {
    /// Outcome label -> numeric code
    pub mapping: BTreeMap<String, f64>,
}

impl Default for LabelConfig {
    fn default() -> Self {
        let mut mapping = BTreeMap::new();
        mapping.insert("PASS".to_string(), 0.0);
        mapping.insert("FAIL".to_string(), 1.0);
        Self { mapping }
    }
}
