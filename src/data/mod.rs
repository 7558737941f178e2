//! Typed observation records
//!
//! One record per real-world event: a timestamp, a ground-truth outcome
//! label, and the numeric feature fields the model consumes. Records arrive
//! in collection order, not time order; time ordering is established by the
//! metrics calculator. The typed shape catches schema drift at the load
//! boundary instead of deep inside metric computation.

pub mod error;

pub use error::DataError;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One timestamped, labeled observation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObservationRecord {
    /// When the real-world event happened
    pub date: DateTime<Utc>,
    /// Ground-truth outcome label
    pub outcome: String,
    /// Named numeric feature values consumed by the model
    pub features: BTreeMap<String, f64>,
}

/// An ordered batch of observations, as collected.
///
/// Serializes as the bare record array so the raw batch can be handed to ad
/// hoc charting unchanged.
#[derive(Debug, Clone, Serialize)]
#[serde(transparent)]
pub struct Dataset {
    records: Vec<ObservationRecord>,
}

impl Dataset {
    /// Parse a batch from a pin payload (JSON array of records).
    ///
    /// Every record must carry the same feature names; a drifting record is
    /// rejected here rather than surfacing as a confusing metric-time error.
    pub fn from_payload(payload: &serde_json::Value) -> Result<Self, DataError> {
        let records: Vec<ObservationRecord> = serde_json::from_value(payload.clone())
            .map_err(|e| DataError::Parse(e.to_string()))?;

        if let Some(first) = records.first() {
            let expected: Vec<&String> = first.features.keys().collect();
            for (index, record) in records.iter().enumerate().skip(1) {
                let found: Vec<&String> = record.features.keys().collect();
                if found != expected {
                    return Err(DataError::InconsistentFeatures {
                        index,
                        expected: expected
                            .iter()
                            .map(|s| s.as_str())
                            .collect::<Vec<_>>()
                            .join(", "),
                        found: found
                            .iter()
                            .map(|s| s.as_str())
                            .collect::<Vec<_>>()
                            .join(", "),
                    });
                }
            }
        }

        Ok(Self { records })
    }

    pub fn records(&self) -> &[ObservationRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Feature names shared by every record, sorted.
    pub fn feature_names(&self) -> Vec<String> {
        self.records
            .first()
            .map(|r| r.features.keys().cloned().collect())
            .unwrap_or_default()
    }

    /// Timestamp of the newest observation.
    pub fn latest(&self) -> Option<DateTime<Utc>> {
        self.records.iter().map(|r| r.date).max()
    }

    /// Timestamp of the oldest observation.
    pub fn oldest(&self) -> Option<DateTime<Utc>> {
        self.records.iter().map(|r| r.date).min()
    }
}
