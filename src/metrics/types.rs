//! Data structures flowing through the rolling metrics calculator.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Calculator input: one observation with truth and prediction already
/// encoded to numeric codes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EncodedObservation {
    /// Observation timestamp
    pub date: DateTime<Utc>,
    /// Encoded ground-truth label
    pub truth: f64,
    /// Encoded predicted label
    pub predicted: f64,
}

/// One output row per (window, metric) pair.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct MetricRow {
    /// Window start (exclusive edge)
    pub window_start: DateTime<Utc>,
    /// Window end (inclusive edge); the newest row's end equals the newest
    /// observation timestamp
    pub window_end: DateTime<Utc>,
    /// Metric name
    pub metric: String,
    /// Computed metric value
    pub value: f64,
    /// Observations in the window
    pub n: usize,
}
