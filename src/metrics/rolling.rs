//! Rolling windowed metric computation.
//!
//! Windows are fixed-length intervals walked backward from the newest
//! observation timestamp, so the newest window is always anchored to the
//! latest data point rather than to a wall-clock boundary. A single
//! synchronous pass over an in-memory batch; the input is never mutated.

use super::error::MetricsError;
use super::functions::Metric;
use super::types::{EncodedObservation, MetricRow};
use chrono::Duration;
use std::collections::BTreeMap;
use tracing::debug;

/// Compute every declared metric over rolling windows of `period`.
///
/// Windows are `(start, end]` intervals: a record exactly on a boundary
/// belongs to the window whose upper edge it sits on, so the anchor
/// observation always lands in the newest window and that window's upper
/// edge equals the maximum timestamp. Windows with no records are omitted.
///
/// Output rows are ordered ascending by window start, then by metric
/// declaration order; the ordering is deterministic.
pub fn rolling_metrics(
    records: &[EncodedObservation],
    period: Duration,
    metrics: &[Metric],
) -> Result<Vec<MetricRow>, MetricsError> {
    if metrics.is_empty() {
        return Err(MetricsError::InvalidConfiguration(
            "metric list is empty".to_string(),
        ));
    }
    let period_ms = period.num_milliseconds();
    if period_ms <= 0 {
        return Err(MetricsError::InvalidConfiguration(format!(
            "period must be positive, got {}ms",
            period_ms
        )));
    }
    if records.is_empty() {
        return Err(MetricsError::EmptyInput);
    }

    let anchor = records
        .iter()
        .map(|r| r.date)
        .max()
        .expect("records is non-empty");

    // Window index counted backward from the anchor. Integer division puts
    // a record at elapsed == k * period into window k: exactly on its upper
    // edge.
    let mut windows: BTreeMap<i64, (Vec<f64>, Vec<f64>)> = BTreeMap::new();
    for record in records {
        let elapsed_ms = (anchor - record.date).num_milliseconds();
        let idx = elapsed_ms / period_ms;
        let (truth, predicted) = windows.entry(idx).or_default();
        truth.push(record.truth);
        predicted.push(record.predicted);
    }

    debug!(
        windows = windows.len(),
        records = records.len(),
        anchor = %anchor,
        "Bucketed observations"
    );

    // Largest index = oldest window; reverse iteration yields ascending
    // window starts.
    let mut rows = Vec::with_capacity(windows.len() * metrics.len());
    for (&idx, (truth, predicted)) in windows.iter().rev() {
        let window_end = anchor - Duration::milliseconds(period_ms * idx);
        let window_start = window_end - period;
        for metric in metrics {
            rows.push(MetricRow {
                window_start,
                window_end,
                metric: metric.name().to_string(),
                value: metric.compute(truth, predicted),
                n: truth.len(),
            });
        }
    }

    Ok(rows)
}

/// Compute every declared metric once over the whole batch, for summary
/// display. Same error contract as [`rolling_metrics`] minus the windowing.
pub fn overall_metrics(
    records: &[EncodedObservation],
    metrics: &[Metric],
) -> Result<Vec<(String, f64)>, MetricsError> {
    if metrics.is_empty() {
        return Err(MetricsError::InvalidConfiguration(
            "metric list is empty".to_string(),
        ));
    }
    if records.is_empty() {
        return Err(MetricsError::EmptyInput);
    }

    let truth: Vec<f64> = records.iter().map(|r| r.truth).collect();
    let predicted: Vec<f64> = records.iter().map(|r| r.predicted).collect();
    Ok(metrics
        .iter()
        .map(|m| (m.name().to_string(), m.compute(&truth, &predicted)))
        .collect())
}
