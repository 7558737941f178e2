//! Report assembly
//!
//! One report run is the whole batch: resolve the model and the freshly
//! labeled observations from the board, predict, encode labels, compute
//! rolling metrics, and package everything the rendering layer needs:
//! summary value boxes, the metric-row table, chart-ready series, and the
//! raw dataset for ad hoc charting.

pub mod error;

pub use error::ReportError;

use crate::config::VigilConfig;
use crate::data::Dataset;
use crate::metrics::{overall_metrics, rolling_metrics, LabelMap, Metric, MetricRow};
use crate::model::{predict, ModelArtifact};
use crate::store::Board;
use chrono::{DateTime, Duration, Utc};
use serde::Serialize;
use tracing::info;
use uuid::Uuid;

/// One overall metric value for a summary value box.
#[derive(Debug, Clone, Serialize)]
pub struct MetricValue {
    pub metric: String,
    pub value: f64,
}

/// Scalar display values for the report's value boxes.
#[derive(Debug, Clone, Serialize)]
pub struct ModelSummary {
    /// Model pin name
    pub model: String,
    /// Free-text model description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Resolved model version
    pub version: String,
    /// When the model was published
    pub created: DateTime<Utc>,
    /// Whole days between publication and the report run
    pub age_days: i64,
    /// Observations in the batch
    pub records: usize,
    /// Oldest observation timestamp
    pub oldest: DateTime<Utc>,
    /// Newest observation timestamp; the newest window is anchored here
    pub latest: DateTime<Utc>,
    /// Overall (unwindowed) metric values, in declared order
    pub overall: Vec<MetricValue>,
    /// Where the model's live API documentation is served, when configured
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_docs_url: Option<String>,
}

/// One chart point per window.
#[derive(Debug, Clone, Serialize)]
pub struct ChartPoint {
    /// Window end (the window's anchor edge)
    pub date: DateTime<Utc>,
    pub value: f64,
    pub n: usize,
}

/// Chart-ready series: one per metric, in declared order.
#[derive(Debug, Clone, Serialize)]
pub struct ChartSeries {
    pub metric: String,
    pub points: Vec<ChartPoint>,
}

/// Everything a rendering layer needs for one monitoring report.
#[derive(Debug, Clone, Serialize)]
pub struct ModelReport {
    /// Unique id of this report run
    pub run_id: Uuid,
    /// When the report was generated
    pub generated_at: DateTime<Utc>,
    pub summary: ModelSummary,
    /// One row per (window, metric)
    pub rows: Vec<MetricRow>,
    /// Chart-ready form of `rows`
    pub charts: Vec<ChartSeries>,
    /// Raw observation batch for ad hoc charting
    pub observations: Dataset,
}

impl ModelReport {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// Execute one full monitoring run against a board.
///
/// `now` is injected so age computations are reproducible in tests.
pub fn run(
    board: &dyn Board,
    config: &VigilConfig,
    now: DateTime<Utc>,
) -> Result<ModelReport, ReportError> {
    let run_id = Uuid::new_v4();
    info!(
        %run_id,
        model = %config.monitor.model,
        data = %config.monitor.data,
        "Starting monitoring run"
    );

    let model_pin = board.resolve(
        &config.monitor.model,
        config.monitor.model_version.as_deref(),
    )?;
    let model = ModelArtifact::from_pin(&model_pin)?;

    let data_pin = board.resolve(&config.monitor.data, config.monitor.data_version.as_deref())?;
    let dataset = Dataset::from_payload(&data_pin.payload)?;

    let predictions = predict(&model, &dataset)?;

    let label_map = LabelMap::from_config(&config.labels)?;
    let encoded = label_map.encode_predictions(&predictions)?;

    let metrics = Metric::from_names(&config.monitor.metrics)?;
    let period = Duration::days(config.monitor.period_days);
    let rows = rolling_metrics(&encoded, period, &metrics)?;
    let overall = overall_metrics(&encoded, &metrics)?;

    // rolling_metrics signals EmptyInput before we get here, so the batch
    // is known non-empty.
    let latest = dataset.latest().expect("dataset is non-empty");
    let oldest = dataset.oldest().expect("dataset is non-empty");

    let summary = ModelSummary {
        model: model.name.clone(),
        description: model.description.clone(),
        version: model.version.clone(),
        created: model.created,
        age_days: model.age_days(now),
        records: dataset.len(),
        oldest,
        latest,
        overall: overall
            .into_iter()
            .map(|(metric, value)| MetricValue { metric, value })
            .collect(),
        api_docs_url: config
            .monitor
            .api_url
            .as_ref()
            .map(|url| format!("{}/__docs__", url.trim_end_matches('/'))),
    };

    let charts = chart_series(&metrics, &rows);

    info!(
        %run_id,
        windows = rows.len() / metrics.len(),
        rows = rows.len(),
        "Monitoring run complete"
    );

    Ok(ModelReport {
        run_id,
        generated_at: now,
        summary,
        rows,
        charts,
        observations: dataset,
    })
}

/// Pivot metric rows into one series per metric, declared order preserved.
fn chart_series(metrics: &[Metric], rows: &[MetricRow]) -> Vec<ChartSeries> {
    metrics
        .iter()
        .map(|metric| ChartSeries {
            metric: metric.name().to_string(),
            points: rows
                .iter()
                .filter(|row| row.metric == metric.name())
                .map(|row| ChartPoint {
                    date: row.window_end,
                    value: row.value,
                    n: row.n,
                })
                .collect(),
        })
        .collect()
}
