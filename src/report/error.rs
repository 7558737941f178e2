//! Error type for a whole report run.

use crate::config::ConfigError;
use crate::data::DataError;
use crate::metrics::MetricsError;
use crate::model::ModelError;
use crate::store::StoreError;
use thiserror::Error;

/// Any failure surfaced by the single batch run. There is no local recovery:
/// these are data/config problems the invoking run reports to a human.
#[derive(Error, Debug)]
pub enum ReportError {
    #[error("Board error: {0}")]
    Store(#[from] StoreError),

    #[error("Observation batch error: {0}")]
    Data(#[from] DataError),

    #[error("Model error: {0}")]
    Model(#[from] ModelError),

    #[error("Metrics error: {0}")]
    Metrics(#[from] MetricsError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}
