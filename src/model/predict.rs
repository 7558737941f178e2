//! Prediction step: apply a loaded model to an observation batch.

use super::error::ModelError;
use super::ModelArtifact;
use crate::data::Dataset;
use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::info;

/// One observation with its model output attached.
///
/// Derived alongside the truth label; the source record is never mutated.
#[derive(Debug, Clone, Serialize)]
pub struct Prediction {
    /// Observation timestamp
    pub date: DateTime<Utc>,
    /// Ground-truth outcome label
    pub outcome: String,
    /// Predicted outcome label
    pub predicted: String,
    /// Raw model score behind the predicted label
    pub score: f64,
}

/// Apply the model to every observation in the batch.
///
/// The dataset's feature columns are validated against the model's declared
/// input schema first; inference is never invoked on drifted data.
pub fn predict(model: &ModelArtifact, dataset: &Dataset) -> Result<Vec<Prediction>, ModelError> {
    if !dataset.is_empty() {
        model.schema.validate(&dataset.feature_names())?;
    }

    let predictions: Vec<Prediction> = dataset
        .records()
        .iter()
        .map(|record| {
            let (label, score) = model.scorer.predict(&record.features);
            Prediction {
                date: record.date,
                outcome: record.outcome.clone(),
                predicted: label.to_string(),
                score,
            }
        })
        .collect();

    info!(
        model = %model.name,
        records = predictions.len(),
        "Prediction step complete"
    );
    Ok(predictions)
}
