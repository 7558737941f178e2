//! Outcome label encoding.
//!
//! Metric functions compare numeric codes, so categorical truth/prediction
//! labels are mapped through an explicitly declared table first. Unknown
//! labels fail hard; a silent default would corrupt every downstream metric
//! value without a trace.

use super::error::MetricsError;
use super::types::EncodedObservation;
use crate::config::LabelConfig;
use crate::model::Prediction;
use std::collections::BTreeMap;

/// Declared label -> code table. The positive class is encoded as `1.0`.
#[derive(Debug, Clone)]
pub struct LabelMap {
    mapping: BTreeMap<String, f64>,
}

impl LabelMap {
    pub fn new(mapping: BTreeMap<String, f64>) -> Result<Self, MetricsError> {
        if mapping.is_empty() {
            return Err(MetricsError::InvalidConfiguration(
                "label mapping table is empty".to_string(),
            ));
        }
        Ok(Self { mapping })
    }

    pub fn from_config(config: &LabelConfig) -> Result<Self, MetricsError> {
        Self::new(config.mapping.clone())
    }

    /// Encode one label.
    pub fn encode(&self, label: &str) -> Result<f64, MetricsError> {
        self.mapping
            .get(label)
            .copied()
            .ok_or_else(|| MetricsError::UnknownLabel(label.to_string()))
    }

    /// Encode a prediction batch into calculator input, truth and predicted
    /// labels both going through the declared table.
    pub fn encode_predictions(
        &self,
        predictions: &[Prediction],
    ) -> Result<Vec<EncodedObservation>, MetricsError> {
        predictions
            .iter()
            .map(|p| {
                Ok(EncodedObservation {
                    date: p.date,
                    truth: self.encode(&p.outcome)?,
                    predicted: self.encode(&p.predicted)?,
                })
            })
            .collect()
    }
}
