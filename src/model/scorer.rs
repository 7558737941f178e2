//! Scorer implementations deserialized from model pins.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The opaque inference object inside a model artifact.
///
/// Tagged by `kind` in the pin payload so new scorer families can be added
/// without touching the prediction step.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Scorer {
    Linear(LinearScorer),
}

impl Scorer {
    /// Feature names this scorer consumes.
    pub fn input_fields(&self) -> Vec<String> {
        match self {
            Scorer::Linear(s) => s.weights.keys().cloned().collect(),
        }
    }

    /// Raw score in [0, 1] for one observation's features.
    pub fn score(&self, features: &BTreeMap<String, f64>) -> f64 {
        match self {
            Scorer::Linear(s) => s.score(features),
        }
    }

    /// Predicted outcome label for one observation's features.
    pub fn predict(&self, features: &BTreeMap<String, f64>) -> (&str, f64) {
        match self {
            Scorer::Linear(s) => s.predict(features),
        }
    }
}

/// Logistic scorer over named feature weights.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinearScorer {
    /// Feature name -> weight
    pub weights: BTreeMap<String, f64>,
    pub intercept: f64,
    /// Scores at or above this emit the positive label
    pub threshold: f64,
    /// Label emitted for scores >= threshold
    pub positive: String,
    /// Label emitted for scores < threshold
    pub negative: String,
}

impl LinearScorer {
    pub fn score(&self, features: &BTreeMap<String, f64>) -> f64 {
        // Feature presence is enforced by schema validation before scoring.
        let linear: f64 = self
            .weights
            .iter()
            .map(|(name, w)| w * features.get(name).copied().unwrap_or_default())
            .sum::<f64>()
            + self.intercept;
        sigmoid(linear)
    }

    pub fn predict(&self, features: &BTreeMap<String, f64>) -> (&str, f64) {
        let score = self.score(features);
        if score >= self.threshold {
            (&self.positive, score)
        } else {
            (&self.negative, score)
        }
    }
}

fn sigmoid(x: f64) -> f64 {
    1.0 / (1.0 + (-x).exp())
}
