//! Named scalar metric functions.
//!
//! Every metric is a pure function over equal-length truth/prediction code
//! sequences. The positive class is the code `1.0`. Degenerate denominators
//! (no positives for recall, no predicted positives for precision) return
//! `0.0` so windows stay visible in the output instead of dropping out.

use super::error::MetricsError;

/// Signature shared by all metric functions.
pub type MetricFn = fn(&[f64], &[f64]) -> f64;

/// A named metric function.
#[derive(Debug, Clone)]
pub struct Metric {
    name: String,
    func: MetricFn,
}

impl Metric {
    /// Fraction of predictions equal to the truth.
    pub fn accuracy() -> Self {
        Self::custom("accuracy", accuracy)
    }

    /// True positives over actual positives; 0.0 with no positives.
    pub fn recall() -> Self {
        Self::custom("recall", recall)
    }

    /// True positives over predicted positives; 0.0 with no predicted positives.
    pub fn precision() -> Self {
        Self::custom("precision", precision)
    }

    /// Harmonic mean of precision and recall; 0.0 when both are 0.
    pub fn f1() -> Self {
        Self::custom("f1", f1)
    }

    /// A caller-supplied metric function.
    pub fn custom(name: impl Into<String>, func: MetricFn) -> Self {
        Self {
            name: name.into(),
            func,
        }
    }

    /// Look up a built-in metric by its configured name.
    pub fn from_name(name: &str) -> Result<Self, MetricsError> {
        match name {
            "accuracy" => Ok(Self::accuracy()),
            "recall" => Ok(Self::recall()),
            "precision" => Ok(Self::precision()),
            "f1" => Ok(Self::f1()),
            other => Err(MetricsError::InvalidConfiguration(format!(
                "unknown metric '{}'",
                other
            ))),
        }
    }

    /// Build the declared metric list from configured names, preserving order.
    pub fn from_names(names: &[String]) -> Result<Vec<Self>, MetricsError> {
        if names.is_empty() {
            return Err(MetricsError::InvalidConfiguration(
                "metric list is empty".to_string(),
            ));
        }
        names.iter().map(|n| Self::from_name(n)).collect()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn compute(&self, truth: &[f64], predicted: &[f64]) -> f64 {
        (self.func)(truth, predicted)
    }
}

fn accuracy(truth: &[f64], predicted: &[f64]) -> f64 {
    if truth.is_empty() {
        return 0.0;
    }
    let correct = truth
        .iter()
        .zip(predicted)
        .filter(|(t, p)| t == p)
        .count();
    correct as f64 / truth.len() as f64
}

fn recall(truth: &[f64], predicted: &[f64]) -> f64 {
    let positives = truth.iter().filter(|&&t| t == 1.0).count();
    if positives == 0 {
        return 0.0;
    }
    let true_positives = truth
        .iter()
        .zip(predicted)
        .filter(|(&t, &p)| t == 1.0 && p == 1.0)
        .count();
    true_positives as f64 / positives as f64
}

fn precision(truth: &[f64], predicted: &[f64]) -> f64 {
    let predicted_positives = predicted.iter().filter(|&&p| p == 1.0).count();
    if predicted_positives == 0 {
        return 0.0;
    }
    let true_positives = truth
        .iter()
        .zip(predicted)
        .filter(|(&t, &p)| t == 1.0 && p == 1.0)
        .count();
    true_positives as f64 / predicted_positives as f64
}

fn f1(truth: &[f64], predicted: &[f64]) -> f64 {
    let p = precision(truth, predicted);
    let r = recall(truth, predicted);
    if p + r == 0.0 {
        return 0.0;
    }
    2.0 * p * r / (p + r)
}
