//! Error types for observation batch parsing.

use thiserror::Error;

/// Errors raised while turning a pin payload into typed observation records.
#[derive(Error, Debug)]
pub enum DataError {
    /// Payload is not a JSON array of observation records.
    #[error("Invalid observation batch: {0}")]
    Parse(String),

    /// A record carries a different feature set than the rest of the batch.
    #[error("Record {index} has inconsistent features: expected [{expected}], found [{found}]")]
    InconsistentFeatures {
        index: usize,
        expected: String,
        found: String,
    },
}
