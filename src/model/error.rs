//! Error types for model artifacts and prediction.

use thiserror::Error;

/// Errors that can occur while loading a model artifact or predicting.
#[derive(Error, Debug)]
pub enum ModelError {
    /// Dataset feature columns don't match the model's declared input schema.
    /// Raised before any inference is attempted.
    #[error("Input schema mismatch: missing [{}], unexpected [{}]", missing.join(", "), unexpected.join(", "))]
    SchemaMismatch {
        /// Schema fields absent from the dataset
        missing: Vec<String>,
        /// Dataset fields the schema doesn't declare
        unexpected: Vec<String>,
    },

    /// Pin payload doesn't deserialize into a model artifact.
    #[error("Invalid model artifact: {0}")]
    Parse(String),

    /// Artifact metadata is unusable (bad creation timestamp, missing name).
    #[error("Invalid model metadata: {0}")]
    Metadata(String),
}
