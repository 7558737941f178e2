//! Error types for metric computation.

use thiserror::Error;

/// Errors raised by label encoding and the rolling calculator.
#[derive(Error, Debug)]
pub enum MetricsError {
    /// Empty metric list, non-positive period, or an unknown metric name.
    #[error("Invalid metrics configuration: {0}")]
    InvalidConfiguration(String),

    /// Zero observation records; no windows can be formed. Signaled rather
    /// than silently producing an empty table.
    #[error("No observation records to compute metrics over")]
    EmptyInput,

    /// A truth or predicted label outside the declared mapping table.
    /// Coercing unknown labels to a default would corrupt metric values
    /// undetected, so this always fails.
    #[error("Unknown outcome label: '{0}' is not in the declared mapping")]
    UnknownLabel(String),
}
