//! Error types for artifact board operations.

use thiserror::Error;

/// Errors that can occur while resolving pins from a board.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Pin name not present on the board.
    #[error("Pin not found: {0}")]
    NotFound(String),

    /// Pin exists but has no readable versions.
    #[error("Pin '{0}' has no versions")]
    NoVersions(String),

    /// Requested version not present for the pin.
    #[error("Version '{version}' not found for pin '{name}'")]
    VersionNotFound { name: String, version: String },

    /// Filesystem error while reading a folder board.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Transport error while reading an http board.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Meta or payload doesn't match the expected format.
    #[error("Invalid pin data: {0}")]
    Parse(String),

    /// Creation timestamp not in the fixed `YYYYMMDDTHHMMSSZ` form.
    #[error("Invalid pin timestamp: {0}")]
    BadTimestamp(String),

    /// Board configuration error.
    #[error("Board configuration error: {0}")]
    Configuration(String),
}
