//! Model artifacts
//!
//! A model artifact is the opaque inference object published to the board,
//! plus its descriptive metadata: name, free-text description, creation
//! timestamp, and the input schema it was trained against. Loaded once per
//! report run and discarded at the end; never mutated.

pub mod error;
pub mod predict;
pub mod schema;
pub mod scorer;

pub use error::ModelError;
pub use predict::{predict, Prediction};
pub use schema::InputSchema;
pub use scorer::{LinearScorer, Scorer};

use crate::store::Pin;
use chrono::{DateTime, Utc};
use serde::Deserialize;
use tracing::debug;

/// Payload shape of a model pin.
#[derive(Debug, Deserialize)]
struct ModelPayload {
    schema: InputSchema,
    scorer: Scorer,
}

/// A loaded model artifact with its pin metadata.
#[derive(Debug, Clone)]
pub struct ModelArtifact {
    /// Pin name
    pub name: String,
    /// Free-text description from the pin metadata
    pub description: Option<String>,
    /// When the artifact was published
    pub created: DateTime<Utc>,
    /// Resolved pin version
    pub version: String,
    /// Declared input schema
    pub schema: InputSchema,
    /// The opaque inference object
    pub scorer: Scorer,
}

impl ModelArtifact {
    /// Build an artifact from a resolved pin.
    pub fn from_pin(pin: &Pin) -> Result<Self, ModelError> {
        let payload: ModelPayload = serde_json::from_value(pin.payload.clone())
            .map_err(|e| ModelError::Parse(e.to_string()))?;

        let created = pin
            .meta
            .created_at()
            .map_err(|e| ModelError::Metadata(e.to_string()))?;

        debug!(
            model = %pin.meta.name,
            version = %pin.meta.version,
            fields = payload.schema.fields().len(),
            "Loaded model artifact"
        );

        Ok(Self {
            name: pin.meta.name.clone(),
            description: pin.meta.description.clone(),
            created,
            version: pin.meta.version.clone(),
            schema: payload.schema,
            scorer: payload.scorer,
        })
    }

    /// Whole days elapsed since the artifact was published.
    pub fn age_days(&self, now: DateTime<Utc>) -> i64 {
        (now - self.created).num_days()
    }
}
