//! Declared model input schema.
//!
//! The artifact stores the feature names it was trained on, prototype-style.
//! A dataset is checked against this before inference so schema drift fails
//! loudly at the boundary instead of as an opaque scoring error.

use super::error::ModelError;
use serde::{Deserialize, Serialize};

/// Feature names a model requires, sorted and deduplicated.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct InputSchema {
    fields: Vec<String>,
}

impl InputSchema {
    pub fn new(mut fields: Vec<String>) -> Self {
        fields.sort();
        fields.dedup();
        Self { fields }
    }

    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    /// Check a dataset's feature columns against the declared schema.
    ///
    /// Both directions are drift: schema fields the dataset lacks, and
    /// dataset fields the schema never declared.
    pub fn validate(&self, dataset_fields: &[String]) -> Result<(), ModelError> {
        let missing: Vec<String> = self
            .fields
            .iter()
            .filter(|f| !dataset_fields.contains(f))
            .cloned()
            .collect();
        let unexpected: Vec<String> = dataset_fields
            .iter()
            .filter(|f| !self.fields.contains(f))
            .cloned()
            .collect();

        if missing.is_empty() && unexpected.is_empty() {
            Ok(())
        } else {
            Err(ModelError::SchemaMismatch {
                missing,
                unexpected,
            })
        }
    }
}
