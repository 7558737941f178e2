//! Versioned artifact board access
//!
//! A board is the remote store that published model artifacts and labeled
//! observation batches are resolved from. The report run consumes a
//! read-only contract: resolve a pin by name (latest version unless pinned)
//! and list the catalog. Versioning, access control, and storage layout are
//! the board's concern, not the report's.

pub mod error;
pub mod folder;
pub mod http;
pub mod meta;

pub use error::StoreError;
pub use folder::FolderBoard;
pub use http::HttpBoard;
pub use meta::{format_pin_timestamp, parse_pin_timestamp, Pin, PinMeta, PIN_TIMESTAMP_FORMAT};

use crate::config::{StoreConfig, StoreKind};

/// Read-only artifact board contract.
pub trait Board {
    /// Resolve a pin by name. `version` pins an exact version; `None`
    /// resolves the newest one.
    fn resolve(&self, name: &str, version: Option<&str>) -> Result<Pin, StoreError>;

    /// Catalog of pins with their newest metadata.
    fn list(&self) -> Result<Vec<PinMeta>, StoreError>;
}

/// Open the board selected by configuration.
pub fn open_board(config: &StoreConfig) -> Result<Box<dyn Board>, StoreError> {
    match config.kind {
        StoreKind::Folder => Ok(Box::new(FolderBoard::new(&config.path))),
        StoreKind::Http => {
            let url = config.url.clone().ok_or_else(|| {
                StoreError::Configuration("http board requires store.url".to_string())
            })?;
            Ok(Box::new(HttpBoard::new(url, config.auth_token.clone())))
        }
    }
}
