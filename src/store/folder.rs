//! Folder-backed artifact board.
//!
//! Layout: `<root>/<pin-name>/<version>/meta.json` plus the payload file
//! named by the meta. Version directories start with the creation timestamp
//! (`YYYYMMDDTHHMMSSZ-<suffix>`), so the lexicographically greatest directory
//! is the newest version.

use super::error::StoreError;
use super::meta::{Pin, PinMeta};
use super::Board;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Read-only board over a local directory tree.
pub struct FolderBoard {
    root: PathBuf,
}

impl FolderBoard {
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    /// Version directory names for a pin, ascending.
    fn versions(&self, name: &str) -> Result<Vec<String>, StoreError> {
        let pin_dir = self.root.join(name);
        if !pin_dir.is_dir() {
            return Err(StoreError::NotFound(name.to_string()));
        }

        let mut versions: Vec<String> = fs::read_dir(&pin_dir)?
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.path().is_dir())
            .filter_map(|entry| entry.file_name().into_string().ok())
            .collect();
        versions.sort();

        if versions.is_empty() {
            return Err(StoreError::NoVersions(name.to_string()));
        }
        Ok(versions)
    }

    fn read_meta(&self, name: &str, version: &str) -> Result<PinMeta, StoreError> {
        let meta_path = self.root.join(name).join(version).join("meta.json");
        if !meta_path.is_file() {
            return Err(StoreError::VersionNotFound {
                name: name.to_string(),
                version: version.to_string(),
            });
        }
        let content = fs::read_to_string(&meta_path)?;
        let mut meta: PinMeta = serde_json::from_str(&content)
            .map_err(|e| StoreError::Parse(format!("{}: {}", meta_path.display(), e)))?;
        meta.version = version.to_string();
        Ok(meta)
    }
}

impl Board for FolderBoard {
    fn resolve(&self, name: &str, version: Option<&str>) -> Result<Pin, StoreError> {
        let version = match version {
            Some(v) => v.to_string(),
            // Newest version: timestamp-prefixed names sort chronologically.
            None => self
                .versions(name)?
                .pop()
                .ok_or_else(|| StoreError::NoVersions(name.to_string()))?,
        };

        let meta = self.read_meta(name, &version)?;
        let payload_path = self.root.join(name).join(&version).join(&meta.file);
        let content = fs::read_to_string(&payload_path)?;
        let payload = serde_json::from_str(&content)
            .map_err(|e| StoreError::Parse(format!("{}: {}", payload_path.display(), e)))?;

        debug!(pin = %name, version = %version, "Resolved pin");
        Ok(Pin { meta, payload })
    }

    fn list(&self) -> Result<Vec<PinMeta>, StoreError> {
        if !self.root.is_dir() {
            return Err(StoreError::NotFound(self.root.display().to_string()));
        }

        let mut names: Vec<String> = fs::read_dir(&self.root)?
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.path().is_dir())
            .filter_map(|entry| entry.file_name().into_string().ok())
            .collect();
        names.sort();

        let mut metas = Vec::with_capacity(names.len());
        for name in names {
            let latest = self
                .versions(&name)?
                .pop()
                .ok_or_else(|| StoreError::NoVersions(name.clone()))?;
            metas.push(self.read_meta(&name, &latest)?);
        }
        Ok(metas)
    }
}
