//! Artifact board configuration

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::str::FromStr;

/// Artifact board backend kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum StoreKind {
    /// Versioned pins in a local directory tree
    #[default]
    Folder,
    /// Versioned pins behind a read-only HTTP endpoint
    Http,
}

impl FromStr for StoreKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "folder" => Ok(StoreKind::Folder),
            "http" => Ok(StoreKind::Http),
            _ => Err(format!("Invalid store kind: {}", s)),
        }
    }
}

/// Artifact board configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Backend kind
    pub kind: StoreKind,
    /// Root directory for a folder board
    pub path: PathBuf,
    /// Base URL for an http board
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Bearer token for an http board
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auth_token: Option<String>,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            kind: StoreKind::Folder,
            path: PathBuf::from("./board"),
            url: None,
            auth_token: None,
        }
    }
}
