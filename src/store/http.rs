//! HTTP-backed artifact board.
//!
//! Read-only client over a board exported behind a static HTTP endpoint:
//! `GET <base>/pins.json` for the catalog, and
//! `GET <base>/<pin-name>/<version>/meta.json` (or `latest` as the version
//! segment) plus the payload file for individual pins. No retries; a failed
//! fetch surfaces directly to the report run.

use super::error::StoreError;
use super::meta::{Pin, PinMeta};
use super::Board;
use reqwest::blocking::Client;
use reqwest::StatusCode;
use std::time::Duration;
use tracing::debug;

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Read-only board behind an HTTP endpoint.
pub struct HttpBoard {
    base_url: String,
    client: Client,
    auth_token: Option<String>,
}

impl HttpBoard {
    pub fn new(base_url: String, auth_token: Option<String>) -> Self {
        let client = Client::builder()
            .timeout(DEFAULT_TIMEOUT)
            .build()
            .unwrap_or_default();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
            auth_token,
        }
    }

    fn get_json<T: serde::de::DeserializeOwned>(&self, url: &str) -> Result<T, StoreError> {
        let mut request = self.client.get(url);
        if let Some(token) = &self.auth_token {
            request = request.bearer_auth(token);
        }

        let response = request.send()?;
        if response.status() == StatusCode::NOT_FOUND {
            return Err(StoreError::NotFound(url.to_string()));
        }
        let response = response.error_for_status()?;
        response
            .json()
            .map_err(|e| StoreError::Parse(format!("{}: {}", url, e)))
    }
}

impl Board for HttpBoard {
    fn resolve(&self, name: &str, version: Option<&str>) -> Result<Pin, StoreError> {
        let version_segment = version.unwrap_or("latest");
        let meta_url = format!("{}/{}/{}/meta.json", self.base_url, name, version_segment);
        let mut meta: PinMeta = self.get_json(&meta_url).map_err(|e| match e {
            StoreError::NotFound(_) => StoreError::NotFound(name.to_string()),
            other => other,
        })?;
        if meta.version.is_empty() {
            meta.version = version_segment.to_string();
        }

        let payload_url = format!(
            "{}/{}/{}/{}",
            self.base_url, name, version_segment, meta.file
        );
        let payload = self.get_json(&payload_url)?;

        debug!(pin = %name, version = %meta.version, url = %meta_url, "Resolved pin");
        Ok(Pin { meta, payload })
    }

    fn list(&self) -> Result<Vec<PinMeta>, StoreError> {
        let url = format!("{}/pins.json", self.base_url);
        self.get_json(&url)
    }
}
