//! Pin metadata and the fixed-width creation timestamp format.

use super::error::StoreError;
use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

/// Fixed-width creation timestamp format used by boards: `YYYYMMDDTHHMMSSZ`.
///
/// Version directory names start with this stamp, so lexicographic order of
/// versions is chronological order.
pub const PIN_TIMESTAMP_FORMAT: &str = "%Y%m%dT%H%M%SZ";

/// Parse a board creation timestamp.
pub fn parse_pin_timestamp(s: &str) -> Result<DateTime<Utc>, StoreError> {
    NaiveDateTime::parse_from_str(s, PIN_TIMESTAMP_FORMAT)
        .map(|naive| naive.and_utc())
        .map_err(|_| StoreError::BadTimestamp(s.to_string()))
}

/// Format a timestamp in the board's fixed-width form.
pub fn format_pin_timestamp(ts: DateTime<Utc>) -> String {
    ts.format(PIN_TIMESTAMP_FORMAT).to_string()
}

/// Metadata stored alongside every pin version.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PinMeta {
    /// Pin name
    pub name: String,
    /// Short human-readable title
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Free-text description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Payload kind hint ("model", "dataset", ...)
    pub pin_type: String,
    /// Payload file name within the version
    pub file: String,
    /// Creation timestamp in `YYYYMMDDTHHMMSSZ` form
    pub created: String,
    /// Version identifier, filled in by the board on resolve
    #[serde(default)]
    pub version: String,
}

impl PinMeta {
    /// Creation timestamp parsed to UTC.
    pub fn created_at(&self) -> Result<DateTime<Utc>, StoreError> {
        parse_pin_timestamp(&self.created)
    }
}

/// A resolved pin: metadata plus the JSON payload.
#[derive(Debug, Clone)]
pub struct Pin {
    pub meta: PinMeta,
    pub payload: serde_json::Value,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_parse_pin_timestamp() {
        let ts = parse_pin_timestamp("20240402T173855Z").unwrap();
        assert_eq!(ts, Utc.with_ymd_and_hms(2024, 4, 2, 17, 38, 55).unwrap());
    }

    #[test]
    fn test_timestamp_round_trip() {
        let ts = Utc.with_ymd_and_hms(2023, 12, 31, 23, 59, 59).unwrap();
        let formatted = format_pin_timestamp(ts);
        assert_eq!(formatted, "20231231T235959Z");
        assert_eq!(parse_pin_timestamp(&formatted).unwrap(), ts);
    }

    #[test]
    fn test_parse_rejects_malformed() {
        assert!(parse_pin_timestamp("2024-04-02T17:38:55Z").is_err());
        assert!(parse_pin_timestamp("20240402").is_err());
        assert!(parse_pin_timestamp("").is_err());
        assert!(parse_pin_timestamp("20241402T173855Z").is_err()); // month 14
    }

    #[test]
    fn test_pin_meta_created_at() {
        let meta = PinMeta {
            name: "m".to_string(),
            title: None,
            description: Some("a model".to_string()),
            pin_type: "model".to_string(),
            file: "model.json".to_string(),
            created: "20240101T000000Z".to_string(),
            version: String::new(),
        };
        let ts = meta.created_at().unwrap();
        assert_eq!(ts, Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap());
    }

    #[test]
    fn test_pin_meta_deserialize() {
        let json = r#"{
            "name": "inspection-model",
            "description": "Inspection outcome classifier",
            "pin_type": "model",
            "file": "model.json",
            "created": "20240402T173855Z"
        }"#;
        let meta: PinMeta = serde_json::from_str(json).unwrap();
        assert_eq!(meta.name, "inspection-model");
        assert!(meta.title.is_none());
        assert!(meta.version.is_empty());
    }
}
