//! Shared test utilities for Vigil integration tests.
//!
//! Provides reusable helpers for writing folder-board fixtures (model and
//! observation pins) to reduce duplication across test files.

#![allow(dead_code)]

use serde_json::json;
use std::fs;
use std::path::Path;

/// Model pin name used by the default fixtures.
pub const MODEL_PIN: &str = "inspection-model";

/// Data pin name used by the default fixtures.
pub const DATA_PIN: &str = "inspection-data";

/// Write one pin version to a folder board.
pub fn write_pin(
    root: &Path,
    name: &str,
    version: &str,
    meta: serde_json::Value,
    payload: serde_json::Value,
) {
    let dir = root.join(name).join(version);
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join("meta.json"), meta.to_string()).unwrap();
    fs::write(dir.join("data.json"), payload.to_string()).unwrap();
}

/// Pin meta document with the fixed-width creation timestamp.
pub fn pin_meta(name: &str, pin_type: &str, created: &str) -> serde_json::Value {
    json!({
        "name": name,
        "description": format!("{} fixture", name),
        "pin_type": pin_type,
        "file": "data.json",
        "created": created,
    })
}

/// A linear model payload over a single `ph` feature: low ph scores FAIL.
pub fn model_payload() -> serde_json::Value {
    json!({
        "schema": {"fields": ["ph"]},
        "scorer": {
            "kind": "linear",
            "weights": {"ph": -2.0},
            "intercept": 12.0,
            "threshold": 0.5,
            "positive": "FAIL",
            "negative": "PASS"
        }
    })
}

/// Observation batch: two recent FAILs the model catches, one 40-day-old
/// PASS it mispredicts.
pub fn observation_payload() -> serde_json::Value {
    json!([
        {"date": "2024-04-30T12:00:00Z", "outcome": "FAIL", "features": {"ph": 2.0}},
        {"date": "2024-04-29T12:00:00Z", "outcome": "FAIL", "features": {"ph": 3.0}},
        {"date": "2024-03-21T12:00:00Z", "outcome": "PASS", "features": {"ph": 4.0}}
    ])
}

/// Write a complete board with one model pin and one data pin.
pub fn write_fixture_board(root: &Path) {
    write_pin(
        root,
        MODEL_PIN,
        "20240301T120000Z-ab12",
        pin_meta(MODEL_PIN, "model", "20240301T120000Z"),
        model_payload(),
    );
    write_pin(
        root,
        DATA_PIN,
        "20240501T080000Z-cd34",
        pin_meta(DATA_PIN, "dataset", "20240501T080000Z"),
        observation_payload(),
    );
}

/// Config file contents pointing at a folder board fixture.
pub fn config_toml(board_root: &Path) -> String {
    format!(
        r#"
[store]
kind = "folder"
path = "{}"

[monitor]
model = "{}"
data = "{}"
period_days = 28
metrics = ["accuracy", "recall"]

[labels.mapping]
PASS = 0.0
FAIL = 1.0

[logging]
level = "warn"
"#,
        board_root.display(),
        MODEL_PIN,
        DATA_PIN
    )
}
