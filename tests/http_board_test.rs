//! HTTP board tests using mockito.

use mockito::Server;
use serde_json::json;
use vigil::store::{Board, HttpBoard, StoreError};

fn meta_body() -> String {
    json!({
        "name": "inspection-model",
        "description": "Inspection outcome classifier",
        "pin_type": "model",
        "file": "model.json",
        "created": "20240301T120000Z",
        "version": "20240301T120000Z-ab12"
    })
    .to_string()
}

fn payload_body() -> String {
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
    .to_string()
}

#[test]
fn test_resolve_latest_pin() {
    let mut server = Server::new();
    let meta_mock = server
        .mock("GET", "/inspection-model/latest/meta.json")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(meta_body())
        .create();
    let payload_mock = server
        .mock("GET", "/inspection-model/latest/model.json")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(payload_body())
        .create();

    let board = HttpBoard::new(server.url(), None);
    let pin = board.resolve("inspection-model", None).unwrap();

    assert_eq!(pin.meta.name, "inspection-model");
    assert_eq!(pin.meta.version, "20240301T120000Z-ab12");
    assert!(pin.payload.get("scorer").is_some());

    meta_mock.assert();
    payload_mock.assert();
}

#[test]
fn test_resolve_explicit_version() {
    let mut server = Server::new();
    let meta_mock = server
        .mock("GET", "/inspection-model/20240101T000000Z-aaaa/meta.json")
        .with_status(200)
        .with_body(meta_body())
        .create();
    let _payload_mock = server
        .mock("GET", "/inspection-model/20240101T000000Z-aaaa/model.json")
        .with_status(200)
        .with_body(payload_body())
        .create();

    let board = HttpBoard::new(server.url(), None);
    let pin = board
        .resolve("inspection-model", Some("20240101T000000Z-aaaa"))
        .unwrap();
    assert_eq!(pin.meta.name, "inspection-model");

    meta_mock.assert();
}

#[test]
fn test_resolve_missing_pin_is_not_found() {
    let mut server = Server::new();
    let _mock = server
        .mock("GET", "/missing/latest/meta.json")
        .with_status(404)
        .create();

    let board = HttpBoard::new(server.url(), None);
    match board.resolve("missing", None) {
        Err(StoreError::NotFound(name)) => assert_eq!(name, "missing"),
        other => panic!("Expected NotFound, got {:?}", other.map(|_| ())),
    }
}

#[test]
fn test_resolve_sends_bearer_token() {
    let mut server = Server::new();
    let meta_mock = server
        .mock("GET", "/inspection-model/latest/meta.json")
        .match_header("authorization", "Bearer secret-token")
        .with_status(200)
        .with_body(meta_body())
        .create();
    let _payload_mock = server
        .mock("GET", "/inspection-model/latest/model.json")
        .match_header("authorization", "Bearer secret-token")
        .with_status(200)
        .with_body(payload_body())
        .create();

    let board = HttpBoard::new(server.url(), Some("secret-token".to_string()));
    board.resolve("inspection-model", None).unwrap();

    meta_mock.assert();
}

#[test]
fn test_list_catalog() {
    let mut server = Server::new();
    let _mock = server
        .mock("GET", "/pins.json")
        .with_status(200)
        .with_body(
            json!([
                {
                    "name": "inspection-model",
                    "pin_type": "model",
                    "file": "model.json",
                    "created": "20240301T120000Z",
                    "version": "20240301T120000Z-ab12"
                },
                {
                    "name": "inspection-data",
                    "pin_type": "dataset",
                    "file": "data.json",
                    "created": "20240501T080000Z",
                    "version": "20240501T080000Z-cd34"
                }
            ])
            .to_string(),
        )
        .create();

    let board = HttpBoard::new(server.url(), None);
    let metas = board.list().unwrap();
    assert_eq!(metas.len(), 2);
    assert_eq!(metas[0].name, "inspection-model");
    assert_eq!(metas[1].pin_type, "dataset");
}

#[test]
fn test_malformed_meta_is_parse_error() {
    let mut server = Server::new();
    let _mock = server
        .mock("GET", "/inspection-model/latest/meta.json")
        .with_status(200)
        .with_body("not json")
        .create();

    let board = HttpBoard::new(server.url(), None);
    assert!(matches!(
        board.resolve("inspection-model", None),
        Err(StoreError::Parse(_))
    ));
}
