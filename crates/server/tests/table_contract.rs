//! Wire-contract tests for the table-data JSON bodies.
//!
//! Since `brickview-server` is a binary crate (no lib.rs), the success and
//! error envelopes are validated here through mirror types — the same
//! contract the in-crate handler tests exercise end to end, pinned from the
//! consumer side.

use serde::Deserialize;
use serde_json::json;

// ── Mirror types matching the table-data JSON contract ────────────

#[derive(Debug, Deserialize)]
struct TableData {
    columns: Vec<String>,
    rows: Vec<serde_json::Value>,
    #[serde(rename = "rowCount")]
    row_count: usize,
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: String,
    status: Option<u16>,
    details: Option<serde_json::Value>,
}

#[test]
fn success_body_parses_with_either_row_shape() {
    let keyed = json!({
        "columns": ["a", "b"],
        "rows": [{ "a": "1", "b": "2" }],
        "rowCount": 1
    });
    let parsed: TableData = serde_json::from_value(keyed).unwrap();
    assert_eq!(parsed.columns, vec!["a", "b"]);
    assert_eq!(parsed.row_count, parsed.rows.len());

    let positional = json!({
        "columns": ["a", "b"],
        "rows": [["1", "2"], ["3", "4"]],
        "rowCount": 2
    });
    let parsed: TableData = serde_json::from_value(positional).unwrap();
    assert_eq!(parsed.row_count, 2);
}

#[test]
fn degraded_body_has_rows_without_columns() {
    // Tolerated state: manifest missing upstream, rows still served.
    let body = json!({
        "columns": [],
        "rows": [["1", "2"]],
        "rowCount": 1
    });
    let parsed: TableData = serde_json::from_value(body).unwrap();
    assert!(parsed.columns.is_empty());
    assert_eq!(parsed.rows.len(), 1);
}

#[test]
fn upstream_error_envelope_carries_status_and_details() {
    let body = json!({
        "error": "warehouse returned HTTP 403",
        "status": 403,
        "details": { "message": "forbidden" }
    });
    let parsed: ErrorEnvelope = serde_json::from_value(body).unwrap();
    assert_eq!(parsed.status, Some(403));
    assert_eq!(parsed.details, Some(json!({ "message": "forbidden" })));
}

#[test]
fn transport_error_envelope_omits_status() {
    // The viewer distinguishes "no response" from "upstream rejection" by
    // the absence of `status`.
    let body = json!({ "error": "no response from warehouse after 60s" });
    let parsed: ErrorEnvelope = serde_json::from_value(body).unwrap();
    assert!(parsed.status.is_none());
    assert!(parsed.details.is_none());
    assert!(!parsed.error.is_empty());
}
