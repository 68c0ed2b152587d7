//! Wire shapes: the subset of the statement execution response the
//! normalizer reads, and the canonical table served to the viewer.

use serde::{Deserialize, Serialize};

/// One result row. The statement API has been observed to return rows either
/// keyed by column name or as positional values aligned with the manifest;
/// anything else passes through verbatim.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Row {
    /// Mapping from column name to value.
    Keyed(serde_json::Map<String, serde_json::Value>),
    /// Positional values in manifest column order.
    Positional(Vec<serde_json::Value>),
    /// Unrecognized shape, forwarded unchanged.
    Other(serde_json::Value),
}

/// Canonical reshaped result: `{columns, rows, rowCount}`. Built fresh per
/// request, never cached.
#[derive(Debug, Default, Serialize)]
pub struct TableResult {
    pub columns: Vec<String>,
    pub rows: Vec<Row>,
    #[serde(rename = "rowCount")]
    pub row_count: usize,
}

// ── Statement execution response ─────────────────────────────────

#[derive(Debug, Default, Deserialize)]
pub(crate) struct StatementResponse {
    pub result: Option<StatementResult>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct StatementResult {
    pub data_array: Option<Vec<Row>>,
    pub manifest: Option<Manifest>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct Manifest {
    pub columns: Option<Vec<ColumnDescriptor>>,
}

/// Column descriptor from the result manifest; only the name matters here.
#[derive(Debug, Deserialize)]
pub(crate) struct ColumnDescriptor {
    pub name: String,
}
