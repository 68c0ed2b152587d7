//! Reshapes raw statement responses into the canonical table form.

use crate::executor::RawStatementResponse;
use crate::types::{StatementResponse, TableResult};

/// Reshape a raw statement response into `{columns, rows, rowCount}`.
///
/// Total over any JSON input: an absent `result` or `result.data_array`
/// denotes an empty result set, and unrecognized structure degrades to the
/// empty result rather than failing. An absent column manifest leaves
/// `columns` empty even when rows are present — the viewer falls back to
/// positional display in that case.
pub fn normalize(raw: RawStatementResponse) -> TableResult {
    let parsed: StatementResponse = serde_json::from_value(raw).unwrap_or_default();
    let result = match parsed.result {
        Some(result) => result,
        None => return TableResult::default(),
    };
    let rows = match result.data_array {
        Some(rows) => rows,
        None => return TableResult::default(),
    };
    let columns: Vec<String> = result
        .manifest
        .and_then(|m| m.columns)
        .map(|cols| cols.into_iter().map(|c| c.name).collect())
        .unwrap_or_default();

    let row_count = rows.len();
    TableResult {
        columns,
        rows,
        row_count,
    }
}
