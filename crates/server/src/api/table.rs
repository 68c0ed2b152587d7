//! The table-data endpoint: validate → execute → normalize → respond.

use std::sync::Arc;
use std::time::Instant;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use tracing::{info, warn};

use brickview_warehouse::{normalize, require_configured, WarehouseError};

use crate::state::AppState;

use super::ErrorBody;

/// The one table this service exposes.
const TABLE_FQN: &str = "tagueri.cdp_example_salesforce.events_nt";
const ROW_LIMIT: u32 = 100;

/// Fetch the fixed table from the warehouse and reshape it for the viewer.
///
/// Every failure maps to a 500 with [`ErrorBody`] — nothing propagates to a
/// fallback handler, so the page can always display the message.
#[utoipa::path(
    get,
    path = "/api/table-data",
    tag = "Table Data",
    responses(
        (status = 200, description = "Reshaped query result: {columns, rows, rowCount}", body = Object),
        (status = 500, description = "Configuration, transport, or upstream failure", body = ErrorBody)
    )
)]
pub async fn table_data(State(state): State<Arc<AppState>>) -> Response {
    let started = Instant::now();

    // Preconditions first — a missing setting must surface before any
    // network I/O.
    if let Err(err) = require_configured(&state.config.warehouse) {
        warn!("table-data rejected: {}", err);
        return error_response(&err);
    }

    let statement = format!("SELECT * FROM {} LIMIT {}", TABLE_FQN, ROW_LIMIT);
    info!("table-data: executing `{}`", statement);

    match state.executor.execute(&statement).await {
        Ok(raw) => {
            let table = normalize(raw);
            info!(
                "table-data: {} rows, {} columns in {}ms",
                table.row_count,
                table.columns.len(),
                started.elapsed().as_millis(),
            );
            (StatusCode::OK, Json(table)).into_response()
        }
        Err(err) => {
            warn!(
                "table-data failed after {}ms: {}",
                started.elapsed().as_millis(),
                err,
            );
            error_response(&err)
        }
    }
}

fn error_response(err: &WarehouseError) -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorBody::from(err)),
    )
        .into_response()
}
