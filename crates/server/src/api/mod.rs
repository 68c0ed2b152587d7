//! Domain-focused API endpoint modules.
//!
//! Each sub-module owns a single responsibility area.
//! The shared error envelope lives here in mod.rs.

pub mod doc;
mod health;
mod pages;
mod table;


use serde::Serialize;

use brickview_warehouse::WarehouseError;

// ── Error envelope ───────────────────────────────────────────────

/// JSON body for every failure path. `status` and `details` are present only
/// for upstream (non-2xx) failures, which is how the viewer tells "upstream
/// rejected the query" from "no response at all".
#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct ErrorBody {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl From<&WarehouseError> for ErrorBody {
    fn from(err: &WarehouseError) -> Self {
        match err {
            WarehouseError::Upstream { status, body } => ErrorBody {
                error: err.to_string(),
                status: Some(*status),
                // Forward the upstream body as JSON when it parses, else raw.
                details: Some(
                    serde_json::from_str(body)
                        .unwrap_or_else(|_| serde_json::Value::String(body.clone())),
                ),
            },
            _ => ErrorBody {
                error: err.to_string(),
                status: None,
                details: None,
            },
        }
    }
}

// ── Re-exports ───────────────────────────────────────────────────
// Preserves flat `api::foo` import paths used by the router.

pub use health::health;
pub use pages::{index, table_page};
pub use table::table_data;
