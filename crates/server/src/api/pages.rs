//! Endpoint descriptor and the HTML table viewer page.

use axum::response::Html;
use axum::Json;
use serde::Serialize;

/// Viewer page served at `/table`; fetches `/api/table-data` on load.
const TABLE_PAGE: &str = include_str!("../../assets/table.html");

#[derive(Serialize, utoipa::ToSchema)]
pub struct IndexResponse {
    pub message: &'static str,
    pub endpoints: Endpoints,
}

#[derive(Serialize, utoipa::ToSchema)]
pub struct Endpoints {
    pub table: &'static str,
    pub api: &'static str,
    pub health: &'static str,
    pub docs: &'static str,
}

/// Service descriptor listing the available endpoints.
#[utoipa::path(
    get,
    path = "/",
    tag = "Pages",
    responses(
        (status = 200, description = "Endpoint listing", body = IndexResponse)
    )
)]
pub async fn index() -> Json<IndexResponse> {
    Json(IndexResponse {
        message: "Databricks table viewer",
        endpoints: Endpoints {
            table: "/table",
            api: "/api/table-data",
            health: "/health",
            docs: "/docs",
        },
    })
}

/// HTML viewer that renders `/api/table-data` as a table.
#[utoipa::path(
    get,
    path = "/table",
    tag = "Pages",
    responses(
        (status = 200, description = "HTML table viewer", body = String, content_type = "text/html")
    )
)]
pub async fn table_page() -> Html<&'static str> {
    Html(TABLE_PAGE)
}
