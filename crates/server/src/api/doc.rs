//! OpenAPI documentation aggregator.
//!
//! Collects all `#[utoipa::path]`-annotated handlers and `ToSchema`-derived
//! types into a single OpenAPI spec, served via Scalar UI at `/docs`.

use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "brickview API",
        version = "0.1.0",
        description = "Proxies one fixed SQL query to a Databricks SQL warehouse and serves the reshaped result.",
    ),
    tags(
        (name = "Pages", description = "Endpoint descriptor and HTML table viewer"),
        (name = "Table Data", description = "Warehouse query and reshape pipeline"),
        (name = "Health", description = "Liveness"),
    ),
    paths(
        // Pages
        crate::api::pages::index,
        crate::api::pages::table_page,
        // Table Data
        crate::api::table::table_data,
        // Health
        crate::api::health::health,
    )
)]
pub struct ApiDoc;
