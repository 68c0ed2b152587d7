//! Statement execution against a Databricks SQL warehouse, plus the
//! reshaping of raw statement responses into the canonical table form.

pub mod client;
pub mod executor;
pub mod normalize;
pub mod types;

pub use client::{require_configured, HttpStatementClient};
pub use executor::{RawStatementResponse, StatementExecutor, WarehouseError};
pub use normalize::normalize;
pub use types::{Row, TableResult};
