//! HTTP client for the warehouse statement execution API.
//!
//! One POST per statement, bearer auth, hard 60-second timeout, no retries.

use std::time::Duration;

use async_trait::async_trait;
use serde_json::json;
use tracing::debug;

use brickview_core::config::{self, LocatorMode, WarehouseConfig};

use crate::executor::{RawStatementResponse, StatementExecutor, WarehouseError};

/// Hard timeout for one statement execution request.
pub const REQUEST_TIMEOUT_SECS: u64 = 60;

/// The required warehouse settings, resolved out of their `Option`s.
#[derive(Debug)]
pub struct ResolvedWarehouse<'a> {
    pub host: &'a str,
    pub http_path: &'a str,
    pub access_token: &'a str,
}

/// Check that every required warehouse setting is present, naming the env
/// var of the first missing one. Runs before any network I/O; the request
/// handler delegates its validation step here too.
pub fn require_configured(cfg: &WarehouseConfig) -> Result<ResolvedWarehouse<'_>, WarehouseError> {
    let access_token = cfg
        .access_token
        .as_deref()
        .ok_or(WarehouseError::NotConfigured(config::ENV_ACCESS_TOKEN))?;
    let host = cfg
        .host
        .as_deref()
        .ok_or(WarehouseError::NotConfigured(config::ENV_HOST))?;
    let http_path = cfg
        .http_path
        .as_deref()
        .ok_or(WarehouseError::NotConfigured(config::ENV_HTTP_PATH))?;
    Ok(ResolvedWarehouse {
        host,
        http_path,
        access_token,
    })
}

/// Derive a bare warehouse id from an HTTP path: the final segment after the
/// last `/`.
pub fn warehouse_id_from_path(path: &str) -> &str {
    path.rsplit('/').next().unwrap_or(path)
}

/// Request body for one statement submission. Exactly one locator field is
/// sent, chosen by the configured mode.
fn statement_body(statement: &str, locator: LocatorMode, http_path: &str) -> serde_json::Value {
    match locator {
        LocatorMode::Path => json!({
            "statement": statement,
            "warehouse_path": http_path,
        }),
        LocatorMode::Id => json!({
            "statement": statement,
            "warehouse_id": warehouse_id_from_path(http_path),
        }),
    }
}

/// Statement executor backed by the `/api/2.0/sql/statements` endpoint.
pub struct HttpStatementClient {
    client: reqwest::Client,
    cfg: WarehouseConfig,
}

impl HttpStatementClient {
    /// Build a client with the hard request timeout. Missing settings are
    /// not an error here — they surface per request via [`require_configured`].
    pub fn new(cfg: WarehouseConfig) -> Result<Self, WarehouseError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .map_err(|e| WarehouseError::Transport(format!("failed to build HTTP client: {e}")))?;
        Ok(Self { client, cfg })
    }
}

#[async_trait]
impl StatementExecutor for HttpStatementClient {
    async fn execute(&self, statement: &str) -> Result<RawStatementResponse, WarehouseError> {
        let resolved = require_configured(&self.cfg)?;
        let url = format!("https://{}/api/2.0/sql/statements", resolved.host);
        let body = statement_body(statement, self.cfg.locator, resolved.http_path);

        debug!(
            "POST {} locator={} token={}",
            url,
            self.cfg.locator.as_str(),
            config::redact(resolved.access_token),
        );

        let response = self
            .client
            .post(&url)
            .bearer_auth(resolved.access_token)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    WarehouseError::Timeout(REQUEST_TIMEOUT_SECS)
                } else {
                    WarehouseError::Transport(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(WarehouseError::Upstream {
                status: status.as_u16(),
                body,
            });
        }

        response
            .json::<RawStatementResponse>()
            .await
            .map_err(|e| WarehouseError::Transport(format!("unreadable warehouse response: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_config() -> WarehouseConfig {
        WarehouseConfig {
            host: Some("dbc-a1b2c3d4.cloud.databricks.com".to_string()),
            http_path: Some("/sql/1.0/warehouses/5f20e2fe1019305b".to_string()),
            access_token: Some("dapi-secret".to_string()),
            locator: LocatorMode::Path,
        }
    }

    #[test]
    fn require_configured_accepts_a_complete_config() {
        let cfg = full_config();
        let resolved = require_configured(&cfg).unwrap();
        assert_eq!(resolved.host, "dbc-a1b2c3d4.cloud.databricks.com");
        assert_eq!(resolved.http_path, "/sql/1.0/warehouses/5f20e2fe1019305b");
        assert_eq!(resolved.access_token, "dapi-secret");
    }

    #[test]
    fn require_configured_names_the_missing_credential_first() {
        let cfg = WarehouseConfig {
            access_token: None,
            host: None,
            ..full_config()
        };
        let err = require_configured(&cfg).unwrap_err();
        assert!(matches!(
            err,
            WarehouseError::NotConfigured("AZURE_PAT_DELIVERY_TEST")
        ));
    }

    #[test]
    fn require_configured_names_host_and_path() {
        let no_host = WarehouseConfig {
            host: None,
            ..full_config()
        };
        assert!(matches!(
            require_configured(&no_host).unwrap_err(),
            WarehouseError::NotConfigured("DATABRICKS_HOST")
        ));

        let no_path = WarehouseConfig {
            http_path: None,
            ..full_config()
        };
        assert!(matches!(
            require_configured(&no_path).unwrap_err(),
            WarehouseError::NotConfigured("DATABRICKS_HTTP_PATH")
        ));
    }

    #[test]
    fn warehouse_id_is_the_trailing_segment() {
        assert_eq!(
            warehouse_id_from_path("/sql/1.0/warehouses/5f20e2fe1019305b"),
            "5f20e2fe1019305b"
        );
        assert_eq!(warehouse_id_from_path("bare-id"), "bare-id");
        assert_eq!(warehouse_id_from_path("/trailing/"), "");
    }

    #[test]
    fn statement_body_sends_exactly_one_locator() {
        let path_body = statement_body("SELECT 1", LocatorMode::Path, "/sql/1.0/warehouses/abc");
        assert_eq!(path_body["statement"], "SELECT 1");
        assert_eq!(path_body["warehouse_path"], "/sql/1.0/warehouses/abc");
        assert!(path_body.get("warehouse_id").is_none());

        let id_body = statement_body("SELECT 1", LocatorMode::Id, "/sql/1.0/warehouses/abc");
        assert_eq!(id_body["warehouse_id"], "abc");
        assert!(id_body.get("warehouse_path").is_none());
    }
}
