use std::env;

use serde::{Deserialize, Serialize};

/// Load .env file (silently ignores if missing).
pub fn load_dotenv() {
    dotenvy::dotenv().ok();
}

fn env_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Read an env var, treating "unset" and "empty" the same way.
fn env_opt(key: &str) -> Option<String> {
    env::var(key).ok().filter(|s| !s.is_empty())
}

fn env_u16(key: &str, default: u16) -> u16 {
    env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

// ── Env keys ──────────────────────────────────────────────────

/// Workspace host of the SQL warehouse.
pub const ENV_HOST: &str = "DATABRICKS_HOST";
/// HTTP path of the SQL warehouse.
pub const ENV_HTTP_PATH: &str = "DATABRICKS_HTTP_PATH";
/// Personal access token used as the bearer credential.
pub const ENV_ACCESS_TOKEN: &str = "AZURE_PAT_DELIVERY_TEST";

// ── Top-level config ──────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub warehouse: WarehouseConfig,
}

impl Config {
    /// Build config from environment variables (call `load_dotenv()` first).
    pub fn from_env() -> Self {
        Self {
            server: ServerConfig::from_env(),
            warehouse: WarehouseConfig::from_env(),
        }
    }

    /// Print a redacted summary for startup logs.
    pub fn log_summary(&self) {
        tracing::info!("Config loaded:");
        tracing::info!("  server:    {}:{}", self.server.host, self.server.port);
        tracing::info!(
            "  warehouse: host={}, http_path={}, locator={}",
            self.warehouse.host.as_deref().unwrap_or("(unset)"),
            self.warehouse.http_path.as_deref().unwrap_or("(unset)"),
            self.warehouse.locator.as_str(),
        );
        tracing::info!(
            "  credential: {}",
            self.warehouse
                .access_token
                .as_deref()
                .map(redact)
                .unwrap_or_else(|| "(unset)".to_string()),
        );
    }
}

// ── Server ────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    fn from_env() -> Self {
        Self {
            host: env_or("HOST", "0.0.0.0"),
            port: env_u16("PORT", 3000),
        }
    }
}

// ── Warehouse ─────────────────────────────────────────────────

/// Settings for the statement execution API. All three connection settings
/// are required, but a missing one surfaces at query time, not at startup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WarehouseConfig {
    /// Workspace host, e.g. `dbc-a1b2c3d4.cloud.databricks.com`.
    pub host: Option<String>,
    /// Warehouse HTTP path, e.g. `/sql/1.0/warehouses/5f20e2fe1019305b`.
    pub http_path: Option<String>,
    /// Bearer credential for the statement API.
    pub access_token: Option<String>,
    /// Which locator field the statement API receives.
    pub locator: LocatorMode,
}

impl WarehouseConfig {
    fn from_env() -> Self {
        Self {
            host: env_opt(ENV_HOST),
            http_path: env_opt(ENV_HTTP_PATH),
            access_token: env_opt(ENV_ACCESS_TOKEN),
            locator: LocatorMode::from_env(),
        }
    }
}

/// How the warehouse is identified in statement requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LocatorMode {
    /// Send the full HTTP path as `warehouse_path` (canonical).
    Path,
    /// Send the trailing path segment as `warehouse_id`.
    Id,
}

impl LocatorMode {
    /// Unknown values fall back to the canonical path contract.
    pub fn parse(value: &str) -> Self {
        match value.to_ascii_lowercase().as_str() {
            "id" => LocatorMode::Id,
            _ => LocatorMode::Path,
        }
    }

    fn from_env() -> Self {
        Self::parse(&env_or("WAREHOUSE_LOCATOR", "path"))
    }

    pub fn as_str(self) -> &'static str {
        match self {
            LocatorMode::Path => "path",
            LocatorMode::Id => "id",
        }
    }
}

/// Redact a credential to a short prefix for logs.
pub fn redact(secret: &str) -> String {
    let prefix: String = secret.chars().take(6).collect();
    if secret.chars().count() <= 6 {
        "******".to_string()
    } else {
        format!("{}******", prefix)
    }
}
