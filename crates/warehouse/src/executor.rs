use async_trait::async_trait;

/// Upstream 2xx JSON body, verbatim and unvalidated. Shape handling belongs
/// to [`crate::normalize`].
pub type RawStatementResponse = serde_json::Value;

/// Trait for statement execution backends — the HTTP client implements this,
/// tests substitute stubs.
#[async_trait]
pub trait StatementExecutor: Send + Sync {
    /// Submit one SQL statement for synchronous execution.
    async fn execute(&self, statement: &str) -> Result<RawStatementResponse, WarehouseError>;
}

/// Failure classes of one statement execution. Never retried; the request
/// handler maps each to the JSON error envelope.
#[derive(Debug, thiserror::Error)]
pub enum WarehouseError {
    /// A required setting is missing. Raised before any network I/O.
    #[error("{0} environment variable is not set")]
    NotConfigured(&'static str),

    /// The warehouse answered with a non-2xx status.
    #[error("warehouse returned HTTP {status}")]
    Upstream { status: u16, body: String },

    /// No response within the request timeout.
    #[error("no response from warehouse after {0}s")]
    Timeout(u64),

    /// Connection-level failure, no response received.
    #[error("failed to reach warehouse: {0}")]
    Transport(String),
}
