use std::sync::Arc;

use brickview_core::Config;
use brickview_warehouse::StatementExecutor;

/// Shared read-only state: configuration plus the statement executor.
/// Nothing here is mutated after startup — requests stay fully independent.
pub struct AppState {
    pub config: Config,
    pub executor: Arc<dyn StatementExecutor>,
}
