mod api;
mod router;
mod state;

use std::sync::Arc;

use tracing::info;

use brickview_warehouse::{HttpStatementClient, StatementExecutor};

use crate::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_target(false)
        .with_level(true)
        .init();

    brickview_core::config::load_dotenv();
    let config = brickview_core::Config::from_env();
    config.log_summary();

    // Missing warehouse settings are reported per request, not here.
    let executor: Arc<dyn StatementExecutor> =
        Arc::new(HttpStatementClient::new(config.warehouse.clone())?);
    let state = Arc::new(AppState {
        config: config.clone(),
        executor,
    });

    let app = router::build_router(state);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!(
        "Server listening on http://localhost:{}/table",
        config.server.port
    );
    axum::serve(listener, app).await?;

    Ok(())
}
