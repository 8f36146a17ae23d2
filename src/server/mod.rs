pub mod handlers;
pub mod router;
pub mod state;

use crate::config::types::ServerConfig;
use crate::error::Result;
use router::build_router;
use state::AppState;

/// Bind and serve until ctrl-c.
pub async fn serve(config: &ServerConfig, state: AppState) -> Result<()> {
    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server running on http://{addr}");

    axum::serve(listener, build_router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "Could not listen for ctrl-c");
        std::future::pending::<()>().await;
    }
    tracing::info!("Received ctrl-c, shutting down");
}
