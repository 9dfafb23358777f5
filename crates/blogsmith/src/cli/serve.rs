//! Page server command handler.

use anyhow::Context;
use blogsmith::web::{AppState, create_router};
use blogsmith::{AppConfig, build_invoker};
use tracing::{info, warn};

/// Handle the `serve` command
pub async fn handle_serve_command(config: &AppConfig) -> anyhow::Result<()> {
    let invoker = build_invoker(config);
    let cache = invoker.cache().clone();

    if *config.model().warm_up() {
        cache.warm_up().await?;
    }

    let app = create_router(AppState::new(invoker)?);
    let addr = config.bind_addr()?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    info!(
        model = %config.model().spec().path().display(),
        runtime = %config.inference().base_url(),
        "Blog form listening on http://{}",
        addr
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Page server failed")?;

    cache.release().await;
    info!("Server shut down");
    Ok(())
}

/// Wait for a shutdown signal (Ctrl+C).
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "Failed to listen for Ctrl+C");
        std::future::pending::<()>().await;
    }
    info!("Received shutdown signal");
}
