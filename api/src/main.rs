use posts_api::{AppState, Config, app};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .json()
        .init();

    let config = Config::from_env()?;
    let addr = config.bind_addr();
    let state = AppState::new(config);

    let listener = tokio::net::TcpListener::bind(addr).await?;

    info!("Server running on http://{}", addr);
    info!("API Endpoints:");
    info!("  GET    /health              - Health check");
    info!("  POST   /posts               - Create post");
    info!("  GET    /posts/:id           - Get post with comments");
    info!("  POST   /posts/:id/comments  - Add comment");
    info!("  POST   /posts/:id/like      - Like post");
    info!("  POST   /posts/:id/dislike   - Dislike post");
    info!("  GET    /posts/:id/share     - Shareable link");

    axum::serve(listener, app(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to listen for shutdown signal: {}", e);
    }
}
