use crate::config::Config;
use crate::handlers;
use crate::state::AppState;
use anyhow::Context;
use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

/// Build the HTTP server with all routes and middleware
///
/// Requests to paths outside this table fall through to axum's default
/// 404 handling. Exposed so the app can be embedded without binding a
/// port.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index_handler))
        .route("/api/info", get(handlers::info_handler))
        .route("/health", get(handlers::health_handler))
        .route("/ready", get(handlers::ready_handler))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

/// Read the root page template from disk.
pub async fn load_template(path: &str) -> anyhow::Result<String> {
    tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read template {}", path))
}

/// Bind the configured port on all interfaces and serve until shutdown.
pub async fn start(config: Config) -> anyhow::Result<()> {
    let index_html = load_template(&config.template_path).await?;

    let port = config.port;
    let state = AppState::new(Arc::new(config), index_html);
    let app = build_router(state);

    let addr = format!("0.0.0.0:{}", port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    tracing::info!("Info server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
