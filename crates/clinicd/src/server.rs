//! HTTP server for a clinic daemon.
//!
//! One federated data silo: patient records never leave this process, only
//! tool results are returned to the orchestrator. The daemon answers
//! requests dispatched by the orchestrator's router and has no knowledge of
//! other clinics or of the global task plan.

use crate::config::SiloConfig;
use crate::handlers::ToolHandlers;
use crate::routes;
use crate::seed;
use crate::store::SlotStore;
use anyhow::{Context, Result};
use axum::Router;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::info;

/// Application state shared across connections.
pub struct AppState {
    pub handlers: ToolHandlers,
}

/// Build the axum application: seed the store, verify it loads, wire the
/// /mcp route. An unreadable or corrupt store aborts startup — a broken
/// silo must not come up half-working.
pub fn app(config: &SiloConfig) -> Result<Router> {
    let store = Arc::new(SlotStore::open(&config.db_path));
    store
        .seed_if_missing(&seed::seed_slots(&config.clinic_id, &config.specialty))
        .context("failed to seed slot store")?;
    let slots = store.load().context("slot store unusable")?;
    info!(
        "{}: {} slots loaded from {}",
        config.clinic_id,
        slots.len(),
        config.db_path.display()
    );

    let handlers = ToolHandlers::new(
        Arc::clone(&store),
        config.specialty.clone(),
        config.verify_identity,
    );
    let state = Arc::new(AppState { handlers });

    Ok(routes::mcp_routes()
        .with_state(state)
        .layer(TraceLayer::new_for_http()))
}

/// Run the HTTP server until interrupted.
pub async fn run(config: SiloConfig) -> Result<()> {
    let app = app(&config)?;

    let addr = format!("127.0.0.1:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    info!(
        "{} ({}) listening on http://{}/mcp",
        config.clinic_id, config.specialty, addr
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
    info!("shutting down");
}
