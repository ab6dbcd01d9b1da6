// Main entry point - Dependency injection and server setup
mod domain;
mod application;
mod infrastructure;
mod presentation;

use std::{net::SocketAddr, sync::Arc};

use anyhow::Context;
use axum::{
    routing::{delete, get, post},
    Router,
};
use tower_http::trace::TraceLayer;

use crate::application::store::TelemetryStore;
use crate::infrastructure::config::load_server_config;
use crate::presentation::app_state::AppState;
use crate::presentation::handlers::{
    acknowledge_alert, active_alerts, dismiss_alert, engine_status, export_metrics, get_component,
    health_check, ingest_reading, list_alerts, list_components, list_notifications,
    maintenance_log, mark_notification_read, metrics_window, stream_dashboard, telemetry_history,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    // Load configuration
    let server_config = load_server_config()?;

    // Create the engine (application layer)
    let store = Arc::new(TelemetryStore::new());

    // Create application state
    let state = Arc::new(AppState { store });

    // Build router (presentation layer)
    // Note: no CompressionLayer here - the dashboard stream is a chunked
    // NDJSON protocol whose frames must flush line by line.
    let router = Router::new()
        .route("/healthz", get(health_check))
        .route("/components", get(list_components))
        .route("/components/:id", get(get_component))
        .route("/alerts", get(list_alerts))
        .route("/alerts/active", get(active_alerts))
        .route("/alerts/:id/acknowledge", post(acknowledge_alert))
        .route("/alerts/:id", delete(dismiss_alert))
        .route("/telemetry", post(ingest_reading))
        .route("/telemetry/history", get(telemetry_history))
        .route("/metrics", get(metrics_window))
        .route("/metrics/export", get(export_metrics))
        .route("/notifications", get(list_notifications))
        .route("/notifications/:id/read", post(mark_notification_read))
        .route("/maintenance", get(maintenance_log))
        .route("/status", get(engine_status))
        .route("/dashboard/stream", get(stream_dashboard))
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    // Start server
    let addr: SocketAddr = format!(
        "{}:{}",
        server_config.server.host, server_config.server.port
    )
    .parse()
    .context("invalid server address")?;
    println!("Starting vehicle-telemetry service on {}", addr);

    axum::serve(tokio::net::TcpListener::bind(addr).await?, router).await?;

    Ok(())
}
