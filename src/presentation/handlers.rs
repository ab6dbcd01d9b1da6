// HTTP request handlers
use crate::application::store::{EngineSnapshot, SubscriptionId, TelemetryStore};
use crate::domain::component::overall_health;
use crate::domain::maintenance::{filter_records, MaintenanceKind};
use crate::domain::telemetry::ReadingDraft;
use crate::infrastructure::csv_export::{export_filename, render_metrics_csv};
use crate::infrastructure::ndjson_stream::stream_from_receiver;
use crate::presentation::app_state::AppState;
use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use chrono::Utc;
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;
use tokio::sync::mpsc;

#[derive(Deserialize)]
pub struct MaintenanceQuery {
    pub kind: Option<MaintenanceKind>,
    pub search: Option<String>,
}

/// Health check endpoint
pub async fn health_check() -> &'static str {
    "ok"
}

/// All tracked components in catalog order
pub async fn list_components(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(state.store.list_components())
}

/// One component by id
pub async fn get_component(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> impl IntoResponse {
    match state.store.component(&id) {
        Some(component) => Json(component).into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    }
}

/// All alerts, acknowledged included
pub async fn list_alerts(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(state.store.list_alerts())
}

/// Unacknowledged alerts only
pub async fn active_alerts(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(state.store.active_alerts())
}

/// Acknowledge an alert; unknown ids are a no-op
pub async fn acknowledge_alert(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> impl IntoResponse {
    state.store.acknowledge_alert(&id);
    StatusCode::NO_CONTENT
}

/// Dismiss an alert permanently; unknown ids are a no-op
pub async fn dismiss_alert(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> impl IntoResponse {
    state.store.dismiss_alert(&id);
    StatusCode::NO_CONTENT
}

/// Submit one telemetry reading
pub async fn ingest_reading(
    State(state): State<Arc<AppState>>,
    Json(draft): Json<ReadingDraft>,
) -> impl IntoResponse {
    match state.store.ingest(&draft) {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(err) => (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(json!({ "errors": err.fields })),
        )
            .into_response(),
    }
}

/// Every accepted reading, oldest first
pub async fn telemetry_history(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(state.store.history())
}

/// Rolling metrics window, oldest first
pub async fn metrics_window(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(state.store.metrics_window())
}

/// CSV download of the metrics window
pub async fn export_metrics(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let csv = render_metrics_csv(&state.store.metrics_window());
    let disposition = format!("attachment; filename=\"{}\"", export_filename(Utc::now()));
    (
        [
            (header::CONTENT_TYPE, "text/csv".to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        csv,
    )
}

/// Notifications with the unread badge count
pub async fn list_notifications(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(json!({
        "notifications": state.store.notifications(),
        "unread": state.store.unread_notifications(),
    }))
}

/// Mark a notification read; unknown ids are a no-op
pub async fn mark_notification_read(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> impl IntoResponse {
    state.store.mark_notification_read(&id);
    StatusCode::NO_CONTENT
}

/// Maintenance history, optionally filtered by kind and free-text search
pub async fn maintenance_log(
    Query(query): Query<MaintenanceQuery>,
    State(state): State<Arc<AppState>>,
) -> impl IntoResponse {
    let records = state.store.maintenance_log();
    Json(filter_records(&records, query.kind, query.search.as_deref()))
}

/// Sync bookkeeping and the fleet-level health score
pub async fn engine_status(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(json!({
        "lastSync": state.store.last_sync(),
        "recordsProcessed": state.store.records_processed(),
        "overallHealth": overall_health(&state.store.list_components()),
    }))
}

/// Stream dashboard snapshots: the current snapshot immediately, then one
/// NDJSON line per committed mutation.
pub async fn stream_dashboard(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let store = Arc::clone(&state.store);
    let (tx, rx) = mpsc::channel::<EngineSnapshot>(32);

    // Baseline frame before any live updates.
    let _ = tx.try_send(store.snapshot());

    let sender = tx.clone();
    let subscription = store.subscribe(Box::new(move |snapshot| {
        // A slow client drops intermediate frames; every line is a full
        // snapshot, so the next delivered frame catches it up.
        let _ = sender.try_send(snapshot.clone());
    }));

    let guard = SubscriptionGuard {
        store,
        subscription,
    };
    stream_from_receiver(rx, guard)
}

/// Unsubscribes when the response stream is dropped (client disconnect).
struct SubscriptionGuard {
    store: Arc<TelemetryStore>,
    subscription: SubscriptionId,
}

impl Drop for SubscriptionGuard {
    fn drop(&mut self) {
        self.store.unsubscribe(self.subscription);
    }
}
