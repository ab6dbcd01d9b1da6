// Application state for HTTP handlers
use crate::application::store::TelemetryStore;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<TelemetryStore>,
}
