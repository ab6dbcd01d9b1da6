// Telemetry store - Process-wide aggregate and subscriber notification
use crate::application::ingestion::{derive_metric_point, validate, ValidationError};
use crate::application::seed;
use crate::domain::alert::{Alert, AlertRegistry};
use crate::domain::classifier::{classify_battery, classify_motor};
use crate::domain::component::{overall_health, ComponentRecord, ComponentRegistry};
use crate::domain::maintenance::MaintenanceRecord;
use crate::domain::notification::{Notification, NotificationRegistry};
use crate::domain::telemetry::{MetricPoint, MetricsWindow, ReadingDraft, TelemetryReading};
use chrono::{DateTime, Local, Utc};
use parking_lot::{Mutex, RwLock};
use serde::Serialize;
use std::sync::atomic::{AtomicU64, Ordering};

const MOTOR_COMPONENT: &str = "motor";
const BATTERY_COMPONENT: &str = "battery";

/// Immutable view of the engine's live state, handed to readers and
/// subscribers at a point in time. Excludes the uncapped raw-reading
/// history, which stays behind `TelemetryStore::history`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EngineSnapshot {
    pub components: Vec<ComponentRecord>,
    pub alerts: Vec<Alert>,
    pub notifications: Vec<Notification>,
    pub metrics: Vec<MetricPoint>,
    pub last_sync: DateTime<Utc>,
    pub records_processed: u64,
    pub overall_health: u8,
}

pub type SnapshotCallback = Box<dyn Fn(&EngineSnapshot) + Send + Sync>;

/// Handle returned by `subscribe`; pass back to `unsubscribe` to stop
/// receiving snapshots.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubscriptionId(u64);

struct Subscriber {
    id: u64,
    callback: SnapshotCallback,
}

struct EngineState {
    components: ComponentRegistry,
    alerts: AlertRegistry,
    notifications: NotificationRegistry,
    maintenance: Vec<MaintenanceRecord>,
    window: MetricsWindow,
    history: Vec<TelemetryReading>,
    last_sync: DateTime<Utc>,
    records_processed: u64,
}

impl EngineState {
    fn snapshot(&self) -> EngineSnapshot {
        EngineSnapshot {
            components: self.components.list().to_vec(),
            alerts: self.alerts.list().to_vec(),
            notifications: self.notifications.list().to_vec(),
            metrics: self.window.points().to_vec(),
            last_sync: self.last_sync,
            records_processed: self.records_processed,
            overall_health: overall_health(self.components.list()),
        }
    }
}

/// The process-wide aggregate. Owns every collection; readers get cloned
/// snapshots, never handles into the store. Mutations take the single
/// write lock, so the multi-step ingest sequence commits atomically and a
/// reader or subscriber never observes a partially applied update.
pub struct TelemetryStore {
    state: RwLock<EngineState>,
    subscribers: Mutex<Vec<Subscriber>>,
    next_subscription: AtomicU64,
}

impl TelemetryStore {
    /// Seed the fixed catalogs and bookkeeping.
    pub fn new() -> Self {
        Self {
            state: RwLock::new(EngineState {
                components: ComponentRegistry::from_records(seed::initial_components()),
                alerts: AlertRegistry::from_alerts(seed::initial_alerts()),
                notifications: NotificationRegistry::from_notifications(
                    seed::initial_notifications(),
                ),
                maintenance: seed::initial_maintenance(),
                window: MetricsWindow::from_points(seed::initial_metrics()),
                history: Vec::new(),
                last_sync: Utc::now(),
                records_processed: seed::INITIAL_RECORDS_PROCESSED,
            }),
            subscribers: Mutex::new(Vec::new()),
            next_subscription: AtomicU64::new(1),
        }
    }

    /// Validate and apply one reading. Validation runs entirely up front;
    /// a rejection touches no state and notifies no one. On success the
    /// window append, both reclassifications, the history append, and the
    /// bookkeeping update commit as one atomic step.
    pub fn ingest(&self, draft: &ReadingDraft) -> Result<(), ValidationError> {
        let reading = validate(draft, Utc::now()).inspect_err(|err| {
            tracing::warn!("rejected telemetry reading: {}", err);
        })?;
        let point = derive_metric_point(&reading, Local::now().format("%H:%M").to_string());

        let snapshot = {
            let mut state = self.state.write();
            state.window.append(point);
            state
                .components
                .set_status(MOTOR_COMPONENT, classify_motor(reading.motor_temp));
            if let Some(status) = classify_battery(reading.battery_voltage) {
                state.components.set_status(BATTERY_COMPONENT, status);
            }
            state.last_sync = reading.timestamp;
            state.records_processed += 1;
            state.history.push(reading);
            state.snapshot()
        };

        tracing::debug!(
            "accepted telemetry reading, {} records processed",
            snapshot.records_processed
        );
        self.notify(&snapshot);
        Ok(())
    }

    /// Mark an alert acknowledged. Unknown or already-acknowledged ids
    /// commit nothing and notify no one.
    pub fn acknowledge_alert(&self, id: &str) {
        self.commit(|state| state.alerts.acknowledge(id));
    }

    /// Remove an alert permanently. Unknown ids commit nothing.
    pub fn dismiss_alert(&self, id: &str) {
        self.commit(|state| state.alerts.dismiss(id));
    }

    /// Mark a notification read. Unknown or already-read ids commit nothing.
    pub fn mark_notification_read(&self, id: &str) {
        self.commit(|state| state.notifications.mark_read(id));
    }

    pub fn list_components(&self) -> Vec<ComponentRecord> {
        self.state.read().components.list().to_vec()
    }

    pub fn component(&self, id: &str) -> Option<ComponentRecord> {
        self.state.read().components.get(id).cloned()
    }

    pub fn list_alerts(&self) -> Vec<Alert> {
        self.state.read().alerts.list().to_vec()
    }

    pub fn active_alerts(&self) -> Vec<Alert> {
        self.state.read().alerts.active()
    }

    pub fn notifications(&self) -> Vec<Notification> {
        self.state.read().notifications.list().to_vec()
    }

    pub fn unread_notifications(&self) -> usize {
        self.state.read().notifications.unread_count()
    }

    pub fn maintenance_log(&self) -> Vec<MaintenanceRecord> {
        self.state.read().maintenance.clone()
    }

    /// Window contents oldest-first, at most seven entries.
    pub fn metrics_window(&self) -> Vec<MetricPoint> {
        self.state.read().window.points().to_vec()
    }

    /// Append-only list of every accepted reading. Uncapped; retention over
    /// very long sessions is the caller's concern.
    pub fn history(&self) -> Vec<TelemetryReading> {
        self.state.read().history.clone()
    }

    pub fn last_sync(&self) -> DateTime<Utc> {
        self.state.read().last_sync
    }

    pub fn records_processed(&self) -> u64 {
        self.state.read().records_processed
    }

    pub fn snapshot(&self) -> EngineSnapshot {
        self.state.read().snapshot()
    }

    /// Register a callback invoked with the new snapshot after every
    /// committed mutation. The callback runs outside the state lock and may
    /// freely issue reads.
    pub fn subscribe(&self, callback: SnapshotCallback) -> SubscriptionId {
        let id = self.next_subscription.fetch_add(1, Ordering::Relaxed);
        self.subscribers.lock().push(Subscriber { id, callback });
        SubscriptionId(id)
    }

    pub fn unsubscribe(&self, subscription: SubscriptionId) {
        self.subscribers.lock().retain(|s| s.id != subscription.0);
    }

    /// Apply a mutation under the write lock; when it reports a change,
    /// clone the snapshot inside the same critical section and notify.
    fn commit<F>(&self, mutate: F)
    where
        F: FnOnce(&mut EngineState) -> bool,
    {
        let snapshot = {
            let mut state = self.state.write();
            if !mutate(&mut state) {
                return;
            }
            state.snapshot()
        };
        self.notify(&snapshot);
    }

    fn notify(&self, snapshot: &EngineSnapshot) {
        let subscribers = self.subscribers.lock();
        tracing::debug!("notifying {} subscriber(s)", subscribers.len());
        for subscriber in subscribers.iter() {
            (subscriber.callback)(snapshot);
        }
    }
}

impl Default for TelemetryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::component::HealthStatus;
    use crate::domain::telemetry::METRICS_WINDOW_CAPACITY;
    use serde_json::json;
    use std::sync::Arc;

    fn valid_draft() -> ReadingDraft {
        ReadingDraft {
            vehicle_id: Some("NEV-2024-001".to_string()),
            mileage: Some(json!(45000)),
            battery_voltage: Some(json!(400)),
            motor_temp: Some(json!(65)),
            ambient_temp: Some(json!(25)),
        }
    }

    #[test]
    fn test_seeded_start_state() {
        let store = TelemetryStore::new();
        assert_eq!(store.records_processed(), 12847);
        assert_eq!(store.metrics_window().len(), METRICS_WINDOW_CAPACITY);
        assert_eq!(store.list_components().len(), 6);
        assert_eq!(store.list_alerts().len(), 3);
        assert!(store.history().is_empty());
    }

    #[test]
    fn test_ingest_scenario_from_full_window() {
        let store = TelemetryStore::new();
        let oldest = store.metrics_window()[0].clone();

        store.ingest(&valid_draft()).unwrap();

        assert_eq!(store.records_processed(), 12848);
        let window = store.metrics_window();
        assert_eq!(window.len(), METRICS_WINDOW_CAPACITY);
        assert!(!window.contains(&oldest));
        let newest = window.last().unwrap();
        assert_eq!(newest.battery, 100.0);
        assert_eq!(newest.motor, 65.0);
        assert_eq!(newest.efficiency, 92.5);
        assert_eq!(
            store.component("motor").unwrap().status,
            HealthStatus::Healthy
        );
        assert_eq!(store.history().len(), 1);
    }

    #[test]
    fn test_failed_ingest_touches_nothing() {
        let store = TelemetryStore::new();
        let before = store.snapshot();
        let notified = Arc::new(Mutex::new(0u32));
        let counter = Arc::clone(&notified);
        store.subscribe(Box::new(move |_| *counter.lock() += 1));

        let err = store.ingest(&ReadingDraft::default()).unwrap_err();
        assert_eq!(err.fields.len(), 5);
        assert_eq!(store.records_processed(), before.records_processed);
        assert_eq!(store.metrics_window(), before.metrics);
        assert!(store.history().is_empty());
        assert_eq!(*notified.lock(), 0);
    }

    #[test]
    fn test_hot_motor_reading_sets_warning_not_critical() {
        let store = TelemetryStore::new();
        let mut draft = valid_draft();
        draft.motor_temp = Some(json!(90));
        store.ingest(&draft).unwrap();
        assert_eq!(
            store.component("motor").unwrap().status,
            HealthStatus::Warning
        );
    }

    #[test]
    fn test_cool_reading_resets_motor_to_healthy() {
        let store = TelemetryStore::new();
        let mut hot = valid_draft();
        hot.motor_temp = Some(json!(90));
        store.ingest(&hot).unwrap();
        store.ingest(&valid_draft()).unwrap();
        assert_eq!(
            store.component("motor").unwrap().status,
            HealthStatus::Healthy
        );
    }

    #[test]
    fn test_low_voltage_sets_battery_warning_and_never_resets() {
        let store = TelemetryStore::new();
        let mut low = valid_draft();
        low.battery_voltage = Some(json!(200));
        store.ingest(&low).unwrap();
        assert_eq!(
            store.component("battery").unwrap().status,
            HealthStatus::Warning
        );

        // Nominal voltage leaves the warning in place; there is no reset
        // path for the battery.
        store.ingest(&valid_draft()).unwrap();
        assert_eq!(
            store.component("battery").unwrap().status,
            HealthStatus::Warning
        );
    }

    #[test]
    fn test_counter_increments_exactly_once_per_accepted_reading() {
        let store = TelemetryStore::new();
        for _ in 0..3 {
            store.ingest(&valid_draft()).unwrap();
        }
        let _ = store.ingest(&ReadingDraft::default());
        assert_eq!(store.records_processed(), 12850);
    }

    #[test]
    fn test_acknowledge_is_idempotent_and_notifies_once() {
        let store = TelemetryStore::new();
        let notified = Arc::new(Mutex::new(0u32));
        let counter = Arc::clone(&notified);
        store.subscribe(Box::new(move |_| *counter.lock() += 1));

        store.acknowledge_alert("2");
        store.acknowledge_alert("2");
        store.acknowledge_alert("missing");

        assert_eq!(*notified.lock(), 1);
        let alert = store
            .list_alerts()
            .into_iter()
            .find(|a| a.id == "2")
            .unwrap();
        assert!(alert.acknowledged);
        assert_eq!(store.active_alerts().len(), 2);
    }

    #[test]
    fn test_dismiss_removes_alert() {
        let store = TelemetryStore::new();
        store.dismiss_alert("1");
        assert_eq!(store.list_alerts().len(), 2);
        // Acknowledging the dismissed id is a no-op.
        store.acknowledge_alert("1");
        assert_eq!(store.list_alerts().len(), 2);
    }

    #[test]
    fn test_subscriber_sees_consistent_committed_snapshot() {
        let store = TelemetryStore::new();
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        store.subscribe(Box::new(move |snapshot| {
            sink.lock()
                .push((snapshot.records_processed, snapshot.metrics.len()));
        }));

        store.ingest(&valid_draft()).unwrap();

        let seen = seen.lock();
        assert_eq!(*seen, vec![(12848, METRICS_WINDOW_CAPACITY)]);
    }

    #[test]
    fn test_unsubscribe_stops_notifications() {
        let store = TelemetryStore::new();
        let notified = Arc::new(Mutex::new(0u32));
        let counter = Arc::clone(&notified);
        let subscription = store.subscribe(Box::new(move |_| *counter.lock() += 1));

        store.ingest(&valid_draft()).unwrap();
        store.unsubscribe(subscription);
        store.ingest(&valid_draft()).unwrap();

        assert_eq!(*notified.lock(), 1);
    }

    #[test]
    fn test_mark_notification_read_commits_once() {
        let store = TelemetryStore::new();
        let notified = Arc::new(Mutex::new(0u32));
        let counter = Arc::clone(&notified);
        store.subscribe(Box::new(move |_| *counter.lock() += 1));

        store.mark_notification_read("n1");
        store.mark_notification_read("n1");
        // n3 is seeded already-read.
        store.mark_notification_read("n3");

        assert_eq!(*notified.lock(), 1);
        assert_eq!(store.unread_notifications(), 1);
    }

    #[test]
    fn test_window_bound_over_many_ingests() {
        let store = TelemetryStore::new();
        for n in 0..10 {
            let mut draft = valid_draft();
            draft.motor_temp = Some(json!(40 + n));
            store.ingest(&draft).unwrap();
            assert_eq!(store.metrics_window().len(), METRICS_WINDOW_CAPACITY);
        }
        let motors: Vec<f64> = store.metrics_window().iter().map(|p| p.motor).collect();
        assert_eq!(motors, vec![43.0, 44.0, 45.0, 46.0, 47.0, 48.0, 49.0]);
    }
}
