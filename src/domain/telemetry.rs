// Telemetry reading and metrics-window domain models
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Raw, untrusted reading as submitted by a caller. Numeric fields arrive as
/// loose JSON values so that a missing field, a non-numeric string, and a
/// non-finite number can all be reported back together after validation.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ReadingDraft {
    pub vehicle_id: Option<String>,
    pub mileage: Option<Value>,
    pub battery_voltage: Option<Value>,
    pub motor_temp: Option<Value>,
    pub ambient_temp: Option<Value>,
}

/// A validated reading accepted by the engine. Kept in an append-only
/// history; retention over very long sessions is the caller's concern.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TelemetryReading {
    pub vehicle_id: String,
    pub mileage: f64,
    pub battery_voltage: f64,
    pub motor_temp: f64,
    pub ambient_temp: f64,
    pub timestamp: DateTime<Utc>,
}

/// One derived performance sample for trend display and export.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricPoint {
    pub time: String,
    pub battery: f64,
    pub motor: f64,
    pub efficiency: f64,
}

impl MetricPoint {
    pub fn new(time: impl Into<String>, battery: f64, motor: f64, efficiency: f64) -> Self {
        Self {
            time: time.into(),
            battery,
            motor,
            efficiency,
        }
    }
}

/// The window never holds more than seven points; this is a correctness
/// constant, not configuration.
pub const METRICS_WINDOW_CAPACITY: usize = 7;

/// Rolling window of the most recent derived samples. Appending to a full
/// window evicts the oldest point first.
#[derive(Debug, Clone, Default)]
pub struct MetricsWindow {
    points: Vec<MetricPoint>,
}

impl MetricsWindow {
    pub fn from_points(points: Vec<MetricPoint>) -> Self {
        let mut window = Self::default();
        for point in points {
            window.append(point);
        }
        window
    }

    pub fn append(&mut self, point: MetricPoint) {
        if self.points.len() == METRICS_WINDOW_CAPACITY {
            self.points.remove(0);
        }
        self.points.push(point);
    }

    /// Current contents oldest-to-newest; this exact order is what export
    /// and charting consume.
    pub fn points(&self) -> &[MetricPoint] {
        &self.points
    }
}
