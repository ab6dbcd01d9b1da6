// Component health domain models
use serde::Serialize;

/// Status tier for a tracked vehicle subsystem, ordered by severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Healthy,
    Warning,
    Critical,
}

/// One display metric on a component card (insertion order is display order).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComponentMetric {
    pub label: String,
    pub value: String,
}

impl ComponentMetric {
    pub fn new(label: &str, value: &str) -> Self {
        Self {
            label: label.to_string(),
            value: value.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentRecord {
    pub id: String,
    pub title: String,
    pub status: HealthStatus,
    pub metrics: Vec<ComponentMetric>,
    pub predicted_failure: String,
    pub last_maintenance: String,
}

/// Fixed catalog of component records. Seeded once at engine init; only
/// `status` mutates afterwards, and records are never added or removed.
#[derive(Debug, Clone)]
pub struct ComponentRegistry {
    records: Vec<ComponentRecord>,
}

impl ComponentRegistry {
    pub fn from_records(records: Vec<ComponentRecord>) -> Self {
        Self { records }
    }

    pub fn get(&self, id: &str) -> Option<&ComponentRecord> {
        self.records.iter().find(|c| c.id == id)
    }

    /// All records in seed order, stable for the process lifetime.
    pub fn list(&self) -> &[ComponentRecord] {
        &self.records
    }

    /// Set a component's status. Unknown ids are a silent no-op so stale
    /// identifiers from an old snapshot never fault the caller. Returns
    /// whether anything actually changed.
    pub fn set_status(&mut self, id: &str, status: HealthStatus) -> bool {
        match self.records.iter_mut().find(|c| c.id == id) {
            Some(record) if record.status != status => {
                record.status = status;
                true
            }
            _ => false,
        }
    }
}

/// Fleet-level health score: per-component healthy=100, warning=70,
/// critical=30, rounded mean across the catalog.
pub fn overall_health(records: &[ComponentRecord]) -> u8 {
    if records.is_empty() {
        return 0;
    }
    let total: u32 = records
        .iter()
        .map(|c| match c.status {
            HealthStatus::Healthy => 100u32,
            HealthStatus::Warning => 70,
            HealthStatus::Critical => 30,
        })
        .sum();
    (total as f64 / records.len() as f64).round() as u8
}
