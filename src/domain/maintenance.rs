// Maintenance history domain models
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MaintenanceKind {
    Scheduled,
    Emergency,
    Preventive,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum MaintenanceStatus {
    Completed,
    Pending,
    InProgress,
}

/// One service-history entry. The log is seeded at init and read-only for
/// the process lifetime.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MaintenanceRecord {
    pub id: String,
    pub date: String,
    pub component: String,
    pub kind: MaintenanceKind,
    pub description: String,
    pub technician: String,
    pub status: MaintenanceStatus,
    pub cost: f64,
}

/// Filter maintenance records by kind and a case-insensitive substring
/// search over component, description, and technician.
pub fn filter_records(
    records: &[MaintenanceRecord],
    kind: Option<MaintenanceKind>,
    search: Option<&str>,
) -> Vec<MaintenanceRecord> {
    let needle = search.map(|s| s.to_lowercase());
    records
        .iter()
        .filter(|r| kind.is_none_or(|k| r.kind == k))
        .filter(|r| {
            needle.as_deref().is_none_or(|q| {
                r.component.to_lowercase().contains(q)
                    || r.description.to_lowercase().contains(q)
                    || r.technician.to_lowercase().contains(q)
            })
        })
        .cloned()
        .collect()
}
