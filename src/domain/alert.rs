// Predictive alert domain models
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
    High,
}

/// A standing notice about a predicted or detected issue. `component` is a
/// display name, not a foreign key into the component catalog.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Alert {
    pub id: String,
    pub component: String,
    pub severity: Severity,
    pub message: String,
    pub time_to_failure: String,
    pub recommendation: String,
    pub acknowledged: bool,
}

#[derive(Debug, Clone)]
pub struct AlertRegistry {
    alerts: Vec<Alert>,
}

impl AlertRegistry {
    pub fn from_alerts(alerts: Vec<Alert>) -> Self {
        Self { alerts }
    }

    pub fn list(&self) -> &[Alert] {
        &self.alerts
    }

    /// Unacknowledged alerts, relative order preserved.
    pub fn active(&self) -> Vec<Alert> {
        self.alerts
            .iter()
            .filter(|a| !a.acknowledged)
            .cloned()
            .collect()
    }

    /// Mark an alert acknowledged. Idempotent; unknown ids are a no-op.
    /// Returns whether anything changed.
    pub fn acknowledge(&mut self, id: &str) -> bool {
        match self.alerts.iter_mut().find(|a| a.id == id) {
            Some(alert) if !alert.acknowledged => {
                alert.acknowledged = true;
                true
            }
            _ => false,
        }
    }

    /// Remove an alert permanently. Unknown ids are a no-op. Returns whether
    /// anything was removed.
    pub fn dismiss(&mut self, id: &str) -> bool {
        let before = self.alerts.len();
        self.alerts.retain(|a| a.id != id);
        self.alerts.len() != before
    }
}
