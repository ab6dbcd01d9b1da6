// Seed catalogs for engine init
use crate::domain::alert::{Alert, Severity};
use crate::domain::component::{ComponentMetric, ComponentRecord, HealthStatus};
use crate::domain::maintenance::{MaintenanceKind, MaintenanceRecord, MaintenanceStatus};
use crate::domain::notification::Notification;
use crate::domain::telemetry::MetricPoint;

/// Starting value of the records-processed counter, carried over from the
/// fleet back-office totals this dashboard replaced.
pub const INITIAL_RECORDS_PROCESSED: u64 = 12847;

pub fn initial_components() -> Vec<ComponentRecord> {
    vec![
        ComponentRecord {
            id: "battery".to_string(),
            title: "Battery Pack".to_string(),
            status: HealthStatus::Healthy,
            metrics: vec![
                ComponentMetric::new("State of Charge", "78%"),
                ComponentMetric::new("State of Health", "94%"),
                ComponentMetric::new("Cell Imbalance", "12mV"),
            ],
            predicted_failure: "None expected".to_string(),
            last_maintenance: "Dec 15, 2025".to_string(),
        },
        ComponentRecord {
            id: "motor".to_string(),
            title: "Electric Motor".to_string(),
            status: HealthStatus::Healthy,
            metrics: vec![
                ComponentMetric::new("Peak Efficiency", "97.2%"),
                ComponentMetric::new("Operating Temp", "48°C"),
                ComponentMetric::new("Vibration Level", "0.8 mm/s"),
            ],
            predicted_failure: "None expected".to_string(),
            last_maintenance: "Nov 28, 2025".to_string(),
        },
        ComponentRecord {
            id: "thermal".to_string(),
            title: "Thermal System".to_string(),
            status: HealthStatus::Warning,
            metrics: vec![
                ComponentMetric::new("Coolant Temp", "42°C"),
                ComponentMetric::new("Flow Rate", "8.2 L/min"),
                ComponentMetric::new("Pressure Delta", "0.3 bar"),
            ],
            predicted_failure: "~15 days".to_string(),
            last_maintenance: "Oct 10, 2025".to_string(),
        },
        ComponentRecord {
            id: "charging".to_string(),
            title: "Charging System".to_string(),
            status: HealthStatus::Healthy,
            metrics: vec![
                ComponentMetric::new("Max Charge Rate", "150 kW"),
                ComponentMetric::new("Connector Health", "98%"),
                ComponentMetric::new("Cycles Count", "847"),
            ],
            predicted_failure: "None expected".to_string(),
            last_maintenance: "Dec 01, 2025".to_string(),
        },
        ComponentRecord {
            id: "inverter".to_string(),
            title: "Inverter Unit".to_string(),
            status: HealthStatus::Warning,
            metrics: vec![
                ComponentMetric::new("Efficiency", "96.8%"),
                ComponentMetric::new("IGBT Temp", "72°C"),
                ComponentMetric::new("Capacitor ESR", "0.12Ω"),
            ],
            predicted_failure: "~45 days".to_string(),
            last_maintenance: "Sep 22, 2025".to_string(),
        },
        ComponentRecord {
            id: "cooling".to_string(),
            title: "Cooling Fan".to_string(),
            status: HealthStatus::Healthy,
            metrics: vec![
                ComponentMetric::new("RPM", "2,400"),
                ComponentMetric::new("Current Draw", "1.2A"),
                ComponentMetric::new("Bearing Wear", "Low"),
            ],
            predicted_failure: "~90 days".to_string(),
            last_maintenance: "Nov 15, 2025".to_string(),
        },
    ]
}

pub fn initial_alerts() -> Vec<Alert> {
    vec![
        Alert {
            id: "1".to_string(),
            component: "Battery Cell Module 3".to_string(),
            severity: Severity::High,
            message: "Abnormal temperature gradient detected".to_string(),
            time_to_failure: "~15 days".to_string(),
            recommendation: "Schedule thermal inspection".to_string(),
            acknowledged: false,
        },
        Alert {
            id: "2".to_string(),
            component: "Inverter Unit".to_string(),
            severity: Severity::Medium,
            message: "Efficiency degradation trending".to_string(),
            time_to_failure: "~45 days".to_string(),
            recommendation: "Monitor capacitor health".to_string(),
            acknowledged: false,
        },
        Alert {
            id: "3".to_string(),
            component: "Cooling Pump".to_string(),
            severity: Severity::Low,
            message: "Bearing wear indicators present".to_string(),
            time_to_failure: "~90 days".to_string(),
            recommendation: "Plan replacement during next service".to_string(),
            acknowledged: false,
        },
    ]
}

pub fn initial_notifications() -> Vec<Notification> {
    vec![
        Notification {
            id: "n1".to_string(),
            message: "Thermal system requires attention".to_string(),
            read: false,
        },
        Notification {
            id: "n2".to_string(),
            message: "Inverter efficiency below threshold".to_string(),
            read: false,
        },
        Notification {
            id: "n3".to_string(),
            message: "Scheduled maintenance reminder".to_string(),
            read: true,
        },
    ]
}

/// Trailing day curve shown before the first live reading arrives.
pub fn initial_metrics() -> Vec<MetricPoint> {
    vec![
        MetricPoint::new("00:00", 95.0, 42.0, 97.0),
        MetricPoint::new("04:00", 94.0, 45.0, 96.0),
        MetricPoint::new("08:00", 93.0, 58.0, 94.0),
        MetricPoint::new("12:00", 91.0, 72.0, 92.0),
        MetricPoint::new("16:00", 88.0, 68.0, 93.0),
        MetricPoint::new("20:00", 85.0, 55.0, 95.0),
        MetricPoint::new("Now", 94.0, 48.0, 97.0),
    ]
}

pub fn initial_maintenance() -> Vec<MaintenanceRecord> {
    vec![
        MaintenanceRecord {
            id: "1".to_string(),
            date: "2025-12-15".to_string(),
            component: "Battery Pack".to_string(),
            kind: MaintenanceKind::Scheduled,
            description: "Quarterly battery health check and cell balancing".to_string(),
            technician: "John Smith".to_string(),
            status: MaintenanceStatus::Completed,
            cost: 450.0,
        },
        MaintenanceRecord {
            id: "2".to_string(),
            date: "2025-12-01".to_string(),
            component: "Charging System".to_string(),
            kind: MaintenanceKind::Preventive,
            description: "Connector inspection and cleaning".to_string(),
            technician: "Maria Garcia".to_string(),
            status: MaintenanceStatus::Completed,
            cost: 120.0,
        },
        MaintenanceRecord {
            id: "3".to_string(),
            date: "2025-11-28".to_string(),
            component: "Electric Motor".to_string(),
            kind: MaintenanceKind::Scheduled,
            description: "Bearing lubrication and vibration analysis".to_string(),
            technician: "James Wilson".to_string(),
            status: MaintenanceStatus::Completed,
            cost: 380.0,
        },
        MaintenanceRecord {
            id: "4".to_string(),
            date: "2025-11-15".to_string(),
            component: "Cooling Fan".to_string(),
            kind: MaintenanceKind::Preventive,
            description: "Fan blade inspection and motor test".to_string(),
            technician: "Sarah Chen".to_string(),
            status: MaintenanceStatus::Completed,
            cost: 95.0,
        },
        MaintenanceRecord {
            id: "5".to_string(),
            date: "2025-10-10".to_string(),
            component: "Thermal System".to_string(),
            kind: MaintenanceKind::Emergency,
            description: "Coolant leak repair and system flush".to_string(),
            technician: "John Smith".to_string(),
            status: MaintenanceStatus::Completed,
            cost: 780.0,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::telemetry::METRICS_WINDOW_CAPACITY;

    #[test]
    fn test_seed_catalog_shapes() {
        assert_eq!(initial_components().len(), 6);
        assert_eq!(initial_alerts().len(), 3);
        assert_eq!(initial_notifications().len(), 3);
        assert_eq!(initial_metrics().len(), METRICS_WINDOW_CAPACITY);
        assert_eq!(initial_maintenance().len(), 5);
    }

    #[test]
    fn test_component_ids_are_unique() {
        let components = initial_components();
        for (i, a) in components.iter().enumerate() {
            for b in &components[i + 1..] {
                assert_ne!(a.id, b.id);
            }
        }
    }
}
