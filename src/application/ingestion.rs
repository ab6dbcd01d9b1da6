// Ingestion pipeline - Validation and derived-metric computation
use crate::domain::telemetry::{MetricPoint, ReadingDraft, TelemetryReading};
use chrono::{DateTime, Utc};
use serde_json::Value;
use thiserror::Error;

/// Wire-format names of the required fields, in report order.
const FIELD_VEHICLE_ID: &str = "vehicleId";
const FIELD_MILEAGE: &str = "mileage";
const FIELD_BATTERY_VOLTAGE: &str = "batteryVoltage";
const FIELD_MOTOR_TEMP: &str = "motorTemp";
const FIELD_AMBIENT_TEMP: &str = "ambientTemp";

/// A rejected reading. Carries every offending field, not just the first,
/// so the caller can report all problems at once.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("invalid telemetry reading, offending fields: {}", .fields.join(", "))]
pub struct ValidationError {
    pub fields: Vec<String>,
}

/// Validate a raw draft into an accepted reading. Pure: runs entirely
/// before any engine state is touched, so a rejection leaves nothing to
/// roll back.
pub fn validate(
    draft: &ReadingDraft,
    timestamp: DateTime<Utc>,
) -> Result<TelemetryReading, ValidationError> {
    let mut fields = Vec::new();

    let vehicle_id = draft
        .vehicle_id
        .as_deref()
        .map(str::trim)
        .filter(|id| !id.is_empty());
    if vehicle_id.is_none() {
        fields.push(FIELD_VEHICLE_ID.to_string());
    }

    let mileage = numeric_value(draft.mileage.as_ref());
    if mileage.is_none() {
        fields.push(FIELD_MILEAGE.to_string());
    }
    let battery_voltage = numeric_value(draft.battery_voltage.as_ref());
    if battery_voltage.is_none() {
        fields.push(FIELD_BATTERY_VOLTAGE.to_string());
    }
    let motor_temp = numeric_value(draft.motor_temp.as_ref());
    if motor_temp.is_none() {
        fields.push(FIELD_MOTOR_TEMP.to_string());
    }
    let ambient_temp = numeric_value(draft.ambient_temp.as_ref());
    if ambient_temp.is_none() {
        fields.push(FIELD_AMBIENT_TEMP.to_string());
    }

    if !fields.is_empty() {
        return Err(ValidationError { fields });
    }

    Ok(TelemetryReading {
        vehicle_id: vehicle_id.unwrap_or_default().to_string(),
        mileage: mileage.unwrap_or_default(),
        battery_voltage: battery_voltage.unwrap_or_default(),
        motor_temp: motor_temp.unwrap_or_default(),
        ambient_temp: ambient_temp.unwrap_or_default(),
        timestamp,
    })
}

/// Extract a finite number from a loose JSON value. Numbers pass through;
/// strings must parse; anything else (or NaN/infinity) is rejected.
fn numeric_value(value: Option<&Value>) -> Option<f64> {
    let parsed = match value? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }?;
    parsed.is_finite().then_some(parsed)
}

/// Compute the derived performance sample for one accepted reading. The
/// time label is the ingestion-time wall clock, formatted by the caller.
pub fn derive_metric_point(reading: &TelemetryReading, time_label: String) -> MetricPoint {
    MetricPoint {
        time: time_label,
        battery: (reading.battery_voltage / 4.0).clamp(0.0, 100.0),
        motor: reading.motor_temp,
        efficiency: (100.0 - (reading.motor_temp - 50.0).abs() / 2.0).max(85.0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn draft(vehicle_id: &str, mileage: Value, voltage: Value, motor: Value, ambient: Value) -> ReadingDraft {
        ReadingDraft {
            vehicle_id: Some(vehicle_id.to_string()),
            mileage: Some(mileage),
            battery_voltage: Some(voltage),
            motor_temp: Some(motor),
            ambient_temp: Some(ambient),
        }
    }

    #[test]
    fn test_empty_draft_reports_all_five_fields() {
        let err = validate(&ReadingDraft::default(), Utc::now()).unwrap_err();
        assert_eq!(
            err.fields,
            vec![
                "vehicleId",
                "mileage",
                "batteryVoltage",
                "motorTemp",
                "ambientTemp"
            ]
        );
    }

    #[test]
    fn test_valid_draft_with_numeric_strings() {
        let draft = draft("NEV-2024-001", json!("45000"), json!("400"), json!("65"), json!("25"));
        let reading = validate(&draft, Utc::now()).unwrap();
        assert_eq!(reading.vehicle_id, "NEV-2024-001");
        assert_eq!(reading.mileage, 45000.0);
        assert_eq!(reading.battery_voltage, 400.0);
    }

    #[test]
    fn test_valid_draft_with_json_numbers() {
        let draft = draft("NEV-2024-001", json!(45000), json!(400.5), json!(65), json!(25));
        let reading = validate(&draft, Utc::now()).unwrap();
        assert_eq!(reading.battery_voltage, 400.5);
    }

    #[test]
    fn test_non_numeric_and_blank_fields_collected_together() {
        let mut draft = draft("NEV-2024-001", json!("abc"), json!(""), json!(65), json!(25));
        draft.vehicle_id = Some("   ".to_string());
        let err = validate(&draft, Utc::now()).unwrap_err();
        assert_eq!(err.fields, vec!["vehicleId", "mileage", "batteryVoltage"]);
    }

    #[test]
    fn test_non_finite_values_rejected() {
        let draft = draft("NEV-2024-001", json!("NaN"), json!("inf"), json!(65), json!(25));
        let err = validate(&draft, Utc::now()).unwrap_err();
        assert_eq!(err.fields, vec!["mileage", "batteryVoltage"]);
    }

    #[test]
    fn test_derived_point_formulas() {
        let reading = validate(
            &draft("NEV-2024-001", json!(45000), json!(400), json!(65), json!(25)),
            Utc::now(),
        )
        .unwrap();
        let point = derive_metric_point(&reading, "12:30".to_string());
        assert_eq!(point.time, "12:30");
        assert_eq!(point.battery, 100.0);
        assert_eq!(point.motor, 65.0);
        assert_eq!(point.efficiency, 92.5);
    }

    #[test]
    fn test_battery_percentage_clamped() {
        let reading = validate(
            &draft("NEV-2024-001", json!(0), json!(900), json!(50), json!(25)),
            Utc::now(),
        )
        .unwrap();
        assert_eq!(derive_metric_point(&reading, "00:00".to_string()).battery, 100.0);

        let reading = validate(
            &draft("NEV-2024-001", json!(0), json!(-10), json!(50), json!(25)),
            Utc::now(),
        )
        .unwrap();
        assert_eq!(derive_metric_point(&reading, "00:00".to_string()).battery, 0.0);
    }

    #[test]
    fn test_efficiency_floor_at_85() {
        let reading = validate(
            &draft("NEV-2024-001", json!(0), json!(400), json!(200), json!(25)),
            Utc::now(),
        )
        .unwrap();
        assert_eq!(derive_metric_point(&reading, "00:00".to_string()).efficiency, 85.0);
    }
}
