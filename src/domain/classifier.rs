// Health classification thresholds
use super::component::HealthStatus;

const MOTOR_WARNING_TEMP_C: f64 = 70.0;
const BATTERY_WARNING_VOLTAGE: f64 = 350.0;

/// Classify a motor temperature reading. Anything above the warning
/// threshold is `Warning`; the engine's current tiering never escalates the
/// motor to `Critical` from a reading, and consumers rely on that.
pub fn classify_motor(temp_c: f64) -> HealthStatus {
    if temp_c > MOTOR_WARNING_TEMP_C {
        HealthStatus::Warning
    } else {
        HealthStatus::Healthy
    }
}

/// Classify a battery voltage reading. Below the warning threshold the
/// battery is `Warning`; at or above it the status is left untouched,
/// since there is no reset-to-healthy path for the battery.
pub fn classify_battery(voltage: f64) -> Option<HealthStatus> {
    if voltage < BATTERY_WARNING_VOLTAGE {
        Some(HealthStatus::Warning)
    } else {
        None
    }
}
