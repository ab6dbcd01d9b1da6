// CSV codec for the metrics-window export
use crate::domain::telemetry::MetricPoint;
use anyhow::{bail, Context};
use chrono::{DateTime, Utc};
use std::fmt::Write;

pub const CSV_HEADER: &str = "Time,Battery %,Motor Temp,Efficiency";

/// Render the window oldest-first, numeric fields as unformatted decimals.
pub fn render_metrics_csv(points: &[MetricPoint]) -> String {
    let mut out = String::from(CSV_HEADER);
    for point in points {
        let _ = write!(
            out,
            "\n{},{},{},{}",
            point.time, point.battery, point.motor, point.efficiency
        );
    }
    out
}

/// Parse an export back into the ordered sequence it was rendered from.
#[allow(dead_code)]
pub fn parse_metrics_csv(csv: &str) -> anyhow::Result<Vec<MetricPoint>> {
    let mut lines = csv.lines();
    match lines.next() {
        Some(header) if header == CSV_HEADER => {}
        other => bail!("unexpected CSV header: {:?}", other),
    }

    let mut points = Vec::new();
    for (row, line) in lines.enumerate() {
        let fields: Vec<&str> = line.split(',').collect();
        if fields.len() != 4 {
            bail!("row {} has {} fields, expected 4", row + 1, fields.len());
        }
        let parse = |field: &str, name: &str| {
            field
                .parse::<f64>()
                .with_context(|| format!("row {}: invalid {} value {:?}", row + 1, name, field))
        };
        points.push(MetricPoint {
            time: fields[0].to_string(),
            battery: parse(fields[1], "battery")?,
            motor: parse(fields[2], "motor")?,
            efficiency: parse(fields[3], "efficiency")?,
        });
    }
    Ok(points)
}

pub fn export_filename(now: DateTime<Utc>) -> String {
    format!("metrics-{}.csv", now.format("%Y-%m-%d"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn window() -> Vec<MetricPoint> {
        vec![
            MetricPoint::new("00:00", 95.0, 42.0, 97.0),
            MetricPoint::new("12:30", 91.5, 72.0, 92.5),
            MetricPoint::new("Now", 94.0, 48.0, 97.0),
        ]
    }

    #[test]
    fn test_render_header_and_rows() {
        let csv = render_metrics_csv(&window());
        let mut lines = csv.lines();
        assert_eq!(lines.next(), Some("Time,Battery %,Motor Temp,Efficiency"));
        assert_eq!(lines.next(), Some("00:00,95,42,97"));
        assert_eq!(lines.next(), Some("12:30,91.5,72,92.5"));
        assert_eq!(lines.next(), Some("Now,94,48,97"));
        assert_eq!(lines.next(), None);
    }

    #[test]
    fn test_round_trip_reproduces_window_exactly() {
        let original = window();
        let parsed = parse_metrics_csv(&render_metrics_csv(&original)).unwrap();
        assert_eq!(parsed, original);
    }

    #[test]
    fn test_empty_window_renders_header_only() {
        let csv = render_metrics_csv(&[]);
        assert_eq!(csv, CSV_HEADER);
        assert!(parse_metrics_csv(&csv).unwrap().is_empty());
    }

    #[test]
    fn test_parse_rejects_wrong_header() {
        assert!(parse_metrics_csv("Time,Battery\n00:00,95").is_err());
    }

    #[test]
    fn test_parse_rejects_malformed_row() {
        let csv = format!("{}\n00:00,95,42", CSV_HEADER);
        assert!(parse_metrics_csv(&csv).is_err());
        let csv = format!("{}\n00:00,ninety,42,97", CSV_HEADER);
        assert!(parse_metrics_csv(&csv).is_err());
    }

    #[test]
    fn test_export_filename_uses_utc_date() {
        let now = DateTime::parse_from_rfc3339("2026-08-04T23:59:00Z")
            .unwrap()
            .with_timezone(&Utc);
        assert_eq!(export_filename(now), "metrics-2026-08-04.csv");
    }
}
