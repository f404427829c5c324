//! Reliability metrics: MTBF, MTTR and availability
//!
//! All durations are reported in hours. Undefined means are reported as 0 and
//! availability falls back to 100% when nothing was under repair.

use crate::core::MaintenanceRecord;
use chrono::NaiveDate;
use std::collections::BTreeMap;

/// Mean time between failures, averaged across equipment with 2+ failures
pub fn mtbf_hours(records: &[&MaintenanceRecord]) -> f64 {
    let mut failures: BTreeMap<&str, Vec<i64>> = BTreeMap::new();
    for record in records {
        if let Some(failed_at) = record.failed_at {
            failures
                .entry(record.equipment_id.as_str())
                .or_default()
                .push(failed_at.timestamp());
        }
    }

    let per_equipment: Vec<f64> = failures
        .into_values()
        .filter(|times| times.len() >= 2)
        .map(|mut times| {
            times.sort_unstable();
            // Mean of consecutive gaps telescopes to (last - first) / (n - 1)
            let span = (times[times.len() - 1] - times[0]) as f64 / 3600.0;
            span / (times.len() - 1) as f64
        })
        .collect();

    mean(&per_equipment)
}

/// Mean repair duration over records with both repair timestamps
pub fn mttr_hours(records: &[&MaintenanceRecord]) -> f64 {
    let durations: Vec<f64> = records.iter().filter_map(|r| r.repair_hours()).collect();
    mean(&durations)
}

/// Total repair time in hours
pub fn downtime_hours(records: &[&MaintenanceRecord]) -> f64 {
    records.iter().filter_map(|r| r.repair_hours()).sum()
}

/// Length of a calendar month in hours
pub fn scheduled_hours(year: i32, month: u32) -> Option<f64> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let next = if month == 12 {
        NaiveDate::from_ymd_opt(year.checked_add(1)?, 1, 1)?
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)?
    };
    Some((next - first).num_days() as f64 * 24.0)
}

/// Percentage of the month not spent under repair, clamped to 0..=100
pub fn availability_percent(records: &[&MaintenanceRecord], year: i32, month: u32) -> f64 {
    let downtime = downtime_hours(records);
    if downtime <= 0.0 {
        return 100.0;
    }

    match scheduled_hours(year, month) {
        Some(scheduled) if scheduled > 0.0 => {
            ((scheduled - downtime) / scheduled * 100.0).clamp(0.0, 100.0)
        }
        _ => 100.0,
    }
}

fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        0.0
    } else {
        values.iter().sum::<f64>() / values.len() as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{MaintenanceArea, WorkOrderStatus};
    use chrono::{DateTime, TimeZone, Utc};

    fn at(day: u32, hour: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, day, hour, 0, 0).unwrap()
    }

    fn failure(id: &str, equipment: &str, failed_at: DateTime<Utc>) -> MaintenanceRecord {
        MaintenanceRecord::new(id, equipment, MaintenanceArea::Mechanical, 0.0, 2024, 1, WorkOrderStatus::Closed)
            .with_failure(failed_at)
    }

    fn repair(id: &str, start: DateTime<Utc>, end: DateTime<Utc>) -> MaintenanceRecord {
        MaintenanceRecord::new(id, "FRESA", MaintenanceArea::Mechanical, 0.0, 2024, 1, WorkOrderStatus::Closed)
            .with_repair(start, end)
    }

    #[test]
    fn test_mtbf_averages_across_equipment() {
        let records = vec![
            // PRENSA P2: gaps of 24h and 48h -> 36h
            failure("1", "PRENSA P2", at(1, 0)),
            failure("2", "PRENSA P2", at(4, 0)),
            failure("3", "PRENSA P2", at(2, 0)),
            // FRESA: single gap of 12h
            failure("4", "FRESA", at(10, 0)),
            failure("5", "FRESA", at(10, 12)),
            // TORNO CNC: one failure, excluded
            failure("6", "TORNO CNC", at(5, 0)),
        ];
        let refs: Vec<&MaintenanceRecord> = records.iter().collect();
        assert!((mtbf_hours(&refs) - 24.0).abs() < 1e-9);
    }

    #[test]
    fn test_mtbf_without_repeat_failures_is_zero() {
        let records = vec![failure("1", "PRENSA P2", at(1, 0)), failure("2", "FRESA", at(2, 0))];
        let refs: Vec<&MaintenanceRecord> = records.iter().collect();
        assert_eq!(mtbf_hours(&refs), 0.0);
        assert_eq!(mtbf_hours(&[]), 0.0);
    }

    #[test]
    fn test_mttr_ignores_incomplete_repairs() {
        let mut open_repair = repair("3", at(3, 0), at(3, 1));
        open_repair.repair_finished_at = None;
        let records = vec![repair("1", at(1, 8), at(1, 10)), repair("2", at(2, 8), at(2, 14)), open_repair];
        let refs: Vec<&MaintenanceRecord> = records.iter().collect();
        assert!((mttr_hours(&refs) - 4.0).abs() < 1e-9);
        assert!((downtime_hours(&refs) - 8.0).abs() < 1e-9);
    }

    #[test]
    fn test_scheduled_hours_follow_calendar() {
        assert_eq!(scheduled_hours(2024, 1), Some(744.0));
        assert_eq!(scheduled_hours(2024, 2), Some(696.0));
        assert_eq!(scheduled_hours(2023, 2), Some(672.0));
        assert_eq!(scheduled_hours(2024, 12), Some(744.0));
        assert_eq!(scheduled_hours(2024, 13), None);
    }

    #[test]
    fn test_availability() {
        let records = vec![repair("1", at(1, 0), at(1, 12)), repair("2", at(2, 0), at(2, 12))];
        let refs: Vec<&MaintenanceRecord> = records.iter().collect();
        let expected = (744.0 - 24.0) / 744.0 * 100.0;
        assert!((availability_percent(&refs, 2024, 1) - expected).abs() < 1e-9);
    }

    #[test]
    fn test_availability_without_downtime_is_full() {
        assert_eq!(availability_percent(&[], 2024, 1), 100.0);
    }

    #[test]
    fn test_availability_is_clamped() {
        let records = vec![repair("1", at(1, 0), at(1, 0) + chrono::Duration::days(40))];
        let refs: Vec<&MaintenanceRecord> = records.iter().collect();
        assert_eq!(availability_percent(&refs, 2024, 1), 0.0);
    }
}
