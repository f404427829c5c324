//! Common types used across the dashboard engine

use crate::core::{Error, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Maintenance area a work order is attributed to
///
/// Declaration order is the order areas appear in the cost chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MaintenanceArea {
    #[serde(alias = "MECÂNICA")]
    Mechanical,
    #[serde(alias = "ELÉTRICA")]
    Electrical,
    #[serde(alias = "HIDRÁULICA")]
    Hydraulic,
    #[serde(alias = "ELETRÔNICA")]
    Electronic,
    #[serde(alias = "PNEUMÁTICA")]
    Pneumatic,
    #[serde(alias = "INSTRUMENTAÇÃO")]
    Instrumentation,
    #[serde(alias = "AUTOMAÇÃO")]
    Automation,
}

impl MaintenanceArea {
    /// Every area, in chart order
    pub const ALL: [MaintenanceArea; 7] = [
        MaintenanceArea::Mechanical,
        MaintenanceArea::Electrical,
        MaintenanceArea::Hydraulic,
        MaintenanceArea::Electronic,
        MaintenanceArea::Pneumatic,
        MaintenanceArea::Instrumentation,
        MaintenanceArea::Automation,
    ];

    /// Canonical wire name
    pub fn as_str(&self) -> &'static str {
        match self {
            MaintenanceArea::Mechanical => "MECHANICAL",
            MaintenanceArea::Electrical => "ELECTRICAL",
            MaintenanceArea::Hydraulic => "HYDRAULIC",
            MaintenanceArea::Electronic => "ELECTRONIC",
            MaintenanceArea::Pneumatic => "PNEUMATIC",
            MaintenanceArea::Instrumentation => "INSTRUMENTATION",
            MaintenanceArea::Automation => "AUTOMATION",
        }
    }

    /// Translation key for display labels
    pub fn label_key(&self) -> String {
        format!("area.{}", self.as_str().to_lowercase())
    }
}

impl fmt::Display for MaintenanceArea {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MaintenanceArea {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let area = match s.trim().to_uppercase().as_str() {
            "MECHANICAL" | "MECÂNICA" => MaintenanceArea::Mechanical,
            "ELECTRICAL" | "ELÉTRICA" => MaintenanceArea::Electrical,
            "HYDRAULIC" | "HIDRÁULICA" => MaintenanceArea::Hydraulic,
            "ELECTRONIC" | "ELETRÔNICA" => MaintenanceArea::Electronic,
            "PNEUMATIC" | "PNEUMÁTICA" => MaintenanceArea::Pneumatic,
            "INSTRUMENTATION" | "INSTRUMENTAÇÃO" => MaintenanceArea::Instrumentation,
            "AUTOMATION" | "AUTOMAÇÃO" => MaintenanceArea::Automation,
            _ => return Err(Error::UnknownArea(s.to_string())),
        };
        Ok(area)
    }
}

/// Area selection for the cost chart: a single area or the wildcard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum AreaFilter {
    #[default]
    All,
    Area(MaintenanceArea),
}

impl AreaFilter {
    pub fn matches(&self, area: MaintenanceArea) -> bool {
        match self {
            AreaFilter::All => true,
            AreaFilter::Area(selected) => *selected == area,
        }
    }
}

impl fmt::Display for AreaFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AreaFilter::All => f.write_str("ALL"),
            AreaFilter::Area(area) => write!(f, "{}", area),
        }
    }
}

impl FromStr for AreaFilter {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_uppercase().as_str() {
            "ALL" | "TODAS" => Ok(AreaFilter::All),
            _ => s.parse().map(AreaFilter::Area),
        }
    }
}

impl TryFrom<String> for AreaFilter {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<AreaFilter> for String {
    fn from(filter: AreaFilter) -> Self {
        filter.to_string()
    }
}

/// Point-in-time status of a work order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WorkOrderStatus {
    Open,
    InProgress,
    Critical,
    Closed,
}

impl WorkOrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            WorkOrderStatus::Open => "OPEN",
            WorkOrderStatus::InProgress => "IN_PROGRESS",
            WorkOrderStatus::Critical => "CRITICAL",
            WorkOrderStatus::Closed => "CLOSED",
        }
    }
}

impl FromStr for WorkOrderStatus {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_uppercase().as_str() {
            "OPEN" => Ok(WorkOrderStatus::Open),
            "IN_PROGRESS" => Ok(WorkOrderStatus::InProgress),
            "CRITICAL" => Ok(WorkOrderStatus::Critical),
            "CLOSED" => Ok(WorkOrderStatus::Closed),
            _ => Err(Error::InvalidRecord(format!("unknown status {}", s))),
        }
    }
}

/// A single maintenance work order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MaintenanceRecord {
    pub id: String,
    /// Identifier into the equipment catalog
    pub equipment_id: String,
    pub area: MaintenanceArea,
    /// Non-negative monetary amount
    pub cost: f64,
    pub year: i32,
    /// 1..=12
    pub month: u32,
    pub status: WorkOrderStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub failed_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repair_started_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repair_finished_at: Option<DateTime<Utc>>,
}

impl MaintenanceRecord {
    pub fn new(
        id: &str,
        equipment_id: &str,
        area: MaintenanceArea,
        cost: f64,
        year: i32,
        month: u32,
        status: WorkOrderStatus,
    ) -> Self {
        Self {
            id: id.to_string(),
            equipment_id: equipment_id.to_string(),
            area,
            cost,
            year,
            month,
            status,
            failed_at: None,
            repair_started_at: None,
            repair_finished_at: None,
        }
    }

    pub fn with_failure(mut self, failed_at: DateTime<Utc>) -> Self {
        self.failed_at = Some(failed_at);
        self
    }

    pub fn with_repair(mut self, started_at: DateTime<Utc>, finished_at: DateTime<Utc>) -> Self {
        self.repair_started_at = Some(started_at);
        self.repair_finished_at = Some(finished_at);
        self
    }

    /// Check the record invariants: cost >= 0, month in 1..=12, ids present
    pub fn validate(&self) -> Result<()> {
        if self.id.trim().is_empty() {
            return Err(Error::InvalidRecord("missing id".to_string()));
        }
        if self.equipment_id.trim().is_empty() {
            return Err(Error::InvalidRecord(format!("{}: missing equipment id", self.id)));
        }
        if !self.cost.is_finite() || self.cost < 0.0 {
            return Err(Error::InvalidRecord(format!("{}: invalid cost {}", self.id, self.cost)));
        }
        if !(1..=12).contains(&self.month) {
            return Err(Error::InvalidRecord(format!("{}: invalid month {}", self.id, self.month)));
        }
        Ok(())
    }

    pub fn in_period(&self, year: i32, month: u32) -> bool {
        self.year == year && self.month == month
    }

    /// Repair duration in hours, when both repair timestamps are present and ordered
    pub fn repair_hours(&self) -> Option<f64> {
        let start = self.repair_started_at?;
        let end = self.repair_finished_at?;
        if end < start {
            return None;
        }
        Some((end - start).num_seconds() as f64 / 3600.0)
    }
}

/// Equipment catalog entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Equipment {
    pub id: String,
    pub name: String,
}

impl Equipment {
    pub fn new(id: &str, name: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
        }
    }

    /// The "none selected" sentinel, always listed first
    pub fn none(label: &str) -> Self {
        Self::new("", label)
    }

    pub fn is_none(&self) -> bool {
        self.id.is_empty()
    }
}

/// Plant KPIs shown on the metric cards
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Kpis {
    pub critical: usize,
    pub open: usize,
    pub in_progress: usize,
    /// Mean time between failures, in hours (0 when undefined)
    pub mtbf: f64,
    /// Mean time to repair, in hours (0 when undefined)
    pub mttr: f64,
    /// Availability percentage (0-100)
    pub availability: f64,
}

impl Default for Kpis {
    fn default() -> Self {
        Self {
            critical: 0,
            open: 0,
            in_progress: 0,
            mtbf: 0.0,
            mttr: 0.0,
            availability: 100.0,
        }
    }
}

/// Aggregate output handed to the presentation collaborators
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardData {
    pub current_total: f64,
    /// Period-level cost per area; areas without records are absent
    pub totals_by_area: BTreeMap<MaintenanceArea, f64>,
    pub graph_total: f64,
    pub kpis: Kpis,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_area_parsing_accepts_portuguese_labels() {
        assert_eq!("MECÂNICA".parse::<MaintenanceArea>().unwrap(), MaintenanceArea::Mechanical);
        assert_eq!("automação".parse::<MaintenanceArea>().unwrap(), MaintenanceArea::Automation);
        assert_eq!("hydraulic".parse::<MaintenanceArea>().unwrap(), MaintenanceArea::Hydraulic);
        assert!(matches!("WELDING".parse::<MaintenanceArea>(), Err(Error::UnknownArea(_))));
    }

    #[test]
    fn test_area_filter_wildcards() {
        assert_eq!("ALL".parse::<AreaFilter>().unwrap(), AreaFilter::All);
        assert_eq!("Todas".parse::<AreaFilter>().unwrap(), AreaFilter::All);
        assert_eq!(
            "ELECTRICAL".parse::<AreaFilter>().unwrap(),
            AreaFilter::Area(MaintenanceArea::Electrical)
        );
        assert!("NOWHERE".parse::<AreaFilter>().is_err());
    }

    #[test]
    fn test_area_filter_serde() {
        let json = serde_json::to_string(&AreaFilter::Area(MaintenanceArea::Pneumatic)).unwrap();
        assert_eq!(json, "\"PNEUMATIC\"");
        let parsed: AreaFilter = serde_json::from_str("\"ALL\"").unwrap();
        assert_eq!(parsed, AreaFilter::All);
        assert!(serde_json::from_str::<AreaFilter>("\"SPACE\"").is_err());
    }

    #[test]
    fn test_record_deserializes_from_camel_case() {
        let json = r#"{
            "id": "OS-1",
            "equipmentId": "PRENSA P2",
            "area": "ELÉTRICA",
            "cost": 120.5,
            "year": 2024,
            "month": 3,
            "status": "IN_PROGRESS",
            "repairStartedAt": "2024-03-02T08:00:00Z",
            "repairFinishedAt": "2024-03-02T12:30:00Z"
        }"#;
        let record: MaintenanceRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.area, MaintenanceArea::Electrical);
        assert_eq!(record.status, WorkOrderStatus::InProgress);
        assert!(record.failed_at.is_none());
        assert!((record.repair_hours().unwrap() - 4.5).abs() < 1e-9);
    }

    #[test]
    fn test_record_validation() {
        let ok = MaintenanceRecord::new("OS-1", "FRESA", MaintenanceArea::Mechanical, 10.0, 2024, 1, WorkOrderStatus::Open);
        assert!(ok.validate().is_ok());

        let mut negative = ok.clone();
        negative.cost = -1.0;
        assert!(matches!(negative.validate(), Err(Error::InvalidRecord(_))));

        let mut bad_month = ok.clone();
        bad_month.month = 13;
        assert!(bad_month.validate().is_err());

        let mut no_equipment = ok;
        no_equipment.equipment_id = " ".to_string();
        assert!(no_equipment.validate().is_err());
    }

    #[test]
    fn test_reversed_repair_interval_is_ignored() {
        let start = Utc.with_ymd_and_hms(2024, 1, 5, 10, 0, 0).unwrap();
        let end = Utc.with_ymd_and_hms(2024, 1, 5, 8, 0, 0).unwrap();
        let record = MaintenanceRecord::new("OS-2", "FRESA", MaintenanceArea::Mechanical, 0.0, 2024, 1, WorkOrderStatus::Closed)
            .with_repair(start, end);
        assert!(record.repair_hours().is_none());
    }

    #[test]
    fn test_empty_dashboard_reports_full_availability() {
        let data = DashboardData::default();
        assert_eq!(data.current_total, 0.0);
        assert!(data.totals_by_area.is_empty());
        assert_eq!(data.kpis.availability, 100.0);
    }
}
