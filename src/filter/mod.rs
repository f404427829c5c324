//! Filter state manager
//!
//! Holds the user's current selection (period, three equipment slots and the
//! chart area). This is the only mutable state of the dashboard core; every
//! mutation is validated and a rejected change leaves the state untouched.

use crate::catalog::EQUIPMENT_SLOTS;
use crate::core::{AreaFilter, Error, Result};
use chrono::{Datelike, Local};
use serde::{Deserialize, Serialize};

/// Filter-change event emitted by the UI
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FilterEvent {
    EquipmentSlot {
        #[serde(rename = "equipmentSlot")]
        slot: u8,
        value: String,
    },
    Period {
        year: i32,
        month: u32,
    },
    Year {
        year: i32,
    },
    Month {
        month: u32,
    },
    GraphArea {
        #[serde(rename = "graphArea")]
        area: String,
    },
}

/// Current dashboard filter selection
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterState {
    year: i32,
    month: u32,
    /// Slot 1..=3 values; empty string means nothing selected
    equipment: [String; EQUIPMENT_SLOTS as usize],
    graph_area: AreaFilter,
}

impl FilterState {
    /// Current month, no equipment, all areas
    pub fn new() -> Self {
        let today = Local::now();
        Self::blank(today.year(), today.month())
    }

    /// Start from an explicit period
    pub fn for_period(year: i32, month: u32) -> Result<Self> {
        validate_month(year, month)?;
        Ok(Self::blank(year, month))
    }

    fn blank(year: i32, month: u32) -> Self {
        Self {
            year,
            month,
            equipment: Default::default(),
            graph_area: AreaFilter::All,
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn graph_area(&self) -> AreaFilter {
        self.graph_area
    }

    /// Raw slot values, including empty ones
    pub fn equipment_slots(&self) -> &[String] {
        &self.equipment
    }

    /// Replace a slot's value; an empty (or blank) id clears the slot
    ///
    /// The same id may sit in several slots; aggregation treats the selection
    /// as a set.
    pub fn set_equipment(&mut self, slot: u8, id: &str) -> Result<()> {
        if !(1..=EQUIPMENT_SLOTS).contains(&slot) {
            return Err(Error::InvalidSlot(slot));
        }
        self.equipment[usize::from(slot - 1)] = id.trim().to_string();
        log::debug!("Equipment slot {} set to {:?}", slot, id.trim());
        Ok(())
    }

    /// Replace the reporting period
    pub fn set_period(&mut self, year: i32, month: u32) -> Result<()> {
        validate_month(year, month)?;
        self.year = year;
        self.month = month;
        log::debug!("Period set to {}-{:02}", year, month);
        Ok(())
    }

    pub fn set_year(&mut self, year: i32) {
        self.year = year;
        log::debug!("Year set to {}", year);
    }

    pub fn set_month(&mut self, month: u32) -> Result<()> {
        self.set_period(self.year, month)
    }

    pub fn set_graph_area(&mut self, area: AreaFilter) {
        self.graph_area = area;
        log::debug!("Graph area set to {}", area);
    }

    /// Parse and set the graph area; unknown names are rejected
    pub fn set_graph_area_str(&mut self, area: &str) -> Result<()> {
        let area: AreaFilter = area.parse()?;
        self.set_graph_area(area);
        Ok(())
    }

    /// Non-empty slot values in slot order
    pub fn selected_equipments(&self) -> Vec<&str> {
        self.equipment
            .iter()
            .map(String::as_str)
            .filter(|id| !id.is_empty())
            .collect()
    }

    /// Apply a UI event through the validated setters
    pub fn apply(&mut self, event: &FilterEvent) -> Result<()> {
        match event {
            FilterEvent::EquipmentSlot { slot, value } => self.set_equipment(*slot, value),
            FilterEvent::Period { year, month } => self.set_period(*year, *month),
            FilterEvent::Year { year } => {
                self.set_year(*year);
                Ok(())
            }
            FilterEvent::Month { month } => self.set_month(*month),
            FilterEvent::GraphArea { area } => self.set_graph_area_str(area),
        }
    }
}

impl Default for FilterState {
    fn default() -> Self {
        Self::new()
    }
}

fn validate_month(year: i32, month: u32) -> Result<()> {
    if (1..=12).contains(&month) {
        Ok(())
    } else {
        Err(Error::InvalidPeriod { year, month })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::MaintenanceArea;

    #[test]
    fn test_defaults_to_current_month_and_wildcard() {
        let state = FilterState::new();
        let today = Local::now();
        assert_eq!(state.year(), today.year());
        assert_eq!(state.month(), today.month());
        assert!(state.selected_equipments().is_empty());
        assert_eq!(state.graph_area(), AreaFilter::All);
    }

    #[test]
    fn test_set_and_clear_equipment_slot() {
        let mut state = FilterState::for_period(2024, 1).unwrap();
        state.set_equipment(1, "PRENSA P2").unwrap();
        assert_eq!(state.selected_equipments(), vec!["PRENSA P2"]);

        state.set_equipment(1, "").unwrap();
        assert!(state.selected_equipments().is_empty());
    }

    #[test]
    fn test_selection_preserves_slot_order_and_skips_empty() {
        let mut state = FilterState::for_period(2024, 1).unwrap();
        state.set_equipment(3, "FRESA").unwrap();
        state.set_equipment(1, "TORNO CNC").unwrap();
        state.set_equipment(2, "   ").unwrap();
        assert_eq!(state.selected_equipments(), vec!["TORNO CNC", "FRESA"]);
        assert_eq!(state.equipment_slots()[1], "");
    }

    #[test]
    fn test_duplicate_slots_are_accepted() {
        let mut state = FilterState::for_period(2024, 1).unwrap();
        state.set_equipment(1, "FRESA").unwrap();
        state.set_equipment(2, "FRESA").unwrap();
        assert_eq!(state.selected_equipments(), vec!["FRESA", "FRESA"]);
    }

    #[test]
    fn test_invalid_slot_is_rejected() {
        let mut state = FilterState::for_period(2024, 1).unwrap();
        assert!(matches!(state.set_equipment(0, "FRESA"), Err(Error::InvalidSlot(0))));
        assert!(matches!(state.set_equipment(4, "FRESA"), Err(Error::InvalidSlot(4))));
        assert!(state.selected_equipments().is_empty());
    }

    #[test]
    fn test_invalid_period_leaves_state_unchanged() {
        let mut state = FilterState::for_period(2024, 5).unwrap();
        let before = state.clone();

        let err = state.set_period(2024, 13).unwrap_err();
        assert!(matches!(err, Error::InvalidPeriod { year: 2024, month: 13 }));
        assert_eq!(state, before);

        assert!(state.set_month(0).is_err());
        assert_eq!(state, before);
        assert!(FilterState::for_period(2024, 0).is_err());
    }

    #[test]
    fn test_unknown_graph_area_is_rejected() {
        let mut state = FilterState::for_period(2024, 1).unwrap();
        state.set_graph_area_str("MECÂNICA").unwrap();
        assert_eq!(state.graph_area(), AreaFilter::Area(MaintenanceArea::Mechanical));

        assert!(matches!(state.set_graph_area_str("WELDING"), Err(Error::UnknownArea(_))));
        assert_eq!(state.graph_area(), AreaFilter::Area(MaintenanceArea::Mechanical));

        state.set_graph_area_str("ALL").unwrap();
        assert_eq!(state.graph_area(), AreaFilter::All);
    }

    #[test]
    fn test_events_parse_from_ui_json() {
        let events: Vec<FilterEvent> = serde_json::from_str(
            r#"[
                {"equipmentSlot": 2, "value": "FRESA"},
                {"year": 2023},
                {"month": 7},
                {"year": 2022, "month": 3},
                {"graphArea": "ELECTRICAL"}
            ]"#,
        )
        .unwrap();

        assert_eq!(events[0], FilterEvent::EquipmentSlot { slot: 2, value: "FRESA".to_string() });
        assert_eq!(events[1], FilterEvent::Year { year: 2023 });
        assert_eq!(events[2], FilterEvent::Month { month: 7 });
        assert_eq!(events[3], FilterEvent::Period { year: 2022, month: 3 });
        assert_eq!(events[4], FilterEvent::GraphArea { area: "ELECTRICAL".to_string() });
    }

    #[test]
    fn test_apply_events() {
        let mut state = FilterState::for_period(2024, 1).unwrap();
        state.apply(&FilterEvent::EquipmentSlot { slot: 3, value: "FRESA".into() }).unwrap();
        state.apply(&FilterEvent::Year { year: 2023 }).unwrap();
        state.apply(&FilterEvent::Month { month: 11 }).unwrap();
        state.apply(&FilterEvent::GraphArea { area: "hydraulic".into() }).unwrap();

        assert_eq!((state.year(), state.month()), (2023, 11));
        assert_eq!(state.selected_equipments(), vec!["FRESA"]);
        assert_eq!(state.graph_area(), AreaFilter::Area(MaintenanceArea::Hydraulic));

        let before = state.clone();
        assert!(state.apply(&FilterEvent::Month { month: 14 }).is_err());
        assert!(state.apply(&FilterEvent::GraphArea { area: "nope".into() }).is_err());
        assert_eq!(state, before);
    }

    #[test]
    fn test_state_serializes_for_the_front_end() {
        let mut state = FilterState::for_period(2024, 3).unwrap();
        state.set_equipment(2, "FRESA").unwrap();

        let json = serde_json::to_value(&state).unwrap();
        assert_eq!(json["year"], 2024);
        assert_eq!(json["month"], 3);
        assert_eq!(json["equipment"], serde_json::json!(["", "FRESA", ""]));
        assert_eq!(json["graphArea"], "ALL");
    }
}
