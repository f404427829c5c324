//! Dashboard state
//!
//! Owns the record store, equipment catalog and filter selection, and keeps
//! the latest aggregate in sync: every accepted filter change recomputes it
//! before returning.

use crate::catalog::EquipmentCatalog;
use crate::core::{Config, DashboardData, Equipment, Result};
use crate::engine::{AggregationEngine, AggregationOptions};
use crate::filter::{FilterEvent, FilterState};
use crate::store::{MemoryStore, RecordStore};

pub struct Dashboard {
    store: Box<dyn RecordStore>,
    catalog: EquipmentCatalog,
    /// Catalog entries from configuration; when empty the catalog follows the store
    configured_equipment: Vec<Equipment>,
    none_label: String,
    filter: FilterState,
    engine: AggregationEngine,
    data: DashboardData,
}

impl Dashboard {
    pub fn new(store: Box<dyn RecordStore>, filter: FilterState, options: AggregationOptions) -> Self {
        let mut dashboard = Self {
            store,
            catalog: EquipmentCatalog::new(Vec::new(), "None"),
            configured_equipment: Vec::new(),
            none_label: "None".to_string(),
            filter,
            engine: AggregationEngine::new(options),
            data: DashboardData::default(),
        };
        dashboard.rebuild_catalog();
        dashboard.recompute();
        dashboard
    }

    /// Dashboard for the current month with nothing loaded yet
    pub fn unloaded() -> Self {
        Self::new(Box::new(MemoryStore::unloaded()), FilterState::new(), AggregationOptions::default())
    }

    /// Apply catalog and analytics settings
    pub fn with_config(mut self, config: &Config, none_label: &str) -> Self {
        self.configured_equipment = config.catalog.equipment.clone();
        self.none_label = none_label.to_string();
        self.engine.update_options(AggregationOptions::from(&config.analytics));
        self.rebuild_catalog();
        self.recompute();
        self
    }

    /// Replace the record store (e.g. once an async load completes)
    pub fn load_records(&mut self, store: Box<dyn RecordStore>) -> &DashboardData {
        log::info!("Record store replaced ({} records)", store.records().len());
        self.store = store;
        self.rebuild_catalog();
        self.recompute()
    }

    /// Apply a filter-change event and recompute
    ///
    /// A rejected event leaves both the filter and the aggregate untouched.
    pub fn apply(&mut self, event: &FilterEvent) -> Result<&DashboardData> {
        if let Err(e) = self.filter.apply(event) {
            log::warn!("Rejected filter change {:?}: {}", event, e);
            return Err(e);
        }
        Ok(self.recompute())
    }

    pub fn set_equipment(&mut self, slot: u8, id: &str) -> Result<&DashboardData> {
        self.filter.set_equipment(slot, id)?;
        Ok(self.recompute())
    }

    pub fn set_period(&mut self, year: i32, month: u32) -> Result<&DashboardData> {
        self.filter.set_period(year, month)?;
        Ok(self.recompute())
    }

    pub fn set_graph_area(&mut self, area: &str) -> Result<&DashboardData> {
        self.filter.set_graph_area_str(area)?;
        Ok(self.recompute())
    }

    /// Latest aggregate
    pub fn data(&self) -> &DashboardData {
        &self.data
    }

    pub fn filter(&self) -> &FilterState {
        &self.filter
    }

    pub fn is_loaded(&self) -> bool {
        self.store.is_loaded()
    }

    /// Equipment choices for a filter slot
    pub fn available_equipment(&self, slot: u8) -> Vec<Equipment> {
        self.catalog.list_available(slot)
    }

    fn rebuild_catalog(&mut self) {
        self.catalog = if self.configured_equipment.is_empty() {
            EquipmentCatalog::from_store(self.store.as_ref(), &self.none_label)
        } else {
            EquipmentCatalog::new(self.configured_equipment.clone(), &self.none_label)
        };
    }

    fn recompute(&mut self) -> &DashboardData {
        self.data = self.engine.aggregate(self.store.as_ref(), &self.filter);
        &self.data
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Error, MaintenanceArea, MaintenanceRecord, WorkOrderStatus};

    fn store() -> Box<dyn RecordStore> {
        Box::new(MemoryStore::from_records(vec![
            MaintenanceRecord::new("OS-1", "PRENSA P2", MaintenanceArea::Mechanical, 100.0, 2024, 1, WorkOrderStatus::Open),
            MaintenanceRecord::new("OS-2", "FRESA", MaintenanceArea::Electrical, 200.0, 2024, 1, WorkOrderStatus::Critical),
        ]))
    }

    fn dashboard() -> Dashboard {
        Dashboard::new(store(), FilterState::for_period(2024, 1).unwrap(), AggregationOptions::default())
    }

    #[test]
    fn test_initial_snapshot_is_computed() {
        let dashboard = dashboard();
        assert_eq!(dashboard.data().current_total, 300.0);
        assert!(dashboard.is_loaded());
    }

    #[test]
    fn test_events_recompute() {
        let mut dashboard = dashboard();
        let total = dashboard
            .apply(&FilterEvent::EquipmentSlot { slot: 1, value: "FRESA".into() })
            .unwrap()
            .current_total;
        assert_eq!(total, 200.0);

        let graph = dashboard.set_graph_area("MECHANICAL").unwrap().graph_total;
        assert_eq!(graph, 100.0);

        let total = dashboard.set_period(2024, 2).unwrap().current_total;
        assert_eq!(total, 0.0);
    }

    #[test]
    fn test_rejected_event_keeps_previous_snapshot() {
        let mut dashboard = dashboard();
        let before = dashboard.data().clone();
        let err = dashboard.apply(&FilterEvent::Month { month: 13 }).unwrap_err();
        assert!(matches!(err, Error::InvalidPeriod { .. }));
        assert_eq!(dashboard.data(), &before);
        assert_eq!(dashboard.filter().month(), 1);
    }

    #[test]
    fn test_unloaded_then_loaded() {
        let mut dashboard =
            Dashboard::new(Box::new(MemoryStore::unloaded()), FilterState::for_period(2024, 1).unwrap(), AggregationOptions::default());
        assert!(!dashboard.is_loaded());
        assert_eq!(dashboard.data(), &DashboardData::default());
        assert_eq!(dashboard.available_equipment(1).len(), 1);

        let total = dashboard.load_records(store()).current_total;
        assert_eq!(total, 300.0);
        assert_eq!(dashboard.available_equipment(2).len(), 3);
    }

    #[test]
    fn test_configured_catalog_wins_over_store() {
        let mut config = Config::default();
        config.catalog.equipment = vec![Equipment::new("TORNO CNC", "Torno CNC")];
        let dashboard = dashboard().with_config(&config, "Nenhum");

        let list = dashboard.available_equipment(1);
        assert_eq!(list.len(), 2);
        assert_eq!(list[0].name, "Nenhum");
        assert_eq!(list[1].id, "TORNO CNC");
    }
}
