//! Record store for maintenance work orders
//!
//! The store is populated once and read-only afterwards. A store that has not
//! been loaded yet behaves as an empty record set so the dashboard can render
//! zeros while an external collaborator fetches data.

use crate::core::{Error, MaintenanceRecord, Result};
use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

/// Read-only access to the work orders of a reporting period
pub trait RecordStore {
    /// All records; empty while unloaded
    fn records(&self) -> &[MaintenanceRecord];

    /// Whether data has been loaded
    fn is_loaded(&self) -> bool;

    /// Distinct equipment ids present in the store, sorted
    fn equipment_ids(&self) -> Vec<String> {
        self.records()
            .iter()
            .map(|r| r.equipment_id.clone())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }
}

/// In-memory record store
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    records: Option<Vec<MaintenanceRecord>>,
}

impl MemoryStore {
    /// A store whose data has not arrived yet
    pub fn unloaded() -> Self {
        Self { records: None }
    }

    /// Build a store from records, dropping those that fail validation
    pub fn from_records(records: Vec<MaintenanceRecord>) -> Self {
        let total = records.len();
        let valid: Vec<MaintenanceRecord> = records
            .into_iter()
            .filter(|record| match record.validate() {
                Ok(()) => true,
                Err(e) => {
                    log::warn!("Skipping work order: {}", e);
                    false
                }
            })
            .collect();

        log::info!("Loaded {} of {} work orders", valid.len(), total);

        Self {
            records: Some(valid),
        }
    }

    /// Parse a JSON array of work orders; rows that do not decode are skipped
    pub fn from_json(content: &str) -> Result<Self> {
        let rows: Vec<serde_json::Value> = serde_json::from_str(content)
            .map_err(|e| Error::Serialization(format!("Failed to parse work orders: {}", e)))?;

        let records = rows
            .into_iter()
            .enumerate()
            .filter_map(|(index, row)| match serde_json::from_value::<MaintenanceRecord>(row) {
                Ok(record) => Some(record),
                Err(e) => {
                    log::warn!("Skipping work order at index {}: {}", index, e);
                    None
                }
            })
            .collect();

        Ok(Self::from_records(records))
    }

    /// Load a JSON file of work orders
    pub fn load_json(path: &Path) -> Result<Self> {
        log::info!("Loading work orders from {}", path.display());
        let content = fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    pub fn len(&self) -> usize {
        self.records().len()
    }

    pub fn is_empty(&self) -> bool {
        self.records().is_empty()
    }
}

impl RecordStore for MemoryStore {
    fn records(&self) -> &[MaintenanceRecord] {
        self.records.as_deref().unwrap_or(&[])
    }

    fn is_loaded(&self) -> bool {
        self.records.is_some()
    }
}
