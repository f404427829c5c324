//! Equipment catalog
//!
//! Read-only list of the equipment that can be picked in the three filter
//! slots. Every listing starts with the "none selected" sentinel.

use crate::core::Equipment;
use crate::store::RecordStore;

/// Number of equipment filter slots
pub const EQUIPMENT_SLOTS: u8 = 3;

/// Read-only equipment lookup
#[derive(Debug, Clone)]
pub struct EquipmentCatalog {
    none_label: String,
    equipment: Vec<Equipment>,
}

impl EquipmentCatalog {
    /// Build a catalog from an explicit list; blank and repeated ids are dropped
    pub fn new(equipment: Vec<Equipment>, none_label: &str) -> Self {
        let mut unique: Vec<Equipment> = Vec::with_capacity(equipment.len());
        for item in equipment {
            if item.is_none() || unique.iter().any(|e| e.id == item.id) {
                continue;
            }
            unique.push(item);
        }

        Self {
            none_label: none_label.to_string(),
            equipment: unique,
        }
    }

    /// Derive the catalog from the equipment ids present in a store
    pub fn from_store(store: &dyn RecordStore, none_label: &str) -> Self {
        let equipment = store
            .equipment_ids()
            .into_iter()
            .map(|id| Equipment::new(&id, &id))
            .collect();
        Self::new(equipment, none_label)
    }

    /// Equipment selectable in the given slot, sentinel first
    ///
    /// All slots currently share the same list.
    pub fn list_available(&self, _slot: u8) -> Vec<Equipment> {
        let mut list = Vec::with_capacity(self.equipment.len() + 1);
        list.push(Equipment::none(&self.none_label));
        list.extend(self.equipment.iter().cloned());
        list
    }

    pub fn len(&self) -> usize {
        self.equipment.len()
    }

    pub fn is_empty(&self) -> bool {
        self.equipment.is_empty()
    }
}

impl Default for EquipmentCatalog {
    /// The press shop line-up the dashboard ships with
    fn default() -> Self {
        Self::new(
            vec![
                Equipment::new("PRENSA P2", "PRENSA P2"),
                Equipment::new("PRENSA P3", "PRENSA P3"),
                Equipment::new("TORNO CNC", "TORNO CNC"),
                Equipment::new("FRESA", "FRESA"),
            ],
            "None",
        )
    }
}
