//! Aggregation engine for maintenance costs and KPIs
//!
//! Maps the record store and the current filter to the dashboard figures:
//! - total cost for the period, narrowed by the selected equipment
//! - per-area cost for the period (chart data, never equipment-narrowed)
//! - graph total for the selected chart area
//! - work order counts and reliability metrics
//!
//! Aggregation is a pure function of its inputs and is recomputed on every
//! filter change.

pub mod reliability;

use crate::core::{
    AnalyticsConfig, AreaFilter, DashboardData, Kpis, MaintenanceArea, MaintenanceRecord, WorkOrderStatus,
};
use crate::filter::FilterState;
use crate::store::RecordStore;
use std::collections::{BTreeMap, HashSet};

/// Tuning knobs for aggregation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AggregationOptions {
    /// Scope KPIs to the selected equipment instead of the whole plant
    pub narrow_kpis_by_equipment: bool,
}

impl From<&AnalyticsConfig> for AggregationOptions {
    fn from(config: &AnalyticsConfig) -> Self {
        Self {
            narrow_kpis_by_equipment: config.narrow_kpis_by_equipment,
        }
    }
}

/// Aggregation engine that computes dashboard figures
pub struct AggregationEngine {
    options: AggregationOptions,
}

impl AggregationEngine {
    pub fn new(options: AggregationOptions) -> Self {
        Self { options }
    }

    pub fn update_options(&mut self, options: AggregationOptions) {
        self.options = options;
    }

    pub fn options(&self) -> AggregationOptions {
        self.options
    }

    /// Compute dashboard figures for a store; an unloaded store gives zeros
    pub fn aggregate(&self, store: &dyn RecordStore, filter: &FilterState) -> DashboardData {
        aggregate(store.records(), filter, &self.options)
    }
}

impl Default for AggregationEngine {
    fn default() -> Self {
        Self::new(AggregationOptions::default())
    }
}

/// Compute dashboard figures for the given records and filter
pub fn aggregate(records: &[MaintenanceRecord], filter: &FilterState, options: &AggregationOptions) -> DashboardData {
    let (year, month) = (filter.year(), filter.month());

    let period: Vec<&MaintenanceRecord> = records.iter().filter(|r| r.in_period(year, month)).collect();
    let narrowed = narrow_by_equipment(&period, &filter.selected_equipments());

    let current_total = total_cost(&narrowed);
    let totals_by_area = totals_by_area(&period);
    let graph_total = graph_total(&totals_by_area, filter.graph_area());

    let kpi_scope = if options.narrow_kpis_by_equipment { &narrowed } else { &period };
    let kpis = Kpis {
        critical: count_status(kpi_scope, WorkOrderStatus::Critical),
        open: count_status(kpi_scope, WorkOrderStatus::Open),
        in_progress: count_status(kpi_scope, WorkOrderStatus::InProgress),
        mtbf: reliability::mtbf_hours(kpi_scope),
        mttr: reliability::mttr_hours(kpi_scope),
        availability: reliability::availability_percent(kpi_scope, year, month),
    };

    log::debug!(
        "Aggregated {}-{:02}: {} records in period, {} after equipment filter, total {:.2}",
        year,
        month,
        period.len(),
        narrowed.len(),
        current_total
    );

    DashboardData {
        current_total,
        totals_by_area,
        graph_total,
        kpis,
    }
}

/// Keep records whose equipment is in the selection; empty selection keeps all
fn narrow_by_equipment<'a>(records: &[&'a MaintenanceRecord], selected: &[&str]) -> Vec<&'a MaintenanceRecord> {
    if selected.is_empty() {
        return records.to_vec();
    }

    let selected: HashSet<&str> = selected.iter().copied().collect();
    records
        .iter()
        .copied()
        .filter(|r| selected.contains(r.equipment_id.as_str()))
        .collect()
}

fn total_cost(records: &[&MaintenanceRecord]) -> f64 {
    records.iter().fold(0.0, |acc, r| acc + r.cost)
}

fn totals_by_area(records: &[&MaintenanceRecord]) -> BTreeMap<MaintenanceArea, f64> {
    let mut totals = BTreeMap::new();
    for record in records {
        *totals.entry(record.area).or_insert(0.0) += record.cost;
    }
    totals
}

fn graph_total(totals: &BTreeMap<MaintenanceArea, f64>, area: AreaFilter) -> f64 {
    match area {
        AreaFilter::All => totals.values().fold(0.0, |acc, v| acc + v),
        AreaFilter::Area(area) => totals.get(&area).copied().unwrap_or(0.0),
    }
}

fn count_status(records: &[&MaintenanceRecord], status: WorkOrderStatus) -> usize {
    records.iter().filter(|r| r.status == status).count()
}
