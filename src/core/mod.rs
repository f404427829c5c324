//! Core module - domain types, configuration, and errors

mod config;
mod error;
mod types;

pub use config::{AnalyticsConfig, CatalogConfig, Config, DataConfig, DataSource, DisplayConfig, GeneralConfig};
pub use error::{Error, Result};
pub use types::{
    AreaFilter, DashboardData, Equipment, Kpis, MaintenanceArea, MaintenanceRecord, WorkOrderStatus,
};
