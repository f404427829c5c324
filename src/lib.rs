//! PCM Dashboard library
//!
//! Maintenance cost aggregation and filtering engine: work orders are loaded
//! once, filtered by period, equipment and maintenance area, and summarized
//! into totals and KPIs for dashboard renderers.

pub mod catalog;
pub mod core;
pub mod dashboard;
pub mod db;
pub mod engine;
pub mod filter;
pub mod i18n;
pub mod presentation;
pub mod store;
