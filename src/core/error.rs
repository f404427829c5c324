//! Error types for the dashboard engine

use thiserror::Error;

/// Crate-wide error type
#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid period: {year}-{month} (month must be between 1 and 12)")]
    InvalidPeriod { year: i32, month: u32 },

    #[error("Unknown maintenance area: {0}")]
    UnknownArea(String),

    #[error("Invalid equipment slot: {0} (expected 1, 2 or 3)")]
    InvalidSlot(u8),

    #[error("Invalid maintenance record: {0}")]
    InvalidRecord(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Result type alias using our Error
pub type Result<T> = std::result::Result<T, Error>;
