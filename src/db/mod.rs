//! SQLite source for the record store
//!
//! Work orders can be kept in a local SQLite file instead of a JSON export.
//! The database is only read at load time; the dashboard itself works on the
//! in-memory snapshot returned by [`Database::load_store`].

use crate::core::{Error, MaintenanceArea, MaintenanceRecord, Result, WorkOrderStatus};
use crate::store::MemoryStore;
use chrono::{DateTime, Utc};
use rusqlite::{params, Connection, Row};
use std::path::Path;

const SELECT_COLUMNS: &str = "SELECT id, equipment_id, area, cost, year, month, status,
        failed_at, repair_started_at, repair_finished_at
     FROM work_orders";

const INSERT_SQL: &str = "INSERT OR REPLACE INTO work_orders
        (id, equipment_id, area, cost, year, month, status, failed_at, repair_started_at, repair_finished_at)
     VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)";

/// Database manager
pub struct Database {
    conn: Connection,
}

impl Database {
    /// Open (or create) a database file
    pub fn open(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let conn = Connection::open(path)?;

        let db = Self { conn };
        db.init_schema()?;

        Ok(db)
    }

    /// Open a throwaway in-memory database
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let db = Self { conn };
        db.init_schema()?;
        Ok(db)
    }

    /// Initialize database schema
    fn init_schema(&self) -> Result<()> {
        self.conn.execute_batch(
            r#"
            CREATE TABLE IF NOT EXISTS work_orders (
                id TEXT PRIMARY KEY,
                equipment_id TEXT NOT NULL,
                area TEXT NOT NULL,
                cost REAL NOT NULL,
                year INTEGER NOT NULL,
                month INTEGER NOT NULL,
                status TEXT NOT NULL,
                failed_at INTEGER,
                repair_started_at INTEGER,
                repair_finished_at INTEGER
            );

            CREATE INDEX IF NOT EXISTS idx_work_orders_period ON work_orders(year, month);
            "#,
        )?;

        Ok(())
    }

    /// Insert or replace a work order
    pub fn insert_record(&self, record: &MaintenanceRecord) -> Result<()> {
        self.conn.execute(
            INSERT_SQL,
            params![
                record.id,
                record.equipment_id,
                record.area.as_str(),
                record.cost,
                record.year,
                record.month,
                record.status.as_str(),
                record.failed_at.map(|t| t.timestamp()),
                record.repair_started_at.map(|t| t.timestamp()),
                record.repair_finished_at.map(|t| t.timestamp()),
            ],
        )?;

        Ok(())
    }

    /// Insert many work orders in a single transaction
    pub fn insert_records(&mut self, records: &[MaintenanceRecord]) -> Result<usize> {
        let tx = self.conn.transaction()?;
        {
            let mut stmt = tx.prepare(INSERT_SQL)?;
            for record in records {
                stmt.execute(params![
                    record.id,
                    record.equipment_id,
                    record.area.as_str(),
                    record.cost,
                    record.year,
                    record.month,
                    record.status.as_str(),
                    record.failed_at.map(|t| t.timestamp()),
                    record.repair_started_at.map(|t| t.timestamp()),
                    record.repair_finished_at.map(|t| t.timestamp()),
                ])?;
            }
        }
        tx.commit()?;

        Ok(records.len())
    }

    /// Read every work order; rows with unknown area or status are skipped
    pub fn load_records(&self) -> Result<Vec<MaintenanceRecord>> {
        let mut stmt = self.conn.prepare(&format!("{} ORDER BY year, month, id", SELECT_COLUMNS))?;

        let records = stmt
            .query_map([], raw_row)?
            .filter_map(|r| match r {
                Ok(raw) => match raw.into_record() {
                    Ok(record) => Some(record),
                    Err(e) => {
                        log::warn!("Skipping stored work order: {}", e);
                        None
                    }
                },
                Err(e) => {
                    log::warn!("Failed to read work order row: {}", e);
                    None
                }
            })
            .collect();

        Ok(records)
    }

    /// Load the full table into a record store snapshot
    pub fn load_store(&self) -> Result<MemoryStore> {
        Ok(MemoryStore::from_records(self.load_records()?))
    }

    /// Get total work order count
    pub fn get_records_count(&self) -> Result<i64> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM work_orders", [], |row| row.get(0))?;
        Ok(count)
    }
}

/// Row as stored, before area/status/timestamps are parsed
struct RawRow {
    id: String,
    equipment_id: String,
    area: String,
    cost: f64,
    year: i32,
    month: u32,
    status: String,
    failed_at: Option<i64>,
    repair_started_at: Option<i64>,
    repair_finished_at: Option<i64>,
}

fn raw_row(row: &Row<'_>) -> rusqlite::Result<RawRow> {
    Ok(RawRow {
        id: row.get(0)?,
        equipment_id: row.get(1)?,
        area: row.get(2)?,
        cost: row.get(3)?,
        year: row.get(4)?,
        month: row.get(5)?,
        status: row.get(6)?,
        failed_at: row.get(7)?,
        repair_started_at: row.get(8)?,
        repair_finished_at: row.get(9)?,
    })
}

impl RawRow {
    fn into_record(self) -> Result<MaintenanceRecord> {
        let area: MaintenanceArea = self.area.parse()?;
        let status: WorkOrderStatus = self.status.parse()?;

        Ok(MaintenanceRecord {
            failed_at: timestamp(self.failed_at, &self.id)?,
            repair_started_at: timestamp(self.repair_started_at, &self.id)?,
            repair_finished_at: timestamp(self.repair_finished_at, &self.id)?,
            id: self.id,
            equipment_id: self.equipment_id,
            area,
            cost: self.cost,
            year: self.year,
            month: self.month,
            status,
        })
    }
}

fn timestamp(secs: Option<i64>, id: &str) -> Result<Option<DateTime<Utc>>> {
    match secs {
        None => Ok(None),
        Some(secs) => DateTime::from_timestamp(secs, 0)
            .map(Some)
            .ok_or_else(|| Error::InvalidRecord(format!("{}: timestamp out of range", id))),
    }
}
