//! PCM Dashboard - event bridge
//!
//! Loads the work orders once, then reads filter-change events as JSON lines
//! on stdin and answers each with the recomputed dashboard as a JSON line on
//! stdout. The rendering front end sits on the other side of the pipe.
//!
//! Usage: pcm-dashboard [DATA_FILE]

use anyhow::Context;
use pcm_dashboard_lib::core::{Config, DashboardData, DataSource};
use pcm_dashboard_lib::dashboard::Dashboard;
use pcm_dashboard_lib::db::Database;
use pcm_dashboard_lib::filter::{FilterEvent, FilterState};
use pcm_dashboard_lib::i18n::I18n;
use pcm_dashboard_lib::presentation::{CurrencyFormat, DashboardView};
use pcm_dashboard_lib::store::{MemoryStore, RecordStore};
use serde::Serialize;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

/// One line of output
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Update<'a> {
    ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
    filter: &'a FilterState,
    data: &'a DashboardData,
    view: DashboardView,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    log::info!("Starting PCM Dashboard v{}", env!("CARGO_PKG_VERSION"));

    let mut config = Config::load().unwrap_or_else(|e| {
        log::warn!("Failed to load config, using defaults: {}", e);
        Config::default()
    });
    if let Some(path) = std::env::args().nth(1) {
        config.data.path = Some(PathBuf::from(path));
    }

    let i18n = I18n::new(&config.general.language);
    let currency = CurrencyFormat::from_config(&config.display).unwrap_or_else(|e| {
        log::warn!("Invalid display settings, using defaults: {}", e);
        CurrencyFormat::default()
    });

    let mut dashboard = Dashboard::unloaded().with_config(&config, &i18n.get("equipment.none"));

    // A missing or broken data file leaves the dashboard at zeros
    match load_store(&config) {
        Ok(store) => {
            dashboard.load_records(store);
        }
        Err(e) => log::error!("Failed to load work orders: {:#}", e),
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();
    emit(&mut out, &dashboard, &i18n, &currency, None)?;

    for line in io::stdin().lock().lines() {
        let line = line.context("Failed to read from stdin")?;
        if line.trim().is_empty() {
            continue;
        }

        let error = match serde_json::from_str::<FilterEvent>(&line) {
            Ok(event) => dashboard.apply(&event).err().map(|e| e.to_string()),
            Err(e) => Some(format!("Unrecognized filter event: {}", e)),
        };
        emit(&mut out, &dashboard, &i18n, &currency, error)?;
    }

    log::info!("Input closed, exiting");
    Ok(())
}

fn load_store(config: &Config) -> anyhow::Result<Box<dyn RecordStore>> {
    let path = config.data.resolve_path()?;
    let store = match config.data.source {
        DataSource::Json => load_json(&path)?,
        DataSource::Sqlite => Database::open(&path)
            .and_then(|db| db.load_store())
            .with_context(|| format!("Failed to read {}", path.display()))?,
    };
    Ok(Box::new(store))
}

fn load_json(path: &Path) -> anyhow::Result<MemoryStore> {
    MemoryStore::load_json(path).with_context(|| format!("Failed to read {}", path.display()))
}

fn emit(
    out: &mut impl Write,
    dashboard: &Dashboard,
    i18n: &I18n,
    currency: &CurrencyFormat,
    error: Option<String>,
) -> anyhow::Result<()> {
    let update = Update {
        ok: error.is_none(),
        error,
        filter: dashboard.filter(),
        data: dashboard.data(),
        view: DashboardView::build(dashboard.data(), dashboard.filter(), i18n, currency),
    };
    serde_json::to_writer(&mut *out, &update)?;
    writeln!(out)?;
    out.flush()?;
    Ok(())
}
