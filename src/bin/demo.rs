//! PCM Dashboard - Demo CLI
//!
//! Walks through a filtering session on the bundled sample work orders and
//! prints the dashboard after each change.

use pcm_dashboard_lib::core::MaintenanceArea;
use pcm_dashboard_lib::dashboard::Dashboard;
use pcm_dashboard_lib::db::Database;
use pcm_dashboard_lib::engine::AggregationOptions;
use pcm_dashboard_lib::filter::{FilterEvent, FilterState};
use pcm_dashboard_lib::i18n::I18n;
use pcm_dashboard_lib::presentation::{CurrencyFormat, DashboardView};
use pcm_dashboard_lib::store::{MemoryStore, RecordStore};

const SAMPLE_WORK_ORDERS: &str = include_str!("../../data/work_orders.json");

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let lang = std::env::args().nth(1).unwrap_or_else(|| "pt".to_string());
    let i18n = I18n::new(&lang);
    let currency = CurrencyFormat::default();

    println!("==============================================");
    println!("   PCM Dashboard - Demo CLI");
    println!("==============================================\n");

    // 1. Load sample data, round-tripped through SQLite
    println!("[1/3] Loading sample work orders...");
    let sample = MemoryStore::from_json(SAMPLE_WORK_ORDERS)?;
    let mut db = Database::open_in_memory()?;
    db.insert_records(sample.records())?;
    let store = db.load_store()?;
    println!("      {} work orders loaded\n", store.records().len());

    // 2. Build dashboard
    println!("[2/3] Building dashboard for 01/2024...");
    let mut dashboard = Dashboard::unloaded();
    dashboard.set_period(2024, 1)?;
    println!("      Before load: total {}", currency.format(dashboard.data().current_total));
    dashboard.load_records(Box::new(store));
    println!("      After load:  total {}\n", currency.format(dashboard.data().current_total));

    print_dashboard(&dashboard, &i18n, &currency);

    // 3. Filter session
    println!("[3/3] Applying filter changes...\n");
    let events = [
        FilterEvent::EquipmentSlot { slot: 1, value: "PRENSA P2".into() },
        FilterEvent::EquipmentSlot { slot: 2, value: "FRESA".into() },
        FilterEvent::GraphArea { area: MaintenanceArea::Mechanical.to_string() },
        FilterEvent::Month { month: 13 },
        FilterEvent::Month { month: 2 },
        FilterEvent::EquipmentSlot { slot: 1, value: String::new() },
    ];

    for event in &events {
        println!(">>> {}", serde_json::to_string(event)?);
        let outcome = dashboard.apply(event).map(|_| ());
        match outcome {
            Ok(_) => print_dashboard(&dashboard, &i18n, &currency),
            Err(e) => println!("    rejected: {}\n", e),
        }
    }

    // Plant-wide vs equipment-scoped KPIs on the same selection
    let mut filter = FilterState::for_period(2024, 2)?;
    filter.set_equipment(1, "TORNO CNC")?;
    let scoped = Dashboard::new(
        Box::new(MemoryStore::from_json(SAMPLE_WORK_ORDERS)?),
        filter,
        AggregationOptions { narrow_kpis_by_equipment: true },
    );
    println!("TORNO CNC only, 02/2024 (equipment-scoped KPIs):");
    print_dashboard(&scoped, &i18n, &currency);

    Ok(())
}

fn print_dashboard(dashboard: &Dashboard, i18n: &I18n, currency: &CurrencyFormat) {
    let view = DashboardView::build(dashboard.data(), dashboard.filter(), i18n, currency);
    let selected = dashboard.filter().selected_equipments();

    println!("----------------------------------------------");
    println!("  {} | {}: {}", view.title, view.total_title, view.total_display);
    if !selected.is_empty() {
        println!("  [{}]", selected.join(", "));
    }
    println!("----------------------------------------------");
    for card in &view.cards {
        println!("  {:<32} {:>10}   {}", card.title, card.value, card.subtitle);
    }
    println!();
    println!("  {} ({}: {})", view.chart_title, view.graph_area_label, view.graph_total_display);
    for point in &view.chart {
        println!("    {:<18} {:>16}", point.label, point.display);
    }
    println!();
}
