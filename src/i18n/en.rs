//! English translations

use std::collections::HashMap;

pub fn get_translations() -> HashMap<String, String> {
    let mut t = HashMap::new();

    // App general
    t.insert("app.title".into(), "PCM Dashboard".into());

    // Header
    t.insert("dashboard.total_in".into(), "Total in {month}".into());

    // Months
    t.insert("month.1".into(), "January".into());
    t.insert("month.2".into(), "February".into());
    t.insert("month.3".into(), "March".into());
    t.insert("month.4".into(), "April".into());
    t.insert("month.5".into(), "May".into());
    t.insert("month.6".into(), "June".into());
    t.insert("month.7".into(), "July".into());
    t.insert("month.8".into(), "August".into());
    t.insert("month.9".into(), "September".into());
    t.insert("month.10".into(), "October".into());
    t.insert("month.11".into(), "November".into());
    t.insert("month.12".into(), "December".into());

    // Filters
    t.insert("filter.year".into(), "Year".into());
    t.insert("filter.month".into(), "Month".into());
    t.insert("filter.equipment".into(), "Equipment {slot}".into());
    t.insert("equipment.none".into(), "None".into());

    // KPI cards
    t.insert("kpi.critical".into(), "Critical Work Orders".into());
    t.insert("kpi.critical.subtitle".into(), "Need immediate attention".into());
    t.insert("kpi.open".into(), "Open Work Orders".into());
    t.insert("kpi.in_progress".into(), "Work Orders In Progress".into());
    t.insert("kpi.in_progress.subtitle".into(), "In execution".into());
    t.insert("kpi.availability".into(), "Availability".into());
    t.insert("kpi.availability.subtitle".into(), "Equipment availability".into());
    t.insert("kpi.mtbf".into(), "MTBF".into());
    t.insert("kpi.mtbf.subtitle".into(), "Mean Time Between Failures".into());
    t.insert("kpi.mttr".into(), "MTTR".into());
    t.insert("kpi.mttr.subtitle".into(), "Mean Time To Repair".into());

    // Chart
    t.insert("chart.title".into(), "Costs by Maintenance Area".into());
    t.insert("chart.area".into(), "Area".into());

    // Areas
    t.insert("area.all".into(), "All".into());
    t.insert("area.mechanical".into(), "Mechanical".into());
    t.insert("area.electrical".into(), "Electrical".into());
    t.insert("area.hydraulic".into(), "Hydraulic".into());
    t.insert("area.electronic".into(), "Electronic".into());
    t.insert("area.pneumatic".into(), "Pneumatic".into());
    t.insert("area.instrumentation".into(), "Instrumentation".into());
    t.insert("area.automation".into(), "Automation".into());

    t
}
