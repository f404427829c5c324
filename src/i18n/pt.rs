//! Brazilian Portuguese translations

use std::collections::HashMap;

pub fn get_translations() -> HashMap<String, String> {
    let mut t = HashMap::new();

    // App general
    t.insert("app.title".into(), "Dashboard PCM".into());

    // Header
    t.insert("dashboard.total_in".into(), "Total em {month}".into());

    // Months
    t.insert("month.1".into(), "Janeiro".into());
    t.insert("month.2".into(), "Fevereiro".into());
    t.insert("month.3".into(), "Mar\u{00E7}o".into());
    t.insert("month.4".into(), "Abril".into());
    t.insert("month.5".into(), "Maio".into());
    t.insert("month.6".into(), "Junho".into());
    t.insert("month.7".into(), "Julho".into());
    t.insert("month.8".into(), "Agosto".into());
    t.insert("month.9".into(), "Setembro".into());
    t.insert("month.10".into(), "Outubro".into());
    t.insert("month.11".into(), "Novembro".into());
    t.insert("month.12".into(), "Dezembro".into());

    // Filters
    t.insert("filter.year".into(), "Ano".into());
    t.insert("filter.month".into(), "M\u{00EA}s".into());
    t.insert("filter.equipment".into(), "Equipamento {slot}".into());
    t.insert("equipment.none".into(), "Nenhum".into());

    // KPI cards
    t.insert("kpi.critical".into(), "OS Cr\u{00ED}ticas".into());
    t.insert("kpi.critical.subtitle".into(), "Necessitam aten\u{00E7}\u{00E3}o imediata".into());
    t.insert("kpi.open".into(), "Total de OS em Aberto".into());
    t.insert("kpi.in_progress".into(), "OS em Andamento".into());
    t.insert("kpi.in_progress.subtitle".into(), "Em execu\u{00E7}\u{00E3}o".into());
    t.insert("kpi.availability".into(), "Disponibilidade".into());
    t.insert("kpi.availability.subtitle".into(), "Disponibilidade de Equipamentos".into());
    t.insert("kpi.mtbf".into(), "MTBF".into());
    t.insert("kpi.mtbf.subtitle".into(), "Tempo M\u{00E9}dio entre Falhas".into());
    t.insert("kpi.mttr".into(), "MTTR".into());
    t.insert("kpi.mttr.subtitle".into(), "Tempo M\u{00E9}dio de Reparo".into());

    // Chart
    t.insert("chart.title".into(), "Custos por \u{00C1}rea de Manuten\u{00E7}\u{00E3}o".into());
    t.insert("chart.area".into(), "\u{00C1}rea".into());

    // Areas
    t.insert("area.all".into(), "Todas".into());
    t.insert("area.mechanical".into(), "MEC\u{00C2}NICA".into());
    t.insert("area.electrical".into(), "EL\u{00C9}TRICA".into());
    t.insert("area.hydraulic".into(), "HIDR\u{00C1}ULICA".into());
    t.insert("area.electronic".into(), "ELETR\u{00D4}NICA".into());
    t.insert("area.pneumatic".into(), "PNEUM\u{00C1}TICA".into());
    t.insert("area.instrumentation".into(), "INSTRUMENTA\u{00C7}\u{00C3}O".into());
    t.insert("area.automation".into(), "AUTOMA\u{00C7}\u{00C3}O".into());

    t
}
