//! Presentation adapter
//!
//! Turns aggregate figures into display-ready strings for the card and chart
//! renderers. No aggregation happens here; every value comes from
//! [`DashboardData`].

use crate::core::{AreaFilter, DashboardData, DisplayConfig, Error, MaintenanceArea, Result};
use crate::filter::FilterState;
use crate::i18n::I18n;
use serde::Serialize;
use std::str::FromStr;

/// Fixed number-formatting locale
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Locale {
    /// 1.234,56
    PtBr,
    /// 1,234.56
    EnUs,
}

impl Locale {
    fn separators(&self) -> (char, char) {
        match self {
            Locale::PtBr => ('.', ','),
            Locale::EnUs => (',', '.'),
        }
    }
}

impl FromStr for Locale {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "pt-BR" | "pt_BR" | "pt" => Ok(Locale::PtBr),
            "en-US" | "en_US" | "en" => Ok(Locale::EnUs),
            _ => Err(Error::Config(format!("Unsupported locale: {}", s))),
        }
    }
}

/// Currency formatting with two decimal places
#[derive(Debug, Clone)]
pub struct CurrencyFormat {
    symbol: String,
    locale: Locale,
}

impl CurrencyFormat {
    pub fn new(symbol: &str, locale: Locale) -> Self {
        Self {
            symbol: symbol.to_string(),
            locale,
        }
    }

    pub fn from_config(config: &DisplayConfig) -> Result<Self> {
        Ok(Self::new(&config.currency_symbol, config.locale.parse()?))
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// "R$ 89.674,75" (pt-BR) or "$89,674.75" (en-US)
    pub fn format(&self, value: f64) -> String {
        let amount = format_number(value, 2, self.locale);
        match self.locale {
            Locale::PtBr => format!("{} {}", self.symbol, amount),
            Locale::EnUs => match amount.strip_prefix('-') {
                Some(abs) => format!("-{}{}", self.symbol, abs),
                None => format!("{}{}", self.symbol, amount),
            },
        }
    }
}

impl Default for CurrencyFormat {
    fn default() -> Self {
        Self::new("R$", Locale::PtBr)
    }
}

/// Format a number with grouping and a fixed number of decimals
pub fn format_number(value: f64, decimals: usize, locale: Locale) -> String {
    let (group_sep, decimal_sep) = locale.separators();
    let value = if value.is_finite() { value } else { 0.0 };

    let rendered = format!("{:.*}", decimals, value.abs());
    let (int_part, frac_part) = match rendered.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (rendered.as_str(), None),
    };

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, digit) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(group_sep);
        }
        grouped.push(digit);
    }

    let negative = value < 0.0 && rendered.chars().any(|c| c.is_ascii_digit() && c != '0');
    let mut out = String::new();
    if negative {
        out.push('-');
    }
    out.push_str(&grouped);
    if let Some(frac) = frac_part {
        out.push(decimal_sep);
        out.push_str(frac);
    }
    out
}

/// "120h", "4,5h"
pub fn format_hours(hours: f64, locale: Locale) -> String {
    if (hours - hours.round()).abs() < 0.05 {
        format!("{}h", format_number(hours.round(), 0, locale))
    } else {
        format!("{}h", format_number(hours, 1, locale))
    }
}

/// "98,5%"
pub fn format_percent(percent: f64, locale: Locale) -> String {
    format!("{}%", format_number(percent, 1, locale))
}

/// A KPI card
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricCard {
    pub id: &'static str,
    pub title: String,
    pub value: String,
    pub subtitle: String,
}

/// One bar of the cost-by-area chart
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartPoint {
    pub area: MaintenanceArea,
    pub label: String,
    pub value: f64,
    pub display: String,
}

/// Display-ready dashboard
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardView {
    pub title: String,
    pub total_title: String,
    pub total_display: String,
    pub cards: Vec<MetricCard>,
    pub chart_title: String,
    pub graph_area_label: String,
    pub graph_total_display: String,
    pub chart: Vec<ChartPoint>,
}

impl DashboardView {
    pub fn build(data: &DashboardData, filter: &FilterState, i18n: &I18n, currency: &CurrencyFormat) -> Self {
        let locale = currency.locale();
        let month_name = i18n.month_name(filter.month());
        let period = format!("{}/{}", month_name, filter.year());

        let cards = vec![
            MetricCard {
                id: "critical",
                title: i18n.get("kpi.critical"),
                value: data.kpis.critical.to_string(),
                subtitle: i18n.get("kpi.critical.subtitle"),
            },
            MetricCard {
                id: "open",
                title: i18n.get("kpi.open"),
                value: data.kpis.open.to_string(),
                subtitle: period,
            },
            MetricCard {
                id: "in_progress",
                title: i18n.get("kpi.in_progress"),
                value: data.kpis.in_progress.to_string(),
                subtitle: i18n.get("kpi.in_progress.subtitle"),
            },
            MetricCard {
                id: "availability",
                title: i18n.get("kpi.availability"),
                value: format_percent(data.kpis.availability, locale),
                subtitle: i18n.get("kpi.availability.subtitle"),
            },
            MetricCard {
                id: "mtbf",
                title: i18n.get("kpi.mtbf"),
                value: format_hours(data.kpis.mtbf, locale),
                subtitle: i18n.get("kpi.mtbf.subtitle"),
            },
            MetricCard {
                id: "mttr",
                title: i18n.get("kpi.mttr"),
                value: format_hours(data.kpis.mttr, locale),
                subtitle: i18n.get("kpi.mttr.subtitle"),
            },
        ];

        Self {
            title: i18n.get("app.title"),
            total_title: i18n.get_with("dashboard.total_in", &[("month", month_name.as_str())]),
            total_display: currency.format(data.current_total),
            cards,
            chart_title: i18n.get("chart.title"),
            graph_area_label: area_filter_label(filter.graph_area(), i18n),
            graph_total_display: currency.format(data.graph_total),
            chart: chart_series(data, filter.graph_area(), i18n, currency),
        }
    }
}

/// Chart bars in area order; the wildcard shows every area, zero-filled
pub fn chart_series(data: &DashboardData, area: AreaFilter, i18n: &I18n, currency: &CurrencyFormat) -> Vec<ChartPoint> {
    MaintenanceArea::ALL
        .iter()
        .filter(|a| area.matches(**a))
        .map(|a| {
            let value = data.totals_by_area.get(a).copied().unwrap_or(0.0);
            ChartPoint {
                area: *a,
                label: i18n.get(&a.label_key()),
                value,
                display: currency.format(value),
            }
        })
        .collect()
}

fn area_filter_label(area: AreaFilter, i18n: &I18n) -> String {
    match area {
        AreaFilter::All => i18n.get("area.all"),
        AreaFilter::Area(a) => i18n.get(&a.label_key()),
    }
}
