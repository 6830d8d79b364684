//! JSON payloads for a D3-style chart renderer.
//!
//! Each chart becomes `{ "data": [...], "config": {...} }`. `data` is a flat
//! list of `{ series, date, value }` points with dates as `YYYY-MM-DD`;
//! `config` carries the title, axis label, unit and series kind, plus one
//! legend label and one color per series.

use crate::chart::{ChartId, ChartOutput, SeriesKind};
use crate::controller::DashboardOutput;
use crate::panel::SummaryPanel;
use serde_json::{json, Value};
use wfd_core::dates::format_date;
use wfd_core::{Column, TemperatureMetric};

/// Temperature series colors, indexed by legend position (min, max, avg).
const TEMPERATURE_COLORS: [&str; 3] = ["#2196F3", "#F44336", "#FF9800"];

fn series_color(chart: ChartId, column: Column) -> &'static str {
    match chart {
        ChartId::Temperature => TemperatureMetric::ALL
            .iter()
            .find(|m| m.column() == column)
            .map(|m| TEMPERATURE_COLORS[m.position()])
            .unwrap_or(TEMPERATURE_COLORS[0]),
        ChartId::WindSpeed => "#607D8B",
        ChartId::UvIndex => "#9C27B0",
        ChartId::Humidity => "#009688",
        ChartId::Precipitation => "#3F51B5",
    }
}

fn kind_name(kind: SeriesKind) -> &'static str {
    match kind {
        SeriesKind::Line => "line",
        SeriesKind::Bar => "bar",
    }
}

/// Payload for one chart.
///
/// A series keeps its color whatever else is selected: colors follow the
/// metric, not the series' index in this particular output.
pub fn chart_payload(chart: &ChartOutput) -> Value {
    let data: Vec<Value> = chart
        .series
        .iter()
        .flat_map(|series| {
            series.points.iter().map(move |point| {
                json!({
                    "series": series.name,
                    "date": format_date(&point.date),
                    "value": point.value,
                })
            })
        })
        .collect();

    let series_names: Vec<&str> = chart.series.iter().map(|s| s.name.as_str()).collect();
    let labels: Vec<&str> = chart.series.iter().map(|s| s.column.label()).collect();
    let colors: Vec<&str> = chart
        .series
        .iter()
        .map(|s| series_color(chart.id, s.column))
        .collect();

    json!({
        "containerId": chart.id.container_id(),
        "data": data,
        "config": {
            "title": chart.title,
            "yAxisLabel": chart.y_axis_label,
            "yUnit": chart.id.unit(),
            "kind": kind_name(chart.kind),
            "series": series_names,
            "labels": labels,
            "colors": colors,
        },
    })
}

/// Payload for the summary panel.
pub fn summary_payload(panel: &SummaryPanel) -> Value {
    json!({
        "header": panel.header,
        "hasData": panel.stats.has_data(),
        "lines": panel.lines(),
        "stats": panel.stats,
    })
}

/// Payload for a whole recomputation: every chart plus the summary.
pub fn dashboard_payload(output: &DashboardOutput) -> Value {
    let charts: Vec<Value> = output.charts().into_iter().map(chart_payload).collect();
    json!({
        "city": output.city,
        "charts": charts,
        "summary": summary_payload(&output.summary),
    })
}
