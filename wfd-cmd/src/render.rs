//! Rendering dashboard outputs for the terminal.

use crate::config::OutputFormat;
use std::fmt::{self, Write};
use wfd_core::dates::format_date;
use wfd_dashboard::payload::dashboard_payload;
use wfd_dashboard::{ChartOutput, DashboardOutput, SeriesKind, SummaryPanel};

/// Render a full output set in the requested format.
pub fn render_output(output: &DashboardOutput, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Text => Ok(render_text(output)?),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&dashboard_payload(output))?),
    }
}

/// Plain-text rendering: one table per chart followed by the summary panel.
pub fn render_text(output: &DashboardOutput) -> Result<String, fmt::Error> {
    let mut out = String::new();
    for chart in output.charts() {
        render_chart(&mut out, chart)?;
        out.push('\n');
    }
    render_summary(&mut out, &output.summary)?;
    Ok(out)
}

fn render_chart(out: &mut String, chart: &ChartOutput) -> fmt::Result {
    let kind = match chart.kind {
        SeriesKind::Line => "line",
        SeriesKind::Bar => "bar",
    };
    writeln!(out, "== {} [{}] ==", chart.title, kind)?;

    if chart.series.is_empty() {
        return writeln!(out, "(no series selected)");
    }
    if chart.point_count() == 0 {
        return writeln!(out, "(no data)");
    }

    write!(out, "{:<10}", "date")?;
    for series in &chart.series {
        write!(out, " {:>15}", series.name)?;
    }
    out.push('\n');

    // Every series of a chart is projected from the same rows, so point i of
    // each series shares one date.
    let first = &chart.series[0];
    for (i, point) in first.points.iter().enumerate() {
        write!(out, "{:<10}", format_date(&point.date))?;
        for series in &chart.series {
            match series.points.get(i) {
                Some(p) => write!(out, " {:>15.2}", p.value)?,
                None => write!(out, " {:>15}", "-")?,
            }
        }
        out.push('\n');
    }
    Ok(())
}

fn render_summary(out: &mut String, panel: &SummaryPanel) -> fmt::Result {
    writeln!(out, "== {} ==", panel.header)?;
    for line in panel.lines() {
        writeln!(out, "{}", line)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use wfd_core::ForecastRow;
    use wfd_dashboard::DashboardController;
    use wfd_data::DatasetStore;

    fn controller() -> DashboardController {
        let row = |city: &str, day: u32, avg: f64| ForecastRow {
            city: city.to_string(),
            date: NaiveDate::from_ymd_opt(2024, 5, day).unwrap(),
            min_temp_c: avg - 5.0,
            max_temp_c: avg + 5.0,
            avg_temp_c: avg,
            max_wind_kph: 12.0,
            uv: 6.0,
            avg_humidity: 60.0,
            total_precip_mm: 1.0,
        };
        DashboardController::new(DatasetStore::new(vec![
            row("Istanbul", 1, 15.0),
            row("Istanbul", 2, 17.0),
            row("Ankara", 1, 11.0),
        ]))
    }

    #[test]
    fn text_lists_all_charts_and_summary() {
        let text = render_text(&controller().recompute()).unwrap();
        assert!(text.contains("== Temperature Over Time in Istanbul [line] =="));
        assert!(text.contains("== Wind Speed Over Time in Istanbul [line] =="));
        assert!(text.contains("== UV Index Over Time in Istanbul [line] =="));
        assert!(text.contains("== Humidity Over Time in Istanbul [line] =="));
        assert!(text.contains("== Precipitation Over Time in Istanbul [bar] =="));
        assert!(text.contains("Average Temperature: 16.00 °C"));
        assert!(text.contains("Total Precipitation: 2.00 mm"));
    }

    #[test]
    fn text_table_has_one_line_per_day() {
        let text = render_text(&controller().recompute()).unwrap();
        assert_eq!(text.matches("2024-05-01").count(), 5, "One row per chart");
        assert_eq!(text.matches("2024-05-02").count(), 5);
    }

    #[test]
    fn text_table_formats_values_with_two_decimals() {
        let text = render_text(&controller().on_metrics_changed(["avg_temp_c"])).unwrap();
        let line = text
            .lines()
            .skip_while(|l| !l.starts_with("== Temperature"))
            .find(|l| l.starts_with("2024-05-02"))
            .unwrap();
        assert_eq!(line, format!("{:<10} {:>15}", "2024-05-02", "17.00"));
    }

    #[test]
    fn text_marks_empty_charts() {
        let mut controller = controller();
        controller.on_metrics_changed(Vec::<&str>::new());
        let text = render_text(&controller.recompute()).unwrap();
        assert!(text.contains("(no series selected)"));

        let text = render_text(&controller.on_city_changed("Bursa")).unwrap();
        assert!(text.contains("(no data)"));
        assert!(text.contains("Average Temperature: No data"));
    }

    #[test]
    fn summary_section_ends_the_text() {
        let text = render_output(&controller().recompute(), OutputFormat::Text).unwrap();
        let tail: Vec<&str> = text.lines().rev().take(5).collect();
        assert_eq!(tail[4], "== Summary ==");
        assert!(tail[0].starts_with("Total Precipitation"));
    }

    #[test]
    fn json_output_is_valid() {
        let json = render_output(&controller().recompute(), OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["city"], "Istanbul");
        assert_eq!(value["charts"].as_array().unwrap().len(), 5);
    }
}
