//! Subcommand implementations.

use crate::config::{DashboardConfig, OutputFormat};
use crate::dataset::{load_dataset, open_database};
use crate::render::render_output;
use crate::session::{parse_metric_list, run_session};
use anyhow::Context;
use log::info;
use std::path::Path;
use tokio::io::{AsyncWriteExt, BufReader};
use wfd_dashboard::DashboardController;
use wfd_db::models::CityInfo;
use wfd_db::Database;

fn build_controller(config: &DashboardConfig) -> anyhow::Result<DashboardController> {
    let store = load_dataset(&config.source)?;
    info!(
        "Loaded {} forecast days for {} cities from {}",
        store.len(),
        store.cities().len(),
        config.source.path().display()
    );
    Ok(DashboardController::with_default_city(
        store,
        &config.default_city,
    ))
}

/// List the cities of the dataset in first-appearance order.
pub fn run_cities(config: &DashboardConfig, format: OutputFormat) -> anyhow::Result<String> {
    let db = open_database(&config.source)?;
    let overview = db.query_city_overview()?;
    match format {
        OutputFormat::Text => Ok(format_city_overview(&overview)),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&overview)?),
    }
}

fn format_city_overview(overview: &[CityInfo]) -> String {
    overview
        .iter()
        .map(|info| {
            format!(
                "{:<20} {:>4} days  {} .. {}\n",
                info.city, info.days, info.first_date, info.last_date
            )
        })
        .collect()
}

/// Apply an optional city event and an optional metrics event to a fresh
/// controller, then render the result.
///
/// `metrics` is a comma-separated list; an empty string selects nothing.
pub fn run_render(
    config: &DashboardConfig,
    city: Option<&str>,
    metrics: Option<&str>,
    format: OutputFormat,
) -> anyhow::Result<String> {
    let mut controller = build_controller(config)?;
    let mut output = controller.recompute();
    if let Some(city) = city {
        output = controller.on_city_changed(city);
    }
    if let Some(metrics) = metrics {
        output = controller.on_metrics_changed(parse_metric_list(metrics));
    }
    render_output(&output, format)
}

/// Run an interactive session on stdin/stdout.
pub async fn run_session_stdio(
    config: &DashboardConfig,
    format: OutputFormat,
) -> anyhow::Result<()> {
    let mut controller = build_controller(config)?;
    let mut stdout = tokio::io::stdout();

    let initial = render_output(&controller.recompute(), format)?;
    stdout.write_all(initial.as_bytes()).await?;
    stdout.write_all(b"\n").await?;
    stdout.flush().await?;

    let stdin = BufReader::new(tokio::io::stdin());
    run_session(&mut controller, stdin, stdout, format).await?;
    Ok(())
}

/// Load a CSV export into a SQLite database file.
pub fn run_import(csv: &Path, sqlite: &Path) -> anyhow::Result<usize> {
    let db = Database::open(sqlite)?;
    let loaded = db
        .load_forecast_file(csv)
        .with_context(|| format!("failed to import '{}'", csv.display()))?;
    info!(
        "Imported {} forecast days into {}",
        loaded,
        sqlite.display()
    );
    Ok(loaded)
}
