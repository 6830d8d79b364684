//! The reactive controller.
//!
//! Every input event updates exactly one state variable and then recomputes
//! all six outputs from scratch: filter once, project once per chart,
//! summarize once. There is no caching between events and no partial update.
//! The temperature chart is the only output that depends on the metric
//! selection; the other charts and the summary depend on the city alone.

use crate::chart::{ChartId, ChartOutput};
use crate::panel::SummaryPanel;
use crate::state::{SelectionState, DEFAULT_CITY};
use serde::Serialize;
use wfd_core::TemperatureMetric;
use wfd_data::{project_column, project_temperature, summarize, DatasetStore};

/// The complete output set of one recomputation.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct DashboardOutput {
    pub city: String,
    pub temperature: ChartOutput,
    pub wind_speed: ChartOutput,
    pub uv_index: ChartOutput,
    pub humidity: ChartOutput,
    pub precipitation: ChartOutput,
    pub summary: SummaryPanel,
}

impl DashboardOutput {
    /// The five charts in layout order.
    pub fn charts(&self) -> [&ChartOutput; 5] {
        [
            &self.temperature,
            &self.wind_speed,
            &self.uv_index,
            &self.humidity,
            &self.precipitation,
        ]
    }

    pub fn chart(&self, id: ChartId) -> &ChartOutput {
        match id {
            ChartId::Temperature => &self.temperature,
            ChartId::WindSpeed => &self.wind_speed,
            ChartId::UvIndex => &self.uv_index,
            ChartId::Humidity => &self.humidity,
            ChartId::Precipitation => &self.precipitation,
        }
    }
}

/// Run the full recomputation cascade for `state` against `store`.
pub fn compute_outputs(store: &DatasetStore, state: &SelectionState) -> DashboardOutput {
    let city = state.selected_city.as_str();
    let view = store.rows_for_city(city);

    let single = |id: ChartId| {
        let series = id
            .column()
            .map(|column| vec![project_column(&view, column)])
            .unwrap_or_default();
        ChartOutput::new(id, city, series)
    };

    let output = DashboardOutput {
        city: city.to_string(),
        temperature: ChartOutput::new(
            ChartId::Temperature,
            city,
            project_temperature(&view, &state.metrics()),
        ),
        wind_speed: single(ChartId::WindSpeed),
        uv_index: single(ChartId::UvIndex),
        humidity: single(ChartId::Humidity),
        precipitation: single(ChartId::Precipitation),
        summary: SummaryPanel::new(summarize(&view)),
    };
    log::debug!(
        "controller: recomputed '{}' ({} rows, {} temperature series)",
        city,
        view.len(),
        output.temperature.series.len()
    );
    output
}

/// Owns one session's selection and answers input events with a fresh
/// [`DashboardOutput`].
///
/// The dataset is shared; the selection is not. Create one controller per
/// session.
#[derive(Debug, Clone)]
pub struct DashboardController {
    store: DatasetStore,
    state: SelectionState,
}

impl DashboardController {
    /// Start a session on [`DEFAULT_CITY`] (or the first city) with every
    /// metric selected.
    pub fn new(store: DatasetStore) -> Self {
        Self::with_default_city(store, DEFAULT_CITY)
    }

    pub fn with_default_city(store: DatasetStore, preferred_city: &str) -> Self {
        let state = SelectionState::new(&store, preferred_city);
        log::info!(
            "[WFD Debug] controller: Default selection: {}",
            state.selected_city
        );
        Self { store, state }
    }

    pub fn state(&self) -> &SelectionState {
        &self.state
    }

    /// City selector changed.
    ///
    /// A city that is not in the dataset is still selected; it produces empty
    /// charts and a "no data" summary.
    pub fn on_city_changed(&mut self, city: impl Into<String>) -> DashboardOutput {
        let city = city.into();
        if !self.store.contains_city(&city) {
            log::warn!("controller: city '{}' is not in the dataset", city);
        }
        self.state.selected_city = city;
        self.recompute()
    }

    /// Metric checklist changed. `metrics` holds column identifiers
    /// (`min_temp_c`, `max_temp_c`, `avg_temp_c`); anything else is skipped.
    pub fn on_metrics_changed<I, S>(&mut self, metrics: I) -> DashboardOutput
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let parsed = metrics.into_iter().filter_map(|id| {
            let id = id.as_ref();
            match id.parse::<TemperatureMetric>() {
                Ok(metric) => Some(metric),
                Err(e) => {
                    log::warn!("controller: ignoring metric selection: {}", e);
                    None
                }
            }
        });
        self.set_metrics(parsed)
    }

    /// Typed variant of [`on_metrics_changed`](Self::on_metrics_changed).
    pub fn set_metrics(
        &mut self,
        metrics: impl IntoIterator<Item = TemperatureMetric>,
    ) -> DashboardOutput {
        self.state.selected_metrics = metrics.into_iter().collect();
        self.recompute()
    }

    /// Recompute every output for the current selection.
    pub fn recompute(&self) -> DashboardOutput {
        compute_outputs(&self.store, &self.state)
    }
}
