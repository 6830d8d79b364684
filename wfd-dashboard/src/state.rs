//! Per-session selection state.
//!
//! Each session owns its own `SelectionState`; only the controller mutates
//! it, and only in response to an input event.

use serde::Serialize;
use std::collections::BTreeSet;
use wfd_core::TemperatureMetric;
use wfd_data::DatasetStore;

/// City selected when a session starts, if the dataset has it.
pub const DEFAULT_CITY: &str = "Istanbul";

/// The user's current choices.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SelectionState {
    pub selected_city: String,
    /// May be empty; the temperature chart then has no series.
    pub selected_metrics: BTreeSet<TemperatureMetric>,
}

impl SelectionState {
    /// Initial state: `preferred_city` if the dataset has it, otherwise the
    /// first city (empty for an empty dataset), with every metric selected.
    pub fn new(store: &DatasetStore, preferred_city: &str) -> Self {
        let selected_city = store
            .default_city(preferred_city)
            .unwrap_or_default()
            .to_string();
        Self {
            selected_city,
            selected_metrics: TemperatureMetric::ALL.into_iter().collect(),
        }
    }

    /// Selected metrics in legend order.
    pub fn metrics(&self) -> Vec<TemperatureMetric> {
        self.selected_metrics.iter().copied().collect()
    }
}
