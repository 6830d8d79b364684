//! Reactive dashboard layer for the weather forecast dashboard.
//!
//! This crate provides:
//! - `state`: the per-session city and metric selection
//! - `chart`: the five chart outputs and their titles
//! - `panel`: the formatted summary panel
//! - `controller`: the event handlers that recompute every output
//! - `payload`: JSON payloads for a D3-style chart renderer
//!
//! It has no UI binding of its own. A UI layer calls
//! [`DashboardController::on_city_changed`] and
//! [`DashboardController::on_metrics_changed`] and renders what they return.

pub mod chart;
pub mod controller;
pub mod panel;
pub mod payload;
pub mod state;

pub use chart::{ChartId, ChartOutput, SeriesKind};
pub use controller::{compute_outputs, DashboardController, DashboardOutput};
pub use panel::SummaryPanel;
pub use state::{SelectionState, DEFAULT_CITY};
