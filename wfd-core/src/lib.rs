//! Core types for the weather forecast dashboard.
//!
//! - `forecast_row`: one city/date record of the `mart_forecast_day` table
//! - `column`: the numeric columns and the selectable temperature metrics
//! - `dates`: date formatting and parsing helpers

pub mod column;
pub mod dates;
pub mod forecast_row;

pub use column::{Column, TemperatureMetric};
pub use forecast_row::ForecastRow;
