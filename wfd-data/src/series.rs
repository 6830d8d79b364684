//! Projecting filtered rows into chart series.

use chrono::NaiveDate;
use serde::Serialize;
use wfd_core::{Column, ForecastRow, TemperatureMetric};

/// A single (date, value) chart point.
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct Point {
    pub date: NaiveDate,
    pub value: f64,
}

/// One named line or bar series.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Series {
    /// Column identifier, used as the legend entry.
    pub name: String,
    pub column: Column,
    pub points: Vec<Point>,
}

/// Project one column of `rows` into a series, one point per row, in row
/// order.
///
/// Used for the wind speed, UV index, humidity and precipitation charts.
/// Empty `rows` give a series with no points.
pub fn project_column(rows: &[&ForecastRow], column: Column) -> Series {
    Series {
        name: column.id().to_string(),
        column,
        points: rows
            .iter()
            .map(|row| Point {
                date: row.date,
                value: row.value(column),
            })
            .collect(),
    }
}

/// Project the selected temperature metrics, one series per metric.
///
/// Series come out in the fixed [`TemperatureMetric::ALL`] order no matter how
/// `metrics` is ordered, and duplicates are ignored, so legend entries keep
/// their position and color between re-renders. No metrics give no series.
pub fn project_temperature(rows: &[&ForecastRow], metrics: &[TemperatureMetric]) -> Vec<Series> {
    TemperatureMetric::ALL
        .into_iter()
        .filter(|metric| metrics.contains(metric))
        .map(|metric| project_column(rows, metric.column()))
        .collect()
}
