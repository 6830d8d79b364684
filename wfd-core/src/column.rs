use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A numeric column of the `mart_forecast_day` table.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Column {
    MinTempC,
    MaxTempC,
    AvgTempC,
    MaxWindKph,
    Uv,
    AvgHumidity,
    TotalPrecipMm,
}

impl Column {
    /// All columns in table order.
    pub const ALL: [Column; 7] = [
        Column::MinTempC,
        Column::MaxTempC,
        Column::AvgTempC,
        Column::MaxWindKph,
        Column::Uv,
        Column::AvgHumidity,
        Column::TotalPrecipMm,
    ];

    /// Column name as it appears in the table and the CSV header.
    pub fn id(self) -> &'static str {
        match self {
            Column::MinTempC => "min_temp_c",
            Column::MaxTempC => "max_temp_c",
            Column::AvgTempC => "avg_temp_c",
            Column::MaxWindKph => "max_wind_kph",
            Column::Uv => "uv",
            Column::AvgHumidity => "avg_humidity",
            Column::TotalPrecipMm => "total_precip_mm",
        }
    }

    /// Human-readable label for axes and legends.
    pub fn label(self) -> &'static str {
        match self {
            Column::MinTempC => "Min Temperature",
            Column::MaxTempC => "Max Temperature",
            Column::AvgTempC => "Avg Temperature",
            Column::MaxWindKph => "Max Wind Speed",
            Column::Uv => "UV Index",
            Column::AvgHumidity => "Avg Humidity",
            Column::TotalPrecipMm => "Total Precipitation",
        }
    }

    /// Unit suffix; empty for the dimensionless UV index.
    pub fn unit(self) -> &'static str {
        match self {
            Column::MinTempC | Column::MaxTempC | Column::AvgTempC => "°C",
            Column::MaxWindKph => "kph",
            Column::Uv => "",
            Column::AvgHumidity => "%",
            Column::TotalPrecipMm => "mm",
        }
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// A temperature metric selectable in the dashboard checklist.
///
/// The derived ordering is the fixed legend order (min, max, avg). Series are
/// always emitted in this order regardless of the order the user ticked them.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TemperatureMetric {
    MinTempC,
    MaxTempC,
    AvgTempC,
}

impl TemperatureMetric {
    /// All metrics in legend order. This is also the default selection.
    pub const ALL: [TemperatureMetric; 3] = [
        TemperatureMetric::MinTempC,
        TemperatureMetric::MaxTempC,
        TemperatureMetric::AvgTempC,
    ];

    pub fn column(self) -> Column {
        match self {
            TemperatureMetric::MinTempC => Column::MinTempC,
            TemperatureMetric::MaxTempC => Column::MaxTempC,
            TemperatureMetric::AvgTempC => Column::AvgTempC,
        }
    }

    pub fn id(self) -> &'static str {
        self.column().id()
    }

    /// Position in the legend order, used for stable color assignment.
    pub fn position(self) -> usize {
        self as usize
    }
}

impl fmt::Display for TemperatureMetric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for TemperatureMetric {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let id = s.trim();
        TemperatureMetric::ALL
            .into_iter()
            .find(|m| m.id() == id)
            .ok_or_else(|| anyhow::anyhow!("unknown temperature metric '{}'", id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn column_ids_are_unique() {
        let mut ids: Vec<&str> = Column::ALL.iter().map(|c| c.id()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), Column::ALL.len());
    }

    #[test]
    fn temperature_metric_parses_ids() {
        assert_eq!(
            "min_temp_c".parse::<TemperatureMetric>().unwrap(),
            TemperatureMetric::MinTempC
        );
        assert_eq!(
            " avg_temp_c ".parse::<TemperatureMetric>().unwrap(),
            TemperatureMetric::AvgTempC
        );
        assert!("uv".parse::<TemperatureMetric>().is_err(), "uv is not a temperature metric");
    }

    #[test]
    fn temperature_metric_order_is_legend_order() {
        let mut metrics = vec![
            TemperatureMetric::AvgTempC,
            TemperatureMetric::MinTempC,
            TemperatureMetric::MaxTempC,
        ];
        metrics.sort();
        assert_eq!(metrics, TemperatureMetric::ALL.to_vec());
        assert_eq!(TemperatureMetric::AvgTempC.position(), 2);
    }

    #[test]
    fn temperature_metrics_map_to_temperature_columns() {
        for metric in TemperatureMetric::ALL {
            assert_eq!(metric.column().unit(), "°C");
            assert_eq!(metric.id(), metric.column().id());
        }
    }

    #[test]
    fn column_displays_as_id() {
        assert_eq!(Column::TotalPrecipMm.to_string(), "total_precip_mm");
        assert_eq!(TemperatureMetric::MaxTempC.to_string(), "max_temp_c");
    }
}
