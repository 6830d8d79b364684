//! The summary panel.

use serde::Serialize;
use wfd_data::Summary;

/// Shown in place of a statistic that does not exist (no rows for the city).
pub const NO_DATA: &str = "No data";

/// Summary statistics formatted for display, two fraction digits each.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SummaryPanel {
    pub header: String,
    pub stats: Summary,
    pub average_temperature: String,
    pub maximum_temperature: String,
    pub minimum_temperature: String,
    pub total_precipitation: String,
}

impl SummaryPanel {
    pub fn new(stats: Summary) -> Self {
        // Without rows every figure is shown as missing, the 0.0 total too.
        let total_precip = stats.has_data().then_some(stats.total_precip);
        Self {
            header: "Summary".to_string(),
            stats,
            average_temperature: format!(
                "Average Temperature: {}",
                format_stat(stats.avg_temp, "°C")
            ),
            maximum_temperature: format!(
                "Maximum Temperature: {}",
                format_stat(stats.max_temp, "°C")
            ),
            minimum_temperature: format!(
                "Minimum Temperature: {}",
                format_stat(stats.min_temp, "°C")
            ),
            total_precipitation: format!(
                "Total Precipitation: {}",
                format_stat(total_precip, "mm")
            ),
        }
    }

    /// The four display lines in panel order.
    pub fn lines(&self) -> [&str; 4] {
        [
            self.average_temperature.as_str(),
            self.maximum_temperature.as_str(),
            self.minimum_temperature.as_str(),
            self.total_precipitation.as_str(),
        ]
    }
}

/// `12.30 °C`, or [`NO_DATA`].
pub fn format_stat(value: Option<f64>, unit: &str) -> String {
    match value {
        Some(v) => format!("{:.2} {}", v, unit),
        None => NO_DATA.to_string(),
    }
}
