//! Chart outputs.

use serde::Serialize;
use wfd_core::Column;
use wfd_data::Series;

/// The five dashboard charts.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartId {
    Temperature,
    WindSpeed,
    UvIndex,
    Humidity,
    Precipitation,
}

/// How a view draws a chart's series.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SeriesKind {
    Line,
    Bar,
}

impl ChartId {
    /// Charts in layout order.
    pub const ALL: [ChartId; 5] = [
        ChartId::Temperature,
        ChartId::WindSpeed,
        ChartId::UvIndex,
        ChartId::Humidity,
        ChartId::Precipitation,
    ];

    /// DOM id of the chart container.
    pub fn container_id(self) -> &'static str {
        match self {
            ChartId::Temperature => "temperature-plot",
            ChartId::WindSpeed => "wind-speed-plot",
            ChartId::UvIndex => "uv-index-plot",
            ChartId::Humidity => "humidity-plot",
            ChartId::Precipitation => "precipitation-plot",
        }
    }

    /// The fixed column a single-metric chart plots. The temperature chart
    /// plots the selected metrics instead and has none.
    pub fn column(self) -> Option<Column> {
        match self {
            ChartId::Temperature => None,
            ChartId::WindSpeed => Some(Column::MaxWindKph),
            ChartId::UvIndex => Some(Column::Uv),
            ChartId::Humidity => Some(Column::AvgHumidity),
            ChartId::Precipitation => Some(Column::TotalPrecipMm),
        }
    }

    pub fn kind(self) -> SeriesKind {
        match self {
            ChartId::Precipitation => SeriesKind::Bar,
            _ => SeriesKind::Line,
        }
    }

    fn subject(self) -> &'static str {
        match self {
            ChartId::Temperature => "Temperature",
            ChartId::WindSpeed => "Wind Speed",
            ChartId::UvIndex => "UV Index",
            ChartId::Humidity => "Humidity",
            ChartId::Precipitation => "Precipitation",
        }
    }

    pub fn title(self, city: &str) -> String {
        format!("{} Over Time in {}", self.subject(), city)
    }

    pub fn unit(self) -> &'static str {
        match self.column() {
            Some(column) => column.unit(),
            None => "°C",
        }
    }

    pub fn y_axis_label(self) -> String {
        match self.unit() {
            "" => self.subject().to_string(),
            unit => format!("{} ({})", self.subject(), unit),
        }
    }
}

/// Everything a view needs to draw one chart.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ChartOutput {
    pub id: ChartId,
    pub title: String,
    pub kind: SeriesKind,
    pub y_axis_label: String,
    pub series: Vec<Series>,
}

impl ChartOutput {
    pub fn new(id: ChartId, city: &str, series: Vec<Series>) -> Self {
        Self {
            id,
            title: id.title(city),
            kind: id.kind(),
            y_axis_label: id.y_axis_label(),
            series,
        }
    }

    pub fn point_count(&self) -> usize {
        self.series.iter().map(|s| s.points.len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn titles_include_city() {
        assert_eq!(ChartId::Temperature.title("Ankara"), "Temperature Over Time in Ankara");
        assert_eq!(ChartId::WindSpeed.title("Ankara"), "Wind Speed Over Time in Ankara");
        assert_eq!(ChartId::UvIndex.title("Ankara"), "UV Index Over Time in Ankara");
        assert_eq!(ChartId::Humidity.title("Ankara"), "Humidity Over Time in Ankara");
        assert_eq!(
            ChartId::Precipitation.title("Ankara"),
            "Precipitation Over Time in Ankara"
        );
    }

    #[test]
    fn only_precipitation_is_a_bar_chart() {
        for id in ChartId::ALL {
            let expected = if id == ChartId::Precipitation {
                SeriesKind::Bar
            } else {
                SeriesKind::Line
            };
            assert_eq!(id.kind(), expected, "{:?}", id);
        }
    }

    #[test]
    fn single_metric_charts_have_fixed_columns() {
        assert_eq!(ChartId::Temperature.column(), None);
        assert_eq!(ChartId::WindSpeed.column(), Some(Column::MaxWindKph));
        assert_eq!(ChartId::UvIndex.column(), Some(Column::Uv));
        assert_eq!(ChartId::Humidity.column(), Some(Column::AvgHumidity));
        assert_eq!(ChartId::Precipitation.column(), Some(Column::TotalPrecipMm));
    }

    #[test]
    fn axis_labels_carry_units() {
        assert_eq!(ChartId::Temperature.y_axis_label(), "Temperature (°C)");
        assert_eq!(ChartId::UvIndex.y_axis_label(), "UV Index");
        assert_eq!(ChartId::Precipitation.y_axis_label(), "Precipitation (mm)");
    }

    #[test]
    fn empty_chart_has_no_points() {
        let chart = ChartOutput::new(ChartId::Temperature, "Bursa", Vec::new());
        assert_eq!(chart.point_count(), 0);
        assert_eq!(chart.title, "Temperature Over Time in Bursa");
    }
}
