//! Data processing for the forecast dashboard.
//!
//! Turns the immutable forecast dataset into what the charts and the summary
//! panel display:
//!
//! - [`store`]: the read-only dataset and its city list
//! - [`filter`]: restricting the dataset to one city
//! - [`series`]: projecting filtered rows into (date, value) series
//! - [`summary`]: mean/max/min/sum statistics over filtered rows
//!
//! Everything here is pure and synchronous; no function keeps state between
//! calls.
//!
//! ```rust
//! use chrono::NaiveDate;
//! use wfd_core::{ForecastRow, TemperatureMetric};
//! use wfd_data::{filter_by_city, project_temperature, summarize, DatasetStore};
//!
//! let row = |city: &str, day: u32, avg: f64| ForecastRow {
//!     city: city.to_string(),
//!     date: NaiveDate::from_ymd_opt(2024, 5, day).unwrap(),
//!     min_temp_c: avg - 5.0,
//!     max_temp_c: avg + 5.0,
//!     avg_temp_c: avg,
//!     max_wind_kph: 10.0,
//!     uv: 5.0,
//!     avg_humidity: 60.0,
//!     total_precip_mm: 1.0,
//! };
//! let store = DatasetStore::new(vec![row("Istanbul", 1, 15.0), row("Ankara", 1, 12.0)]);
//!
//! let view = filter_by_city(&store, "Ankara");
//! let series = project_temperature(&view, &[TemperatureMetric::AvgTempC]);
//! assert_eq!(series[0].points[0].value, 12.0);
//! assert_eq!(summarize(&view).avg_temp, Some(12.0));
//! ```

pub mod filter;
pub mod series;
pub mod store;
pub mod summary;

pub use filter::{filter_by_city, FilteredView};
pub use series::{project_column, project_temperature, Point, Series};
pub use store::DatasetStore;
pub use summary::{summarize, Summary};
