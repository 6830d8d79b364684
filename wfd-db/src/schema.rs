//! SQL schema for the forecast database.
//!
//! The schema is applied as a single batch when the database is opened.

/// Returns the full SQL schema as a single batch string.
///
/// `mart_forecast_day` holds one row per (city, date). Rows are never
/// reordered: queries read them back in `rowid` (insertion) order, which is
/// the order of the source export.
pub fn create_schema() -> &'static str {
    r#"
    CREATE TABLE IF NOT EXISTS mart_forecast_day (
        city TEXT NOT NULL,
        date TEXT NOT NULL,
        min_temp_c REAL NOT NULL,
        max_temp_c REAL NOT NULL,
        avg_temp_c REAL NOT NULL,
        max_wind_kph REAL NOT NULL,
        uv REAL NOT NULL,
        avg_humidity REAL NOT NULL,
        total_precip_mm REAL NOT NULL,
        UNIQUE (city, date)
    );
    CREATE INDEX IF NOT EXISTS idx_forecast_city ON mart_forecast_day(city);
    "#
}
