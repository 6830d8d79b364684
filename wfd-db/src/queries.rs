//! Typed query methods for reading forecast data back out of the database.
//!
//! Every query keeps the source order of the export (`rowid` order); the
//! database never sorts forecast rows on its own.

use crate::models::CityInfo;
use crate::Database;
use anyhow::Context;
use wfd_core::dates::parse_date;
use wfd_core::forecast_row::ensure_unique_days;
use wfd_core::ForecastRow;

/// Row as stored, before the date column is parsed.
struct RawForecastRow {
    city: String,
    date: String,
    min_temp_c: f64,
    max_temp_c: f64,
    avg_temp_c: f64,
    max_wind_kph: f64,
    uv: f64,
    avg_humidity: f64,
    total_precip_mm: f64,
}

impl RawForecastRow {
    fn into_forecast_row(self) -> anyhow::Result<ForecastRow> {
        let date = parse_date(&self.date)
            .with_context(|| format!("invalid date '{}' for {}", self.date, self.city))?;
        let row = ForecastRow {
            city: self.city,
            date,
            min_temp_c: self.min_temp_c,
            max_temp_c: self.max_temp_c,
            avg_temp_c: self.avg_temp_c,
            max_wind_kph: self.max_wind_kph,
            uv: self.uv,
            avg_humidity: self.avg_humidity,
            total_precip_mm: self.total_precip_mm,
        };
        row.validate()
            .with_context(|| format!("invalid forecast for {} on {}", row.city, row.date))?;
        Ok(row)
    }
}

impl Database {
    /// Equivalent of `SELECT * FROM mart_forecast_day`: every forecast row,
    /// validated, in source order.
    pub fn query_forecast_days(&self) -> anyhow::Result<Vec<ForecastRow>> {
        let conn = self.conn.borrow();
        let mut stmt = conn.prepare(
            "SELECT city, date, min_temp_c, max_temp_c, avg_temp_c,
                    max_wind_kph, uv, avg_humidity, total_precip_mm
             FROM mart_forecast_day
             ORDER BY rowid",
        )?;
        let raw_rows = stmt
            .query_map([], |row| {
                Ok(RawForecastRow {
                    city: row.get(0)?,
                    date: row.get(1)?,
                    min_temp_c: row.get(2)?,
                    max_temp_c: row.get(3)?,
                    avg_temp_c: row.get(4)?,
                    max_wind_kph: row.get(5)?,
                    uv: row.get(6)?,
                    avg_humidity: row.get(7)?,
                    total_precip_mm: row.get(8)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;

        let rows = raw_rows
            .into_iter()
            .map(RawForecastRow::into_forecast_row)
            .collect::<anyhow::Result<Vec<_>>>()?;
        // Files created outside this crate may lack the UNIQUE constraint.
        ensure_unique_days(&rows)?;
        log::info!(
            "[WFD Debug] query: query_forecast_days returned {} records",
            rows.len()
        );
        Ok(rows)
    }

    /// Per-city day counts and date span, in order of first appearance.
    pub fn query_city_overview(&self) -> anyhow::Result<Vec<CityInfo>> {
        let conn = self.conn.borrow();
        let mut stmt = conn.prepare(
            "SELECT city, COUNT(*), MIN(date), MAX(date)
             FROM mart_forecast_day
             GROUP BY city
             ORDER BY MIN(rowid)",
        )?;
        let overview = stmt
            .query_map([], |row| {
                Ok(CityInfo {
                    city: row.get(0)?,
                    days: row.get(1)?,
                    first_date: row.get(2)?,
                    last_date: row.get(3)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;
        log::info!(
            "[WFD Debug] query: query_city_overview returned {} cities",
            overview.len()
        );
        Ok(overview)
    }
}
