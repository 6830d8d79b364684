//! Loading functions for populating `mart_forecast_day`.
//!
//! Input is the CSV export of the table (see [`ForecastRow::parse_csv`] for
//! the format), either plain or gzip-compressed. Loading is all-or-nothing:
//! a malformed row aborts the load and nothing is inserted.

use crate::Database;
use anyhow::Context;
use flate2::read::GzDecoder;
use rusqlite::params;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use wfd_core::dates::format_date;
use wfd_core::ForecastRow;

impl Database {
    /// Load forecast days from a CSV string.
    ///
    /// # Example CSV
    /// ```text
    /// city,date,min_temp_c,max_temp_c,avg_temp_c,max_wind_kph,uv,avg_humidity,total_precip_mm
    /// Istanbul,2024-05-01,12.1,19.8,15.6,22.3,6.0,71,0.4
    /// ```
    pub fn load_forecast_days(&self, csv_data: &str) -> anyhow::Result<usize> {
        self.load_forecast_reader(csv_data.as_bytes())
    }

    /// Load forecast days from any CSV byte source.
    pub fn load_forecast_reader<R: Read>(&self, reader: R) -> anyhow::Result<usize> {
        let rows = ForecastRow::parse_csv(reader)?;
        self.insert_forecast_rows(&rows)
    }

    /// Load forecast days from a CSV file. Paths ending in `.gz` are
    /// decompressed on the fly.
    pub fn load_forecast_file(&self, path: impl AsRef<Path>) -> anyhow::Result<usize> {
        let path = path.as_ref();
        let file = File::open(path)
            .with_context(|| format!("failed to open forecast file '{}'", path.display()))?;
        let reader = BufReader::new(file);
        let is_gzip = path
            .extension()
            .map(|ext| ext.eq_ignore_ascii_case("gz"))
            .unwrap_or(false);

        let loaded = if is_gzip {
            self.load_forecast_reader(GzDecoder::new(reader))
        } else {
            self.load_forecast_reader(reader)
        };
        loaded.with_context(|| format!("failed to load forecast file '{}'", path.display()))
    }

    /// Insert already-validated rows in order inside a single transaction.
    ///
    /// Fails (and inserts nothing) if a (city, date) pair is already present.
    pub fn insert_forecast_rows(&self, rows: &[ForecastRow]) -> anyhow::Result<usize> {
        let mut conn = self.conn.borrow_mut();
        let tx = conn.transaction()?;
        {
            let mut stmt = tx.prepare(
                "INSERT INTO mart_forecast_day
                 (city, date, min_temp_c, max_temp_c, avg_temp_c,
                  max_wind_kph, uv, avg_humidity, total_precip_mm)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
            )?;
            for row in rows {
                stmt.execute(params![
                    row.city,
                    format_date(&row.date),
                    row.min_temp_c,
                    row.max_temp_c,
                    row.avg_temp_c,
                    row.max_wind_kph,
                    row.uv,
                    row.avg_humidity,
                    row.total_precip_mm,
                ])
                .with_context(|| format!("failed to insert forecast for {} on {}", row.city, row.date))?;
            }
        }
        tx.commit()?;
        log::info!("[WFD Debug] loader: Loaded {} forecast days", rows.len());
        Ok(rows.len())
    }
}
