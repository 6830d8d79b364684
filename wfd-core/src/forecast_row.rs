use crate::column::Column;
use crate::dates::parse_date;
use anyhow::{bail, Context};
use chrono::NaiveDate;
use csv::{ReaderBuilder, Trim};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::io::Read;

/// One daily forecast for one city, as stored in `mart_forecast_day`.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct ForecastRow {
    pub city: String,
    /// Forecast day, unique per city. Used as the x-axis key of every chart.
    pub date: NaiveDate,
    pub min_temp_c: f64,
    pub max_temp_c: f64,
    pub avg_temp_c: f64,
    pub max_wind_kph: f64,
    pub uv: f64,
    pub avg_humidity: f64,
    pub total_precip_mm: f64,
}

/// Raw CSV record. Dates are parsed separately so both plain dates and
/// timestamp-suffixed dates from database exports are accepted.
#[derive(Debug, Deserialize)]
struct ForecastRecord {
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

impl TryFrom<ForecastRecord> for ForecastRow {
    type Error = anyhow::Error;

    fn try_from(record: ForecastRecord) -> Result<Self, Self::Error> {
        let date = parse_date(&record.date)
            .with_context(|| format!("invalid date '{}'", record.date))?;
        let row = ForecastRow {
            city: record.city,
            date,
            min_temp_c: record.min_temp_c,
            max_temp_c: record.max_temp_c,
            avg_temp_c: record.avg_temp_c,
            max_wind_kph: record.max_wind_kph,
            uv: record.uv,
            avg_humidity: record.avg_humidity,
            total_precip_mm: record.total_precip_mm,
        };
        row.validate()?;
        Ok(row)
    }
}

impl ForecastRow {
    /// Value of a numeric column.
    pub fn value(&self, column: Column) -> f64 {
        match column {
            Column::MinTempC => self.min_temp_c,
            Column::MaxTempC => self.max_temp_c,
            Column::AvgTempC => self.avg_temp_c,
            Column::MaxWindKph => self.max_wind_kph,
            Column::Uv => self.uv,
            Column::AvgHumidity => self.avg_humidity,
            Column::TotalPrecipMm => self.total_precip_mm,
        }
    }

    /// Reject rows that must never reach the dataset: an empty city or a
    /// non-finite measurement.
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.city.trim().is_empty() {
            bail!("city is empty");
        }
        for column in Column::ALL {
            let value = self.value(column);
            if !value.is_finite() {
                bail!("{} is not a finite number ({})", column, value);
            }
        }
        Ok(())
    }

    /// Parse a `mart_forecast_day` CSV export.
    ///
    /// The header row must name every column of [`ForecastRow`]; extra columns
    /// are ignored. Any malformed row fails the whole parse, as does a repeated
    /// (city, date) pair. Row order is preserved.
    ///
    /// # Example CSV
    /// ```text
    /// city,date,min_temp_c,max_temp_c,avg_temp_c,max_wind_kph,uv,avg_humidity,total_precip_mm
    /// Istanbul,2024-05-01,12.1,19.8,15.6,22.3,6.0,71,0.4
    /// ```
    pub fn parse_csv<R: Read>(reader: R) -> anyhow::Result<Vec<ForecastRow>> {
        let mut rdr = ReaderBuilder::new()
            .has_headers(true)
            .trim(Trim::All)
            .from_reader(reader);

        let mut rows = Vec::new();
        for (index, result) in rdr.deserialize::<ForecastRecord>().enumerate() {
            // Header is line 1, so data row N sits on line N + 1.
            let line = index + 2;
            let record = result.with_context(|| format!("malformed forecast row at line {}", line))?;
            let row = ForecastRow::try_from(record)
                .with_context(|| format!("invalid forecast row at line {}", line))?;
            rows.push(row);
        }
        ensure_unique_days(&rows)?;
        log::debug!("forecast_row: parsed {} rows", rows.len());
        Ok(rows)
    }
}

/// Fail if any (city, date) pair occurs more than once.
pub fn ensure_unique_days(rows: &[ForecastRow]) -> anyhow::Result<()> {
    let mut seen: HashSet<(&str, NaiveDate)> = HashSet::with_capacity(rows.len());
    for row in rows {
        if !seen.insert((row.city.as_str(), row.date)) {
            bail!("duplicate forecast for {} on {}", row.city, row.date);
        }
    }
    Ok(())
}
