//! Command line configuration.
//!
//! Every option can also come from the environment, so a deployment can set
//! `WFD_DATA` and `WFD_DEFAULT_CITY` once instead of passing flags.

use clap::{Args, ValueEnum};
use std::path::{Path, PathBuf};
use wfd_dashboard::DEFAULT_CITY;

/// Where the forecast dataset is read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataSource {
    /// CSV export of `mart_forecast_day`, optionally gzip-compressed.
    Csv(PathBuf),
    /// SQLite database file containing `mart_forecast_day`.
    Sqlite(PathBuf),
}

impl DataSource {
    /// Pick the source kind from the file extension. `.db`, `.sqlite` and
    /// `.sqlite3` are databases; anything else is read as CSV.
    pub fn from_path(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        let is_sqlite = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| {
                matches!(
                    ext.to_ascii_lowercase().as_str(),
                    "db" | "sqlite" | "sqlite3"
                )
            })
            .unwrap_or(false);
        if is_sqlite {
            DataSource::Sqlite(path.to_path_buf())
        } else {
            DataSource::Csv(path.to_path_buf())
        }
    }

    pub fn path(&self) -> &Path {
        match self {
            DataSource::Csv(path) | DataSource::Sqlite(path) => path,
        }
    }
}

/// Dataset options shared by every dashboard command.
#[derive(Args, Debug, Clone)]
pub struct DataArgs {
    /// Forecast data: a .csv / .csv.gz export or a .db / .sqlite database
    #[arg(short = 'd', long, env = "WFD_DATA")]
    pub data: PathBuf,

    /// City selected at startup when present in the data
    #[arg(long, env = "WFD_DEFAULT_CITY", default_value = DEFAULT_CITY)]
    pub default_city: String,
}

/// Output format of rendered dashboards.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Plain text tables
    #[default]
    Text,
    /// JSON chart payloads
    Json,
}

/// Resolved dashboard configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardConfig {
    pub source: DataSource,
    pub default_city: String,
}

impl From<DataArgs> for DashboardConfig {
    fn from(args: DataArgs) -> Self {
        Self {
            source: DataSource::from_path(&args.data),
            default_city: args.default_city,
        }
    }
}
