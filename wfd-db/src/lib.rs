//! SQLite layer for daily weather forecast data.
//!
//! This crate is the data-loading collaborator of the dashboard: it holds the
//! `mart_forecast_day` table, loads it from CSV exports, and reads it back as
//! typed [`wfd_core::ForecastRow`]s in source order.
//!
//! # Usage
//!
//! ```rust
//! use wfd_db::Database;
//!
//! let db = Database::new().unwrap();
//! db.load_forecast_days(
//!     "city,date,min_temp_c,max_temp_c,avg_temp_c,max_wind_kph,uv,avg_humidity,total_precip_mm\n\
//!      Istanbul,2024-05-01,12.1,19.8,15.6,22.3,6.0,71,0.4\n",
//! ).unwrap();
//!
//! let rows = db.query_forecast_days().unwrap();
//! assert_eq!(rows.len(), 1);
//! let cities = db.query_city_overview().unwrap();
//! assert_eq!(cities[0].city, "Istanbul");
//! assert_eq!(cities[0].days, 1);
//! ```
//!
//! # Tables
//!
//! See [`schema::create_schema`] for the full SQL schema.

pub mod schema;
mod loader;
mod queries;
pub mod models;

use anyhow::Context;
use rusqlite::Connection;
use std::cell::RefCell;
use std::path::Path;
use std::rc::Rc;

/// SQLite database holding the `mart_forecast_day` table.
///
/// Cheaply cloneable (via `Rc`). The database is only used while building
/// the dataset at startup; the dashboard itself works on the immutable rows
/// read out of it.
#[derive(Clone)]
pub struct Database {
    conn: Rc<RefCell<Connection>>,
}

impl Database {
    /// Create a new in-memory database with the schema applied.
    ///
    /// The database is empty after creation; use the `load_*` methods
    /// to populate it.
    pub fn new() -> anyhow::Result<Self> {
        let conn = Connection::open_in_memory()?;
        Self::with_connection(conn)
    }

    /// Open (or create) a database file and make sure the schema exists.
    pub fn open(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let conn = Connection::open(path)
            .with_context(|| format!("failed to open database '{}'", path.display()))?;
        log::info!("[WFD Debug] db: opened {}", path.display());
        Self::with_connection(conn)
    }

    fn with_connection(conn: Connection) -> anyhow::Result<Self> {
        conn.execute_batch(schema::create_schema())?;
        Ok(Self {
            conn: Rc::new(RefCell::new(conn)),
        })
    }
}
