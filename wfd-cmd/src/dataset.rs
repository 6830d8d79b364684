//! Building the dataset store from the configured source.

use crate::config::DataSource;
use anyhow::{bail, Context};
use wfd_data::DatasetStore;
use wfd_db::Database;

/// Open the configured source as a database.
///
/// CSV sources are loaded into a fresh in-memory database; SQLite sources are
/// opened in place and must already exist.
pub fn open_database(source: &DataSource) -> anyhow::Result<Database> {
    match source {
        DataSource::Csv(path) => {
            let db = Database::new()?;
            db.load_forecast_file(path)?;
            Ok(db)
        }
        DataSource::Sqlite(path) => {
            if !path.exists() {
                bail!("database '{}' does not exist", path.display());
            }
            Database::open(path)
        }
    }
}

/// Read every forecast row out of `db` into an immutable store.
pub fn load_store(db: &Database) -> anyhow::Result<DatasetStore> {
    let rows = db
        .query_forecast_days()
        .context("failed to read mart_forecast_day")?;
    Ok(DatasetStore::new(rows))
}

/// Open the source and build the store in one step.
pub fn load_dataset(source: &DataSource) -> anyhow::Result<DatasetStore> {
    let db = open_database(source)?;
    load_store(&db)
}
