//! The read-only forecast dataset.

use crate::filter::{filter_by_city, FilteredView};
use chrono::NaiveDate;
use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use wfd_core::ForecastRow;

/// Immutable, shareable forecast dataset.
///
/// Built once at startup from already-validated rows and never mutated
/// afterwards. Cloning is cheap (two `Arc` bumps), and the store is
/// `Send + Sync`, so any number of dashboard sessions can hold it at once.
#[derive(Debug, Clone)]
pub struct DatasetStore {
    rows: Arc<[ForecastRow]>,
    cities: Arc<[String]>,
}

impl DatasetStore {
    /// Take ownership of the dataset rows. Row order is kept as given.
    pub fn new(rows: Vec<ForecastRow>) -> Self {
        let cities = distinct_cities(&rows);
        warn_unordered_days(&rows);
        log::info!(
            "[WFD Debug] store: {} forecast rows across {} cities",
            rows.len(),
            cities.len()
        );
        Self {
            rows: rows.into(),
            cities: cities.into(),
        }
    }

    /// Every row, in dataset order.
    pub fn rows(&self) -> &[ForecastRow] {
        &self.rows
    }

    /// Distinct cities in order of first appearance.
    pub fn cities(&self) -> &[String] {
        &self.cities
    }

    pub fn contains_city(&self, city: &str) -> bool {
        self.cities.iter().any(|c| c == city)
    }

    /// Rows of one city, in dataset order.
    pub fn rows_for_city(&self, city: &str) -> FilteredView<'_> {
        filter_by_city(self, city)
    }

    /// `preferred` when the dataset has it, otherwise the first city.
    /// `None` only for an empty dataset.
    pub fn default_city(&self, preferred: &str) -> Option<&str> {
        self.cities
            .iter()
            .find(|c| c.as_str() == preferred)
            .or_else(|| self.cities.first())
            .map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

fn distinct_cities(rows: &[ForecastRow]) -> Vec<String> {
    let mut seen = HashSet::new();
    rows.iter()
        .filter(|row| seen.insert(row.city.as_str()))
        .map(|row| row.city.clone())
        .collect()
}

/// Charts plot rows in dataset order, so a city whose dates go backwards
/// would draw a zig-zag line. Such data is kept as is but reported.
fn warn_unordered_days(rows: &[ForecastRow]) {
    let mut last_dates: HashMap<&str, NaiveDate> = HashMap::new();
    let mut reported: HashSet<&str> = HashSet::new();
    for row in rows {
        if let Some(previous) = last_dates.insert(row.city.as_str(), row.date) {
            if row.date < previous && reported.insert(row.city.as_str()) {
                log::warn!(
                    "[WFD Debug] store: dates for {} are not ascending ({} after {}); keeping source order",
                    row.city,
                    row.date,
                    previous
                );
            }
        }
    }
}
