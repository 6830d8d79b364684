//! Restricting the dataset to the selected city.

use crate::store::DatasetStore;
use std::ops::Deref;
use wfd_core::ForecastRow;

/// Rows of one city, borrowed from the store, in dataset order.
///
/// Rebuilt for every selection change and dropped after rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct FilteredView<'a> {
    rows: Vec<&'a ForecastRow>,
}

impl<'a> FilteredView<'a> {
    pub fn rows(&self) -> &[&'a ForecastRow] {
        &self.rows
    }
}

impl<'a> Deref for FilteredView<'a> {
    type Target = [&'a ForecastRow];

    fn deref(&self) -> &Self::Target {
        &self.rows
    }
}

/// Select the rows whose city equals `city`, keeping dataset order.
///
/// A city that is not in the dataset (a stale selector value, for example)
/// yields an empty view rather than an error.
pub fn filter_by_city<'a>(store: &'a DatasetStore, city: &str) -> FilteredView<'a> {
    let rows: Vec<&ForecastRow> = store.rows().iter().filter(|row| row.city == city).collect();
    log::debug!("filter: {} rows for '{}'", rows.len(), city);
    FilteredView { rows }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn row(city: &str, day: u32, avg: f64) -> ForecastRow {
        ForecastRow {
            city: city.to_string(),
            date: NaiveDate::from_ymd_opt(2024, 5, day).unwrap(),
            min_temp_c: avg - 4.0,
            max_temp_c: avg + 4.0,
            avg_temp_c: avg,
            max_wind_kph: 10.0,
            uv: 4.0,
            avg_humidity: 55.0,
            total_precip_mm: 0.5,
        }
    }

    fn two_city_store() -> DatasetStore {
        DatasetStore::new(vec![
            row("Istanbul", 1, 15.0),
            row("Ankara", 1, 12.0),
            row("Istanbul", 2, 16.0),
            row("Ankara", 2, 13.0),
            row("Istanbul", 3, 17.0),
        ])
    }

    #[test]
    fn every_city_filters_to_its_own_rows_in_order() {
        let store = two_city_store();
        for city in store.cities() {
            let view = filter_by_city(&store, city);
            assert!(view.len() <= store.len());
            assert!(view.iter().all(|r| &r.city == city), "Only rows of {} expected", city);

            let expected: Vec<&ForecastRow> =
                store.rows().iter().filter(|r| &r.city == city).collect();
            assert_eq!(view.rows(), expected.as_slice(), "Relative order must be kept");
        }
    }

    #[test]
    fn selecting_ankara_yields_two_rows() {
        let store = two_city_store();
        let view = filter_by_city(&store, "Ankara");
        assert_eq!(view.len(), 2);
        assert_eq!(view[0].avg_temp_c, 12.0);
        assert_eq!(view[1].avg_temp_c, 13.0);
    }

    #[test]
    fn unknown_city_is_empty() {
        let store = two_city_store();
        assert!(filter_by_city(&store, "NonexistentCity").is_empty());
    }

    #[test]
    fn city_match_is_exact() {
        let store = two_city_store();
        assert!(filter_by_city(&store, "ankara").is_empty());
        assert!(filter_by_city(&store, "Ankara ").is_empty());
    }

    #[test]
    fn filter_does_not_touch_store() {
        let store = two_city_store();
        let before = store.rows().to_vec();
        let _ = filter_by_city(&store, "Istanbul");
        assert_eq!(store.rows(), before.as_slice());
    }
}
