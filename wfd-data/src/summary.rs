//! Summary statistics over filtered rows.

use serde::Serialize;
use wfd_core::ForecastRow;

/// The four figures shown in the summary panel.
///
/// Mean, maximum and minimum do not exist for zero rows; they are `None`
/// then, and the panel shows them as "no data". The precipitation total of
/// zero rows is `0.0`.
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct Summary {
    pub row_count: usize,
    /// Mean of `avg_temp_c`.
    pub avg_temp: Option<f64>,
    /// Maximum of `max_temp_c`.
    pub max_temp: Option<f64>,
    /// Minimum of `min_temp_c`.
    pub min_temp: Option<f64>,
    /// Sum of `total_precip_mm`.
    pub total_precip: f64,
}

impl Summary {
    pub fn has_data(&self) -> bool {
        self.row_count > 0
    }
}

/// Compute the summary statistics of `rows` in a single pass.
pub fn summarize(rows: &[&ForecastRow]) -> Summary {
    let mut avg_sum = 0.0;
    let mut max_temp: Option<f64> = None;
    let mut min_temp: Option<f64> = None;
    let mut total_precip = 0.0;

    for row in rows {
        avg_sum += row.avg_temp_c;
        max_temp = Some(max_temp.map_or(row.max_temp_c, |m| m.max(row.max_temp_c)));
        min_temp = Some(min_temp.map_or(row.min_temp_c, |m| m.min(row.min_temp_c)));
        total_precip += row.total_precip_mm;
    }

    let avg_temp = if rows.is_empty() {
        None
    } else {
        Some(avg_sum / rows.len() as f64)
    };

    Summary {
        row_count: rows.len(),
        avg_temp,
        max_temp,
        min_temp,
        total_precip,
    }
}
