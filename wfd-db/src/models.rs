//! Query result model structs.

use serde::Serialize;

/// Per-city overview used to populate the city selector.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CityInfo {
    pub city: String,
    /// Number of forecast days stored for the city.
    pub days: i64,
    /// Earliest forecast day (YYYY-MM-DD).
    pub first_date: String,
    /// Latest forecast day (YYYY-MM-DD).
    pub last_date: String,
}
