//! Date helpers shared by the loader, the database layer and chart payloads.

use chrono::NaiveDate;

/// Date format used by the `mart_forecast_day` export and chart payloads.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Format a NaiveDate as "YYYY-MM-DD"
pub fn format_date(date: &NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Parse a date string in "YYYY-MM-DD" format.
///
/// Surrounding whitespace is ignored. A trailing time component, as written by
/// some database exports (`2024-05-01 00:00:00`), is dropped.
pub fn parse_date(s: &str) -> anyhow::Result<NaiveDate> {
    let trimmed = s.trim();
    let day = trimmed.split([' ', 'T']).next().unwrap_or(trimmed);
    Ok(NaiveDate::parse_from_str(day, DATE_FORMAT)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_date() {
        let date = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();
        assert_eq!(format_date(&date), "2024-05-01");
    }

    #[test]
    fn test_parse_date() {
        let date = parse_date("2024-05-01").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2024, 5, 1).unwrap());
    }

    #[test]
    fn test_parse_date_with_time_suffix() {
        let expected = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();
        assert_eq!(parse_date(" 2024-05-01 00:00:00").unwrap(), expected);
        assert_eq!(parse_date("2024-05-01T00:00:00").unwrap(), expected);
    }

    #[test]
    fn test_parse_date_rejects_garbage() {
        assert!(parse_date("20240501").is_err());
        assert!(parse_date("").is_err());
        assert!(parse_date("2024-13-01").is_err());
    }
}
