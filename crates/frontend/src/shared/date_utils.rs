//! Display formatting for gateway date/timestamp strings.

use chrono::{DateTime, NaiveDate};

/// Format an ISO date (`YYYY-MM-DD`) for table cells. Unparseable or
/// absent values fall back to a dash.
pub fn format_date(value: Option<&str>) -> String {
    match value {
        None => "-".to_string(),
        Some(raw) => NaiveDate::parse_from_str(raw, "%Y-%m-%d")
            .map(|d| d.format("%d %b %Y").to_string())
            .unwrap_or_else(|_| raw.to_string()),
    }
}

/// Format an RFC 3339 timestamp down to minutes; falls back to the raw
/// string when the gateway sends something unexpected.
pub fn format_datetime(value: Option<&str>) -> String {
    match value {
        None => "-".to_string(),
        Some(raw) => DateTime::parse_from_rfc3339(raw)
            .map(|dt| dt.format("%Y-%m-%d %H:%M").to_string())
            .unwrap_or_else(|_| raw.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dates_format_or_fall_back() {
        assert_eq!(format_date(Some("2026-02-28")), "28 Feb 2026");
        assert_eq!(format_date(Some("soon")), "soon");
        assert_eq!(format_date(None), "-");
    }

    #[test]
    fn timestamps_format_to_minutes() {
        assert_eq!(
            format_datetime(Some("2026-02-28T13:45:12+00:00")),
            "2026-02-28 13:45"
        );
        assert_eq!(format_datetime(None), "-");
    }
}
