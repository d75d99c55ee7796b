use chrono::NaiveDate;

use super::ValidationError;

/// Normalize a form input: trimmed-empty strings become `None` so they
/// are omitted from the serialized draft instead of written as `""`.
pub fn none_if_empty(value: String) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value)
    }
}

/// Check an optional ISO-8601 date field (`YYYY-MM-DD`). Absent values
/// pass; present values must parse.
pub fn parse_iso_date(
    field: &'static str,
    value: Option<&str>,
) -> Result<(), ValidationError> {
    match value {
        None => Ok(()),
        Some(raw) => NaiveDate::parse_from_str(raw, "%Y-%m-%d")
            .map(|_| ())
            .map_err(|_| {
                ValidationError::invalid(field, format!("'{raw}' is not a date (YYYY-MM-DD)"))
            }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_and_blank_become_none() {
        assert_eq!(none_if_empty(String::new()), None);
        assert_eq!(none_if_empty("   ".to_string()), None);
        assert_eq!(none_if_empty("PP-500".to_string()), Some("PP-500".to_string()));
    }

    #[test]
    fn iso_dates_validate() {
        assert!(parse_iso_date("order_date", None).is_ok());
        assert!(parse_iso_date("order_date", Some("2025-02-28")).is_ok());
        assert!(parse_iso_date("order_date", Some("28/02/2025")).is_err());
        assert!(parse_iso_date("order_date", Some("2025-13-01")).is_err());
    }
}
