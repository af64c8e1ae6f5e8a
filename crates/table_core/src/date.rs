//! Value accessor for datepicker cells.

use chrono::{DateTime, NaiveDate};
use serde_json::Value;
use thiserror::Error;

/// Storage format written by datepicker commits.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
/// A stored datepicker value that cannot be read as a date.
pub enum DateValueError {
    /// Text that is neither `YYYY-MM-DD` nor an RFC 3339 timestamp.
    #[error("invalid date string `{0}`")]
    InvalidString(String),
    /// A non-string, non-null JSON value.
    #[error("unsupported date value `{0}`")]
    UnsupportedValue(String),
}

/// Reads a stored cell value as a date; null and blank strings mean "no date".
///
/// # Errors
///
/// Returns [`DateValueError`] for text or JSON values that do not describe a date.
pub fn parse_date_value(value: &Value) -> Result<Option<NaiveDate>, DateValueError> {
    match value {
        Value::Null => Ok(None),
        Value::String(text) if text.trim().is_empty() => Ok(None),
        Value::String(text) => {
            let text = text.trim();
            NaiveDate::parse_from_str(text, DATE_FORMAT)
                .or_else(|_| DateTime::parse_from_rfc3339(text).map(|dt| dt.date_naive()))
                .map(Some)
                .map_err(|_| DateValueError::InvalidString(text.to_string()))
        }
        other => Err(DateValueError::UnsupportedValue(other.to_string())),
    }
}

/// Value written into the row when a date is picked.
pub fn date_to_value(date: Option<NaiveDate>) -> Value {
    date.map(|date| Value::String(date.format(DATE_FORMAT).to_string()))
        .unwrap_or(Value::Null)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
    }

    #[test]
    fn accepts_plain_dates_and_timestamps() {
        assert_eq!(
            parse_date_value(&json!("2024-02-29")),
            Ok(Some(date(2024, 2, 29)))
        );
        assert_eq!(
            parse_date_value(&json!("2024-03-01T10:30:00Z")),
            Ok(Some(date(2024, 3, 1)))
        );
    }

    #[test]
    fn blank_values_mean_no_date() {
        assert_eq!(parse_date_value(&Value::Null), Ok(None));
        assert_eq!(parse_date_value(&json!("  ")), Ok(None));
    }

    #[test]
    fn invalid_values_are_errors() {
        assert_eq!(
            parse_date_value(&json!("2023-02-30")),
            Err(DateValueError::InvalidString("2023-02-30".to_string()))
        );
        assert!(matches!(
            parse_date_value(&json!(42)),
            Err(DateValueError::UnsupportedValue(_))
        ));
    }

    #[test]
    fn picked_dates_store_as_iso_strings() {
        assert_eq!(date_to_value(Some(date(2024, 7, 4))), json!("2024-07-04"));
        assert_eq!(date_to_value(None), Value::Null);
    }
}
