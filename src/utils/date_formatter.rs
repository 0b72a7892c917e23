//! Date validation and formatting for date-parameterized endpoints

use chrono::{DateTime, Local, NaiveDate, TimeZone};

use crate::error::{NhlError, Result};

const DATE_FORMAT: &str = "%Y-%m-%d";

/// A date supplied by the caller, either as text or as a structured value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateInput {
    /// Must match `YYYY-MM-DD` exactly and name a real calendar day
    Text(String),
    /// A calendar date
    Date(NaiveDate),
    /// Milliseconds since the Unix epoch, read in the local time zone
    TimestampMillis(i64),
}

impl From<&str> for DateInput {
    fn from(value: &str) -> Self {
        DateInput::Text(value.to_string())
    }
}

impl From<String> for DateInput {
    fn from(value: String) -> Self {
        DateInput::Text(value)
    }
}

impl From<&String> for DateInput {
    fn from(value: &String) -> Self {
        DateInput::Text(value.clone())
    }
}

impl From<NaiveDate> for DateInput {
    fn from(value: NaiveDate) -> Self {
        DateInput::Date(value)
    }
}

impl<Tz: TimeZone> From<DateTime<Tz>> for DateInput {
    fn from(value: DateTime<Tz>) -> Self {
        DateInput::Date(value.date_naive())
    }
}

/// Checks for the exact `\d{4}-\d{2}-\d{2}` shape.
fn has_date_shape(text: &str) -> bool {
    let bytes = text.as_bytes();
    bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        })
}

/// Formats a date as `YYYY-MM-DD`, the form the NHL API expects.
///
/// # Returns
/// * `Ok(String)` - Text input is returned unchanged when valid; structured input is reformatted
/// * `Err(NhlError::Validation)` - Wrong text shape, a day that does not exist,
///   or a timestamp outside the representable range
///
/// # Example
/// ```
/// use chrono::NaiveDate;
/// use nhl_api::utils::format_date;
///
/// assert_eq!(format_date("2024-02-29").unwrap(), "2024-02-29");
/// assert!(format_date("2023-02-29").is_err());
///
/// let date = NaiveDate::from_ymd_opt(2025, 1, 5).unwrap();
/// assert_eq!(format_date(date).unwrap(), "2025-01-05");
/// ```
pub fn format_date(date: impl Into<DateInput>) -> Result<String> {
    match date.into() {
        DateInput::Text(text) => {
            if !has_date_shape(&text) {
                return Err(NhlError::validation(format!(
                    "Invalid date format: \"{text}\". Expected YYYY-MM-DD"
                )));
            }
            if NaiveDate::parse_from_str(&text, DATE_FORMAT).is_err() {
                return Err(NhlError::validation(format!(
                    "Invalid date: \"{text}\". Date is not valid"
                )));
            }
            Ok(text)
        }
        DateInput::Date(date) => Ok(date.format(DATE_FORMAT).to_string()),
        DateInput::TimestampMillis(millis) => Local
            .timestamp_millis_opt(millis)
            .single()
            .map(|dt| dt.date_naive().format(DATE_FORMAT).to_string())
            .ok_or_else(|| NhlError::validation(format!("Invalid date value: {millis}"))),
    }
}

/// Today's local date as `YYYY-MM-DD`, captured when called.
pub fn today_date() -> String {
    Local::now().date_naive().format(DATE_FORMAT).to_string()
}

/// Parses a strict `YYYY-MM-DD` string into a [`NaiveDate`].
pub fn parse_date(date: &str) -> Result<NaiveDate> {
    let formatted = format_date(date)?;
    NaiveDate::parse_from_str(&formatted, DATE_FORMAT)
        .map_err(|e| NhlError::validation(format!("Invalid date: \"{date}\". {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Utc};

    #[test]
    fn test_valid_strings_are_returned_unchanged() {
        for date in ["2024-01-15", "2024-02-29", "2000-02-29", "1999-12-31", "2025-10-07"] {
            assert_eq!(format_date(date).unwrap(), date);
            assert_eq!(format_date(date.to_string()).unwrap(), date);
        }
    }

    #[test]
    fn test_wrong_shape_is_rejected() {
        for date in [
            "",
            "2024-1-15",
            "2024/01/15",
            "20240115",
            "2024-01-15T00:00:00",
            " 2024-01-15",
            "2024-01-15 ",
            "24-01-15",
            "abcd-ef-gh",
            "2024-01-1a",
        ] {
            let error = format_date(date).unwrap_err();
            assert!(error.is_validation(), "input {date:?}");
            assert!(error.to_string().contains("Expected YYYY-MM-DD"));
        }
    }

    #[test]
    fn test_impossible_days_are_rejected() {
        for date in ["2023-02-29", "2024-13-01", "2024-00-10", "2024-04-31", "2024-01-00"] {
            let error = format_date(date).unwrap_err();
            assert!(error.is_validation(), "input {date:?}");
            assert!(error.to_string().contains("Date is not valid"));
        }
    }

    #[test]
    fn test_structured_dates_round_trip_to_same_day() {
        let naive = NaiveDate::from_ymd_opt(2024, 3, 9).unwrap();
        let formatted = format_date(naive).unwrap();
        assert_eq!(formatted, "2024-03-09");
        assert_eq!(parse_date(&formatted).unwrap(), naive);

        let utc = Utc.with_ymd_and_hms(2025, 11, 30, 12, 0, 0).unwrap();
        assert_eq!(format_date(utc).unwrap(), "2025-11-30");
    }

    #[test]
    fn test_timestamps_format_in_local_time() {
        let now = Local::now();
        let formatted = format_date(DateInput::TimestampMillis(now.timestamp_millis())).unwrap();
        assert_eq!(formatted, now.date_naive().format("%Y-%m-%d").to_string());
    }

    #[test]
    fn test_out_of_range_timestamp_is_rejected() {
        let error = format_date(DateInput::TimestampMillis(i64::MAX)).unwrap_err();
        assert!(error.is_validation());
    }

    #[test]
    fn test_today_date_matches_local_clock() {
        let today = today_date();
        let parsed = parse_date(&today).unwrap();
        let now = Local::now().date_naive();
        // Allow for the clock crossing midnight between the two reads.
        assert!((now - parsed).num_days().abs() <= 1);
        assert_eq!(parsed.year().to_string().len(), 4);
    }

    #[test]
    fn test_parse_date_rejects_invalid_input() {
        assert!(parse_date("2024-02-30").unwrap_err().is_validation());
        assert!(parse_date("yesterday").unwrap_err().is_validation());
    }
}
