//! Calendar date parsing and formatting for the `YYYY-MM-DD` wire format.
//!
//! Missing dates are `Option::None` internally and the empty string on the
//! wire.

use chrono::NaiveDate;

use crate::error::AppError;

/// The only accepted date text format.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parses a required `YYYY-MM-DD` date.
///
/// Only the zero-padded ten-character form is accepted, so `1970-1-1` and
/// `+1970-01-01` are rejected even though chrono alone would parse them.
///
/// # Errors
///
/// Returns [`AppError::InvalidDateFormat`] naming `field` on any mismatch.
pub fn parse_date(field: &str, text: &str) -> Result<NaiveDate, AppError> {
    let well_formed = text.len() == 10
        && text.bytes().enumerate().all(|(i, b)| match i {
            4 | 7 => b == b'-',
            _ => b.is_ascii_digit(),
        });

    if !well_formed {
        return Err(AppError::invalid_date_format(field, text));
    }

    NaiveDate::parse_from_str(text, DATE_FORMAT)
        .map_err(|_| AppError::invalid_date_format(field, text))
}

/// Parses an optional date where the empty string means "unset".
///
/// # Errors
///
/// Returns [`AppError::InvalidDateFormat`] if `text` is non-empty and invalid.
pub fn parse_optional_date(field: &str, text: &str) -> Result<Option<NaiveDate>, AppError> {
    if text.is_empty() {
        return Ok(None);
    }
    parse_date(field, text).map(Some)
}

pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Formats an optional date, yielding an empty string when unset.
pub fn format_optional_date(date: Option<NaiveDate>) -> String {
    date.map(format_date).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_date() {
        let date = parse_date("birth_date", "1970-01-01").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(1970, 1, 1).unwrap());
    }

    #[test]
    fn test_parse_rejects_garbage() {
        let err = parse_date("birth_date", "not-a-date").unwrap_err();
        assert!(matches!(err, AppError::InvalidDateFormat { .. }));
    }

    #[test]
    fn test_parse_rejects_unpadded_and_signed() {
        assert!(parse_date("birth_date", "1970-1-1").is_err());
        assert!(parse_date("birth_date", "+1970-01-01").is_err());
        assert!(parse_date("birth_date", "1970/01/01").is_err());
        assert!(parse_date("birth_date", "").is_err());
    }

    #[test]
    fn test_parse_rejects_impossible_calendar_date() {
        assert!(parse_date("birth_date", "2023-02-30").is_err());
        assert!(parse_date("birth_date", "2023-13-01").is_err());
        assert!(parse_date("birth_date", "2024-02-29").is_ok());
    }

    #[test]
    fn test_optional_empty_is_unset() {
        assert_eq!(parse_optional_date("death_date", "").unwrap(), None);
    }

    #[test]
    fn test_optional_invalid_is_error() {
        assert!(parse_optional_date("death_date", "yesterday").is_err());
    }

    #[test]
    fn test_format_round_trip() {
        let text = "1999-12-31";
        let date = parse_date("death_date", text).unwrap();
        assert_eq!(format_date(date), text);
        assert_eq!(format_optional_date(Some(date)), text);
        assert_eq!(format_optional_date(None), "");
    }
}
