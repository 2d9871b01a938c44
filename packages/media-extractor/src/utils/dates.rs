//! Upload date parsing.

use chrono::{DateTime, NaiveDate};

use crate::error::{ExtractionError, Result};

const DATE_FORMATS: [&str; 3] = ["%Y-%m-%d", "%d.%m.%Y", "%Y/%m/%d"];

/// Parse an upload date as services commonly render it.
///
/// Accepts ISO dates, `DD.MM.YYYY` and full RFC 3339 timestamps (the date
/// part is kept).
pub fn parse_upload_date(text: &str) -> Result<NaiveDate> {
    let text = text.trim();

    if let Some(date) = DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(text, format).ok())
    {
        return Ok(date);
    }

    DateTime::parse_from_rfc3339(text)
        .map(|datetime| datetime.date_naive())
        .map_err(|e| ExtractionError::parsing_with(format!("unknown upload date format: {text}"), e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_formats() {
        let expected = NaiveDate::from_ymd_opt(2018, 12, 24).unwrap();

        assert_eq!(parse_upload_date("2018-12-24").unwrap(), expected);
        assert_eq!(parse_upload_date("24.12.2018").unwrap(), expected);
        assert_eq!(parse_upload_date("2018/12/24").unwrap(), expected);
        assert_eq!(parse_upload_date("2018-12-24T17:03:00+01:00").unwrap(), expected);
    }

    #[test]
    fn test_relative_dates_are_not_parsed() {
        assert!(parse_upload_date("3 weeks ago").is_err());
    }
}
