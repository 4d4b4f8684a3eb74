//! Lenient date parsing for profile payloads.
//!
//! The web client sends dates either as full ISO-8601 timestamps or as
//! plain `YYYY-MM-DD` strings from date pickers. Both normalize to a UTC
//! timestamp; a plain date becomes midnight UTC.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

use crate::errors::AppError;

pub fn parse_date(value: &str) -> Result<DateTime<Utc>, AppError> {
    let value = value.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Ok(dt.with_timezone(&Utc));
    }

    if let Ok(naive) = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f") {
        return Ok(naive.and_utc());
    }

    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d")
        && let Some(naive) = date.and_hms_opt(0, 0, 0)
    {
        return Ok(naive.and_utc());
    }

    Err(AppError::bad_request(anyhow::anyhow!("Invalid date format")))
}

/// Like [`parse_date`], treating a missing or blank value as absent.
pub fn parse_optional_date(value: Option<&str>) -> Result<Option<DateTime<Utc>>, AppError> {
    match value {
        Some(v) if !v.trim().is_empty() => parse_date(v).map(Some),
        _ => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    #[test]
    fn test_parse_plain_date() {
        let dt = parse_date("2010-01-15").unwrap();
        assert_eq!((dt.year(), dt.month(), dt.day()), (2010, 1, 15));
        assert_eq!(dt.hour(), 0);
    }

    #[test]
    fn test_parse_rfc3339_with_offset() {
        let dt = parse_date("2024-09-01T10:30:00+01:00").unwrap();
        assert_eq!(dt.hour(), 9);
    }

    #[test]
    fn test_parse_naive_timestamp() {
        let dt = parse_date("2024-09-01T10:30:00.000").unwrap();
        assert_eq!(dt.minute(), 30);
    }

    #[test]
    fn test_invalid_date_is_bad_request() {
        let err = parse_date("not a date").unwrap_err();
        assert_eq!(err.status, axum::http::StatusCode::BAD_REQUEST);
        assert_eq!(err.error.to_string(), "Invalid date format");
    }

    #[test]
    fn test_optional_date() {
        assert!(parse_optional_date(None).unwrap().is_none());
        assert!(parse_optional_date(Some("  ")).unwrap().is_none());
        assert!(parse_optional_date(Some("2020-02-29")).unwrap().is_some());
        assert!(parse_optional_date(Some("2021-02-29")).is_err());
    }
}
