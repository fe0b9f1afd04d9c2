//! Form definitions backing the dashboard services.
//!
//! Each form is deserialized from raw user input, checked with `validator`,
//! then converted into a payload of domain value objects.

use chrono::NaiveDate;
use thiserror::Error;
use validator::ValidationErrors;

pub mod breeding;
pub mod financial;
pub mod health;
pub mod livestock;
pub mod production;

/// Date format used by every date input.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Error)]
/// Errors that can occur when processing form data.
pub enum FormError {
    #[error("validation errors: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("invalid date: {0}")]
    InvalidDate(String),

    #[error("invalid name")]
    InvalidName,

    #[error("invalid amount")]
    InvalidAmount,

    #[error("invalid record id")]
    InvalidRecordId,

    #[error("invalid option: {0}")]
    InvalidOption(String),

    #[error("invalid status: {0}")]
    InvalidStatus(String),
}

pub(crate) fn parse_date(value: &str) -> Result<NaiveDate, FormError> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT)
        .map_err(|_| FormError::InvalidDate(value.to_string()))
}

/// Blank inputs are treated as absent.
pub(crate) fn parse_optional_date(value: Option<&str>) -> Result<Option<NaiveDate>, FormError> {
    match value.map(str::trim).filter(|v| !v.is_empty()) {
        Some(value) => parse_date(value).map(Some),
        None => Ok(None),
    }
}

pub(crate) fn optional_text(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_iso_dates() {
        assert_eq!(
            parse_date(" 2024-06-15 ").unwrap(),
            NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
        );
        assert!(matches!(
            parse_date("15/06/2024"),
            Err(FormError::InvalidDate(_))
        ));
    }

    #[test]
    fn blank_optional_date_is_none() {
        assert_eq!(parse_optional_date(None).unwrap(), None);
        assert_eq!(parse_optional_date(Some("  ")).unwrap(), None);
        assert!(parse_optional_date(Some("2024-02-30")).is_err());
    }

    #[test]
    fn optional_text_trims() {
        assert_eq!(optional_text(Some("  B-12 ".into())), Some("B-12".into()));
        assert_eq!(optional_text(Some("   ".into())), None);
    }
}
