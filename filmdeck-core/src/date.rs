//! Date parsing and rendering in the `DD/MM/YYYY` wire format.
//!
//! Dates are plain [`chrono::NaiveDate`] values; the only thing this module
//! owns is the fixed-width textual format shared by every record type.

use chrono::NaiveDate;

/// The wire format for all dates: `DD/MM/YYYY`.
pub const DATE_FORMAT: &str = "%d/%m/%Y";

/// Length of a well-formed wire date.
pub const DATE_LENGTH: usize = 10;

/// Error returned when a string cannot be parsed into a date.
#[derive(Debug, Clone)]
pub struct DateParseError(pub String);

impl std::fmt::Display for DateParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "invalid date '{}': expected DD/MM/YYYY", self.0)
    }
}

impl std::error::Error for DateParseError {}

/// Parse a fixed-width `DD/MM/YYYY` date.
///
/// Stricter than chrono's default: the input must be exactly
/// [`DATE_LENGTH`] characters, so unpadded dates like `7/11/2014` are
/// rejected.
pub fn parse_date(s: &str) -> Result<NaiveDate, DateParseError> {
    if s.len() != DATE_LENGTH {
        return Err(DateParseError(s.to_string()));
    }
    NaiveDate::parse_from_str(s, DATE_FORMAT).map_err(|_| DateParseError(s.to_string()))
}

/// Render a date in the `DD/MM/YYYY` wire format.
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_well_formed() {
        let date = parse_date("07/11/2014").unwrap();
        assert_eq!(format_date(date), "07/11/2014");
    }

    #[test]
    fn parse_rejects_unpadded() {
        assert!(parse_date("7/11/2014").is_err());
    }

    #[test]
    fn parse_rejects_iso_order() {
        assert!(parse_date("2014/11/07").is_err());
    }

    #[test]
    fn parse_rejects_impossible_day() {
        assert!(parse_date("31/02/2020").is_err());
    }
}
