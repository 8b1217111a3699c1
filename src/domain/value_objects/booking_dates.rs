use chrono::NaiveDate;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
#[error("booking date must be DD/MM/YYYY or YYYY-MM-DD, got: {0}")]
pub struct ParseBookingDateError(pub String);

/// Calendar date a job was booked for. Accepts the two client-facing input forms
/// and normalizes everything downstream of parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct BookingDate(NaiveDate);

impl BookingDate {
    pub fn parse(input: &str) -> Result<Self, ParseBookingDateError> {
        let trimmed = input.trim();

        NaiveDate::parse_from_str(trimmed, "%d/%m/%Y")
            .or_else(|_| NaiveDate::parse_from_str(trimmed, "%Y-%m-%d"))
            .map(BookingDate)
            .map_err(|_| ParseBookingDateError(input.to_string()))
    }

    /// Normalized display form, `DD/MM/YYYY`. This is the form stored on job rows.
    pub fn display(&self) -> String {
        self.0.format("%d/%m/%Y").to_string()
    }

    /// Compact key used inside job references, `DDMMYYYY`.
    pub fn date_key(&self) -> String {
        self.0.format("%d%m%Y").to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_slash_form() {
        let date = BookingDate::parse("05/01/2025").unwrap();
        assert_eq!(date.display(), "05/01/2025");
        assert_eq!(date.date_key(), "05012025");
    }

    #[test]
    fn parses_iso_form_to_the_same_key() {
        let slash = BookingDate::parse("05/01/2025").unwrap();
        let iso = BookingDate::parse("2025-01-05").unwrap();
        assert_eq!(slash, iso);
        assert_eq!(iso.date_key(), "05012025");
    }

    #[test]
    fn trims_surrounding_whitespace() {
        let date = BookingDate::parse("  2025-01-05 ").unwrap();
        assert_eq!(date.display(), "05/01/2025");
    }

    #[test]
    fn rejects_malformed_input() {
        for input in ["", "garbage", "2025/01/05", "05-01-2025", "32/01/2025", "05/13/2025"] {
            assert!(BookingDate::parse(input).is_err(), "should reject {input:?}");
        }
    }
}
