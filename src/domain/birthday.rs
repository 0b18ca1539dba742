//! BirthdayDate value object.

use super::errors::ValidationError;
use chrono::{Datelike, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// The only accepted and produced textual date format.
pub const DATE_FORMAT: &str = "%d.%m.%Y";

/// Two-digit day, two-digit month, four-digit year.
static DATE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[0-9]{2}\.[0-9]{2}\.[0-9]{4}$").expect("Failed to compile date regex")
});

/// A validated calendar date parsed from `DD.MM.YYYY`.
///
/// # Example
///
/// ```
/// use contact_book::domain::BirthdayDate;
///
/// let birthday = BirthdayDate::new("15.06.1990").unwrap();
/// assert_eq!(birthday.to_string(), "15.06.1990");
/// assert!(BirthdayDate::new("31.02.2024").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BirthdayDate(NaiveDate);

impl BirthdayDate {
    /// Parse a birthday from `DD.MM.YYYY`.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidBirthday` if the text does not have
    /// the fixed shape or does not name a real calendar date.
    pub fn new(value: &str) -> Result<Self, ValidationError> {
        if !DATE_REGEX.is_match(value) {
            return Err(ValidationError::InvalidBirthday(value.to_string()));
        }

        NaiveDate::parse_from_str(value, DATE_FORMAT)
            .map(Self)
            .map_err(|_| ValidationError::InvalidBirthday(value.to_string()))
    }

    /// The underlying calendar date.
    pub fn date(&self) -> NaiveDate {
        self.0
    }

    /// The date this birthday falls on in `year`.
    ///
    /// A 29 February birthday falls on 28 February in non-leap years.
    /// Returns `None` only when `year` is outside the supported calendar range.
    pub fn occurrence_in(&self, year: i32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(year, self.0.month(), self.0.day())
            .or_else(|| NaiveDate::from_ymd_opt(year, self.0.month(), self.0.day() - 1))
    }
}

/// Render a date the same way birthdays are written.
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

impl Serialize for BirthdayDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.to_string().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for BirthdayDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        BirthdayDate::new(&s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for BirthdayDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DATE_FORMAT))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_birthday_valid() {
        let birthday = BirthdayDate::new("01.12.1985").unwrap();
        assert_eq!(birthday.date(), ymd(1985, 12, 1));
    }

    #[test]
    fn test_birthday_validates_format() {
        assert!(BirthdayDate::new("").is_err());
        assert!(BirthdayDate::new("1.12.1985").is_err());
        assert!(BirthdayDate::new("01.12.85").is_err());
        assert!(BirthdayDate::new("1985-12-01").is_err());
        assert!(BirthdayDate::new("01/12/1985").is_err());
        assert!(BirthdayDate::new("aa.bb.cccc").is_err());
        assert!(BirthdayDate::new(" 01.12.1985").is_err());
        assert!(BirthdayDate::new("01.12.1985 ").is_err());
    }

    #[test]
    fn test_birthday_rejects_impossible_dates() {
        assert!(BirthdayDate::new("31.02.2024").is_err());
        assert!(BirthdayDate::new("29.02.2023").is_err());
        assert!(BirthdayDate::new("00.01.2000").is_err());
        assert!(BirthdayDate::new("15.13.2000").is_err());
        assert!(BirthdayDate::new("31.04.2000").is_err());
        assert!(BirthdayDate::new("29.02.2024").is_ok());
    }

    #[test]
    fn test_birthday_error_carries_input() {
        assert_eq!(
            BirthdayDate::new("31.02.2024"),
            Err(ValidationError::InvalidBirthday("31.02.2024".to_string()))
        );
    }

    #[test]
    fn test_birthday_display_round_trips_text() {
        let birthday = BirthdayDate::new("05.03.2001").unwrap();
        assert_eq!(birthday.to_string(), "05.03.2001");
        assert_eq!(format_date(birthday.date()), "05.03.2001");
    }

    #[test]
    fn test_occurrence_replaces_year() {
        let birthday = BirthdayDate::new("15.06.1990").unwrap();
        assert_eq!(birthday.occurrence_in(2024), Some(ymd(2024, 6, 15)));
    }

    #[test]
    fn test_leap_day_occurrence() {
        let birthday = BirthdayDate::new("29.02.2000").unwrap();
        assert_eq!(birthday.occurrence_in(2024), Some(ymd(2024, 2, 29)));
        assert_eq!(birthday.occurrence_in(2023), Some(ymd(2023, 2, 28)));
    }

    #[test]
    fn test_birthday_serialization() {
        let birthday = BirthdayDate::new("15.06.1990").unwrap();
        let json = serde_json::to_string(&birthday).unwrap();
        assert_eq!(json, "\"15.06.1990\"");

        let parsed: BirthdayDate = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, birthday);
    }

    #[test]
    fn test_birthday_deserialization_invalid_fails() {
        let result: Result<BirthdayDate, _> = serde_json::from_str("\"31.02.2024\"");
        assert!(result.is_err());
    }
}
