//! Birthday value object.

use super::errors::ValidationError;
use super::FieldValue;
use chrono::{Datelike, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Display and input format for birthdays.
pub const BIRTHDAY_FORMAT: &str = "%d.%m.%Y";

// Day and month may omit the leading zero, the year is always four digits.
static BIRTHDAY_SHAPE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{1,2}\.\d{1,2}\.\d{4}$").expect("valid birthday regex"));

/// A validated calendar date of birth.
///
/// # Example
///
/// ```
/// use contact_book::domain::Birthday;
///
/// let birthday = Birthday::new("29.02.2024").unwrap();
/// assert_eq!(birthday.to_string(), "29.02.2024");
/// assert!(Birthday::new("29.02.2023").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Birthday(NaiveDate);

impl Birthday {
    /// Parse a `DD.MM.YYYY` string into a Birthday.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidBirthday` when the text is not in
    /// `DD.MM.YYYY` form or does not name a real calendar date.
    pub fn new(value: impl AsRef<str>) -> Result<Self, ValidationError> {
        let value = value.as_ref();
        if !BIRTHDAY_SHAPE.is_match(value) {
            return Err(ValidationError::InvalidBirthday(value.to_string()));
        }

        NaiveDate::parse_from_str(value, BIRTHDAY_FORMAT)
            .map(Self)
            .map_err(|_| ValidationError::InvalidBirthday(value.to_string()))
    }

    /// The parsed date.
    pub fn date(&self) -> NaiveDate {
        self.0
    }

    /// The birthday moved into `year`.
    ///
    /// February 29th falls back to February 28th in non-leap years.
    pub fn occurrence_in(&self, year: i32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(year, self.0.month(), self.0.day())
            .or_else(|| NaiveDate::from_ymd_opt(year, self.0.month(), 28))
    }
}

impl FieldValue for Birthday {
    fn as_display(&self) -> String {
        self.0.format(BIRTHDAY_FORMAT).to_string()
    }
}

impl Serialize for Birthday {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.as_display().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Birthday {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Birthday::new(s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_display())
    }
}
