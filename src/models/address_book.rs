//! Address book: every record, keyed by contact name.

use super::record::Record;
use crate::domain::birthday::BIRTHDAY_FORMAT;
use crate::error::{CommandError, CommandResult};
use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize, Serializer};
use std::collections::HashMap;
use std::fmt;
use tracing::debug;

/// Length of the upcoming-birthday window in days, counted after today.
pub const UPCOMING_WINDOW_DAYS: i64 = 7;

/// A birthday that falls inside the upcoming window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpcomingBirthday {
    pub name: String,
    /// This year's occurrence of the birthday.
    pub date: NaiveDate,
}

impl UpcomingBirthday {
    /// The occurrence as `DD.MM.YYYY`.
    pub fn date_str(&self) -> String {
        self.date.format(BIRTHDAY_FORMAT).to_string()
    }
}

impl fmt::Display for UpcomingBirthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.date_str())
    }
}

/// All contacts, unique by name, iterated in insertion order.
///
/// Records live in a `Vec` for ordering, with a name → position index for
/// keyed lookup. Record names are immutable, so the index only changes on
/// insert and delete.
///
/// The serde shape is `{ "records": [...] }`, which is what the JSON store
/// writes. Deserializing rejects a document that repeats a name.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(try_from = "AddressBookDocument")]
pub struct AddressBook {
    records: Vec<Record>,
    index: HashMap<String, usize>,
}

/// On-disk form of the address book.
#[derive(Deserialize)]
struct AddressBookDocument {
    #[serde(default)]
    records: Vec<Record>,
}

/// Borrowed on-disk form, so saving does not clone the book.
#[derive(Serialize)]
struct AddressBookDocumentRef<'a> {
    records: &'a [Record],
}

impl TryFrom<AddressBookDocument> for AddressBook {
    type Error = String;

    fn try_from(document: AddressBookDocument) -> Result<Self, Self::Error> {
        let mut book = AddressBook::new();
        for record in document.records {
            if book.index.contains_key(record.name().as_str()) {
                return Err(format!("duplicate contact name: {}", record.name()));
            }
            book.add_record(record);
        }
        Ok(book)
    }
}

impl Serialize for AddressBook {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        AddressBookDocumentRef {
            records: &self.records,
        }
        .serialize(serializer)
    }
}

impl AddressBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record, replacing any record with the same name in place.
    pub fn add_record(&mut self, record: Record) {
        match self.index.get(record.name().as_str()) {
            Some(&position) => self.records[position] = record,
            None => {
                self.index
                    .insert(record.name().as_str().to_string(), self.records.len());
                self.records.push(record);
            }
        }
    }

    pub fn find(&self, name: &str) -> Option<&Record> {
        self.index.get(name).map(|&position| &self.records[position])
    }

    pub fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
        let position = *self.index.get(name)?;
        Some(&mut self.records[position])
    }

    /// Remove the record named `name`.
    pub fn delete(&mut self, name: &str) -> CommandResult<Record> {
        let position = self
            .index
            .remove(name)
            .ok_or_else(|| CommandError::NotFound(format!("contact {}", name)))?;
        let removed = self.records.remove(position);

        // Everything after the removed record moved down by one
        for later in self.index.values_mut().filter(|p| **p > position) {
            *later -= 1;
        }
        Ok(removed)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Record> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Contacts whose birthday falls within `today..=today + 7 days`.
    ///
    /// Only the occurrence in `today`'s year is considered, so early-January
    /// birthdays are not reported at the end of December. Feb 29 birthdays
    /// fall on Feb 28 in non-leap years.
    pub fn get_upcoming_birthdays(&self, today: NaiveDate) -> Vec<UpcomingBirthday> {
        let window_end = today + Duration::days(UPCOMING_WINDOW_DAYS);

        let upcoming: Vec<UpcomingBirthday> = self
            .records
            .iter()
            .filter_map(|record| {
                let occurrence = record.birthday()?.occurrence_in(today.year())?;
                (today <= occurrence && occurrence <= window_end).then(|| UpcomingBirthday {
                    name: record.name().as_str().to_string(),
                    date: occurrence,
                })
            })
            .collect();

        debug!(
            "{} upcoming birthday(s) between {} and {}",
            upcoming.len(),
            today,
            window_end
        );
        upcoming
    }

    /// Every record rendered on its own line. Empty for an empty book.
    pub fn render(&self) -> String {
        self.records
            .iter()
            .map(Record::render)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(day: u32, month: u32, year: i32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn record(name: &str, birthday: Option<&str>) -> Record {
        let mut record = Record::new(name).unwrap();
        record.add_phone("1234567890").unwrap();
        if let Some(birthday) = birthday {
            record.add_birthday(birthday).unwrap();
        }
        record
    }

    #[test]
    fn test_add_and_find() {
        let mut book = AddressBook::new();
        book.add_record(record("Alice", None));

        assert_eq!(book.len(), 1);
        assert_eq!(book.find("Alice").unwrap().name().as_str(), "Alice");
        assert!(book.find("alice").is_none());
    }

    #[test]
    fn test_add_record_overwrites_in_place() {
        let mut book = AddressBook::new();
        book.add_record(record("Alice", None));
        book.add_record(record("Bob", None));

        let mut replacement = Record::new("Alice").unwrap();
        replacement.add_phone("9999999999").unwrap();
        book.add_record(replacement);

        let names: Vec<&str> = book.iter().map(|r| r.name().as_str()).collect();
        assert_eq!(names, vec!["Alice", "Bob"]);
        assert_eq!(
            book.find("Alice").unwrap().phones()[0].as_str(),
            "9999999999"
        );
    }

    #[test]
    fn test_delete() {
        let mut book = AddressBook::new();
        book.add_record(record("Alice", None));

        let removed = book.delete("Alice").unwrap();
        assert_eq!(removed.name().as_str(), "Alice");
        assert!(book.find("Alice").is_none());
        assert!(book.is_empty());
    }

    #[test]
    fn test_delete_keeps_later_lookups_valid() {
        let mut book = AddressBook::new();
        book.add_record(record("Alice", None));
        book.add_record(record("Bob", None));
        book.add_record(record("Carol", None));

        book.delete("Alice").unwrap();
        assert_eq!(book.find("Bob").unwrap().name().as_str(), "Bob");
        assert_eq!(book.find("Carol").unwrap().name().as_str(), "Carol");

        book.add_record(record("Dave", None));
        book.delete("Carol").unwrap();
        let names: Vec<&str> = book.iter().map(|r| r.name().as_str()).collect();
        assert_eq!(names, vec!["Bob", "Dave"]);
        assert_eq!(book.find_mut("Dave").unwrap().name().as_str(), "Dave");
    }

    #[test]
    fn test_deserialize_rejects_duplicate_names() {
        let json = r#"{"records":[
            {"name":"Bob","phones":["1111111111"]},
            {"name":"Bob","phones":["2222222222"]}
        ]}"#;
        let result: Result<AddressBook, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }

    #[test]
    fn test_serde_shape() {
        let mut book = AddressBook::new();
        book.add_record(record("Alice", None));

        let json = serde_json::to_string(&book).unwrap();
        assert_eq!(
            json,
            r#"{"records":[{"name":"Alice","phones":["1234567890"]}]}"#
        );

        let back: AddressBook = serde_json::from_str(&json).unwrap();
        assert_eq!(back, book);
    }

    #[test]
    fn test_delete_missing() {
        let mut book = AddressBook::new();
        assert!(matches!(
            book.delete("Ghost"),
            Err(CommandError::NotFound(_))
        ));
    }

    #[test]
    fn test_upcoming_leap_day_fallback() {
        let mut book = AddressBook::new();
        book.add_record(record("Leap", Some("29.02.2000")));

        let upcoming = book.get_upcoming_birthdays(date(25, 2, 2025));
        assert_eq!(upcoming.len(), 1);
        assert_eq!(upcoming[0].name, "Leap");
        assert_eq!(upcoming[0].date_str(), "28.02.2025");
    }

    #[test]
    fn test_upcoming_leap_day_in_leap_year() {
        let mut book = AddressBook::new();
        book.add_record(record("Leap", Some("29.02.2000")));

        let upcoming = book.get_upcoming_birthdays(date(25, 2, 2028));
        assert_eq!(upcoming[0].date_str(), "29.02.2028");
    }

    #[test]
    fn test_upcoming_window_bounds() {
        let mut book = AddressBook::new();
        book.add_record(record("Today", Some("10.06.1990")));
        book.add_record(record("EdgeIn", Some("17.06.1985")));
        book.add_record(record("EdgeOut", Some("18.06.1985")));
        book.add_record(record("Yesterday", Some("09.06.1970")));
        book.add_record(record("NoBirthday", None));

        let upcoming = book.get_upcoming_birthdays(date(10, 6, 2025));
        let names: Vec<&str> = upcoming.iter().map(|u| u.name.as_str()).collect();
        assert_eq!(names, vec!["Today", "EdgeIn"]);
        assert_eq!(upcoming[1].date, date(17, 6, 2025));
    }

    #[test]
    fn test_upcoming_does_not_wrap_year() {
        let mut book = AddressBook::new();
        book.add_record(record("NewYear", Some("02.01.1990")));

        assert!(book.get_upcoming_birthdays(date(30, 12, 2025)).is_empty());
    }

    #[test]
    fn test_upcoming_keeps_insertion_order() {
        let mut book = AddressBook::new();
        book.add_record(record("Zed", Some("12.03.1990")));
        book.add_record(record("Amy", Some("11.03.1990")));

        let upcoming = book.get_upcoming_birthdays(date(10, 3, 2026));
        let rendered: Vec<String> = upcoming.iter().map(ToString::to_string).collect();
        assert_eq!(rendered, vec!["Zed: 12.03.2026", "Amy: 11.03.2026"]);
    }

    #[test]
    fn test_render() {
        let mut book = AddressBook::new();
        assert_eq!(book.render(), "");

        book.add_record(record("Alice", None));
        book.add_record(record("Bob", Some("01.02.2003")));
        assert_eq!(
            book.render(),
            "Contact name: Alice, phones: 1234567890, birthday: N/A\n\
             Contact name: Bob, phones: 1234567890, birthday: 01.02.2003"
        );
    }
}
