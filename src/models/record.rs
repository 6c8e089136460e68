//! Record model: one contact in the address book.

use crate::domain::{Birthday, FieldValue, Name, PhoneNumber, ValidationError};
use crate::error::{CommandError, CommandResult};
use serde::{Deserialize, Serialize};

/// A single contact: a name, its phone numbers and an optional birthday.
///
/// Phones keep insertion order and may repeat.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Record {
    name: Name,

    #[serde(default)]
    phones: Vec<PhoneNumber>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    birthday: Option<Birthday>,
}

impl Record {
    /// Create a record with no phones and no birthday.
    pub fn new(name: impl Into<String>) -> Result<Self, ValidationError> {
        Ok(Self {
            name: Name::new(name)?,
            phones: Vec::new(),
            birthday: None,
        })
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn phones(&self) -> &[PhoneNumber] {
        &self.phones
    }

    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    /// Validate and append a phone number. Duplicates are allowed.
    pub fn add_phone(&mut self, phone: impl Into<String>) -> Result<(), ValidationError> {
        self.push_phone(PhoneNumber::new(phone)?);
        Ok(())
    }

    /// Append an already validated phone number.
    pub fn push_phone(&mut self, phone: PhoneNumber) {
        self.phones.push(phone);
    }

    /// Remove the first phone equal to `phone`.
    pub fn remove_phone(&mut self, phone: &str) -> CommandResult<()> {
        let index = self
            .position_of(phone)
            .ok_or_else(|| CommandError::NotFound(format!("phone {}", phone)))?;
        self.phones.remove(index);
        Ok(())
    }

    /// Replace `old` with `new`.
    ///
    /// The new number is validated before anything is removed, so a bad
    /// replacement leaves the record untouched. The replacement goes to the
    /// end of the list.
    pub fn edit_phone(&mut self, old: &str, new: &str) -> CommandResult<()> {
        let index = self
            .position_of(old)
            .ok_or_else(|| CommandError::NotFound(format!("phone {}", old)))?;
        let replacement = PhoneNumber::new(new)?;

        self.phones.remove(index);
        self.phones.push(replacement);
        Ok(())
    }

    /// Find a phone by its exact value.
    pub fn find_phone(&self, phone: &str) -> Option<&PhoneNumber> {
        self.phones.iter().find(|p| p.as_str() == phone)
    }

    /// Validate and set the birthday, replacing any previous one.
    pub fn add_birthday(&mut self, value: &str) -> Result<(), ValidationError> {
        self.birthday = Some(Birthday::new(value)?);
        Ok(())
    }

    /// One-line summary used by the `all` command.
    pub fn render(&self) -> String {
        let phones = self
            .phones
            .iter()
            .map(FieldValue::as_display)
            .collect::<Vec<_>>()
            .join("; ");
        let birthday = self
            .birthday
            .as_ref()
            .map(FieldValue::as_display)
            .unwrap_or_else(|| "N/A".to_string());

        format!(
            "Contact name: {}, phones: {}, birthday: {}",
            self.name.as_display(),
            phones,
            birthday
        )
    }

    fn position_of(&self, phone: &str) -> Option<usize> {
        self.phones.iter().position(|p| p.as_str() == phone)
    }
}
