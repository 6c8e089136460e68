//! Command handlers.
//!
//! Each handler checks its argument count, works on the address book and
//! returns the reply text. Failures are returned as `CommandError` and turned
//! into user-facing text by the dispatcher.

use crate::domain::{FieldValue, PhoneNumber};
use crate::error::{CommandError, CommandResult};
use crate::models::{AddressBook, Record};
use chrono::NaiveDate;

fn require_args(command: &str, args: &[String], expected: usize) -> CommandResult<()> {
    if args.len() < expected {
        return Err(CommandError::ArgumentCount {
            command: command.to_string(),
            expected,
        });
    }
    Ok(())
}

fn contact_not_found(name: &str) -> CommandError {
    CommandError::NotFound(format!("contact {}", name))
}

/// `add <name> <phone>...`
///
/// Appends the phones to an existing contact, or creates the contact. All
/// phones are validated before the book changes.
pub fn add_contact(args: &[String], book: &mut AddressBook) -> CommandResult<String> {
    require_args("add", args, 2)?;
    let name = &args[0];
    let phones = args[1..]
        .iter()
        .map(|p| PhoneNumber::new(p.as_str()))
        .collect::<Result<Vec<_>, _>>()?;

    if let Some(record) = book.find_mut(name) {
        for phone in phones {
            record.push_phone(phone);
        }
        return Ok("Contact updated.".to_string());
    }

    let mut record = Record::new(name.as_str())?;
    for phone in phones {
        record.push_phone(phone);
    }
    book.add_record(record);
    Ok("Contact added.".to_string())
}

/// `change <name> <old phone> <new phone>`
pub fn change_contact(args: &[String], book: &mut AddressBook) -> CommandResult<String> {
    require_args("change", args, 3)?;
    let (name, old, new) = (&args[0], &args[1], &args[2]);

    let record = book.find_mut(name).ok_or_else(|| contact_not_found(name))?;
    record.edit_phone(old, new)?;
    Ok("Contact updated.".to_string())
}

/// `phone <name>`
pub fn show_phone(args: &[String], book: &AddressBook) -> CommandResult<String> {
    require_args("phone", args, 1)?;
    let name = &args[0];

    let record = book.find(name).ok_or_else(|| contact_not_found(name))?;
    let phones = record
        .phones()
        .iter()
        .map(PhoneNumber::as_str)
        .collect::<Vec<_>>()
        .join(", ");
    Ok(format!("{}: {}", name, phones))
}

/// `all`
pub fn show_all(book: &AddressBook) -> CommandResult<String> {
    if book.is_empty() {
        return Ok("No contacts found.".to_string());
    }
    Ok(book.render())
}

/// `add-birthday <name> <DD.MM.YYYY>`
pub fn add_birthday(args: &[String], book: &mut AddressBook) -> CommandResult<String> {
    require_args("add-birthday", args, 2)?;
    let (name, birthday) = (&args[0], &args[1]);

    let record = book.find_mut(name).ok_or_else(|| contact_not_found(name))?;
    record.add_birthday(birthday)?;
    Ok("Birthday added.".to_string())
}

/// `show-birthday <name>`
pub fn show_birthday(args: &[String], book: &AddressBook) -> CommandResult<String> {
    require_args("show-birthday", args, 1)?;
    let name = &args[0];

    let record = book.find(name).ok_or_else(|| contact_not_found(name))?;
    Ok(match record.birthday() {
        Some(birthday) => format!("{}: {}", name, birthday.as_display()),
        None => format!("{} has no birthday set.", name),
    })
}

/// `birthdays`
pub fn birthdays(book: &AddressBook, today: NaiveDate) -> CommandResult<String> {
    let upcoming = book.get_upcoming_birthdays(today);
    if upcoming.is_empty() {
        return Ok("No upcoming birthdays in the next 7 days.".to_string());
    }
    Ok(upcoming
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n"))
}

/// `delete <name>`
pub fn delete_contact(args: &[String], book: &mut AddressBook) -> CommandResult<String> {
    require_args("delete", args, 1)?;
    book.delete(&args[0])?;
    Ok("Contact deleted.".to_string())
}
