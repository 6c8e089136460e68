//! Command dispatcher.
//!
//! Turns a parsed command into an [`Outcome`] for the front end. Handler
//! errors never escape: [`handle`] maps each `CommandError` kind to its
//! one-line reply, so a bad command cannot stop the REPL.

pub mod handlers;
pub mod parser;

pub use parser::parse_input;

use crate::error::{CommandError, CommandResult};
use crate::models::AddressBook;
use chrono::NaiveDate;
use tracing::debug;

pub const HELP_TEXT: &str = "Available commands: hello, add, change, phone, all, add-birthday, \
show-birthday, birthdays, delete, help, close, exit";

pub const INVALID_COMMAND: &str =
    "Invalid command. Type 'help' to see the list of available commands.";

/// What the front end should do with a command's result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Plain reply text.
    Message(String),
    /// Output of the `all` command.
    Contacts(String),
    /// Output of the `help` command.
    Help(String),
    /// `close` or `exit`: save and stop.
    Exit,
}

/// The user-facing reply for a failed command.
pub fn translate_error(err: &CommandError) -> String {
    match err {
        CommandError::NotFound(_) => "Error: Contact not found.".to_string(),
        CommandError::Validation(e) => format!("Error: {}", e),
        CommandError::ArgumentCount { .. } => "Error: Invalid command format.".to_string(),
    }
}

/// Collapse a handler result into reply text.
pub fn handle(result: CommandResult<String>) -> String {
    result.unwrap_or_else(|err| {
        debug!("Command failed: {}", err);
        translate_error(&err)
    })
}

/// Route one parsed command.
///
/// `today` is the calendar date used by `birthdays`.
pub fn dispatch(
    command: &str,
    args: &[String],
    book: &mut AddressBook,
    today: NaiveDate,
) -> Outcome {
    debug!("Dispatching '{}' with {} argument(s)", command, args.len());

    match command {
        "close" | "exit" => Outcome::Exit,
        "hello" => Outcome::Message("How can I help you?".to_string()),
        "add" => Outcome::Message(handle(handlers::add_contact(args, book))),
        "change" => Outcome::Message(handle(handlers::change_contact(args, book))),
        "phone" => Outcome::Message(handle(handlers::show_phone(args, book))),
        "all" => Outcome::Contacts(handle(handlers::show_all(book))),
        "add-birthday" => Outcome::Message(handle(handlers::add_birthday(args, book))),
        "show-birthday" => Outcome::Message(handle(handlers::show_birthday(args, book))),
        "birthdays" => Outcome::Message(handle(handlers::birthdays(book, today))),
        "delete" => Outcome::Message(handle(handlers::delete_contact(args, book))),
        "help" => Outcome::Help(HELP_TEXT.to_string()),
        _ => Outcome::Message(INVALID_COMMAND.to_string()),
    }
}
