//! Contact Book - a command-line assistant for names, phone numbers and birthdays.
//!
//! # Architecture
//!
//! - **domain**: Validated field types (name, phone number, birthday)
//! - **models**: Contact records and the address book, including the upcoming-birthday query
//! - **repositories**: Loading and saving the address book
//! - **commands**: Input parsing, command handlers and error translation
//! - **view**: The I/O boundary a front end implements
//! - **app**: The read-eval-print loop tying it all together
//! - **config** / **error**: Configuration and error types

pub mod app;
pub mod commands;
pub mod config;
pub mod domain;
pub mod error;
pub mod models;
pub mod repositories;
pub mod view;

pub use config::Config;
pub use domain::{Birthday, Name, PhoneNumber, ValidationError};
pub use error::{CommandError, ConfigError, StorageError};
pub use models::{AddressBook, Record, UpcomingBirthday};
pub use repositories::{AddressBookStore, JsonFileStore};
pub use view::{ConsoleView, View};
