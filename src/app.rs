//! The read-eval-print loop.

use crate::commands::{dispatch, parse_input, Outcome};
use crate::error::StorageResult;
use crate::repositories::AddressBookStore;
use crate::view::View;
use chrono::NaiveDate;
use tracing::info;

pub const WELCOME: &str = "Welcome to the assistant bot!";
pub const PROMPT: &str = "Enter a command: ";
pub const GOODBYE: &str = "Good bye!";

/// Today's local calendar date.
pub fn local_today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// Run the assistant until `close`/`exit` or end of input.
///
/// The book is loaded once up front and saved once on the way out. A load
/// failure returns before anything is shown, so a damaged file is never
/// replaced by an empty book.
pub fn run<V, S, F>(view: &mut V, store: &S, today: F) -> StorageResult<()>
where
    V: View,
    S: AddressBookStore,
    F: Fn() -> NaiveDate,
{
    let mut book = store.load()?;

    view.show_message(WELCOME);
    loop {
        let Some(line) = view.get_input(PROMPT) else {
            info!("Input closed, exiting");
            break;
        };
        let (command, args) = parse_input(&line);

        match dispatch(&command, &args, &mut book, today()) {
            Outcome::Exit => break,
            Outcome::Message(text) => view.show_message(&text),
            Outcome::Contacts(text) => view.display_contacts(&text),
            Outcome::Help(text) => view.display_help(&text),
        }
    }

    store.save(&book)?;
    view.show_message(GOODBYE);
    Ok(())
}
