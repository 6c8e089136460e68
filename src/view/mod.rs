//! User-facing I/O boundary.
//!
//! The dispatcher and models never print or read anything themselves. A
//! front end implements [`View`] and the REPL in `app` drives it.

mod console;

pub use console::ConsoleView;

/// The capabilities a front end must offer.
pub trait View {
    /// Show a one-off message (replies, greetings, errors).
    fn show_message(&mut self, message: &str);

    /// Prompt and block for one line of input.
    ///
    /// Returns `None` when input is exhausted.
    fn get_input(&mut self, prompt: &str) -> Option<String>;

    /// Show the rendered contact list.
    fn display_contacts(&mut self, contacts: &str);

    /// Show the list of available commands.
    fn display_help(&mut self, commands: &str);
}
