//! Contact Book - main entry point
//!
//! Loads the address book, runs the interactive assistant on the terminal
//! and saves the book when the user leaves.

use anyhow::Result;
use contact_book::app;
use contact_book::{Config, ConsoleView, JsonFileStore};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Logs go to stderr so they never interleave with the REPL on stdout
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.as_str()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    info!("Using address book at {}", config.book_path.display());

    let store = JsonFileStore::new(&config.book_path);
    let mut view = ConsoleView::new();

    if let Err(e) = app::run(&mut view, &store, app::local_today) {
        error!("Contact book stopped: {}", e);
        return Err(e.into());
    }

    info!("Contact book shutdown complete");
    Ok(())
}
