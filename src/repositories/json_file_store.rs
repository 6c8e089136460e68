use crate::error::{StorageError, StorageResult};
use crate::models::AddressBook;
use crate::repositories::traits::AddressBookStore;
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;
use tracing::{debug, info};

/// Address book store backed by a single pretty-printed JSON file.
///
/// A missing file loads as an empty book. Any other read or parse failure is
/// returned to the caller instead of being replaced with an empty book, so
/// an unreadable file is never silently overwritten on the next save.
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Create a store for the given file path. Nothing is touched on disk yet.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn display_path(&self) -> String {
        self.path.display().to_string()
    }
}

impl AddressBookStore for JsonFileStore {
    fn load(&self) -> StorageResult<AddressBook> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                info!(
                    "No address book at {}, starting empty",
                    self.path.display()
                );
                return Ok(AddressBook::new());
            }
            Err(source) => {
                return Err(StorageError::Io {
                    path: self.display_path(),
                    source,
                })
            }
        };

        let book: AddressBook =
            serde_json::from_str(&contents).map_err(|source| StorageError::Corrupt {
                path: self.display_path(),
                source,
            })?;

        info!(
            "Loaded {} contact(s) from {}",
            book.len(),
            self.path.display()
        );
        Ok(book)
    }

    fn save(&self, book: &AddressBook) -> StorageResult<()> {
        let json = serde_json::to_string_pretty(book)?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|source| StorageError::Io {
                path: parent.display().to_string(),
                source,
            })?;
        }

        fs::write(&self.path, json).map_err(|source| StorageError::Io {
            path: self.display_path(),
            source,
        })?;

        debug!("Saved {} contact(s) to {}", book.len(), self.path.display());
        Ok(())
    }
}
