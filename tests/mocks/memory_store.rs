use contact_book::error::{StorageError, StorageResult};
use contact_book::{AddressBook, AddressBookStore};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// In-memory address book store for testing.
///
/// Holds at most one saved book, can be told to fail on load, and tracks
/// method calls for verification.
#[allow(dead_code)]
#[derive(Clone, Default)]
pub struct MemoryStore {
    saved: Arc<Mutex<Option<AddressBook>>>,
    fail_load: Arc<Mutex<bool>>,
    call_counts: Arc<Mutex<HashMap<String, usize>>>,
}

#[allow(dead_code)]
impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store that already holds `book`.
    pub fn with_book(book: AddressBook) -> Self {
        let store = Self::new();
        *store.saved.lock().unwrap() = Some(book);
        store
    }

    /// Make every subsequent `load` fail with an I/O error.
    pub fn fail_on_load(&self) {
        *self.fail_load.lock().unwrap() = true;
    }

    /// The last saved book, if any.
    pub fn saved(&self) -> Option<AddressBook> {
        self.saved.lock().unwrap().clone()
    }

    /// Get the number of times a method was called.
    pub fn get_call_count(&self, method: &str) -> usize {
        let counts = self.call_counts.lock().unwrap();
        *counts.get(method).unwrap_or(&0)
    }

    fn track_call(&self, method: &str) {
        let mut counts = self.call_counts.lock().unwrap();
        *counts.entry(method.to_string()).or_insert(0) += 1;
    }
}

impl AddressBookStore for MemoryStore {
    fn load(&self) -> StorageResult<AddressBook> {
        self.track_call("load");

        if *self.fail_load.lock().unwrap() {
            return Err(StorageError::Io {
                path: "memory".to_string(),
                source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
            });
        }
        Ok(self.saved().unwrap_or_default())
    }

    fn save(&self, book: &AddressBook) -> StorageResult<()> {
        self.track_call("save");
        *self.saved.lock().unwrap() = Some(book.clone());
        Ok(())
    }
}
