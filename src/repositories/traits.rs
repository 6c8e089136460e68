use crate::error::StorageResult;
use crate::models::AddressBook;

/// Storage for the whole address book.
///
/// The book is always read and written wholesale. Implementations decide
/// the format; callers only rely on every field surviving a save/load cycle.
pub trait AddressBookStore {
    /// Load the persisted book, or an empty one if nothing was saved yet.
    fn load(&self) -> StorageResult<AddressBook>;

    /// Persist the book, replacing whatever was stored before.
    fn save(&self, book: &AddressBook) -> StorageResult<()>;
}
