use super::backend::StorageBackend;
use crate::error::{Result, ShelfError};
use crate::model::Book;
use std::collections::HashSet;
use std::path::PathBuf;
use tracing::debug;

pub const DEFAULT_SLOT_KEY: &str = "books";

/// Checks that `key` names a single file inside the data directory: not
/// empty, no path separators, no leading dot.
pub fn check_key(key: &str) -> Result<()> {
    let reason = if key.trim().is_empty() {
        "must not be empty"
    } else if key.contains(['/', '\\']) {
        "must not contain a path separator"
    } else if key.starts_with('.') {
        "must not start with a dot"
    } else {
        return Ok(());
    };
    Err(ShelfError::Store(format!("invalid storage key {:?}: {}", key, reason)))
}

/// The book collection as persisted in a single named slot.
///
/// The slot holds a JSON array of books and is always overwritten
/// wholesale; there is no partial persistence.
#[derive(Debug)]
pub struct BookSlot<B: StorageBackend> {
    backend: B,
    key: String,
}

impl<B: StorageBackend> BookSlot<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            key: DEFAULT_SLOT_KEY.to_string(),
        }
    }

    /// A slot under a custom key. Fails if the key is not a plain file name.
    pub fn with_key(backend: B, key: impl Into<String>) -> Result<Self> {
        let key = key.into();
        check_key(&key)?;
        Ok(Self { backend, key })
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn path(&self) -> PathBuf {
        self.backend.slot_path(&self.key)
    }

    /// Returns the persisted collection, or an empty one if the slot was
    /// never written (or holds only whitespace).
    pub fn load(&self) -> Result<Vec<Book>> {
        let raw = match self.backend.read_slot(&self.key)? {
            Some(raw) if !raw.trim().is_empty() => raw,
            _ => {
                debug!(slot = %self.key, "slot empty, starting with no books");
                return Ok(Vec::new());
            }
        };

        let books: Vec<Book> = serde_json::from_str(&raw).map_err(ShelfError::Serialization)?;
        self.check_books(&books)?;
        debug!(slot = %self.key, count = books.len(), "loaded books");
        Ok(books)
    }

    /// Serializes the whole collection into the slot, replacing its content.
    pub fn persist(&self, books: &[Book]) -> Result<()> {
        let content = serde_json::to_string_pretty(books).map_err(ShelfError::Serialization)?;
        self.backend.write_slot(&self.key, &content)?;
        debug!(slot = %self.key, count = books.len(), "persisted books");
        Ok(())
    }

    fn check_books(&self, books: &[Book]) -> Result<()> {
        let mut seen = HashSet::with_capacity(books.len());
        for book in books {
            if !seen.insert(book.id) {
                return Err(self.corrupt(format!("duplicate id {}", book.id)));
            }
            book.check().map_err(|reason| self.corrupt(reason))?;
        }
        Ok(())
    }

    fn corrupt(&self, reason: String) -> ShelfError {
        ShelfError::CorruptStore {
            slot: self.key.clone(),
            reason,
        }
    }
}
