use crate::commands::CmdResult;
use crate::error::{Result, ShelfError};
use crate::model::{Book, BookId};
use crate::store::{BookStore, StorageBackend};

/// Looks a book up by id.
pub fn find<B: StorageBackend>(store: &BookStore<B>, id: BookId) -> Option<Book> {
    store.find(id).cloned()
}

/// Like [`find`], but a missing book is an error. Used where the caller
/// explicitly asked for one book.
pub fn run<B: StorageBackend>(store: &BookStore<B>, id: BookId) -> Result<CmdResult> {
    let book = find(store, id).ok_or(ShelfError::BookNotFound(id))?;
    Ok(CmdResult::default().with_affected_books(vec![book]))
}
