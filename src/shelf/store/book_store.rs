use super::backend::StorageBackend;
use super::slot::BookSlot;
use crate::error::Result;
use crate::model::{validate_fields, Book, BookId, BookUpdate, NewBook};
use tracing::{info, warn};

/// The in-memory book collection, kept in lockstep with its slot.
///
/// Every mutation persists the whole collection before returning. If the
/// write fails the mutation is undone, so memory never runs ahead of what
/// is stored.
#[derive(Debug)]
pub struct BookStore<B: StorageBackend> {
    books: Vec<Book>,
    slot: BookSlot<B>,
}

impl<B: StorageBackend> BookStore<B> {
    /// Loads the persisted collection from `slot`.
    pub fn open(slot: BookSlot<B>) -> Result<Self> {
        let books = slot.load()?;
        Ok(Self { books, slot })
    }

    pub fn books(&self) -> &[Book] {
        &self.books
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    pub fn slot(&self) -> &BookSlot<B> {
        &self.slot
    }

    pub fn find(&self, id: BookId) -> Option<&Book> {
        self.books.iter().find(|b| b.id == id)
    }

    fn position(&self, id: BookId) -> Option<usize> {
        self.books.iter().position(|b| b.id == id)
    }

    /// Validates and appends a new book with a fresh id.
    pub fn add(&mut self, new_book: NewBook) -> Result<Book> {
        let fields = validate_fields(&new_book.title, &new_book.author, new_book.year)?;
        let id = BookId::fresh(self.books.iter().map(|b| &b.id))?;
        let book = Book::new(
            id,
            fields.title,
            fields.author,
            fields.year,
            new_book.is_complete,
        );

        self.books.push(book.clone());
        if let Err(e) = self.slot.persist(&self.books) {
            warn!(%id, error = %e, "persist failed, dropping added book");
            self.books.pop();
            return Err(e);
        }

        info!(%id, title = %book.title, "added book");
        Ok(book)
    }

    /// Flips the read status. Returns `None` when no book has this id.
    pub fn toggle(&mut self, id: BookId) -> Result<Option<Book>> {
        let Some(pos) = self.position(id) else {
            return Ok(None);
        };

        self.books[pos].is_complete = !self.books[pos].is_complete;
        if let Err(e) = self.slot.persist(&self.books) {
            warn!(%id, error = %e, "persist failed, reverting toggle");
            self.books[pos].is_complete = !self.books[pos].is_complete;
            return Err(e);
        }

        let book = self.books[pos].clone();
        info!(%id, status = %book.status(), "toggled book");
        Ok(Some(book))
    }

    /// Removes the book unconditionally. Returns `None` when no book has
    /// this id.
    pub fn remove(&mut self, id: BookId) -> Result<Option<Book>> {
        let Some(pos) = self.position(id) else {
            return Ok(None);
        };

        let book = self.books.remove(pos);
        if let Err(e) = self.slot.persist(&self.books) {
            warn!(%id, error = %e, "persist failed, restoring removed book");
            self.books.insert(pos, book);
            return Err(e);
        }

        info!(%id, title = %book.title, "removed book");
        Ok(Some(book))
    }

    /// Replaces title, author and year in place. Invalid input fails before
    /// the lookup; an unknown id yields `None`.
    pub fn update(&mut self, id: BookId, update: BookUpdate) -> Result<Option<Book>> {
        let fields = validate_fields(&update.title, &update.author, update.year)?;
        let Some(pos) = self.position(id) else {
            return Ok(None);
        };

        let previous = self.books[pos].clone();
        {
            let book = &mut self.books[pos];
            book.title = fields.title;
            book.author = fields.author;
            book.year = fields.year;
        }
        if let Err(e) = self.slot.persist(&self.books) {
            warn!(%id, error = %e, "persist failed, reverting update");
            self.books[pos] = previous;
            return Err(e);
        }

        let book = self.books[pos].clone();
        info!(%id, title = %book.title, "updated book");
        Ok(Some(book))
    }
}
