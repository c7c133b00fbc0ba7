//! # Shelf View
//!
//! Projects a sequence of books (the whole collection or a search result)
//! into the two shelves a UI shows: unfinished and finished. Each item
//! carries the actions a UI wires to its buttons, expressed as typed
//! [`Command`]s so the UI never calls the store directly.
//!
//! The view is rebuilt from scratch on every call; there is no diffing.

use crate::commands::Command;
use crate::model::{Book, BookId, BookUpdate, ReadStatus};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookItem {
    pub book: Book,
}

impl BookItem {
    pub fn id(&self) -> BookId {
        self.book.id
    }

    pub fn title(&self) -> &str {
        &self.book.title
    }

    pub fn author(&self) -> &str {
        &self.book.author
    }

    pub fn year(&self) -> u32 {
        self.book.year
    }

    /// Label of the status button: names the shelf the book would move to.
    pub fn toggle_label(&self) -> &'static str {
        if self.book.is_complete {
            "Mark unfinished"
        } else {
            "Mark finished"
        }
    }

    pub fn toggle_action(&self) -> Command {
        Command::Toggle(self.book.id)
    }

    /// Opens the edit form, pre-populated with the current values.
    pub fn edit_action(&self) -> EditForm {
        EditForm::from(&self.book)
    }

    /// Deleting always goes through a confirmation first.
    pub fn delete_action(&self) -> Command {
        Command::RequestDelete(self.book.id)
    }
}

/// Editable copy of a book's fields. Submitting turns it into an update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditForm {
    pub id: BookId,
    pub title: String,
    pub author: String,
    pub year: u32,
}

impl From<&Book> for EditForm {
    fn from(book: &Book) -> Self {
        Self {
            id: book.id,
            title: book.title.clone(),
            author: book.author.clone(),
            year: book.year,
        }
    }
}

impl EditForm {
    pub fn submit(self) -> Command {
        Command::Update {
            id: self.id,
            update: BookUpdate::new(self.title, self.author, self.year),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShelfView {
    pub unfinished: Vec<BookItem>,
    pub finished: Vec<BookItem>,
}

impl ShelfView {
    pub fn shelf(&self, status: ReadStatus) -> &[BookItem] {
        match status {
            ReadStatus::Unfinished => &self.unfinished,
            ReadStatus::Finished => &self.finished,
        }
    }

    pub fn len(&self) -> usize {
        self.unfinished.len() + self.finished.len()
    }

    pub fn is_empty(&self) -> bool {
        self.unfinished.is_empty() && self.finished.is_empty()
    }
}

/// Splits `books` by read status, keeping their relative order.
pub fn render(books: &[Book]) -> ShelfView {
    let (finished, unfinished): (Vec<_>, Vec<_>) = books
        .iter()
        .cloned()
        .map(|book| BookItem { book })
        .partition(|item| item.book.is_complete);
    ShelfView {
        unfinished,
        finished,
    }
}
