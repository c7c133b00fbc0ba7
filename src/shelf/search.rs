//! Title search over a book collection.

use crate::model::Book;

/// Outcome of a title search. An empty result is a normal outcome, not an
/// error; callers use [`SearchResult::is_empty`] to tell the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    /// The keyword as it was matched: trimmed and lower-cased.
    pub keyword: String,
    pub books: Vec<Book>,
}

impl SearchResult {
    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }
}

/// Case-insensitive substring match on titles, keeping collection order.
/// An empty keyword matches every book.
pub fn filter_by_title(books: &[Book], keyword: &str) -> SearchResult {
    let keyword = keyword.trim().to_lowercase();
    let books = books
        .iter()
        .filter(|b| b.title.to_lowercase().contains(&keyword))
        .cloned()
        .collect();
    SearchResult { keyword, books }
}
