//! # Command Layer
//!
//! One module per operation. Each `run` takes the [`BookStore`] plus typed
//! arguments and returns a [`CmdResult`]: the books it touched and the
//! notifications a UI should show. Nothing here writes to a terminal or
//! prompts; confirmation is requested through the API's gate and answered
//! by the UI.
//!
//! Validation failures are recovered here: the result carries an error
//! notification and `rejected = true`, and the collection is untouched.
//! An unknown id is a silent no-op (empty result).
//!
//! [`BookStore`]: crate::store::BookStore

use crate::error::{Result, ShelfError};
use crate::model::{Book, BookId, BookUpdate, NewBook};
use crate::notify::Notification;
use crate::shelves::ShelfView;

pub mod add;
pub mod delete;
pub mod get;
pub mod list;
pub mod search;
pub mod toggle;
pub mod update;

/// Everything a UI can ask of the shelf, as data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Add(NewBook),
    Update { id: BookId, update: BookUpdate },
    Toggle(BookId),
    /// Ask for confirmation before deleting.
    RequestDelete(BookId),
    /// Delete without asking. Reached by confirming a `RequestDelete`.
    Delete(BookId),
    /// Reached by declining a `RequestDelete`.
    CancelDelete(BookId),
    Search(String),
    List,
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_books: Vec<Book>,
    pub view: Option<ShelfView>,
    /// Question awaiting a yes/no answer, if the command opened one.
    pub confirmation: Option<String>,
    pub notifications: Vec<Notification>,
    /// Input was rejected by validation; nothing changed.
    pub rejected: bool,
}

impl CmdResult {
    pub fn add_notification(&mut self, notification: Notification) {
        self.notifications.push(notification);
    }

    pub fn with_affected_books(mut self, books: Vec<Book>) -> Self {
        self.affected_books = books;
        self
    }

    pub fn with_view(mut self, view: ShelfView) -> Self {
        self.view = Some(view);
        self
    }

    pub fn with_confirmation(mut self, message: impl Into<String>) -> Self {
        self.confirmation = Some(message.into());
        self
    }

    pub fn with_notification(mut self, notification: Notification) -> Self {
        self.notifications.push(notification);
        self
    }

    /// Result for input that failed validation.
    pub fn rejected(notification: Notification) -> Self {
        Self {
            rejected: true,
            ..Self::default()
        }
        .with_notification(notification)
    }

    pub fn is_noop(&self) -> bool {
        self.affected_books.is_empty()
            && self.view.is_none()
            && self.confirmation.is_none()
            && self.notifications.is_empty()
    }
}

/// Turns a validation failure into a rejected result titled `title`;
/// every other error passes through.
pub(crate) fn recover_validation<T>(
    outcome: Result<T>,
    title: &str,
) -> Result<std::result::Result<T, CmdResult>> {
    match outcome {
        Ok(value) => Ok(Ok(value)),
        Err(ShelfError::Validation(message)) => {
            Ok(Err(CmdResult::rejected(Notification::error(title, message))))
        }
        Err(e) => Err(e),
    }
}
