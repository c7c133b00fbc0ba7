use crate::commands::CmdResult;
use crate::error::Result;
use crate::model::BookId;
use crate::notify::Notification;
use crate::store::{BookStore, StorageBackend};

/// Toggles `ids` in order, skipping unknown ones.
///
/// Each toggle is persisted on its own. If a write fails after earlier
/// toggles went through, the run stops there and the result keeps the
/// earlier notifications plus an error notification for the failed id.
/// A failure on the first toggle is returned as the error itself.
pub fn run<B: StorageBackend>(store: &mut BookStore<B>, ids: &[BookId]) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    for &id in ids {
        let book = match store.toggle(id) {
            Ok(Some(book)) => book,
            Ok(None) => continue,
            Err(e) if result.affected_books.is_empty() => return Err(e),
            Err(e) => {
                result.add_notification(Notification::error(
                    "Toggle Failed",
                    format!("Book {} was not updated: {}", id, e),
                ));
                break;
            }
        };
        result.add_notification(Notification::info(
            "Book Status Updated",
            format!("Book \"{}\" moved to the {} shelf!", book.title, book.status()),
        ));
        result.affected_books.push(book);
    }

    Ok(result)
}
