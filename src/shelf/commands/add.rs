use crate::commands::{recover_validation, CmdResult};
use crate::error::Result;
use crate::model::NewBook;
use crate::notify::Notification;
use crate::store::{BookStore, StorageBackend};

pub fn run<B: StorageBackend>(store: &mut BookStore<B>, new_book: NewBook) -> Result<CmdResult> {
    let book = match recover_validation(store.add(new_book), "Add Failed")? {
        Ok(book) => book,
        Err(rejected) => return Ok(rejected),
    };

    let notification = Notification::success(
        "Book Added",
        format!(
            "Book \"{}\" added to the {} shelf!",
            book.title,
            book.status()
        ),
    );
    Ok(CmdResult::default()
        .with_affected_books(vec![book])
        .with_notification(notification))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notify::Severity;
    use crate::store::mem_backend::MemBackend;
    use crate::store::BookSlot;

    fn store() -> BookStore<MemBackend> {
        BookStore::open(BookSlot::new(MemBackend::new())).unwrap()
    }

    #[test]
    fn reports_shelf_of_new_book() {
        let mut store = store();
        let result = run(&mut store, NewBook::new("Dune", "Herbert", 1965, false)).unwrap();
        assert_eq!(result.affected_books.len(), 1);
        let note = &result.notifications[0];
        assert_eq!(note.severity, Severity::Success);
        assert_eq!(note.title, "Book Added");
        assert_eq!(note.message, "Book \"Dune\" added to the Unfinished shelf!");
    }

    #[test]
    fn finished_book_lands_on_finished_shelf() {
        let mut store = store();
        let result = run(&mut store, NewBook::new("Emma", "Austen", 1815, true)).unwrap();
        assert!(result.notifications[0].message.contains("Finished shelf"));
    }

    #[test]
    fn invalid_input_is_rejected_with_error_notification() {
        let mut store = store();
        let result = run(&mut store, NewBook::new("", "Herbert", 1965, false)).unwrap();
        assert!(result.rejected);
        assert!(result.affected_books.is_empty());
        assert_eq!(result.notifications[0].severity, Severity::Error);
        assert_eq!(result.notifications[0].title, "Add Failed");
        assert!(store.is_empty());
    }

    #[test]
    fn storage_failure_is_an_error() {
        let mut store = store();
        store.slot().backend().set_simulate_write_error(true);
        assert!(run(&mut store, NewBook::new("Dune", "Herbert", 1965, false)).is_err());
        assert!(store.is_empty());
    }
}
