use crate::commands::{recover_validation, CmdResult};
use crate::error::Result;
use crate::model::{BookId, BookUpdate};
use crate::notify::Notification;
use crate::store::{BookStore, StorageBackend};

pub fn run<B: StorageBackend>(
    store: &mut BookStore<B>,
    id: BookId,
    update: BookUpdate,
) -> Result<CmdResult> {
    let updated = match recover_validation(store.update(id, update), "Edit Failed")? {
        Ok(updated) => updated,
        Err(rejected) => return Ok(rejected),
    };

    let Some(book) = updated else {
        return Ok(CmdResult::default());
    };

    let notification = Notification::success(
        "Edit Succeeded",
        format!("Book \"{}\" was updated!", book.title),
    );
    Ok(CmdResult::default()
        .with_affected_books(vec![book])
        .with_notification(notification))
}
