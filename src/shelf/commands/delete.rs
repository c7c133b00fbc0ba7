use crate::commands::{CmdResult, Command};
use crate::confirm::{ConfirmGate, Confirmation};
use crate::error::Result;
use crate::model::BookId;
use crate::notify::Notification;
use crate::store::{BookStore, StorageBackend};

/// Opens a confirmation for deleting `id`. Confirming it yields
/// [`Command::Delete`], declining yields [`Command::CancelDelete`].
pub fn request<B: StorageBackend>(
    store: &BookStore<B>,
    gate: &mut ConfirmGate<Command>,
    id: BookId,
) -> Result<CmdResult> {
    let Some(book) = store.find(id) else {
        return Ok(CmdResult::default());
    };

    let pending = gate.request(Confirmation::new(
        format!("Delete the book \"{}\"?", book.title),
        Command::Delete(id),
        Command::CancelDelete(id),
    ))?;
    Ok(CmdResult::default().with_confirmation(pending.message.clone()))
}

/// Removes the book. Callers are expected to have confirmed first.
pub fn run<B: StorageBackend>(store: &mut BookStore<B>, id: BookId) -> Result<CmdResult> {
    let Some(book) = store.remove(id)? else {
        return Ok(CmdResult::default());
    };

    let notification =
        Notification::error("Book Deleted", format!("\"{}\" was deleted!", book.title));
    Ok(CmdResult::default()
        .with_affected_books(vec![book])
        .with_notification(notification))
}

pub fn cancel() -> CmdResult {
    CmdResult::default().with_notification(Notification::info("Cancelled", "Deletion cancelled."))
}
