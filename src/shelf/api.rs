//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer and the single
//! entry point for every UI. It owns the book store, the confirmation gate
//! and the notice board, so UI handlers get them injected instead of
//! reaching for shared state.
//!
//! ## Command Dispatch
//!
//! UIs translate raw events (a submitted form, a button press, a CLI
//! invocation) into a typed [`Command`] and hand it to [`ShelfApi::dispatch`].
//! The per-operation methods exist for callers that prefer plain calls;
//! both paths run the same command functions.
//!
//! After every mutation the shelf view is re-projected and attached to the
//! result, and the result's last notification is put on the notice board.
//!
//! ## Generic Over StorageBackend
//!
//! - Production: `ShelfApi<FsBackend>`
//! - Testing: `ShelfApi<MemBackend>`

use crate::commands::{self, CmdResult, Command};
use crate::confirm::{Choice, ConfirmGate, Confirmation};
use crate::error::Result;
use crate::model::{Book, BookId, BookUpdate, NewBook};
use crate::notify::{NoticeBoard, Notification};
use crate::shelves::{self, ShelfView};
use crate::store::fs_backend::FsBackend;
use crate::store::{BookSlot, BookStore, StorageBackend};
use std::path::{Path, PathBuf};

pub struct ShelfApi<B: StorageBackend> {
    store: BookStore<B>,
    confirmations: ConfirmGate<Command>,
    notices: NoticeBoard,
}

impl ShelfApi<FsBackend> {
    /// Opens the shelf stored in `<data_dir>/<key>.json`.
    pub fn open_dir(data_dir: impl AsRef<Path>, key: &str) -> Result<Self> {
        let backend = FsBackend::new(data_dir.as_ref().to_path_buf());
        Self::open(BookSlot::with_key(backend, key)?)
    }
}

impl<B: StorageBackend> ShelfApi<B> {
    /// Loads the persisted collection from `slot`.
    pub fn open(slot: BookSlot<B>) -> Result<Self> {
        Ok(Self::new(BookStore::open(slot)?))
    }

    pub fn new(store: BookStore<B>) -> Self {
        Self {
            store,
            confirmations: ConfirmGate::new(),
            notices: NoticeBoard::new(),
        }
    }

    pub fn dispatch(&mut self, command: Command) -> Result<CmdResult> {
        let mutates = matches!(
            command,
            Command::Add(_) | Command::Update { .. } | Command::Toggle(_) | Command::Delete(_)
        );

        let result = match command {
            Command::Add(new_book) => commands::add::run(&mut self.store, new_book)?,
            Command::Update { id, update } => commands::update::run(&mut self.store, id, update)?,
            Command::Toggle(id) => commands::toggle::run(&mut self.store, &[id])?,
            Command::RequestDelete(id) => {
                commands::delete::request(&self.store, &mut self.confirmations, id)?
            }
            Command::Delete(id) => commands::delete::run(&mut self.store, id)?,
            Command::CancelDelete(_) => commands::delete::cancel(),
            Command::Search(keyword) => commands::search::run(&self.store, &keyword)?,
            Command::List => commands::list::run(&self.store)?,
        };

        Ok(self.settle(result, mutates))
    }

    /// Re-projects the shelves after a mutation and posts the latest
    /// notification.
    fn settle(&mut self, mut result: CmdResult, mutates: bool) -> CmdResult {
        if mutates && !result.affected_books.is_empty() {
            result.view = Some(self.view());
        }
        if let Some(last) = result.notifications.last() {
            self.notices.show(last.clone());
        }
        result
    }

    pub fn add_book(&mut self, new_book: NewBook) -> Result<CmdResult> {
        self.dispatch(Command::Add(new_book))
    }

    pub fn update_book(&mut self, id: BookId, update: BookUpdate) -> Result<CmdResult> {
        self.dispatch(Command::Update { id, update })
    }

    /// Toggles every id in order; unknown ids are skipped.
    pub fn toggle_books(&mut self, ids: &[BookId]) -> Result<CmdResult> {
        let result = commands::toggle::run(&mut self.store, ids)?;
        Ok(self.settle(result, true))
    }

    /// Asks for confirmation before deleting. Answer with
    /// [`resolve_confirmation`](Self::resolve_confirmation).
    pub fn request_delete(&mut self, id: BookId) -> Result<CmdResult> {
        self.dispatch(Command::RequestDelete(id))
    }

    /// Deletes without asking.
    pub fn delete_book(&mut self, id: BookId) -> Result<CmdResult> {
        self.dispatch(Command::Delete(id))
    }

    pub fn pending_confirmation(&self) -> Option<&Confirmation<Command>> {
        self.confirmations.pending()
    }

    /// Answers the pending confirmation and runs the chosen command.
    pub fn resolve_confirmation(&mut self, choice: Choice) -> Result<CmdResult> {
        let command = self.confirmations.resolve(choice)?;
        self.dispatch(command)
    }

    pub fn search(&mut self, keyword: &str) -> Result<CmdResult> {
        self.dispatch(Command::Search(keyword.to_string()))
    }

    pub fn list(&mut self) -> Result<CmdResult> {
        self.dispatch(Command::List)
    }

    pub fn find(&self, id: BookId) -> Option<Book> {
        commands::get::find(&self.store, id)
    }

    pub fn get_book(&self, id: BookId) -> Result<CmdResult> {
        commands::get::run(&self.store, id)
    }

    pub fn books(&self) -> &[Book] {
        self.store.books()
    }

    pub fn view(&self) -> ShelfView {
        shelves::render(self.store.books())
    }

    pub fn notice(&self) -> Option<&Notification> {
        self.notices.current()
    }

    pub fn dismiss_notice(&mut self) -> Option<Notification> {
        self.notices.dismiss()
    }

    pub fn slot_path(&self) -> PathBuf {
        self.store.slot().path()
    }

    pub fn store(&self) -> &BookStore<B> {
        &self.store
    }
}
