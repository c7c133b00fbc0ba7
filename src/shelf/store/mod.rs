//! # Storage Layer
//!
//! Books live in a single named slot, overwritten wholesale after every
//! mutation and read back wholesale at startup.
//!
//! ## Layers
//!
//! - [`backend::StorageBackend`]: raw slot I/O, nothing else.
//!   - [`fs_backend::FsBackend`]: one JSON file per slot, atomic writes.
//!   - [`mem_backend::MemBackend`]: in-memory slots for tests.
//! - [`slot::BookSlot`]: the book document inside a slot (`persist` / `load`),
//!   including the checks that reject corrupt or foreign data on load.
//! - [`book_store::BookStore`]: the in-memory collection and its mutations.
//!
//! ## Storage Format
//!
//! ```text
//! <data_dir>/
//! └── books.json    # JSON array of {id, title, author, year, isComplete}
//! ```

pub mod backend;
pub mod book_store;
pub mod fs_backend;
pub mod mem_backend;
pub mod slot;

pub use backend::StorageBackend;
pub use book_store::BookStore;
pub use slot::{BookSlot, DEFAULT_SLOT_KEY};
