//! # Shelf Architecture
//!
//! Shelf keeps a personal reading list: books with a title, an author, a
//! publication year and a finished flag, split into an "unfinished" and a
//! "finished" shelf. The whole collection lives in one storage slot as a
//! JSON array and is rewritten after every change.
//!
//! ## Layering
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  UI (src/shelf/cli/ in the binary, or any other client)     │
//! │  - turns raw input into `Command`s                          │
//! │  - renders `CmdResult`s and answers confirmations           │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - owns the store, the confirmation gate, the notice board  │
//! │  - dispatches commands, re-projects shelves after mutations │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*)                                 │
//! │  - validation, notifications, no terminal I/O               │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Store (store/*)                                            │
//! │  - in-memory collection + persisted slot, kept in sync      │
//! │  - pluggable `StorageBackend` (filesystem, in-memory)       │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! Nothing from `api.rs` inward prints, prompts or exits. Library code logs
//! through `tracing`; installing a subscriber is the binary's job.
//!
//! ## Testing
//!
//! Unit tests sit next to the code and run against
//! [`store::mem_backend::MemBackend`]. Filesystem and end-to-end CLI tests
//! live under `tests/`.

pub mod api;
pub mod commands;
pub mod config;
pub mod confirm;
pub mod error;
pub mod model;
pub mod notify;
pub mod search;
pub mod shelves;
pub mod store;
