use crate::error::Result;
use std::path::PathBuf;

/// Abstract interface for raw slot I/O.
/// This trait handles the "how" of storage (filesystem vs memory),
/// while [`BookSlot`](super::slot::BookSlot) handles the "what" (the book
/// document and its invariants).
pub trait StorageBackend {
    /// Read the raw value stored under `key`.
    /// Returns Ok(None) if nothing was ever written there.
    /// Returns Err only on actual I/O errors (permissions, disk failure).
    fn read_slot(&self, key: &str) -> Result<Option<String>>;

    /// Overwrite the value stored under `key`.
    /// MUST be atomic (e.g. write to tmp then rename) to avoid partial writes.
    fn write_slot(&self, key: &str, value: &str) -> Result<()>;

    /// Remove the slot. Removing a missing slot is not an error.
    fn remove_slot(&self, key: &str) -> Result<()>;

    /// Where the slot lives. For FsBackend this is a real path, for
    /// MemBackend a virtual one.
    fn slot_path(&self, key: &str) -> PathBuf;
}
