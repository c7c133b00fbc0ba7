use super::backend::StorageBackend;
use crate::error::{Result, ShelfError};
use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::path::PathBuf;

/// In-memory storage backend for testing.
///
/// Uses `RefCell` for interior mutability since shelf is single-threaded,
/// which lets the `StorageBackend` trait take `&self` everywhere.
#[derive(Debug, Default)]
pub struct MemBackend {
    slots: RefCell<HashMap<String, String>>,
    simulate_write_error: Cell<bool>,
    fail_after: Cell<Option<usize>>,
    writes: Cell<usize>,
}

impl MemBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable write error simulation for testing error handling.
    pub fn set_simulate_write_error(&self, simulate: bool) {
        self.simulate_write_error.set(simulate);
    }

    /// Fail every write once `count` writes have succeeded.
    pub fn fail_after_writes(&self, count: usize) {
        self.fail_after.set(Some(count));
    }

    /// Seed a slot with raw content, bypassing validation.
    pub fn put_raw(&self, key: &str, value: &str) {
        self.slots
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }

    /// Number of successful writes so far.
    pub fn write_count(&self) -> usize {
        self.writes.get()
    }
}

impl StorageBackend for MemBackend {
    fn read_slot(&self, key: &str) -> Result<Option<String>> {
        Ok(self.slots.borrow().get(key).cloned())
    }

    fn write_slot(&self, key: &str, value: &str) -> Result<()> {
        let budget_spent = self.fail_after.get().is_some_and(|n| self.writes.get() >= n);
        if self.simulate_write_error.get() || budget_spent {
            return Err(ShelfError::Store("simulated write failure".to_string()));
        }
        self.slots
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        self.writes.set(self.writes.get() + 1);
        Ok(())
    }

    fn remove_slot(&self, key: &str) -> Result<()> {
        self.slots.borrow_mut().remove(key);
        Ok(())
    }

    fn slot_path(&self, key: &str) -> PathBuf {
        PathBuf::from(format!("mem://{}", key))
    }
}
