//! In-memory storage
//!
//! Nothing survives the process. Clones share the same map, so a test can
//! keep a handle and inspect what a store wrote.

use crate::storage::{PersistenceAdapter, StorageError};
use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    entries: Rc<RefCell<HashMap<String, String>>>,
    fail_saves: Rc<Cell<bool>>,
    save_count: Rc<Cell<usize>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Storage whose writes always fail
    pub fn failing() -> Self {
        let storage = Self::default();
        storage.set_fail_saves(true);
        storage
    }

    /// Seed a value, bypassing the save counter
    pub fn with_entry(self, key: impl Into<String>, blob: impl Into<String>) -> Self {
        self.entries.borrow_mut().insert(key.into(), blob.into());
        self
    }

    pub fn set_fail_saves(&self, fail: bool) {
        self.fail_saves.set(fail);
    }

    /// Raw blob under `key`
    pub fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    /// Number of successful saves so far
    pub fn save_count(&self) -> usize {
        self.save_count.get()
    }
}

impl PersistenceAdapter for MemoryStorage {
    fn load(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.get(key))
    }

    fn save(&self, key: &str, blob: &str) -> Result<(), StorageError> {
        if self.fail_saves.get() {
            return Err(StorageError::Unavailable(format!(
                "write to '{key}' rejected"
            )));
        }
        self.entries
            .borrow_mut()
            .insert(key.to_string(), blob.to_string());
        self.save_count.set(self.save_count.get() + 1);
        Ok(())
    }
}
