//! # In-Memory Cart Storage
//!
//! HashMap-backed storage. Used by tests and by embedders that want a
//! throwaway cart (nothing survives the process).

use std::collections::HashMap;
use std::sync::Mutex;

use crate::error::StorageResult;
use crate::storage::CartStorage;

/// Volatile key-value storage.
#[derive(Debug, Default)]
pub struct MemoryCartStorage {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryCartStorage {
    /// Creates an empty storage.
    pub fn new() -> Self {
        MemoryCartStorage::default()
    }

    /// Creates a storage pre-seeded with one entry.
    pub fn with_entry(key: impl Into<String>, value: impl Into<String>) -> Self {
        let storage = MemoryCartStorage::new();
        storage
            .entries
            .lock()
            .expect("storage mutex poisoned")
            .insert(key.into(), value.into());
        storage
    }
}

impl CartStorage for MemoryCartStorage {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        let entries = self.entries.lock().expect("storage mutex poisoned");
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        let mut entries = self.entries.lock().expect("storage mutex poisoned");
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
