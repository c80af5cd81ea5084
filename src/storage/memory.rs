//! In-memory storage implementation for testing.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::Mutex;

use crate::error::Result;
use crate::storage::traits::{Storage, validate_key};

/// Keeps values in a shared map. Clones see the same contents.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    values: Arc<Mutex<HashMap<String, Vec<u8>>>>,
}

impl MemoryStorage {
    /// Create an empty memory storage.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored keys.
    pub fn len(&self) -> usize {
        self.values.lock().len()
    }

    /// Whether nothing is stored.
    pub fn is_empty(&self) -> bool {
        self.values.lock().is_empty()
    }
}

impl Storage for MemoryStorage {
    fn read(&self, key: &str) -> Result<Option<Vec<u8>>> {
        validate_key(key)?;
        Ok(self.values.lock().get(key).cloned())
    }

    fn write(&self, key: &str, data: &[u8]) -> Result<()> {
        validate_key(key)?;
        self.values.lock().insert(key.to_string(), data.to_vec());
        Ok(())
    }

    fn exists(&self, key: &str) -> bool {
        self.values.lock().contains_key(key)
    }

    fn delete(&self, key: &str) -> Result<()> {
        validate_key(key)?;
        self.values.lock().remove(key);
        Ok(())
    }

    fn list_keys(&self) -> Result<Vec<String>> {
        let mut keys: Vec<String> = self.values.lock().keys().cloned().collect();
        keys.sort();
        Ok(keys)
    }
}
