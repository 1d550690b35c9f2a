//! In-memory storage adapter

use std::collections::HashMap;
use std::sync::RwLock;

use crate::Result;
use crate::storage::Storage;

/// A simple in-memory storage adapter backed by a `HashMap`.
///
/// Suitable for tests, ephemeral sessions, and any scenario where persistence
/// across process restarts is not required. Blobs are held as raw strings,
/// exactly as a file-backed adapter would persist them.
#[derive(Debug, Default)]
pub struct InMemory {
    blobs: RwLock<HashMap<String, String>>,
}

impl InMemory {
    /// Creates a new, empty `InMemory` store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the keys currently holding a blob.
    pub fn keys(&self) -> Vec<String> {
        let blobs = self.blobs.read().unwrap();
        blobs.keys().cloned().collect()
    }
}

impl Storage for InMemory {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let blobs = self.blobs.read().unwrap();
        Ok(blobs.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut blobs = self.blobs.write().unwrap();
        blobs.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        let mut blobs = self.blobs.write().unwrap();
        blobs.remove(key);
        Ok(())
    }
}
