//! Key-Value Storage
//!
//! Durable local storage capability scoped to one namespace. Values are
//! plain strings; callers decide the encoding.

use std::collections::BTreeMap;

use parking_lot::Mutex;
use thiserror::Error;

/// Storage result type alias
pub type StorageResult<T> = Result<T, StorageError>;

/// Storage failures
#[derive(Debug, Error)]
pub enum StorageError {
    /// Underlying file system error
    #[error("Storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Stored document could not be parsed
    #[error("Storage is corrupt: {0}")]
    Corrupt(String),

    /// Value could not be encoded
    #[error("Storage encoding error: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Namespaced string key-value store
///
/// Implementations must be safe to share between threads; the session
/// store serializes its own compound writes.
pub trait KeyValueStorage: Send + Sync {
    /// Namespace this storage is scoped to
    fn namespace(&self) -> &str;

    /// Read a value
    fn get(&self, key: &str) -> StorageResult<Option<String>>;

    /// Write a value
    fn set(&self, key: &str, value: &str) -> StorageResult<()>;

    /// Delete a single value (missing keys are not an error)
    fn remove(&self, key: &str) -> StorageResult<()>;

    /// Delete everything in the namespace
    fn clear(&self) -> StorageResult<()>;

    /// Write several values
    ///
    /// Backends that can persist in one step should override this.
    fn set_many(&self, entries: &[(&str, &str)]) -> StorageResult<()> {
        for (key, value) in entries {
            self.set(key, value)?;
        }
        Ok(())
    }
}

/// In-memory storage
///
/// Contents live as long as the value. Used for tests and for runs where
/// persistence is disabled.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    namespace: String,
    entries: Mutex<BTreeMap<String, String>>,
}

impl MemoryStorage {
    pub fn new(namespace: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            entries: Mutex::new(BTreeMap::new()),
        }
    }

    /// Number of stored entries
    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }

    /// Check whether a key is present
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.lock().contains_key(key)
    }
}

impl KeyValueStorage for MemoryStorage {
    fn namespace(&self) -> &str {
        &self.namespace
    }

    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        Ok(self.entries.lock().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        self.entries.lock().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> StorageResult<()> {
        self.entries.lock().remove(key);
        Ok(())
    }

    fn clear(&self) -> StorageResult<()> {
        self.entries.lock().clear();
        Ok(())
    }

    fn set_many(&self, entries: &[(&str, &str)]) -> StorageResult<()> {
        let mut guard = self.entries.lock();
        for (key, value) in entries {
            guard.insert(key.to_string(), value.to_string());
        }
        Ok(())
    }
}

impl<S: KeyValueStorage + ?Sized> KeyValueStorage for std::sync::Arc<S> {
    fn namespace(&self) -> &str {
        (**self).namespace()
    }

    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> StorageResult<()> {
        (**self).remove(key)
    }

    fn clear(&self) -> StorageResult<()> {
        (**self).clear()
    }

    fn set_many(&self, entries: &[(&str, &str)]) -> StorageResult<()> {
        (**self).set_many(entries)
    }
}
