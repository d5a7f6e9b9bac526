//! InMemoryBackingStore - HashMap-backed store for tests and embedding.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use super::{BackingStore, StoreError};

/// In-memory backing store backed by a HashMap.
///
/// Clone-friendly via Arc: clones share storage, which is how tests simulate
/// a process restart over the same medium. An optional quota caps the total
/// bytes of keys plus values, the way browser storage does.
#[derive(Clone, Default)]
pub struct InMemoryBackingStore {
    storage: Arc<RwLock<HashMap<String, String>>>,
    quota: Option<usize>,
}

impl InMemoryBackingStore {
    /// Create a new empty store with no quota.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new empty store that rejects writes past `bytes` total.
    pub fn with_quota(bytes: usize) -> Self {
        Self {
            storage: Arc::default(),
            quota: Some(bytes),
        }
    }

    /// Bytes currently held (keys plus values).
    pub fn usage(&self) -> Result<usize, StoreError> {
        let storage = self
            .storage
            .read()
            .map_err(|_| StoreError::Unavailable("lock poisoned".into()))?;
        Ok(storage.iter().map(|(k, v)| k.len() + v.len()).sum())
    }

    pub fn contains_key(&self, key: &str) -> Result<bool, StoreError> {
        let storage = self
            .storage
            .read()
            .map_err(|_| StoreError::Unavailable("lock poisoned".into()))?;
        Ok(storage.contains_key(key))
    }
}

impl BackingStore for InMemoryBackingStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let storage = self
            .storage
            .read()
            .map_err(|_| StoreError::Unavailable("lock poisoned".into()))?;
        Ok(storage.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let mut storage = self
            .storage
            .write()
            .map_err(|_| StoreError::Unavailable("lock poisoned".into()))?;

        if let Some(quota) = self.quota {
            let others: usize = storage
                .iter()
                .filter(|(k, _)| k.as_str() != key)
                .map(|(k, v)| k.len() + v.len())
                .sum();
            let needed = others + key.len() + value.len();
            if needed > quota {
                return Err(StoreError::QuotaExceeded {
                    key: key.to_string(),
                    needed,
                    quota,
                });
            }
        }

        storage.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        let mut storage = self
            .storage
            .write()
            .map_err(|_| StoreError::Unavailable("lock poisoned".into()))?;
        storage.remove(key);
        Ok(())
    }
}
