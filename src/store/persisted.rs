//! PersistedCollection - In-memory list mirrored to one backing-store key.

use serde::{de::DeserializeOwned, Serialize};
use tracing::{debug, warn};

use super::{BackingStore, StoreError};

/// An in-memory record list kept in sync with a single backing-store key.
///
/// The list is loaded lazily on first [`read`](Self::read). Every
/// [`write`](Self::write) replaces it wholesale and rewrites the whole
/// serialized list under the key. If persisting fails, the in-memory list
/// still holds the new value and stays the source of truth for the session.
pub struct PersistedCollection<T, B> {
    backing: B,
    key: String,
    items: Option<Vec<T>>,
}

impl<T, B> PersistedCollection<T, B>
where
    T: Serialize + DeserializeOwned + Clone,
    B: BackingStore,
{
    pub fn new(backing: B, key: impl Into<String>) -> Self {
        Self {
            backing,
            key: key.into(),
            items: None,
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn backing(&self) -> &B {
        &self.backing
    }

    /// Current collection, loading it from the backing store on first access.
    pub fn read(&mut self) -> &[T] {
        if self.items.is_none() {
            self.items = Some(self.load());
        }
        self.items.as_deref().unwrap_or_default()
    }

    /// Replace the collection and persist it.
    ///
    /// The in-memory view is updated before persisting and is not rolled back
    /// on failure.
    pub fn write(&mut self, items: Vec<T>) -> Result<(), StoreError> {
        let encoded = serde_json::to_string(&items);
        let count = items.len();
        self.items = Some(items);

        let encoded = encoded.map_err(|e| StoreError::Serialize(e.to_string()))?;
        match self.backing.set(&self.key, &encoded) {
            Ok(()) => {
                debug!(key = %self.key, count, "Persisted collection");
                Ok(())
            }
            Err(err) => {
                warn!(
                    key = %self.key,
                    count,
                    error = %err,
                    "Failed to persist collection; keeping in-memory view"
                );
                Err(err)
            }
        }
    }

    /// Forget the in-memory view; the next `read` loads from the backing store.
    pub fn reload(&mut self) {
        self.items = None;
    }

    /// Whether the collection has been loaded yet.
    pub fn is_loaded(&self) -> bool {
        self.items.is_some()
    }

    fn load(&self) -> Vec<T> {
        let raw = match self.backing.get(&self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                debug!(key = %self.key, "No stored collection; starting empty");
                return Vec::new();
            }
            Err(err) => {
                warn!(key = %self.key, error = %err, "Backing store unreadable; starting empty");
                return Vec::new();
            }
        };

        match serde_json::from_str::<Vec<T>>(&raw) {
            Ok(items) => {
                debug!(key = %self.key, count = items.len(), "Loaded collection");
                items
            }
            Err(err) => {
                warn!(
                    key = %self.key,
                    error = %err,
                    "Stored collection is malformed; treating as unset"
                );
                Vec::new()
            }
        }
    }
}
