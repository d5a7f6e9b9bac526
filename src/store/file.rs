//! FileBackingStore - JSON-file storage with atomic writes.

use std::collections::BTreeMap;
use std::ffi::OsString;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing::{debug, warn};

use super::{BackingStore, StoreError};

/// Backing store persisted as one JSON object file (`{"key": "value", ...}`).
///
/// A missing file means every key is absent. Writes go to a sibling temp
/// file which is then renamed over the target, so a failed write leaves the
/// previous content intact.
#[derive(Debug)]
pub struct FileBackingStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl FileBackingStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Sibling temp file: the full file name plus `.tmp`, so stores that
    /// share a stem never share a temp file.
    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(OsString::from)
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    fn read_map(&self) -> Result<BTreeMap<String, String>, StoreError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(BTreeMap::new()),
            Err(e) => {
                return Err(StoreError::Unavailable(format!(
                    "failed to read {:?}: {}",
                    self.path, e
                )))
            }
        };

        if content.trim().is_empty() {
            return Ok(BTreeMap::new());
        }

        serde_json::from_str(&content)
            .map_err(|e| StoreError::Corrupt(format!("{:?}: {}", self.path, e)))
    }

    /// Map to rewrite on `set`/`remove`. Corrupt content is replaced rather
    /// than blocking every future write.
    fn read_map_for_update(&self) -> Result<BTreeMap<String, String>, StoreError> {
        match self.read_map() {
            Err(StoreError::Corrupt(reason)) => {
                warn!(path = ?self.path, %reason, "Discarding corrupt store file");
                Ok(BTreeMap::new())
            }
            other => other,
        }
    }

    fn write_atomic(&self, map: &BTreeMap<String, String>) -> Result<(), StoreError> {
        debug!(path = ?self.path, keys = map.len(), "Writing store file atomically");

        let content =
            serde_json::to_string_pretty(map).map_err(|e| StoreError::Serialize(e.to_string()))?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| {
                StoreError::Unavailable(format!("failed to create {:?}: {}", parent, e))
            })?;
        }

        let temp_path = self.temp_path();
        fs::write(&temp_path, content).map_err(|e| {
            StoreError::Unavailable(format!("failed to write {:?}: {}", temp_path, e))
        })?;
        fs::rename(&temp_path, &self.path).map_err(|e| {
            StoreError::Unavailable(format!(
                "failed to rename {:?} to {:?}: {}",
                temp_path, self.path, e
            ))
        })?;

        Ok(())
    }
}

impl BackingStore for FileBackingStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.read_map()?.remove(key))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let _guard = self
            .write_lock
            .lock()
            .map_err(|_| StoreError::Unavailable("lock poisoned".into()))?;

        let mut map = self.read_map_for_update()?;
        map.insert(key.to_string(), value.to_string());
        self.write_atomic(&map)
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        let _guard = self
            .write_lock
            .lock()
            .map_err(|_| StoreError::Unavailable("lock poisoned".into()))?;

        let mut map = self.read_map_for_update()?;
        if map.remove(key).is_none() {
            return Ok(());
        }
        self.write_atomic(&map)
    }
}
