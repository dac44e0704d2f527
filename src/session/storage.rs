//! Durable key-value storage for the session. `FileStore` keeps one JSON object
//! per namespace file and rewrites it atomically on every change; `MemoryStore`
//! is the in-process equivalent. Values are plain strings and there is no schema
//! versioning.

use serde_json::Map;
use std::{
    collections::HashMap,
    fs,
    io::{self, Write},
    path::{Path, PathBuf},
    sync::Mutex,
};
use thiserror::Error;
use tracing::{debug, instrument, warn};

/// File name used for the session namespace inside the session directory.
pub const SESSION_FILE: &str = "session.json";

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage I/O error at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("storage file {} is not a JSON object: {source}", path.display())]
    Corrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("storage lock poisoned")]
    Poisoned,
}

/// String key-value storage with durable semantics.
pub trait KeyValueStore {
    /// # Errors
    /// Returns an error if the backing storage cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// # Errors
    /// Returns an error if the backing storage cannot be written.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Removing a missing key is not an error.
    /// # Errors
    /// Returns an error if the backing storage cannot be written.
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let entries = self.entries.lock().map_err(|_| StorageError::Poisoned)?;
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut entries = self.entries.lock().map_err(|_| StorageError::Poisoned)?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        let mut entries = self.entries.lock().map_err(|_| StorageError::Poisoned)?;
        entries.remove(key);
        Ok(())
    }
}

/// JSON-file backed store. The file only exists while it holds at least one key.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    // serializes read-modify-write cycles within this process
    lock: Mutex<()>,
}

impl FileStore {
    /// Opens the store at `dir/session.json`, creating `dir` if needed.
    /// # Errors
    /// Returns an error if the directory cannot be created.
    pub fn open(dir: &Path) -> Result<Self, StorageError> {
        fs::create_dir_all(dir).map_err(|source| StorageError::Io {
            path: dir.to_path_buf(),
            source,
        })?;

        Ok(Self::with_path(dir.join(SESSION_FILE)))
    }

    #[must_use]
    pub fn with_path(path: PathBuf) -> Self {
        Self {
            path,
            lock: Mutex::new(()),
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_map(&self) -> Result<Map<String, serde_json::Value>, StorageError> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(Map::new()),
            Err(source) => {
                return Err(StorageError::Io {
                    path: self.path.clone(),
                    source,
                })
            }
        };

        if raw.trim().is_empty() {
            return Ok(Map::new());
        }

        serde_json::from_str(&raw).map_err(|source| StorageError::Corrupt {
            path: self.path.clone(),
            source,
        })
    }

    /// Reads the map for a write. A corrupt file is discarded so the write
    /// replaces it; the flag reports whether that happened.
    fn read_map_for_write(&self) -> Result<(Map<String, serde_json::Value>, bool), StorageError> {
        match self.read_map() {
            Ok(map) => Ok((map, false)),
            Err(err @ StorageError::Corrupt { .. }) => {
                warn!("discarding unreadable storage file: {err}");
                Ok((Map::new(), true))
            }
            Err(err) => Err(err),
        }
    }

    #[instrument(skip(self, map), fields(path = %self.path.display(), keys = map.len()))]
    fn write_map(&self, map: &Map<String, serde_json::Value>) -> Result<(), StorageError> {
        let io_err = |source: io::Error| StorageError::Io {
            path: self.path.clone(),
            source,
        };

        if map.is_empty() {
            debug!("no keys left, removing storage file");
            return match fs::remove_file(&self.path) {
                Err(err) if err.kind() != io::ErrorKind::NotFound => Err(io_err(err)),
                _ => Ok(()),
            };
        }

        let payload = serde_json::to_vec_pretty(map).map_err(|source| StorageError::Corrupt {
            path: self.path.clone(),
            source,
        })?;

        let tmp_path = self.path.with_extension("json.tmp");
        let mut file = create_private(&tmp_path).map_err(io_err)?;
        file.write_all(&payload).map_err(io_err)?;
        file.sync_all().map_err(io_err)?;
        fs::rename(&tmp_path, &self.path).map_err(io_err)?;

        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let _guard = self.lock.lock().map_err(|_| StorageError::Poisoned)?;
        let map = self.read_map()?;
        Ok(map
            .get(key)
            .and_then(serde_json::Value::as_str)
            .map(str::to_string))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let _guard = self.lock.lock().map_err(|_| StorageError::Poisoned)?;
        let (mut map, _) = self.read_map_for_write()?;
        map.insert(key.to_string(), serde_json::Value::String(value.to_string()));
        self.write_map(&map)
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        let _guard = self.lock.lock().map_err(|_| StorageError::Poisoned)?;
        let (mut map, discarded) = self.read_map_for_write()?;
        if map.remove(key).is_none() && !discarded {
            return Ok(());
        }
        self.write_map(&map)
    }
}

// The token is a bearer credential, keep it owner-readable only.
#[cfg(unix)]
fn create_private(path: &Path) -> io::Result<fs::File> {
    use std::os::unix::fs::OpenOptionsExt;

    fs::OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .mode(0o600)
        .open(path)
}

#[cfg(not(unix))]
fn create_private(path: &Path) -> io::Result<fs::File> {
    fs::OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(path)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn memory_store_set_get_remove() {
        let store = MemoryStore::new();
        assert_eq!(store.get("k").unwrap(), None);
        store.set("k", "v").unwrap();
        assert_eq!(store.get("k").unwrap(), Some("v".to_string()));
        store.remove("k").unwrap();
        store.remove("k").unwrap();
        assert_eq!(store.get("k").unwrap(), None);
    }

    #[test]
    fn file_store_missing_file_reads_empty() {
        let dir = TempDir::new().unwrap();
        let store = FileStore::open(dir.path()).unwrap();
        assert_eq!(store.get("authToken").unwrap(), None);
        assert!(!store.path().exists());
    }

    #[test]
    fn file_store_persists_across_reopen() {
        let dir = TempDir::new().unwrap();
        {
            let store = FileStore::open(dir.path()).unwrap();
            store.set("authToken", "T1").unwrap();
            store.set("username", "alice").unwrap();
        }

        let reopened = FileStore::open(dir.path()).unwrap();
        assert_eq!(reopened.get("authToken").unwrap(), Some("T1".to_string()));
        assert_eq!(reopened.get("username").unwrap(), Some("alice".to_string()));
    }

    #[test]
    fn file_store_removes_file_when_empty() {
        let dir = TempDir::new().unwrap();
        let store = FileStore::open(dir.path()).unwrap();
        store.set("authToken", "T1").unwrap();
        assert!(store.path().exists());

        store.remove("authToken").unwrap();
        assert!(!store.path().exists());

        // removing again is a no-op
        store.remove("authToken").unwrap();
    }

    #[test]
    fn file_store_rejects_corrupt_file() {
        let dir = TempDir::new().unwrap();
        let store = FileStore::open(dir.path()).unwrap();
        fs::write(store.path(), "not json").unwrap();

        let result = store.get("authToken");
        assert!(matches!(result, Err(StorageError::Corrupt { .. })));
    }

    #[test]
    fn file_store_remove_discards_corrupt_file() {
        let dir = TempDir::new().unwrap();
        let store = FileStore::open(dir.path()).unwrap();
        fs::write(store.path(), "{truncated").unwrap();

        store.remove("authToken").unwrap();
        assert!(!store.path().exists());
    }

    #[test]
    fn file_store_set_replaces_corrupt_file() {
        let dir = TempDir::new().unwrap();
        let store = FileStore::open(dir.path()).unwrap();
        fs::write(store.path(), "{truncated").unwrap();

        store.set("authToken", "T1").unwrap();
        assert_eq!(store.get("authToken").unwrap(), Some("T1".to_string()));
    }

    #[test]
    fn file_store_creates_nested_directory() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("a").join("b");
        let store = FileStore::open(&nested).unwrap();
        store.set("k", "v").unwrap();
        assert!(nested.join(SESSION_FILE).exists());
    }

    #[cfg(unix)]
    #[test]
    fn file_store_is_owner_only() {
        use std::os::unix::fs::PermissionsExt;

        let dir = TempDir::new().unwrap();
        let store = FileStore::open(dir.path()).unwrap();
        store.set("authToken", "T1").unwrap();

        let mode = fs::metadata(store.path()).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o600);
    }
}
