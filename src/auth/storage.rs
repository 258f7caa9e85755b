//! Durable key-value storage behind the session store.
//!
//! Values are opaque strings. `FileStorage` keeps them as one JSON object in
//! a file written with restricted permissions (0600 on unix). The file is
//! replaced by rename, so readers see either the old map or the new one.

use std::collections::BTreeMap;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::RwLock;

use tracing::warn;

use crate::error::StorageError;

pub trait SessionStorage: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove(&self, key: &str) -> Result<(), StorageError>;

    /// Writes every entry or none of them.
    ///
    /// The default goes key by key and puts earlier keys back when a later
    /// write fails. Implementations that can write in one step override it.
    fn set_all(&self, entries: &[(&str, &str)]) -> Result<(), StorageError> {
        let mut written: Vec<(&str, Option<String>)> = Vec::with_capacity(entries.len());

        for &(key, value) in entries {
            let previous = self.get(key)?;
            if let Err(e) = self.set(key, value) {
                for (key, previous) in written.into_iter().rev() {
                    let restored = match previous {
                        Some(value) => self.set(key, &value),
                        None => self.remove(key),
                    };
                    if let Err(undo) = restored {
                        warn!(key, error = %undo, "could not restore session entry");
                    }
                }
                return Err(e);
            }
            written.push((key, previous));
        }

        Ok(())
    }

    fn remove_all(&self, keys: &[&str]) -> Result<(), StorageError> {
        keys.iter().try_for_each(|key| self.remove(key))
    }
}

/// Process-local storage; gone when the process exits.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: RwLock<BTreeMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStorage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let entries = self.entries.read().map_err(|_| StorageError::Poisoned)?;
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.set_all(&[(key, value)])
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.remove_all(&[key])
    }

    fn set_all(&self, entries: &[(&str, &str)]) -> Result<(), StorageError> {
        let mut map = self.entries.write().map_err(|_| StorageError::Poisoned)?;
        for &(key, value) in entries {
            map.insert(key.to_string(), value.to_string());
        }
        Ok(())
    }

    fn remove_all(&self, keys: &[&str]) -> Result<(), StorageError> {
        let mut map = self.entries.write().map_err(|_| StorageError::Poisoned)?;
        for key in keys {
            map.remove(*key);
        }
        Ok(())
    }
}

/// JSON file on disk. Every write rewrites the whole file.
///
/// Reads report a corrupt file as `StorageError::Format`; the next write
/// replaces it.
#[derive(Debug)]
pub struct FileStorage {
    path: PathBuf,
    lock: RwLock<()>,
}

impl FileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: RwLock::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Missing file reads as empty.
    fn load(&self) -> Result<BTreeMap<String, String>, StorageError> {
        match fs::read_to_string(&self.path) {
            Ok(contents) if contents.trim().is_empty() => Ok(BTreeMap::new()),
            Ok(contents) => Ok(serde_json::from_str(&contents)?),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(BTreeMap::new()),
            Err(e) => Err(e.into()),
        }
    }

    /// Like `load`, but a corrupt file counts as empty. The flag is set when
    /// the file has to be rewritten for that reason.
    fn load_for_write(&self) -> Result<(BTreeMap<String, String>, bool), StorageError> {
        match self.load() {
            Ok(entries) => Ok((entries, false)),
            Err(StorageError::Format(e)) => {
                warn!(path = %self.path.display(), error = %e, "overwriting unreadable session file");
                Ok((BTreeMap::new(), true))
            }
            Err(e) => Err(e),
        }
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_else(|| "session".into());
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    fn save(&self, entries: &BTreeMap<String, String>) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let contents = serde_json::to_string_pretty(entries)?;
        let temp_path = self.temp_path();

        let mut options = OpenOptions::new();
        options.write(true).create(true).truncate(true);
        #[cfg(unix)]
        {
            use std::os::unix::fs::OpenOptionsExt;
            options.mode(0o600);
        }

        let mut temp = options.open(&temp_path)?;
        temp.write_all(contents.as_bytes())?;
        temp.sync_all()?;
        drop(temp);

        fs::rename(&temp_path, &self.path)?;
        Ok(())
    }
}

impl SessionStorage for FileStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let _guard = self.lock.read().map_err(|_| StorageError::Poisoned)?;
        Ok(self.load()?.remove(key))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.set_all(&[(key, value)])
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.remove_all(&[key])
    }

    fn set_all(&self, entries: &[(&str, &str)]) -> Result<(), StorageError> {
        let _guard = self.lock.write().map_err(|_| StorageError::Poisoned)?;
        let (mut map, _) = self.load_for_write()?;
        for &(key, value) in entries {
            map.insert(key.to_string(), value.to_string());
        }
        self.save(&map)
    }

    fn remove_all(&self, keys: &[&str]) -> Result<(), StorageError> {
        let _guard = self.lock.write().map_err(|_| StorageError::Poisoned)?;
        let (mut map, mut changed) = self.load_for_write()?;
        for key in keys {
            changed |= map.remove(*key).is_some();
        }
        if changed {
            self.save(&map)?;
        }
        Ok(())
    }
}
