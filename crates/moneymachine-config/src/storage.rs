//! Key-value persistence backends.
//!
//! # Design
//! - The trait mirrors browser `localStorage`: string keys, string values,
//!   synchronous calls, `&self` receivers.
//! - `MemoryStorage` backs tests; `FileStorage` keeps every key in one JSON
//!   object on disk for the command line.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

use crate::error::StorageResult;

/// Synchronous string key-value store.
pub trait SettingsStorage {
    /// Read a value, returning `None` when the key is absent.
    ///
    /// # Errors
    ///
    /// Returns an error when the backend cannot be read.
    fn read(&self, key: &str) -> StorageResult<Option<String>>;

    /// Insert or replace a value.
    ///
    /// # Errors
    ///
    /// Returns an error when the backend rejects the write.
    fn write(&self, key: &str, value: &str) -> StorageResult<()>;

    /// Delete a key; deleting an absent key succeeds.
    ///
    /// # Errors
    ///
    /// Returns an error when the backend rejects the removal.
    fn remove(&self, key: &str) -> StorageResult<()>;
}

impl<S: SettingsStorage + ?Sized> SettingsStorage for &S {
    fn read(&self, key: &str) -> StorageResult<Option<String>> {
        (**self).read(key)
    }

    fn write(&self, key: &str, value: &str) -> StorageResult<()> {
        (**self).write(key, value)
    }

    fn remove(&self, key: &str) -> StorageResult<()> {
        (**self).remove(key)
    }
}

impl<S: SettingsStorage + ?Sized> SettingsStorage for Rc<S> {
    fn read(&self, key: &str) -> StorageResult<Option<String>> {
        (**self).read(key)
    }

    fn write(&self, key: &str, value: &str) -> StorageResult<()> {
        (**self).write(key, value)
    }

    fn remove(&self, key: &str) -> StorageResult<()> {
        (**self).remove(key)
    }
}

/// In-process store.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: RefCell<BTreeMap<String, String>>,
}

impl MemoryStorage {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with entries.
    #[must_use]
    pub fn with_entries<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            entries: RefCell::new(
                entries
                    .into_iter()
                    .map(|(key, value)| (key.into(), value.into()))
                    .collect(),
            ),
        }
    }

    /// Number of stored keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    /// Whether the store holds no keys.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl SettingsStorage for MemoryStorage {
    fn read(&self, key: &str) -> StorageResult<Option<String>> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> StorageResult<()> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> StorageResult<()> {
        self.entries.borrow_mut().remove(key);
        Ok(())
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub use file::FileStorage;

#[cfg(not(target_arch = "wasm32"))]
mod file {
    use std::collections::BTreeMap;
    use std::fs;
    use std::io::ErrorKind;
    use std::path::{Path, PathBuf};

    use super::SettingsStorage;
    use crate::error::{StorageError, StorageResult};

    /// Store persisting all keys as one JSON object file.
    #[derive(Debug, Clone)]
    pub struct FileStorage {
        path: PathBuf,
    }

    impl FileStorage {
        /// Open a store at `path`; the file is created on first write.
        #[must_use]
        pub fn new(path: impl Into<PathBuf>) -> Self {
            Self { path: path.into() }
        }

        /// Location of the backing file.
        #[must_use]
        pub fn path(&self) -> &Path {
            &self.path
        }

        fn load(&self) -> StorageResult<BTreeMap<String, String>> {
            let raw = match fs::read_to_string(&self.path) {
                Ok(raw) => raw,
                Err(err) if err.kind() == ErrorKind::NotFound => return Ok(BTreeMap::new()),
                Err(source) => {
                    return Err(StorageError::Io {
                        operation: "read",
                        path: self.path.clone(),
                        source,
                    });
                }
            };
            if raw.trim().is_empty() {
                return Ok(BTreeMap::new());
            }
            serde_json::from_str(&raw).map_err(|source| StorageError::Serialization {
                operation: "decode",
                source,
            })
        }

        fn save(&self, entries: &BTreeMap<String, String>) -> StorageResult<()> {
            if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent).map_err(|source| StorageError::Io {
                    operation: "create_dir",
                    path: parent.to_path_buf(),
                    source,
                })?;
            }
            let body =
                serde_json::to_string_pretty(entries).map_err(|source| StorageError::Serialization {
                    operation: "encode",
                    source,
                })?;
            fs::write(&self.path, body).map_err(|source| StorageError::Io {
                operation: "write",
                path: self.path.clone(),
                source,
            })
        }
    }

    impl SettingsStorage for FileStorage {
        fn read(&self, key: &str) -> StorageResult<Option<String>> {
            Ok(self.load()?.remove(key))
        }

        fn write(&self, key: &str, value: &str) -> StorageResult<()> {
            let mut entries = self.load()?;
            entries.insert(key.to_string(), value.to_string());
            self.save(&entries)
        }

        fn remove(&self, key: &str) -> StorageResult<()> {
            let mut entries = self.load()?;
            if entries.remove(key).is_some() {
                self.save(&entries)?;
            }
            Ok(())
        }
    }
}
