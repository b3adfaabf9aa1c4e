//! Storage doubles for failure-path tests.

use std::cell::Cell;

use moneymachine_config::{MemoryStorage, SettingsStorage, StorageError, StorageResult};

/// Storage whose every operation fails, like a browser with storage disabled.
#[derive(Debug, Default, Clone, Copy)]
pub struct FailingStorage;

impl SettingsStorage for FailingStorage {
    fn read(&self, _key: &str) -> StorageResult<Option<String>> {
        Err(unavailable())
    }

    fn write(&self, _key: &str, _value: &str) -> StorageResult<()> {
        Err(unavailable())
    }

    fn remove(&self, _key: &str) -> StorageResult<()> {
        Err(unavailable())
    }
}

fn unavailable() -> StorageError {
    StorageError::Unavailable {
        backend: "test",
        detail: "storage disabled".to_string(),
    }
}

/// Memory storage that counts writes.
#[derive(Debug, Default)]
pub struct CountingStorage {
    inner: MemoryStorage,
    writes: Cell<usize>,
}

impl CountingStorage {
    /// Create an empty counting store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of successful writes so far.
    #[must_use]
    pub fn writes(&self) -> usize {
        self.writes.get()
    }
}

impl SettingsStorage for CountingStorage {
    fn read(&self, key: &str) -> StorageResult<Option<String>> {
        self.inner.read(key)
    }

    fn write(&self, key: &str, value: &str) -> StorageResult<()> {
        self.inner.write(key, value)?;
        self.writes.set(self.writes.get() + 1);
        Ok(())
    }

    fn remove(&self, key: &str) -> StorageResult<()> {
        self.inner.remove(key)
    }
}
