//! Detection of stored preferences the store will discard on load.
//!
//! # Design
//! - The browser build installs no tracing subscriber, so the app checks the
//!   raw document itself and reports the reason on the console.

use std::error::Error;

use moneymachine_config::{PREFERENCES_STORAGE_KEY, Preferences, SettingsStorage};

/// Why the stored preferences document cannot be decoded, if it cannot.
///
/// Absent documents and unreadable storage report nothing; the storage
/// backend logs its own failures.
#[must_use]
pub fn corrupt_preferences<S: SettingsStorage>(storage: &S) -> Option<String> {
    let raw = storage.read(PREFERENCES_STORAGE_KEY).ok().flatten()?;
    let err = Preferences::from_document(&raw).err()?;
    Some(match err.source() {
        Some(cause) => format!("{err}: {cause}"),
        None => err.to_string(),
    })
}
