//! Seeded stores and temporary files.

use anyhow::{Context, Result};
use moneymachine_config::{
    FileStorage, MemoryStorage, PREFERENCES_STORAGE_KEY, Preferences, SECTION_STORAGE_KEY,
    SectionId,
};
use tempfile::TempDir;

/// Memory store holding `prefs` under the preferences key.
///
/// # Errors
///
/// Returns an error if the preferences cannot be encoded.
pub fn seeded_memory(prefs: &Preferences) -> Result<MemoryStorage> {
    let doc = prefs.to_document().context("encode preferences fixture")?;
    Ok(MemoryStorage::with_entries([(PREFERENCES_STORAGE_KEY, doc)]))
}

/// Memory store holding a raw value under the section key.
#[must_use]
pub fn with_section(raw: &str) -> MemoryStorage {
    MemoryStorage::with_entries([(SECTION_STORAGE_KEY, raw)])
}

/// Memory store holding both a preferences document and an active section.
///
/// # Errors
///
/// Returns an error if the preferences cannot be encoded.
pub fn seeded_profile(prefs: &Preferences, section: SectionId) -> Result<MemoryStorage> {
    let doc = prefs.to_document().context("encode preferences fixture")?;
    Ok(MemoryStorage::with_entries([
        (PREFERENCES_STORAGE_KEY, doc),
        (SECTION_STORAGE_KEY, section.as_str().to_string()),
    ]))
}

/// File store inside a fresh temporary directory.
///
/// The directory is removed when the returned guard drops.
///
/// # Errors
///
/// Returns an error if the temporary directory cannot be created.
pub fn temp_file_storage() -> Result<(TempDir, FileStorage)> {
    let dir = tempfile::tempdir().context("create temp settings dir")?;
    let storage = FileStorage::new(dir.path().join("moneymachine-settings.json"));
    Ok((dir, storage))
}

#[cfg(test)]
mod tests {
    use super::*;
    use moneymachine_config::{CurrencyCode, SettingsStorage};

    #[test]
    fn seeded_memory_round_trips_preferences() -> Result<()> {
        let prefs = Preferences {
            currency: CurrencyCode::Gbp,
            ..Preferences::default()
        };
        let storage = seeded_memory(&prefs)?;
        let raw = storage
            .read(PREFERENCES_STORAGE_KEY)?
            .context("document present")?;
        assert_eq!(Preferences::from_document(&raw)?, prefs);
        Ok(())
    }

    #[test]
    fn temp_file_storage_starts_empty() -> Result<()> {
        let (_dir, storage) = temp_file_storage()?;
        assert_eq!(storage.read(SECTION_STORAGE_KEY)?, None);
        assert!(!storage.path().exists());
        Ok(())
    }

    #[test]
    fn seeded_profile_sets_both_keys() -> Result<()> {
        let storage = seeded_profile(&Preferences::default(), SectionId::Taxes)?;
        assert_eq!(storage.len(), 2);
        assert_eq!(
            storage.read(SECTION_STORAGE_KEY)?.as_deref(),
            Some("taxes")
        );
        Ok(())
    }
}
