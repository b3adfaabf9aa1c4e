//! Store wiring and error types shared by command handlers.

use std::fmt::{self, Display, Formatter};
use std::path::Path;

use anyhow::anyhow;
use moneymachine_config::{
    ConfigError, FileStorage, PREFERENCES_STORAGE_KEY, PreferencesStore, SECTION_STORAGE_KEY,
    SectionController, SectionId, SettingsStorage,
};

/// CLI-level error type to distinguish validation from operational failures.
#[derive(Debug)]
pub(crate) enum CliError {
    Validation(String),
    Failure(anyhow::Error),
}

/// Convenience alias for functions returning a `CliError`.
pub(crate) type CliResult<T> = Result<T, CliError>;

impl CliError {
    pub(crate) fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub(crate) fn failure(error: impl Into<anyhow::Error>) -> Self {
        Self::Failure(error.into())
    }

    pub(crate) const fn exit_code(&self) -> i32 {
        match self {
            Self::Validation(_) => 2,
            Self::Failure(_) => 3,
        }
    }

    pub(crate) fn display_message(&self) -> String {
        match self {
            Self::Validation(message) => message.clone(),
            Self::Failure(error) => format!("{error:#}"),
        }
    }
}

impl Display for CliError {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        formatter.write_str("cli error")
    }
}

impl std::error::Error for CliError {}

impl From<ConfigError> for CliError {
    fn from(err: ConfigError) -> Self {
        Self::validation(err.to_string())
    }
}

/// Preferences and section state backed by one settings file.
pub(crate) struct AppContext {
    pub(crate) storage: FileStorage,
    pub(crate) preferences: PreferencesStore<FileStorage>,
    pub(crate) sections: SectionController<FileStorage>,
}

impl AppContext {
    /// Open the settings file, failing when it exists but cannot be read.
    pub(crate) fn open(path: &Path) -> CliResult<Self> {
        let storage = FileStorage::new(path);
        storage.read(PREFERENCES_STORAGE_KEY).map_err(|err| {
            CliError::failure(anyhow!(err).context(format!(
                "failed to open settings file {}",
                path.display()
            )))
        })?;
        Ok(Self {
            preferences: PreferencesStore::load(storage.clone()),
            sections: SectionController::rehydrate(storage.clone()),
            storage,
        })
    }

    /// Confirm the file holds the in-memory preferences.
    ///
    /// The store only logs write failures, so commands that change state
    /// check the file before reporting success.
    pub(crate) fn ensure_saved(&self) -> CliResult<()> {
        let expected = self
            .preferences
            .get()
            .to_document()
            .map_err(CliError::failure)?;
        let stored = self
            .storage
            .read(PREFERENCES_STORAGE_KEY)
            .map_err(CliError::failure)?;
        if stored.as_deref() == Some(expected.as_str()) {
            Ok(())
        } else {
            Err(CliError::failure(anyhow!(
                "settings were not saved to {}",
                self.storage.path().display()
            )))
        }
    }

    /// Confirm the file holds `id` as the active section.
    pub(crate) fn ensure_section_saved(&self, id: SectionId) -> CliResult<()> {
        let stored = self
            .storage
            .read(SECTION_STORAGE_KEY)
            .map_err(CliError::failure)?;
        if stored.as_deref() == Some(id.as_str()) {
            Ok(())
        } else {
            Err(CliError::failure(anyhow!(
                "section was not saved to {}",
                self.storage.path().display()
            )))
        }
    }
}
