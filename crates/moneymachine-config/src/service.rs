//! Preferences store: the single owner of the current preferences.
//!
//! # Design
//! - Interior mutability (`RefCell`) keeps setters on `&self` so the store can
//!   be shared through `Rc` by the UI context and by the command line.
//! - Every setter rewrites the whole document and then notifies listeners
//!   synchronously, before it returns.
//! - Storage failures are logged and swallowed; the in-memory value still
//!   changes so the session keeps working.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use tracing::{debug, warn};

use crate::defaults::PREFERENCES_STORAGE_KEY;
use crate::model::{
    CurrencyCode, InvoicingProfile, Language, Preferences, PrinterSettings, TaxRate, ThemeMode,
};
use crate::storage::SettingsStorage;
use crate::validate::coerce_tax_rate;

/// Handle returned by [`PreferencesStore::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Rc<dyn Fn(&Preferences)>;

/// Owner of the live preferences, backed by a [`SettingsStorage`].
pub struct PreferencesStore<S> {
    storage: S,
    current: RefCell<Preferences>,
    listeners: RefCell<Vec<(SubscriptionId, Listener)>>,
    next_id: Cell<u64>,
}

impl<S: SettingsStorage> PreferencesStore<S> {
    /// Rehydrate from `storage`, falling back to defaults when the stored
    /// document is absent, unreadable, or corrupt.
    pub fn load(storage: S) -> Self {
        let current = match storage.read(PREFERENCES_STORAGE_KEY) {
            Ok(Some(raw)) => Preferences::from_document(&raw).unwrap_or_else(|err| {
                warn!(error = %err, key = PREFERENCES_STORAGE_KEY, "discarding corrupt preferences");
                Preferences::default()
            }),
            Ok(None) => Preferences::default(),
            Err(err) => {
                warn!(error = %err, key = PREFERENCES_STORAGE_KEY, "failed to read preferences");
                Preferences::default()
            }
        };
        Self {
            storage,
            current: RefCell::new(current),
            listeners: RefCell::new(Vec::new()),
            next_id: Cell::new(0),
        }
    }

    /// Snapshot of the current preferences.
    #[must_use]
    pub fn get(&self) -> Preferences {
        self.current.borrow().clone()
    }

    /// Backing storage.
    pub const fn storage(&self) -> &S {
        &self.storage
    }

    /// Change the colour scheme.
    pub fn set_theme(&self, theme: ThemeMode) {
        self.update(|prefs| prefs.theme = theme);
    }

    /// Change the interface language.
    pub fn set_language(&self, language: Language) {
        self.update(|prefs| prefs.language = language);
    }

    /// Change the display currency.
    pub fn set_currency(&self, currency: CurrencyCode) {
        self.update(|prefs| prefs.currency = currency);
    }

    /// Store an already-parsed tax rate.
    pub fn set_tax_rate(&self, rate: TaxRate) {
        self.update(|prefs| prefs.tax_rate = rate);
    }

    /// Coerce free-form tax input and store the result.
    pub fn set_tax_rate_input(&self, input: &str) -> TaxRate {
        let rate = coerce_tax_rate(input);
        self.set_tax_rate(rate);
        rate
    }

    /// Replace the printer configuration.
    pub fn set_printer_settings(&self, printer: PrinterSettings) {
        self.update(|prefs| prefs.printer = printer);
    }

    /// Replace the invoicing profile; code fields are normalized first.
    pub fn set_invoicing(&self, invoicing: InvoicingProfile) {
        let invoicing = invoicing.normalized();
        self.update(|prefs| prefs.invoicing = invoicing);
    }

    /// Register a listener called after every change.
    pub fn subscribe(&self, listener: impl Fn(&Preferences) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id.get());
        self.next_id.set(self.next_id.get() + 1);
        self.listeners.borrow_mut().push((id, Rc::new(listener)));
        id
    }

    /// Remove a listener; returns `false` when the id was not registered.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut listeners = self.listeners.borrow_mut();
        let before = listeners.len();
        listeners.retain(|(existing, _)| *existing != id);
        listeners.len() != before
    }

    fn update(&self, mutate: impl FnOnce(&mut Preferences)) {
        let snapshot = {
            let mut current = self.current.borrow_mut();
            mutate(&mut current);
            current.clone()
        };
        self.persist(&snapshot);
        // Listeners may subscribe or unsubscribe while being notified.
        let listeners: Vec<Listener> = self
            .listeners
            .borrow()
            .iter()
            .map(|(_, listener)| Rc::clone(listener))
            .collect();
        for listener in listeners {
            listener(&snapshot);
        }
    }

    fn persist(&self, prefs: &Preferences) {
        let result = prefs
            .to_document()
            .and_then(|doc| self.storage.write(PREFERENCES_STORAGE_KEY, &doc));
        match result {
            Ok(()) => debug!(key = PREFERENCES_STORAGE_KEY, "preferences persisted"),
            Err(err) => {
                warn!(error = %err, key = PREFERENCES_STORAGE_KEY, "failed to persist preferences");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{StorageError, StorageResult};
    use crate::storage::MemoryStorage;

    struct BrokenStorage;

    impl SettingsStorage for BrokenStorage {
        fn read(&self, _key: &str) -> StorageResult<Option<String>> {
            Err(StorageError::Unavailable {
                backend: "broken",
                detail: "offline".to_string(),
            })
        }

        fn write(&self, _key: &str, _value: &str) -> StorageResult<()> {
            Err(StorageError::Backend {
                operation: "write",
                detail: "quota exceeded".to_string(),
            })
        }

        fn remove(&self, _key: &str) -> StorageResult<()> {
            Ok(())
        }
    }

    #[test]
    fn empty_storage_yields_defaults() {
        let store = PreferencesStore::load(MemoryStorage::new());
        assert_eq!(store.get(), Preferences::default());
    }

    #[test]
    fn setters_write_the_whole_document() {
        let store = PreferencesStore::load(MemoryStorage::new());
        store.set_currency(CurrencyCode::Mxn);
        store.set_theme(ThemeMode::Light);

        let raw = store
            .storage()
            .read(PREFERENCES_STORAGE_KEY)
            .expect("read")
            .expect("document present");
        let reloaded = Preferences::from_document(&raw).expect("decode");
        assert_eq!(reloaded.currency, CurrencyCode::Mxn);
        assert_eq!(reloaded.theme, ThemeMode::Light);
    }

    #[test]
    fn tax_input_is_coerced() {
        let store = PreferencesStore::load(MemoryStorage::new());
        let rate = store.set_tax_rate_input("16.5");
        assert!((rate.percent() - 16.5).abs() < f64::EPSILON);
        store.set_tax_rate_input("abc");
        assert!(store.get().tax_rate.percent().abs() < f64::EPSILON);
    }

    #[test]
    fn listeners_observe_changes_before_setter_returns() {
        let store = PreferencesStore::load(MemoryStorage::new());
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        let id = store.subscribe(move |prefs| sink.borrow_mut().push(prefs.language));

        store.set_language(Language::Fr);
        assert_eq!(seen.borrow().as_slice(), &[Language::Fr]);

        assert!(store.unsubscribe(id));
        assert!(!store.unsubscribe(id));
        store.set_language(Language::De);
        assert_eq!(seen.borrow().len(), 1);
    }

    #[test]
    fn invoicing_is_normalized_on_save() {
        let store = PreferencesStore::load(MemoryStorage::new());
        store.set_invoicing(InvoicingProfile {
            rfc: "xaxx010101000".into(),
            enabled: true,
            ..InvoicingProfile::default()
        });
        let invoicing = store.get().invoicing;
        assert_eq!(invoicing.rfc, "XAXX010101000");
        assert!(invoicing.enabled);
    }

    #[test]
    fn failing_storage_degrades_to_memory() {
        let store = PreferencesStore::load(BrokenStorage);
        assert_eq!(store.get(), Preferences::default());
        store.set_theme(ThemeMode::Light);
        assert_eq!(store.get().theme, ThemeMode::Light);
    }

    #[test]
    fn corrupt_document_falls_back_to_defaults() {
        let storage = MemoryStorage::with_entries([(PREFERENCES_STORAGE_KEY, "{oops")]);
        let store = PreferencesStore::load(storage);
        assert_eq!(store.get(), Preferences::default());
    }
}
