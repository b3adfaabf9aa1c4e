//! App-wide yewdux store slices.
//!
//! # Design
//! - The preferences store stays the single owner of preferences; this slice
//!   mirrors its snapshots so components re-render through selectors.
//! - Reducers are plain methods so they can be tested without a DOM.

use moneymachine_config::{DEFAULT_SECTION, Preferences, SectionId};
use yewdux::store::Store;

use crate::core::session::SessionUser;

/// Global application store for shared state.
#[derive(Clone, Debug, PartialEq, Store, Default)]
pub struct AppStore {
    /// Latest preferences snapshot published by the preferences store.
    pub preferences: Preferences,
    /// Settings navigation state.
    pub settings: SettingsSlice,
    /// Signed-in user, if any.
    pub session: Option<SessionUser>,
}

/// Navigation state of the settings page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SettingsSlice {
    /// Displayed section.
    pub active: SectionId,
}

impl Default for SettingsSlice {
    fn default() -> Self {
        Self {
            active: DEFAULT_SECTION,
        }
    }
}

impl AppStore {
    /// Mirror a preferences snapshot.
    pub fn apply_preferences(&mut self, preferences: &Preferences) {
        if &self.preferences != preferences {
            self.preferences = preferences.clone();
        }
    }

    /// Record the displayed section.
    pub const fn show_section(&mut self, id: SectionId) {
        self.settings.active = id;
    }

    /// Forget the signed-in user.
    pub fn sign_out(&mut self) {
        self.session = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use moneymachine_config::{CurrencyCode, MemoryStorage, PreferencesStore};
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn defaults_show_account_with_default_preferences() {
        let store = AppStore::default();
        assert_eq!(store.settings.active, SectionId::Account);
        assert_eq!(store.preferences, Preferences::default());
        assert!(store.session.is_none());
    }

    #[test]
    fn subscribed_slice_tracks_preferences_store() {
        let app = Rc::new(RefCell::new(AppStore::default()));
        let prefs = PreferencesStore::load(MemoryStorage::new());
        let sink = Rc::clone(&app);
        prefs.subscribe(move |snapshot| sink.borrow_mut().apply_preferences(snapshot));

        prefs.set_currency(CurrencyCode::Gbp);
        assert_eq!(app.borrow().preferences.currency, CurrencyCode::Gbp);
    }

    #[test]
    fn reducers_update_navigation_and_session() {
        let mut store = AppStore {
            session: Some(SessionUser {
                email: "a@b.c".into(),
            }),
            ..AppStore::default()
        };
        store.show_section(SectionId::Printer);
        store.sign_out();
        assert_eq!(store.settings.active, SectionId::Printer);
        assert!(store.session.is_none());
    }
}
