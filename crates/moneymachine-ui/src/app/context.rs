//! Settings context shared by every panel.
//!
//! # Design
//! - Create exactly one preferences store and section controller per app boot.
//! - Mirror every change into the yewdux store so selectors re-render panels.

use crate::app::storage::BrowserStorage;
use crate::core::recovery::corrupt_preferences;
use crate::core::session::{clear_session, read_session};
use crate::core::store::AppStore;
use gloo::console;
use moneymachine_config::{PreferencesStore, SectionController, SectionId};
use std::rc::Rc;
use yew::prelude::*;
use yewdux::prelude::Dispatch;

/// Handles to the live stores.
#[derive(Clone)]
pub(crate) struct SettingsCtx {
    /// Owner of the preferences.
    pub(crate) preferences: Rc<PreferencesStore<BrowserStorage>>,
    sections: Rc<SectionController<BrowserStorage>>,
}

impl PartialEq for SettingsCtx {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.preferences, &other.preferences)
            && Rc::ptr_eq(&self.sections, &other.sections)
    }
}

impl SettingsCtx {
    /// Rehydrate both stores from `localStorage` and seed the yewdux store.
    pub(crate) fn boot() -> Self {
        if let Some(problem) = corrupt_preferences(&BrowserStorage) {
            console::error!("discarding corrupt preferences", problem);
        }
        let preferences = Rc::new(PreferencesStore::load(BrowserStorage));
        let sections = Rc::new(SectionController::rehydrate(BrowserStorage));
        let snapshot = preferences.get();
        let active = sections.active();
        let session = read_session(sections.storage());
        Dispatch::<AppStore>::new().reduce_mut(|store| {
            store.apply_preferences(&snapshot);
            store.show_section(active);
            store.session = session;
        });
        Self {
            preferences,
            sections,
        }
    }

    /// Display and persist a section.
    pub(crate) fn select_section(&self, id: SectionId) {
        self.sections.select(id);
        Dispatch::<AppStore>::new().reduce_mut(|store| store.show_section(id));
    }

    /// Select from the compact selector's string value.
    pub(crate) fn select_raw(&self, raw: &str) {
        if let Some(id) = self.sections.select_raw(raw) {
            Dispatch::<AppStore>::new().reduce_mut(|store| store.show_section(id));
        }
    }

    /// Drop the persisted session and the signed-in user.
    pub(crate) fn sign_out(&self) {
        if let Err(err) = clear_session(self.sections.storage()) {
            console::error!("failed to clear session", err.to_string());
        }
        Dispatch::<AppStore>::new().reduce_mut(AppStore::sign_out);
    }
}

/// The app's settings context, or a freshly booted one outside the provider.
#[hook]
pub(crate) fn use_settings() -> SettingsCtx {
    use_context::<SettingsCtx>().unwrap_or_else(SettingsCtx::boot)
}
