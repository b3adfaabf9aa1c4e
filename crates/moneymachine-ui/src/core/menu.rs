//! Navigation menu mapping from the section registry.
//!
//! # Design
//! - Pure function of the active id so the side menu and the compact selector
//!   always agree on which entry is highlighted.

use moneymachine_config::{SECTIONS, SectionId};

/// One row of the settings menu.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MenuEntry {
    /// Section opened by the entry.
    pub id: SectionId,
    /// Menu title.
    pub title: &'static str,
    /// Subtitle under the title.
    pub description: &'static str,
    /// Feather icon name.
    pub icon: &'static str,
    /// Whether this is the displayed section.
    pub active: bool,
}

/// Every registry entry in order, with exactly one marked active.
#[must_use]
pub fn menu_entries(active: SectionId) -> Vec<MenuEntry> {
    SECTIONS
        .iter()
        .map(|section| MenuEntry {
            id: section.id,
            title: section.title,
            description: section.description,
            icon: section.icon,
            active: section.id == active,
        })
        .collect()
}

/// `(value, label)` pairs for the compact section selector.
#[must_use]
pub fn selector_options() -> Vec<(&'static str, &'static str)> {
    SECTIONS
        .iter()
        .map(|section| (section.id.as_str(), section.title))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exactly_one_entry_is_active() {
        for id in SectionId::all() {
            let entries = menu_entries(*id);
            assert_eq!(entries.len(), SECTIONS.len());
            let active: Vec<_> = entries.iter().filter(|entry| entry.active).collect();
            assert_eq!(active.len(), 1);
            assert_eq!(active[0].id, *id);
        }
    }

    #[test]
    fn selector_values_round_trip_through_parse() {
        let options = selector_options();
        assert_eq!(options.first(), Some(&("account", "Cuenta")));
        for (value, _) in options {
            assert!(SectionId::parse(value).is_some());
        }
    }
}
