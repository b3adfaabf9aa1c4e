//! Reusable view components for the settings screen.

pub(crate) mod daisy;
pub(crate) mod icon;
pub(crate) mod login;
pub(crate) mod saved;
pub(crate) mod section_card;
pub(crate) mod settings_menu;
