//! Storage keys and default values shared by every settings surface.
//!
//! # Design
//! - Keys match the ones written by the browser build so a profile can move
//!   between the web UI and the CLI file store unchanged.

/// Key holding the persisted preferences document.
pub const PREFERENCES_STORAGE_KEY: &str = "pos-settings";
/// Key holding the last selected settings section id.
pub const SECTION_STORAGE_KEY: &str = "moneymachine-settings-section";

/// Upper bound for a tax rate percentage.
pub(crate) const MAX_TAX_RATE: f64 = 100.0;
/// Default next folio suggested by the invoicing form.
pub(crate) const FIRST_FOLIO: u32 = 1;
