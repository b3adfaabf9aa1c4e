#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]

//! Point-of-sale preference model, key-value persistence, and settings navigation.
//!
//! Layout: `model.rs` (typed preferences and catalogs), `validate.rs` (input
//! coercion helpers), `storage.rs` (`SettingsStorage` backends), `service.rs`
//! (`PreferencesStore`), `sections.rs` (section registry and `SectionController`).

pub mod defaults;
pub mod error;
pub mod model;
pub mod sections;
pub mod service;
pub mod storage;
pub mod validate;

pub use defaults::{PREFERENCES_STORAGE_KEY, SECTION_STORAGE_KEY};
pub use error::{ConfigError, ConfigResult, StorageError, StorageResult};
pub use model::{
    CurrencyCode, InvoicingProfile, Language, PaperWidth, PaymentMethod, Preferences,
    PrinterSettings, TaxRate, TaxRegime, ThemeMode, TicketIcon, TicketTemplate,
};
pub use sections::{DEFAULT_SECTION, SECTIONS, SectionController, SectionDescriptor, SectionId};
pub use service::{PreferencesStore, SubscriptionId};
#[cfg(not(target_arch = "wasm32"))]
pub use storage::FileStorage;
pub use storage::{MemoryStorage, SettingsStorage};
