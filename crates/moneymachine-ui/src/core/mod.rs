//! Core, DOM-free primitives and helpers for the settings UI.
pub mod breakpoints;
pub mod document_root;
pub mod drafts;
pub mod feedback;
pub mod menu;
pub mod options;
pub mod recovery;
pub mod session;
pub mod store;
pub mod system_info;
pub mod ticket_preview;
