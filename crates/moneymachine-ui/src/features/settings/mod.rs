//! Settings feature slice.
//!
//! # Design
//! - The page shell owns navigation; each panel owns its drafts.
//! - Panels write through the shared preferences store only.

mod panels;
pub(crate) mod view;
