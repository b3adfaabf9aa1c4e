//! Feature slices of the UI.

pub(crate) mod settings;
