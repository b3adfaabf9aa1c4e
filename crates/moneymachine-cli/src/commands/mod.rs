//! Command handlers grouped by concern.

pub(crate) mod preferences;
pub(crate) mod sections;
