//! Error types for preference parsing and storage operations.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while interpreting user- or storage-supplied values.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A value did not match any member of a fixed catalog.
    #[error("unknown value '{value}' for {field}")]
    UnknownValue {
        /// Field or catalog being parsed.
        field: &'static str,
        /// Offending value.
        value: String,
    },
    /// A section id was not present in the registry.
    #[error("unknown settings section '{value}'")]
    UnknownSection {
        /// Offending section id.
        value: String,
    },
    /// Field contained an invalid value.
    #[error("invalid value for {field}: {reason}")]
    InvalidField {
        /// Field that failed validation.
        field: &'static str,
        /// Offending value.
        value: String,
        /// Human-readable reason for the failure.
        reason: &'static str,
    },
}

/// Convenience alias for parsing results.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Errors raised by key-value storage backends.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The backing store could not be reached at all.
    #[error("{backend} storage unavailable: {detail}")]
    Unavailable {
        /// Backend identifier.
        backend: &'static str,
        /// Backend-specific detail.
        detail: String,
    },
    /// A backend operation was rejected.
    #[error("{operation} rejected by storage backend: {detail}")]
    Backend {
        /// Operation identifier.
        operation: &'static str,
        /// Backend-specific detail.
        detail: String,
    },
    /// File system operation failed.
    #[error("filesystem operation {operation} failed for {}", path.display())]
    Io {
        /// Operation identifier.
        operation: &'static str,
        /// Path involved in the operation.
        path: PathBuf,
        /// Source IO error.
        source: io::Error,
    },
    /// Encoding or decoding a stored document failed.
    #[error("failed to {operation} stored document")]
    Serialization {
        /// Operation identifier.
        operation: &'static str,
        /// Source serde error.
        source: serde_json::Error,
    },
}

/// Convenience alias for storage results.
pub type StorageResult<T> = Result<T, StorageError>;
