//! Error types for the configuration store.
//!
//! Responsibilities:
//! - Define error variants for the fallible edges of the crate: parsing
//!   [`StoreOptions`](crate::StoreOptions) and typed value extraction.
//!
//! Does NOT handle:
//! - Missing keys. Lookups are total and report absence as `None` or a
//!   caller-supplied default, never as an error.
//!
//! Invariants:
//! - Error messages name the offending variable or key but never include the
//!   stored value, since configuration values may be secrets.

use thiserror::Error;

/// Errors that can occur while loading options or extracting typed values.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid value for {var}: {message}")]
    InvalidValue { var: String, message: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Value for '{key}' has an unexpected shape: {message}")]
    TypeMismatch { key: String, message: String },
}
