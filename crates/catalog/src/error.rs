//! Error taxonomy for the collection contract.

use thiserror::Error;

/// Failures raised by a [`crate::ResourceStore`] implementation.
///
/// `Unavailable` is kept distinct from `NotFound`/`KeyConflict` so callers
/// can tell "definitely absent" apart from "unknown, store unreachable".
#[derive(Debug, Error)]
pub enum StoreError {
    /// The natural key is already taken by a live record. The store's
    /// unique index is the authority here, not a prior read.
    #[error("natural key already exists")]
    KeyConflict,

    /// No record matches the given natural key.
    #[error("record not found")]
    NotFound,

    /// The store could not be reached or the driver failed.
    #[error("store unavailable: {0}")]
    Unavailable(#[source] anyhow::Error),
}

/// Business outcomes of the collection service, mapped to HTTP statuses by
/// the transport layer.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Create was attempted with a natural key that already exists (409).
    #[error("'{key}' already exists")]
    Conflict { key: String },

    /// The requested record does not exist (404).
    #[error("'{key}' does not exist")]
    NotFound { key: String },

    /// Update supplied a body whose natural key differs from the path (422).
    /// Rejected before any write; the natural key is immutable.
    #[error("path and body {field} must be identical")]
    KeyMismatch {
        field: &'static str,
        path_key: String,
        body_key: String,
    },

    /// The natural key failed validation before any store call (422).
    #[error("invalid {field}: {reason}")]
    InvalidKey {
        field: &'static str,
        reason: String,
    },

    /// The pagination query is malformed (422).
    #[error("invalid page query: {reason}")]
    InvalidQuery { reason: String },

    /// The store could not be reached (503).
    #[error("store unavailable")]
    Unavailable(#[source] anyhow::Error),
}

// No blanket From<StoreError>: each service call site maps store failures
// itself so Conflict/NotFound carry the key they were raised for.
