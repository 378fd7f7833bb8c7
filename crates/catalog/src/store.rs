//! Store adapter contract between the collection service and a document
//! store backend.

pub mod memory;

use async_trait::async_trait;

use crate::error::StoreError;
use crate::record::{CatalogRecord, RecordId, Stored};

/// Document store operations required by the collection service,
/// parameterized by record type.
///
/// Implementations own no business rules: uniqueness lives in the store's
/// unique index on the natural key, ordering in the store-assigned id. Any
/// operation may fail [`StoreError::Unavailable`] when the backend cannot
/// be reached; callers surface that as a 503-class failure.
#[async_trait]
pub trait ResourceStore<R: CatalogRecord>: Send + Sync {
    /// Exact-match lookup by natural key.
    async fn find_by_key(&self, key: &str) -> Result<Option<R>, StoreError>;

    /// Physically write a new record. The store's unique index rejects
    /// duplicate natural keys with [`StoreError::KeyConflict`].
    async fn insert(&self, record: &R) -> Result<(), StoreError>;

    /// Records ordered by ascending store-assigned id, skipping `skip` and
    /// returning at most `limit`.
    async fn find_page(&self, skip: u64, limit: i64) -> Result<Vec<Stored<R>>, StoreError>;

    /// Total live record count.
    async fn count(&self) -> Result<u64, StoreError>;

    /// Whether any record has a store-assigned id strictly greater than
    /// `id`. The strict-consistency form of the `has_more` probe.
    async fn exists_after(&self, id: &RecordId) -> Result<bool, StoreError>;

    /// Full replacement of the descriptive attributes of the record
    /// matching `key`.
    async fn replace(&self, key: &str, record: &R) -> Result<(), StoreError>;

    /// Remove the record matching `key`.
    async fn delete_by_key(&self, key: &str) -> Result<(), StoreError>;
}
