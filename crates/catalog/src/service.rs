//! Generic collection service: the five resource operations, implemented
//! once and instantiated per record type.

use std::sync::Arc;

use crate::error::{CatalogError, StoreError};
use crate::page::Page;
use crate::record::CatalogRecord;
use crate::store::ResourceStore;

/// The resource-collection contract over an abstract store.
///
/// Holds no state of its own; all consistency for a single operation relies
/// on the store's per-document atomicity. There is no retry policy: a store
/// failure surfaces immediately as [`CatalogError::Unavailable`].
pub struct CollectionService<R: CatalogRecord> {
    store: Arc<dyn ResourceStore<R>>,
}

impl<R: CatalogRecord> CollectionService<R> {
    pub fn new(store: Arc<dyn ResourceStore<R>>) -> Self {
        Self { store }
    }

    /// Create a new record; returns its location `/{resource}/{key}`.
    ///
    /// Uniqueness is delegated to the store's unique index: the insert's
    /// conflict signal is authoritative, so two racing creates cannot both
    /// succeed the way a check-then-insert would allow.
    pub async fn create(&self, record: R) -> Result<String, CatalogError> {
        validate_key::<R>(record.key())?;
        match self.store.insert(&record).await {
            Ok(()) => {
                tracing::debug!(resource = R::RESOURCE, key = record.key(), "record created");
                Ok(record.location())
            }
            Err(StoreError::KeyConflict) => Err(CatalogError::Conflict {
                key: record.key().to_string(),
            }),
            Err(err) => Err(unavailable(err)),
        }
    }

    /// Fetch the full attribute set of the record matching `key`.
    pub async fn get_one(&self, key: &str) -> Result<R, CatalogError> {
        match self.store.find_by_key(key).await {
            Ok(Some(record)) => Ok(record),
            Ok(None) => Err(CatalogError::NotFound {
                key: key.to_string(),
            }),
            Err(err) => Err(unavailable(err)),
        }
    }

    /// One page of digests, ordered by ascending store-assigned id, plus
    /// the total live count for the `X-Total-Count` side channel.
    ///
    /// `has_more` compares counts: an empty page never has more, and a page
    /// that reaches `total` is the last one. The stricter existence-probe
    /// form lives on [`ResourceStore::exists_after`] for callers that need
    /// read consistency under concurrent mutation.
    pub async fn get_page(
        &self,
        offset: u64,
        limit: i64,
    ) -> Result<(Page<R::Digest>, u64), CatalogError> {
        if limit <= 0 {
            return Err(CatalogError::InvalidQuery {
                reason: format!("limit must be positive, got {limit}"),
            });
        }

        let total = self.store.count().await.map_err(unavailable)?;
        let stored = self
            .store
            .find_page(offset, limit)
            .await
            .map_err(unavailable)?;

        let returned = stored.len() as u64;
        let has_more = returned > 0 && offset + returned < total;
        let items = stored.into_iter().map(|s| s.record.digest()).collect();

        Ok((Page { items, has_more }, total))
    }

    /// Replace the descriptive attributes of the record matching `key`.
    ///
    /// The natural key is immutable here: a body whose key differs from the
    /// path is rejected before any write reaches the store.
    pub async fn update(&self, key: &str, record: R) -> Result<(), CatalogError> {
        let found = self.store.find_by_key(key).await.map_err(unavailable)?;
        if found.is_none() {
            return Err(CatalogError::NotFound {
                key: key.to_string(),
            });
        }
        if record.key() != key {
            return Err(CatalogError::KeyMismatch {
                field: R::KEY_FIELD,
                path_key: key.to_string(),
                body_key: record.key().to_string(),
            });
        }
        match self.store.replace(key, &record).await {
            Ok(()) => {
                tracing::debug!(resource = R::RESOURCE, key, "record replaced");
                Ok(())
            }
            // Deleted between the lookup and the write.
            Err(StoreError::NotFound) => Err(CatalogError::NotFound {
                key: key.to_string(),
            }),
            Err(err) => Err(unavailable(err)),
        }
    }

    /// Remove the record matching `key`. The store's own miss is
    /// authoritative, so no separate existence check is needed.
    pub async fn delete(&self, key: &str) -> Result<(), CatalogError> {
        match self.store.delete_by_key(key).await {
            Ok(()) => {
                tracing::debug!(resource = R::RESOURCE, key, "record deleted");
                Ok(())
            }
            Err(StoreError::NotFound) => Err(CatalogError::NotFound {
                key: key.to_string(),
            }),
            Err(err) => Err(unavailable(err)),
        }
    }

    /// Total live record count, backing the HEAD collection endpoint.
    pub async fn count(&self) -> Result<u64, CatalogError> {
        self.store.count().await.map_err(unavailable)
    }
}

fn validate_key<R: CatalogRecord>(key: &str) -> Result<(), CatalogError> {
    if key.is_empty() {
        return Err(CatalogError::InvalidKey {
            field: R::KEY_FIELD,
            reason: "must not be empty".to_string(),
        });
    }
    if key.chars().count() > R::KEY_MAX_LEN {
        return Err(CatalogError::InvalidKey {
            field: R::KEY_FIELD,
            reason: format!("must be at most {} characters", R::KEY_MAX_LEN),
        });
    }
    Ok(())
}

fn unavailable(err: StoreError) -> CatalogError {
    match err {
        StoreError::Unavailable(source) => CatalogError::Unavailable(source),
        // KeyConflict/NotFound leaking from an operation that cannot raise
        // them for this call; treat as an infrastructure fault.
        other => CatalogError::Unavailable(anyhow::Error::new(other)),
    }
}
