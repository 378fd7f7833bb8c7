//! In-memory [`ResourceStore`] backend.
//!
//! Backs the service and handler tests; also usable as a throwaway store
//! for local experiments. Ids are minted from a monotonically increasing
//! counter and never reused, mirroring the insertion-order guarantee of
//! the production backend.

use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::error::StoreError;
use crate::record::{CatalogRecord, RecordId, Stored};
use crate::store::ResourceStore;

#[derive(Debug)]
struct Inner<R> {
    records: BTreeMap<u64, R>,
    next_id: u64,
}

/// Mutex-guarded BTreeMap keyed by the store-assigned id, so iteration
/// order is insertion order.
#[derive(Debug)]
pub struct MemoryStore<R> {
    inner: Mutex<Inner<R>>,
}

impl<R> MemoryStore<R> {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Inner {
                records: BTreeMap::new(),
                next_id: 1,
            }),
        }
    }
}

impl<R> Default for MemoryStore<R> {
    fn default() -> Self {
        Self::new()
    }
}

// Ids minted here are plain decimal; an id this store did not mint has
// nothing after it.
fn parse_id(id: &RecordId) -> Option<u64> {
    id.as_str().parse().ok()
}

#[async_trait]
impl<R: CatalogRecord> ResourceStore<R> for MemoryStore<R> {
    async fn find_by_key(&self, key: &str) -> Result<Option<R>, StoreError> {
        let inner = self.inner.lock().await;
        Ok(inner.records.values().find(|r| r.key() == key).cloned())
    }

    async fn insert(&self, record: &R) -> Result<(), StoreError> {
        let mut inner = self.inner.lock().await;
        if inner.records.values().any(|r| r.key() == record.key()) {
            return Err(StoreError::KeyConflict);
        }
        let id = inner.next_id;
        inner.next_id += 1;
        inner.records.insert(id, record.clone());
        Ok(())
    }

    async fn find_page(&self, skip: u64, limit: i64) -> Result<Vec<Stored<R>>, StoreError> {
        let inner = self.inner.lock().await;
        let limit = usize::try_from(limit).unwrap_or(0);
        let skip = usize::try_from(skip).unwrap_or(usize::MAX);
        Ok(inner
            .records
            .iter()
            .skip(skip)
            .take(limit)
            .map(|(id, record)| Stored {
                id: RecordId::new(id.to_string()),
                record: record.clone(),
            })
            .collect())
    }

    async fn count(&self) -> Result<u64, StoreError> {
        let inner = self.inner.lock().await;
        Ok(inner.records.len() as u64)
    }

    async fn exists_after(&self, id: &RecordId) -> Result<bool, StoreError> {
        let inner = self.inner.lock().await;
        match parse_id(id) {
            Some(id) => Ok(inner.records.keys().any(|&k| k > id)),
            None => Ok(false),
        }
    }

    async fn replace(&self, key: &str, record: &R) -> Result<(), StoreError> {
        let mut inner = self.inner.lock().await;
        let id = inner
            .records
            .iter()
            .find(|(_, r)| r.key() == key)
            .map(|(&id, _)| id);
        match id {
            Some(id) => {
                inner.records.insert(id, record.clone());
                Ok(())
            }
            None => Err(StoreError::NotFound),
        }
    }

    async fn delete_by_key(&self, key: &str) -> Result<(), StoreError> {
        let mut inner = self.inner.lock().await;
        let id = inner
            .records
            .iter()
            .find(|(_, r)| r.key() == key)
            .map(|(&id, _)| id);
        match id {
            Some(id) => {
                inner.records.remove(&id);
                Ok(())
            }
            None => Err(StoreError::NotFound),
        }
    }
}
