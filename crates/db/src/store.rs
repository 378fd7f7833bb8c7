//! [`ResourceStore`] implementation over MongoDB typed collections.

use anyhow::Context;
use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::bson::{doc, oid::ObjectId};
use mongodb::error::{ErrorKind, WriteFailure};
use mongodb::options::IndexOptions;
use mongodb::{Collection, Database, IndexModel};
use serde::{Deserialize, Serialize};

use folio_catalog::{CatalogRecord, RecordId, ResourceStore, Stored, StoreError};

/// Wire shape of a stored record: the driver-assigned `_id` plus the
/// record's own attributes flattened alongside it.
#[derive(Debug, Serialize, Deserialize)]
struct StoredDoc<R> {
    #[serde(rename = "_id")]
    id: ObjectId,
    #[serde(flatten)]
    record: R,
}

impl<R> From<StoredDoc<R>> for Stored<R> {
    fn from(doc: StoredDoc<R>) -> Self {
        Stored {
            id: RecordId::new(doc.id.to_hex()),
            record: doc.record,
        }
    }
}

/// One collection per resource, named after `R::RESOURCE`. Two typed
/// handles over the same collection: records without `_id` for lookups and
/// writes, [`StoredDoc`] for paged reads that need the ordering id.
pub struct MongoStore<R: CatalogRecord> {
    records: Collection<R>,
    pages: Collection<StoredDoc<R>>,
}

impl<R: CatalogRecord> MongoStore<R> {
    pub fn new(db: &Database) -> Self {
        Self {
            records: db.collection(R::RESOURCE),
            pages: db.collection(R::RESOURCE),
        }
    }

    /// Create the unique natural-key index. The index is what makes the
    /// insert's duplicate-key rejection authoritative.
    pub async fn ensure_indexes(&self) -> anyhow::Result<()> {
        let index = IndexModel::builder()
            .keys(doc! { R::KEY_FIELD: 1 })
            .options(IndexOptions::builder().unique(true).build())
            .build();

        self.records
            .create_index(index)
            .await
            .context("failed to create unique index")?;

        tracing::info!(
            collection = R::RESOURCE,
            field = R::KEY_FIELD,
            "unique index ensured"
        );
        Ok(())
    }
}

fn unavailable(err: mongodb::error::Error) -> StoreError {
    StoreError::Unavailable(err.into())
}

/// Duplicate-key writes (code 11000) are conflicts; anything else from the
/// driver means the store could not complete the operation.
fn map_insert_error(err: mongodb::error::Error) -> StoreError {
    if let ErrorKind::Write(WriteFailure::WriteError(ref write_error)) = *err.kind {
        if write_error.code == 11000 {
            return StoreError::KeyConflict;
        }
    }
    unavailable(err)
}

#[async_trait]
impl<R: CatalogRecord> ResourceStore<R> for MongoStore<R> {
    async fn find_by_key(&self, key: &str) -> Result<Option<R>, StoreError> {
        self.records
            .find_one(doc! { R::KEY_FIELD: key })
            .await
            .map_err(unavailable)
    }

    async fn insert(&self, record: &R) -> Result<(), StoreError> {
        self.records
            .insert_one(record)
            .await
            .map_err(map_insert_error)?;
        Ok(())
    }

    async fn find_page(&self, skip: u64, limit: i64) -> Result<Vec<Stored<R>>, StoreError> {
        let cursor = self
            .pages
            .find(doc! {})
            .sort(doc! { "_id": 1 })
            .skip(skip)
            .limit(limit)
            .await
            .map_err(unavailable)?;

        let docs: Vec<StoredDoc<R>> = cursor.try_collect().await.map_err(unavailable)?;
        Ok(docs.into_iter().map(Into::into).collect())
    }

    async fn count(&self) -> Result<u64, StoreError> {
        self.records
            .count_documents(doc! {})
            .await
            .map_err(unavailable)
    }

    async fn exists_after(&self, id: &RecordId) -> Result<bool, StoreError> {
        let oid = ObjectId::parse_str(id.as_str())
            .map_err(|e| StoreError::Unavailable(anyhow::Error::new(e)))?;
        let found = self
            .pages
            .find_one(doc! { "_id": { "$gt": oid } })
            .await
            .map_err(unavailable)?;
        Ok(found.is_some())
    }

    async fn replace(&self, key: &str, record: &R) -> Result<(), StoreError> {
        let result = self
            .records
            .replace_one(doc! { R::KEY_FIELD: key }, record)
            .await
            .map_err(unavailable)?;
        if result.matched_count == 0 {
            return Err(StoreError::NotFound);
        }
        Ok(())
    }

    async fn delete_by_key(&self, key: &str) -> Result<(), StoreError> {
        let result = self
            .records
            .delete_one(doc! { R::KEY_FIELD: key })
            .await
            .map_err(unavailable)?;
        if result.deleted_count == 0 {
            return Err(StoreError::NotFound);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct Print {
        caption: String,
        year: String,
    }

    #[test]
    fn stored_doc_round_trips_through_bson() {
        let doc = StoredDoc {
            id: ObjectId::new(),
            record: Print {
                caption: "kiss by the hotel de ville".to_string(),
                year: "1950".to_string(),
            },
        };

        let raw = bson::to_document(&doc).unwrap();
        assert!(raw.contains_key("_id"));
        assert!(raw.contains_key("caption"));

        let back: StoredDoc<Print> = bson::from_document(raw).unwrap();
        assert_eq!(back.id, doc.id);
        assert_eq!(back.record, doc.record);
    }

    #[test]
    fn record_deserializes_from_doc_with_extra_id() {
        // Lookups use the record-typed handle; the `_id` the driver adds
        // must not break deserialization.
        let raw = bson::doc! {
            "_id": ObjectId::new(),
            "caption": "le baiser",
            "year": "1950",
        };
        let print: Print = bson::from_document(raw).unwrap();
        assert_eq!(print.caption, "le baiser");
    }
}
