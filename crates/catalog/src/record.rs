//! Record-side contract: what a domain type must provide to participate in
//! the generic collection service.

use std::fmt;

use serde::{de::DeserializeOwned, Serialize};

/// A catalog record with a unique natural key and a digest projection used
/// in listing responses.
///
/// The natural key (`title` for books, `display_name` for photographers) is
/// distinct from the store-assigned [`RecordId`]; the key addresses records
/// over HTTP, the id orders them for pagination.
pub trait CatalogRecord:
    Clone + Send + Sync + Unpin + Serialize + DeserializeOwned + 'static
{
    /// Listing projection: the natural key plus a self link. An associated
    /// type so the serialized field name matches the resource's key field.
    type Digest: Serialize + Send;

    /// URL path segment for the resource collection, e.g. `books`.
    const RESOURCE: &'static str;

    /// Name of the natural key attribute, e.g. `title`.
    const KEY_FIELD: &'static str;

    /// Upper bound on the natural key length, enforced before any store call.
    const KEY_MAX_LEN: usize;

    /// The record's natural key value.
    fn key(&self) -> &str;

    /// Project this record to its listing digest.
    fn digest(&self) -> Self::Digest;

    /// Canonical location of this record, `/{resource}/{key}`.
    fn location(&self) -> String {
        format!("/{}/{}", Self::RESOURCE, self.key())
    }
}

/// Opaque store-assigned identifier. Strictly increasing in insertion order
/// and never reused; its textual form is private to the store that minted it.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct RecordId(String);

impl RecordId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A record paired with its store-assigned identifier, as returned by
/// paged reads.
#[derive(Debug, Clone)]
pub struct Stored<R> {
    pub id: RecordId,
    pub record: R,
}
