//! Listing response envelope.

use serde::Serialize;

/// One page of digests plus the "more to fetch" flag. Transient: recomputed
/// per request, never persisted. The total count travels out-of-band in the
/// `X-Total-Count` header.
#[derive(Debug, Serialize)]
pub struct Page<D> {
    pub items: Vec<D>,
    pub has_more: bool,
}
