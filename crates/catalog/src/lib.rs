//! Core collection contract for folio: record traits, the store adapter
//! interface, and the generic collection service shared by every resource.

pub mod error;
pub mod page;
pub mod record;
pub mod service;
pub mod store;

pub use error::{CatalogError, StoreError};
pub use page::Page;
pub use record::{CatalogRecord, RecordId, Stored};
pub use service::CollectionService;
pub use store::ResourceStore;
