//! MongoDB backend for the folio resource store.

pub mod store;

use anyhow::Context;
use mongodb::{Client, Database};

use folio_kernel::settings::DatabaseSettings;

pub use store::MongoStore;

/// Build a database handle from settings.
///
/// The driver connects lazily, so this succeeds even when the server is
/// down; failures surface per-operation as `StoreError::Unavailable`.
pub async fn connect(settings: &DatabaseSettings) -> anyhow::Result<Database> {
    let client = Client::with_uri_str(settings.connection_uri())
        .await
        .context("failed to initialize MongoDB client")?;

    tracing::info!(
        host = %settings.host,
        port = settings.port,
        database = %settings.database,
        "MongoDB client initialized"
    );

    Ok(client.database(&settings.database))
}
