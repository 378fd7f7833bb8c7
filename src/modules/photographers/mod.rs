pub mod models;

use std::sync::Arc;

use async_trait::async_trait;
use axum::Router;
use mongodb::Database;
use serde_json::json;

use folio_catalog::CollectionService;
use folio_db::MongoStore;
use folio_http::resource::resource_router;
use folio_kernel::{InitCtx, Module};

use models::Photographer;

/// Photographer catalog module: the second instance of the generic
/// collection contract, differing from books only in its record shape.
pub struct PhotographersModule {
    store: Arc<MongoStore<Photographer>>,
    service: Arc<CollectionService<Photographer>>,
}

impl PhotographersModule {
    pub fn new(db: &Database) -> Self {
        let store = Arc::new(MongoStore::new(db));
        let service = Arc::new(CollectionService::new(store.clone()));
        Self { store, service }
    }
}

#[async_trait]
impl Module for PhotographersModule {
    fn name(&self) -> &'static str {
        "photographers"
    }

    async fn init(&self, ctx: &InitCtx<'_>) -> anyhow::Result<()> {
        self.store.ensure_indexes().await?;
        tracing::info!(
            module = self.name(),
            environment = ?ctx.settings.environment,
            "photographers module initialized"
        );
        Ok(())
    }

    fn routes(&self) -> Router {
        resource_router(self.service.clone())
    }

    fn openapi(&self) -> Option<serde_json::Value> {
        Some(json!({
            "paths": {
                "/": {
                    "post": {
                        "summary": "Upload a new Photographer",
                        "tags": ["photographers"],
                        "responses": {
                            "201": {"description": "Created; Location header points at the new photographer"},
                            "409": {"description": "A photographer with this display name already exists"},
                            "503": {"description": "Document store unavailable"}
                        }
                    },
                    "get": {
                        "summary": "Get a list of Photographers",
                        "tags": ["photographers"],
                        "parameters": [
                            {"name": "offset", "in": "query", "schema": {"type": "integer", "minimum": 0}},
                            {"name": "limit", "in": "query", "schema": {"type": "integer", "minimum": 1}}
                        ],
                        "responses": {
                            "200": {
                                "description": "One page of photographer digests",
                                "headers": {
                                    "X-Total-Count": {"schema": {"type": "integer"}}
                                },
                                "content": {
                                    "application/json": {
                                        "schema": {"$ref": "#/components/schemas/PhotographerPage"}
                                    }
                                }
                            }
                        }
                    },
                    "head": {
                        "summary": "Retrieve the count of Photographers",
                        "tags": ["photographers"],
                        "responses": {
                            "200": {"description": "X-Total-Count header only"}
                        }
                    }
                },
                "/{display_name}": {
                    "get": {
                        "summary": "Get a Photographer",
                        "tags": ["photographers"],
                        "responses": {
                            "200": {
                                "description": "Full photographer attributes",
                                "content": {
                                    "application/json": {
                                        "schema": {"$ref": "#/components/schemas/Photographer"}
                                    }
                                }
                            },
                            "404": {"description": "Photographer does not exist"}
                        }
                    },
                    "put": {
                        "summary": "Update a Photographer",
                        "tags": ["photographers"],
                        "responses": {
                            "200": {"description": "Updated"},
                            "404": {"description": "Photographer does not exist"},
                            "422": {"description": "Path and body display_name must be identical"}
                        }
                    },
                    "delete": {
                        "summary": "Delete a Photographer",
                        "tags": ["photographers"],
                        "responses": {
                            "200": {"description": "Deleted; message contains the display name"},
                            "404": {"description": "Photographer does not exist"}
                        }
                    }
                }
            },
            "components": {
                "schemas": {
                    "Photographer": {
                        "type": "object",
                        "properties": {
                            "display_name": {"type": "string", "maxLength": 16},
                            "first_name": {"type": "string", "maxLength": 32},
                            "last_name": {"type": "string", "maxLength": 32},
                            "interests": {"type": "array", "items": {"type": "string"}}
                        },
                        "required": ["display_name", "first_name", "last_name", "interests"]
                    },
                    "PhotographerDigest": {
                        "type": "object",
                        "properties": {
                            "display_name": {"type": "string"},
                            "link": {"type": "string"}
                        },
                        "required": ["display_name", "link"]
                    },
                    "PhotographerPage": {
                        "type": "object",
                        "properties": {
                            "items": {
                                "type": "array",
                                "items": {"$ref": "#/components/schemas/PhotographerDigest"}
                            },
                            "has_more": {"type": "boolean"}
                        },
                        "required": ["items", "has_more"]
                    }
                }
            }
        }))
    }

    async fn start(&self, _ctx: &InitCtx<'_>) -> anyhow::Result<()> {
        tracing::info!(module = self.name(), "photographers module started");
        Ok(())
    }

    async fn stop(&self) -> anyhow::Result<()> {
        tracing::info!(module = self.name(), "photographers module stopped");
        Ok(())
    }
}

/// Create a new instance of the photographers module
pub fn create_module(db: &Database) -> Arc<dyn Module> {
    Arc::new(PhotographersModule::new(db))
}
