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

use models::Book;

/// Book catalog module: one instance of the generic collection contract.
pub struct BooksModule {
    store: Arc<MongoStore<Book>>,
    service: Arc<CollectionService<Book>>,
}

impl BooksModule {
    pub fn new(db: &Database) -> Self {
        let store = Arc::new(MongoStore::new(db));
        let service = Arc::new(CollectionService::new(store.clone()));
        Self { store, service }
    }
}

#[async_trait]
impl Module for BooksModule {
    fn name(&self) -> &'static str {
        "books"
    }

    async fn init(&self, ctx: &InitCtx<'_>) -> anyhow::Result<()> {
        self.store.ensure_indexes().await?;
        tracing::info!(
            module = self.name(),
            environment = ?ctx.settings.environment,
            "books module initialized"
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
                        "summary": "Upload a new Book",
                        "tags": ["books"],
                        "responses": {
                            "201": {
                                "description": "Created; Location header points at the new book",
                                "headers": {
                                    "Location": {"schema": {"type": "string"}}
                                }
                            },
                            "409": {
                                "description": "A book with this title already exists",
                                "content": {
                                    "application/json": {
                                        "schema": {"$ref": "#/components/schemas/ErrorResponse"}
                                    }
                                }
                            },
                            "503": {
                                "description": "Document store unavailable",
                                "content": {
                                    "application/json": {
                                        "schema": {"$ref": "#/components/schemas/ErrorResponse"}
                                    }
                                }
                            }
                        }
                    },
                    "get": {
                        "summary": "Get a list of Books",
                        "tags": ["books"],
                        "parameters": [
                            {"name": "offset", "in": "query", "schema": {"type": "integer", "minimum": 0}},
                            {"name": "limit", "in": "query", "schema": {"type": "integer", "minimum": 1}}
                        ],
                        "responses": {
                            "200": {
                                "description": "One page of book digests",
                                "headers": {
                                    "X-Total-Count": {"schema": {"type": "integer"}}
                                },
                                "content": {
                                    "application/json": {
                                        "schema": {"$ref": "#/components/schemas/BookPage"}
                                    }
                                }
                            }
                        }
                    },
                    "head": {
                        "summary": "Retrieve the count of Books",
                        "tags": ["books"],
                        "responses": {
                            "200": {
                                "description": "X-Total-Count header only",
                                "headers": {
                                    "X-Total-Count": {"schema": {"type": "integer"}}
                                }
                            }
                        }
                    }
                },
                "/{title}": {
                    "get": {
                        "summary": "Get a Book",
                        "tags": ["books"],
                        "parameters": [
                            {"name": "title", "in": "path", "required": true, "schema": {"type": "string", "maxLength": 128}}
                        ],
                        "responses": {
                            "200": {
                                "description": "Full book attributes",
                                "content": {
                                    "application/json": {
                                        "schema": {"$ref": "#/components/schemas/Book"}
                                    }
                                }
                            },
                            "404": {
                                "description": "Book does not exist",
                                "content": {
                                    "application/json": {
                                        "schema": {"$ref": "#/components/schemas/ErrorResponse"}
                                    }
                                }
                            }
                        }
                    },
                    "put": {
                        "summary": "Update a Book",
                        "tags": ["books"],
                        "responses": {
                            "200": {"description": "Updated"},
                            "404": {
                                "description": "Book does not exist",
                                "content": {
                                    "application/json": {
                                        "schema": {"$ref": "#/components/schemas/ErrorResponse"}
                                    }
                                }
                            },
                            "422": {
                                "description": "Path and body title must be identical",
                                "content": {
                                    "application/json": {
                                        "schema": {"$ref": "#/components/schemas/ErrorResponse"}
                                    }
                                }
                            }
                        }
                    },
                    "delete": {
                        "summary": "Delete a Book",
                        "tags": ["books"],
                        "responses": {
                            "200": {"description": "Deleted; message contains the title"},
                            "404": {
                                "description": "Book does not exist",
                                "content": {
                                    "application/json": {
                                        "schema": {"$ref": "#/components/schemas/ErrorResponse"}
                                    }
                                }
                            }
                        }
                    }
                }
            },
            "components": {
                "schemas": {
                    "Book": {
                        "type": "object",
                        "properties": {
                            "title": {"type": "string", "maxLength": 128},
                            "author_first_name": {"type": "string", "maxLength": 32},
                            "author_last_name": {"type": "string", "maxLength": 32},
                            "publisher": {"type": "string", "maxLength": 64},
                            "publication_date": {"type": "string"}
                        },
                        "required": ["title", "author_first_name", "author_last_name", "publisher", "publication_date"]
                    },
                    "BookDigest": {
                        "type": "object",
                        "properties": {
                            "title": {"type": "string"},
                            "link": {"type": "string"}
                        },
                        "required": ["title", "link"]
                    },
                    "BookPage": {
                        "type": "object",
                        "properties": {
                            "items": {
                                "type": "array",
                                "items": {"$ref": "#/components/schemas/BookDigest"}
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
        tracing::info!(module = self.name(), "books module started");
        Ok(())
    }

    async fn stop(&self) -> anyhow::Result<()> {
        tracing::info!(module = self.name(), "books module stopped");
        Ok(())
    }
}

/// Create a new instance of the books module
pub fn create_module(db: &Database) -> Arc<dyn Module> {
    Arc::new(BooksModule::new(db))
}
