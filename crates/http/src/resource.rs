//! Generic HTTP surface of a resource collection.
//!
//! One router per [`CatalogRecord`] type, mounted at `/{resource}`:
//!
//! | Method | Path      | Success                                    |
//! |--------|-----------|--------------------------------------------|
//! | POST   | /         | 201, `Location: /{resource}/{key}`         |
//! | GET    | /         | 200, `{items, has_more}` + `X-Total-Count` |
//! | HEAD   | /         | 200, `X-Total-Count` only                  |
//! | GET    | /{key}    | 200, full attributes                       |
//! | PUT    | /{key}    | 200, no body                               |
//! | DELETE | /{key}    | 200, `{message}`                           |

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use serde_json::json;

use folio_catalog::{CatalogError, CatalogRecord, CollectionService};

use crate::error::AppError;

/// Header carrying the total live record count alongside listing responses.
pub const X_TOTAL_COUNT: &str = "x-total-count";

/// Offset/limit pagination query, defaulting to the first ten records.
#[derive(Debug, Deserialize)]
pub struct PageQuery {
    #[serde(default)]
    pub offset: u64,
    #[serde(default = "PageQuery::default_limit")]
    pub limit: i64,
}

impl PageQuery {
    fn default_limit() -> i64 {
        10
    }
}

/// Build the router for one resource collection.
pub fn resource_router<R: CatalogRecord>(service: Arc<CollectionService<R>>) -> Router {
    Router::new()
        .route(
            "/",
            post(create::<R>).get(list::<R>).head(total_count::<R>),
        )
        .route(
            "/{key}",
            get(get_one::<R>).put(update::<R>).delete(remove::<R>),
        )
        .with_state(service)
}

impl From<CatalogError> for AppError {
    fn from(err: CatalogError) -> Self {
        match err {
            CatalogError::Conflict { key } => {
                AppError::conflict(vec![], format!("'{key}' already exists"))
            }
            CatalogError::NotFound { key } => {
                AppError::not_found(format!("'{key}' does not exist"))
            }
            CatalogError::KeyMismatch {
                field,
                path_key,
                body_key,
            } => AppError::validation(
                vec![json!({"field": field, "path": path_key, "body": body_key})],
                format!("path and body {field} must be identical"),
            ),
            CatalogError::InvalidKey { field, reason } => AppError::validation(
                vec![json!({"field": field, "error": reason})],
                format!("invalid {field}: {reason}"),
            ),
            CatalogError::InvalidQuery { reason } => AppError::validation(
                vec![json!({"error": reason})],
                format!("invalid page query: {reason}"),
            ),
            CatalogError::Unavailable(source) => {
                AppError::unavailable(format!("document store unreachable: {source}"))
            }
        }
    }
}

async fn create<R: CatalogRecord>(
    State(service): State<Arc<CollectionService<R>>>,
    Json(record): Json<R>,
) -> Result<impl IntoResponse, AppError> {
    let location = service.create(record).await?;
    Ok((StatusCode::CREATED, [(header::LOCATION, location)]))
}

async fn list<R: CatalogRecord>(
    State(service): State<Arc<CollectionService<R>>>,
    Query(query): Query<PageQuery>,
) -> Result<impl IntoResponse, AppError> {
    let (page, total) = service.get_page(query.offset, query.limit).await?;
    Ok(([(X_TOTAL_COUNT, total.to_string())], Json(page)))
}

async fn total_count<R: CatalogRecord>(
    State(service): State<Arc<CollectionService<R>>>,
) -> Result<impl IntoResponse, AppError> {
    let total = service.count().await?;
    Ok([(X_TOTAL_COUNT, total.to_string())])
}

async fn get_one<R: CatalogRecord>(
    State(service): State<Arc<CollectionService<R>>>,
    Path(key): Path<String>,
) -> Result<Json<R>, AppError> {
    let record = service.get_one(&key).await?;
    Ok(Json(record))
}

async fn update<R: CatalogRecord>(
    State(service): State<Arc<CollectionService<R>>>,
    Path(key): Path<String>,
    Json(record): Json<R>,
) -> Result<StatusCode, AppError> {
    service.update(&key, record).await?;
    Ok(StatusCode::OK)
}

async fn remove<R: CatalogRecord>(
    State(service): State<Arc<CollectionService<R>>>,
    Path(key): Path<String>,
) -> Result<Json<serde_json::Value>, AppError> {
    service.delete(&key).await?;
    Ok(Json(json!({
        "message": format!("{key} deleted successfully")
    })))
}
