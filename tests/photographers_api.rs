//! The photographer catalog is the second instantiation of the same
//! contract; these tests pin the parts that differ from books: the digest
//! field name, the key bound, and the list-valued attribute.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

use folio_app::modules::photographers::models::Photographer;
use folio_catalog::store::memory::MemoryStore;
use folio_catalog::CollectionService;
use folio_http::resource::resource_router;

fn app() -> Router {
    let store = Arc::new(MemoryStore::<Photographer>::new());
    let service = Arc::new(CollectionService::new(store));
    Router::new().nest("/photographers", resource_router(service))
}

fn doisneau() -> Value {
    json!({
        "display_name": "rdoisneau",
        "first_name": "robert",
        "last_name": "doisneau",
        "interests": ["street", "portrait"],
    })
}

async fn post(app: &Router, body: &Value) -> axum::response::Response {
    let request = Request::builder()
        .method("POST")
        .uri("/photographers")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.clone().oneshot(request).await.unwrap()
}

async fn get(app: &Router, uri: &str) -> axum::response::Response {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    app.clone().oneshot(request).await.unwrap()
}

async fn json_body(response: axum::response::Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn create_and_list_use_display_name_digests() {
    let app = app();

    let response = post(&app, &doisneau()).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(
        response.headers().get(header::LOCATION).unwrap(),
        "/photographers/rdoisneau"
    );

    let response = get(&app, "/photographers?offset=0&limit=10").await;
    assert_eq!(response.headers().get("x-total-count").unwrap(), "1");
    let page = json_body(response).await;
    assert_eq!(page["items"][0]["display_name"], "rdoisneau");
    assert_eq!(page["items"][0]["link"], "/photographers/rdoisneau");
    assert_eq!(page["has_more"], false);
}

#[tokio::test]
async fn display_name_bound_is_sixteen_characters() {
    let app = app();
    let mut record = doisneau();
    record["display_name"] = Value::String("much-too-long-display-name".to_string());

    let response = post(&app, &record).await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn interests_round_trip_unchanged() {
    let app = app();
    post(&app, &doisneau()).await;

    let response = get(&app, "/photographers/rdoisneau").await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["interests"], json!(["street", "portrait"]));
}
