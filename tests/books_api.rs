//! End-to-end tests of the book collection contract through the HTTP
//! surface, backed by the in-memory store.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

use folio_app::modules::books::models::Book;
use folio_catalog::store::memory::MemoryStore;
use folio_catalog::CollectionService;
use folio_http::resource::resource_router;

fn app() -> Router {
    let store = Arc::new(MemoryStore::<Book>::new());
    let service = Arc::new(CollectionService::new(store));
    Router::new().nest("/books", resource_router(service))
}

fn nineteen_eighty_four() -> Value {
    json!({
        "title": "1984",
        "author_first_name": "George",
        "author_last_name": "Orwell",
        "publisher": "Secker & Warburg",
        "publication_date": "1949-06-08",
    })
}

fn catcher_in_the_rye() -> Value {
    json!({
        "title": "The Catcher in the Rye",
        "author_first_name": "J.D.",
        "author_last_name": "Salinger",
        "publisher": "Little, Brown and Company",
        "publication_date": "1951-07-16",
    })
}

async fn send_json(app: &Router, method: &str, uri: &str, body: &Value) -> Response {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.clone().oneshot(request).await.unwrap()
}

async fn send(app: &Router, method: &str, uri: &str) -> Response {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.clone().oneshot(request).await.unwrap()
}

async fn json_body(response: Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn create_sets_location_and_rejects_duplicates() {
    let app = app();

    let response = send_json(&app, "POST", "/books", &nineteen_eighty_four()).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(
        response.headers().get(header::LOCATION).unwrap(),
        "/books/1984"
    );

    let response = send_json(&app, "POST", "/books", &nineteen_eighty_four()).await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
}

#[tokio::test]
async fn create_rejects_overlong_title_before_any_write() {
    let app = app();
    let mut book = nineteen_eighty_four();
    book["title"] = Value::String("x".repeat(129));

    let response = send_json(&app, "POST", "/books", &book).await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let response = send(&app, "GET", "/books").await;
    assert_eq!(response.headers().get("x-total-count").unwrap(), "0");
}

#[tokio::test]
async fn listing_paginates_with_has_more_and_total_count() {
    let app = app();
    send_json(&app, "POST", "/books", &nineteen_eighty_four()).await;
    send_json(&app, "POST", "/books", &catcher_in_the_rye()).await;

    let response = send(&app, "GET", "/books?offset=0&limit=1").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers().get("x-total-count").unwrap(), "2");
    let page = json_body(response).await;
    assert_eq!(page["items"].as_array().unwrap().len(), 1);
    assert_eq!(page["items"][0]["title"], "1984");
    assert_eq!(page["items"][0]["link"], "/books/1984");
    assert_eq!(page["has_more"], true);

    let response = send(&app, "GET", "/books?offset=0&limit=10").await;
    let page = json_body(response).await;
    assert_eq!(page["items"].as_array().unwrap().len(), 2);
    assert_eq!(page["has_more"], false);

    // Second slice is disjoint from and consistent with the first.
    let response = send(&app, "GET", "/books?offset=1&limit=1").await;
    let page = json_body(response).await;
    assert_eq!(page["items"][0]["title"], "The Catcher in the Rye");
    assert_eq!(page["has_more"], false);
}

#[tokio::test]
async fn empty_page_never_has_more() {
    let app = app();

    let response = send(&app, "GET", "/books").await;
    let page = json_body(response).await;
    assert_eq!(page["items"].as_array().unwrap().len(), 0);
    assert_eq!(page["has_more"], false);

    send_json(&app, "POST", "/books", &nineteen_eighty_four()).await;
    let response = send(&app, "GET", "/books?offset=5&limit=10").await;
    let page = json_body(response).await;
    assert_eq!(page["items"].as_array().unwrap().len(), 0);
    assert_eq!(page["has_more"], false);
}

#[tokio::test]
async fn listing_rejects_non_positive_limit() {
    let app = app();
    let response = send(&app, "GET", "/books?limit=0").await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn head_reports_total_count_without_a_body() {
    let app = app();
    send_json(&app, "POST", "/books", &nineteen_eighty_four()).await;

    let response = send(&app, "HEAD", "/books").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers().get("x-total-count").unwrap(), "1");
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    assert!(bytes.is_empty());
}

#[tokio::test]
async fn get_one_round_trips_created_attributes() {
    let app = app();
    send_json(&app, "POST", "/books", &nineteen_eighty_four()).await;

    let response = send(&app, "GET", "/books/1984").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(json_body(response).await, nineteen_eighty_four());

    let response = send(&app, "GET", "/books/unknown").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn update_replaces_attributes_but_not_the_title() {
    let app = app();
    send_json(&app, "POST", "/books", &nineteen_eighty_four()).await;

    let mut updated = nineteen_eighty_four();
    updated["publisher"] = Value::String("Penguin".to_string());
    let response = send_json(&app, "PUT", "/books/1984", &updated).await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = send(&app, "GET", "/books/1984").await;
    assert_eq!(json_body(response).await["publisher"], "Penguin");

    // Renaming through the body is rejected before any write.
    let mut renamed = nineteen_eighty_four();
    renamed["title"] = Value::String("Animal Farm".to_string());
    let response = send_json(&app, "PUT", "/books/1984", &renamed).await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let response = send(&app, "GET", "/books/Animal%20Farm").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = send_json(&app, "PUT", "/books/unknown", &nineteen_eighty_four()).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn delete_confirms_and_then_reads_miss() {
    let app = app();
    send_json(&app, "POST", "/books", &nineteen_eighty_four()).await;

    let response = send(&app, "DELETE", "/books/1984").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        json_body(response).await["message"],
        "1984 deleted successfully"
    );

    let response = send(&app, "GET", "/books/1984").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = send(&app, "DELETE", "/books/1984").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
