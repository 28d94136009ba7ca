//! HTTP Route Tests
//!
//! Requests through the axum router, as the trigger would send them.

use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use product_batch::config::Config;
use product_batch::http_server::{HttpServer, HttpServerConfig};
use product_batch::ingest::BatchHandler;
use product_batch::store::{AttributeValue, Item, MemoryStore};
use serde_json::{json, Value};
use tower::ServiceExt;

fn router(store: Arc<MemoryStore>) -> Router {
    let config = Config {
        region: "eu-west-1".to_string(),
        products_table: "products".to_string(),
        variations_table: "variations".to_string(),
    };
    HttpServer::build_router(&HttpServerConfig::default(), BatchHandler::new(config, store))
}

fn store() -> Arc<MemoryStore> {
    let store = MemoryStore::new()
        .with_table("products", &["id", "slug"])
        .unwrap()
        .with_table("variations", &["id"])
        .unwrap();
    let mut item = Item::new();
    item.insert("id".to_string(), AttributeValue::from("v1"));
    store.put_item("variations", item).unwrap();
    Arc::new(store)
}

async fn send(router: Router, method: &str, body: &str) -> (StatusCode, Value) {
    send_bytes(router, method, body.as_bytes().to_vec()).await
}

async fn send_bytes(router: Router, method: &str, body: Vec<u8>) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(method)
        .uri("/products")
        .header("content-type", "application/json")
        .body(Body::from(body))
        .unwrap();

    let response = router.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn test_post_inserts_products() {
    let store = store();
    let body = json!([{"id": "1", "slug": "a", "name": "A", "variations": ["v1"]}]).to_string();

    let (status, json) = send(router(store.clone()), "POST", &body).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["data"]["Responses"][0]["TableName"], "products");
    assert_eq!(store.item_count("products").unwrap(), 1);
}

#[tokio::test]
async fn test_unsupported_method_gets_structured_error() {
    let store = store();
    let (status, json) = send(router(store.clone()), "PUT", "[]").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        json["errors"][0]["error"]["name"],
        "Only POST and PATCH are supported"
    );
    assert!(json["errors"][0]["description"].is_string());
    assert_eq!(store.batch_calls(), 0);
}

#[tokio::test]
async fn test_empty_body_rejected() {
    let (status, json) = send(router(store()), "POST", "").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["errors"][0]["error"]["name"], "No arguments provided");
}

#[tokio::test]
async fn test_non_utf8_body_rejected_before_store() {
    let store = store();
    let body = b"[{\"id\":\"1\",\"slug\":\"a\",\"name\":\"Caf\xE9\",\"variations\":[\"v1\"]}]".to_vec();

    let (status, json) = send_bytes(router(store.clone()), "POST", body).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["errors"][0]["error"]["name"], "Invalid body encoding");
    assert_eq!(store.batch_calls(), 0);
    assert_eq!(store.item_count("products").unwrap(), 0);
}

#[tokio::test]
async fn test_lowercase_method_rejected() {
    let store = store();
    let body = json!([{"id": "1", "slug": "a", "name": "A", "variations": ["v1"]}]).to_string();

    let (status, json) = send(router(store.clone()), "post", &body).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        json["errors"][0]["error"]["name"],
        "Only POST and PATCH are supported"
    );
    assert_eq!(store.batch_calls(), 0);
}

#[tokio::test]
async fn test_store_failure_is_server_error() {
    // No tables at all: the variation lookup fails as a whole.
    let router = router(Arc::new(MemoryStore::new()));
    let body = json!([{"id": "1", "slug": "a", "name": "A", "variations": ["v1"]}]).to_string();

    let (status, json) = send(router, "POST", &body).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["errors"][0]["error"]["name"], "ResourceNotFoundException");
}

#[tokio::test]
async fn test_health() {
    let request = Request::builder()
        .uri("/health")
        .body(Body::empty())
        .unwrap();
    let response = router(store()).oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}
