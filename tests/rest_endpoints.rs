//! REST Endpoint Tests
//!
//! Drives the full router in-process:
//! - `/rentals` query-string coercion and filtering
//! - `/rentals/:id` status codes
//! - `/health` and `/metrics`

use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use rentalcat::catalog::{dataset, Record, RecordStore};
use rentalcat::http_server::{HttpServer, HttpServerConfig};
use rentalcat::observability::MetricsRegistry;
use serde_json::Value;
use tower::ServiceExt;

// =============================================================================
// Helper Functions
// =============================================================================

fn store() -> Arc<RecordStore> {
    Arc::new(
        RecordStore::new(vec![
            Record::new(1, "Van").with_price(40).with_coordinates(45.07, 7.68),
            Record::new(2, "Camper").with_price(90).with_coordinates(45.46, 9.19),
            Record::new(3, "Trailer").with_price(25).with_coordinates(45.1, 7.7),
            Record::new(4, "Motorhome").with_price(150).with_coordinates(41.9, 12.5),
        ])
        .unwrap(),
    )
}

fn router_with(store: Arc<RecordStore>, metrics: Arc<MetricsRegistry>) -> Router {
    HttpServer::with_metrics(HttpServerConfig::default(), store, metrics).router()
}

fn router() -> Router {
    router_with(store(), Arc::new(MetricsRegistry::new()))
}

async fn get(router: Router, uri: &str) -> (StatusCode, Value) {
    let response = router
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = serde_json::from_slice(&bytes).unwrap();
    (status, body)
}

fn ids(body: &Value) -> Vec<i64> {
    body.as_array()
        .unwrap()
        .iter()
        .map(|r| r["id"].as_i64().unwrap())
        .collect()
}

// =============================================================================
// Listing
// =============================================================================

/// No parameters returns every rental in store order.
#[tokio::test]
async fn test_list_all() {
    let (status, body) = get(router(), "/rentals").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(ids(&body), vec![1, 2, 3, 4]);
}

/// Every criterion is applied together.
#[tokio::test]
async fn test_list_with_filters() {
    let (status, body) = get(
        router(),
        "/rentals?price_min=30&price_max=100&near=45.07,7.68",
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(ids(&body), vec![1]);
}

/// Identifier subset keeps store order.
#[tokio::test]
async fn test_list_by_ids() {
    let (_, body) = get(router(), "/rentals?ids=4,1,bogus,77").await;
    assert_eq!(ids(&body), vec![1, 4]);
}

/// Sorting happens before the page window.
#[tokio::test]
async fn test_list_sorted_and_paginated() {
    let (_, body) = get(router(), "/rentals?sort=price.desc&limit=2&offset=1").await;
    assert_eq!(ids(&body), vec![2, 1]);
}

/// Offsets past the end give an empty array, not an error.
#[tokio::test]
async fn test_list_offset_past_end() {
    let (status, body) = get(router(), "/rentals?limit=2&offset=10").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.as_array().unwrap().is_empty());
}

/// Garbage parameters are treated as absent.
#[tokio::test]
async fn test_list_malformed_params_are_ignored() {
    let (status, body) = get(
        router(),
        "/rentals?price_min=cheap&limit=many&near=45.0&sort=colour",
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(ids(&body), vec![1, 2, 3, 4]);
}

/// A repeated key keeps its first value.
#[tokio::test]
async fn test_list_repeated_key_first_wins() {
    let (_, body) = get(router(), "/rentals?limit=1&limit=5").await;
    assert_eq!(ids(&body), vec![1]);
}

/// `near` with three components, one of them NaN, is ignored.
#[tokio::test]
async fn test_list_near_with_nan_component_is_ignored() {
    let (_, body) = get(router(), "/rentals?near=45.07,NaN,7.68").await;
    assert_eq!(ids(&body), vec![1, 2, 3, 4]);

    let (_, body) = get(router(), "/rentals?near=45.07,NaN").await;
    assert_eq!(ids(&body), vec![1, 2, 3, 4]);
}

/// Records keep their wire shape.
#[tokio::test]
async fn test_list_wire_shape() {
    let (_, body) = get(router(), "/rentals?ids=2").await;
    let camper = &body[0];
    assert_eq!(camper["name"], "Camper");
    assert_eq!(camper["price"]["day"], 90);
    assert_eq!(camper["location"]["lng"], 9.19);
    assert!(camper.get("primary_image_url").is_some());
}

// =============================================================================
// Single Rental
// =============================================================================

#[tokio::test]
async fn test_get_existing() {
    let (status, body) = get(router(), "/rentals/3").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Trailer");
}

#[tokio::test]
async fn test_get_missing_is_404() {
    let (status, body) = get(router(), "/rentals/999").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Rental not found");
    assert_eq!(body["code"], 404);
}

#[tokio::test]
async fn test_get_non_numeric_is_400() {
    let (status, body) = get(router(), "/rentals/abc").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Invalid rental ID");
}

// =============================================================================
// Health & Metrics
// =============================================================================

#[tokio::test]
async fn test_health() {
    let (status, body) = get(router(), "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["records"], 4);
}

/// Requests are counted in the shared registry.
#[tokio::test]
async fn test_metrics_count_requests() {
    let metrics = Arc::new(MetricsRegistry::new());
    let store = store();

    get(router_with(store.clone(), metrics.clone()), "/rentals?limit=3").await;
    get(router_with(store.clone(), metrics.clone()), "/rentals/999").await;

    let (status, body) = get(router_with(store, metrics), "/metrics").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["queries_executed"], 1);
    assert_eq!(body["records_returned"], 3);
    assert_eq!(body["lookups"], 1);
    assert_eq!(body["lookup_misses"], 1);
}

/// The shipped seed dataset serves as-is.
#[tokio::test]
async fn test_seed_dataset() {
    let store = Arc::new(dataset::seed_store().unwrap());
    let (_, body) = get(router_with(store, Arc::new(MetricsRegistry::new())), "/rentals?price_min=1").await;
    assert_eq!(ids(&body), vec![6]);
}
