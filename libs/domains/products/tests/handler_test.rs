//! Handler tests for the Products domain
//!
//! The product router runs against in-memory repositories that share one
//! category store, seeded through the category repository directly.

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use domain_categories::{CategoryRepository, CreateCategory, InMemoryCategoryRepository};
use domain_products::*;
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

async fn app() -> Router {
    let categories = InMemoryCategoryRepository::new();
    categories
        .create(CreateCategory {
            name: "Electronics".into(),
            description: "Electronic devices".into(),
        })
        .await
        .unwrap();

    let repository = InMemoryProductRepository::new(categories.clone());
    handlers::router(ProductService::new(repository, categories))
}

async fn json_body(body: Body) -> Value {
    let bytes = body.collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_string(&body).unwrap()))
        .unwrap()
}

fn empty_request(method: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

fn laptop() -> Value {
    json!({ "name": "Laptop", "price": 1299.99, "stock": 10, "category_id": 1 })
}

#[tokio::test]
async fn test_create_product_embeds_category() {
    let response = app()
        .await
        .oneshot(json_request("POST", "/", laptop()))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);

    let body = json_body(response.into_body()).await;
    assert_eq!(body["data"]["id"], 1);
    assert_eq!(body["data"]["name"], "Laptop");
    assert_eq!(body["data"]["price"], 1299.99);
    assert_eq!(body["data"]["stock"], 10);
    assert_eq!(body["data"]["category"], json!({ "id": 1, "name": "Electronics" }));
    assert!(body.get("errors").is_none());
}

#[tokio::test]
async fn test_create_with_unknown_category_returns_400() {
    let response = app()
        .await
        .oneshot(json_request(
            "POST",
            "/",
            json!({ "name": "Laptop", "price": 10.0, "stock": 1, "category_id": 99 }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = json_body(response.into_body()).await;
    assert!(body["data"].is_null());
    assert_eq!(body["errors"], "category 99 does not exist");
}

#[tokio::test]
async fn test_non_positive_price_returns_400() {
    let app = app().await;

    for price in [0.0, -5.0] {
        let response = app
            .clone()
            .oneshot(json_request(
                "POST",
                "/",
                json!({ "name": "Laptop", "price": price, "stock": 1, "category_id": 1 }),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = json_body(response.into_body()).await;
        assert_eq!(body["errors"], "price must be greater than 0");
    }
}

#[tokio::test]
async fn test_negative_stock_returns_400() {
    let response = app()
        .await
        .oneshot(json_request(
            "POST",
            "/",
            json!({ "name": "Laptop", "price": 1.0, "stock": -1, "category_id": 1 }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = json_body(response.into_body()).await;
    assert_eq!(body["errors"], "stock must not be negative");
}

#[tokio::test]
async fn test_wrongly_typed_field_returns_400() {
    let response = app()
        .await
        .oneshot(json_request(
            "POST",
            "/",
            json!({ "name": "Laptop", "price": 1.0, "stock": "many", "category_id": 1 }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = json_body(response.into_body()).await;
    assert_eq!(body["errors"], "Invalid request body");
}

#[tokio::test]
async fn test_get_missing_product_returns_404() {
    let response = app()
        .await
        .oneshot(empty_request("GET", "/5"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = json_body(response.into_body()).await;
    assert_eq!(body["errors"], "product 5 not found");
}

#[tokio::test]
async fn test_get_product_with_invalid_id_returns_400() {
    let response = app()
        .await
        .oneshot(empty_request("GET", "/abc"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = json_body(response.into_body()).await;
    assert_eq!(body["errors"], "Invalid ID: abc");
}

#[tokio::test]
async fn test_product_crud_flow() {
    let app = app().await;

    app.clone()
        .oneshot(json_request("POST", "/", laptop()))
        .await
        .unwrap();

    let response = app
        .clone()
        .oneshot(json_request(
            "PUT",
            "/1",
            json!({ "name": "Laptop Pro", "price": 1999.5, "stock": 0, "category_id": 1 }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response.into_body()).await;
    assert_eq!(body["data"]["name"], "Laptop Pro");
    assert_eq!(body["data"]["price"], 1999.5);
    assert_eq!(body["data"]["stock"], 0);

    let response = app.clone().oneshot(empty_request("GET", "/")).await.unwrap();
    let body = json_body(response.into_body()).await;
    assert_eq!(body["data"].as_array().unwrap().len(), 1);

    let response = app.clone().oneshot(empty_request("DELETE", "/1")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(json_body(response.into_body()).await, json!({ "data": true }));

    let response = app.oneshot(empty_request("GET", "/1")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_update_missing_product_returns_404() {
    let response = app()
        .await
        .oneshot(json_request("PUT", "/3", laptop()))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
