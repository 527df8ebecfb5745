use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use tower::ServiceExt;
use uuid::Uuid;

use crate::integration::common::setup_test_app;

async fn get_json(
    app: axum::Router,
    uri: &str,
) -> (StatusCode, serde_json::Value) {
    let response = app
        .oneshot(Request::get(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    (status, json)
}

#[tokio::test]
async fn health_returns_200() {
    let (status, json) = get_json(setup_test_app(), "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["listings"], 10);
}

#[tokio::test]
async fn search_without_filters_returns_all_listings() {
    let (status, json) = get_json(setup_test_app(), "/v1/listings").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["total"], 10);
    assert_eq!(json["listings"].as_array().unwrap().len(), 10);

    let first = &json["listings"][0];
    assert!(first["id"].is_string());
    assert!(first["title"].is_string());
    assert!(first["price_cents"].is_i64());
    assert!(first["posted_at"].is_string());
}

#[tokio::test]
async fn search_filters_by_category() {
    let (status, json) = get_json(setup_test_app(), "/v1/listings?category=electronics").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["total"], 4);
    for listing in json["listings"].as_array().unwrap() {
        assert_eq!(listing["category"], "electronics");
    }
}

#[tokio::test]
async fn search_combines_text_and_price_filters() {
    let (status, json) = get_json(
        setup_test_app(),
        "/v1/listings?q=bike&max_price_cents=50000",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["total"], 1);
    assert_eq!(json["listings"][0]["title"], "Trek mountain bike");
}

#[tokio::test]
async fn search_respects_limit() {
    let (status, json) = get_json(setup_test_app(), "/v1/listings?limit=2").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["total"], 2);
    assert_eq!(json["listings"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn search_with_invalid_limit_returns_400() {
    let app = setup_test_app();
    let response = app
        .oneshot(
            Request::get("/v1/listings?limit=lots")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn listing_detail_roundtrip() {
    let app = setup_test_app();

    let (status, json) = get_json(app.clone(), "/v1/listings?q=thinkpad").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["total"], 1);
    let id = json["listings"][0]["id"].as_str().unwrap().to_string();

    let (status, detail) = get_json(app, &format!("/v1/listings/{id}")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(detail["id"], id.as_str());
    assert_eq!(detail["title"], "Thinkpad X1 Carbon Gen 9");
}

#[tokio::test]
async fn unknown_listing_returns_404() {
    let id = Uuid::new_v4();
    let (status, json) = get_json(setup_test_app(), &format!("/v1/listings/{id}")).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["error"], "not_found");
}

#[tokio::test]
async fn malformed_listing_id_returns_400() {
    let app = setup_test_app();
    let response = app
        .oneshot(
            Request::get("/v1/listings/not-a-uuid")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn categories_are_distinct_and_sorted() {
    let (status, json) = get_json(setup_test_app(), "/v1/categories").await;

    assert_eq!(status, StatusCode::OK);
    let categories: Vec<&str> = json["categories"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c.as_str().unwrap())
        .collect();
    assert_eq!(
        categories,
        vec!["electronics", "furniture", "sports", "vehicles"]
    );
}

#[tokio::test]
async fn openapi_document_is_served() {
    let app = setup_test_app();
    let response = app
        .oneshot(
            Request::get("/api-docs/openapi.json")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["info"]["title"], "souk API");
    assert!(json["paths"]["/v1/listings"].is_object());
}
