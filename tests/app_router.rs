use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use backend_api_envelope::app::build_router;
use backend_api_envelope::config::{AppConfig, CorsPolicy};
use backend_api_envelope::test_helpers::read_json_body;
use serde_json::json;
use tower::util::ServiceExt; // for oneshot

fn config() -> AppConfig {
    AppConfig {
        api_version: "3.0.0".to_string(),
        ..AppConfig::default()
    }
}

fn get_req(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

#[test]
fn build_router_smoke() {
    let _router = build_router(&AppConfig::default());
}

#[tokio::test]
async fn health_reports_ok_envelope() {
    let app = build_router(&config());
    let resp = app.oneshot(get_req("/health")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let body = read_json_body(resp).await.unwrap();
    assert_eq!(body["success"], true);
    assert_eq!(body["data"], json!({ "status": "ok", "version": "3.0.0" }));
    assert_eq!(body["metadata"]["version"], "3.0.0");
}

#[tokio::test]
async fn items_are_paginated() {
    let app = build_router(&config());
    let resp = app.oneshot(get_req("/items?page=2&limit=20")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let body = read_json_body(resp).await.unwrap();

    let items = body["data"]["items"].as_array().expect("items array");
    assert_eq!(items.len(), 20);
    assert_eq!(items[0]["id"], 21);
    assert_eq!(
        body["metadata"]["pagination"],
        json!({ "page": 2, "limit": 20, "total": 45 })
    );
}

#[tokio::test]
async fn last_page_is_partial() {
    let app = build_router(&config());
    let resp = app.oneshot(get_req("/items?page=3&limit=20")).await.unwrap();
    let body = read_json_body(resp).await.unwrap();
    assert_eq!(body["data"]["items"].as_array().unwrap().len(), 5);
}

#[tokio::test]
async fn invalid_pagination_is_validation_error() {
    let app = build_router(&config());
    let resp = app.oneshot(get_req("/items?page=0&limit=500")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body = read_json_body(resp).await.unwrap();

    assert_eq!(body["success"], false);
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    assert_eq!(body["error"]["message"], "Invalid input");
    let errors = &body["error"]["details"]["errors"];
    assert_eq!(errors["page"], json!(["Page must be at least 1"]));
    assert_eq!(errors["limit"], json!(["Limit must be between 1 and 100"]));
}

#[tokio::test]
async fn malformed_query_is_validation_error() {
    let app = build_router(&config());
    let resp = app.oneshot(get_req("/items?page=abc")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body = read_json_body(resp).await.unwrap();
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    assert!(body["error"]["details"]["query"].is_string());
}

#[tokio::test]
async fn show_item_and_missing_item() {
    let app = build_router(&config());

    let resp = app.clone().oneshot(get_req("/items/7")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let body = read_json_body(resp).await.unwrap();
    assert_eq!(body["data"], json!({ "id": 7, "name": "Item 7" }));

    let resp = app.oneshot(get_req("/items/999")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body = read_json_body(resp).await.unwrap();
    assert_eq!(
        body["error"],
        json!({ "code": "NOT_FOUND", "message": "Item 999 not found" })
    );
}

#[tokio::test]
async fn unknown_route_gets_json_404() {
    let app = build_router(&config());
    let resp = app.oneshot(get_req("/nope")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert!(resp.headers().get("x-request-id").is_some());
    let body = read_json_body(resp).await.unwrap();
    assert_eq!(body["success"], false);
    assert_eq!(body["error"]["code"], "NOT_FOUND");
    assert_eq!(body["error"]["message"], "No route for /nope");
    assert!(body["metadata"]["requestId"].is_string());
}

#[tokio::test]
async fn client_request_id_is_not_reused() {
    let app = build_router(&config());
    let req = Request::builder()
        .uri("/health")
        .header("x-request-id", "client-chosen-id")
        .body(Body::empty())
        .unwrap();
    let resp = app.oneshot(req).await.unwrap();
    let header = resp
        .headers()
        .get("x-request-id")
        .and_then(|v| v.to_str().ok())
        .map(|s| s.to_string())
        .expect("x-request-id header");
    assert_ne!(header, "client-chosen-id");
    let body = read_json_body(resp).await.unwrap();
    assert_eq!(body["metadata"]["requestId"], header);
}

#[tokio::test]
async fn cors_preflight_wildcard_allows_origin() {
    let app = build_router(&AppConfig {
        cors: CorsPolicy::Any,
        ..config()
    });
    let req = Request::builder()
        .method(Method::OPTIONS)
        .uri("/items")
        .header("Origin", "http://example.com")
        .header("Access-Control-Request-Method", "GET")
        .body(Body::empty())
        .unwrap();
    let resp = app.oneshot(req).await.expect("request failed");
    assert!(resp.status().is_success());
    let allowed = resp
        .headers()
        .get("access-control-allow-origin")
        .map(|v| v.to_str().unwrap_or(""));
    assert_eq!(allowed, Some("*"));
}

#[tokio::test]
async fn cors_specific_origin_allowed() {
    let app = build_router(&AppConfig {
        cors: CorsPolicy::Origins(vec!["http://allowed.example.com".to_string()]),
        ..config()
    });

    let req = Request::builder()
        .method(Method::OPTIONS)
        .uri("/items")
        .header("Origin", "http://allowed.example.com")
        .header("Access-Control-Request-Method", "GET")
        .body(Body::empty())
        .unwrap();
    let resp = app.clone().oneshot(req).await.expect("request failed");
    assert!(resp.status().is_success());
    let allowed = resp
        .headers()
        .get("access-control-allow-origin")
        .map(|v| v.to_str().unwrap_or(""));
    assert_eq!(allowed, Some("http://allowed.example.com"));

    let req2 = Request::builder()
        .method(Method::OPTIONS)
        .uri("/items")
        .header("Origin", "http://disallowed.example.com")
        .header("Access-Control-Request-Method", "GET")
        .body(Body::empty())
        .unwrap();
    let resp2 = app.oneshot(req2).await.expect("request failed");
    assert!(resp2.headers().get("access-control-allow-origin").is_none());
}
