//! Integration tests for the health check endpoint and general HTTP behaviour.

mod common;

use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use common::{body_json, get, send};
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Test: GET /health returns 200 with expected JSON fields
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn health_check_returns_ok_with_json(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/health").await;

    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["status"], "ok");
    assert!(json["version"].is_string());
    assert_eq!(json["db_healthy"], true);
}

// ---------------------------------------------------------------------------
// Test: Unknown route returns 404
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn unknown_route_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/people").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Test: Unsupported method returns 405
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn put_on_person_returns_405(pool: PgPool) {
    let app = common::build_test_app(pool);
    let request = Request::builder()
        .method(Method::PUT)
        .uri("/api/v1/persons/1")
        .body(Body::empty())
        .unwrap();
    let response = send(app, request).await;

    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}

// ---------------------------------------------------------------------------
// Test: x-request-id header is present in response
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn response_contains_x_request_id_header(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/persons").await;

    let request_id = response
        .headers()
        .get("x-request-id")
        .expect("Response must contain an x-request-id header");

    // UUID string: 36 chars with hyphens.
    assert_eq!(request_id.to_str().unwrap().len(), 36);
}

// ---------------------------------------------------------------------------
// Test: CORS preflight allows PATCH from the configured origin
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn cors_preflight_allows_patch(pool: PgPool) {
    let app = common::build_test_app(pool);
    let request = Request::builder()
        .method(Method::OPTIONS)
        .uri("/api/v1/persons/1")
        .header("Origin", "http://localhost:5173")
        .header("Access-Control-Request-Method", "PATCH")
        .header("Access-Control-Request-Headers", "content-type")
        .body(Body::empty())
        .unwrap();
    let response = send(app, request).await;

    assert_eq!(response.status(), StatusCode::OK);

    let headers = response.headers();
    assert_eq!(
        headers.get("access-control-allow-origin").unwrap(),
        "http://localhost:5173"
    );
    let allow_methods = headers
        .get("access-control-allow-methods")
        .unwrap()
        .to_str()
        .unwrap();
    assert!(
        allow_methods.contains("PATCH"),
        "Allow-Methods should contain PATCH, got: {allow_methods}"
    );
}
