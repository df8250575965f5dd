#![allow(dead_code)]

use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use persons_api::config::ServerConfig;
use persons_api::router::build_app_router;
use persons_api::state::AppState;

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        database_url: String::new(),
        database_max_connections: 5,
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
    }
}

/// Build the full application router, middleware included, on `pool`.
pub fn build_test_app(pool: PgPool) -> Router {
    build_app_router(AppState::new(pool), &test_config())
}

pub async fn send(app: Router, request: Request<Body>) -> Response<Body> {
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    send(app, request).await
}

pub async fn delete(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::DELETE)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

/// Send `body` verbatim with a JSON content type.
pub async fn send_raw(app: Router, method: Method, uri: &str, body: &str) -> Response<Body> {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_owned()))
        .unwrap();
    send(app, request).await
}

pub async fn post_json(app: Router, uri: &str, json: serde_json::Value) -> Response<Body> {
    send_raw(app, Method::POST, uri, &json.to_string()).await
}

pub async fn patch_json(app: Router, uri: &str, json: serde_json::Value) -> Response<Body> {
    send_raw(app, Method::PATCH, uri, &json.to_string()).await
}

pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}

/// POST a person and return the id parsed from the `Location` header.
pub async fn create_person(pool: &PgPool, json: serde_json::Value) -> i64 {
    let response = post_json(build_test_app(pool.clone()), "/api/v1/persons", json).await;
    assert_eq!(response.status(), axum::http::StatusCode::CREATED);

    let location = response
        .headers()
        .get("location")
        .expect("Missing Location header")
        .to_str()
        .unwrap()
        .to_string();
    location
        .strip_prefix("/api/v1/persons/")
        .and_then(|id| id.parse().ok())
        .unwrap_or_else(|| panic!("Unexpected Location header: {location}"))
}
