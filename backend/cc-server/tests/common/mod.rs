#![allow(dead_code)]

//! Test infrastructure for cc-server API tests

use cc_config::Config;
use cc_server::{AppState, AuthService, build_router};

use std::sync::Arc;

use axum::{
    Router,
    body::Body,
    http::{Request, Response, StatusCode},
};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use sqlx::SqlitePool;
use tower::ServiceExt;

pub const TEST_SECRET: &str = "test-secret-that-is-at-least-32-chars";
pub const TEST_PASSWORD: &str = "Password123";

/// Config with a valid secret and a cheap hashing work factor
pub fn test_config() -> Config {
    let mut config = Config::default();
    config.auth.jwt_secret = Some(TEST_SECRET.to_string());
    config.auth.hash_memory_kib = 1024;
    config.auth.hash_iterations = 1;
    config.auth.hash_parallelism = 1;
    config
}

/// Create AppState backed by a fresh in-memory database
pub async fn create_test_app_state() -> AppState {
    let pool = cc_db::open_in_memory_pool()
        .await
        .expect("Failed to create test database");
    create_test_app_state_with(pool, &test_config())
}

pub fn create_test_app_state_with(pool: SqlitePool, config: &Config) -> AppState {
    let auth_service =
        AuthService::from_config(pool.clone(), config).expect("Failed to build auth service");
    AppState::new(pool, Arc::new(auth_service))
}

pub async fn create_test_app() -> (Router, AppState) {
    let state = create_test_app_state().await;
    (build_router(state.clone()), state)
}

/// Send one request and return status plus parsed JSON (Null for non-JSON bodies)
pub async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response: Response<Body> = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json = serde_json::from_slice(&body).unwrap_or(Value::Null);
    (status, json)
}

pub fn json_request(method: &str, uri: &str, token: Option<&str>, body: Value) -> Request<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header("Content-Type", "application/json");
    if let Some(token) = token {
        builder = builder.header("Authorization", format!("Bearer {}", token));
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

pub fn empty_request(method: &str, uri: &str, token: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header("Authorization", format!("Bearer {}", token));
    }
    builder.body(Body::empty()).unwrap()
}

/// Register and log in; returns (token, user id)
pub async fn register_and_login(app: &Router, username: &str) -> (String, String) {
    let email = format!("{}@example.com", username);

    let (status, body) = send(
        app,
        json_request(
            "POST",
            "/api/auth/register",
            None,
            json!({ "email": email, "password": TEST_PASSWORD, "username": username }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "register failed: {}", body);

    let (status, body) = send(
        app,
        json_request(
            "POST",
            "/api/auth/login",
            None,
            json!({ "email": email, "password": TEST_PASSWORD }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "login failed: {}", body);

    (
        body["token"].as_str().unwrap().to_string(),
        body["user"]["id"].as_str().unwrap().to_string(),
    )
}

/// Create a snippet through the API; returns its id
pub async fn create_snippet(app: &Router, token: &str, title: &str, is_public: bool) -> String {
    let (status, body) = send(
        app,
        json_request(
            "POST",
            "/api/snippets",
            Some(token),
            json!({
                "title": title,
                "code": "fn main() { println!(\"hi\"); }",
                "language": "Rust",
                "tags": ["CLI", "cli", "beginner"],
                "isPublic": is_public,
            }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "create snippet failed: {}", body);
    body["snippet"]["id"].as_str().unwrap().to_string()
}
