use crate::ApiError;

use cc_auth::AuthError;
use cc_core::{CoreError, ValidationErrors};
use cc_db::DbError;

use std::panic::Location;

use axum::{http::StatusCode, response::IntoResponse};
use error_location::ErrorLocation;
use googletest::prelude::*;
use http_body_util::BodyExt;
use serde_json::Value;

async fn render(error: ApiError) -> (StatusCode, Value) {
    let response = error.into_response();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&bytes).unwrap())
}

fn here() -> ErrorLocation {
    ErrorLocation::from(Location::caller())
}

#[tokio::test]
async fn given_internal_error_when_rendered_then_message_is_hidden() {
    let (status, body) = render(ApiError::internal("database file is locked at /var/db")).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["success"], false);
    assert_eq!(body["code"], "INTERNAL_ERROR");
    assert_eq!(body["error"], "Internal server error");
    assert!(body.get("details").is_none());
}

#[tokio::test]
async fn given_validation_error_when_rendered_then_details_listed() {
    // Given
    let mut errors = ValidationErrors::new();
    errors.push("email", "Email is required");
    errors.push("password", "Password is required");
    let core: CoreError = errors.finish(()).unwrap_err();

    // When
    let (status, body) = render(ApiError::from(core)).await;

    // Then
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "VALIDATION_ERROR");
    assert_eq!(body["error"], "Validation failed");
    assert_eq!(body["details"][0]["field"], "email");
    assert_eq!(body["details"][1]["message"], "Password is required");
}

#[test]
fn given_each_variant_when_status_requested_then_matches_taxonomy() {
    assert_that!(ApiError::bad_request("x").status(), eq(StatusCode::BAD_REQUEST));
    assert_that!(ApiError::unauthorized("x").status(), eq(StatusCode::UNAUTHORIZED));
    assert_that!(ApiError::forbidden("x").status(), eq(StatusCode::FORBIDDEN));
    assert_that!(ApiError::not_found("x").status(), eq(StatusCode::NOT_FOUND));
    assert_that!(ApiError::conflict("x").status(), eq(StatusCode::CONFLICT));
    assert_that!(ApiError::internal("x").status(), eq(StatusCode::INTERNAL_SERVER_ERROR));
}

#[tokio::test]
async fn given_token_failures_when_converted_then_client_messages_used() {
    let cases = [
        (AuthError::MissingHeader { location: here() }, "Access token required"),
        (AuthError::InvalidScheme { location: here() }, "Access token required"),
        (AuthError::TokenExpired { location: here() }, "Token expired"),
        (
            AuthError::InvalidToken {
                message: "bad".to_string(),
                location: here(),
            },
            "Invalid token",
        ),
    ];

    for (auth_error, expected) in cases {
        let (status, body) = render(ApiError::from(auth_error)).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["error"], expected);
    }
}

#[test]
fn given_hashing_failure_when_converted_then_internal() {
    let error = ApiError::from(AuthError::PasswordHash {
        message: "out of memory".to_string(),
        location: here(),
    });

    assert_that!(error.status(), eq(StatusCode::INTERNAL_SERVER_ERROR));
}

#[tokio::test]
async fn given_unique_violation_when_converted_then_conflict() {
    let error = ApiError::from(DbError::UniqueViolation {
        constraint: "users.email".to_string(),
        location: here(),
    });

    let (status, body) = render(error).await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"], "Duplicate value for users.email");
}

#[test]
fn given_malformed_uuid_when_converted_then_bad_request() {
    let parse_error = uuid::Uuid::parse_str("nope").unwrap_err();

    assert_that!(ApiError::from(parse_error).status(), eq(StatusCode::BAD_REQUEST));
}
