//! Integration tests for snippet API handlers and ownership checks

mod common;

use crate::common::{create_snippet, create_test_app, empty_request, json_request, register_and_login, send};

use axum::http::StatusCode;
use googletest::prelude::*;
use serde_json::{Value, json};
use uuid::Uuid;

fn ids(body: &Value) -> Vec<String> {
    body["snippets"]
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["id"].as_str().unwrap().to_string())
        .collect()
}

#[tokio::test]
async fn given_valid_payload_when_creating_snippet_then_201_with_normalized_fields() {
    // Given
    let (app, _state) = create_test_app().await;
    let (token, user_id) = register_and_login(&app, "alice").await;

    // When
    let (status, body) = send(
        &app,
        json_request(
            "POST",
            "/api/snippets",
            Some(&token),
            json!({
                "title": "  Hello  ",
                "code": "fn main() {}",
                "language": "Rust",
                "tags": ["CLI", " cli ", "Beginner"],
            }),
        ),
    )
    .await;

    // Then
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["success"], true);
    assert_eq!(body["snippet"]["title"], "Hello");
    assert_eq!(body["snippet"]["language"], "rust");
    assert_eq!(body["snippet"]["tags"], json!(["cli", "beginner"]));
    assert_eq!(body["snippet"]["isPublic"], true);
    assert_eq!(body["snippet"]["viewCount"], 0);
    assert_eq!(body["snippet"]["authorId"], user_id);
}

#[tokio::test]
async fn given_no_token_when_creating_snippet_then_401() {
    let (app, _state) = create_test_app().await;

    let (status, body) = send(
        &app,
        json_request(
            "POST",
            "/api/snippets",
            None,
            json!({ "title": "t", "code": "c", "language": "rust" }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], "Access token required");
}

#[tokio::test]
async fn given_missing_fields_when_creating_snippet_then_400_with_details() {
    let (app, _state) = create_test_app().await;
    let (token, _) = register_and_login(&app, "alice").await;

    let (status, body) = send(
        &app,
        json_request("POST", "/api/snippets", Some(&token), json!({ "code": "   " })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    let fields: Vec<&str> = body["details"]
        .as_array()
        .unwrap()
        .iter()
        .map(|d| d["field"].as_str().unwrap())
        .collect();
    assert_that!(fields, unordered_elements_are![eq(&"title"), eq(&"code"), eq(&"language")]);
}

#[tokio::test]
async fn given_private_snippet_when_other_user_reads_then_403() {
    // Given
    let (app, _state) = create_test_app().await;
    let (alice, _) = register_and_login(&app, "alice").await;
    let (bob, _) = register_and_login(&app, "bob").await;
    let id = create_snippet(&app, &alice, "secret", false).await;

    // When
    let (bob_status, bob_body) =
        send(&app, empty_request("GET", &format!("/api/snippets/{}", id), Some(&bob))).await;
    let (anon_status, _) =
        send(&app, empty_request("GET", &format!("/api/snippets/{}", id), None)).await;
    let (alice_status, _) =
        send(&app, empty_request("GET", &format!("/api/snippets/{}", id), Some(&alice))).await;

    // Then
    assert_eq!(bob_status, StatusCode::FORBIDDEN);
    assert_eq!(bob_body["error"], "Access denied");
    assert_eq!(anon_status, StatusCode::FORBIDDEN);
    assert_eq!(alice_status, StatusCode::OK);
}

#[tokio::test]
async fn given_public_snippet_when_anonymous_reads_then_each_read_counts_once() {
    // Given
    let (app, _state) = create_test_app().await;
    let (alice, _) = register_and_login(&app, "alice").await;
    let id = create_snippet(&app, &alice, "public", true).await;
    let uri = format!("/api/snippets/{}", id);

    // When
    let (first_status, first) = send(&app, empty_request("GET", &uri, None)).await;
    let (_, second) = send(&app, empty_request("GET", &uri, None)).await;

    // Then
    assert_eq!(first_status, StatusCode::OK);
    assert_eq!(first["snippet"]["viewCount"], 1);
    assert_eq!(second["snippet"]["viewCount"], 2);
}

#[tokio::test]
async fn given_public_snippet_when_owner_reads_then_view_count_unchanged() {
    let (app, _state) = create_test_app().await;
    let (alice, _) = register_and_login(&app, "alice").await;
    let id = create_snippet(&app, &alice, "public", true).await;
    let uri = format!("/api/snippets/{}", id);

    send(&app, empty_request("GET", &uri, Some(&alice))).await;
    let (status, body) = send(&app, empty_request("GET", &uri, Some(&alice))).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["snippet"]["viewCount"], 0);
}

#[tokio::test]
async fn given_invalid_token_on_optional_route_when_reading_public_snippet_then_treated_as_anonymous() {
    let (app, _state) = create_test_app().await;
    let (alice, _) = register_and_login(&app, "alice").await;
    let id = create_snippet(&app, &alice, "public", true).await;

    let (status, body) = send(
        &app,
        empty_request("GET", &format!("/api/snippets/{}", id), Some("garbage")),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["snippet"]["viewCount"], 1);
}

#[tokio::test]
async fn given_malformed_or_unknown_id_when_reading_then_400_or_404() {
    let (app, _state) = create_test_app().await;

    let (bad_status, bad_body) =
        send(&app, empty_request("GET", "/api/snippets/not-a-uuid", None)).await;
    let (missing_status, missing_body) = send(
        &app,
        empty_request("GET", &format!("/api/snippets/{}", Uuid::new_v4()), None),
    )
    .await;

    assert_eq!(bad_status, StatusCode::BAD_REQUEST);
    assert_eq!(bad_body["success"], false);
    assert_eq!(missing_status, StatusCode::NOT_FOUND);
    assert_eq!(missing_body["error"], "Snippet not found");
}

#[tokio::test]
async fn given_mixed_visibility_when_listing_then_viewer_sees_public_and_own_private() {
    // Given
    let (app, _state) = create_test_app().await;
    let (alice, _) = register_and_login(&app, "alice").await;
    let (bob, _) = register_and_login(&app, "bob").await;
    let alice_public = create_snippet(&app, &alice, "alice public", true).await;
    let alice_private = create_snippet(&app, &alice, "alice private", false).await;
    let bob_private = create_snippet(&app, &bob, "bob private", false).await;

    // When
    let (_, anonymous) = send(&app, empty_request("GET", "/api/snippets", None)).await;
    let (_, as_alice) = send(&app, empty_request("GET", "/api/snippets", Some(&alice))).await;
    let (status, as_bob) = send(&app, empty_request("GET", "/api/snippets", Some(&bob))).await;

    // Then
    assert_eq!(status, StatusCode::OK);
    assert_that!(ids(&anonymous), unordered_elements_are![eq(&alice_public)]);
    assert_that!(
        ids(&as_alice),
        unordered_elements_are![eq(&alice_public), eq(&alice_private)]
    );
    assert_that!(
        ids(&as_bob),
        unordered_elements_are![eq(&alice_public), eq(&bob_private)]
    );
    assert_eq!(as_bob["pagination"]["total"], 2);
}

#[tokio::test]
async fn given_filters_when_listing_then_only_matching_snippets_returned() {
    // Given
    let (app, _state) = create_test_app().await;
    let (alice, _) = register_and_login(&app, "alice").await;
    let rust_id = create_snippet(&app, &alice, "Parsing args", true).await;
    let (status, body) = send(
        &app,
        json_request(
            "POST",
            "/api/snippets",
            Some(&alice),
            json!({
                "title": "Fetch wrapper",
                "code": "fetch(url)",
                "language": "JavaScript",
                "tags": ["web"],
            }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let js_id = body["snippet"]["id"].as_str().unwrap().to_string();

    // When
    let (_, by_language) =
        send(&app, empty_request("GET", "/api/snippets?language=JavaScript", None)).await;
    let (_, by_tag) = send(&app, empty_request("GET", "/api/snippets?tag=cli", None)).await;
    let (_, by_search) = send(&app, empty_request("GET", "/api/snippets?search=args", None)).await;

    // Then
    assert_that!(ids(&by_language), elements_are![eq(&js_id)]);
    assert_that!(ids(&by_tag), elements_are![eq(&rust_id)]);
    assert_that!(ids(&by_search), elements_are![eq(&rust_id)]);
}

#[tokio::test]
async fn given_many_snippets_when_paging_then_pagination_metadata_matches() {
    // Given
    let (app, _state) = create_test_app().await;
    let (alice, _) = register_and_login(&app, "alice").await;
    for i in 0..5 {
        create_snippet(&app, &alice, &format!("snippet {}", i), true).await;
    }

    // When
    let (_, first) = send(&app, empty_request("GET", "/api/snippets?page=1&limit=2", None)).await;
    let (_, last) = send(&app, empty_request("GET", "/api/snippets?page=3&limit=2", None)).await;

    // Then
    assert_that!(ids(&first).len(), eq(2));
    assert_that!(ids(&last).len(), eq(1));
    assert_eq!(
        first["pagination"],
        json!({ "page": 1, "limit": 2, "total": 5, "totalPages": 3 })
    );
}

#[tokio::test]
async fn given_bad_paging_params_when_listing_then_400_validation_error() {
    let (app, _state) = create_test_app().await;

    let (status, body) = send(&app, empty_request("GET", "/api/snippets?page=0&limit=500", None)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "VALIDATION_ERROR");
    assert_eq!(body["details"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn given_owner_when_updating_then_changes_applied() {
    // Given
    let (app, _state) = create_test_app().await;
    let (alice, _) = register_and_login(&app, "alice").await;
    let id = create_snippet(&app, &alice, "before", true).await;

    // When
    let (status, body) = send(
        &app,
        json_request(
            "PUT",
            &format!("/api/snippets/{}", id),
            Some(&alice),
            json!({ "title": "after", "isPublic": false }),
        ),
    )
    .await;

    // Then
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["snippet"]["title"], "after");
    assert_eq!(body["snippet"]["isPublic"], false);
    assert_eq!(body["snippet"]["language"], "rust");

    let (_, anonymous) =
        send(&app, empty_request("GET", &format!("/api/snippets/{}", id), None)).await;
    assert_eq!(anonymous["error"], "Access denied");
}

#[tokio::test]
async fn given_non_owner_when_updating_or_deleting_then_403_and_snippet_untouched() {
    // Given
    let (app, _state) = create_test_app().await;
    let (alice, _) = register_and_login(&app, "alice").await;
    let (bob, _) = register_and_login(&app, "bob").await;
    let id = create_snippet(&app, &alice, "mine", true).await;
    let uri = format!("/api/snippets/{}", id);

    // When
    let (update_status, _) = send(
        &app,
        json_request("PUT", &uri, Some(&bob), json!({ "title": "hijacked" })),
    )
    .await;
    let (delete_status, _) = send(&app, empty_request("DELETE", &uri, Some(&bob))).await;

    // Then
    assert_eq!(update_status, StatusCode::FORBIDDEN);
    assert_eq!(delete_status, StatusCode::FORBIDDEN);

    let (_, body) = send(&app, empty_request("GET", &uri, Some(&alice))).await;
    assert_eq!(body["snippet"]["title"], "mine");
}

#[tokio::test]
async fn given_owner_when_deleting_then_snippet_gone() {
    let (app, _state) = create_test_app().await;
    let (alice, _) = register_and_login(&app, "alice").await;
    let id = create_snippet(&app, &alice, "temporary", true).await;
    let uri = format!("/api/snippets/{}", id);

    let (status, body) = send(&app, empty_request("DELETE", &uri, Some(&alice))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Snippet deleted successfully");

    let (status, _) = send(&app, empty_request("GET", &uri, Some(&alice))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn given_invalid_patch_when_updating_missing_or_foreign_snippet_then_400_first() {
    // Given
    let (app, _state) = create_test_app().await;
    let (alice, _) = register_and_login(&app, "alice").await;
    let (bob, _) = register_and_login(&app, "bob").await;
    let id = create_snippet(&app, &alice, "mine", true).await;
    let invalid = json!({ "title": "   " });

    // When
    let (missing_status, missing_body) = send(
        &app,
        json_request(
            "PUT",
            &format!("/api/snippets/{}", Uuid::new_v4()),
            Some(&alice),
            invalid.clone(),
        ),
    )
    .await;
    let (foreign_status, foreign_body) = send(
        &app,
        json_request("PUT", &format!("/api/snippets/{}", id), Some(&bob), invalid),
    )
    .await;

    // Then
    assert_eq!(missing_status, StatusCode::BAD_REQUEST);
    assert_eq!(missing_body["details"][0]["field"], "title");
    assert_eq!(foreign_status, StatusCode::BAD_REQUEST);
    assert_eq!(foreign_body["code"], "VALIDATION_ERROR");
}
