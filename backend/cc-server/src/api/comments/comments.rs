//! Comment REST API handlers

use crate::api::snippets::snippets::load_readable_snippet;
use crate::{
    ApiResult, AppState, AuthUser, CommentDto, CommentListResponse, CommentResponse, JsonBody,
    MaybeAuthUser,
};

use cc_core::{Comment, CommentForm, SnippetValidator};
use cc_db::CommentRepository;

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

/// GET /api/snippets/{id}/comments
pub async fn list_comments(
    State(state): State<AppState>,
    viewer: MaybeAuthUser,
    Path(snippet_id): Path<String>,
) -> ApiResult<Json<CommentListResponse>> {
    let snippet = load_readable_snippet(&state, &snippet_id, viewer.user_id()).await?;

    let comments = CommentRepository::new(state.pool.clone())
        .find_by_snippet(snippet.id)
        .await?;

    Ok(Json(CommentListResponse {
        success: true,
        comments: comments.into_iter().map(CommentDto::from).collect(),
    }))
}

/// POST /api/snippets/{id}/comments
pub async fn create_comment(
    State(state): State<AppState>,
    AuthUser(auth): AuthUser,
    Path(snippet_id): Path<String>,
    JsonBody(form): JsonBody<CommentForm>,
) -> ApiResult<(StatusCode, Json<CommentResponse>)> {
    let content = SnippetValidator::validate_comment(form)?;
    let snippet = load_readable_snippet(&state, &snippet_id, Some(auth.user_id)).await?;

    let comment = Comment::new(snippet.id, auth.user_id, content);
    CommentRepository::new(state.pool.clone())
        .create(&comment)
        .await?;

    log::info!(
        "User {} commented {} on snippet {}",
        auth.user_id,
        comment.id,
        snippet.id
    );

    Ok((
        StatusCode::CREATED,
        Json(CommentResponse {
            success: true,
            comment: comment.into(),
        }),
    ))
}
