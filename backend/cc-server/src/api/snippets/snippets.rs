//! Snippet REST API handlers

use crate::{
    ApiError, ApiResult, AppState, AuthUser, JsonBody, ListSnippetsQuery, MaybeAuthUser,
    MessageResponse, Pagination, SnippetListResponse, SnippetResponse,
};

use cc_core::{Snippet, SnippetForm, SnippetPatch, SnippetValidator, can_read, can_write, is_owner};
use cc_db::SnippetRepository;

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use uuid::Uuid;

const ACCESS_DENIED: &str = "Access denied";

/// GET /api/snippets
pub async fn list_snippets(
    State(state): State<AppState>,
    viewer: MaybeAuthUser,
    Query(params): Query<ListSnippetsQuery>,
) -> ApiResult<Json<SnippetListResponse>> {
    let feed = params.into_feed_request(viewer.user_id())?;

    let repo = SnippetRepository::new(state.pool.clone());
    let snippets = repo.list_visible(&feed.query).await?;
    let total = repo.count_visible(&feed.query).await?;

    Ok(Json(SnippetListResponse {
        success: true,
        snippets: snippets.into_iter().map(Into::into).collect(),
        pagination: Pagination::new(feed.page, feed.limit, total),
    }))
}

/// POST /api/snippets
pub async fn create_snippet(
    State(state): State<AppState>,
    AuthUser(auth): AuthUser,
    JsonBody(form): JsonBody<SnippetForm>,
) -> ApiResult<(StatusCode, Json<SnippetResponse>)> {
    let input = SnippetValidator::validate_new(form)?;
    let snippet = Snippet::new(auth.user_id, input);

    SnippetRepository::new(state.pool.clone())
        .create(&snippet)
        .await?;

    log::info!("User {} created snippet {}", auth.user_id, snippet.id);

    Ok((StatusCode::CREATED, Json(snippet.into())))
}

/// GET /api/snippets/{id}
///
/// A successful read by anyone but the author counts one view.
pub async fn get_snippet(
    State(state): State<AppState>,
    viewer: MaybeAuthUser,
    Path(snippet_id): Path<String>,
) -> ApiResult<Json<SnippetResponse>> {
    let caller = viewer.user_id();
    let mut snippet = load_readable_snippet(&state, &snippet_id, caller).await?;

    if !is_owner(&snippet, caller) {
        SnippetRepository::new(state.pool.clone())
            .increment_view_count(snippet.id)
            .await?;
        snippet.view_count += 1;
    }

    Ok(Json(snippet.into()))
}

/// PUT /api/snippets/{id}
pub async fn update_snippet(
    State(state): State<AppState>,
    AuthUser(auth): AuthUser,
    Path(snippet_id): Path<String>,
    JsonBody(patch): JsonBody<SnippetPatch>,
) -> ApiResult<Json<SnippetResponse>> {
    let changes = SnippetValidator::validate_patch(patch)?;

    let mut snippet = load_snippet(&state, &snippet_id).await?;
    if !can_write(&snippet, Some(auth.user_id)) {
        return Err(ApiError::forbidden(ACCESS_DENIED));
    }

    if changes.is_empty() {
        return Ok(Json(snippet.into()));
    }

    snippet.apply(changes);
    SnippetRepository::new(state.pool.clone())
        .update(&snippet)
        .await?;

    log::info!("User {} updated snippet {}", auth.user_id, snippet.id);

    Ok(Json(snippet.into()))
}

/// DELETE /api/snippets/{id}
pub async fn delete_snippet(
    State(state): State<AppState>,
    AuthUser(auth): AuthUser,
    Path(snippet_id): Path<String>,
) -> ApiResult<Json<MessageResponse>> {
    let snippet = load_snippet(&state, &snippet_id).await?;
    if !can_write(&snippet, Some(auth.user_id)) {
        return Err(ApiError::forbidden(ACCESS_DENIED));
    }

    if !SnippetRepository::new(state.pool.clone())
        .delete(snippet.id)
        .await?
    {
        return Err(ApiError::not_found("Snippet not found"));
    }

    log::info!("User {} deleted snippet {}", auth.user_id, snippet.id);

    Ok(Json(MessageResponse::new("Snippet deleted successfully")))
}

/// Load by path id: 400 on a malformed id, 404 when absent
pub(crate) async fn load_snippet(state: &AppState, snippet_id: &str) -> ApiResult<Snippet> {
    let id = Uuid::parse_str(snippet_id)?;

    SnippetRepository::new(state.pool.clone())
        .find_by_id(id)
        .await?
        .ok_or_else(|| ApiError::not_found("Snippet not found"))
}

/// As `load_snippet`, then 403 unless `caller` may read it
pub(crate) async fn load_readable_snippet(
    state: &AppState,
    snippet_id: &str,
    caller: Option<Uuid>,
) -> ApiResult<Snippet> {
    let snippet = load_snippet(state, snippet_id).await?;
    if !can_read(&snippet, caller) {
        return Err(ApiError::forbidden(ACCESS_DENIED));
    }
    Ok(snippet)
}
