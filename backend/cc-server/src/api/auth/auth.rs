//! Authentication REST API handlers

use crate::{ApiResult, AppState, AuthUser, JsonBody, MessageResponse, TokenResponse, UserResponse};

use cc_auth::extract_bearer;
use cc_core::{IdentityValidator, LoginForm, RegistrationForm};

use axum::{
    Json,
    extract::State,
    http::{HeaderMap, StatusCode, header::AUTHORIZATION},
};

/// POST /api/auth/register
pub async fn register(
    State(state): State<AppState>,
    JsonBody(form): JsonBody<RegistrationForm>,
) -> ApiResult<(StatusCode, Json<UserResponse>)> {
    let input = IdentityValidator::validate_registration(form)?;
    let user = state.auth_service.register(input).await?;

    Ok((StatusCode::CREATED, Json(user.into())))
}

/// POST /api/auth/login
pub async fn login(
    State(state): State<AppState>,
    JsonBody(form): JsonBody<LoginForm>,
) -> ApiResult<Json<TokenResponse>> {
    let input = IdentityValidator::validate_login(form)?;
    let (token, user) = state.auth_service.login(input).await?;

    Ok(Json(TokenResponse::new(token, user)))
}

/// GET /api/auth/profile
pub async fn profile(
    State(state): State<AppState>,
    AuthUser(auth): AuthUser,
) -> ApiResult<Json<UserResponse>> {
    let user = state.auth_service.get_profile(auth.user_id).await?;

    Ok(Json(user.into()))
}

/// POST /api/auth/refresh
pub async fn refresh(
    State(state): State<AppState>,
    AuthUser(auth): AuthUser,
) -> ApiResult<Json<TokenResponse>> {
    let (token, user) = state.auth_service.refresh(auth.user_id).await?;

    Ok(Json(TokenResponse::new(token, user)))
}

/// POST /api/auth/logout
///
/// Tokens are stateless; the client discards its copy.
pub async fn logout(AuthUser(auth): AuthUser) -> Json<MessageResponse> {
    log::info!("User {} logged out", auth.user_id);

    Json(MessageResponse::new("Logged out successfully"))
}

/// GET /api/auth/verify
///
/// Unlike the extractor-guarded routes this re-reads the user, so a token
/// for a deleted account yields 404.
pub async fn verify(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> ApiResult<Json<UserResponse>> {
    let header = headers
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok());
    let token = extract_bearer(header)?;
    let user = state.auth_service.verify_token(token).await?;

    Ok(Json(user.into()))
}
