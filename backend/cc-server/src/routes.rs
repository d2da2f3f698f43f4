use crate::{
    AppState, create_comment, create_snippet, delete_snippet, get_snippet, health, list_comments,
    list_snippets, login, logout, profile, refresh, register, update_snippet, verify,
};

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::cors::{Any, CorsLayer};

/// Build the application router with all endpoints
pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Auth
        .route("/api/auth/register", post(register))
        .route("/api/auth/login", post(login))
        .route("/api/auth/profile", get(profile))
        .route("/api/auth/refresh", post(refresh))
        .route("/api/auth/logout", post(logout))
        .route("/api/auth/verify", get(verify))
        // Snippets
        .route("/api/snippets", get(list_snippets).post(create_snippet))
        .route(
            "/api/snippets/{id}",
            get(get_snippet).put(update_snippet).delete(delete_snippet),
        )
        .route(
            "/api/snippets/{id}/comments",
            get(list_comments).post(create_comment),
        )
        // Health check endpoints
        .route("/health", get(health::health_check))
        .route("/live", get(health::liveness_check))
        .route("/ready", get(health::readiness_check))
        // Add shared state
        .with_state(state)
        // The SPA is served from another origin
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}
