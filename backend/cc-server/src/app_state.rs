use crate::services::auth_service::AuthService;

use cc_auth::TokenCodec;

use std::sync::Arc;

use sqlx::SqlitePool;

/// Shared handler state; cheap to clone
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub auth_service: Arc<AuthService>,
    pub token_codec: Arc<TokenCodec>,
}

impl AppState {
    pub fn new(pool: SqlitePool, auth_service: Arc<AuthService>) -> Self {
        let token_codec = auth_service.token_codec();
        Self {
            pool,
            auth_service,
            token_codec,
        }
    }
}
