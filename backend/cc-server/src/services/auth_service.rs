//! Registration, login and token lifecycle

use crate::error::Result as ServerErrorResult;
use crate::services::registration_listener::RegistrationListener;
use crate::services::rewards::{CommunityBadge, WelcomeBonus};
use crate::{ApiError, ApiResult};

use cc_auth::{PasswordHasher, TokenCodec};
use cc_config::{Config, ConfigError};
use cc_core::{LoginInput, RegistrationInput, User};
use cc_db::UserRepository;

use std::sync::Arc;
use std::time::Duration;

use sqlx::SqlitePool;
use uuid::Uuid;

const EMAIL_CONSTRAINT: &str = "users.email";
const USERNAME_CONSTRAINT: &str = "users.username";
const EMAIL_TAKEN: &str = "Email already exists";
const USERNAME_TAKEN: &str = "Username already exists";
const INVALID_CREDENTIALS: &str = "Invalid credentials";
const USER_NOT_FOUND: &str = "User not found";

pub struct AuthService {
    pool: SqlitePool,
    hasher: PasswordHasher,
    token_codec: Arc<TokenCodec>,
    login_token_ttl: Duration,
    refresh_token_ttl: Duration,
    listeners: Vec<Arc<dyn RegistrationListener>>,
}

impl AuthService {
    pub fn new(
        pool: SqlitePool,
        hasher: PasswordHasher,
        token_codec: Arc<TokenCodec>,
        login_token_ttl: Duration,
        refresh_token_ttl: Duration,
    ) -> Self {
        Self {
            pool,
            hasher,
            token_codec,
            login_token_ttl,
            refresh_token_ttl,
            listeners: Vec::new(),
        }
    }

    /// Build from validated config, wiring the configured reward listeners
    pub fn from_config(pool: SqlitePool, config: &Config) -> ServerErrorResult<Self> {
        let auth = &config.auth;
        let secret = auth
            .jwt_secret
            .as_deref()
            .ok_or_else(|| ConfigError::auth("auth.jwt_secret is required"))?;

        let token_codec = TokenCodec::with_hs256(secret.as_bytes(), &auth.issuer)
            .with_leeway(auth.leeway_secs);
        let hasher = PasswordHasher::with_params(
            auth.hash_memory_kib,
            auth.hash_iterations,
            auth.hash_parallelism,
        )?;

        let mut service = Self::new(
            pool.clone(),
            hasher,
            Arc::new(token_codec),
            auth.login_token_ttl(),
            auth.refresh_token_ttl(),
        );

        if config.rewards.welcome_bonus_points > 0 {
            service = service.with_listener(Arc::new(WelcomeBonus::new(
                pool.clone(),
                config.rewards.welcome_bonus_points,
            )));
        }
        if config.rewards.community_badge {
            service = service.with_listener(Arc::new(CommunityBadge::new(pool)));
        }

        Ok(service)
    }

    pub fn with_listener(mut self, listener: Arc<dyn RegistrationListener>) -> Self {
        self.listeners.push(listener);
        self
    }

    pub fn token_codec(&self) -> Arc<TokenCodec> {
        Arc::clone(&self.token_codec)
    }

    /// Create an account from validated input.
    ///
    /// The returned user is re-read after listeners ran, so it reflects any
    /// welcome bonus.
    pub async fn register(&self, input: RegistrationInput) -> ApiResult<User> {
        let users = UserRepository::new(self.pool.clone());

        if users.find_by_email(&input.email).await?.is_some() {
            return Err(ApiError::conflict(EMAIL_TAKEN));
        }
        if users.find_by_username(&input.username).await?.is_some() {
            return Err(ApiError::conflict(USERNAME_TAKEN));
        }

        let password_hash = self.hash_password(input.password).await?;
        let user = User::new(
            input.email,
            input.username,
            password_hash,
            input.first_name,
            input.last_name,
        );

        // The unique indexes settle races between concurrent registrations
        if let Err(e) = users.create(&user).await {
            if e.is_unique_violation_on(EMAIL_CONSTRAINT) {
                return Err(ApiError::conflict(EMAIL_TAKEN));
            }
            if e.is_unique_violation_on(USERNAME_CONSTRAINT) {
                return Err(ApiError::conflict(USERNAME_TAKEN));
            }
            return Err(e.into());
        }

        log::info!("Registered user {} ({})", user.username, user.id);

        self.notify_listeners(&user).await;

        Ok(users.find_by_id(user.id).await?.unwrap_or(user))
    }

    /// Unknown email and wrong password are indistinguishable to the caller
    pub async fn login(&self, input: LoginInput) -> ApiResult<(String, User)> {
        let users = UserRepository::new(self.pool.clone());

        let Some(user) = users.find_by_email(&input.email).await? else {
            log::debug!("Login failed: unknown email");
            return Err(ApiError::unauthorized(INVALID_CREDENTIALS));
        };

        if !self
            .verify_password(input.password, user.password_hash.clone())
            .await?
        {
            log::debug!("Login failed: wrong password for {}", user.id);
            return Err(ApiError::unauthorized(INVALID_CREDENTIALS));
        }

        let token = self.token_codec.issue(&user, self.login_token_ttl)?;
        log::info!("User {} logged in", user.id);

        Ok((token, user))
    }

    pub async fn get_profile(&self, user_id: Uuid) -> ApiResult<User> {
        UserRepository::new(self.pool.clone())
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| ApiError::not_found(USER_NOT_FOUND))
    }

    /// Decode a token and load the identity it names
    pub async fn verify_token(&self, token: &str) -> ApiResult<User> {
        let claims = self.token_codec.verify(token)?;
        self.get_profile(claims.id).await
    }

    /// Issue a refresh-lifetime token for a still-existing user
    pub async fn refresh(&self, user_id: Uuid) -> ApiResult<(String, User)> {
        let user = self.get_profile(user_id).await?;
        let token = self.token_codec.issue(&user, self.refresh_token_ttl)?;

        log::debug!("Refreshed token for {}", user.id);
        Ok((token, user))
    }

    async fn notify_listeners(&self, user: &User) {
        for listener in &self.listeners {
            if let Err(e) = listener.on_registered(user).await {
                log::error!(
                    "Registration listener '{}' failed for {}: {}",
                    listener.name(),
                    user.id,
                    e
                );
            }
        }
    }

    async fn hash_password(&self, password: String) -> ApiResult<String> {
        let hasher = self.hasher.clone();
        let digest = tokio::task::spawn_blocking(move || hasher.hash(&password))
            .await
            .map_err(|e| ApiError::internal(format!("Hashing task failed: {}", e)))??;
        Ok(digest)
    }

    async fn verify_password(&self, password: String, digest: String) -> ApiResult<bool> {
        let hasher = self.hasher.clone();
        tokio::task::spawn_blocking(move || hasher.verify(&password, &digest))
            .await
            .map_err(|e| ApiError::internal(format!("Verification task failed: {}", e)))
    }
}
