use crate::{ConfigError, ConfigErrorResult};

use std::time::Duration;

use serde::Deserialize;

pub const MIN_JWT_SECRET_LENGTH: usize = 32;
pub const DEFAULT_ISSUER: &str = "codecollab";

// Token lifetimes (seconds)
pub const DEFAULT_LOGIN_TOKEN_TTL_SECS: u64 = 60 * 60;
pub const DEFAULT_REFRESH_TOKEN_TTL_SECS: u64 = 7 * 24 * 60 * 60;
pub const MAX_TOKEN_TTL_SECS: u64 = 30 * 24 * 60 * 60;

// Clock skew tolerance (seconds)
pub const DEFAULT_LEEWAY_SECS: u64 = 30;
pub const MAX_LEEWAY_SECS: u64 = 300;

// Argon2id work factor, OWASP baseline
pub const DEFAULT_HASH_MEMORY_KIB: u32 = 19_456;
pub const DEFAULT_HASH_ITERATIONS: u32 = 2;
pub const DEFAULT_HASH_PARALLELISM: u32 = 1;
pub const MIN_HASH_MEMORY_KIB: u32 = 8;
pub const MAX_HASH_PARALLELISM: u32 = 16;

/// Token signing and password hashing settings.
///
/// `jwt_secret` has no default; it comes from `config.toml` or
/// `CC_AUTH_JWT_SECRET` and is never logged.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    pub jwt_secret: Option<String>,
    pub issuer: String,
    pub login_token_ttl_secs: u64,
    pub refresh_token_ttl_secs: u64,
    pub leeway_secs: u64,
    pub hash_memory_kib: u32,
    pub hash_iterations: u32,
    pub hash_parallelism: u32,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: None,
            issuer: String::from(DEFAULT_ISSUER),
            login_token_ttl_secs: DEFAULT_LOGIN_TOKEN_TTL_SECS,
            refresh_token_ttl_secs: DEFAULT_REFRESH_TOKEN_TTL_SECS,
            leeway_secs: DEFAULT_LEEWAY_SECS,
            hash_memory_kib: DEFAULT_HASH_MEMORY_KIB,
            hash_iterations: DEFAULT_HASH_ITERATIONS,
            hash_parallelism: DEFAULT_HASH_PARALLELISM,
        }
    }
}

impl AuthConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        match &self.jwt_secret {
            None => {
                return Err(ConfigError::auth(
                    "auth.jwt_secret is required (set it in config.toml or CC_AUTH_JWT_SECRET)",
                ));
            }
            Some(secret) if secret.len() < MIN_JWT_SECRET_LENGTH => {
                return Err(ConfigError::auth(format!(
                    "auth.jwt_secret must be at least {} characters",
                    MIN_JWT_SECRET_LENGTH
                )));
            }
            Some(_) => {}
        }

        if self.issuer.trim().is_empty() {
            return Err(ConfigError::auth("auth.issuer must not be empty"));
        }

        Self::check_ttl("auth.login_token_ttl_secs", self.login_token_ttl_secs)?;
        Self::check_ttl("auth.refresh_token_ttl_secs", self.refresh_token_ttl_secs)?;

        if self.leeway_secs > MAX_LEEWAY_SECS {
            return Err(ConfigError::auth(format!(
                "auth.leeway_secs must be 0-{}, got {}",
                MAX_LEEWAY_SECS, self.leeway_secs
            )));
        }

        if self.hash_iterations == 0 {
            return Err(ConfigError::auth("auth.hash_iterations must be at least 1"));
        }

        if self.hash_parallelism == 0 || self.hash_parallelism > MAX_HASH_PARALLELISM {
            return Err(ConfigError::auth(format!(
                "auth.hash_parallelism must be 1-{}, got {}",
                MAX_HASH_PARALLELISM, self.hash_parallelism
            )));
        }

        // Argon2 requires at least 8 KiB per lane
        if self.hash_memory_kib < MIN_HASH_MEMORY_KIB * self.hash_parallelism {
            return Err(ConfigError::auth(format!(
                "auth.hash_memory_kib must be at least {} x hash_parallelism, got {}",
                MIN_HASH_MEMORY_KIB, self.hash_memory_kib
            )));
        }

        Ok(())
    }

    pub fn login_token_ttl(&self) -> Duration {
        Duration::from_secs(self.login_token_ttl_secs)
    }

    pub fn refresh_token_ttl(&self) -> Duration {
        Duration::from_secs(self.refresh_token_ttl_secs)
    }

    fn check_ttl(name: &str, secs: u64) -> ConfigErrorResult<()> {
        if secs == 0 || secs > MAX_TOKEN_TTL_SECS {
            return Err(ConfigError::auth(format!(
                "{} must be 1-{}, got {}",
                name, MAX_TOKEN_TTL_SECS, secs
            )));
        }
        Ok(())
    }
}
