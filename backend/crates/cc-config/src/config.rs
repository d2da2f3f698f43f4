use crate::{
    AuthConfig, CONFIG_DIR_ENV, CONFIG_FILENAME, ConfigError, ConfigErrorResult,
    DEFAULT_CONFIG_DIR, DatabaseConfig, LoggingConfig, RewardsConfig, ServerConfig,
};

use std::path::{Path, PathBuf};

use log::info;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub auth: AuthConfig,
    pub logging: LoggingConfig,
    pub rewards: RewardsConfig,
}

impl Config {
    /// Load config.
    ///
    /// Loading order:
    /// 1. Check for CC_CONFIG_DIR env var, else use ./.codecollab/
    /// 2. Auto-create config directory if it doesn't exist
    /// 3. Load config.toml if it exists, else use defaults
    /// 4. Apply CC_* environment variable overrides
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        let config_dir = Self::config_dir()?;

        if !config_dir.exists() {
            std::fs::create_dir_all(&config_dir).map_err(|e| ConfigError::Io {
                path: config_dir.clone(),
                source: e,
            })?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides();

        Ok(config)
    }

    /// Load and parse TOML file with detailed error context.
    fn load_toml(path: &Path) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Get the config directory.
    /// Priority: CC_CONFIG_DIR env var > ./.codecollab/ (relative to cwd)
    pub fn config_dir() -> ConfigErrorResult<PathBuf> {
        if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir()
            .map_err(|_| ConfigError::config("Cannot determine current working directory"))?;
        Ok(cwd.join(DEFAULT_CONFIG_DIR))
    }

    /// Validate all configuration.
    /// Call after load() to catch all errors at startup.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.server.validate()?;
        self.database.validate()?;
        self.auth.validate()?;
        self.rewards.validate()?;

        Ok(())
    }

    /// Get absolute path to database file.
    pub fn database_path(&self) -> ConfigErrorResult<PathBuf> {
        let config_dir = Self::config_dir()?;
        Ok(config_dir.join(&self.database.path))
    }

    /// Get absolute path to the log directory.
    pub fn log_dir(&self) -> ConfigErrorResult<PathBuf> {
        let config_dir = Self::config_dir()?;
        Ok(config_dir.join(&self.logging.dir))
    }

    /// Get bind address as string.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Log configuration summary (NEVER logs secrets).
    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!("  server: {}:{}", self.server.host, self.server.port);
        info!(
            "  database: {} (max {} connections)",
            self.database.path, self.database.max_connections
        );
        info!(
            "  auth: HS256 ({}), issuer={}, login_ttl={}s, refresh_ttl={}s, leeway={}s",
            if self.auth.jwt_secret.is_some() {
                "secret set"
            } else {
                "secret missing"
            },
            self.auth.issuer,
            self.auth.login_token_ttl_secs,
            self.auth.refresh_token_ttl_secs,
            self.auth.leeway_secs
        );
        info!(
            "  password hashing: argon2id m={}KiB t={} p={}",
            self.auth.hash_memory_kib, self.auth.hash_iterations, self.auth.hash_parallelism
        );
        info!(
            "  logging: {} (colored: {})",
            *self.logging.level, self.logging.colored
        );
        info!(
            "  rewards: welcome_bonus={}, community_badge={}",
            self.rewards.welcome_bonus_points, self.rewards.community_badge
        );
    }

    fn apply_env_overrides(&mut self) {
        // Server
        Self::apply_env_string("CC_SERVER_HOST", &mut self.server.host);
        Self::apply_env_parse("CC_SERVER_PORT", &mut self.server.port);

        // Database
        Self::apply_env_string("CC_DATABASE_PATH", &mut self.database.path);
        Self::apply_env_parse(
            "CC_DATABASE_MAX_CONNECTIONS",
            &mut self.database.max_connections,
        );

        // Auth
        Self::apply_env_option_string("CC_AUTH_JWT_SECRET", &mut self.auth.jwt_secret);
        Self::apply_env_string("CC_AUTH_ISSUER", &mut self.auth.issuer);
        Self::apply_env_parse(
            "CC_AUTH_LOGIN_TOKEN_TTL_SECS",
            &mut self.auth.login_token_ttl_secs,
        );
        Self::apply_env_parse(
            "CC_AUTH_REFRESH_TOKEN_TTL_SECS",
            &mut self.auth.refresh_token_ttl_secs,
        );
        Self::apply_env_parse("CC_AUTH_LEEWAY_SECS", &mut self.auth.leeway_secs);
        Self::apply_env_parse("CC_AUTH_HASH_MEMORY_KIB", &mut self.auth.hash_memory_kib);
        Self::apply_env_parse("CC_AUTH_HASH_ITERATIONS", &mut self.auth.hash_iterations);
        Self::apply_env_parse(
            "CC_AUTH_HASH_PARALLELISM",
            &mut self.auth.hash_parallelism,
        );

        // Logging
        Self::apply_env_parse("CC_LOG_LEVEL", &mut self.logging.level);
        Self::apply_env_bool("CC_LOG_COLORED", &mut self.logging.colored);
        Self::apply_env_option_string("CC_LOG_FILE", &mut self.logging.file);

        // Rewards
        Self::apply_env_parse(
            "CC_REWARDS_WELCOME_BONUS_POINTS",
            &mut self.rewards.welcome_bonus_points,
        );
        Self::apply_env_bool(
            "CC_REWARDS_COMMUNITY_BADGE",
            &mut self.rewards.community_badge,
        );
    }

    /// Helper: Apply environment variable override for String values
    fn apply_env_string(var_name: &str, target: &mut String) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val;
        }
    }

    /// Helper: Apply environment variable override for bool values (accepts "true"/"1")
    fn apply_env_bool(var_name: &str, target: &mut bool) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val == "true" || val == "1";
        }
    }

    /// Helper: Apply environment variable override for parseable values
    fn apply_env_parse<T: std::str::FromStr>(var_name: &str, target: &mut T) {
        if let Ok(val) = std::env::var(var_name)
            && let Ok(parsed) = val.parse()
        {
            *target = parsed;
        }
    }

    /// Helper: Apply environment variable override for Option<String> values
    fn apply_env_option_string(var_name: &str, target: &mut Option<String>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = Some(val);
        }
    }
}
