use crate::{ConfigError, ConfigErrorResult};

use serde::Deserialize;

pub const DEFAULT_WELCOME_BONUS_POINTS: i64 = 10;
pub const MAX_WELCOME_BONUS_POINTS: i64 = 10_000;

/// Side effects granted on registration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RewardsConfig {
    pub welcome_bonus_points: i64,
    pub community_badge: bool,
}

impl Default for RewardsConfig {
    fn default() -> Self {
        Self {
            welcome_bonus_points: DEFAULT_WELCOME_BONUS_POINTS,
            community_badge: true,
        }
    }
}

impl RewardsConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if !(0..=MAX_WELCOME_BONUS_POINTS).contains(&self.welcome_bonus_points) {
            return Err(ConfigError::config(format!(
                "rewards.welcome_bonus_points must be 0-{}, got {}",
                MAX_WELCOME_BONUS_POINTS, self.welcome_bonus_points
            )));
        }

        Ok(())
    }
}
