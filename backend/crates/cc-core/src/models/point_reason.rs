use crate::{CoreError, Result as CoreErrorResult};

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// Why a point transaction was recorded
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PointReason {
    /// One-time grant on registration
    WelcomeBonus,
}

impl PointReason {
    /// Convert to database string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::WelcomeBonus => "welcome_bonus",
        }
    }
}

impl FromStr for PointReason {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreErrorResult<Self> {
        match s {
            "welcome_bonus" => Ok(Self::WelcomeBonus),
            _ => Err(CoreError::InvalidPointReason {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}

impl std::fmt::Display for PointReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
