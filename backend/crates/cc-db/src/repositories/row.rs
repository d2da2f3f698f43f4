//! Column decoding shared by the repositories.
//!
//! Ids are stored as hyphenated TEXT and timestamps as unix seconds.

use crate::{DbError, Result as DbErrorResult};

use cc_core::ErrorLocation;

use std::panic::Location;

use chrono::{DateTime, Utc};
use uuid::Uuid;

#[track_caller]
pub fn parse_uuid(value: &str) -> DbErrorResult<Uuid> {
    Uuid::parse_str(value).map_err(|e| DbError::Decode {
        message: format!("invalid uuid '{}': {}", value, e),
        location: ErrorLocation::from(Location::caller()),
    })
}

#[track_caller]
pub fn parse_timestamp(secs: i64) -> DbErrorResult<DateTime<Utc>> {
    DateTime::from_timestamp(secs, 0).ok_or_else(|| DbError::Decode {
        message: format!("timestamp out of range: {}", secs),
        location: ErrorLocation::from(Location::caller()),
    })
}

#[track_caller]
pub fn parse_tags(json: &str) -> DbErrorResult<Vec<String>> {
    serde_json::from_str(json).map_err(|e| DbError::Decode {
        message: format!("invalid tags json: {}", e),
        location: ErrorLocation::from(Location::caller()),
    })
}

#[track_caller]
pub fn encode_tags(tags: &[String]) -> DbErrorResult<String> {
    serde_json::to_string(tags).map_err(|e| DbError::Decode {
        message: format!("tags not serializable: {}", e),
        location: ErrorLocation::from(Location::caller()),
    })
}
