//! REST API error types
//!
//! Every failure leaves the server as
//! `{ "success": false, "code": ..., "error": ..., "details"?: [...] }`
//! with the matching HTTP status.

use cc_auth::AuthError;
use cc_core::{CoreError, FieldError};
use cc_db::DbError;

use std::panic::Location;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use error_location::ErrorLocation;
use serde::Serialize;
use thiserror::Error;

const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";
const VALIDATION_ERROR_MESSAGE: &str = "Validation failed";

/// JSON error response body
#[derive(Debug, Serialize)]
pub struct ApiErrorResponse {
    pub success: bool,
    /// Machine-readable error code (e.g., "NOT_FOUND", "VALIDATION_ERROR")
    pub code: &'static str,
    /// Human-readable error message
    pub error: String,
    /// Per-field violations, validation errors only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Vec<FieldError>>,
}

/// API errors with associated HTTP status codes
#[derive(Debug, Error)]
pub enum ApiError {
    /// Input failed schema validation (400)
    #[error("Validation failed: {details:?} {location}")]
    Validation {
        details: Vec<FieldError>,
        location: ErrorLocation,
    },

    /// Malformed request outside field validation (400)
    #[error("Bad request: {message} {location}")]
    BadRequest {
        message: String,
        location: ErrorLocation,
    },

    /// Missing, invalid or expired credentials (401)
    #[error("Unauthorized: {message} {location}")]
    Unauthorized {
        message: String,
        location: ErrorLocation,
    },

    /// Authenticated but not allowed (403)
    #[error("Forbidden: {message} {location}")]
    Forbidden {
        message: String,
        location: ErrorLocation,
    },

    /// Resource not found (404)
    #[error("Resource not found: {message} {location}")]
    NotFound {
        message: String,
        location: ErrorLocation,
    },

    /// Uniqueness conflict (409)
    #[error("Conflict: {message} {location}")]
    Conflict {
        message: String,
        location: ErrorLocation,
    },

    /// Internal server error (500); `message` is logged, never returned
    #[error("Internal error: {message} {location}")]
    Internal {
        message: String,
        location: ErrorLocation,
    },
}

impl ApiError {
    #[track_caller]
    pub fn bad_request<S: Into<String>>(message: S) -> Self {
        Self::BadRequest {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn unauthorized<S: Into<String>>(message: S) -> Self {
        Self::Unauthorized {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn forbidden<S: Into<String>>(message: S) -> Self {
        Self::Forbidden {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn not_found<S: Into<String>>(message: S) -> Self {
        Self::NotFound {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn conflict<S: Into<String>>(message: S) -> Self {
        Self::Conflict {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn internal<S: Into<String>>(message: S) -> Self {
        Self::Internal {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::Validation { .. } | Self::BadRequest { .. } => StatusCode::BAD_REQUEST,
            Self::Unauthorized { .. } => StatusCode::UNAUTHORIZED,
            Self::Forbidden { .. } => StatusCode::FORBIDDEN,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::Conflict { .. } => StatusCode::CONFLICT,
            Self::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();

        if status.is_server_error() {
            log::error!("{}", self);
        } else {
            log::debug!("{}", self);
        }

        let body = match self {
            ApiError::Validation { details, .. } => ApiErrorResponse {
                success: false,
                code: "VALIDATION_ERROR",
                error: VALIDATION_ERROR_MESSAGE.to_string(),
                details: Some(details),
            },
            ApiError::BadRequest { message, .. } => Self::body("BAD_REQUEST", message),
            ApiError::Unauthorized { message, .. } => Self::body("UNAUTHORIZED", message),
            ApiError::Forbidden { message, .. } => Self::body("FORBIDDEN", message),
            ApiError::NotFound { message, .. } => Self::body("NOT_FOUND", message),
            ApiError::Conflict { message, .. } => Self::body("CONFLICT", message),
            ApiError::Internal { .. } => {
                Self::body("INTERNAL_ERROR", INTERNAL_ERROR_MESSAGE.to_string())
            }
        };

        (status, Json(body)).into_response()
    }
}

impl ApiError {
    fn body(code: &'static str, error: String) -> ApiErrorResponse {
        ApiErrorResponse {
            success: false,
            code,
            error,
            details: None,
        }
    }
}

/// Convert domain validation errors to API errors
impl From<CoreError> for ApiError {
    #[track_caller]
    fn from(e: CoreError) -> Self {
        match e {
            CoreError::Validation { errors, .. } => ApiError::Validation {
                details: errors.into_inner(),
                location: ErrorLocation::from(Location::caller()),
            },
            other => ApiError::internal(other.to_string()),
        }
    }
}

/// Token failures become 401 with a client-safe message; signing and
/// hashing failures are ours
impl From<AuthError> for ApiError {
    #[track_caller]
    fn from(e: AuthError) -> Self {
        if e.is_client_error() {
            log::debug!("Rejected credentials: {}", e);
            ApiError::unauthorized(e.client_message())
        } else {
            ApiError::internal(e.to_string())
        }
    }
}

/// Convert database errors to API errors
impl From<DbError> for ApiError {
    #[track_caller]
    fn from(e: DbError) -> Self {
        match e {
            DbError::UniqueViolation { constraint, .. } => {
                ApiError::conflict(format!("Duplicate value for {}", constraint))
            }
            other => ApiError::internal(other.to_string()),
        }
    }
}

/// Convert sqlx errors to API errors
impl From<sqlx::Error> for ApiError {
    #[track_caller]
    fn from(e: sqlx::Error) -> Self {
        ApiError::internal(format!("Database error: {}", e))
    }
}

/// Convert UUID parse errors to API errors
impl From<uuid::Error> for ApiError {
    #[track_caller]
    fn from(e: uuid::Error) -> Self {
        ApiError::bad_request(format!("Invalid id format: {}", e))
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;
