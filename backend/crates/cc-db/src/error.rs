use cc_core::ErrorLocation;

use std::panic::Location;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DbError {
    #[error("SQLx error: {source} {location}")]
    Sqlx {
        source: sqlx::Error,
        location: ErrorLocation,
    },

    #[error("Unique constraint violated on {constraint} {location}")]
    UniqueViolation {
        /// `table.column` as reported by SQLite
        constraint: String,
        location: ErrorLocation,
    },

    #[error("Row decode failed: {message} {location}")]
    Decode {
        message: String,
        location: ErrorLocation,
    },

    #[error("Migration error: {message} {location}")]
    Migration {
        message: String,
        location: ErrorLocation,
    },

    #[error("Database initialization failed: {message} {location}")]
    Initialization {
        message: String,
        location: ErrorLocation,
    },
}

impl DbError {
    /// True when a unique index on `table.column` rejected the write
    pub fn is_unique_violation_on(&self, constraint: &str) -> bool {
        matches!(self, Self::UniqueViolation { constraint: c, .. } if c == constraint)
    }
}

impl From<sqlx::Error> for DbError {
    #[track_caller]
    fn from(source: sqlx::Error) -> Self {
        let location = ErrorLocation::from(Location::caller());

        if let sqlx::Error::Database(ref db_err) = source
            && db_err.is_unique_violation()
        {
            // SQLite: "UNIQUE constraint failed: users.email"
            let constraint = db_err
                .message()
                .rsplit(": ")
                .next()
                .unwrap_or_default()
                .to_string();
            return Self::UniqueViolation {
                constraint,
                location,
            };
        }

        Self::Sqlx { source, location }
    }
}

pub type Result<T> = std::result::Result<T, DbError>;
