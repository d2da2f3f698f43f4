//! Registered user identity.

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Starting level for every new account
pub const INITIAL_LEVEL: i32 = 1;

/// A registered user as held by the credential store.
///
/// Not `Serialize`; HTTP handlers project this into a DTO without the hash.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: Uuid,
    /// Lowercased, unique
    pub email: String,
    /// Lowercased, unique
    pub username: String,
    /// PHC-format digest
    pub password_hash: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub bio: Option<String>,
    pub avatar_url: Option<String>,
    /// Only ever adjusted through point transactions
    pub points: i64,
    pub level: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    pub fn new(
        email: String,
        username: String,
        password_hash: String,
        first_name: Option<String>,
        last_name: Option<String>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            email,
            username,
            password_hash,
            first_name,
            last_name,
            bio: None,
            avatar_url: None,
            points: 0,
            level: INITIAL_LEVEL,
            created_at: now,
            updated_at: now,
        }
    }
}
