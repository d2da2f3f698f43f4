use crate::Claims;

use uuid::Uuid;

/// Identity resolved from a verified token, handed to request handlers
///
/// Built from the token alone; profile fields may lag the database until
/// the next profile fetch or token refresh.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthContext {
    pub user_id: Uuid,
    pub email: String,
    pub username: String,
}

impl AuthContext {
    pub fn from_claims(claims: Claims) -> Self {
        Self {
            user_id: claims.id,
            email: claims.email,
            username: claims.username,
        }
    }
}
