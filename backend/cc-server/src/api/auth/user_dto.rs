use cc_core::User;

use serde::Serialize;

/// Public projection of a user; the password hash has no field here
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDto {
    pub id: String,
    pub email: String,
    pub username: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub bio: Option<String>,
    pub avatar_url: Option<String>,
    pub points: i64,
    pub level: i32,
    pub created_at: String,
    pub updated_at: String,
}

impl From<User> for UserDto {
    fn from(u: User) -> Self {
        Self {
            id: u.id.to_string(),
            email: u.email,
            username: u.username,
            first_name: u.first_name,
            last_name: u.last_name,
            bio: u.bio,
            avatar_url: u.avatar_url,
            points: u.points,
            level: u.level,
            created_at: u.created_at.to_rfc3339(),
            updated_at: u.updated_at.to_rfc3339(),
        }
    }
}
