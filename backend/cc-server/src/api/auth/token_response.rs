use crate::UserDto;

use cc_core::User;

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct TokenResponse {
    pub success: bool,
    pub token: String,
    pub user: UserDto,
}

impl TokenResponse {
    pub fn new(token: String, user: User) -> Self {
        Self {
            success: true,
            token,
            user: user.into(),
        }
    }
}
