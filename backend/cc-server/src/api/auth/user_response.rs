use crate::UserDto;

use cc_core::User;

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub success: bool,
    pub user: UserDto,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            success: true,
            user: user.into(),
        }
    }
}
