pub mod auth_user;
pub mod json_body;
