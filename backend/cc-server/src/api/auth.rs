#[allow(clippy::module_inception)]
pub mod auth;
pub mod token_response;
pub mod user_dto;
pub mod user_response;
