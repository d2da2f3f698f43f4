pub mod auth_service;
pub mod registration_listener;
pub mod rewards;
