pub mod badge;
pub mod comment;
pub mod point_reason;
pub mod point_transaction;
pub mod snippet;
pub mod user;
