pub mod badge_repository;
pub mod comment_repository;
pub mod point_transaction_repository;
pub mod row;
pub mod snippet_repository;
pub mod user_repository;
