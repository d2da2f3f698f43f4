pub mod connection;
pub mod error;
pub mod repositories;

pub use connection::pool::{open_in_memory_pool, open_pool, run_migrations};
pub use error::{DbError, Result};
pub use repositories::badge_repository::BadgeRepository;
pub use repositories::comment_repository::CommentRepository;
pub use repositories::point_transaction_repository::PointTransactionRepository;
pub use repositories::snippet_repository::{SnippetQuery, SnippetRepository};
pub use repositories::user_repository::UserRepository;
