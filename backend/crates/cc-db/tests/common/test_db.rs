use cc_core::User;
use cc_db::{UserRepository, open_in_memory_pool};

use sqlx::SqlitePool;

/// Creates an in-memory SQLite pool with migrations run
pub async fn create_test_pool() -> SqlitePool {
    open_in_memory_pool()
        .await
        .expect("Failed to create test pool")
}

/// Inserts a user so snippets and comments satisfy their foreign keys
pub async fn create_test_user(pool: &SqlitePool, username: &str) -> User {
    let user = super::fixtures::test_user(username);
    UserRepository::new(pool.clone())
        .create(&user)
        .await
        .expect("Failed to create test user");
    user
}
