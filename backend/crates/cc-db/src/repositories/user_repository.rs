use crate::Result as DbErrorResult;
use crate::repositories::row::{parse_timestamp, parse_uuid};

use cc_core::User;

use chrono::Utc;
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};
use uuid::Uuid;

const USER_COLUMNS: &str = r#"
    id, email, username, password_hash, first_name, last_name, bio, avatar_url,
    points, level, created_at, updated_at
"#;

/// Credential store for user accounts
pub struct UserRepository {
    pool: SqlitePool,
}

impl UserRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert a new account; duplicate email/username surface as
    /// `DbError::UniqueViolation` from the unique indexes
    pub async fn create(&self, user: &User) -> DbErrorResult<()> {
        sqlx::query(
            r#"
              INSERT INTO users (
                  id, email, username, password_hash, first_name, last_name, bio, avatar_url,
                  points, level, created_at, updated_at
              ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
              "#,
        )
        .bind(user.id.to_string())
        .bind(&user.email)
        .bind(&user.username)
        .bind(&user.password_hash)
        .bind(&user.first_name)
        .bind(&user.last_name)
        .bind(&user.bio)
        .bind(&user.avatar_url)
        .bind(user.points)
        .bind(user.level)
        .bind(user.created_at.timestamp())
        .bind(user.updated_at.timestamp())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    pub async fn find_by_id(&self, id: Uuid) -> DbErrorResult<Option<User>> {
        let sql = format!("SELECT {USER_COLUMNS} FROM users WHERE id = ?");
        let row = sqlx::query(&sql)
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await?;

        row.as_ref().map(user_from_row).transpose()
    }

    /// Expects an already-normalized (lowercased) email
    pub async fn find_by_email(&self, email: &str) -> DbErrorResult<Option<User>> {
        let sql = format!("SELECT {USER_COLUMNS} FROM users WHERE email = ?");
        let row = sqlx::query(&sql)
            .bind(email)
            .fetch_optional(&self.pool)
            .await?;

        row.as_ref().map(user_from_row).transpose()
    }

    /// Expects an already-normalized (lowercased) username
    pub async fn find_by_username(&self, username: &str) -> DbErrorResult<Option<User>> {
        let sql = format!("SELECT {USER_COLUMNS} FROM users WHERE username = ?");
        let row = sqlx::query(&sql)
            .bind(username)
            .fetch_optional(&self.pool)
            .await?;

        row.as_ref().map(user_from_row).transpose()
    }

    /// Atomic relative adjustment; callers record the matching transaction
    pub async fn add_points(&self, id: Uuid, delta: i64) -> DbErrorResult<bool> {
        let result = sqlx::query(
            r#"
              UPDATE users
              SET points = points + ?, updated_at = ?
              WHERE id = ?
              "#,
        )
        .bind(delta)
        .bind(Utc::now().timestamp())
        .bind(id.to_string())
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }
}

fn user_from_row(row: &SqliteRow) -> DbErrorResult<User> {
    let id: String = row.try_get("id")?;

    Ok(User {
        id: parse_uuid(&id)?,
        email: row.try_get("email")?,
        username: row.try_get("username")?,
        password_hash: row.try_get("password_hash")?,
        first_name: row.try_get("first_name")?,
        last_name: row.try_get("last_name")?,
        bio: row.try_get("bio")?,
        avatar_url: row.try_get("avatar_url")?,
        points: row.try_get("points")?,
        level: row.try_get("level")?,
        created_at: parse_timestamp(row.try_get("created_at")?)?,
        updated_at: parse_timestamp(row.try_get("updated_at")?)?,
    })
}
