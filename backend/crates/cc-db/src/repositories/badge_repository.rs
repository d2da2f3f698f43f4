use crate::Result as DbErrorResult;
use crate::repositories::row::parse_uuid;

use cc_core::Badge;

use chrono::Utc;
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};
use uuid::Uuid;

pub struct BadgeRepository {
    pool: SqlitePool,
}

impl BadgeRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn find_by_name(&self, name: &str) -> DbErrorResult<Option<Badge>> {
        let row = sqlx::query("SELECT id, name, description, icon FROM badges WHERE name = ?")
            .bind(name)
            .fetch_optional(&self.pool)
            .await?;

        row.as_ref().map(badge_from_row).transpose()
    }

    /// Award a badge once; returns false if the user already held it
    pub async fn award(&self, user_id: Uuid, badge_id: Uuid) -> DbErrorResult<bool> {
        let result = sqlx::query(
            r#"
              INSERT OR IGNORE INTO user_badges (user_id, badge_id, awarded_at)
              VALUES (?, ?, ?)
              "#,
        )
        .bind(user_id.to_string())
        .bind(badge_id.to_string())
        .bind(Utc::now().timestamp())
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    pub async fn find_by_user(&self, user_id: Uuid) -> DbErrorResult<Vec<Badge>> {
        let rows = sqlx::query(
            r#"
              SELECT b.id, b.name, b.description, b.icon
              FROM badges b
              JOIN user_badges ub ON ub.badge_id = b.id
              WHERE ub.user_id = ?
              ORDER BY ub.awarded_at ASC, b.name ASC
              "#,
        )
        .bind(user_id.to_string())
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(badge_from_row).collect()
    }
}

fn badge_from_row(row: &SqliteRow) -> DbErrorResult<Badge> {
    let id: String = row.try_get("id")?;

    Ok(Badge {
        id: parse_uuid(&id)?,
        name: row.try_get("name")?,
        description: row.try_get("description")?,
        icon: row.try_get("icon")?,
    })
}
