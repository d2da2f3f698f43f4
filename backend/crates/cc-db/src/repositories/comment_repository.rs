use crate::Result as DbErrorResult;
use crate::repositories::row::{parse_timestamp, parse_uuid};

use cc_core::Comment;

use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};
use uuid::Uuid;

pub struct CommentRepository {
    pool: SqlitePool,
}

impl CommentRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, comment: &Comment) -> DbErrorResult<()> {
        sqlx::query(
            r#"
              INSERT INTO comments (id, snippet_id, author_id, content, created_at, updated_at)
              VALUES (?, ?, ?, ?, ?, ?)
              "#,
        )
        .bind(comment.id.to_string())
        .bind(comment.snippet_id.to_string())
        .bind(comment.author_id.to_string())
        .bind(&comment.content)
        .bind(comment.created_at.timestamp())
        .bind(comment.updated_at.timestamp())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Oldest first
    pub async fn find_by_snippet(&self, snippet_id: Uuid) -> DbErrorResult<Vec<Comment>> {
        let rows = sqlx::query(
            r#"
              SELECT id, snippet_id, author_id, content, created_at, updated_at
              FROM comments
              WHERE snippet_id = ?
              ORDER BY created_at ASC, rowid ASC
              "#,
        )
        .bind(snippet_id.to_string())
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(comment_from_row).collect()
    }
}

fn comment_from_row(row: &SqliteRow) -> DbErrorResult<Comment> {
    let id: String = row.try_get("id")?;
    let snippet_id: String = row.try_get("snippet_id")?;
    let author_id: String = row.try_get("author_id")?;

    Ok(Comment {
        id: parse_uuid(&id)?,
        snippet_id: parse_uuid(&snippet_id)?,
        author_id: parse_uuid(&author_id)?,
        content: row.try_get("content")?,
        created_at: parse_timestamp(row.try_get("created_at")?)?,
        updated_at: parse_timestamp(row.try_get("updated_at")?)?,
    })
}
