use crate::Result as DbErrorResult;
use crate::repositories::row::{encode_tags, parse_tags, parse_timestamp, parse_uuid};

use cc_core::Snippet;

use sqlx::sqlite::SqliteRow;
use sqlx::{QueryBuilder, Row, Sqlite, SqlitePool};
use uuid::Uuid;

const SNIPPET_COLUMNS: &str = r#"
    s.id, s.author_id, s.title, s.description, s.code, s.language, s.tags,
    s.is_public, s.view_count, s.created_at, s.updated_at
"#;

/// Feed filter. Private snippets are only visible to their author.
#[derive(Debug, Clone, Default)]
pub struct SnippetQuery {
    pub viewer: Option<Uuid>,
    /// Exact match against the lowercased language
    pub language: Option<String>,
    /// Exact match against one of the lowercased tags
    pub tag: Option<String>,
    /// Substring match on title or description
    pub search: Option<String>,
    pub limit: i64,
    pub offset: i64,
}

pub struct SnippetRepository {
    pool: SqlitePool,
}

impl SnippetRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, snippet: &Snippet) -> DbErrorResult<()> {
        sqlx::query(
            r#"
              INSERT INTO snippets (
                  id, author_id, title, description, code, language, tags,
                  is_public, view_count, created_at, updated_at
              ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
              "#,
        )
        .bind(snippet.id.to_string())
        .bind(snippet.author_id.to_string())
        .bind(&snippet.title)
        .bind(&snippet.description)
        .bind(&snippet.code)
        .bind(&snippet.language)
        .bind(encode_tags(&snippet.tags)?)
        .bind(snippet.is_public)
        .bind(snippet.view_count)
        .bind(snippet.created_at.timestamp())
        .bind(snippet.updated_at.timestamp())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    pub async fn find_by_id(&self, id: Uuid) -> DbErrorResult<Option<Snippet>> {
        let sql = format!("SELECT {SNIPPET_COLUMNS} FROM snippets s WHERE s.id = ?");
        let row = sqlx::query(&sql)
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await?;

        row.as_ref().map(snippet_from_row).transpose()
    }

    /// Persist every mutable column; `view_count` is owned by `increment_view_count`
    pub async fn update(&self, snippet: &Snippet) -> DbErrorResult<()> {
        sqlx::query(
            r#"
              UPDATE snippets
              SET title = ?, description = ?, code = ?, language = ?, tags = ?,
                  is_public = ?, updated_at = ?
              WHERE id = ?
              "#,
        )
        .bind(&snippet.title)
        .bind(&snippet.description)
        .bind(&snippet.code)
        .bind(&snippet.language)
        .bind(encode_tags(&snippet.tags)?)
        .bind(snippet.is_public)
        .bind(snippet.updated_at.timestamp())
        .bind(snippet.id.to_string())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Returns false if no row matched. Comments go with it (ON DELETE CASCADE).
    pub async fn delete(&self, id: Uuid) -> DbErrorResult<bool> {
        let result = sqlx::query("DELETE FROM snippets WHERE id = ?")
            .bind(id.to_string())
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Single-statement increment so concurrent readers never lose a view
    pub async fn increment_view_count(&self, id: Uuid) -> DbErrorResult<()> {
        sqlx::query("UPDATE snippets SET view_count = view_count + 1 WHERE id = ?")
            .bind(id.to_string())
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    /// Newest first
    pub async fn list_visible(&self, query: &SnippetQuery) -> DbErrorResult<Vec<Snippet>> {
        let mut builder =
            QueryBuilder::<Sqlite>::new(format!("SELECT {SNIPPET_COLUMNS} FROM snippets s"));
        push_filters(&mut builder, query);
        builder
            .push(" ORDER BY s.created_at DESC, s.id DESC LIMIT ")
            .push_bind(query.limit)
            .push(" OFFSET ")
            .push_bind(query.offset);

        let rows = builder.build().fetch_all(&self.pool).await?;

        rows.iter().map(snippet_from_row).collect()
    }

    /// Total matching `list_visible` ignoring limit/offset
    pub async fn count_visible(&self, query: &SnippetQuery) -> DbErrorResult<i64> {
        let mut builder = QueryBuilder::<Sqlite>::new("SELECT COUNT(*) FROM snippets s");
        push_filters(&mut builder, query);

        let total = builder
            .build_query_scalar::<i64>()
            .fetch_one(&self.pool)
            .await?;

        Ok(total)
    }
}

fn push_filters(builder: &mut QueryBuilder<'_, Sqlite>, query: &SnippetQuery) {
    builder.push(" WHERE (s.is_public = 1");
    if let Some(viewer) = query.viewer {
        builder
            .push(" OR s.author_id = ")
            .push_bind(viewer.to_string());
    }
    builder.push(")");

    if let Some(language) = &query.language {
        builder
            .push(" AND s.language = ")
            .push_bind(language.to_lowercase());
    }

    if let Some(tag) = &query.tag {
        builder
            .push(" AND EXISTS (SELECT 1 FROM json_each(s.tags) t WHERE t.value = ")
            .push_bind(tag.to_lowercase())
            .push(")");
    }

    if let Some(search) = &query.search {
        let pattern = format!("%{}%", escape_like(search));
        builder
            .push(" AND (s.title LIKE ")
            .push_bind(pattern.clone())
            .push(r" ESCAPE '\' OR s.description LIKE ")
            .push_bind(pattern)
            .push(r" ESCAPE '\')");
    }
}

/// Search text is literal; `%` and `_` must not act as wildcards
fn escape_like(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

fn snippet_from_row(row: &SqliteRow) -> DbErrorResult<Snippet> {
    let id: String = row.try_get("id")?;
    let author_id: String = row.try_get("author_id")?;
    let tags: String = row.try_get("tags")?;

    Ok(Snippet {
        id: parse_uuid(&id)?,
        author_id: parse_uuid(&author_id)?,
        title: row.try_get("title")?,
        description: row.try_get("description")?,
        code: row.try_get("code")?,
        language: row.try_get("language")?,
        tags: parse_tags(&tags)?,
        is_public: row.try_get("is_public")?,
        view_count: row.try_get("view_count")?,
        created_at: parse_timestamp(row.try_get("created_at")?)?,
        updated_at: parse_timestamp(row.try_get("updated_at")?)?,
    })
}
