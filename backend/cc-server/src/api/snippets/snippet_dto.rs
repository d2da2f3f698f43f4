use cc_core::Snippet;

use serde::Serialize;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SnippetDto {
    pub id: String,
    pub author_id: String,
    pub title: String,
    pub description: Option<String>,
    pub code: String,
    pub language: String,
    pub tags: Vec<String>,
    pub is_public: bool,
    pub view_count: i64,
    pub created_at: String,
    pub updated_at: String,
}

impl From<Snippet> for SnippetDto {
    fn from(s: Snippet) -> Self {
        Self {
            id: s.id.to_string(),
            author_id: s.author_id.to_string(),
            title: s.title,
            description: s.description,
            code: s.code,
            language: s.language,
            tags: s.tags,
            is_public: s.is_public,
            view_count: s.view_count,
            created_at: s.created_at.to_rfc3339(),
            updated_at: s.updated_at.to_rfc3339(),
        }
    }
}
