use cc_core::Comment;

use serde::Serialize;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentDto {
    pub id: String,
    pub snippet_id: String,
    pub author_id: String,
    pub content: String,
    pub created_at: String,
    pub updated_at: String,
}

impl From<Comment> for CommentDto {
    fn from(c: Comment) -> Self {
        Self {
            id: c.id.to_string(),
            snippet_id: c.snippet_id.to_string(),
            author_id: c.author_id.to_string(),
            content: c.content,
            created_at: c.created_at.to_rfc3339(),
            updated_at: c.updated_at.to_rfc3339(),
        }
    }
}
