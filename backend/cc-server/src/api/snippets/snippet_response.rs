use crate::SnippetDto;

use cc_core::Snippet;

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct SnippetResponse {
    pub success: bool,
    pub snippet: SnippetDto,
}

impl From<Snippet> for SnippetResponse {
    fn from(snippet: Snippet) -> Self {
        Self {
            success: true,
            snippet: snippet.into(),
        }
    }
}
