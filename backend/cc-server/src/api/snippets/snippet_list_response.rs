use crate::{Pagination, SnippetDto};

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct SnippetListResponse {
    pub success: bool,
    pub snippets: Vec<SnippetDto>,
    pub pagination: Pagination,
}
