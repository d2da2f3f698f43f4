use crate::CommentDto;

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct CommentListResponse {
    pub success: bool,
    pub comments: Vec<CommentDto>,
}
