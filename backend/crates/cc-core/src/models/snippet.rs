//! Snippet entity - a piece of shared code with visibility and ownership.

use crate::{NewSnippet, OwnedResource, SnippetChanges};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snippet {
    pub id: Uuid,
    pub author_id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub code: String,
    pub language: String,
    pub tags: Vec<String>,
    pub is_public: bool,
    pub view_count: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Snippet {
    pub fn new(author_id: Uuid, input: NewSnippet) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            author_id,
            title: input.title,
            description: input.description,
            code: input.code,
            language: input.language,
            tags: input.tags,
            is_public: input.is_public,
            view_count: 0,
            created_at: now,
            updated_at: now,
        }
    }

    /// Apply a validated partial update and bump `updated_at`
    pub fn apply(&mut self, changes: SnippetChanges) {
        if let Some(title) = changes.title {
            self.title = title;
        }
        if let Some(description) = changes.description {
            self.description = description;
        }
        if let Some(code) = changes.code {
            self.code = code;
        }
        if let Some(language) = changes.language {
            self.language = language;
        }
        if let Some(tags) = changes.tags {
            self.tags = tags;
        }
        if let Some(is_public) = changes.is_public {
            self.is_public = is_public;
        }
        self.updated_at = Utc::now();
    }
}

impl OwnedResource for Snippet {
    fn author_id(&self) -> Uuid {
        self.author_id
    }

    fn is_public(&self) -> bool {
        self.is_public
    }
}
