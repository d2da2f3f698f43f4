use serde::Deserialize;

/// Snippet creation payload as received
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SnippetForm {
    pub title: Option<String>,
    pub description: Option<String>,
    pub code: Option<String>,
    pub language: Option<String>,
    pub tags: Option<Vec<String>>,
    pub is_public: Option<bool>,
}

/// Partial snippet update as received; absent fields are left untouched
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SnippetPatch {
    pub title: Option<String>,
    /// An empty string clears the description
    pub description: Option<String>,
    pub code: Option<String>,
    pub language: Option<String>,
    pub tags: Option<Vec<String>>,
    pub is_public: Option<bool>,
}

/// Validated snippet creation input
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewSnippet {
    pub title: String,
    pub description: Option<String>,
    pub code: String,
    /// Lowercased
    pub language: String,
    /// Lowercased, deduplicated, in first-seen order
    pub tags: Vec<String>,
    pub is_public: bool,
}

/// Validated partial update
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SnippetChanges {
    pub title: Option<String>,
    pub description: Option<Option<String>>,
    pub code: Option<String>,
    pub language: Option<String>,
    pub tags: Option<Vec<String>>,
    pub is_public: Option<bool>,
}

impl SnippetChanges {
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}
