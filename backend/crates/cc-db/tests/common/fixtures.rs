use cc_core::{Comment, NewSnippet, Snippet, User};

use uuid::Uuid;

/// Creates a User; the hash is opaque to the store so any string will do
pub fn test_user(username: &str) -> User {
    User::new(
        format!("{}@example.com", username),
        username.to_string(),
        "$argon2id$v=19$m=1024,t=1,p=1$c2FsdA$aGFzaA".to_string(),
        None,
        None,
    )
}

/// Creates a Snippet with sensible defaults
pub fn test_snippet(author_id: Uuid, title: &str, is_public: bool) -> Snippet {
    Snippet::new(
        author_id,
        NewSnippet {
            title: title.to_string(),
            description: Some(format!("{} description", title)),
            code: "fn main() {}".to_string(),
            language: "rust".to_string(),
            tags: vec!["cli".to_string()],
            is_public,
        },
    )
}

pub fn test_comment(snippet_id: Uuid, author_id: Uuid, content: &str) -> Comment {
    Comment::new(snippet_id, author_id, content.to_string())
}
