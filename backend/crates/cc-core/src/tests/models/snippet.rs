use crate::{NewSnippet, Snippet, SnippetChanges};

use uuid::Uuid;

fn new_snippet() -> NewSnippet {
    NewSnippet {
        title: "Binary search".to_string(),
        description: Some("Classic".to_string()),
        code: "fn search() {}".to_string(),
        language: "rust".to_string(),
        tags: vec!["algorithms".to_string()],
        is_public: true,
    }
}

#[test]
fn test_snippet_new() {
    let author = Uuid::new_v4();
    let snippet = Snippet::new(author, new_snippet());

    assert_eq!(snippet.author_id, author);
    assert_eq!(snippet.title, "Binary search");
    assert_eq!(snippet.view_count, 0);
    assert!(snippet.is_public);
}

#[test]
fn test_snippet_apply_only_touches_given_fields() {
    let mut snippet = Snippet::new(Uuid::new_v4(), new_snippet());
    let before = snippet.updated_at;

    snippet.apply(SnippetChanges {
        title: Some("Linear search".to_string()),
        description: Some(None),
        is_public: Some(false),
        ..Default::default()
    });

    assert_eq!(snippet.title, "Linear search");
    assert!(snippet.description.is_none());
    assert!(!snippet.is_public);
    assert_eq!(snippet.code, "fn search() {}");
    assert_eq!(snippet.language, "rust");
    assert!(snippet.updated_at >= before);
}
