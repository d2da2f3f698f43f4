use crate::User;

#[test]
fn test_user_new_defaults() {
    let user = User::new(
        "alice@example.com".to_string(),
        "alice".to_string(),
        "$argon2id$stub".to_string(),
        Some("Alice".to_string()),
        None,
    );

    assert_eq!(user.email, "alice@example.com");
    assert_eq!(user.username, "alice");
    assert_eq!(user.points, 0);
    assert_eq!(user.level, 1);
    assert_eq!(user.first_name.as_deref(), Some("Alice"));
    assert!(user.last_name.is_none());
    assert!(user.bio.is_none());
    assert_eq!(user.created_at, user.updated_at);
}

#[test]
fn test_user_new_generates_distinct_ids() {
    let a = User::new("a@x.io".into(), "aaa".into(), "h".into(), None, None);
    let b = User::new("b@x.io".into(), "bbb".into(), "h".into(), None, None);

    assert_ne!(a.id, b.id);
}
