use crate::{CommentForm, CoreError, SnippetForm, SnippetPatch, SnippetValidator};

use googletest::prelude::*;

fn valid_form() -> SnippetForm {
    SnippetForm {
        title: Some("  Quicksort ".to_string()),
        description: Some("".to_string()),
        code: Some("fn sort() {}\n".to_string()),
        language: Some("Rust".to_string()),
        tags: Some(vec![
            "Sorting".to_string(),
            "sorting".to_string(),
            " algorithms ".to_string(),
        ]),
        is_public: None,
    }
}

#[test]
fn given_valid_form_when_validated_then_normalized() {
    let snippet = SnippetValidator::validate_new(valid_form()).unwrap();

    assert_that!(snippet.title, eq("Quicksort"));
    assert_that!(snippet.description, none());
    assert_that!(snippet.code, eq("fn sort() {}\n"));
    assert_that!(snippet.language, eq("rust"));
    assert_that!(snippet.tags, elements_are![eq("sorting"), eq("algorithms")]);
    assert!(snippet.is_public);
}

#[test]
fn given_missing_fields_when_validated_then_each_is_reported() {
    let result = SnippetValidator::validate_new(SnippetForm::default());

    let Err(CoreError::Validation { errors, .. }) = result else {
        panic!("expected validation error");
    };
    assert!(errors.has_field("title"));
    assert!(errors.has_field("code"));
    assert!(errors.has_field("language"));
    assert_that!(errors.len(), eq(3));
}

#[test]
fn given_too_many_tags_when_validated_then_tags_error() {
    let mut form = valid_form();
    form.tags = Some((0..11).map(|i| format!("tag{i}")).collect());

    let result = SnippetValidator::validate_new(form);

    let Err(CoreError::Validation { errors, .. }) = result else {
        panic!("expected validation error");
    };
    assert!(errors.has_field("tags"));
}

#[test]
fn given_empty_patch_when_validated_then_no_changes() {
    let changes = SnippetValidator::validate_patch(SnippetPatch::default()).unwrap();

    assert!(changes.is_empty());
}

#[test]
fn given_patch_with_blank_title_when_validated_then_title_error() {
    let patch = SnippetPatch {
        title: Some("   ".to_string()),
        ..Default::default()
    };

    let result = SnippetValidator::validate_patch(patch);

    assert!(matches!(result, Err(CoreError::Validation { .. })));
}

#[test]
fn given_patch_with_empty_description_when_validated_then_clears() {
    let patch = SnippetPatch {
        description: Some(String::new()),
        is_public: Some(false),
        ..Default::default()
    };

    let changes = SnippetValidator::validate_patch(patch).unwrap();

    assert_that!(changes.description, some(none()));
    assert_eq!(changes.is_public, Some(false));
}

#[test]
fn given_comment_when_validated_then_trimmed() {
    let content = SnippetValidator::validate_comment(CommentForm {
        content: Some("  nice one  ".to_string()),
    })
    .unwrap();

    assert_that!(content, eq("nice one"));
}

#[test]
fn given_blank_comment_when_validated_then_error() {
    let result = SnippetValidator::validate_comment(CommentForm {
        content: Some(" ".to_string()),
    });

    assert!(matches!(result, Err(CoreError::Validation { .. })));
}
