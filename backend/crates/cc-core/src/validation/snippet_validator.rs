use crate::{
    CommentForm, NewSnippet, Result as CoreErrorResult, SnippetChanges, SnippetForm, SnippetPatch,
    ValidationErrors,
};

pub const MAX_TITLE_LENGTH: usize = 200;
pub const MAX_DESCRIPTION_LENGTH: usize = 2000;
pub const MAX_CODE_LENGTH: usize = 50_000;
pub const MAX_LANGUAGE_LENGTH: usize = 50;
pub const MAX_TAGS: usize = 10;
pub const MAX_TAG_LENGTH: usize = 30;
pub const MAX_COMMENT_LENGTH: usize = 5000;

/// Validates snippet and comment payloads
pub struct SnippetValidator;

impl SnippetValidator {
    #[track_caller]
    pub fn validate_new(form: SnippetForm) -> CoreErrorResult<NewSnippet> {
        let mut errors = ValidationErrors::new();

        let title = Self::check_required("title", "Title", form.title, MAX_TITLE_LENGTH, &mut errors);
        let description = Self::check_description(form.description, &mut errors);
        let code = Self::check_code(form.code, &mut errors);
        let language = Self::check_required(
            "language",
            "Language",
            form.language,
            MAX_LANGUAGE_LENGTH,
            &mut errors,
        )
        .to_lowercase();
        let tags = Self::check_tags(form.tags.unwrap_or_default(), &mut errors);

        errors.finish(NewSnippet {
            title,
            description,
            code,
            language,
            tags,
            is_public: form.is_public.unwrap_or(true),
        })
    }

    #[track_caller]
    pub fn validate_patch(patch: SnippetPatch) -> CoreErrorResult<SnippetChanges> {
        let mut errors = ValidationErrors::new();

        let title = patch.title.map(|t| {
            Self::check_required("title", "Title", Some(t), MAX_TITLE_LENGTH, &mut errors)
        });
        let description = patch
            .description
            .map(|d| Self::check_description(Some(d), &mut errors));
        let code = patch.code.map(|c| Self::check_code(Some(c), &mut errors));
        let language = patch.language.map(|l| {
            Self::check_required("language", "Language", Some(l), MAX_LANGUAGE_LENGTH, &mut errors)
                .to_lowercase()
        });
        let tags = patch.tags.map(|t| Self::check_tags(t, &mut errors));

        errors.finish(SnippetChanges {
            title,
            description,
            code,
            language,
            tags,
            is_public: patch.is_public,
        })
    }

    /// Returns the trimmed comment body
    #[track_caller]
    pub fn validate_comment(form: CommentForm) -> CoreErrorResult<String> {
        let mut errors = ValidationErrors::new();
        let content = Self::check_required(
            "content",
            "Content",
            form.content,
            MAX_COMMENT_LENGTH,
            &mut errors,
        );
        errors.finish(content)
    }

    fn check_required(
        field: &str,
        label: &str,
        raw: Option<String>,
        max: usize,
        errors: &mut ValidationErrors,
    ) -> String {
        let value = raw.unwrap_or_default().trim().to_string();

        if value.is_empty() {
            errors.push(field, format!("{label} is required"));
        } else if value.chars().count() > max {
            errors.push(field, format!("{label} must not exceed {max} characters"));
        }

        value
    }

    fn check_description(raw: Option<String>, errors: &mut ValidationErrors) -> Option<String> {
        let description = raw.map(|d| d.trim().to_string()).filter(|d| !d.is_empty())?;

        if description.chars().count() > MAX_DESCRIPTION_LENGTH {
            errors.push(
                "description",
                format!("Description must not exceed {MAX_DESCRIPTION_LENGTH} characters"),
            );
        }

        Some(description)
    }

    /// Code keeps its whitespace; only emptiness is judged on the trimmed form
    fn check_code(raw: Option<String>, errors: &mut ValidationErrors) -> String {
        let code = raw.unwrap_or_default();

        if code.trim().is_empty() {
            errors.push("code", "Code is required");
        } else if code.chars().count() > MAX_CODE_LENGTH {
            errors.push(
                "code",
                format!("Code must not exceed {MAX_CODE_LENGTH} characters"),
            );
        }

        code
    }

    fn check_tags(raw: Vec<String>, errors: &mut ValidationErrors) -> Vec<String> {
        let mut tags: Vec<String> = Vec::with_capacity(raw.len());

        for tag in raw {
            let tag = tag.trim().to_lowercase();
            if tag.is_empty() {
                errors.push("tags", "Tags cannot be empty");
                continue;
            }
            if tag.chars().count() > MAX_TAG_LENGTH {
                errors.push(
                    "tags",
                    format!("Each tag must not exceed {MAX_TAG_LENGTH} characters"),
                );
                continue;
            }
            if !tags.contains(&tag) {
                tags.push(tag);
            }
        }

        if tags.len() > MAX_TAGS {
            errors.push("tags", format!("At most {MAX_TAGS} tags are allowed"));
        }

        tags
    }
}
