use crate::{
    LoginForm, LoginInput, RegistrationForm, RegistrationInput, Result as CoreErrorResult,
    ValidationErrors,
};

use std::sync::LazyLock;

use regex::Regex;

pub const MAX_EMAIL_LENGTH: usize = 255;
pub const MIN_PASSWORD_LENGTH: usize = 6;
pub const MAX_PASSWORD_LENGTH: usize = 128;
pub const MIN_USERNAME_LENGTH: usize = 3;
pub const MAX_USERNAME_LENGTH: usize = 50;
pub const MAX_NAME_LENGTH: usize = 50;

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is a valid regex")
});

static USERNAME_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z0-9_-]+$").expect("username pattern is a valid regex")
});

/// Validates and normalizes registration and login payloads
///
/// All fields are checked before returning so the client gets every
/// violation at once. At most one message is reported per field.
pub struct IdentityValidator;

impl IdentityValidator {
    #[track_caller]
    pub fn validate_registration(form: RegistrationForm) -> CoreErrorResult<RegistrationInput> {
        let mut errors = ValidationErrors::new();

        let email = Self::check_email(form.email, &mut errors);
        let password = Self::check_password(form.password, &mut errors);
        let username = Self::check_username(form.username, &mut errors);
        let first_name = Self::check_name("firstName", "First name", form.first_name, &mut errors);
        let last_name = Self::check_name("lastName", "Last name", form.last_name, &mut errors);

        errors.finish(RegistrationInput {
            email,
            password,
            username,
            first_name,
            last_name,
        })
    }

    /// Login only requires a non-empty password; the stored hash decides the rest
    #[track_caller]
    pub fn validate_login(form: LoginForm) -> CoreErrorResult<LoginInput> {
        let mut errors = ValidationErrors::new();

        let email = Self::check_email(form.email, &mut errors);
        let password = form.password.unwrap_or_default();
        if password.is_empty() {
            errors.push("password", "Password is required");
        }

        errors.finish(LoginInput { email, password })
    }

    fn check_email(raw: Option<String>, errors: &mut ValidationErrors) -> String {
        let email = raw.unwrap_or_default().trim().to_lowercase();

        if email.is_empty() {
            errors.push("email", "Email is required");
        } else if email.chars().count() > MAX_EMAIL_LENGTH {
            errors.push(
                "email",
                format!("Email must not exceed {MAX_EMAIL_LENGTH} characters"),
            );
        } else if !EMAIL_PATTERN.is_match(&email) {
            errors.push("email", "Please provide a valid email address");
        }

        email
    }

    fn check_password(raw: Option<String>, errors: &mut ValidationErrors) -> String {
        let password = raw.unwrap_or_default();
        let length = password.chars().count();

        if password.is_empty() {
            errors.push("password", "Password is required");
        } else if length < MIN_PASSWORD_LENGTH {
            errors.push(
                "password",
                format!("Password must be at least {MIN_PASSWORD_LENGTH} characters"),
            );
        } else if length > MAX_PASSWORD_LENGTH {
            errors.push(
                "password",
                format!("Password must not exceed {MAX_PASSWORD_LENGTH} characters"),
            );
        } else if !Self::is_complex(&password) {
            errors.push(
                "password",
                "Password must contain at least one lowercase letter, one uppercase letter, and one number",
            );
        }

        password
    }

    fn is_complex(password: &str) -> bool {
        password.chars().any(|c| c.is_ascii_lowercase())
            && password.chars().any(|c| c.is_ascii_uppercase())
            && password.chars().any(|c| c.is_ascii_digit())
    }

    fn check_username(raw: Option<String>, errors: &mut ValidationErrors) -> String {
        let username = raw.unwrap_or_default().trim().to_lowercase();
        let length = username.chars().count();

        if username.is_empty() {
            errors.push("username", "Username is required");
        } else if length < MIN_USERNAME_LENGTH {
            errors.push(
                "username",
                format!("Username must be at least {MIN_USERNAME_LENGTH} characters"),
            );
        } else if length > MAX_USERNAME_LENGTH {
            errors.push(
                "username",
                format!("Username must not exceed {MAX_USERNAME_LENGTH} characters"),
            );
        } else if !USERNAME_PATTERN.is_match(&username) {
            errors.push(
                "username",
                "Username can only contain letters, numbers, underscores, and hyphens",
            );
        }

        username
    }

    fn check_name(
        field: &str,
        label: &str,
        raw: Option<String>,
        errors: &mut ValidationErrors,
    ) -> Option<String> {
        let name = raw.map(|n| n.trim().to_string()).filter(|n| !n.is_empty())?;

        if name.chars().count() > MAX_NAME_LENGTH {
            errors.push(
                field,
                format!("{label} must not exceed {MAX_NAME_LENGTH} characters"),
            );
        }

        Some(name)
    }
}
