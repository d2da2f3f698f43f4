use crate::{CoreError, IdentityValidator, LoginForm, RegistrationForm};

use googletest::prelude::*;

fn valid_form() -> RegistrationForm {
    RegistrationForm {
        email: Some("  Alice@Example.COM ".to_string()),
        password: Some("Passw0rd".to_string()),
        username: Some(" Alice_01 ".to_string()),
        first_name: Some(" Alice ".to_string()),
        last_name: Some("   ".to_string()),
    }
}

fn field_errors(result: crate::Result<impl std::fmt::Debug>) -> Vec<(String, String)> {
    match result {
        Err(CoreError::Validation { errors, .. }) => errors
            .into_inner()
            .into_iter()
            .map(|e| (e.field, e.message))
            .collect(),
        other => panic!("expected validation error, got {other:?}"),
    }
}

#[test]
fn given_valid_registration_when_validated_then_normalized() {
    let input = IdentityValidator::validate_registration(valid_form()).unwrap();

    assert_that!(input.email, eq("alice@example.com"));
    assert_that!(input.username, eq("alice_01"));
    assert_that!(input.password, eq("Passw0rd"));
    assert_that!(input.first_name, some(eq("Alice")));
    assert_that!(input.last_name, none());
}

#[test]
fn given_empty_registration_when_validated_then_reports_every_required_field() {
    let errors = field_errors(IdentityValidator::validate_registration(
        RegistrationForm::default(),
    ));

    let fields: Vec<&str> = errors.iter().map(|(f, _)| f.as_str()).collect();
    assert_that!(fields, elements_are![eq(&"email"), eq(&"password"), eq(&"username")]);
}

#[test]
fn given_malformed_email_when_validated_then_email_error() {
    let mut form = valid_form();
    form.email = Some("not-an-email".to_string());

    let errors = field_errors(IdentityValidator::validate_registration(form));

    assert_that!(errors.len(), eq(1));
    assert_that!(errors[0].0, eq("email"));
    assert_that!(errors[0].1, contains_substring("valid email"));
}

#[test]
fn given_overlong_email_when_validated_then_email_error() {
    let mut form = valid_form();
    form.email = Some(format!("{}@example.com", "a".repeat(250)));

    let errors = field_errors(IdentityValidator::validate_registration(form));

    assert_that!(errors[0].1, contains_substring("255"));
}

#[test]
fn given_weak_passwords_when_validated_then_password_error() {
    for weak in ["Ab1", "password1", "PASSWORD1", "Password", &"Aa1".repeat(50)] {
        let mut form = valid_form();
        form.password = Some(weak.to_string());

        let errors = field_errors(IdentityValidator::validate_registration(form));

        assert_that!(errors.len(), eq(1));
        assert_that!(errors[0].0, eq("password"));
    }
}

#[test]
fn given_bad_usernames_when_validated_then_username_error() {
    for bad in ["ab", "has space", "dots.not.allowed", &"u".repeat(51)] {
        let mut form = valid_form();
        form.username = Some(bad.to_string());

        let errors = field_errors(IdentityValidator::validate_registration(form));

        assert_that!(errors.len(), eq(1));
        assert_that!(errors[0].0, eq("username"));
    }
}

#[test]
fn given_long_first_name_when_validated_then_first_name_error() {
    let mut form = valid_form();
    form.first_name = Some("x".repeat(51));

    let errors = field_errors(IdentityValidator::validate_registration(form));

    assert_that!(errors[0].0, eq("firstName"));
}

#[test]
fn given_login_with_weak_password_when_validated_then_ok() {
    let form = LoginForm {
        email: Some("BOB@Example.com".to_string()),
        password: Some("weak".to_string()),
    };

    let input = IdentityValidator::validate_login(form).unwrap();

    assert_that!(input.email, eq("bob@example.com"));
    assert_that!(input.password, eq("weak"));
}

#[test]
fn given_login_without_password_when_validated_then_password_error() {
    let form = LoginForm {
        email: Some("bob@example.com".to_string()),
        password: None,
    };

    let errors = field_errors(IdentityValidator::validate_login(form));

    assert_that!(errors.len(), eq(1));
    assert_that!(errors[0].0, eq("password"));
}
