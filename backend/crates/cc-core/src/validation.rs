pub mod comment_form;
pub mod field_error;
pub mod identity_validator;
pub mod login_form;
pub mod registration_form;
pub mod snippet_form;
pub mod snippet_validator;
