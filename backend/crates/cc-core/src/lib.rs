pub mod error;
pub mod models;
pub mod policy;
pub mod validation;

pub use error::{CoreError, Result};
pub use error_location::ErrorLocation;
pub use models::badge::{Badge, COMMUNITY_MEMBER_BADGE};
pub use models::comment::Comment;
pub use models::point_reason::PointReason;
pub use models::point_transaction::PointTransaction;
pub use models::snippet::Snippet;
pub use models::user::User;
pub use policy::ownership::{OwnedResource, can_read, can_write, is_owner};
pub use validation::comment_form::CommentForm;
pub use validation::field_error::{FieldError, ValidationErrors};
pub use validation::identity_validator::IdentityValidator;
pub use validation::login_form::{LoginForm, LoginInput};
pub use validation::registration_form::{RegistrationForm, RegistrationInput};
pub use validation::snippet_form::{NewSnippet, SnippetChanges, SnippetForm, SnippetPatch};
pub use validation::snippet_validator::SnippetValidator;
