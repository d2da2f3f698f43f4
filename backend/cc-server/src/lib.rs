pub mod api;
pub mod app_state;
pub mod error;
pub mod health;
pub mod logger;
pub mod routes;
pub mod services;


pub use api::{
    auth::{
        auth::{login, logout, profile, refresh, register, verify},
        token_response::TokenResponse,
        user_dto::UserDto,
        user_response::UserResponse,
    },
    comments::{
        comment_dto::CommentDto,
        comment_list_response::CommentListResponse,
        comment_response::CommentResponse,
        comments::{create_comment, list_comments},
    },
    error::ApiError,
    error::Result as ApiResult,
    extractors::{
        auth_user::{AuthUser, MaybeAuthUser},
        json_body::JsonBody,
    },
    message_response::MessageResponse,
    snippets::{
        list_snippets_query::{FeedRequest, ListSnippetsQuery},
        pagination::Pagination,
        snippet_dto::SnippetDto,
        snippet_list_response::SnippetListResponse,
        snippet_response::SnippetResponse,
        snippets::{create_snippet, delete_snippet, get_snippet, list_snippets, update_snippet},
    },
};
pub use app_state::AppState;
pub use services::auth_service::AuthService;
pub use services::registration_listener::RegistrationListener;
pub use services::rewards::{CommunityBadge, WelcomeBonus};

pub use crate::routes::build_router;
