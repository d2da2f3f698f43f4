//! Axum extractors resolving the caller's identity from a bearer token

use crate::{ApiError, AppState};

use cc_auth::{AuthContext, extract_bearer};

use std::future::Future;

use axum::{
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts},
};

/// Required authentication.
///
/// Rejects with 401 before the handler runs when the header is missing,
/// the scheme is not `Bearer`, or the token fails verification. Claims are
/// trusted as-is; the user row is not re-read.
#[derive(Debug, Clone)]
pub struct AuthUser(pub AuthContext);

/// Optional authentication.
///
/// Any failure (missing, malformed, expired) yields `None` and the request
/// proceeds anonymously.
#[derive(Debug, Clone)]
pub struct MaybeAuthUser(pub Option<AuthContext>);

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = ApiError;

    #[allow(clippy::manual_async_fn)]
    fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        async move {
            let context = authenticate(parts, state)?;
            log::debug!("Authenticated request as {}", context.user_id);
            Ok(AuthUser(context))
        }
    }
}

impl FromRequestParts<AppState> for MaybeAuthUser {
    type Rejection = ApiError;

    #[allow(clippy::manual_async_fn)]
    fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        async move {
            match authenticate(parts, state) {
                Ok(context) => Ok(MaybeAuthUser(Some(context))),
                Err(e) => {
                    if parts.headers.contains_key(AUTHORIZATION) {
                        log::debug!("Ignoring unusable credentials on optional route: {}", e);
                    }
                    Ok(MaybeAuthUser(None))
                }
            }
        }
    }
}

impl MaybeAuthUser {
    pub fn user_id(&self) -> Option<uuid::Uuid> {
        self.0.as_ref().map(|context| context.user_id)
    }
}

fn authenticate(parts: &Parts, state: &AppState) -> Result<AuthContext, ApiError> {
    // A non-ASCII header value is treated as absent
    let header = parts
        .headers
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok());

    let token = extract_bearer(header)?;
    let claims = state.token_codec.verify(token)?;

    Ok(AuthContext::from_claims(claims))
}
