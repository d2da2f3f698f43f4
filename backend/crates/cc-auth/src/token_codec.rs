use crate::{AuthError, Claims, Clock, Result as AuthErrorResult, SystemClock};

use cc_core::User;

use std::panic::Location;
use std::sync::Arc;
use std::time::Duration;

use error_location::ErrorLocation;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};

/// Clock skew tolerance applied to `exp`
pub const DEFAULT_LEEWAY_SECS: i64 = 30;

/// Issues and verifies HS256 access tokens
///
/// Expiry is checked against the injected [`Clock`] rather than by the JWT
/// library, so tests can move time. There is no revocation: an unexpired
/// token with a valid signature is always accepted.
pub struct TokenCodec {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    issuer: String,
    leeway_secs: i64,
    clock: Arc<dyn Clock>,
}

impl TokenCodec {
    /// Create codec with HS256 (symmetric secret)
    pub fn with_hs256(secret: &[u8], issuer: &str) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = false;
        validation.validate_nbf = false;
        validation.set_issuer(&[issuer]);
        validation.set_required_spec_claims(&["exp", "iss", "sub"]);

        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            validation,
            issuer: issuer.to_string(),
            leeway_secs: DEFAULT_LEEWAY_SECS,
            clock: Arc::new(SystemClock),
        }
    }

    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    pub fn with_leeway(mut self, leeway_secs: u64) -> Self {
        self.leeway_secs = i64::try_from(leeway_secs).unwrap_or(i64::MAX);
        self
    }

    /// Sign a token for `user` that expires `ttl` from now
    #[track_caller]
    pub fn issue(&self, user: &User, ttl: Duration) -> AuthErrorResult<String> {
        let now = self.clock.now().timestamp();
        let ttl_secs = i64::try_from(ttl.as_secs()).unwrap_or(i64::MAX);

        let claims = Claims {
            sub: user.id.to_string(),
            id: user.id,
            email: user.email.clone(),
            username: user.username.clone(),
            iss: self.issuer.clone(),
            iat: now,
            exp: now.saturating_add(ttl_secs),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key).map_err(|e| {
            AuthError::JwtEncode {
                source: e,
                location: ErrorLocation::from(Location::caller()),
            }
        })
    }

    /// Verify signature, issuer and expiry and return the embedded claims
    #[track_caller]
    pub fn verify(&self, token: &str) -> AuthErrorResult<Claims> {
        let token_data = decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map_err(|e| {
                use jsonwebtoken::errors::ErrorKind;
                match e.kind() {
                    ErrorKind::ExpiredSignature => AuthError::TokenExpired {
                        location: ErrorLocation::from(Location::caller()),
                    },
                    _ => AuthError::JwtDecode {
                        source: e,
                        location: ErrorLocation::from(Location::caller()),
                    },
                }
            })?;

        let now = self.clock.now().timestamp();
        if token_data.claims.exp.saturating_add(self.leeway_secs) < now {
            return Err(AuthError::TokenExpired {
                location: ErrorLocation::from(Location::caller()),
            });
        }

        token_data.claims.validate()?;

        Ok(token_data.claims)
    }

    pub fn issuer(&self) -> &str {
        &self.issuer
    }
}
