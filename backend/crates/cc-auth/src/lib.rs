pub mod auth_context;
pub mod bearer;
pub mod claims;
pub mod clock;
pub mod error;
pub mod password_hasher;
pub mod token_codec;

pub use auth_context::AuthContext;
pub use bearer::extract_bearer;
pub use claims::Claims;
pub use clock::{Clock, ManualClock, SystemClock};
pub use error::{AuthError, Result};
pub use password_hasher::PasswordHasher;
pub use token_codec::TokenCodec;
