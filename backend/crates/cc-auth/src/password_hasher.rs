use crate::{AuthError, Result as AuthErrorResult};

use std::panic::Location;

use argon2::{
    Algorithm, Argon2, Params, Version,
    password_hash::{
        PasswordHash, PasswordHasher as _, PasswordVerifier as _, SaltString, rand_core::OsRng,
    },
};
use error_location::ErrorLocation;

/// Salted one-way password hashing (Argon2id, PHC string output)
///
/// Digests carry algorithm, version, cost parameters and salt, so
/// verification needs nothing but the digest. Hashing is CPU-heavy; async
/// callers should run it on the blocking pool.
#[derive(Clone)]
pub struct PasswordHasher {
    argon2: Argon2<'static>,
}

impl Default for PasswordHasher {
    /// OWASP Argon2id baseline: 19 MiB, 2 iterations, 1 lane
    fn default() -> Self {
        Self {
            argon2: Argon2::default(),
        }
    }
}

impl PasswordHasher {
    /// Custom cost parameters (memory in KiB)
    #[track_caller]
    pub fn with_params(memory_kib: u32, iterations: u32, parallelism: u32) -> AuthErrorResult<Self> {
        let params = Params::new(memory_kib, iterations, parallelism, None).map_err(|e| {
            AuthError::PasswordHash {
                message: format!("invalid argon2 parameters: {e}"),
                location: ErrorLocation::from(Location::caller()),
            }
        })?;

        Ok(Self {
            argon2: Argon2::new(Algorithm::Argon2id, Version::V0x13, params),
        })
    }

    /// Hash with a fresh random salt
    #[track_caller]
    pub fn hash(&self, plaintext: &str) -> AuthErrorResult<String> {
        let salt = SaltString::generate(&mut OsRng);

        self.argon2
            .hash_password(plaintext.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| AuthError::PasswordHash {
                message: e.to_string(),
                location: ErrorLocation::from(Location::caller()),
            })
    }

    /// Never errors: a malformed digest simply does not match
    pub fn verify(&self, plaintext: &str, digest: &str) -> bool {
        match PasswordHash::new(digest) {
            Ok(parsed) => self
                .argon2
                .verify_password(plaintext.as_bytes(), &parsed)
                .is_ok(),
            Err(_) => false,
        }
    }
}
