//! Password hashing and verification for sharebin.
//!
//! Uses Argon2id with a fresh random salt per hash. Records store the
//! resulting PHC string; a record with no stored hash is unprotected.

use argon2::{
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2, Params,
};
use rand_core::OsRng;
use thiserror::Error;

use crate::SharebinError;

/// Password hashing errors.
#[derive(Error, Debug)]
pub enum PasswordError {
    /// Password hashing failed.
    #[error("password hashing failed: {0}")]
    Hash(String),
}

impl From<PasswordError> for SharebinError {
    fn from(e: PasswordError) -> Self {
        SharebinError::Internal(e.to_string())
    }
}

/// Create the Argon2 hasher with explicit parameters.
///
/// Parameters:
/// - Memory cost: 19 MiB (19456 KiB)
/// - Time cost: 2 iterations
/// - Parallelism: 1 thread
fn create_argon2() -> Argon2<'static> {
    let m_cost = 19456;
    let t_cost = 2;
    let p_cost = 1;

    let params = Params::new(m_cost, t_cost, p_cost, None).expect("valid Argon2 params");
    Argon2::new(argon2::Algorithm::Argon2id, argon2::Version::V0x13, params)
}

/// Hash a password using Argon2id.
///
/// Returns `Ok(None)` for an empty or whitespace-only password: such a
/// record is stored without a credential and stays unprotected. Otherwise
/// returns a PHC-formatted hash string that includes the salt and
/// parameters, so the same plaintext hashes to a different string on
/// every call.
pub fn hash_password(password: &str) -> Result<Option<String>, PasswordError> {
    if password.trim().is_empty() {
        return Ok(None);
    }

    let salt = SaltString::generate(&mut OsRng);

    let argon2 = create_argon2();
    let hash = argon2
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| PasswordError::Hash(e.to_string()))?;

    Ok(Some(hash.to_string()))
}

/// Verify a password against a stored hash.
///
/// Returns `false` for an unparsable hash or a mismatch. The parameters
/// are taken from the parsed hash; the comparison itself is constant-time.
pub fn verify_password(password: &str, hash: &str) -> bool {
    let Ok(parsed_hash) = PasswordHash::new(hash) else {
        return false;
    };

    Argon2::default()
        .verify_password(password.as_bytes(), &parsed_hash)
        .is_ok()
}
