//! Argon2 password hashing
//!
//! Hashes are stored as PHC strings (`$argon2id$v=19$...`), which carry the
//! algorithm parameters and salt alongside the digest.
//!
//! ```rust,ignore
//! use bitacora_common::security::{hash_password, verify_password};
//!
//! let hash = hash_password("secret123")?;
//! assert!(verify_password("secret123", &hash)?);
//! assert!(!verify_password("secret124", &hash)?);
//! # Ok::<(), bitacora_common::error::CommonError>(())
//! ```

use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use argon2::Argon2;

use crate::error::{CommonError, CommonResult};

/// Hash `password` with a fresh random salt
pub fn hash_password(password: &str) -> CommonResult<String> {
    let salt = SaltString::generate(&mut OsRng);

    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| CommonError::security(format!("Failed to hash password: {}", e)))
}

/// Check `password` against a stored PHC hash
///
/// A mismatch is `Ok(false)`. A hash that cannot be parsed is an error.
pub fn verify_password(password: &str, stored_hash: &str) -> CommonResult<bool> {
    let parsed = PasswordHash::new(stored_hash)
        .map_err(|e| CommonError::security(format!("Stored password hash is invalid: {}", e)))?;

    match Argon2::default().verify_password(password.as_bytes(), &parsed) {
        Ok(()) => Ok(true),
        Err(argon2::password_hash::Error::Password) => Ok(false),
        Err(e) => Err(CommonError::security(format!("Failed to verify password: {}", e))),
    }
}
