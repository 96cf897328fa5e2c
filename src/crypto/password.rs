//! Password hashing using Argon2id
//!
//! Hashes member passwords with Argon2id, a memory-hard function designed
//! for credential storage. Each hash carries its own random salt and cost
//! parameters in PHC string format, so verification re-derives the hash
//! from the stored parameters and compares.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};

use crate::error::{LibrisError, LibrisResult};

/// Hash a plaintext password for storage
///
/// Generates a fresh random salt per call; hashing the same password twice
/// yields different strings.
pub fn hash_password(password: &str) -> LibrisResult<String> {
    let salt = SaltString::generate(&mut OsRng);

    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| LibrisError::Credential(format!("Password hashing failed: {}", e)))?;

    Ok(hash.to_string())
}

/// Verify a plaintext password against a stored PHC hash string
///
/// Returns `Ok(false)` for a wrong password; an error only if the stored
/// hash itself is unreadable.
pub fn verify_password(password: &str, stored_hash: &str) -> LibrisResult<bool> {
    let parsed = PasswordHash::new(stored_hash)
        .map_err(|e| LibrisError::Credential(format!("Invalid password hash: {}", e)))?;

    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok())
}
