//! Password hashing with Argon2id
//!
//! Hashes are PHC strings (`$argon2id$v=19$...`) that carry their own salt
//! and parameters, so a hash made with one parameter set still verifies
//! after the defaults change.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2, Params,
};

use crate::error::{SplitError, SplitResult};

/// Argon2id with the crate defaults
#[cfg(not(test))]
fn hasher() -> SplitResult<Argon2<'static>> {
    Ok(Argon2::default())
}

/// Cheap parameters so unit tests stay fast
#[cfg(test)]
fn hasher() -> SplitResult<Argon2<'static>> {
    let params = Params::new(1024, 1, 1, None)
        .map_err(|e| SplitError::Credential(format!("Invalid Argon2 parameters: {}", e)))?;
    Ok(Argon2::new(
        argon2::Algorithm::Argon2id,
        argon2::Version::V0x13,
        params,
    ))
}

/// Hash a password with a fresh random salt
pub fn hash_password(password: &str) -> SplitResult<String> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = hasher()?
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| SplitError::Credential(format!("Password hashing failed: {}", e)))?;
    Ok(hash.to_string())
}

/// Check a password against a stored PHC hash
///
/// A mismatch is `Ok(false)`; only a malformed hash is an error.
pub fn verify_password(password: &str, stored_hash: &str) -> SplitResult<bool> {
    let parsed = PasswordHash::new(stored_hash)
        .map_err(|e| SplitError::Credential(format!("Stored hash is malformed: {}", e)))?;

    match Argon2::default().verify_password(password.as_bytes(), &parsed) {
        Ok(()) => Ok(true),
        Err(argon2::password_hash::Error::Password) => Ok(false),
        Err(e) => Err(SplitError::Credential(format!(
            "Password verification failed: {}",
            e
        ))),
    }
}

/// Parameters of the default hasher, shown by `splitbook config`
pub fn default_params() -> Params {
    Params::default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_and_verify() {
        let hash = hash_password("password123").unwrap();
        assert!(hash.starts_with("$argon2id$"));
        assert!(verify_password("password123", &hash).unwrap());
        assert!(!verify_password("password124", &hash).unwrap());
    }

    #[test]
    fn test_same_password_different_hashes() {
        let a = hash_password("secret").unwrap();
        let b = hash_password("secret").unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_malformed_hash() {
        let err = verify_password("secret", "not-a-hash").unwrap_err();
        assert!(matches!(err, SplitError::Credential(_)));
    }
}
