//! Password hashing utilities using Argon2 and bcrypt

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher as Argon2PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use std::fmt::Debug;
use thiserror::Error;

#[cfg(test)]
use mockall::automock;

/// Failure reported by a hashing algorithm
#[derive(Debug, Error, Clone, PartialEq)]
pub enum HashError {
    #[error("failed to hash password: {0}")]
    Generation(String),
}

/// Trait for password hashing operations
///
/// Hashes are salted, so hashing the same password twice gives different output.
#[cfg_attr(test, automock)]
pub trait PasswordHasher: Send + Sync + Debug {
    /// Hash a password
    fn from_password(&self, password: &str) -> Result<Vec<u8>, HashError>;

    /// Check a password against a hash; a malformed hash never matches
    fn match_password(&self, hash: &[u8], password: &str) -> bool;
}

/// Argon2-based password hasher
#[derive(Debug, Clone, Default)]
pub struct Argon2Hasher;

impl Argon2Hasher {
    /// Create a new Argon2 hasher
    pub fn new() -> Self {
        Self
    }
}

impl PasswordHasher for Argon2Hasher {
    fn from_password(&self, password: &str) -> Result<Vec<u8>, HashError> {
        let salt = SaltString::generate(&mut OsRng);
        let argon2 = Argon2::default();

        argon2
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| hash.to_string().into_bytes())
            .map_err(|e| HashError::Generation(e.to_string()))
    }

    fn match_password(&self, hash: &[u8], password: &str) -> bool {
        let Ok(hash) = std::str::from_utf8(hash) else {
            return false;
        };

        let parsed_hash = match PasswordHash::new(hash) {
            Ok(h) => h,
            Err(_) => return false,
        };

        Argon2::default()
            .verify_password(password.as_bytes(), &parsed_hash)
            .is_ok()
    }
}

/// bcrypt-based password hasher
#[derive(Debug, Clone)]
pub struct BcryptHasher {
    cost: u32,
}

impl BcryptHasher {
    /// Create a bcrypt hasher with the library's default cost
    pub fn new() -> Self {
        Self {
            cost: bcrypt::DEFAULT_COST,
        }
    }

    /// Create a bcrypt hasher with a specific work factor
    pub fn with_cost(cost: u32) -> Self {
        Self { cost }
    }

    pub fn cost(&self) -> u32 {
        self.cost
    }
}

impl Default for BcryptHasher {
    fn default() -> Self {
        Self::new()
    }
}

impl PasswordHasher for BcryptHasher {
    fn from_password(&self, password: &str) -> Result<Vec<u8>, HashError> {
        bcrypt::hash(password, self.cost)
            .map(String::into_bytes)
            .map_err(|e| HashError::Generation(e.to_string()))
    }

    fn match_password(&self, hash: &[u8], password: &str) -> bool {
        let Ok(hash) = std::str::from_utf8(hash) else {
            return false;
        };

        bcrypt::verify(password, hash).unwrap_or(false)
    }
}
