//! Hash service turning hasher output into storable strings

use std::sync::Arc;

use super::password::PasswordHasher;
use crate::domain::DomainError;

/// Wraps the configured hasher for the user service
#[derive(Debug, Clone)]
pub struct HashService {
    hasher: Arc<dyn PasswordHasher>,
}

impl HashService {
    pub fn new(hasher: Arc<dyn PasswordHasher>) -> Self {
        Self { hasher }
    }

    /// Hash a plaintext password into a string suitable for storage
    pub fn generate_from_password(&self, password: &str) -> Result<String, DomainError> {
        let hash = self
            .hasher
            .from_password(password)
            .map_err(|e| DomainError::hash(e.to_string()))?;

        String::from_utf8(hash)
            .map_err(|_| DomainError::hash("hasher produced a non UTF-8 hash"))
    }

    /// Check a plaintext password against a stored hash
    pub fn match_password(&self, hash: &str, password: &str) -> bool {
        self.hasher.match_password(hash.as_bytes(), password)
    }
}
