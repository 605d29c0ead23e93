//! User repository trait

use async_trait::async_trait;
use std::fmt::Debug;

#[cfg(test)]
use mockall::automock;

use super::entity::{User, UserId};
use crate::domain::DomainError;

/// Repository trait for user storage
///
/// Implementations assign ids and persist records; they never validate input.
/// Lookups that miss return `DomainError::NotFound`.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait UserRepository: Send + Sync + Debug {
    /// Store a new user and return it with its freshly assigned id
    async fn create(
        &self,
        username: &str,
        email: &str,
        password_hash: &str,
    ) -> Result<User, DomainError>;

    /// Get a user by their ID
    async fn get_by_id(&self, id: &UserId) -> Result<User, DomainError>;

    /// Get a user by their email address
    async fn get_by_email(&self, email: &str) -> Result<User, DomainError>;
}
