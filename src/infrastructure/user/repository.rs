//! In-memory user repository implementation

use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;

use crate::domain::user::{User, UserId, UserRepository};
use crate::domain::DomainError;

/// Both indexes and the id counter, guarded together
#[derive(Debug, Default)]
struct UserTables {
    next_id: u64,
    by_id: HashMap<String, User>,
    by_email: HashMap<String, User>,
}

/// In-memory implementation of UserRepository
///
/// Ids are decimal strings counting up from `"0"`. Duplicate emails are not
/// rejected here; the email index keeps the first user stored for an address.
#[derive(Debug, Default)]
pub struct InMemoryUserRepository {
    tables: RwLock<UserTables>,
}

impl InMemoryUserRepository {
    /// Create a new empty repository
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create(
        &self,
        username: &str,
        email: &str,
        password_hash: &str,
    ) -> Result<User, DomainError> {
        let mut tables = self.tables.write().await;

        let id = tables.next_id.to_string();
        tables.next_id += 1;

        let user = User::new(UserId::new(id.clone()), username, email, password_hash);

        tables.by_id.insert(id, user.clone());
        tables
            .by_email
            .entry(email.to_string())
            .or_insert_with(|| user.clone());

        Ok(user)
    }

    async fn get_by_id(&self, id: &UserId) -> Result<User, DomainError> {
        let tables = self.tables.read().await;

        tables.by_id.get(id.as_str()).cloned().ok_or_else(|| {
            DomainError::not_found(format!("no user exists with ID \"{}\"", id))
        })
    }

    async fn get_by_email(&self, email: &str) -> Result<User, DomainError> {
        let tables = self.tables.read().await;

        tables.by_email.get(email).cloned().ok_or_else(|| {
            DomainError::not_found(format!("no user exists with email \"{}\"", email))
        })
    }
}
