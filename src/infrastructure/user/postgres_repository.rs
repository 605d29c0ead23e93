//! PostgreSQL user repository implementation

use async_trait::async_trait;
use sqlx::{PgPool, Row};
use tracing::error;

use crate::domain::user::{User, UserId, UserRepository};
use crate::domain::DomainError;

/// PostgreSQL implementation of UserRepository
///
/// Ids come from the `BIGSERIAL` primary key and are exposed as decimal strings.
#[derive(Debug, Clone)]
pub struct PostgresUserRepository {
    pool: PgPool,
}

impl PostgresUserRepository {
    /// Create a new repository with the given connection pool
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn create(
        &self,
        username: &str,
        email: &str,
        password_hash: &str,
    ) -> Result<User, DomainError> {
        let id: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO users (username, email, password_hash)
            VALUES ($1, $2, $3)
            RETURNING id
            "#,
        )
        .bind(username)
        .bind(email)
        .bind(password_hash)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            error!(error = %e, "Failed to insert user");
            DomainError::storage(format!("Failed to create user: {}", e))
        })?;

        Ok(User::new(
            UserId::new(id.to_string()),
            username,
            email,
            password_hash,
        ))
    }

    async fn get_by_id(&self, id: &UserId) -> Result<User, DomainError> {
        let not_found = || DomainError::not_found(format!("no user exists with ID \"{}\"", id));

        // Keys are numeric, anything else cannot exist
        let Some(key) = parse_user_id(id) else {
            return Err(not_found());
        };

        let row = sqlx::query(
            r#"
            SELECT id, username, email, password_hash
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(key)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to get user: {}", e)))?;

        match row {
            Some(row) => row_to_user(&row),
            None => Err(not_found()),
        }
    }

    async fn get_by_email(&self, email: &str) -> Result<User, DomainError> {
        let row = sqlx::query(
            r#"
            SELECT id, username, email, password_hash
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to get user by email: {}", e)))?;

        match row {
            Some(row) => row_to_user(&row),
            None => Err(DomainError::not_found(format!(
                "no user exists with email \"{}\"",
                email
            ))),
        }
    }
}

fn parse_user_id(id: &UserId) -> Option<i64> {
    id.as_str().parse().ok()
}

fn row_to_user(row: &sqlx::postgres::PgRow) -> Result<User, DomainError> {
    let column_error =
        |e: sqlx::Error| DomainError::storage(format!("Failed to read user row: {}", e));

    let id: i64 = row.try_get("id").map_err(column_error)?;
    let username: String = row.try_get("username").map_err(column_error)?;
    let email: String = row.try_get("email").map_err(column_error)?;
    let password_hash: String = row.try_get("password_hash").map_err(column_error)?;

    user_from_columns(id, username, email, password_hash)
}

/// Rebuild a user from stored columns, rejecting incomplete records
fn user_from_columns(
    id: i64,
    username: String,
    email: String,
    password_hash: String,
) -> Result<User, DomainError> {
    let user = User::new(UserId::new(id.to_string()), username, email, password_hash);

    user.validate().map_err(|e| {
        DomainError::storage(format!("Invalid user {} in database: {}", id, e))
    })?;

    Ok(user)
}
