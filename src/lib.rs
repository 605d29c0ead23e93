//! User Service
//!
//! Registers user accounts and looks them up by id, with:
//! - Validation of usernames, emails and password strength
//! - Salted password hashing (Argon2 or bcrypt)
//! - In-memory or PostgreSQL storage

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use crate::config::AppConfig;

use std::sync::Arc;

use tracing::info;

use crate::api::state::AppState;
use crate::config::{HashingConfig, StorageConfig};
use crate::domain::DomainError;
use crate::infrastructure::database::{run_migrations, Database};
use crate::infrastructure::user::{
    create_password_hasher, create_user_repository, HashService, UserService,
};

/// Create and open the configured database, bringing the schema up to date
pub async fn open_database(config: &StorageConfig) -> anyhow::Result<Database> {
    let mut database = Database::from_config(config)?;
    info!(backend = %database.storage_type(), "Opening storage");

    database.open().await?;

    if let Database::Postgres(postgres) = &database {
        if let Some(pool) = postgres.pool() {
            run_migrations(pool).await?;
        }
    }

    Ok(database)
}

/// Build the user service on top of an opened database handle
pub fn create_user_service(
    database: &Database,
    hashing: &HashingConfig,
) -> Result<UserService, DomainError> {
    let repository = create_user_repository(database)?;
    let hasher = create_password_hasher(hashing)?;

    info!(algorithm = %hashing.algorithm, "Password hashing configured");

    UserService::builder()
        .with_repository(repository)
        .with_hash_service(Arc::new(HashService::new(hasher)))
        .build()
}

/// Create the application state with all services initialized
pub fn create_app_state(database: &Database, config: &AppConfig) -> Result<AppState, DomainError> {
    let user_service = create_user_service(database, &config.hashing)?;

    Ok(AppState::new(Arc::new(user_service)))
}
