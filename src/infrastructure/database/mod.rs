//! Storage handles for the configured backend

mod in_memory;
pub mod migrations;
mod postgres;

pub use in_memory::InMemoryDatabase;
pub use migrations::{run_migrations, user_migrations, Migration, PostgresMigrator};
pub use postgres::{PostgresConfig, PostgresDatabase};

use crate::config::StorageConfig;
use crate::domain::DomainError;

/// Supported storage types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageType {
    /// In-process maps, lost on restart
    InMemory,
    /// PostgreSQL storage
    Postgres,
}

impl std::fmt::Display for StorageType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StorageType::InMemory => write!(f, "memory"),
            StorageType::Postgres => write!(f, "postgres"),
        }
    }
}

impl std::str::FromStr for StorageType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "memory" | "inmemory" | "in-memory" | "in_memory" => Ok(StorageType::InMemory),
            "postgres" | "postgresql" | "pg" => Ok(StorageType::Postgres),
            _ => Err(DomainError::configuration(format!(
                "Unknown storage backend: {}. Valid backends: memory, postgres",
                s
            ))),
        }
    }
}

/// A configured storage handle
///
/// The concrete kind decides which repository backend is built on top of it.
#[derive(Debug)]
pub enum Database {
    InMemory(InMemoryDatabase),
    Postgres(PostgresDatabase),
}

impl Database {
    /// Create an unopened handle for the configured backend
    pub fn from_config(config: &StorageConfig) -> Result<Self, DomainError> {
        let storage_type: StorageType = config.backend.parse()?;

        Ok(match storage_type {
            StorageType::InMemory => Self::InMemory(InMemoryDatabase::new()),
            StorageType::Postgres => Self::Postgres(PostgresDatabase::new(config.postgres.clone())),
        })
    }

    pub fn storage_type(&self) -> StorageType {
        match self {
            Self::InMemory(_) => StorageType::InMemory,
            Self::Postgres(_) => StorageType::Postgres,
        }
    }

    /// Establish the connection, if the backend has one
    pub async fn open(&mut self) -> Result<(), DomainError> {
        match self {
            Self::InMemory(database) => {
                database.open().await;
                Ok(())
            }
            Self::Postgres(database) => database.open().await,
        }
    }

    /// Release the connection; safe to call on a handle that was never opened
    pub async fn close(&mut self) {
        match self {
            Self::InMemory(database) => database.close().await,
            Self::Postgres(database) => database.close().await,
        }
    }
}
