//! PostgreSQL database handle with connection pooling

use std::time::Duration;

use serde::Deserialize;
use sqlx::postgres::{PgPool, PgPoolOptions};
use tracing::{debug, info};

use crate::domain::DomainError;

/// PostgreSQL connection settings
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct PostgresConfig {
    pub host: String,
    pub port: u16,
    pub user: String,
    /// Left out of the connection URL when empty
    pub password: String,
    /// Database name
    pub name: String,
    pub ssl_mode: String,
    /// Maximum number of connections in the pool
    pub max_connections: u32,
    /// Minimum number of connections to maintain
    pub min_connections: u32,
    /// Connection timeout in seconds
    pub connect_timeout_secs: u64,
    /// Idle timeout in seconds
    pub idle_timeout_secs: u64,
}

impl Default for PostgresConfig {
    fn default() -> Self {
        Self {
            host: "localhost".to_string(),
            port: 5432,
            user: "postgres".to_string(),
            password: String::new(),
            name: "users".to_string(),
            ssl_mode: "disable".to_string(),
            max_connections: 10,
            min_connections: 1,
            connect_timeout_secs: 30,
            idle_timeout_secs: 600,
        }
    }
}

impl PostgresConfig {
    /// Connection URL understood by sqlx
    pub fn url(&self) -> String {
        let credentials = if self.password.is_empty() {
            self.user.clone()
        } else {
            format!("{}:{}", self.user, self.password)
        };

        format!(
            "postgres://{}@{}:{}/{}?sslmode={}",
            credentials, self.host, self.port, self.name, self.ssl_mode
        )
    }

    pub fn with_max_connections(mut self, max: u32) -> Self {
        self.max_connections = max;
        self
    }

    pub fn with_connect_timeout(mut self, secs: u64) -> Self {
        self.connect_timeout_secs = secs;
        self
    }

    fn pool_options(&self) -> PgPoolOptions {
        PgPoolOptions::new()
            .max_connections(self.max_connections)
            .min_connections(self.min_connections)
            .acquire_timeout(Duration::from_secs(self.connect_timeout_secs))
            .idle_timeout(Duration::from_secs(self.idle_timeout_secs))
    }
}

/// PostgreSQL database handle
///
/// Holds no pool until [`PostgresDatabase::open`] succeeds.
#[derive(Debug)]
pub struct PostgresDatabase {
    config: PostgresConfig,
    pool: Option<PgPool>,
}

impl PostgresDatabase {
    pub fn new(config: PostgresConfig) -> Self {
        Self { config, pool: None }
    }

    /// Wrap an existing pool, treating the handle as already open
    pub fn with_pool(config: PostgresConfig, pool: PgPool) -> Self {
        Self {
            config,
            pool: Some(pool),
        }
    }

    pub fn config(&self) -> &PostgresConfig {
        &self.config
    }

    /// The connection pool, if the handle has been opened
    pub fn pool(&self) -> Option<&PgPool> {
        self.pool.as_ref()
    }

    /// Connect the pool and ping the server
    pub async fn open(&mut self) -> Result<(), DomainError> {
        if self.pool.is_some() {
            return Ok(());
        }

        info!(
            host = %self.config.host,
            port = self.config.port,
            database = %self.config.name,
            "Connecting to PostgreSQL"
        );

        let pool = self
            .config
            .pool_options()
            .connect(&self.config.url())
            .await
            .map_err(|e| DomainError::storage(format!("Failed to connect to PostgreSQL: {}", e)))?;

        sqlx::query("SELECT 1")
            .execute(&pool)
            .await
            .map_err(|e| DomainError::storage(format!("Failed to ping PostgreSQL: {}", e)))?;

        info!("PostgreSQL connection established");
        self.pool = Some(pool);

        Ok(())
    }

    /// Close the pool; a handle that was never opened is left as is
    pub async fn close(&mut self) {
        if let Some(pool) = self.pool.take() {
            pool.close().await;
            debug!("PostgreSQL pool closed");
        }
    }
}
