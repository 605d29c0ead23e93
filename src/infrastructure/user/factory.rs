//! Runtime selection of the user repository and password hasher

use std::sync::Arc;

use crate::config::HashingConfig;
use crate::domain::user::UserRepository;
use crate::domain::DomainError;
use crate::infrastructure::database::Database;

use super::password::{Argon2Hasher, BcryptHasher, PasswordHasher};
use super::postgres_repository::PostgresUserRepository;
use super::repository::InMemoryUserRepository;

/// Supported password hashing algorithms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HashAlgorithm {
    #[default]
    Argon2,
    Bcrypt,
}

impl std::fmt::Display for HashAlgorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HashAlgorithm::Argon2 => write!(f, "argon2"),
            HashAlgorithm::Bcrypt => write!(f, "bcrypt"),
        }
    }
}

impl std::str::FromStr for HashAlgorithm {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "argon2" | "argon2id" => Ok(HashAlgorithm::Argon2),
            "bcrypt" => Ok(HashAlgorithm::Bcrypt),
            _ => Err(DomainError::configuration(format!(
                "Unknown hash algorithm: {}. Valid algorithms: argon2, bcrypt",
                s
            ))),
        }
    }
}

/// Costs accepted by the bcrypt implementation
const BCRYPT_COST_RANGE: std::ops::RangeInclusive<u32> = 4..=31;

/// Build the repository matching the kind of database handle
pub fn create_user_repository(database: &Database) -> Result<Arc<dyn UserRepository>, DomainError> {
    match database {
        Database::InMemory(_) => Ok(Arc::new(InMemoryUserRepository::new())),
        Database::Postgres(postgres) => {
            let pool = postgres.pool().ok_or_else(|| {
                DomainError::configuration("PostgreSQL database must be opened before use")
            })?;

            Ok(Arc::new(PostgresUserRepository::new(pool.clone())))
        }
    }
}

/// Build the configured password hasher
pub fn create_password_hasher(
    config: &HashingConfig,
) -> Result<Arc<dyn PasswordHasher>, DomainError> {
    let algorithm: HashAlgorithm = config.algorithm.parse()?;

    match algorithm {
        HashAlgorithm::Argon2 => Ok(Arc::new(Argon2Hasher::new())),
        HashAlgorithm::Bcrypt => {
            if !BCRYPT_COST_RANGE.contains(&config.bcrypt_cost) {
                return Err(DomainError::configuration(format!(
                    "bcrypt cost must be between {} and {}, got {}",
                    BCRYPT_COST_RANGE.start(),
                    BCRYPT_COST_RANGE.end(),
                    config.bcrypt_cost
                )));
            }

            Ok(Arc::new(BcryptHasher::with_cost(config.bcrypt_cost)))
        }
    }
}
