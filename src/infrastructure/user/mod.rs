//! User infrastructure module
//!
//! This module provides implementations for user registration and lookup,
//! including password hashing, the in-memory and PostgreSQL repositories,
//! and the user service.

mod factory;
mod hash_service;
mod password;
mod postgres_repository;
mod repository;
mod service;

pub use factory::{create_password_hasher, create_user_repository, HashAlgorithm};
pub use hash_service::HashService;
pub use password::{Argon2Hasher, BcryptHasher, HashError, PasswordHasher};
pub use postgres_repository::PostgresUserRepository;
pub use repository::InMemoryUserRepository;
pub use service::{UserService, UserServiceBuilder};
