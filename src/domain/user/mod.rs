//! User domain
//!
//! This module provides domain types and traits for user accounts,
//! including the user entity, validation rules, and the repository trait.

mod entity;
mod repository;
mod validation;

pub use entity::{User, UserId};
pub use repository::UserRepository;
pub use validation::{
    validate_email, validate_password, validate_username, UserValidationError,
    MIN_PASSWORD_LENGTH, SPECIAL_CHARACTERS,
};

#[cfg(test)]
pub use repository::MockUserRepository;
