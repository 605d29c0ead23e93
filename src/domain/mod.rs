//! Domain layer - Core business logic and entities

pub mod error;
pub mod pipeline;
pub mod user;

pub use error::DomainError;
pub use pipeline::{endpoint_fn, logging_middleware, Endpoint, Middleware, Pipeline, PipelineBuilder};
pub use user::{User, UserId, UserRepository, UserValidationError};
