//! HTTP request, response and error bodies

pub mod error;
pub mod user;

pub use error::{ApiError, ApiErrorResponse};
pub use user::{RegisterUserRequest, UserResponse};
