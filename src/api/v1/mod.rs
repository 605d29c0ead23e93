//! v1 API endpoints

pub mod users;

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use super::state::AppState;
use crate::domain::DomainError;

pub use users::UserPipelines;

/// Create v1 API router
pub fn create_v1_router(state: &AppState) -> Result<Router<AppState>, DomainError> {
    let pipelines = UserPipelines::new(state.user_service.clone())?;

    Ok(Router::new()
        .route("/users", post(users::register_user))
        .route("/users/{id}", get(users::get_user))
        .with_state(Arc::new(pipelines)))
}
