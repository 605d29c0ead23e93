use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

use super::health;
use super::state::AppState;
use super::v1;
use crate::domain::DomainError;

/// Create the full router with application state
pub fn create_router(state: AppState) -> Result<Router, DomainError> {
    Ok(Router::new()
        .route("/health", get(health::health_check))
        .nest("/v1", v1::create_v1_router(&state)?)
        .with_state(state)
        .layer(TraceLayer::new_for_http()))
}
