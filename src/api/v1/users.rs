//! User endpoint handlers
//!
//! Each route is served by a [`Pipeline`] that decodes the raw request,
//! calls the user service and encodes the result or the error.

use std::sync::Arc;

use axum::{
    extract::{FromRequestParts, Path, Request, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use serde::Serialize;
use tracing::{debug, error};

use crate::api::types::{ApiError, RegisterUserRequest, UserResponse};
use crate::domain::{endpoint_fn, logging_middleware, DomainError, Endpoint, Pipeline, User};
use crate::infrastructure::user::UserService;

/// Largest request body accepted for registration
const MAX_BODY_BYTES: usize = 64 * 1024;

pub type RegisterUserPipeline = Pipeline<Request, RegisterUserRequest, User, Response>;
pub type GetUserPipeline = Pipeline<Request, String, User, Response>;

/// The pipelines behind the user routes
#[derive(Debug, Clone)]
pub struct UserPipelines {
    pub register: RegisterUserPipeline,
    pub get: GetUserPipeline,
}

impl UserPipelines {
    pub fn new(service: Arc<UserService>) -> Result<Self, DomainError> {
        let register: RegisterUserPipeline = Pipeline::builder()
            .decode(decode_register_request)
            .endpoint(register_endpoint(service.clone()))
            .middleware(logging_middleware("user.register"))
            .encode_response(|user: User| {
                json_response(StatusCode::CREATED, &UserResponse::from(&user))
            })
            .encode_error(encode_error)
            .build()?;

        let get: GetUserPipeline = Pipeline::builder()
            .decode(decode_get_user_request)
            .endpoint(get_user_endpoint(service))
            .middleware(logging_middleware("user.get_by_id"))
            .encode_response(|user: User| json_response(StatusCode::OK, &UserResponse::from(&user)))
            .encode_error(encode_error)
            .build()?;

        Ok(Self { register, get })
    }
}

/// POST /v1/users
pub async fn register_user(
    State(pipelines): State<Arc<UserPipelines>>,
    request: Request,
) -> Response {
    pipelines.register.serve(request).await
}

/// GET /v1/users/{id}
pub async fn get_user(State(pipelines): State<Arc<UserPipelines>>, request: Request) -> Response {
    pipelines.get.serve(request).await
}

async fn decode_register_request(request: Request) -> Result<RegisterUserRequest, DomainError> {
    let body = axum::body::to_bytes(request.into_body(), MAX_BODY_BYTES)
        .await
        .map_err(|e| DomainError::invalid_request(format!("failed to read request body: {}", e)))?;

    serde_json::from_slice(&body)
        .map_err(|e| DomainError::invalid_request(format!("malformed JSON body: {}", e)))
}

async fn decode_get_user_request(request: Request) -> Result<String, DomainError> {
    let (mut parts, _body) = request.into_parts();

    let Path(id) = Path::<String>::from_request_parts(&mut parts, &())
        .await
        .map_err(|e| DomainError::invalid_request(e.body_text()))?;

    Ok(id)
}

fn register_endpoint(service: Arc<UserService>) -> Endpoint<RegisterUserRequest, User> {
    endpoint_fn(move |request: RegisterUserRequest| {
        let service = service.clone();

        async move {
            service
                .register(&request.username, &request.email, &request.password)
                .await
        }
    })
}

fn get_user_endpoint(service: Arc<UserService>) -> Endpoint<String, User> {
    endpoint_fn(move |id: String| {
        let service = service.clone();

        async move { service.get_by_id(&id).await }
    })
}

fn json_response<T: Serialize>(status: StatusCode, body: &T) -> Result<Response, DomainError> {
    let bytes = serde_json::to_vec(body)
        .map_err(|e| DomainError::internal(format!("failed to encode response: {}", e)))?;

    Ok((
        status,
        [(header::CONTENT_TYPE, "application/json; charset=utf-8")],
        bytes,
    )
        .into_response())
}

fn encode_error(err: DomainError) -> Response {
    let api_error = ApiError::from(err.clone());

    if api_error.status.is_server_error() {
        error!(error = %err, "Request failed");
    } else {
        debug!(error = %err, status = %api_error.status, "Request rejected");
    }

    api_error.into_response()
}
