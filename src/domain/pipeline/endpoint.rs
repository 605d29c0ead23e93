//! Endpoint and middleware function types

use std::future::Future;
use std::sync::Arc;
use std::time::Instant;

use futures::future::BoxFuture;
use tracing::{debug, warn};

use crate::domain::DomainError;

/// A domain operation invoked by the pipeline with an already decoded request
pub type Endpoint<Req, Res> =
    Arc<dyn Fn(Req) -> BoxFuture<'static, Result<Res, DomainError>> + Send + Sync>;

/// Wraps an endpoint into another endpoint with the same signature
pub type Middleware<Req, Res> = Arc<dyn Fn(Endpoint<Req, Res>) -> Endpoint<Req, Res> + Send + Sync>;

/// Build an endpoint from an async function or closure
pub fn endpoint_fn<Req, Res, F, Fut>(f: F) -> Endpoint<Req, Res>
where
    Req: 'static,
    Res: 'static,
    F: Fn(Req) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<Res, DomainError>> + Send + 'static,
{
    Arc::new(move |request: Req| -> BoxFuture<'static, Result<Res, DomainError>> {
        Box::pin(f(request))
    })
}

/// Middleware recording latency and outcome of every call
pub fn logging_middleware<Req, Res>(operation: &'static str) -> Middleware<Req, Res>
where
    Req: Send + 'static,
    Res: Send + 'static,
{
    Arc::new(move |next: Endpoint<Req, Res>| {
        endpoint_fn(move |request: Req| {
            let next = next.clone();

            async move {
                let start = Instant::now();
                let result = next(request).await;
                let elapsed_ms = start.elapsed().as_millis() as u64;

                match &result {
                    Ok(_) => debug!(operation, elapsed_ms, "Endpoint completed"),
                    Err(e) => warn!(operation, elapsed_ms, error = %e, "Endpoint failed"),
                }

                result
            }
        })
    })
}
