//! Transport-independent request pipeline
//!
//! A pipeline decodes a transport input into a typed request, invokes an
//! endpoint, and encodes either the response or the first error into the
//! transport output.

mod endpoint;

pub use endpoint::{endpoint_fn, logging_middleware, Endpoint, Middleware};

use std::future::Future;
use std::sync::Arc;

use futures::future::BoxFuture;

use crate::domain::DomainError;

type DecodeFn<In, Req> =
    Arc<dyn Fn(In) -> BoxFuture<'static, Result<Req, DomainError>> + Send + Sync>;
type EncodeResponseFn<Res, Out> = Arc<dyn Fn(Res) -> Result<Out, DomainError> + Send + Sync>;
type EncodeErrorFn<Out> = Arc<dyn Fn(DomainError) -> Out + Send + Sync>;

/// Decode, invoke, encode; the first failure goes to the error encoder
pub struct Pipeline<In, Req, Res, Out> {
    decode: DecodeFn<In, Req>,
    endpoint: Endpoint<Req, Res>,
    encode_response: EncodeResponseFn<Res, Out>,
    encode_error: EncodeErrorFn<Out>,
}

impl<In, Req, Res, Out> Clone for Pipeline<In, Req, Res, Out> {
    fn clone(&self) -> Self {
        Self {
            decode: self.decode.clone(),
            endpoint: self.endpoint.clone(),
            encode_response: self.encode_response.clone(),
            encode_error: self.encode_error.clone(),
        }
    }
}

impl<In, Req, Res, Out> std::fmt::Debug for Pipeline<In, Req, Res, Out> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Pipeline").finish_non_exhaustive()
    }
}

impl<In, Req, Res, Out> Pipeline<In, Req, Res, Out>
where
    In: Send + 'static,
    Req: Send + 'static,
    Res: Send + 'static,
    Out: 'static,
{
    pub fn builder() -> PipelineBuilder<In, Req, Res, Out> {
        PipelineBuilder::new()
    }

    /// Process one input
    ///
    /// Exactly one of the two encoders produces the output, and the error
    /// encoder runs at most once.
    pub async fn serve(&self, input: In) -> Out {
        let request = match (self.decode)(input).await {
            Ok(request) => request,
            Err(e) => return (self.encode_error)(e),
        };

        let response = match (self.endpoint)(request).await {
            Ok(response) => response,
            Err(e) => return (self.encode_error)(e),
        };

        match (self.encode_response)(response) {
            Ok(output) => output,
            Err(e) => (self.encode_error)(e),
        }
    }
}

/// Builder for Pipeline
pub struct PipelineBuilder<In, Req, Res, Out> {
    decode: Option<DecodeFn<In, Req>>,
    endpoint: Option<Endpoint<Req, Res>>,
    middleware: Vec<Middleware<Req, Res>>,
    encode_response: Option<EncodeResponseFn<Res, Out>>,
    encode_error: Option<EncodeErrorFn<Out>>,
}

impl<In, Req, Res, Out> PipelineBuilder<In, Req, Res, Out>
where
    In: Send + 'static,
    Req: Send + 'static,
    Res: Send + 'static,
    Out: 'static,
{
    pub fn new() -> Self {
        Self {
            decode: None,
            endpoint: None,
            middleware: Vec::new(),
            encode_response: None,
            encode_error: None,
        }
    }

    /// Set the function turning a transport input into a typed request
    pub fn decode<F, Fut>(mut self, decode: F) -> Self
    where
        F: Fn(In) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<Req, DomainError>> + Send + 'static,
    {
        let decode: DecodeFn<In, Req> =
            Arc::new(move |input: In| -> BoxFuture<'static, Result<Req, DomainError>> {
                Box::pin(decode(input))
            });
        self.decode = Some(decode);
        self
    }

    pub fn endpoint(mut self, endpoint: Endpoint<Req, Res>) -> Self {
        self.endpoint = Some(endpoint);
        self
    }

    /// Wrap the endpoint; the first middleware added is the outermost
    pub fn middleware(mut self, middleware: Middleware<Req, Res>) -> Self {
        self.middleware.push(middleware);
        self
    }

    pub fn encode_response<F>(mut self, encode: F) -> Self
    where
        F: Fn(Res) -> Result<Out, DomainError> + Send + Sync + 'static,
    {
        let encode: EncodeResponseFn<Res, Out> = Arc::new(encode);
        self.encode_response = Some(encode);
        self
    }

    pub fn encode_error<F>(mut self, encode: F) -> Self
    where
        F: Fn(DomainError) -> Out + Send + Sync + 'static,
    {
        let encode: EncodeErrorFn<Out> = Arc::new(encode);
        self.encode_error = Some(encode);
        self
    }

    /// Build the pipeline, failing when any of the four functions is missing
    pub fn build(self) -> Result<Pipeline<In, Req, Res, Out>, DomainError> {
        let decode = self
            .decode
            .ok_or_else(|| DomainError::configuration("pipeline requires a request decoder"))?;
        let mut endpoint = self
            .endpoint
            .ok_or_else(|| DomainError::configuration("pipeline requires an endpoint"))?;
        let encode_response = self
            .encode_response
            .ok_or_else(|| DomainError::configuration("pipeline requires a response encoder"))?;
        let encode_error = self
            .encode_error
            .ok_or_else(|| DomainError::configuration("pipeline requires an error encoder"))?;

        for middleware in self.middleware.iter().rev() {
            endpoint = middleware(endpoint);
        }

        Ok(Pipeline {
            decode,
            endpoint,
            encode_response,
            encode_error,
        })
    }
}

impl<In, Req, Res, Out> Default for PipelineBuilder<In, Req, Res, Out>
where
    In: Send + 'static,
    Req: Send + 'static,
    Res: Send + 'static,
    Out: 'static,
{
    fn default() -> Self {
        Self::new()
    }
}
