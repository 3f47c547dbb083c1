use std::time::{Duration, Instant};

use axum::{
    Router,
    extract::{Request, State},
    http::{HeaderName, HeaderValue},
    middleware::{self, Next},
    response::Response,
};
use tower_http::request_id::PropagateRequestIdLayer;
use uuid::Uuid;

/// Header carrying the same id as `metadata.requestId`.
pub const REQUEST_ID_HEADER: HeaderName = HeaderName::from_static("x-request-id");

/// Process-wide settings shared by every request passing the formatter.
#[derive(Clone, Debug)]
pub struct FormatterConfig {
    pub version: String,
}

impl FormatterConfig {
    pub fn new(version: impl Into<String>) -> Self {
        Self {
            version: version.into(),
        }
    }
}

impl Default for FormatterConfig {
    fn default() -> Self {
        Self::new(env!("CARGO_PKG_VERSION"))
    }
}

/// Per-request state captured when the formatter runs.
#[derive(Clone, Debug)]
pub struct ResponseContext {
    request_id: String,
    version: String,
    started_at: Instant,
}

impl ResponseContext {
    pub fn new(version: impl Into<String>) -> Self {
        Self {
            request_id: Uuid::new_v4().to_string(),
            version: version.into(),
            started_at: Instant::now(),
        }
    }

    pub fn request_id(&self) -> &str {
        &self.request_id
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn elapsed(&self) -> Duration {
        self.started_at.elapsed()
    }
}

/// Wrap `router` with the formatter and echo its request id on every response.
///
/// `PropagateRequestIdLayer` sits inside the formatter so it copies the id the
/// formatter wrote into the request headers.
pub fn with_response_formatter(router: Router, config: FormatterConfig) -> Router {
    router
        .layer(PropagateRequestIdLayer::new(REQUEST_ID_HEADER))
        .layer(middleware::from_fn_with_state(config, response_formatter))
}

/// Attach a fresh [`ResponseContext`] to the request, then always hand over to `next`.
///
/// Any client-supplied `x-request-id` is replaced with the fresh id.
/// Handlers pick the context up through the `ApiResponder` extractor.
pub async fn response_formatter(
    State(config): State<FormatterConfig>,
    mut req: Request,
    next: Next,
) -> Response {
    let ctx = ResponseContext::new(config.version);
    let method = req.method().clone();
    let path = req.uri().path().to_string();
    match HeaderValue::from_str(ctx.request_id()) {
        Ok(value) => {
            req.headers_mut().insert(REQUEST_ID_HEADER, value);
        }
        Err(e) => tracing::warn!("response_formatter: invalid request id header: {}", e),
    }
    req.extensions_mut().insert(ctx.clone());

    let res = next.run(req).await;

    tracing::debug!(
        request_id = %ctx.request_id(),
        %method,
        path = %path,
        status = res.status().as_u16(),
        elapsed_ms = ctx.elapsed().as_millis() as u64,
        "response formatted"
    );

    res
}
