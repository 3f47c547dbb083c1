use std::convert::Infallible;

use axum::{
    extract::FromRequestParts,
    http::{StatusCode, request::Parts},
};
use chrono::{SecondsFormat, Utc};
use serde::Serialize;
use serde_json::Value;

use crate::middlewares::response_formatter::{FormatterConfig, ResponseContext};
use crate::utils::response::{
    ApiReply, ErrorEnvelope, ErrorInput, Metadata, Pagination, SuccessEnvelope, SuccessOptions,
};

/// Builds the success and error envelopes for the current request.
///
/// Extract it in any handler behind the `response_formatter` layer:
///
/// ```ignore
/// async fn show(api: ApiResponder) -> impl IntoResponse {
///     api.ok(json!({ "message": "Success" }))
/// }
/// ```
#[derive(Debug, Clone)]
pub struct ApiResponder {
    ctx: ResponseContext,
}

impl ApiResponder {
    pub fn new(ctx: ResponseContext) -> Self {
        Self { ctx }
    }

    pub fn request_id(&self) -> &str {
        self.ctx.request_id()
    }

    pub fn version(&self) -> &str {
        self.ctx.version()
    }

    fn metadata(&self, pagination: Option<Pagination>) -> Metadata {
        Metadata {
            timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
            version: self.ctx.version().to_string(),
            request_id: self.ctx.request_id().to_string(),
            response_time: format!("{}ms", self.ctx.elapsed().as_millis()),
            pagination,
        }
    }

    /// Success envelope; status defaults to `200 OK`.
    pub fn success<T: Serialize>(
        &self,
        data: T,
        options: SuccessOptions,
        status: Option<StatusCode>,
    ) -> ApiReply<SuccessEnvelope<T>> {
        let envelope = SuccessEnvelope {
            success: true,
            data,
            metadata: self.metadata(options.pagination),
        };
        ApiReply::new(status.unwrap_or(StatusCode::OK), envelope)
    }

    /// Error envelope; status defaults to `500 Internal Server Error`.
    ///
    /// `details` is attached for both message and structured inputs.
    pub fn error(
        &self,
        input: impl Into<ErrorInput>,
        status: Option<StatusCode>,
        details: Option<Value>,
    ) -> ApiReply<ErrorEnvelope> {
        let status = status.unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        let error = input.into().into_body(details);
        if status.is_server_error() {
            tracing::warn!(request_id = %self.request_id(), code = %error.code, "{}", error.message);
        }
        let envelope = ErrorEnvelope {
            success: false,
            error,
            metadata: self.metadata(None),
        };
        ApiReply::new(status, envelope)
    }

    pub fn ok<T: Serialize>(&self, data: T) -> ApiReply<SuccessEnvelope<T>> {
        self.success(data, SuccessOptions::default(), None)
    }

    pub fn fail(&self, input: impl Into<ErrorInput>, status: StatusCode) -> ApiReply<ErrorEnvelope> {
        self.error(input, Some(status), None)
    }
}

impl<S> FromRequestParts<S> for ApiResponder
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let ctx = match parts.extensions.get::<ResponseContext>() {
            Some(ctx) => ctx.clone(),
            None => {
                // Route is not behind the formatter layer; start timing now.
                tracing::warn!("ApiResponder: no response context on request, creating one");
                ResponseContext::new(FormatterConfig::default().version)
            }
        };
        Ok(Self::new(ctx))
    }
}
