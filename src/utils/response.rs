use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Error code used when the caller reports a plain message.
pub const INTERNAL_ERROR: &str = "INTERNAL_ERROR";

/// Bookkeeping attached to every envelope.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Metadata {
    pub timestamp: String,
    pub version: String,
    pub request_id: String,
    pub response_time: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub pagination: Option<Pagination>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    pub page: u64,
    pub limit: u64,
    pub total: u64,
}

/// Options accepted by the success path.
#[derive(Debug, Clone, Default)]
pub struct SuccessOptions {
    pub pagination: Option<Pagination>,
}

impl SuccessOptions {
    pub fn with_pagination(pagination: Pagination) -> Self {
        Self {
            pagination: Some(pagination),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SuccessEnvelope<T> {
    pub success: bool,
    pub data: T,
    pub metadata: Metadata,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub details: Option<Value>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorEnvelope {
    pub success: bool,
    pub error: ErrorBody,
    pub metadata: Metadata,
}

/// What a handler reports on the error path.
///
/// A bare message is reported under [`INTERNAL_ERROR`]; a structured error
/// keeps its own code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorInput {
    Message(String),
    Structured { code: String, message: String },
}

impl ErrorInput {
    pub fn structured(code: impl Into<String>, message: impl Into<String>) -> Self {
        ErrorInput::Structured {
            code: code.into(),
            message: message.into(),
        }
    }

    /// Resolve into the wire `error` object, attaching `details` when given.
    pub fn into_body(self, details: Option<Value>) -> ErrorBody {
        let (code, message) = match self {
            ErrorInput::Message(message) => (INTERNAL_ERROR.to_string(), message),
            ErrorInput::Structured { code, message } => (code, message),
        };
        ErrorBody {
            code,
            message,
            details,
        }
    }
}

impl From<&str> for ErrorInput {
    fn from(message: &str) -> Self {
        ErrorInput::Message(message.to_string())
    }
}

impl From<String> for ErrorInput {
    fn from(message: String) -> Self {
        ErrorInput::Message(message)
    }
}

/// A status code paired with an envelope; rendering it sets both on the response.
#[derive(Debug)]
pub struct ApiReply<B> {
    status: StatusCode,
    body: B,
}

impl<B> ApiReply<B> {
    pub fn new(status: StatusCode, body: B) -> Self {
        Self { status, body }
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn body(&self) -> &B {
        &self.body
    }

    pub fn into_parts(self) -> (StatusCode, B) {
        (self.status, self.body)
    }
}

impl<B: Serialize> IntoResponse for ApiReply<B> {
    fn into_response(self) -> Response {
        (self.status, Json(self.body)).into_response()
    }
}
