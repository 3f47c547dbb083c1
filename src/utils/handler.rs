use crate::utils::response::{ApiReply, ErrorEnvelope, SuccessEnvelope};

/// Generic handler result type used across HTTP handlers to simplify signatures.
///
/// Default payload type is `serde_json::Value` for flexibility.
pub type HandlerResult<T = serde_json::Value> =
    Result<ApiReply<SuccessEnvelope<T>>, ApiReply<ErrorEnvelope>>;
