use axum::http::StatusCode;
use serde_json::{Value, json};
use validator::{Validate, ValidationErrors};

use crate::utils::responder::ApiResponder;
use crate::utils::response::{ApiReply, ErrorEnvelope, ErrorInput};

pub const VALIDATION_ERROR: &str = "VALIDATION_ERROR";

/// Map validator errors to `{ field: [messages] }`.
pub fn field_errors(errors: &ValidationErrors) -> Value {
    let mut errors_map = serde_json::Map::new();
    for (field, errs) in errors.field_errors().iter() {
        let msgs: Vec<String> = errs
            .iter()
            .map(|e| e.message.clone().unwrap_or_else(|| "Invalid input".into()).to_string())
            .collect();
        errors_map.insert(field.to_string(), json!(msgs));
    }
    Value::Object(errors_map)
}

/// Validate a payload and, on failure, return a `400 VALIDATION_ERROR` envelope
/// so handlers can `?` it.
pub fn validate_payload<T: Validate>(
    api: &ApiResponder,
    payload: &T,
) -> Result<(), ApiReply<ErrorEnvelope>> {
    if let Err(errors) = payload.validate() {
        return Err(api.error(
            ErrorInput::structured(VALIDATION_ERROR, "Invalid input"),
            Some(StatusCode::BAD_REQUEST),
            Some(json!({ "errors": field_errors(&errors) })),
        ));
    }
    Ok(())
}
