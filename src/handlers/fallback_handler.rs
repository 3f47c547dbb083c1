use axum::http::{StatusCode, Uri};

use crate::utils::handler::HandlerResult;
use crate::utils::responder::ApiResponder;
use crate::utils::response::ErrorInput;

/// JSON 404 for any route the router does not know.
pub async fn not_found(api: ApiResponder, uri: Uri) -> HandlerResult {
    Err(api.fail(
        ErrorInput::structured("NOT_FOUND", format!("No route for {}", uri.path())),
        StatusCode::NOT_FOUND,
    ))
}
