use serde_json::json;

use crate::utils::handler::HandlerResult;
use crate::utils::responder::ApiResponder;

pub async fn health(api: ApiResponder) -> HandlerResult {
    Ok(api.ok(json!({ "status": "ok", "version": api.version() })))
}
