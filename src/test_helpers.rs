use axum::response::Response;

/// Read a response body as JSON. Intended for integration tests driving the router with `oneshot`.
pub async fn read_json_body(
    resp: Response,
) -> Result<serde_json::Value, Box<dyn std::error::Error + Send + Sync>> {
    let bytes = axum::body::to_bytes(resp.into_body(), 64 * 1024).await?;
    Ok(serde_json::from_slice(&bytes)?)
}
