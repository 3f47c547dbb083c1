use axum::{Router, routing::get};

// Import item handlers
use crate::handlers::item_handler::{index, show};

pub fn item_routes() -> Router {
    Router::new()
        .route("/items", get(index))
        .route("/items/{id}", get(show))
}
