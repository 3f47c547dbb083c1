pub mod fallback_handler;
pub mod health_handler;
pub mod item_handler;
