pub mod health_routes;
pub mod item_routes;
