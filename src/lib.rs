pub mod config;
pub mod routes;
pub mod handlers;
pub mod schemas;
pub mod utils;
pub mod middlewares;
pub mod models;

pub mod app;
pub mod test_helpers;

pub use app::{build_router, create_app};
pub use middlewares::response_formatter::{FormatterConfig, ResponseContext, response_formatter, with_response_formatter};
pub use utils::{ApiReply, ApiResponder, ErrorInput, Pagination, SuccessOptions};
