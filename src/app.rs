use axum::{Router, http::Method};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::config::{AppConfig, CorsPolicy};
use crate::handlers::fallback_handler::not_found;
use crate::middlewares::response_formatter::with_response_formatter;

fn cors_layer(policy: &CorsPolicy) -> Option<CorsLayer> {
    use axum::http::header::HeaderValue;

    let methods = [Method::GET, Method::POST, Method::PUT, Method::DELETE, Method::OPTIONS];
    match policy {
        CorsPolicy::Disabled => None,
        CorsPolicy::Any => Some(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(methods)
                .allow_headers(Any),
        ),
        CorsPolicy::Origins(list) => {
            let origins = list
                .iter()
                .filter_map(|s| HeaderValue::from_str(s).ok())
                .collect::<Vec<HeaderValue>>();
            Some(
                CorsLayer::new()
                    .allow_origin(AllowOrigin::list(origins))
                    .allow_methods(methods)
                    .allow_headers(Any),
            )
        }
    }
}

pub fn build_router(config: &AppConfig) -> Router {
    let mut app = Router::new()
        .merge(crate::routes::health_routes::health_routes())
        .merge(crate::routes::item_routes::item_routes())
        .fallback(not_found);

    // Envelope formatter: every handler (and the fallback) can extract an `ApiResponder`
    app = with_response_formatter(app, config.formatter());

    // NOTE: CORS sits outside the formatter so preflight requests are answered before it
    if let Some(cors) = cors_layer(&config.cors) {
        app = app.layer(cors);
    }

    app.layer(TraceLayer::new_for_http())
}

pub fn create_app() -> Result<Router, crate::config::ConfigError> {
    let config = AppConfig::from_env()?;
    Ok(build_router(&config))
}
