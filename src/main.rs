use dotenvy::dotenv;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use backend_api_envelope::app::build_router;
use backend_api_envelope::config::AppConfig;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    // Load environment variables from .env file (if present)
    dotenv().ok();

    // Initialize tracing for structured logs
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "backend_api_envelope=debug,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::from_env()?;
    let addr = config.bind_addr()?;
    tracing::info!(version = %config.api_version, cors = ?config.cors, "Loaded configuration");

    let app = build_router(&config);

    tracing::info!("Listening on http://{}", addr);

    // Start the server and handle shutdown via ctrl-c
    let listener = tokio::net::TcpListener::bind(addr).await?;
    let server = axum::serve(listener, app.into_make_service());

    let shutdown_signal = async {
        tokio::signal::ctrl_c().await.ok();
        tracing::info!("Shutdown signal received");
    };

    tokio::select! {
        res = server => res?,
        _ = shutdown_signal => {
            tracing::info!("Shutdown requested; exiting");
        }
    };

    Ok(())
}
