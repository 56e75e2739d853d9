mod config;
mod routes;

use config::{HostConfig, HostError};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    if let Err(e) = run().await {
        tracing::error!(error = %e, "cdn-explorer stopped");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), HostError> {
    // A missing .env is the normal case outside local development.
    if let Err(e) = dotenvy::dotenv() {
        tracing::debug!(error = %e, "no .env loaded");
    }

    let config = HostConfig::from_env()?;
    let app = routes::app(&config)?;

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|source| HostError::Bind { addr, source })?;

    tracing::info!(port = config.port, "cdn-explorer listening");
    axum::serve(listener, app).await.map_err(HostError::Serve)
}
