#![recursion_limit = "256"]

mod config;
mod error;
mod routes;
mod state;

use std::process::ExitCode;

use tracing_subscriber::EnvFilter;

use crate::config::ServerConfig;
use crate::error::ServerError;

#[tokio::main]
async fn main() -> ExitCode {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "server failed");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), ServerError> {
    let config = ServerConfig::from_env()?;
    let port = config.port;
    match config.upstream_url.as_deref() {
        Some(upstream) => tracing::info!(%upstream, "forwarding /api"),
        None => tracing::warn!("API_UPSTREAM_URL not set; /api requests will answer 404"),
    }

    let state = state::AppState::new(config)?;
    let app = routes::app(state)?;
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}")).await?;

    tracing::info!(%port, "rental-reviews listening");
    axum::serve(listener, app).await?;
    Ok(())
}
