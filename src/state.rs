//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! holds the parsed config and one pooled `reqwest` client used for every
//! forwarded `/api` request.

use std::sync::Arc;
use std::time::Duration;

use crate::config::ServerConfig;
use crate::error::ServerError;

#[derive(Clone)]
pub struct AppState {
    pub http: reqwest::Client,
    pub config: Arc<ServerConfig>,
}

impl AppState {
    /// Build the upstream HTTP client with the configured timeout.
    ///
    /// # Errors
    ///
    /// Returns `ServerError::HttpClientBuild` if the TLS backend cannot be
    /// initialized.
    pub fn new(config: ServerConfig) -> Result<Self, ServerError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.upstream_timeout_secs))
            .build()
            .map_err(|e| ServerError::HttpClientBuild(e.to_string()))?;
        Ok(Self { http, config: Arc::new(config) })
    }
}
