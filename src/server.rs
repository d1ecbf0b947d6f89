//! HTTP server initialization and runtime setup.
//!
//! Builds the outbound HTTP client, the credential store and the services,
//! then runs the Axum server until shutdown.

use crate::config::Config;
use crate::infrastructure::credentials::CredentialStore;
use crate::infrastructure::http::{HttpConnectionChecker, HttpPageFetcher};
use crate::infrastructure::serp::GoogleSerpProvider;
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - Outbound HTTP client with the configured timeouts
/// - Credential store seeded from the environment
/// - SEO, URL and connection test services
/// - Axum HTTP server with graceful shutdown on Ctrl+C
///
/// # Errors
///
/// Returns an error if:
/// - The HTTP client cannot be built
/// - The listen address is invalid or bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let fetcher = HttpPageFetcher::new(config.fetch_timeout(), config.validate_timeout())
        .context("Failed to build HTTP client")?;
    let google = GoogleSerpProvider::new(fetcher.client(), config.fetch_timeout());
    let checker = HttpConnectionChecker::new(fetcher.client(), config.validate_timeout());

    let credentials = Arc::new(CredentialStore::with_seeds(
        config.credential_seeds.iter().cloned(),
    ));

    let state = AppState::new(
        Arc::new(fetcher),
        Arc::new(google),
        Arc::new(checker),
        credentials,
    );
    let app = app_router(state, &config);

    let addr: SocketAddr = config
        .listen_addr
        .parse()
        .with_context(|| format!("Invalid LISTEN address '{}'", config.listen_addr))?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(
        listener,
        ServiceExt::<Request>::into_make_service_with_connect_info::<SocketAddr>(app),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {e}");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
