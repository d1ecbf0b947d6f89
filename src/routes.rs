//! Top-level router configuration combining API and web routes.
//!
//! # Route Structure
//!
//! - `GET  /`             - Tool page
//! - `GET  /favicon.ico`  - Empty response
//! - `GET  /health`       - Liveness probe
//! - `/api/*`             - JSON API (CORS, per-IP rate limiting)
//! - `/static/*`          - Static assets
//!
//! # Middleware
//!
//! - **Tracing** - Request span and latency logging
//! - **Rate limiting** - Per-IP token bucket on `/api`
//! - **CORS** - Permissive on `/api`
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::health_handler;
use crate::api::middleware::{rate_limit, tracing};
use crate::config::Config;
use crate::state::AppState;
use crate::web;
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::cors::CorsLayer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::services::ServeDir;

/// Constructs the application router with all routes and middleware.
///
/// Rate limiting keys on the peer address, so the result must be served
/// with `into_make_service_with_connect_info::<SocketAddr>()`.
pub fn app_router(state: AppState, config: &Config) -> NormalizePath<Router> {
    normalize_paths(app_routes(state, config))
}

/// Strips trailing slashes before routing.
///
/// Must wrap the whole router; as a router layer it would run after route
/// matching.
pub fn normalize_paths(router: Router) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(router)
}

/// Routes and middleware without path normalization.
pub fn app_routes(state: AppState, config: &Config) -> Router {
    let api_router = api::routes::api_routes()
        .layer(rate_limit::layer(
            config.rate_limit_per_second,
            config.rate_limit_burst,
        ))
        .layer(CorsLayer::permissive());

    Router::new()
        .route("/health", get(health_handler))
        .nest("/api", api_router)
        .merge(web::routes::public_routes())
        .nest_service("/static", ServeDir::new(&config.static_dir))
        .with_state(state)
        .layer(tracing::layer())
}
