//! Handlers for health check endpoints.

use axum::Json;
use chrono::Utc;

use crate::api::dto::ApiResponse;
use crate::api::dto::health::HealthResponse;

fn current_health() -> HealthResponse {
    HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
        timestamp: Utc::now(),
    }
}

/// Liveness probe for load balancers.
///
/// # Endpoint
///
/// `GET /health`
///
/// The service has no backing stores, so any response means healthy.
///
/// # Response
///
/// ```json
/// {
///   "status": "healthy",
///   "version": "0.1.0",
///   "timestamp": "2025-01-15T10:30:00Z"
/// }
/// ```
pub async fn health_handler() -> Json<HealthResponse> {
    Json(current_health())
}

/// Same probe wrapped in the API envelope.
///
/// # Endpoint
///
/// `GET /api/health`
pub async fn api_health_handler() -> ApiResponse<HealthResponse> {
    ApiResponse::ok(current_health())
}
