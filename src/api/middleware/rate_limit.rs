//! Per-IP rate limiting for the `/api` tree.

use governor::clock::QuantaInstant;
use governor::middleware::NoOpMiddleware;
use std::sync::Arc;
use tower_governor::{
    GovernorLayer, governor::GovernorConfigBuilder, key_extractor::PeerIpKeyExtractor,
};

/// Layer type produced by [`layer`].
pub type ApiRateLimit =
    GovernorLayer<PeerIpKeyExtractor, NoOpMiddleware<QuantaInstant>, axum::body::Body>;

/// Creates a token-bucket limiter keyed by the socket peer address.
///
/// One token is replenished every `refill_secs` seconds, up to `burst`
/// tokens. Requests exceeding the limit receive `429 Too Many Requests`.
///
/// `refill_secs` is handed to `GovernorConfigBuilder::per_second`, which
/// takes the replenish interval in seconds, not a rate.
///
/// The server must be started with
/// `into_make_service_with_connect_info::<SocketAddr>()` so the peer
/// address is available.
///
/// # Panics
///
/// Panics if either value is zero; [`crate::config::Config::validate`]
/// rejects such configurations.
///
/// # Example
///
/// ```rust,ignore
/// let api = api::routes::api_routes().layer(rate_limit::layer(2, 100));
/// ```
pub fn layer(refill_secs: u64, burst: u32) -> ApiRateLimit {
    let governor_conf = Arc::new(
        GovernorConfigBuilder::default()
            .per_second(refill_secs)
            .burst_size(burst)
            .finish()
            .expect("rate limit values are validated as non-zero"),
    );

    GovernorLayer::new(governor_conf)
}
