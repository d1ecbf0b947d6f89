//! API route configuration.
//!
//! Routes are relative; [`crate::routes::app_router`] nests them under
//! `/api` and adds CORS and rate limiting.

use crate::api::handlers::{
    ads_handler, api_health_handler, batch_ads_handler, cleanup_handler, config_status_handler,
    content_optimizer_handler, crawl_handler, csv_handler, delete_key_handler,
    domain_analysis_handler, extract_handler, json_handler, keywords_handler, parse_handler,
    report_handler, robots_handler, sentiment_handler, serp_handler, set_keys_handler,
    sitemap_handler, stats_handler, test_connection_handler, validate_handler,
    word_frequency_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{delete, get, post},
};

/// All `/api` routes.
///
/// # Endpoints
///
/// - `GET    /health`                   - Liveness in the envelope
/// - `POST   /text/word-frequency`      - Word frequency table
/// - `POST   /text/extract`             - URLs, emails, hashtags, mentions, numbers
/// - `POST   /text/stats`               - Character/word/sentence statistics
/// - `POST   /text/sentiment`           - Lexicon sentiment
/// - `POST   /sem/keywords`             - Keyword expansion
/// - `POST   /sem/ads`                  - Ad headline variants
/// - `POST   /sem/ads/batch`            - One headline per product
/// - `POST   /url/parse`                - URL components
/// - `POST   /url/validate`             - Reachability / redirect / structure checks
/// - `POST   /url/cleanup`              - Tracking parameter removal
/// - `POST   /url/domain-analysis`      - Grouping by root domain
/// - `POST   /seo/crawl`                - On-page SEO signals
/// - `POST   /seo/serp`                 - Search results
/// - `POST   /seo/sitemap`              - Sitemap entries
/// - `POST   /seo/robots`               - robots.txt rules
/// - `POST   /social/content-optimizer` - Post scoring and suggestions
/// - `POST   /export/csv`               - CSV export
/// - `POST   /export/json`              - JSON export
/// - `POST   /export/report`            - HTML or Markdown report
/// - `GET    /config/status`            - Credential status
/// - `POST   /config/keys`              - Store credentials
/// - `DELETE /config/keys/{key}`        - Remove one credential
/// - `POST   /config/test/{api}`        - Test stored credentials against the live API
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(api_health_handler))
        .nest("/text", text_routes())
        .nest("/sem", sem_routes())
        .nest("/url", url_routes())
        .nest("/seo", seo_routes())
        .nest("/social", social_routes())
        .nest("/export", export_routes())
        .nest("/config", config_routes())
}

fn text_routes() -> Router<AppState> {
    Router::new()
        .route("/word-frequency", post(word_frequency_handler))
        .route("/extract", post(extract_handler))
        .route("/stats", post(stats_handler))
        .route("/sentiment", post(sentiment_handler))
}

fn sem_routes() -> Router<AppState> {
    Router::new()
        .route("/keywords", post(keywords_handler))
        .route("/ads", post(ads_handler))
        .route("/ads/batch", post(batch_ads_handler))
}

fn url_routes() -> Router<AppState> {
    Router::new()
        .route("/parse", post(parse_handler))
        .route("/validate", post(validate_handler))
        .route("/cleanup", post(cleanup_handler))
        .route("/domain-analysis", post(domain_analysis_handler))
}

fn seo_routes() -> Router<AppState> {
    Router::new()
        .route("/crawl", post(crawl_handler))
        .route("/serp", post(serp_handler))
        .route("/sitemap", post(sitemap_handler))
        .route("/robots", post(robots_handler))
}

fn social_routes() -> Router<AppState> {
    Router::new().route("/content-optimizer", post(content_optimizer_handler))
}

fn export_routes() -> Router<AppState> {
    Router::new()
        .route("/csv", post(csv_handler))
        .route("/json", post(json_handler))
        .route("/report", post(report_handler))
}

fn config_routes() -> Router<AppState> {
    Router::new()
        .route("/status", get(config_status_handler))
        .route("/keys", post(set_keys_handler))
        .route("/keys/{key}", delete(delete_key_handler))
        .route("/test/{api}", post(test_connection_handler))
}
