//! Handlers for SEO endpoints.
//!
//! Each endpoint answers with live data when the target (or the search
//! provider) responds, and with synthetic data otherwise. The message
//! states which one the caller got.

use axum::extract::State;
use validator::Validate;

use crate::api::dto::ApiResponse;
use crate::api::dto::seo::{CrawlRequest, SerpRequest, SiteRequest};
use crate::api::extract::ApiJson;
use crate::domain::providers::SerpResult;
use crate::domain::seo::{CrawlResult, RobotsRule, SitemapEntry};
use crate::domain::urls::parse_http_url;
use crate::error::AppError;
use crate::state::AppState;

/// Extracts on-page SEO signals from a URL.
///
/// # Endpoint
///
/// `POST /api/seo/crawl`
///
/// # Request Body
///
/// ```json
/// { "url": "https://example.com", "limit": 10 }
/// ```
///
/// The first entry describes the requested page; up to four synthetic
/// follow-up pages are appended. This is not a crawler.
pub async fn crawl_handler(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<CrawlRequest>,
) -> Result<ApiResponse<Vec<CrawlResult>>, AppError> {
    payload.validate()?;
    let url = parse_http_url(&payload.url)?;

    let pages = state.seo_service.crawl(&url, payload.limit).await;
    let message = if pages.is_synthetic() {
        format!("Could not fetch {url}, returned {} synthetic page", pages.data.len())
    } else {
        format!("Analyzed {} pages", pages.data.len())
    };

    Ok(ApiResponse::ok(pages.data).with_message(message))
}

/// Ranked search results for a keyword.
///
/// # Endpoint
///
/// `POST /api/seo/serp`
///
/// # Request Body
///
/// ```json
/// {
///   "keyword": "running shoes",
///   "count": 10,
///   "google_search_api_key": "optional",
///   "google_search_cx": "optional"
/// }
/// ```
///
/// Credentials in the body take precedence over stored ones.
pub async fn serp_handler(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<SerpRequest>,
) -> Result<ApiResponse<Vec<SerpResult>>, AppError> {
    payload.validate()?;

    let credentials = payload.credentials();
    let keyword = payload.keyword.trim();
    let results = state
        .seo_service
        .serp(keyword, payload.count, payload.location, credentials)
        .await;

    let message = if results.is_synthetic() {
        format!(
            "Synthetic results for \"{keyword}\" (configure {} credentials for live data)",
            state.seo_service.live_provider_name()
        )
    } else {
        format!(
            "Fetched top {} results for \"{keyword}\" ({})",
            results.data.len(),
            state.seo_service.live_provider_name()
        )
    };

    Ok(ApiResponse::ok(results.data).with_message(message))
}

/// Parses a sitemap.
///
/// # Endpoint
///
/// `POST /api/seo/sitemap`
pub async fn sitemap_handler(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<SiteRequest>,
) -> Result<ApiResponse<Vec<SitemapEntry>>, AppError> {
    payload.validate()?;
    let url = parse_http_url(&payload.url)?;

    let entries = state.seo_service.sitemap(&url).await;
    let message = format!(
        "Parsed {}sitemap with {} URLs",
        if entries.is_synthetic() { "synthetic " } else { "" },
        entries.data.len()
    );

    Ok(ApiResponse::ok(entries.data).with_message(message))
}

/// Parses `robots.txt` at the origin of a URL.
///
/// # Endpoint
///
/// `POST /api/seo/robots`
pub async fn robots_handler(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<SiteRequest>,
) -> Result<ApiResponse<Vec<RobotsRule>>, AppError> {
    payload.validate()?;
    let url = parse_http_url(&payload.url)?;

    let rules = state.seo_service.robots(&url).await;
    let message = format!(
        "Parsed {}robots.txt with {} rules",
        if rules.is_synthetic() { "synthetic " } else { "" },
        rules.data.len()
    );

    Ok(ApiResponse::ok(rules.data).with_message(message))
}
