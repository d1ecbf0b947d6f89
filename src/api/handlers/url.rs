//! Handlers for URL tool endpoints.

use axum::extract::State;
use validator::Validate;

use crate::api::dto::ApiResponse;
use crate::api::dto::url::{
    ParseUrlsResponse, UrlListRequest, ValidateUrlsRequest, ValidateUrlsResponse,
};
use crate::api::extract::ApiJson;
use crate::application::services::ValidationStatistics;
use crate::domain::urls::{
    CleanedUrl, DomainGroup, analyze_domains, cleanup_url, parse_statistics, parse_url,
};
use crate::error::AppError;
use crate::state::AppState;

/// Splits URLs into protocol, domain, path, query and fragment.
///
/// # Endpoint
///
/// `POST /api/url/parse`
///
/// Unparseable entries are reported with `is_valid: false` and an `error`
/// instead of failing the request.
pub async fn parse_handler(
    ApiJson(payload): ApiJson<UrlListRequest>,
) -> Result<ApiResponse<ParseUrlsResponse>, AppError> {
    payload.validate()?;

    let urls: Vec<_> = payload.urls.iter().map(|u| parse_url(u)).collect();
    let statistics = parse_statistics(&urls);
    let message = format!(
        "Parsed {} URLs, {} valid",
        statistics.total_urls, statistics.valid_urls
    );

    Ok(ApiResponse::ok(ParseUrlsResponse { urls, statistics }).with_message(message))
}

/// Checks URLs for reachability, redirects or structure.
///
/// # Endpoint
///
/// `POST /api/url/validate`
///
/// # Request Body
///
/// ```json
/// { "urls": ["https://example.com"], "type": "status" }
/// ```
///
/// `structure` only checks the syntax; `status` and `redirect` issue one
/// request per URL, bounded by the validation timeout.
pub async fn validate_handler(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<ValidateUrlsRequest>,
) -> Result<ApiResponse<ValidateUrlsResponse>, AppError> {
    payload.validate()?;

    let urls = state.url_service.validate(&payload.urls, payload.mode).await;
    let statistics = ValidationStatistics::from_checks(&urls, payload.mode);
    let message = format!(
        "Validated {} URLs, {} valid",
        statistics.total_urls, statistics.valid_urls
    );

    Ok(ApiResponse::ok(ValidateUrlsResponse { urls, statistics }).with_message(message))
}

/// Strips tracking parameters.
///
/// # Endpoint
///
/// `POST /api/url/cleanup`
pub async fn cleanup_handler(
    ApiJson(payload): ApiJson<UrlListRequest>,
) -> Result<ApiResponse<Vec<CleanedUrl>>, AppError> {
    payload.validate()?;

    let cleaned: Vec<CleanedUrl> = payload.urls.iter().map(|u| cleanup_url(u)).collect();
    let removed: usize = cleaned.iter().map(|c| c.removed_params.len()).sum();
    let message = format!(
        "Cleaned {} URLs, removed {} tracking parameters",
        cleaned.len(),
        removed
    );

    Ok(ApiResponse::ok(cleaned).with_message(message))
}

/// Groups URLs by root domain.
///
/// # Endpoint
///
/// `POST /api/url/domain-analysis`
pub async fn domain_analysis_handler(
    ApiJson(payload): ApiJson<UrlListRequest>,
) -> Result<ApiResponse<Vec<DomainGroup>>, AppError> {
    payload.validate()?;

    let groups = analyze_domains(&payload.urls);
    let message = format!("Found {} distinct domains", groups.len());

    Ok(ApiResponse::ok(groups).with_message(message))
}
