//! DTOs for SEO endpoints.

use serde::Deserialize;
use validator::Validate;

use super::not_blank;
use crate::domain::providers::GoogleCredentials;

fn default_crawl_limit() -> usize {
    10
}

fn default_serp_count() -> usize {
    10
}

#[derive(Debug, Deserialize, Validate)]
pub struct CrawlRequest {
    #[serde(default)]
    #[validate(custom(function = "not_blank"))]
    pub url: String,

    #[serde(default = "default_crawl_limit")]
    #[validate(range(min = 1, max = 100))]
    pub limit: usize,
}

#[derive(Deserialize, Validate)]
pub struct SerpRequest {
    #[serde(default)]
    #[validate(custom(function = "not_blank"))]
    pub keyword: String,

    /// Clamped by the provider; the synthetic fallback returns at most 50.
    #[serde(default = "default_serp_count")]
    #[validate(range(min = 1, max = 1000))]
    pub count: usize,

    /// Two-letter country code sent to the live provider as `gl`.
    pub location: Option<String>,

    pub google_search_api_key: Option<String>,

    pub google_search_cx: Option<String>,
}

impl SerpRequest {
    /// Credentials supplied with the request, if both parts are non-blank.
    pub fn credentials(&self) -> Option<GoogleCredentials> {
        let api_key = self.google_search_api_key.as_deref()?.trim();
        let cx = self.google_search_cx.as_deref()?.trim();
        if api_key.is_empty() || cx.is_empty() {
            return None;
        }
        Some(GoogleCredentials {
            api_key: api_key.to_owned(),
            cx: cx.to_owned(),
        })
    }
}

/// Body of `/sitemap` and `/robots`.
#[derive(Debug, Deserialize, Validate)]
pub struct SiteRequest {
    #[serde(default)]
    #[validate(custom(function = "not_blank"))]
    pub url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serp_request_credentials_need_both_parts() {
        let request: SerpRequest = serde_json::from_value(serde_json::json!({
            "keyword": "k",
            "google_search_api_key": "key",
            "google_search_cx": "  "
        }))
        .unwrap();
        assert!(request.credentials().is_none());

        let request: SerpRequest = serde_json::from_value(serde_json::json!({
            "keyword": "k",
            "google_search_api_key": " key ",
            "google_search_cx": "cx"
        }))
        .unwrap();
        let credentials = request.credentials().unwrap();
        assert_eq!(credentials.api_key, "key");
        assert_eq!(request.count, 10);
    }
}
