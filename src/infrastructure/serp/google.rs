//! Google Custom Search JSON API.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;
use url::Url;

use crate::domain::providers::{
    GoogleCredentials, ProviderError, SerpProvider, SerpQuery, SerpResult,
};

pub const GOOGLE_SEARCH_ENDPOINT: &str = "https://www.googleapis.com/customsearch/v1";

/// The API returns at most ten results per request.
pub const MAX_RESULTS_PER_REQUEST: usize = 10;

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    items: Vec<SearchItem>,
}

#[derive(Debug, Deserialize)]
struct SearchItem {
    #[serde(default)]
    title: String,
    link: String,
    #[serde(default)]
    snippet: String,
}

pub struct GoogleSerpProvider {
    client: Client,
    endpoint: String,
    timeout: Duration,
}

impl GoogleSerpProvider {
    pub fn new(client: Client, timeout: Duration) -> Self {
        Self {
            client,
            endpoint: GOOGLE_SEARCH_ENDPOINT.to_owned(),
            timeout,
        }
    }

    /// Points the provider at another base URL.
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }
}

fn into_results(response: SearchResponse) -> Vec<SerpResult> {
    response
        .items
        .into_iter()
        .enumerate()
        .map(|(i, item)| SerpResult {
            position: i + 1,
            domain: Url::parse(&item.link)
                .ok()
                .and_then(|u| u.host_str().map(str::to_owned))
                .unwrap_or_default(),
            title: item.title,
            url: item.link,
            snippet: item.snippet,
        })
        .collect()
}

/// Country code for the `gl` parameter.
///
/// Only two-letter codes (`us`, `DE`) are understood by the API; anything
/// else is dropped.
fn country_code(location: &str) -> Option<String> {
    let code = location.trim();
    (code.len() == 2 && code.chars().all(|c| c.is_ascii_alphabetic()))
        .then(|| code.to_ascii_lowercase())
}

fn query_params(
    query: &SerpQuery,
    credentials: &GoogleCredentials,
) -> Vec<(&'static str, String)> {
    let mut params = vec![
        ("key", credentials.api_key.clone()),
        ("cx", credentials.cx.clone()),
        ("q", query.keyword.clone()),
        (
            "num",
            query.count.clamp(1, MAX_RESULTS_PER_REQUEST).to_string(),
        ),
    ];

    if let Some(location) = query.location.as_deref() {
        match country_code(location) {
            Some(gl) => params.push(("gl", gl)),
            None => debug!(location, "Ignoring location that is not a country code"),
        }
    }

    params
}

#[async_trait]
impl SerpProvider for GoogleSerpProvider {
    fn name(&self) -> &'static str {
        "Google"
    }

    async fn search(&self, query: &SerpQuery) -> Result<Vec<SerpResult>, ProviderError> {
        let credentials = query
            .credentials
            .as_ref()
            .ok_or(ProviderError::MissingCredentials)?;

        let response = self
            .client
            .get(&self.endpoint)
            .query(&query_params(query, credentials))
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| ProviderError::Request(e.without_url().to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ProviderError::Status(status.as_u16()));
        }

        let body: SearchResponse = response
            .json()
            .await
            .map_err(|e| ProviderError::Decode(e.without_url().to_string()))?;

        let results = into_results(body);
        debug!(keyword = %query.keyword, count = results.len(), "Google search succeeded");
        Ok(results)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn credentials() -> GoogleCredentials {
        GoogleCredentials {
            api_key: "k".into(),
            cx: "c".into(),
        }
    }

    fn query(location: Option<&str>) -> SerpQuery {
        SerpQuery {
            keyword: "rust".into(),
            count: 25,
            location: location.map(str::to_owned),
            credentials: None,
        }
    }

    #[test]
    fn test_country_code() {
        assert_eq!(country_code(" DE "), Some("de".to_string()));
        assert_eq!(country_code("us"), Some("us".to_string()));
        assert_eq!(country_code("Berlin"), None);
        assert_eq!(country_code("1a"), None);
        assert_eq!(country_code(""), None);
    }

    #[test]
    fn test_query_params_send_location_as_gl() {
        let params = query_params(&query(Some("GB")), &credentials());
        assert!(params.contains(&("gl", "gb".to_string())));
        assert!(params.contains(&("num", "10".to_string())));
        assert!(params.contains(&("q", "rust".to_string())));
    }

    #[test]
    fn test_query_params_skip_unusable_location() {
        let params = query_params(&query(Some("New York")), &credentials());
        assert!(params.iter().all(|(name, _)| *name != "gl"));

        let params = query_params(&query(None), &credentials());
        assert_eq!(params.len(), 4);
    }

    #[test]
    fn test_into_results_ranks_and_extracts_domain() {
        let body: SearchResponse = serde_json::from_value(serde_json::json!({
            "items": [
                {"title": "Rust", "link": "https://www.rust-lang.org/learn", "snippet": "Learn"},
                {"title": "Crates", "link": "https://crates.io/"}
            ]
        }))
        .unwrap();

        let results = into_results(body);
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].position, 1);
        assert_eq!(results[0].domain, "www.rust-lang.org");
        assert_eq!(results[1].position, 2);
        assert_eq!(results[1].snippet, "");
    }

    #[test]
    fn test_into_results_without_items() {
        let body: SearchResponse = serde_json::from_str("{}").unwrap();
        assert!(into_results(body).is_empty());
    }

    #[tokio::test]
    async fn test_search_requires_credentials() {
        let provider = GoogleSerpProvider::new(Client::new(), Duration::from_secs(1));
        let query = SerpQuery {
            keyword: "rust".into(),
            count: 5,
            location: None,
            credentials: None,
        };
        assert_eq!(
            provider.search(&query).await,
            Err(ProviderError::MissingCredentials)
        );

        // unroutable endpoint so no real request leaves the machine
        let provider = provider.with_endpoint("http://127.0.0.1:9/customsearch");
        let query = SerpQuery {
            credentials: Some(credentials()),
            ..query
        };
        assert!(matches!(
            provider.search(&query).await,
            Err(ProviderError::Request(_))
        ));
    }
}
