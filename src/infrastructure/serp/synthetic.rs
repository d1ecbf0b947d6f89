//! Placeholder SERP used when no live provider can answer.

use async_trait::async_trait;
use url::form_urlencoded::byte_serialize;

use crate::domain::providers::{ProviderError, SerpProvider, SerpQuery, SerpResult};

/// Upper bound on synthetic results per query.
pub const MAX_SYNTHETIC_RESULTS: usize = 50;

const DOMAINS: &[&str] = &[
    "wikipedia.org",
    "reddit.com",
    "medium.com",
    "github.com",
    "stackoverflow.com",
    "quora.com",
    "youtube.com",
    "forbes.com",
    "hubspot.com",
    "searchenginejournal.com",
];

/// Deterministic results cycling through a fixed domain list.
#[derive(Debug, Clone, Copy, Default)]
pub struct SyntheticSerpProvider;

impl SyntheticSerpProvider {
    pub fn results(&self, keyword: &str, count: usize) -> Vec<SerpResult> {
        let encoded: String = byte_serialize(keyword.as_bytes()).collect();

        (0..count.min(MAX_SYNTHETIC_RESULTS))
            .map(|i| {
                let domain = DOMAINS[i % DOMAINS.len()];
                SerpResult {
                    position: i + 1,
                    title: format!("{keyword}: expert answers, result #{}", i + 1),
                    url: format!("https://{domain}/search?q={encoded}"),
                    snippet: format!(
                        "An in-depth look at \"{keyword}\" with the latest industry news and analysis..."
                    ),
                    domain: domain.to_owned(),
                }
            })
            .collect()
    }
}

#[async_trait]
impl SerpProvider for SyntheticSerpProvider {
    fn name(&self) -> &'static str {
        "synthetic"
    }

    async fn search(&self, query: &SerpQuery) -> Result<Vec<SerpResult>, ProviderError> {
        Ok(self.results(&query.keyword, query.count))
    }
}
