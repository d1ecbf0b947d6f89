//! Provider trait for search engine result pages.

use async_trait::async_trait;
use serde::Serialize;

/// Google Custom Search credentials.
#[derive(Clone, PartialEq, Eq)]
pub struct GoogleCredentials {
    pub api_key: String,
    pub cx: String,
}

impl std::fmt::Debug for GoogleCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GoogleCredentials")
            .field("api_key", &"***")
            .field("cx", &self.cx)
            .finish()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SerpQuery {
    pub keyword: String,
    pub count: usize,
    pub location: Option<String>,
    pub credentials: Option<GoogleCredentials>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SerpResult {
    /// 1-based rank.
    pub position: usize,
    pub title: String,
    pub url: String,
    pub snippet: String,
    pub domain: String,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProviderError {
    #[error("credentials are not configured")]
    MissingCredentials,

    #[error("provider returned HTTP {0}")]
    Status(u16),

    #[error("request failed: {0}")]
    Request(String),

    #[error("unexpected response: {0}")]
    Decode(String),
}

/// Source of ranked search results for a keyword.
///
/// # Implementations
///
/// - [`crate::infrastructure::serp::GoogleSerpProvider`] - Google Custom Search JSON API
/// - [`crate::infrastructure::serp::SyntheticSerpProvider`] - deterministic
///   placeholder results, never fails
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SerpProvider: Send + Sync {
    /// Short name used in logs and response messages.
    fn name(&self) -> &'static str;

    /// Returns up to `query.count` results ranked from position 1.
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError`] when the provider cannot answer; callers are
    /// expected to fall back to synthetic results.
    async fn search(&self, query: &SerpQuery) -> Result<Vec<SerpResult>, ProviderError>;
}
