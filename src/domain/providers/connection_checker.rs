//! Credential checks against third-party APIs.

use std::fmt;
use std::str::FromStr;

use async_trait::async_trait;

use super::ProviderError;

/// APIs whose stored credentials can be tested from the config page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExternalApi {
    GoogleSearch,
    Youtube,
    Twitter,
}

impl ExternalApi {
    pub fn as_str(self) -> &'static str {
        match self {
            ExternalApi::GoogleSearch => "google_search",
            ExternalApi::Youtube => "youtube",
            ExternalApi::Twitter => "twitter",
        }
    }
}

impl fmt::Display for ExternalApi {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unsupported API: {0}")]
pub struct UnsupportedApi(pub String);

impl FromStr for ExternalApi {
    type Err = UnsupportedApi;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "google_search" => Ok(ExternalApi::GoogleSearch),
            "youtube" => Ok(ExternalApi::Youtube),
            "twitter" => Ok(ExternalApi::Twitter),
            other => Err(UnsupportedApi(other.to_owned())),
        }
    }
}

/// Makes one cheap authenticated request to confirm a credential works.
///
/// Google Search is checked through [`super::SerpProvider`] instead.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ConnectionChecker: Send + Sync {
    /// Searches YouTube for a single video with `api_key`.
    async fn check_youtube(&self, api_key: &str) -> Result<(), ProviderError>;

    /// Looks up the authenticated Twitter user with `bearer_token`.
    async fn check_twitter(&self, bearer_token: &str) -> Result<(), ProviderError>;
}
