//! Provider trait for fetching web pages.

use async_trait::async_trait;
use url::Url;

/// A fetched document. Any HTTP status is a successful fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchedPage {
    pub status: u16,
    /// URL after redirects.
    pub final_url: String,
    pub body: String,
}

/// Outcome of a status probe, body discarded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Probe {
    pub status: u16,
    pub final_url: String,
}

impl Probe {
    /// 2xx and 3xx responses count as reachable.
    pub fn is_reachable(&self) -> bool {
        (200..400).contains(&self.status)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FetchError {
    #[error("request timed out")]
    Timeout,

    #[error("could not connect: {0}")]
    Connect(String),

    #[error("request failed: {0}")]
    Request(String),

    #[error("response body exceeds {0} bytes")]
    TooLarge(usize),

    #[error("refusing to fetch non-public host {0}")]
    Blocked(String),
}

/// Fetches pages over HTTP.
///
/// # Implementations
///
/// - [`crate::infrastructure::http::HttpPageFetcher`] - reqwest client with
///   bounded timeouts, a body size cap and public hosts only
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PageFetcher: Send + Sync {
    /// Downloads the document at `url`, following redirects.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError`] when no response was received.
    async fn fetch(&self, url: &Url) -> Result<FetchedPage, FetchError>;

    /// Requests `url` only to learn its status and final location.
    ///
    /// Uses the shorter validation timeout.
    async fn probe(&self, url: &Url) -> Result<Probe, FetchError>;
}
