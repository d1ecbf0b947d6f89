//! Traits for collaborators that reach outside the process.
//!
//! The SEO and URL tools never call the network directly; they go through
//! these traits so that services can be tested with mocks and so that every
//! remote call has a synthetic fallback.
//!
//! # Available Providers
//!
//! - [`PageFetcher`] - HTTP page fetching and status probing
//! - [`SerpProvider`] - search engine result pages
//! - [`ConnectionChecker`] - credential checks for YouTube and Twitter
//!
//! Implementations live in `crate::infrastructure`; mock implementations are
//! generated via `mockall` for unit tests.

pub mod connection_checker;
pub mod page_fetcher;
pub mod serp_provider;

pub use connection_checker::{ConnectionChecker, ExternalApi, UnsupportedApi};
pub use page_fetcher::{FetchError, FetchedPage, PageFetcher, Probe};
pub use serp_provider::{GoogleCredentials, ProviderError, SerpProvider, SerpQuery, SerpResult};

#[cfg(test)]
pub use connection_checker::MockConnectionChecker;
#[cfg(test)]
pub use page_fetcher::MockPageFetcher;
#[cfg(test)]
pub use serp_provider::MockSerpProvider;

/// Where a piece of SEO data came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataSource {
    Live,
    Synthetic,
}

/// Data tagged with its [`DataSource`].
#[derive(Debug, Clone, PartialEq)]
pub struct Sourced<T> {
    pub data: T,
    pub source: DataSource,
}

impl<T> Sourced<T> {
    pub fn live(data: T) -> Self {
        Self {
            data,
            source: DataSource::Live,
        }
    }

    pub fn synthetic(data: T) -> Self {
        Self {
            data,
            source: DataSource::Synthetic,
        }
    }

    pub fn is_synthetic(&self) -> bool {
        self.source == DataSource::Synthetic
    }
}
