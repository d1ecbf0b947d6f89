//! Outbound HTTP.

mod connection_checker;
mod page_fetcher;

pub use connection_checker::{HttpConnectionChecker, TWITTER_ME_ENDPOINT, YOUTUBE_SEARCH_ENDPOINT};
pub use page_fetcher::{HttpPageFetcher, MAX_BODY_BYTES, USER_AGENT};
