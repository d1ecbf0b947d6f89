//! SERP providers.
//!
//! - [`GoogleSerpProvider`] - live results, needs credentials
//! - [`SyntheticSerpProvider`] - fallback, never fails

mod google;
mod synthetic;

pub use google::{GOOGLE_SEARCH_ENDPOINT, GoogleSerpProvider, MAX_RESULTS_PER_REQUEST};
pub use synthetic::{MAX_SYNTHETIC_RESULTS, SyntheticSerpProvider};
