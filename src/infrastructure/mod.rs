//! Infrastructure layer for external integrations.
//!
//! Implements the provider traits defined in [`crate::domain::providers`]
//! and holds process-level resources.
//!
//! # Modules
//!
//! - [`http`] - reqwest page fetcher and API connection checks
//! - [`serp`] - Google Custom Search and synthetic SERP providers
//! - [`synthetic`] - fallback crawl, sitemap and robots data
//! - [`credentials`] - in-memory API credential store

pub mod credentials;
pub mod http;
pub mod serp;
pub mod synthetic;
