//! # adtools-web
//!
//! Marketing analytics toolbox served over a JSON API: word frequency and
//! entity extraction, keyword expansion and ad copy templating, URL
//! utilities, lightweight SEO helpers and CSV/JSON/report export.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Pure text, keyword, URL, SEO, social and export
//!   logic plus the provider traits
//! - **Application Layer** ([`application`]) - Services that call providers
//!   and fall back to synthetic data
//! - **Infrastructure Layer** ([`infrastructure`]) - HTTP fetcher, search
//!   providers and the in-memory credential store
//! - **API Layer** ([`api`]) - REST handlers, DTOs and middleware
//! - **Web Layer** ([`web`]) - Single-page front-end
//!
//! ## Quick Start
//!
//! ```bash
//! export LISTEN="127.0.0.1:3000"              # Optional
//! export GOOGLE_SEARCH_API_KEY="..."          # Optional, live SERP data
//! export GOOGLE_SEARCH_CX="..."
//!
//! cargo run
//! ```
//!
//! The text and keyword core also runs offline through the `adtools` binary:
//!
//! ```bash
//! echo "buy shoes buy boots" | cargo run --bin adtools -- words
//! cargo run --bin adtools -- keywords shoes --modifier buy
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;

pub mod config;
pub mod server;

pub mod routes;
pub mod web;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::api::dto::ApiResponse;
    pub use crate::application::services::{ConnectionService, SeoService, UrlService};
    pub use crate::domain::providers::{ConnectionChecker, PageFetcher, SerpProvider};
    pub use crate::error::AppError;
    pub use crate::infrastructure::credentials::{CredentialKey, CredentialStore};
    pub use crate::state::AppState;
}
