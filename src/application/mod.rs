//! Application layer services.
//!
//! Services consume provider traits and give handlers an API that never
//! touches the network directly. The pure text and keyword tools need no
//! service; handlers call [`crate::domain`] for those.
//!
//! # Available Services
//!
//! - [`services::seo_service::SeoService`] - crawl, SERP, sitemap and robots with fallback
//! - [`services::url_service::UrlService`] - structural and live URL validation
//! - [`services::connection_service::ConnectionService`] - credential checks against live APIs

pub mod services;
