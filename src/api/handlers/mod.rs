//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to one `/api` route group.

pub mod api_config;
pub mod export;
pub mod health;
pub mod sem;
pub mod seo;
pub mod social;
pub mod text;
pub mod url;

pub use api_config::{
    config_status_handler, delete_key_handler, set_keys_handler, test_connection_handler,
};
pub use export::{csv_handler, json_handler, report_handler};
pub use health::{api_health_handler, health_handler};
pub use sem::{ads_handler, batch_ads_handler, keywords_handler};
pub use seo::{crawl_handler, robots_handler, serp_handler, sitemap_handler};
pub use social::content_optimizer_handler;
pub use text::{extract_handler, sentiment_handler, stats_handler, word_frequency_handler};
pub use url::{cleanup_handler, domain_analysis_handler, parse_handler, validate_handler};
