//! Domain layer: the text, keyword and marketing-tool logic.
//!
//! Everything here is synchronous and free of I/O except the provider
//! traits, which describe the network collaborators implemented in
//! [`crate::infrastructure`].
//!
//! # Architecture
//!
//! - [`text`] - tokenizer, word frequency, text statistics, sentiment
//! - [`extract`] - URL/email/hashtag/mention/number extraction
//! - [`keywords`] - seed × modifier keyword combination
//! - [`ads`] - ad headline templating
//! - [`urls`] - URL parsing, tracking cleanup, domain grouping
//! - [`seo`] - page SEO extraction, robots.txt and sitemap parsing
//! - [`social`] - post optimization against platform norms
//! - [`export`] - CSV, JSON and report rendering
//! - [`providers`] - page fetching and SERP provider traits

pub mod ads;
pub mod export;
pub mod extract;
pub mod keywords;
pub mod providers;
pub mod seo;
pub mod social;
pub mod text;
pub mod urls;
