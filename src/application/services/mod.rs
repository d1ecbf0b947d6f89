//! Services coordinating providers for the HTTP handlers.

pub mod connection_service;
pub mod seo_service;
pub mod url_service;

pub use connection_service::{ConnectionService, ConnectionTestError};
pub use seo_service::SeoService;
pub use url_service::{UrlCheck, UrlService, ValidationMode, ValidationStatistics};
