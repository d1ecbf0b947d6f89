//! REST API layer for HTTP request/response handling.
//!
//! Translates JSON requests into domain calls and wraps every result in
//! [`dto::ApiResponse`].
//!
//! # Modules
//!
//! - [`dto`] - Request and response types
//! - [`extract`] - JSON body extractor with envelope-shaped rejections
//! - [`handlers`] - HTTP request handlers
//! - [`middleware`] - Rate limiting and request tracing
//! - [`routes`] - Route configuration

pub mod dto;
pub mod extract;
pub mod handlers;
pub mod middleware;
pub mod routes;
