//! Browser front-end.
//!
//! A single server-rendered page (Askama) whose forms call the JSON API
//! from `static/app.js`.
//!
//! # Modules
//!
//! - [`handlers`] - Page rendering handlers
//! - [`routes`] - Front-end route configuration

pub mod handlers;
pub mod routes;
