//! Shared application state.

use std::sync::Arc;

use crate::application::services::{ConnectionService, SeoService, UrlService};
use crate::domain::providers::{ConnectionChecker, PageFetcher, SerpProvider};
use crate::infrastructure::credentials::CredentialStore;

/// Services and stores injected into every handler.
///
/// Cloning is cheap; every field is reference counted.
#[derive(Clone)]
pub struct AppState {
    pub seo_service: Arc<SeoService>,
    pub url_service: Arc<UrlService>,
    pub connection_service: Arc<ConnectionService>,
    pub credentials: Arc<CredentialStore>,
}

impl AppState {
    /// Wires the services around one fetcher and one live SERP provider.
    pub fn new(
        fetcher: Arc<dyn PageFetcher>,
        live_serp: Arc<dyn SerpProvider>,
        checker: Arc<dyn ConnectionChecker>,
        credentials: Arc<CredentialStore>,
    ) -> Self {
        Self {
            seo_service: Arc::new(SeoService::new(
                fetcher.clone(),
                live_serp.clone(),
                credentials.clone(),
            )),
            url_service: Arc::new(UrlService::new(fetcher)),
            connection_service: Arc::new(ConnectionService::new(
                live_serp,
                checker,
                credentials.clone(),
            )),
            credentials,
        }
    }
}
