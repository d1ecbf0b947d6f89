#![allow(dead_code)]

use adtools_web::api::routes::api_routes;
use adtools_web::domain::providers::{
    ConnectionChecker, FetchError, FetchedPage, PageFetcher, Probe, ProviderError, SerpProvider,
    SerpQuery, SerpResult,
};
use adtools_web::infrastructure::credentials::CredentialStore;
use adtools_web::state::AppState;
use async_trait::async_trait;
use axum::Router;
use axum_test::TestServer;
use std::collections::HashMap;
use std::sync::Arc;
use url::Url;

/// Serves canned pages keyed by full URL; unknown URLs fail to connect.
#[derive(Default)]
pub struct StaticFetcher {
    pages: HashMap<String, (u16, String)>,
    probes: HashMap<String, Probe>,
}

impl StaticFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_page(mut self, url: &str, status: u16, body: &str) -> Self {
        self.pages.insert(url.to_string(), (status, body.to_string()));
        self
    }

    pub fn with_probe(mut self, url: &str, status: u16, final_url: &str) -> Self {
        self.probes.insert(
            url.to_string(),
            Probe {
                status,
                final_url: final_url.to_string(),
            },
        );
        self
    }
}

#[async_trait]
impl PageFetcher for StaticFetcher {
    async fn fetch(&self, url: &Url) -> Result<FetchedPage, FetchError> {
        self.pages
            .get(url.as_str())
            .map(|(status, body)| FetchedPage {
                status: *status,
                final_url: url.to_string(),
                body: body.clone(),
            })
            .ok_or_else(|| FetchError::Connect(format!("no canned page for {url}")))
    }

    async fn probe(&self, url: &Url) -> Result<Probe, FetchError> {
        self.probes
            .get(url.as_str())
            .cloned()
            .ok_or_else(|| FetchError::Connect(format!("no canned probe for {url}")))
    }
}

/// Every request fails as if the network were down.
pub struct FailingFetcher;

#[async_trait]
impl PageFetcher for FailingFetcher {
    async fn fetch(&self, _url: &Url) -> Result<FetchedPage, FetchError> {
        Err(FetchError::Timeout)
    }

    async fn probe(&self, _url: &Url) -> Result<Probe, FetchError> {
        Err(FetchError::Timeout)
    }
}

/// Live search provider that always fails.
pub struct FailingSerp;

#[async_trait]
impl SerpProvider for FailingSerp {
    fn name(&self) -> &'static str {
        "Google"
    }

    async fn search(&self, _query: &SerpQuery) -> Result<Vec<SerpResult>, ProviderError> {
        Err(ProviderError::Status(403))
    }
}

/// Live search provider returning one fixed result when credentials are set.
pub struct StaticSerp;

#[async_trait]
impl SerpProvider for StaticSerp {
    fn name(&self) -> &'static str {
        "Google"
    }

    async fn search(&self, query: &SerpQuery) -> Result<Vec<SerpResult>, ProviderError> {
        if query.credentials.is_none() {
            return Err(ProviderError::MissingCredentials);
        }
        Ok(vec![SerpResult {
            position: 1,
            title: format!("Live result for {}", query.keyword),
            url: "https://live.example.com/".to_string(),
            snippet: "From the live provider".to_string(),
            domain: "live.example.com".to_string(),
        }])
    }
}

/// Accepts only the secret `"valid"`; anything else is rejected with 401.
pub struct KeyChecker;

impl KeyChecker {
    fn verdict(secret: &str) -> Result<(), ProviderError> {
        if secret == "valid" {
            Ok(())
        } else {
            Err(ProviderError::Status(401))
        }
    }
}

#[async_trait]
impl ConnectionChecker for KeyChecker {
    async fn check_youtube(&self, api_key: &str) -> Result<(), ProviderError> {
        Self::verdict(api_key)
    }

    async fn check_twitter(&self, bearer_token: &str) -> Result<(), ProviderError> {
        Self::verdict(bearer_token)
    }
}

pub fn create_test_state(
    fetcher: impl PageFetcher + 'static,
    serp: impl SerpProvider + 'static,
) -> AppState {
    AppState::new(
        Arc::new(fetcher),
        Arc::new(serp),
        Arc::new(KeyChecker),
        Arc::new(CredentialStore::new()),
    )
}

/// API routes nested under `/api`, without rate limiting.
pub fn create_test_server(state: AppState) -> TestServer {
    let app = Router::new().nest("/api", api_routes()).with_state(state);
    TestServer::new(app).unwrap()
}

/// Server with no reachable network and a failing live search provider.
pub fn offline_server() -> TestServer {
    create_test_server(create_test_state(FailingFetcher, FailingSerp))
}
