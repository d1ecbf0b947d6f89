//! reqwest-backed [`ConnectionChecker`].

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder};
use tracing::debug;

use crate::domain::providers::{ConnectionChecker, ProviderError};

pub const YOUTUBE_SEARCH_ENDPOINT: &str = "https://www.googleapis.com/youtube/v3/search";
pub const TWITTER_ME_ENDPOINT: &str = "https://api.twitter.com/2/users/me";

pub struct HttpConnectionChecker {
    client: Client,
    timeout: Duration,
    youtube_endpoint: String,
    twitter_endpoint: String,
}

impl HttpConnectionChecker {
    pub fn new(client: Client, timeout: Duration) -> Self {
        Self {
            client,
            timeout,
            youtube_endpoint: YOUTUBE_SEARCH_ENDPOINT.to_owned(),
            twitter_endpoint: TWITTER_ME_ENDPOINT.to_owned(),
        }
    }

    /// Points both checks at other base URLs.
    pub fn with_endpoints(
        mut self,
        youtube: impl Into<String>,
        twitter: impl Into<String>,
    ) -> Self {
        self.youtube_endpoint = youtube.into();
        self.twitter_endpoint = twitter.into();
        self
    }

    async fn send(&self, request: RequestBuilder) -> Result<(), ProviderError> {
        let response = request
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| ProviderError::Request(e.without_url().to_string()))?;

        let status = response.status();
        debug!(status = status.as_u16(), "Connection check answered");
        if status.is_success() {
            Ok(())
        } else {
            Err(ProviderError::Status(status.as_u16()))
        }
    }
}

#[async_trait]
impl ConnectionChecker for HttpConnectionChecker {
    async fn check_youtube(&self, api_key: &str) -> Result<(), ProviderError> {
        let request = self.client.get(&self.youtube_endpoint).query(&[
            ("part", "snippet"),
            ("q", "test"),
            ("type", "video"),
            ("maxResults", "1"),
            ("key", api_key),
        ]);
        self.send(request).await
    }

    async fn check_twitter(&self, bearer_token: &str) -> Result<(), ProviderError> {
        let request = self
            .client
            .get(&self.twitter_endpoint)
            .bearer_auth(bearer_token);
        self.send(request).await
    }
}
