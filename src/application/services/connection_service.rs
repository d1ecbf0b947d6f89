//! Connection tests for stored third-party credentials.

use std::sync::Arc;

use tracing::{info, warn};

use crate::domain::providers::{
    ConnectionChecker, ExternalApi, ProviderError, SerpProvider, SerpQuery,
};
use crate::infrastructure::credentials::{CredentialKey, CredentialStore};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConnectionTestError {
    #[error("{0} API connection test needs {1}")]
    MissingCredentials(ExternalApi, &'static str),

    #[error("{api} API connection test failed: {}", describe(.source))]
    Provider {
        api: ExternalApi,
        source: ProviderError,
    },
}

/// Turns provider status codes into advice for whoever configured the key.
fn describe(err: &ProviderError) -> String {
    match err {
        ProviderError::Status(400) => {
            "request rejected, check the search engine ID (HTTP 400)".to_owned()
        }
        ProviderError::Status(401 | 403) => {
            format!("the key is invalid or lacks permission ({err})")
        }
        ProviderError::Status(404) => {
            "endpoint not found, check the key and engine configuration (HTTP 404)".to_owned()
        }
        ProviderError::Status(429) => {
            "rate limited by the provider, try again later (HTTP 429)".to_owned()
        }
        other => other.to_string(),
    }
}

/// Makes one real request per test with the credentials in the store.
pub struct ConnectionService {
    live_serp: Arc<dyn SerpProvider>,
    checker: Arc<dyn ConnectionChecker>,
    credentials: Arc<CredentialStore>,
}

impl ConnectionService {
    pub fn new(
        live_serp: Arc<dyn SerpProvider>,
        checker: Arc<dyn ConnectionChecker>,
        credentials: Arc<CredentialStore>,
    ) -> Self {
        Self {
            live_serp,
            checker,
            credentials,
        }
    }

    /// Tests the stored credentials for `api`.
    ///
    /// # Errors
    ///
    /// Returns [`ConnectionTestError::MissingCredentials`] before any request
    /// if the needed keys are not stored.
    pub async fn test(&self, api: ExternalApi) -> Result<(), ConnectionTestError> {
        let result = match api {
            ExternalApi::GoogleSearch => {
                let credentials = self.credentials.google().await.ok_or(
                    ConnectionTestError::MissingCredentials(
                        api,
                        "a Google Search API key and search engine ID",
                    ),
                )?;
                let query = SerpQuery {
                    keyword: "test".to_owned(),
                    count: 1,
                    location: None,
                    credentials: Some(credentials),
                };
                self.live_serp.search(&query).await.map(drop)
            }
            ExternalApi::Youtube => {
                let key = self
                    .stored(CredentialKey::YoutubeApiKey, api, "a YouTube API key")
                    .await?;
                self.checker.check_youtube(&key).await
            }
            ExternalApi::Twitter => {
                let token = self
                    .stored(
                        CredentialKey::TwitterBearerToken,
                        api,
                        "a Twitter bearer token",
                    )
                    .await?;
                self.checker.check_twitter(&token).await
            }
        };

        match result {
            Ok(()) => {
                info!(%api, "API connection test succeeded");
                Ok(())
            }
            Err(source) => {
                warn!(%api, error = %source, "API connection test failed");
                Err(ConnectionTestError::Provider { api, source })
            }
        }
    }

    async fn stored(
        &self,
        key: CredentialKey,
        api: ExternalApi,
        needs: &'static str,
    ) -> Result<String, ConnectionTestError> {
        self.credentials
            .get(key)
            .await
            .ok_or(ConnectionTestError::MissingCredentials(api, needs))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::providers::{MockConnectionChecker, MockSerpProvider};

    fn store(seeds: &[(CredentialKey, &str)]) -> Arc<CredentialStore> {
        Arc::new(CredentialStore::with_seeds(
            seeds.iter().map(|(k, v)| (*k, (*v).to_owned())),
        ))
    }

    fn service(
        serp: MockSerpProvider,
        checker: MockConnectionChecker,
        credentials: Arc<CredentialStore>,
    ) -> ConnectionService {
        ConnectionService::new(Arc::new(serp), Arc::new(checker), credentials)
    }

    #[tokio::test]
    async fn test_google_search_runs_one_result_query() {
        let mut serp = MockSerpProvider::new();
        serp.expect_search()
            .withf(|q| {
                q.count == 1 && q.credentials.as_ref().is_some_and(|c| c.cx == "cx-1")
            })
            .times(1)
            .returning(|_| Ok(Vec::new()));

        let credentials = store(&[
            (CredentialKey::GoogleSearchApiKey, "key"),
            (CredentialKey::GoogleSearchCx, "cx-1"),
        ]);
        let result = service(serp, MockConnectionChecker::new(), credentials)
            .test(ExternalApi::GoogleSearch)
            .await;

        assert_eq!(result, Ok(()));
    }

    #[tokio::test]
    async fn test_google_search_without_engine_id_makes_no_request() {
        let mut serp = MockSerpProvider::new();
        serp.expect_search().never();

        let credentials = store(&[(CredentialKey::GoogleSearchApiKey, "key")]);
        let err = service(serp, MockConnectionChecker::new(), credentials)
            .test(ExternalApi::GoogleSearch)
            .await
            .unwrap_err();

        assert_eq!(
            err.to_string(),
            "google_search API connection test needs a Google Search API key and search engine ID"
        );
    }

    #[tokio::test]
    async fn test_youtube_uses_stored_key() {
        let mut checker = MockConnectionChecker::new();
        checker
            .expect_check_youtube()
            .withf(|key| key == "yt-key")
            .times(1)
            .returning(|_| Ok(()));

        let credentials = store(&[(CredentialKey::YoutubeApiKey, "yt-key")]);
        let result = service(MockSerpProvider::new(), checker, credentials)
            .test(ExternalApi::Youtube)
            .await;

        assert_eq!(result, Ok(()));
    }

    #[tokio::test]
    async fn test_twitter_status_errors_are_explained() {
        let mut checker = MockConnectionChecker::new();
        checker
            .expect_check_twitter()
            .returning(|_| Err(ProviderError::Status(429)));

        let credentials = store(&[(CredentialKey::TwitterBearerToken, "token")]);
        let err = service(MockSerpProvider::new(), checker, credentials)
            .test(ExternalApi::Twitter)
            .await
            .unwrap_err();

        assert_eq!(
            err.to_string(),
            "twitter API connection test failed: rate limited by the provider, try again later (HTTP 429)"
        );
    }

    #[test]
    fn test_describe_status_codes() {
        assert!(describe(&ProviderError::Status(403)).starts_with("the key is invalid"));
        assert!(describe(&ProviderError::Status(400)).contains("search engine ID"));
        assert!(describe(&ProviderError::Status(404)).contains("endpoint not found"));
        assert_eq!(
            describe(&ProviderError::Status(500)),
            "provider returned HTTP 500"
        );
        assert_eq!(
            describe(&ProviderError::Request("refused".into())),
            "request failed: refused"
        );
    }
}
