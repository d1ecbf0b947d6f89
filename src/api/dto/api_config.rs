//! DTOs for credential management.

use serde::{Deserialize, Serialize};

use crate::infrastructure::credentials::{CredentialKey, CredentialStatus};

#[derive(Debug, Serialize)]
pub struct ConfigStatusResponse {
    pub configured_apis: Vec<&'static str>,
    pub missing_apis: Vec<&'static str>,
    pub status: CredentialStatus,
}

/// Any subset of keys; absent and blank values are ignored.
#[derive(Default, Deserialize)]
pub struct SetKeysRequest {
    pub google_search_api_key: Option<String>,
    pub google_search_cx: Option<String>,
    pub twitter_bearer_token: Option<String>,
    pub youtube_api_key: Option<String>,
    pub knowledge_graph_api_key: Option<String>,
}

impl SetKeysRequest {
    pub fn into_pairs(self) -> Vec<(CredentialKey, String)> {
        [
            (CredentialKey::GoogleSearchApiKey, self.google_search_api_key),
            (CredentialKey::GoogleSearchCx, self.google_search_cx),
            (CredentialKey::TwitterBearerToken, self.twitter_bearer_token),
            (CredentialKey::YoutubeApiKey, self.youtube_api_key),
            (CredentialKey::KnowledgeGraphApiKey, self.knowledge_graph_api_key),
        ]
        .into_iter()
        .filter_map(|(key, value)| value.map(|v| (key, v)))
        .collect()
    }
}

#[derive(Debug, Serialize)]
pub struct SetKeysResponse {
    pub updated_keys: usize,
    /// Key names currently set.
    pub configured_apis: Vec<&'static str>,
}
