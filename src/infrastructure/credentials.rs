//! Process-lifetime store for third-party API credentials.
//!
//! Keys are held in memory only and reset on restart. The store is shared
//! through [`crate::state::AppState`].

use std::collections::HashMap;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;
use tracing::info;

use crate::domain::providers::GoogleCredentials;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CredentialKey {
    GoogleSearchApiKey,
    GoogleSearchCx,
    TwitterBearerToken,
    YoutubeApiKey,
    KnowledgeGraphApiKey,
}

impl CredentialKey {
    pub const ALL: [CredentialKey; 5] = [
        CredentialKey::GoogleSearchApiKey,
        CredentialKey::GoogleSearchCx,
        CredentialKey::TwitterBearerToken,
        CredentialKey::YoutubeApiKey,
        CredentialKey::KnowledgeGraphApiKey,
    ];

    /// Field name used in requests and in the DELETE path.
    pub fn as_str(self) -> &'static str {
        match self {
            CredentialKey::GoogleSearchApiKey => "google_search_api_key",
            CredentialKey::GoogleSearchCx => "google_search_cx",
            CredentialKey::TwitterBearerToken => "twitter_bearer_token",
            CredentialKey::YoutubeApiKey => "youtube_api_key",
            CredentialKey::KnowledgeGraphApiKey => "knowledge_graph_api_key",
        }
    }

    /// Name of the API this key unlocks, as reported by the status endpoint.
    pub fn api_name(self) -> &'static str {
        match self {
            CredentialKey::GoogleSearchApiKey => "google_search",
            CredentialKey::GoogleSearchCx => "google_search_cx",
            CredentialKey::TwitterBearerToken => "twitter_bearer",
            CredentialKey::YoutubeApiKey => "youtube_api",
            CredentialKey::KnowledgeGraphApiKey => "knowledge_graph",
        }
    }

    /// Environment variable that seeds this key at startup.
    pub fn env_var(self) -> &'static str {
        match self {
            CredentialKey::GoogleSearchApiKey => "GOOGLE_SEARCH_API_KEY",
            CredentialKey::GoogleSearchCx => "GOOGLE_SEARCH_CX",
            CredentialKey::TwitterBearerToken => "TWITTER_BEARER_TOKEN",
            CredentialKey::YoutubeApiKey => "YOUTUBE_API_KEY",
            CredentialKey::KnowledgeGraphApiKey => "KNOWLEDGE_GRAPH_API_KEY",
        }
    }
}

impl std::fmt::Display for CredentialKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown credential key: {0}")]
pub struct UnknownCredentialKey(pub String);

impl FromStr for CredentialKey {
    type Err = UnknownCredentialKey;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CredentialKey::ALL
            .into_iter()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| UnknownCredentialKey(s.to_owned()))
    }
}

/// Which APIs currently have a key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CredentialStatus {
    pub google_search: bool,
    pub google_search_cx: bool,
    pub twitter_bearer: bool,
    pub youtube_api: bool,
    pub knowledge_graph: bool,
}

#[derive(Debug, Default)]
pub struct CredentialStore {
    keys: RwLock<HashMap<CredentialKey, String>>,
}

impl CredentialStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-filled with `seeds`. Blank values are skipped.
    pub fn with_seeds(seeds: impl IntoIterator<Item = (CredentialKey, String)>) -> Self {
        let keys: HashMap<_, _> = seeds
            .into_iter()
            .filter_map(|(key, value)| {
                let value = value.trim();
                (!value.is_empty()).then(|| (key, value.to_owned()))
            })
            .collect();

        if !keys.is_empty() {
            info!(count = keys.len(), "Seeded credential store from environment");
        }

        Self {
            keys: RwLock::new(keys),
        }
    }

    pub async fn get(&self, key: CredentialKey) -> Option<String> {
        self.keys.read().await.get(&key).cloned()
    }

    /// Stores every non-blank value, trimmed. Returns how many were stored.
    pub async fn set_many(&self, values: impl IntoIterator<Item = (CredentialKey, String)>) -> usize {
        let mut keys = self.keys.write().await;
        let mut updated = 0;
        for (key, value) in values {
            let value = value.trim();
            if !value.is_empty() {
                keys.insert(key, value.to_owned());
                updated += 1;
            }
        }
        updated
    }

    /// Removes `key`. Returns `false` if it was not set.
    pub async fn remove(&self, key: CredentialKey) -> bool {
        self.keys.write().await.remove(&key).is_some()
    }

    /// Keys currently set, in [`CredentialKey::ALL`] order.
    pub async fn configured(&self) -> Vec<CredentialKey> {
        let keys = self.keys.read().await;
        CredentialKey::ALL
            .into_iter()
            .filter(|key| keys.contains_key(key))
            .collect()
    }

    pub async fn status(&self) -> CredentialStatus {
        let keys = self.keys.read().await;
        CredentialStatus {
            google_search: keys.contains_key(&CredentialKey::GoogleSearchApiKey),
            google_search_cx: keys.contains_key(&CredentialKey::GoogleSearchCx),
            twitter_bearer: keys.contains_key(&CredentialKey::TwitterBearerToken),
            youtube_api: keys.contains_key(&CredentialKey::YoutubeApiKey),
            knowledge_graph: keys.contains_key(&CredentialKey::KnowledgeGraphApiKey),
        }
    }

    /// Google credentials, if both the key and the engine id are set.
    pub async fn google(&self) -> Option<GoogleCredentials> {
        let keys = self.keys.read().await;
        Some(GoogleCredentials {
            api_key: keys.get(&CredentialKey::GoogleSearchApiKey)?.clone(),
            cx: keys.get(&CredentialKey::GoogleSearchCx)?.clone(),
        })
    }
}
