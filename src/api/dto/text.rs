//! DTOs for text analysis endpoints.

use serde::{Deserialize, Serialize};
use validator::Validate;

use super::not_blank;
use crate::domain::extract::{Entity, EntityKind, EntityReport};
use crate::domain::text::{FrequencyEntry, WordStatistics};

fn default_min_length() -> usize {
    2
}

fn default_top_words() -> usize {
    20
}

#[derive(Debug, Deserialize, Validate)]
pub struct WordFrequencyRequest {
    #[serde(default)]
    #[validate(custom(function = "not_blank"))]
    pub text: String,

    /// Shortest token counted, in characters.
    #[serde(default = "default_min_length")]
    #[validate(range(min = 1, max = 100))]
    pub min_length: usize,

    #[serde(default = "default_top_words")]
    #[validate(range(min = 1, max = 1000))]
    pub top_words: usize,
}

#[derive(Debug, Serialize)]
pub struct WordFrequencyResponse {
    pub words: Vec<FrequencyEntry>,
    pub statistics: WordStatistics,
}

/// Which extractor `/extract` runs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExtractType {
    #[default]
    All,
    Urls,
    Emails,
    Hashtags,
    Mentions,
    Numbers,
}

impl ExtractType {
    /// `None` for [`ExtractType::All`].
    pub fn entity_kind(self) -> Option<EntityKind> {
        match self {
            ExtractType::All => None,
            ExtractType::Urls => Some(EntityKind::Url),
            ExtractType::Emails => Some(EntityKind::Email),
            ExtractType::Hashtags => Some(EntityKind::Hashtag),
            ExtractType::Mentions => Some(EntityKind::Mention),
            ExtractType::Numbers => Some(EntityKind::Number),
        }
    }
}

#[derive(Debug, Deserialize, Validate)]
pub struct ExtractRequest {
    #[serde(default)]
    #[validate(custom(function = "not_blank"))]
    pub text: String,

    #[serde(default, rename = "type")]
    pub kind: ExtractType,
}

/// Body of `/stats` and `/sentiment`.
#[derive(Debug, Deserialize, Validate)]
pub struct TextRequest {
    #[serde(default)]
    #[validate(custom(function = "not_blank"))]
    pub text: String,
}

/// `/extract` payload: grouped entities for one kind, or the full report.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum ExtractResponse {
    Single(Vec<Entity>),
    All(EntityReport),
}
