//! DTOs for keyword and ad copy endpoints.

use serde::{Deserialize, Serialize};
use validator::Validate;

use super::{any_not_blank, not_blank};
use crate::domain::ads::AdVariant;

/// Keyword responses are capped at this many candidates.
pub const MAX_KEYWORDS: usize = 500;

fn default_true() -> bool {
    true
}

fn default_max_length() -> usize {
    30
}

#[derive(Debug, Deserialize, Validate)]
pub struct KeywordsRequest {
    #[validate(length(min = 1, max = 100), custom(function = "any_not_blank"))]
    pub seeds: Vec<String>,

    #[serde(default)]
    #[validate(length(max = 100))]
    pub modifiers: Vec<String>,

    /// Appends the built-in commercial modifiers to `modifiers`.
    #[serde(default = "default_true")]
    pub include_common_modifiers: bool,
}

#[derive(Debug, Deserialize, Validate)]
pub struct AdRequest {
    #[serde(default)]
    #[validate(custom(function = "not_blank"))]
    pub product_name: String,

    #[serde(default)]
    #[validate(custom(function = "not_blank"))]
    pub template: String,

    #[serde(default = "default_max_length")]
    #[validate(range(min = 3, max = 500))]
    pub max_length: usize,
}

#[derive(Debug, Deserialize, Validate)]
pub struct BatchAdRequest {
    #[validate(length(min = 1, max = 100), custom(function = "any_not_blank"))]
    pub products: Vec<String>,

    #[serde(default)]
    #[validate(custom(function = "not_blank"))]
    pub template: String,

    #[serde(default = "default_max_length")]
    #[validate(range(min = 3, max = 500))]
    pub max_length: usize,
}

#[derive(Debug, Serialize)]
pub struct BatchAdItem {
    pub product: String,
    #[serde(flatten)]
    pub variant: AdVariant,
}
