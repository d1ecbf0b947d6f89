//! DTOs for URL tool endpoints.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::application::services::{UrlCheck, ValidationMode, ValidationStatistics};
use crate::domain::urls::{ParseStatistics, ParsedUrl};

/// Body of `/parse`, `/cleanup` and `/domain-analysis`.
#[derive(Debug, Deserialize, Validate)]
pub struct UrlListRequest {
    #[validate(length(min = 1, max = 100, message = "must contain between 1 and 100 URLs"))]
    pub urls: Vec<String>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct ValidateUrlsRequest {
    #[validate(length(min = 1, max = 50, message = "must contain between 1 and 50 URLs"))]
    pub urls: Vec<String>,

    #[serde(default, rename = "type")]
    pub mode: ValidationMode,
}

#[derive(Debug, Serialize)]
pub struct ParseUrlsResponse {
    pub urls: Vec<ParsedUrl>,
    pub statistics: ParseStatistics,
}

#[derive(Debug, Serialize)]
pub struct ValidateUrlsResponse {
    pub urls: Vec<UrlCheck>,
    pub statistics: ValidationStatistics,
}
