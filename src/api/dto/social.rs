//! DTOs for social content endpoints.

use serde::{Deserialize, Serialize};
use validator::Validate;

use super::not_blank;
use crate::domain::social::{EngagementPrediction, OptimizationReport, Platform};

#[derive(Debug, Deserialize, Validate)]
pub struct ContentOptimizerRequest {
    #[serde(default)]
    #[validate(custom(function = "not_blank"), length(max = 20000))]
    pub content: String,

    pub platform: Platform,

    pub target_audience: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ContentOptimizerResponse {
    #[serde(flatten)]
    pub report: OptimizationReport,
    pub engagement_prediction: EngagementPrediction,
}
